//! PowerShell quoting.

/// Besides the cmd-style separators, PowerShell expands `$`, `` ` `` and `@`,
/// and treats `{}`, `#` and both quote characters specially.
const SPECIAL: &str = "()!^&<>|,;'\"$`{}@#";

/// Single-quote `arg` when it holds whitespace or a PowerShell metacharacter,
/// doubling any embedded `'`.
pub fn quote(arg: &str) -> String {
    if arg.is_empty() {
        return "''".to_string();
    }
    if arg.chars().any(|c| c.is_whitespace() || SPECIAL.contains(c)) {
        return format!("'{}'", arg.replace('\'', "''"));
    }
    arg.to_string()
}
