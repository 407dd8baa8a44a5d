//! Windows `cmd.exe` / batch quoting.

const SPECIAL: &str = "()%!^&<>|,;\"";

/// Double-quote `arg` when it holds whitespace or a cmd metacharacter,
/// doubling any embedded `"`.
///
/// A batch command ends at the line break, so each `\r\n`, `\r` or `\n` is
/// folded into a single space first.
pub fn quote(arg: &str) -> String {
    if arg.is_empty() {
        return r#""""#.to_string();
    }
    let arg = fold_line_breaks(arg);
    if arg.chars().any(|c| c.is_whitespace() || SPECIAL.contains(c)) {
        return format!("\"{}\"", arg.replace('"', r#""""#));
    }
    arg
}

fn fold_line_breaks(arg: &str) -> String {
    arg.replace("\r\n", " ").replace(['\r', '\n'], " ")
}

/// Inside a `.bat` file cmd.exe reads `%%` as a literal `%`.
pub fn escape_percent(line: &str) -> String {
    line.replace('%', "%%")
}
