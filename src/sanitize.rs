//! Filesystem-safe base names for the generated artifacts.

/// Base name used when a label sanitizes to nothing.
pub const DEFAULT_BASE_NAME: &str = "output";

const RESERVED: [char; 9] = ['\\', '/', '*', '?', ':', '"', '<', '>', '|'];

/// Replaces `\ / * ? : " < > |` with `_`, falling back to [`DEFAULT_BASE_NAME`]
/// for an empty result.
///
/// Idempotent: `sanitize_filename(&sanitize_filename(x)) == sanitize_filename(x)`.
pub fn sanitize_filename(name: &str) -> String {
    let cleaned: String = name
        .chars()
        .map(|c| if RESERVED.contains(&c) { '_' } else { c })
        .collect();

    if cleaned.is_empty() {
        DEFAULT_BASE_NAME.to_string()
    } else {
        cleaned
    }
}

/// Drops the extension of the last path segment, if it has one.
///
/// Leading dots do not start an extension, so `.mp4` is kept as is.
pub fn strip_extension(name: &str) -> &str {
    let segment_start = name.rfind(['/', '\\']).map_or(0, |idx| idx + 1);
    let segment = &name[segment_start..];
    let leading_dots = segment.len() - segment.trim_start_matches('.').len();

    match segment.rfind('.') {
        Some(dot) if dot > leading_dots => &name[..segment_start + dot],
        _ => name,
    }
}

/// Turns a user label such as a stream title into an output base name:
/// `"movie.mp4"` becomes `"movie"`.
pub fn base_name(label: &str) -> String {
    sanitize_filename(strip_extension(label))
}
