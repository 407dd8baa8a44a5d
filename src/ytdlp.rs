//! yt-dlp command lines replaying the captured request.

use crate::curl::HeaderMap;

pub const PROGRAM: &str = "yt-dlp";
pub const HEADER_FLAG: &str = "--add-header";
pub const OUTPUT_FLAG: &str = "-o";
/// yt-dlp output template placeholder; written out literally.
pub const EXT_TEMPLATE: &str = "%(ext)s";

/// Build the yt-dlp argument vector, program name first.
///
/// Each header becomes `--add-header "Name: value"` in map order, then the
/// URL, then `-o <output_name>.%(ext)s` when an output name is given.
pub fn ytdlp_args(url: &str, headers: &HeaderMap, output_name: Option<&str>) -> Vec<String> {
    let mut args = vec![PROGRAM.to_string()];
    for (name, value) in headers.iter() {
        args.push(HEADER_FLAG.to_string());
        args.push(format!("{name}: {value}"));
    }
    args.push(url.to_string());
    if let Some(output_name) = output_name {
        args.push(OUTPUT_FLAG.to_string());
        args.push(format!("{output_name}.{EXT_TEMPLATE}"));
    }
    args
}
