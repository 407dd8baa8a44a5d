//! Convert a browser's "copy as cURL" command into a Kodi `.strm` stream
//! descriptor and an optional yt-dlp replay script.

pub mod config;
pub mod convert;
pub mod curl;
pub mod error;
pub mod input;
pub mod logging;
pub mod output;
pub mod sanitize;
pub mod script;
pub mod strm;
pub mod ytdlp;

#[cfg(test)]
mod test_util;

pub use convert::{Conversion, ConvertOptions, Script, convert};
pub use curl::{ParsedCommand, parse_curl};
pub use error::{Error, Result};
