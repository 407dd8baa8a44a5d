//! Text-in, artifacts-out conversion pipeline.
//!
//! Everything is computed before anything touches the filesystem, so a failure
//! here never leaves partial output behind.

use crate::curl::{HeaderMap, HeaderPolicy, parse_curl};
use crate::error::{Error, Result};
use crate::sanitize::{DEFAULT_BASE_NAME, sanitize_filename};
use crate::script::ScriptDialect;
use crate::strm::strm_content;
use crate::ytdlp::ytdlp_args;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertOptions {
    pub header_policy: HeaderPolicy,
    /// Base name shared by the `.strm` file and the script.
    pub base_name: String,
    pub emit_downloader_script: bool,
    pub script_dialect: ScriptDialect,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            header_policy: HeaderPolicy::default(),
            base_name: DEFAULT_BASE_NAME.to_string(),
            emit_downloader_script: false,
            script_dialect: ScriptDialect::host_default(),
        }
    }
}

/// A rendered yt-dlp script.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Script {
    pub dialect: ScriptDialect,
    /// The command as one line, for printing.
    pub command: String,
    /// Full file contents.
    pub contents: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversion {
    pub base_name: String,
    pub url: String,
    pub headers: HeaderMap,
    pub strm: String,
    pub script: Option<Script>,
}

/// Parse `input` and render every artifact `options` asks for.
pub fn convert(input: &str, options: &ConvertOptions) -> Result<Conversion> {
    if input.trim().is_empty() {
        return Err(Error::NoInput);
    }

    let parsed = parse_curl(input, &options.header_policy);
    let url = parsed.url.ok_or(Error::MissingUrl)?;
    let headers = parsed.headers;
    tracing::debug!("parsed url={} with {} header(s)", url, headers.len());

    let base_name = sanitize_filename(&options.base_name);
    let strm = strm_content(&url, &headers)?;

    let script = options.emit_downloader_script.then(|| {
        let dialect = options.script_dialect;
        let args = ytdlp_args(&url, &headers, Some(&base_name));
        Script {
            dialect,
            command: dialect.join(&args),
            contents: dialect.render(&args),
        }
    });

    Ok(Conversion {
        base_name,
        url,
        headers,
        strm,
        script,
    })
}
