use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by the conversion pipeline and its I/O collaborators.
///
/// A `-H` flag whose value has no colon is not an error: it is skipped
/// while scanning, the same way browser-copied noise is tolerated.
#[derive(Debug, Error)]
pub enum Error {
    /// No `http://` or `https://` URL in the command text.
    #[error("could not find a valid URL in the provided curl command")]
    MissingUrl,

    /// Nothing was supplied to convert.
    #[error("no curl command supplied; pass one as an argument or pipe it on stdin")]
    NoInput,

    /// The clipboard held no text, or only whitespace.
    #[error("clipboard is empty; copy a curl command first")]
    EmptyClipboard,

    #[error("could not read the clipboard: {0}")]
    Clipboard(#[from] arboard::Error),

    /// A stream descriptor was requested for an empty URL.
    #[error("cannot compose a stream descriptor without a URL")]
    InvalidInput,

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("invalid config file {}: {source}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
