//! Where the curl command comes from when it is not passed as an argument.

use std::io::Read;

use crate::error::{Error, Result};

/// Text of the system clipboard.
///
/// Blank text, or a clipboard holding no text at all, is `EmptyClipboard`.
pub fn read_clipboard() -> Result<String> {
    let text = arboard::Clipboard::new().and_then(|mut clipboard| clipboard.get_text());
    clipboard_text(text)
}

fn clipboard_text(text: std::result::Result<String, arboard::Error>) -> Result<String> {
    match text {
        Ok(text) if !text.trim().is_empty() => Ok(text),
        Ok(_) | Err(arboard::Error::ContentNotAvailable) => Err(Error::EmptyClipboard),
        Err(err) => Err(err.into()),
    }
}

/// Everything `reader` yields; blank input is `NoInput`.
pub fn read_text<R: Read>(mut reader: R) -> Result<String> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    if text.trim().is_empty() {
        return Err(Error::NoInput);
    }
    Ok(text)
}
