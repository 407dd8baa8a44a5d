pub mod headers;
pub mod parser;

pub use headers::{AllowList, DEFAULT_ALLOWED_HEADERS, HeaderMap, HeaderPolicy};

/// The URL and headers pulled out of one curl command.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedCommand {
    pub url: Option<String>,
    pub headers: HeaderMap,
}

/// Scan `input` for the first HTTP(S) URL and every `-H`/`--header` value,
/// keeping the headers `policy` accepts.
///
/// This is a best-effort scanner over shell text, not a shell tokenizer:
/// escaped quotes, nested quoting and variable expansion are not handled.
/// A missing URL is reported as `url: None`; callers decide whether that is fatal.
pub fn parse_curl(input: &str, policy: &HeaderPolicy) -> ParsedCommand {
    let url = parser::find_url(input).map(str::to_owned);

    let mut headers = HeaderMap::new();
    for raw in parser::header_values(input) {
        let Some((name, value)) = raw.split_once(':') else {
            tracing::debug!("skipping header flag without a colon: {raw:?}");
            continue;
        };
        let (name, value) = (name.trim(), value.trim());
        if policy.accepts(name) {
            tracing::debug!("keeping header {name}");
            headers.insert(name, value);
        } else {
            tracing::debug!("dropping header {name}");
        }
    }

    ParsedCommand { url, headers }
}
