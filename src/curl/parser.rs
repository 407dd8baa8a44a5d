use winnow::{
    ModalResult, Parser,
    ascii::{line_ending, multispace1},
    combinator::{alt, delimited, preceded, repeat},
    token::{take_till, take_until},
};

fn parse_single_quoted_data<'a>(s: &mut &'a str) -> ModalResult<&'a str> {
    delimited('\'', take_until(0.., '\''), '\'').parse_next(s)
}

fn parse_double_quoted_data<'a>(s: &mut &'a str) -> ModalResult<&'a str> {
    delimited('"', take_until(0.., '"'), '"').parse_next(s)
}

fn parse_bare_token<'a>(s: &mut &'a str) -> ModalResult<&'a str> {
    take_till(1.., |c: char| c.is_whitespace()).parse_next(s)
}

/// A quoted value, or a bare token when no closing quote is found.
fn parse_option_value<'a>(s: &mut &'a str) -> ModalResult<&'a str> {
    alt((
        parse_single_quoted_data,
        parse_double_quoted_data,
        parse_bare_token,
    ))
    .parse_next(s)
}

/// Whitespace and `\<newline>` continuations between a flag and its value.
fn parse_separator(s: &mut &str) -> ModalResult<()> {
    repeat(
        1..,
        alt((multispace1.void(), ('\\', line_ending).void())),
    )
    .parse_next(s)
}

fn parse_header_flag<'a>(s: &mut &'a str) -> ModalResult<&'a str> {
    alt(("--header", "-H")).parse_next(s)
}

/// `-H <value>` / `--header <value>`, yielding the raw value.
pub fn parse_header_option<'a>(s: &mut &'a str) -> ModalResult<&'a str> {
    preceded((parse_header_flag, parse_separator), parse_option_value).parse_next(s)
}

fn is_url_terminator(c: char) -> bool {
    c.is_whitespace() || c == '\'' || c == '"'
}

/// `http://…` or `https://…` up to whitespace or a quote.
pub fn parse_http_url<'a>(s: &mut &'a str) -> ModalResult<&'a str> {
    (alt(("https://", "http://")), take_till(1.., is_url_terminator))
        .take()
        .parse_next(s)
}

/// The leftmost HTTP(S) URL anywhere in `input`.
pub fn find_url(input: &str) -> Option<&str> {
    input.match_indices("http").find_map(|(idx, _)| {
        let mut candidate = &input[idx..];
        parse_http_url.parse_next(&mut candidate).ok()
    })
}

/// Raw values of every header flag that starts the input or follows whitespace.
///
/// A matched value is consumed whole, so flag-like text inside it is never
/// picked up as another header.
pub fn header_values(input: &str) -> Vec<&str> {
    let mut values = Vec::new();
    let mut rest = input;
    let mut at_boundary = true;

    while let Some(c) = rest.chars().next() {
        if at_boundary {
            let mut attempt = rest;
            if let Ok(value) = parse_header_option.parse_next(&mut attempt) {
                values.push(value);
                rest = attempt;
                at_boundary = false;
                continue;
            }
        }
        at_boundary = c.is_whitespace();
        rest = &rest[c.len_utf8()..];
    }

    values
}
