use crate::http::request::{Method, RequestLine};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Nothing was received.
    Empty,
    /// The first line has fewer than three space-separated tokens.
    MalformedRequestLine(String),
}

/// Extracts the request line from decoded request text.
///
/// Lines are split on `\n`; a trailing `\r` on the first line is dropped.
/// Tokens are split on single spaces and anything past the third is ignored.
pub fn parse_request_line(text: &str) -> Result<RequestLine, ParseError> {
    if text.is_empty() {
        return Err(ParseError::Empty);
    }

    let first = text.split('\n').next().unwrap_or_default();
    let first = first.strip_suffix('\r').unwrap_or(first);

    let mut parts = first.split(' ');
    let malformed = || ParseError::MalformedRequestLine(first.to_string());

    let method = parts.next().ok_or_else(malformed)?;
    let target = parts.next().ok_or_else(malformed)?;
    let version = parts.next().ok_or_else(malformed)?;

    Ok(RequestLine {
        method: Method::from_token(method),
        target: target.to_string(),
        version: version.to_string(),
    })
}
