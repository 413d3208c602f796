/// HTTP request methods.
///
/// Only `GET` is served. Anything else is carried through as `Other` so the
/// token can be logged before the connection is dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Method {
    /// GET - Retrieve a resource
    GET,
    /// Any other method token, verbatim
    Other(String),
}

impl Method {
    /// Parses a method token. Matching is case-sensitive.
    ///
    /// # Example
    ///
    /// ```
    /// # use simple_http_server::http::request::Method;
    /// assert_eq!(Method::from_token("GET"), Method::GET);
    /// assert_eq!(Method::from_token("get"), Method::Other("get".to_string()));
    /// ```
    pub fn from_token(s: &str) -> Self {
        match s {
            "GET" => Method::GET,
            other => Method::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Method::GET => "GET",
            Method::Other(token) => token,
        }
    }
}

/// The first line of a request: method, request-target and protocol version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestLine {
    /// The HTTP method
    pub method: Method,
    /// The request-target as sent (e.g. "/index.html")
    pub target: String,
    /// Protocol version token (typically "HTTP/1.1")
    pub version: String,
}
