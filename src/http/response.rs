/// HTTP status codes the server produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    /// 200 OK
    Ok,
    /// 404 Not Found
    NotFound,
}

impl StatusCode {
    /// Returns the numeric HTTP status code.
    ///
    /// # Example
    ///
    /// ```
    /// # use simple_http_server::http::response::StatusCode;
    /// assert_eq!(StatusCode::Ok.as_u16(), 200);
    /// assert_eq!(StatusCode::NotFound.as_u16(), 404);
    /// ```
    pub fn as_u16(&self) -> u16 {
        match self {
            StatusCode::Ok => 200,
            StatusCode::NotFound => 404,
        }
    }

    /// Returns the standard HTTP reason phrase for this status code.
    pub fn reason_phrase(&self) -> &'static str {
        match self {
            StatusCode::Ok => "OK",
            StatusCode::NotFound => "Not Found",
        }
    }
}

pub const SERVER_NAME: &str = "Custom";
pub const CONTENT_TYPE: &str = "text/html";

/// A complete HTTP response ready to be serialised.
///
/// Headers keep insertion order; the body is text.
#[derive(Debug)]
pub struct Response {
    /// The HTTP status code
    pub status: StatusCode,
    /// HTTP headers in the order they are written
    pub headers: Vec<(String, String)>,
    /// Response body
    pub body: String,
}

/// Builder for constructing HTTP responses in a fluent style.
///
/// # Example
///
/// ```ignore
/// let response = ResponseBuilder::new(StatusCode::Ok)
///     .header("Content-Type", "text/html")
///     .body("<h1>hi</h1>")
///     .build();
/// ```
pub struct ResponseBuilder {
    status: StatusCode,
    headers: Vec<(String, String)>,
    body: String,
}

impl ResponseBuilder {
    pub fn new(status: StatusCode) -> Self {
        Self {
            status,
            headers: Vec::new(),
            body: String::new(),
        }
    }

    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((key.into(), value.into()));
        self
    }

    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    /// Builds the final Response, appending `Content-Length` as the body's
    /// character count.
    pub fn build(mut self) -> Response {
        let length = self.body.chars().count().to_string();
        self.headers.push(("Content-Length".to_string(), length));

        Response {
            status: self.status,
            headers: self.headers,
            body: self.body,
        }
    }
}

impl Response {
    /// `Server` and `Content-Type` headers followed by `Content-Length`.
    pub fn html(status: StatusCode, body: impl Into<String>) -> Self {
        ResponseBuilder::new(status)
            .header("Server", SERVER_NAME)
            .header("Content-Type", CONTENT_TYPE)
            .body(body)
            .build()
    }

    pub fn ok(body: impl Into<String>) -> Self {
        Self::html(StatusCode::Ok, body)
    }

    pub fn not_found(body: impl Into<String>) -> Self {
        Self::html(StatusCode::NotFound, body)
    }

    pub fn header(&self, key: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(key))
            .map(|(_, v)| v.as_str())
    }
}
