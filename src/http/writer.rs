use tokio::io::{AsyncWrite, AsyncWriteExt};

use crate::http::response::Response;

const HTTP_VERSION: &str = "HTTP/1.1";
const CRLF: &str = "\r\n";

/// Renders the full response as text. Every line, including the blank
/// separator, ends in CRLF.
pub fn serialize_response(resp: &Response) -> String {
    let mut out = String::with_capacity(128 + resp.body.len());

    out.push_str(HTTP_VERSION);
    out.push(' ');
    out.push_str(&resp.status.as_u16().to_string());
    out.push(' ');
    out.push_str(resp.status.reason_phrase());
    out.push_str(CRLF);

    for (k, v) in &resp.headers {
        out.push_str(k);
        out.push_str(": ");
        out.push_str(v);
        out.push_str(CRLF);
    }

    out.push_str(CRLF);
    out.push_str(&resp.body);

    out
}

pub struct ResponseWriter {
    buffer: Vec<u8>,
}

impl ResponseWriter {
    pub fn new(response: &Response) -> Self {
        Self {
            buffer: serialize_response(response).into_bytes(),
        }
    }

    /// Writes the whole encoded response and returns the byte count sent.
    pub async fn write_to_stream<S>(&self, stream: &mut S) -> anyhow::Result<usize>
    where
        S: AsyncWrite + Unpin,
    {
        stream.write_all(&self.buffer).await?;
        stream.flush().await?;
        Ok(self.buffer.len())
    }
}
