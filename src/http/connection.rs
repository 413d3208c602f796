use bytes::BytesMut;
use tokio::io::{AsyncRead, AsyncWrite, AsyncWriteExt};
use tracing::{debug, info, warn};

use crate::http::parser::{parse_request_line, ParseError};
use crate::http::reader::{decode, read_until_short_read};
use crate::http::request::{Method, RequestLine};
use crate::http::resolver::resolve;
use crate::http::response::{Response, StatusCode};
use crate::http::writer::ResponseWriter;
use crate::server::ServerContext;

/// How a single connection ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Responded { status: StatusCode, bytes_sent: usize },
    Empty,
    UnsupportedMethod(String),
    Malformed,
}

pub enum ConnectionState {
    Reading,
    Processing(RequestLine),
    Writing(ResponseWriter, StatusCode),
    Closed(Outcome),
}

/// One accepted client. Owns its request buffer; both are gone once
/// [`Connection::run`] returns.
pub struct Connection<'a, S> {
    stream: S,
    buffer: BytesMut,
    ctx: &'a ServerContext,
}

impl<'a, S> Connection<'a, S>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    pub fn new(stream: S, ctx: &'a ServerContext) -> Self {
        Self {
            stream,
            buffer: BytesMut::with_capacity(ctx.buffer_size),
            ctx,
        }
    }

    /// Handles exactly one request. The stream is shut down on every path,
    /// including errors.
    pub async fn run(mut self) -> anyhow::Result<Outcome> {
        let result = self.drive().await;

        self.buffer.clear();
        if let Err(e) = self.stream.shutdown().await {
            debug!(error = %e, "Shutdown after request failed");
        }

        result
    }

    async fn drive(&mut self) -> anyhow::Result<Outcome> {
        let mut state = ConnectionState::Reading;

        loop {
            state = match state {
                ConnectionState::Reading => self.read_request().await?,

                ConnectionState::Processing(line) => self.handle_request(&line).await?,

                ConnectionState::Writing(writer, status) => {
                    let bytes_sent = writer.write_to_stream(&mut self.stream).await?;
                    info!("Sent {} bytes to the client", bytes_sent);
                    ConnectionState::Closed(Outcome::Responded { status, bytes_sent })
                }

                ConnectionState::Closed(outcome) => return Ok(outcome),
            };
        }
    }

    async fn read_request(&mut self) -> anyhow::Result<ConnectionState> {
        self.buffer.clear();
        read_until_short_read(&mut self.stream, &mut self.buffer, self.ctx.buffer_size).await?;

        if self.buffer.is_empty() {
            warn!("Empty request");
            return Ok(ConnectionState::Closed(Outcome::Empty));
        }

        info!("Got {} bytes from the client", self.buffer.len());
        let request = decode(&self.buffer);

        let line = match parse_request_line(&request) {
            Ok(line) => line,
            Err(ParseError::Empty) => return Ok(ConnectionState::Closed(Outcome::Empty)),
            Err(ParseError::MalformedRequestLine(first)) => {
                warn!(line = %first, "Malformed request line");
                return Ok(ConnectionState::Closed(Outcome::Malformed));
            }
        };

        match line.method {
            Method::GET => Ok(ConnectionState::Processing(line)),
            ref other => {
                warn!("Unknown method {}", other.as_str());
                Ok(ConnectionState::Closed(Outcome::UnsupportedMethod(
                    other.as_str().to_string(),
                )))
            }
        }
    }

    async fn handle_request(&mut self, line: &RequestLine) -> anyhow::Result<ConnectionState> {
        debug!(path = %line.target, version = %line.version, "Handling GET");

        let resource = resolve(&self.ctx.root, &line.target, self.ctx.resolve_mode).await?;

        let response = if resource.is_found() {
            Response::ok(resource.content())
        } else {
            Response::not_found(resource.content())
        };

        let writer = ResponseWriter::new(&response);
        Ok(ConnectionState::Writing(writer, response.status))
    }
}
