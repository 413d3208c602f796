//! HTTP protocol handling.
//!
//! Just enough HTTP/1.1 to answer `GET` for static HTML files, one request
//! per connection.
//!
//! # Architecture
//!
//! - **`connection`**: per-connection state machine, owns the request buffer
//! - **`reader`**: short-read request framing and decoding
//! - **`parser`**: request line extraction
//! - **`request`**: method and request line types
//! - **`resolver`**: maps request targets to files under the document root
//! - **`response`**: response representation with builder pattern
//! - **`writer`**: serialises and writes responses to the client
//!
//! # Connection State Machine
//!
//! ```text
//!        ┌─────────────┐
//!        │   Reading   │ ← Read until a short read
//!        └──────┬──────┘
//!               │ Request line parsed, method is GET
//!               ▼     (empty / malformed / other method → Closed)
//!        ┌──────────────────┐
//!        │   Processing     │ ← Resolve the target, build the response
//!        └──────┬───────────┘
//!               │ Response ready
//!               ▼
//!        ┌──────────────────┐
//!        │    Writing       │ ← Send response to client
//!        └──────┬───────────┘
//!               │ Response sent
//!               ▼
//!            Closed
//! ```
//!
//! # Example
//!
//! ```ignore
//! use simple_http_server::http::connection::Connection;
//! use tokio::net::TcpListener;
//!
//! let listener = TcpListener::bind("127.0.0.1:8080").await?;
//! loop {
//!     let (socket, _addr) = listener.accept().await?;
//!     let outcome = Connection::new(socket, &ctx).run().await?;
//!     println!("{:?}", outcome);
//! }
//! ```

pub mod connection;
pub mod parser;
pub mod reader;
pub mod request;
pub mod resolver;
pub mod response;
pub mod writer;
