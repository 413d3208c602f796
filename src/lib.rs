//! Simple HTTP Server
//!
//! A single-threaded static file server speaking a small subset of HTTP/1.1.

pub mod config;
pub mod http;
pub mod server;
