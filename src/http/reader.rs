//! Request framing
//!
//! There is no real framing here: a read that comes back shorter than the
//! chunk size is taken to mean the client has sent everything. Callers only
//! see [`read_until_short_read`] so a proper `Content-Length` or terminator
//! based reader can replace it later.

use bytes::BytesMut;
use tokio::io::{AsyncRead, AsyncReadExt};

/// Reads `chunk_size` chunks into `buf` until a read returns fewer bytes
/// than requested, including zero. Returns the total number of bytes read.
pub async fn read_until_short_read<S>(
    stream: &mut S,
    buf: &mut BytesMut,
    chunk_size: usize,
) -> std::io::Result<usize>
where
    S: AsyncRead + Unpin,
{
    let mut chunk = vec![0u8; chunk_size];
    let mut total = 0;

    loop {
        let n = stream.read(&mut chunk).await?;
        buf.extend_from_slice(&chunk[..n]);
        total += n;

        if n < chunk_size {
            return Ok(total);
        }
    }
}

/// Decodes accumulated request bytes. Invalid UTF-8 is replaced rather than
/// rejected; the request line is expected to be ASCII anyway.
pub fn decode(buf: &[u8]) -> String {
    String::from_utf8_lossy(buf).into_owned()
}
