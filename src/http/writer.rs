use tokio::io::AsyncWriteExt;
use tokio::net::TcpStream;

use crate::http::response::{Response, reason_phrase};

const HTTP_VERSION: &str = "HTTP/1.1";

/// Serializes a response to wire bytes.
///
/// Headers are emitted in the map's sorted key order. `Content-Length`
/// and `Connection` are always appended with computed/fixed values, so
/// any copies of those keys in the map are skipped rather than emitted
/// twice.
pub fn serialize_response(resp: &Response) -> Vec<u8> {
    let mut buf = Vec::new();

    // Status line
    let status_line = format!(
        "{} {} {}\r\n",
        HTTP_VERSION,
        resp.status,
        reason_phrase(resp.status)
    );
    buf.extend_from_slice(status_line.as_bytes());

    // Headers
    for (k, v) in &resp.headers {
        if k.eq_ignore_ascii_case("Content-Length") || k.eq_ignore_ascii_case("Connection") {
            continue;
        }
        buf.extend_from_slice(k.as_bytes());
        buf.extend_from_slice(b": ");
        buf.extend_from_slice(v.as_bytes());
        buf.extend_from_slice(b"\r\n");
    }

    // Forced trailer headers
    let content_length = format!("Content-Length: {}\r\n", resp.body.len());
    buf.extend_from_slice(content_length.as_bytes());
    buf.extend_from_slice(b"Connection: close\r\n");

    // Header/body separator
    buf.extend_from_slice(b"\r\n");

    // Body
    buf.extend_from_slice(&resp.body);

    buf
}

pub struct ResponseWriter {
    buffer: Vec<u8>,
    written: usize,
}

impl ResponseWriter {
    pub fn new(response: &Response) -> Self {
        Self {
            buffer: serialize_response(response),
            written: 0,
        }
    }

    /// Flushes the serialized response, retrying on partial writes.
    ///
    /// A write error or a zero-byte write aborts the attempt; the
    /// caller decides whether that is worth more than a log line.
    pub async fn write_to_stream(
        &mut self,
        stream: &mut TcpStream,
    ) -> anyhow::Result<()> {
        while self.written < self.buffer.len() {
            let n = stream
                .write(&self.buffer[self.written..])
                .await?;

            if n == 0 {
                return Err(anyhow::anyhow!("connection closed while writing"));
            }

            self.written += n;
        }

        Ok(())
    }
}
