use std::sync::Arc;

use bytes::{Buf, BytesMut};
use tokio::io::AsyncReadExt;
use tokio::net::TcpStream;

use crate::http::parser::{ParseError, parse_http_request};
use crate::http::request::Request;
use crate::http::response::Response;
use crate::http::writer::ResponseWriter;
use crate::router::Router;

const READ_CHUNK: usize = 4096;

pub struct Connection {
    stream: TcpStream,
    buffer: BytesMut,
    router: Arc<Router>,
    state: ConnectionState,
}

pub enum ConnectionState {
    Reading,
    Processing(Request),
    Writing(ResponseWriter),
    Closed,
}

impl Connection {
    pub fn new(stream: TcpStream, router: Arc<Router>) -> Self {
        Self {
            stream,
            buffer: BytesMut::with_capacity(READ_CHUNK),
            router,
            state: ConnectionState::Reading,
        }
    }

    /// Drives the connection through its state machine: read one
    /// request, dispatch it, write one response, close. A framing or
    /// parse failure becomes a 400 response before the close.
    pub async fn run(&mut self) -> anyhow::Result<()> {
        loop {
            match &mut self.state {
                ConnectionState::Reading => {
                    match self.read_request().await {
                        Ok(Some(req)) => {
                            self.state = ConnectionState::Processing(req);
                        }
                        Ok(None) => {
                            // Client closed before sending anything.
                            self.state = ConnectionState::Closed;
                        }
                        Err(e) => {
                            tracing::debug!(error = %e, "bad request framing");
                            let writer = ResponseWriter::new(&Response::bad_request());
                            self.state = ConnectionState::Writing(writer);
                        }
                    }
                }

                ConnectionState::Processing(req) => {
                    let response = self.router.dispatch(req);
                    let writer = ResponseWriter::new(&response);
                    self.state = ConnectionState::Writing(writer);
                }

                ConnectionState::Writing(writer) => {
                    // Partial-write failures are swallowed; the client
                    // may see a truncated response and no retry happens.
                    if let Err(e) = writer.write_to_stream(&mut self.stream).await {
                        tracing::debug!(error = %e, "response write aborted");
                    }
                    self.state = ConnectionState::Closed;
                }

                ConnectionState::Closed => {
                    break;
                }
            }
        }

        Ok(())
    }

    /// Reads until the buffer frames a complete request.
    ///
    /// Loops strictly until the parser has `header_end + 4 +
    /// content_length` bytes, however the client chooses to fragment
    /// them. End-of-stream mid-message is a framing failure.
    pub async fn read_request(&mut self) -> anyhow::Result<Option<Request>> {
        loop {
            // Try parsing whatever we already have
            match parse_http_request(&self.buffer) {
                Ok((request, consumed)) => {
                    self.buffer.advance(consumed);
                    return Ok(Some(request));
                }

                Err(ParseError::Incomplete) => {
                    // Need more data → fall through to read
                }

                Err(e) => {
                    return Err(anyhow::anyhow!("HTTP parse error: {:?}", e));
                }
            }

            // Read more data
            let mut temp = [0u8; READ_CHUNK];
            let n = self.stream.read(&mut temp).await?;

            if n == 0 {
                if self.buffer.is_empty() {
                    // Clean close before any bytes arrived
                    return Ok(None);
                }
                return Err(anyhow::anyhow!("connection closed mid-request"));
            }

            self.buffer.extend_from_slice(&temp[..n]);
        }
    }
}
