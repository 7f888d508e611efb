//! Protocol dispatcher
//!
//! Reads self-delimited JSON records from a byte stream, one request at a
//! time, and writes one compact JSON response line per record:
//!
//! ```text
//! → {"id": 1, "tool": "consult_advisor", "params": {"metric": "security", "score": 42}}
//! ← {"id": 1, "result": {...}}
//! ← {"id": 2, "error": {"code": "UnknownTool", "message": "Unknown tool: bogus"}}
//! ```
//!
//! Every engine or decode failure becomes an error response and the loop
//! keeps going. Only stream I/O errors end `run` early.
//!
//! Buffered input is capped at [`MAX_RECORD_BYTES`]. A record or line past
//! the cap is answered as malformed and skipped through the end of its line.

use crate::engine::WisdomEngine;
use crate::error::{Result, WisdomError};
use crate::mcp::ToolCall;
use anyhow::Context;
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncReadExt, AsyncWrite, AsyncWriteExt, BufReader};

/// Largest record the reader will buffer (1 MiB)
pub const MAX_RECORD_BYTES: usize = 1024 * 1024;

/// One decoded unit of input
#[derive(Debug, Clone, PartialEq)]
pub enum Record {
    Value(Value),
    Malformed(String),
}

/// Splits a byte stream into JSON values, which may span lines or share one.
///
/// An incomplete record is re-parsed from its start each time another line
/// arrives, so the work per record grows with its line count times its size.
/// The byte limit bounds both.
pub struct RecordReader<R> {
    reader: R,
    buf: Vec<u8>,
    limit: usize,
    /// The last read stopped before a newline
    mid_line: bool,
}

impl<R: AsyncBufRead + Unpin> RecordReader<R> {
    pub fn new(reader: R) -> Self {
        Self::with_limit(reader, MAX_RECORD_BYTES)
    }

    pub fn with_limit(reader: R, limit: usize) -> Self {
        Self {
            reader,
            buf: Vec::new(),
            limit,
            mid_line: false,
        }
    }

    /// Next record, or `None` at a clean end of stream
    pub async fn next_record(&mut self) -> anyhow::Result<Option<Record>> {
        loop {
            if let Some(record) = self.take_buffered() {
                if matches!(record, Record::Malformed(_)) {
                    self.skip_rest_of_line().await?;
                }
                return Ok(Some(record));
            }

            if self.buf.len() > self.limit {
                self.buf.clear();
                self.skip_rest_of_line().await?;
                return Ok(Some(Record::Malformed(format!(
                    "record exceeds {} bytes",
                    self.limit
                ))));
            }

            // one byte past the limit is enough to tell it was exceeded
            let room = (self.limit + 1 - self.buf.len()) as u64;
            let read = (&mut self.reader)
                .take(room)
                .read_until(b'\n', &mut self.buf)
                .await
                .context("Failed to read request stream")?;
            self.mid_line = read > 0 && self.buf.last() != Some(&b'\n');
            if read == 0 {
                if self.buf.iter().all(u8::is_ascii_whitespace) {
                    return Ok(None);
                }
                self.buf.clear();
                return Ok(Some(Record::Malformed(
                    "truncated record at end of stream".to_string(),
                )));
            }
        }
    }

    /// Drop unread input through the next newline without buffering it
    async fn skip_rest_of_line(&mut self) -> anyhow::Result<()> {
        while self.mid_line {
            let (used, done) = {
                let chunk = self
                    .reader
                    .fill_buf()
                    .await
                    .context("Failed to read request stream")?;
                match chunk.iter().position(|&b| b == b'\n') {
                    Some(i) => (i + 1, true),
                    None => (chunk.len(), chunk.is_empty()),
                }
            };
            self.reader.consume(used);
            self.mid_line = !done;
        }
        Ok(())
    }

    /// Pull one complete value off the buffer if there is one.
    ///
    /// The buffer ends at a newline, the end of stream, or the byte limit,
    /// and anything before the last line was a valid prefix. So a syntax
    /// error lies on the last line, and dropping the buffer (plus the unread
    /// rest of that line) resyncs at the next newline.
    fn take_buffered(&mut self) -> Option<Record> {
        let (next, consumed) = {
            let mut values = serde_json::Deserializer::from_slice(&self.buf).into_iter::<Value>();
            let next = values.next();
            (next, values.byte_offset())
        };

        match next {
            None => {
                self.buf.clear();
                None
            }
            Some(Ok(value)) => {
                self.buf.drain(..consumed);
                Some(Record::Value(value))
            }
            Some(Err(e)) if e.is_eof() => None,
            Some(Err(e)) => {
                self.buf.clear();
                Some(Record::Malformed(e.to_string()))
            }
        }
    }
}

#[derive(Deserialize)]
struct Envelope {
    tool: String,
    #[serde(default)]
    params: Value,
}

fn error_response(id: Value, err: &WisdomError) -> Value {
    json!({
        "id": id,
        "error": {
            "code": err.code(),
            "message": err.to_string(),
        }
    })
}

async fn write_response<W: AsyncWrite + Unpin>(writer: &mut W, response: &Value) -> anyhow::Result<()> {
    let mut line = serde_json::to_vec(response)?;
    line.push(b'\n');
    writer
        .write_all(&line)
        .await
        .context("Failed to write response")?;
    writer.flush().await.context("Failed to flush response")?;
    Ok(())
}

/// Sequential request loop over one engine
pub struct WisdomServer {
    engine: Arc<WisdomEngine>,
}

impl WisdomServer {
    pub fn new(engine: Arc<WisdomEngine>) -> Self {
        Self { engine }
    }

    /// Serve until end of stream
    pub async fn run<R, W>(&self, reader: R, mut writer: W) -> anyhow::Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut records = RecordReader::new(reader);
        let mut handled: u64 = 0;

        while let Some(record) = records.next_record().await? {
            let response = match record {
                Record::Value(request) => self.handle(request),
                Record::Malformed(reason) => {
                    tracing::warn!(%reason, "Discarding malformed record");
                    error_response(Value::Null, &WisdomError::ProtocolDecode(reason))
                }
            };
            write_response(&mut writer, &response).await?;
            handled += 1;
        }

        tracing::info!(requests = handled, "Request stream closed");
        Ok(())
    }

    /// Serve on the process's stdin and stdout
    pub async fn serve_stdio(&self) -> anyhow::Result<()> {
        let stdin = BufReader::new(tokio::io::stdin());
        let stdout = tokio::io::stdout();
        tracing::info!("Serving wisdom on stdio");
        self.run(stdin, stdout).await
    }

    /// Build the response for one decoded request
    pub fn handle(&self, request: Value) -> Value {
        let id = request.get("id").cloned().unwrap_or(Value::Null);
        match self.dispatch(request) {
            Ok(result) => json!({ "id": id, "result": result }),
            Err(err) => {
                tracing::debug!(code = err.code(), error = %err, "Tool call failed");
                error_response(id, &err)
            }
        }
    }

    fn dispatch(&self, request: Value) -> Result<Value> {
        let envelope: Envelope = serde_json::from_value(request)
            .map_err(|e| WisdomError::ProtocolDecode(e.to_string()))?;
        let call = ToolCall::parse(&envelope.tool, envelope.params)?;
        tracing::debug!(tool = call.name(), "Dispatching tool call");
        call.execute(&self.engine)
    }
}
