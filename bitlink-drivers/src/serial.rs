//! Line transport over an `embedded-io-async` serial port

use bitlink_core::traits::LineSink;
use bitlink_protocol::{Line, LineError, LineParser, LINE_TERMINATOR};
use embedded_io_async::{Read, Write};

/// Receive buffer size for [`LineReader`]
const RX_CHUNK_SIZE: usize = 32;

/// Writes terminated lines to a serial port
pub struct LineWriter<W> {
    writer: W,
}

impl<W: Write> LineWriter<W> {
    /// Wrap a serial transmitter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Release the transmitter
    pub fn release(self) -> W {
        self.writer
    }
}

impl<W: Write> LineSink for LineWriter<W> {
    type Error = W::Error;

    async fn write_line(&mut self, line: &str) -> Result<(), Self::Error> {
        self.writer.write_all(line.as_bytes()).await?;
        self.writer.write_all(LINE_TERMINATOR.as_bytes()).await?;
        self.writer.flush().await
    }
}

/// Errors that can occur while reading lines
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ReadError<E> {
    /// Serial port error
    Io(E),
    /// A line was discarded by the framer
    Framing(LineError),
    /// The port returned no data
    Eof,
}

/// Reads delimited lines from a serial port
///
/// Framing errors drop only the offending line; the next call continues
/// with the bytes after it.
pub struct LineReader<R> {
    reader: R,
    parser: LineParser,
    buf: [u8; RX_CHUNK_SIZE],
    start: usize,
    end: usize,
}

impl<R: Read> LineReader<R> {
    /// Wrap a serial receiver
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            parser: LineParser::new(),
            buf: [0; RX_CHUNK_SIZE],
            start: 0,
            end: 0,
        }
    }

    /// Wait for the next complete line
    pub async fn read_line(&mut self) -> Result<Line, ReadError<R::Error>> {
        loop {
            while self.start < self.end {
                let (used, result) = self.parser.feed_bytes(&self.buf[self.start..self.end]);
                self.start += used;
                match result {
                    Ok(Some(line)) => return Ok(line),
                    Ok(None) => {}
                    Err(e) => return Err(ReadError::Framing(e)),
                }
            }

            let n = self.reader.read(&mut self.buf).await.map_err(ReadError::Io)?;
            if n == 0 {
                return Err(ReadError::Eof);
            }
            self.start = 0;
            self.end = n;
        }
    }
}
