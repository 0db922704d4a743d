use std::io::Write;

/// Outcome of handing one chunk to a sink.
#[derive(Debug)]
pub enum SinkWrite {
    /// Every byte was accepted
    Complete,
    /// Fewer bytes than offered were accepted (possibly zero)
    Short { written: usize },
    Failed(std::io::Error),
}

impl SinkWrite {
    pub fn written(&self, offered: usize) -> usize {
        match self {
            SinkWrite::Complete => offered,
            SinkWrite::Short { written } => *written,
            SinkWrite::Failed(_) => 0,
        }
    }
}

/// Byte destination fed by the transfer engine, one chunk per call.
pub trait TransferSink {
    /// Offers `chunk` to the sink exactly once. Whatever is not accepted is
    /// dropped; the engine never retries.
    fn write_chunk(&mut self, chunk: &[u8]) -> SinkWrite;
}

/// Any writer is a sink: exactly one `write` call per chunk. An interrupted
/// write counts as a failed one.
impl<W: Write + ?Sized> TransferSink for W {
    fn write_chunk(&mut self, chunk: &[u8]) -> SinkWrite {
        match self.write(chunk) {
            Ok(n) if n >= chunk.len() => SinkWrite::Complete,
            Ok(written) => SinkWrite::Short { written },
            Err(e) => SinkWrite::Failed(e),
        }
    }
}
