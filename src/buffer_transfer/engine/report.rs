use std::fmt;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransferStatus {
    /// Every byte read from the camera reached the sink
    Complete,
    /// The sink dropped some bytes; the file is truncated or has gaps
    Partial,
}

/// What a finished transfer moved, and what the sink lost on the way.
#[derive(Debug, Clone, Default)]
pub struct TransferReport {
    /// Length announced by the camera when the buffer was opened
    pub reported_size: Option<u32>,
    /// Bytes the camera delivered
    pub bytes_read: u64,
    /// Bytes the sink accepted
    pub bytes_written: u64,
    /// Reads that returned data
    pub chunks: u32,
    /// Chunks the sink accepted only in part
    pub short_writes: u32,
    /// Chunks the sink rejected with an error
    pub failed_writes: u32,
    pub elapsed: Duration,
}

impl TransferReport {
    pub fn status(&self) -> TransferStatus {
        if self.short_writes == 0 && self.failed_writes == 0 && self.bytes_written == self.bytes_read {
            TransferStatus::Complete
        } else {
            TransferStatus::Partial
        }
    }

    pub fn is_complete(&self) -> bool {
        self.status() == TransferStatus::Complete
    }

    /// Bytes read from the camera that never reached the sink.
    pub fn bytes_lost(&self) -> u64 {
        self.bytes_read.saturating_sub(self.bytes_written)
    }

    /// Camera-side throughput in bytes per second.
    pub fn throughput(&self) -> f64 {
        let secs = self.elapsed.as_secs_f64();
        if secs > 0.0 {
            self.bytes_read as f64 / secs
        } else {
            0.0
        }
    }
}

impl fmt::Display for TransferReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} of {} bytes saved in {} chunks ({:.3}ms)",
            self.bytes_written,
            self.bytes_read,
            self.chunks,
            self.elapsed.as_secs_f64() * 1000.0
        )?;
        if !self.is_complete() {
            write!(
                f,
                ", {} short and {} failed writes",
                self.short_writes, self.failed_writes
            )?;
        }
        Ok(())
    }
}

pub struct Timer {
    start: Instant,
    name: String,
}

impl Timer {
    pub fn start(name: impl Into<String>) -> Self {
        Self {
            start: Instant::now(),
            name: name.into(),
        }
    }

    pub fn stop(self) -> (String, Duration) {
        (self.name, self.start.elapsed())
    }
}
