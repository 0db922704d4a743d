use std::path::Path;

use tracing::{debug, error, info, instrument, warn};

use crate::buffer_transfer::{
    common::error::{Result, TransferError},
    engine::report::{Timer, TransferReport},
    engine::types::{ChunkBuffer, TransferConfig},
    sink::{create_output_file, SinkWrite, TransferSink},
    source::{BufferTypeTag, FormatResolver, TransferSource},
    transport::{CameraTransport, DeviceHandle, TransferSession},
};

/// Downloads image buffers and memory ranges from a camera into a sink.
///
/// Sink trouble never stops a download: short and failed writes are logged,
/// counted in the [`TransferReport`] and the next chunk is read regardless.
/// The only error a running download reports is a buffer that cannot be opened.
#[derive(Debug, Clone)]
pub struct TransferEngine {
    config: TransferConfig,
    resolver: FormatResolver,
}

impl TransferEngine {
    pub fn new(config: TransferConfig) -> Result<Self> {
        if config.chunk_capacity == 0 {
            return Err(TransferError::InvalidConfig(
                "chunk capacity must be greater than zero".to_string(),
            ));
        }
        Ok(Self {
            resolver: FormatResolver::new(config.default_quality_tier),
            config,
        })
    }

    pub fn config(&self) -> &TransferConfig {
        &self.config
    }

    /// Scratch buffer sized for this engine's configuration.
    pub fn chunk_buffer(&self) -> ChunkBuffer {
        ChunkBuffer::with_capacity(self.config.chunk_capacity)
    }

    /// Runs the download described by `source`, resolving the buffer type
    /// first for image requests.
    pub fn transfer<T, S>(
        &self,
        device: &mut DeviceHandle<T>,
        source: &TransferSource,
        scratch: &mut ChunkBuffer,
        sink: &mut S,
    ) -> Result<TransferReport>
    where
        T: CameraTransport,
        S: TransferSink + ?Sized,
    {
        match *source {
            TransferSource::Image { buffer_index, format, quality_tier } => {
                let tag = self.resolver.resolve(device.transport_mut(), format, quality_tier);
                self.transfer_image_buffer(
                    device,
                    buffer_index,
                    tag,
                    self.config.resolution_hint,
                    scratch,
                    sink,
                )
            }
            TransferSource::MemoryRange { offset, length } => {
                self.transfer_memory_range(device, offset, length, scratch, sink)
            }
        }
    }

    /// Opens buffer `buffer_index`, drains it chunk by chunk into `sink` and
    /// closes it again.
    ///
    /// An empty `scratch` is rejected before the buffer is opened: a
    /// zero-length read would look like the end of data.
    ///
    /// The transaction is closed on every path once the open succeeded. If the
    /// open fails nothing is read, nothing is written and nothing is closed.
    #[instrument(skip(self, device, scratch, sink))]
    pub fn transfer_image_buffer<T, S>(
        &self,
        device: &mut DeviceHandle<T>,
        buffer_index: u32,
        tag: BufferTypeTag,
        resolution_hint: u32,
        scratch: &mut ChunkBuffer,
        sink: &mut S,
    ) -> Result<TransferReport>
    where
        T: CameraTransport,
        S: TransferSink + ?Sized,
    {
        check_scratch(scratch)?;
        let timer = Timer::start("image_buffer");

        let mut session = TransferSession::open(device.transport_mut(), buffer_index, tag, resolution_hint)
            .map_err(|source| {
                error!(buffer_index, "Failed to open buffer: {}", source);
                TransferError::OpenFailed { buffer_index, source }
            })?;

        let size = session.size();
        info!(buffer_index, size, "Buffer opened");

        let mut report = TransferReport {
            reported_size: Some(size),
            ..TransferReport::default()
        };

        {
            let _span = tracing::info_span!("drain_buffer", buffer_index).entered();
            let buf = scratch.as_mut_slice();
            loop {
                let bytes = session.read(buf).min(buf.len());
                if bytes == 0 {
                    break;
                }
                forward_chunk(sink, &buf[..bytes], &mut report);
            }
        }

        session.close();

        let (step, elapsed) = timer.stop();
        report.elapsed = elapsed;
        if report.bytes_read != u64::from(size) {
            debug!(buffer_index, size, bytes_read = report.bytes_read, "Buffer length differs from announced size");
        }
        log_finished(&step, &report);
        Ok(report)
    }

    /// Dumps `length` bytes of camera memory starting at `offset` into `sink`.
    ///
    /// Reads are at most one chunk long. A zero-length read ends the dump
    /// early; the report then shows fewer bytes than requested.
    #[instrument(skip(self, device, scratch, sink))]
    pub fn transfer_memory_range<T, S>(
        &self,
        device: &mut DeviceHandle<T>,
        offset: u32,
        length: u32,
        scratch: &mut ChunkBuffer,
        sink: &mut S,
    ) -> Result<TransferReport>
    where
        T: CameraTransport,
        S: TransferSink + ?Sized,
    {
        check_scratch(scratch)?;
        let timer = Timer::start("memory_range");
        let mut report = TransferReport::default();

        let buf = scratch.as_mut_slice();
        let capacity = u32::try_from(buf.len()).unwrap_or(u32::MAX);
        let transport = device.transport_mut();

        let mut current: u32 = 0;
        while current < length {
            let read_size = (length - current).min(capacity) as usize;
            let Some(address) = offset.checked_add(current) else {
                warn!(offset, current, "Memory dump runs past the end of the address space");
                break;
            };

            let bytes = transport.read_memory(address, &mut buf[..read_size]).min(read_size);
            if bytes == 0 {
                warn!(address, current, length, "Camera returned no data, memory dump truncated");
                break;
            }

            forward_chunk(sink, &buf[..bytes], &mut report);
            // read_size fits in u32, so does bytes
            current += bytes as u32;
        }

        let (step, elapsed) = timer.stop();
        report.elapsed = elapsed;
        log_finished(&step, &report);
        Ok(report)
    }

    /// Runs `source` into a freshly created (or truncated) file at `path`.
    #[instrument(skip(self, device, path), fields(output = %path.as_ref().display()))]
    pub fn save_to_file<T, P>(
        &self,
        device: &mut DeviceHandle<T>,
        source: &TransferSource,
        path: P,
    ) -> Result<TransferReport>
    where
        T: CameraTransport,
        P: AsRef<Path>,
    {
        let mut output = create_output_file(path.as_ref())?;
        let mut scratch = self.chunk_buffer();
        self.transfer(device, source, &mut scratch, &mut output)
    }
}

fn check_scratch(scratch: &ChunkBuffer) -> Result<()> {
    if scratch.capacity() == 0 {
        return Err(TransferError::InvalidConfig(
            "scratch buffer must hold at least one byte".to_string(),
        ));
    }
    Ok(())
}

/// Hands one chunk to the sink and books the outcome. Never retries.
fn forward_chunk<S: TransferSink + ?Sized>(sink: &mut S, chunk: &[u8], report: &mut TransferReport) {
    let offered = chunk.len();
    report.chunks += 1;
    report.bytes_read += offered as u64;

    let outcome = sink.write_chunk(chunk);
    report.bytes_written += outcome.written(offered) as u64;

    match outcome {
        SinkWrite::Complete => {}
        SinkWrite::Short { written: 0 } => {
            report.short_writes += 1;
            warn!(expected = offered, "Nothing has been written to the output");
        }
        SinkWrite::Short { written } => {
            report.short_writes += 1;
            warn!(written, expected = offered, "Short write to the output");
        }
        SinkWrite::Failed(e) => {
            report.failed_writes += 1;
            error!(expected = offered, "Write to the output failed: {}", e);
        }
    }
}

fn log_finished(step: &str, report: &TransferReport) {
    if report.is_complete() {
        info!(
            step,
            bytes = report.bytes_read,
            chunks = report.chunks,
            "Transfer complete, {:.1} KiB/s",
            report.throughput() / 1024.0
        );
    } else {
        warn!(
            step,
            bytes_read = report.bytes_read,
            bytes_written = report.bytes_written,
            short_writes = report.short_writes,
            failed_writes = report.failed_writes,
            "Transfer incomplete, output is missing {} bytes",
            report.bytes_lost()
        );
    }
}
