//! Directory-backed camera transport.
//!
//! Replays downloads from files laid out the way a camera exposes them:
//! image buffers as `buffer-<index>.<ext>` (`pef`, `dng` or `jpg`, picked by
//! buffer type) and the full memory image as `memory.bin`. Useful for running
//! the download path without a camera attached.

use std::fs::File;
use std::io::{BufReader, Read, Seek, SeekFrom};
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::buffer_transfer::common::error::TransportError;
use crate::buffer_transfer::source::types::BufferTypeTag;
use crate::buffer_transfer::transport::device::CameraTransport;

const MEMORY_FILE: &str = "memory.bin";

/// Highest JPEG star rating on most K-series bodies.
const DEFAULT_MAX_JPEG_STARS: i32 = 3;

#[derive(Debug)]
struct OpenBuffer {
    reader: BufReader<File>,
    size: u32,
}

#[derive(Debug)]
pub struct ReplayTransport {
    root: PathBuf,
    max_jpeg_stars: i32,
    open: Option<OpenBuffer>,
}

impl ReplayTransport {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            max_jpeg_stars: DEFAULT_MAX_JPEG_STARS,
            open: None,
        }
    }

    pub fn with_max_jpeg_stars(mut self, max_jpeg_stars: i32) -> Self {
        self.max_jpeg_stars = max_jpeg_stars;
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn is_open(&self) -> bool {
        self.open.is_some()
    }

    /// Path a buffer of the given type is replayed from.
    pub fn buffer_path(&self, buffer_index: u32, tag: BufferTypeTag) -> PathBuf {
        let ext = match tag {
            BufferTypeTag::PEF => "pef",
            BufferTypeTag::DNG => "dng",
            _ => "jpg",
        };
        self.root.join(format!("buffer-{buffer_index}.{ext}"))
    }

    pub fn memory_path(&self) -> PathBuf {
        self.root.join(MEMORY_FILE)
    }

    fn read_memory_at(&self, address: u32, buf: &mut [u8]) -> std::io::Result<usize> {
        let mut file = File::open(self.memory_path())?;
        file.seek(SeekFrom::Start(u64::from(address)))?;
        read_full(&mut file, buf)
    }
}

/// Fills `buf` as far as the reader allows, like a single device transfer would.
fn read_full<R: Read>(reader: &mut R, buf: &mut [u8]) -> std::io::Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(filled)
}

impl CameraTransport for ReplayTransport {
    fn open_buffer(
        &mut self,
        buffer_index: u32,
        tag: BufferTypeTag,
        resolution: u32,
    ) -> Result<(), TransportError> {
        if self.open.is_some() {
            return Err(TransportError::Device("another buffer is already open".to_string()));
        }

        let path = self.buffer_path(buffer_index, tag);
        let file = File::open(&path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => TransportError::InvalidBuffer(buffer_index),
            _ => TransportError::Io(e),
        })?;
        let size = file.metadata()?.len();
        let size = u32::try_from(size)
            .map_err(|_| TransportError::Device(format!("{} exceeds 4 GiB", path.display())))?;

        debug!(path = %path.display(), size, resolution, "Replaying buffer");
        self.open = Some(OpenBuffer {
            reader: BufReader::new(file),
            size,
        });
        Ok(())
    }

    fn buffer_size(&mut self) -> u32 {
        self.open.as_ref().map_or(0, |open| open.size)
    }

    fn read_buffer(&mut self, buf: &mut [u8]) -> usize {
        let Some(open) = self.open.as_mut() else {
            warn!("Read without an open buffer");
            return 0;
        };
        match read_full(&mut open.reader, buf) {
            Ok(n) => n,
            Err(e) => {
                warn!("Buffer read failed: {}", e);
                0
            }
        }
    }

    fn close_buffer(&mut self) {
        self.open = None;
    }

    fn read_memory(&mut self, address: u32, buf: &mut [u8]) -> usize {
        match self.read_memory_at(address, buf) {
            Ok(n) => n,
            Err(e) => {
                warn!(address, "Memory read failed: {}", e);
                0
            }
        }
    }

    /// The camera numbers JPEG variants from the best one down: the maximum
    /// star rating maps to `JPEG_MAX`, one star less to `JPEG_MAX + 1`, and so
    /// on. The premium tier above the maximum shares the lowest slot.
    fn jpeg_buffer_type(&mut self, quality_tier: i32) -> BufferTypeTag {
        let max = self.max_jpeg_stars;
        let hw_quality = if quality_tier == max + 1 {
            max
        } else {
            (max - quality_tier).clamp(0, max)
        };
        let offset = u8::try_from(hw_quality).unwrap_or(0);
        BufferTypeTag(BufferTypeTag::JPEG_MAX.0.saturating_add(offset))
    }
}
