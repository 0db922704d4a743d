//! Transfer configuration types

/// Bytes moved per device read.
pub const DEFAULT_CHUNK_CAPACITY: usize = 65536;

/// Star rating used for JPEG downloads when the request names none.
pub const DEFAULT_QUALITY_TIER: i32 = 3;

/// Configuration for buffer and memory downloads
#[derive(Debug, Clone)]
pub struct TransferConfig {
    /// Size of the scratch buffer, i.e. the largest read issued to the camera
    pub chunk_capacity: usize,
    /// JPEG quality tier for image requests that carry none
    pub default_quality_tier: i32,
    /// JPEG resolution setting forwarded when a buffer is opened
    pub resolution_hint: u32,
}

impl Default for TransferConfig {
    fn default() -> Self {
        Self {
            chunk_capacity: DEFAULT_CHUNK_CAPACITY,
            default_quality_tier: DEFAULT_QUALITY_TIER,
            resolution_hint: 0,
        }
    }
}

impl TransferConfig {
    pub fn builder() -> TransferConfigBuilder {
        TransferConfigBuilder::default()
    }
}

/// Builder for TransferConfig
#[derive(Default)]
pub struct TransferConfigBuilder {
    chunk_capacity: Option<usize>,
    default_quality_tier: Option<i32>,
    resolution_hint: Option<u32>,
}

impl TransferConfigBuilder {
    pub fn chunk_capacity(mut self, capacity: usize) -> Self {
        self.chunk_capacity = Some(capacity);
        self
    }

    pub fn default_quality_tier(mut self, tier: i32) -> Self {
        self.default_quality_tier = Some(tier);
        self
    }

    pub fn resolution_hint(mut self, resolution: u32) -> Self {
        self.resolution_hint = Some(resolution);
        self
    }

    pub fn build(self) -> TransferConfig {
        let default = TransferConfig::default();
        TransferConfig {
            chunk_capacity: self.chunk_capacity.unwrap_or(default.chunk_capacity),
            default_quality_tier: self.default_quality_tier.unwrap_or(default.default_quality_tier),
            resolution_hint: self.resolution_hint.unwrap_or(default.resolution_hint),
        }
    }
}

/// Caller-owned scratch buffer reused across the reads of a transfer.
#[derive(Debug)]
pub struct ChunkBuffer {
    data: Box<[u8]>,
}

impl ChunkBuffer {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: vec![0u8; capacity].into_boxed_slice(),
        }
    }

    pub fn capacity(&self) -> usize {
        self.data.len()
    }

    pub(crate) fn as_mut_slice(&mut self) -> &mut [u8] {
        &mut self.data
    }
}

impl Default for ChunkBuffer {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_CHUNK_CAPACITY)
    }
}
