//! Transfer source types

use std::fmt;
use std::str::FromStr;

use crate::buffer_transfer::common::error::TransferError;

/// On-camera representation requested for an image buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContainerFormat {
    /// Native raw sensor format (PEF)
    Raw,
    /// Negotiated intermediate raw format (DNG)
    Negotiated,
    /// In-camera JPEG, variant picked by quality tier
    Jpeg,
}

impl ContainerFormat {
    /// File extension used when the buffer is saved to disk.
    pub fn extension(self) -> &'static str {
        match self {
            ContainerFormat::Raw => "pef",
            ContainerFormat::Negotiated => "dng",
            ContainerFormat::Jpeg => "jpg",
        }
    }
}

impl FromStr for ContainerFormat {
    type Err = TransferError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "pef" | "raw" => Ok(ContainerFormat::Raw),
            "dng" => Ok(ContainerFormat::Negotiated),
            "jpeg" | "jpg" => Ok(ContainerFormat::Jpeg),
            _ => Err(TransferError::UnsupportedFormat(s.to_string())),
        }
    }
}

impl fmt::Display for ContainerFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ContainerFormat::Raw => "PEF",
            ContainerFormat::Negotiated => "DNG",
            ContainerFormat::Jpeg => "JPEG",
        };
        f.write_str(name)
    }
}

/// Device-side buffer type byte passed to the buffer open command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BufferTypeTag(pub u8);

impl BufferTypeTag {
    pub const PEF: BufferTypeTag = BufferTypeTag(0);
    pub const DNG: BufferTypeTag = BufferTypeTag(1);
    /// Largest / best JPEG; lower quality variants follow it.
    pub const JPEG_MAX: BufferTypeTag = BufferTypeTag(2);
}

impl fmt::Display for BufferTypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// What a single download reads from the camera.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransferSource {
    /// A numbered image buffer, opened as a device transaction
    Image {
        buffer_index: u32,
        format: ContainerFormat,
        /// JPEG quality tier; `None` falls back to the configured default
        quality_tier: Option<i32>,
    },
    /// A raw memory range, read without a transaction
    MemoryRange {
        offset: u32,
        length: u32,
    },
}

impl TransferSource {
    pub fn image(buffer_index: u32, format: ContainerFormat) -> Self {
        TransferSource::Image {
            buffer_index,
            format,
            quality_tier: None,
        }
    }

    pub fn jpeg(buffer_index: u32, quality_tier: i32) -> Self {
        TransferSource::Image {
            buffer_index,
            format: ContainerFormat::Jpeg,
            quality_tier: Some(quality_tier),
        }
    }

    pub fn memory(offset: u32, length: u32) -> Self {
        TransferSource::MemoryRange { offset, length }
    }
}
