use tracing::debug;

use crate::buffer_transfer::engine::types::DEFAULT_QUALITY_TIER;
use crate::buffer_transfer::source::types::{BufferTypeTag, ContainerFormat};
use crate::buffer_transfer::transport::CameraTransport;

/// Maps a requested container format and quality tier to the buffer type
/// the camera expects in its open command.
#[derive(Debug, Clone, Copy)]
pub struct FormatResolver {
    default_quality_tier: i32,
}

impl FormatResolver {
    pub fn new(default_quality_tier: i32) -> Self {
        Self { default_quality_tier }
    }

    /// Raw and negotiated formats have fixed tags and ignore `quality_tier`.
    /// JPEG variants are model specific, so the transport is asked.
    pub fn resolve<T: CameraTransport + ?Sized>(
        &self,
        transport: &mut T,
        format: ContainerFormat,
        quality_tier: Option<i32>,
    ) -> BufferTypeTag {
        let tag = match format {
            ContainerFormat::Raw => BufferTypeTag::PEF,
            ContainerFormat::Negotiated => BufferTypeTag::DNG,
            ContainerFormat::Jpeg => {
                let tier = quality_tier.unwrap_or(self.default_quality_tier);
                transport.jpeg_buffer_type(tier)
            }
        };
        debug!(%format, ?quality_tier, %tag, "Resolved buffer type");
        tag
    }
}

impl Default for FormatResolver {
    fn default() -> Self {
        Self::new(DEFAULT_QUALITY_TIER)
    }
}
