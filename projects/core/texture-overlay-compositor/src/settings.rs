//! Configuration for [`apply_binary_op_with_settings`](crate::apply::apply_binary_op_with_settings).

use texture_overlay_common::precise_block::CANONICAL_BLOCK_SIDE;

/// Prefix of the output texture's name, followed by the bottom texture's name.
pub const DEFAULT_OUTPUT_NAME_PREFIX: &str = "Compressed_";

/// Settings of a compositing run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompositorSettings {
    output_name_prefix: String,
    min_mip_side: usize,
}

impl Default for CompositorSettings {
    fn default() -> Self {
        Self {
            output_name_prefix: DEFAULT_OUTPUT_NAME_PREFIX.to_owned(),
            min_mip_side: CANONICAL_BLOCK_SIDE,
        }
    }
}

impl CompositorSettings {
    /// Prefix prepended to the bottom texture's name to name the output.
    pub fn output_name_prefix(&self) -> &str {
        &self.output_name_prefix
    }

    /// Smallest mip side that is still composited. Never below the canonical block side.
    pub fn min_mip_side(&self) -> usize {
        self.min_mip_side
    }

    /// Name of the texture produced from `bot_name`.
    pub fn output_name(&self, bot_name: &str) -> String {
        format!("{}{}", self.output_name_prefix, bot_name)
    }
}

/// Builder for [`CompositorSettings`].
#[derive(Debug, Clone, Default)]
pub struct CompositorSettingsBuilder {
    output_name_prefix: Option<String>,
    min_mip_side: Option<usize>,
}

impl CompositorSettingsBuilder {
    /// Create a new settings builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the output name prefix.
    pub fn output_name_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.output_name_prefix = Some(prefix.into());
        self
    }

    /// Stop compositing once the mip side drops below `side`.
    ///
    /// Values below the canonical block side are raised to it.
    pub fn min_mip_side(mut self, side: usize) -> Self {
        self.min_mip_side = Some(side);
        self
    }

    /// Build the settings using the configured values or defaults.
    pub fn build(self) -> CompositorSettings {
        let default = CompositorSettings::default();
        CompositorSettings {
            output_name_prefix: self
                .output_name_prefix
                .unwrap_or(default.output_name_prefix),
            min_mip_side: self
                .min_mip_side
                .map_or(default.min_mip_side, |side| side.max(CANONICAL_BLOCK_SIDE)),
        }
    }
}
