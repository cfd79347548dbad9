use serde::{Deserialize, Serialize};

/// Structural limits applied while decoding untrusted input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct DecoderLimits {
    /// Compression pointers followed within one name before giving up.
    #[serde(default = "default_max_pointer_jumps")]
    pub max_pointer_jumps: usize,
}

impl DecoderLimits {
    pub const DEFAULT_MAX_POINTER_JUMPS: usize = 16;
    /// A 255-octet name holds at most 127 labels, so no legitimate name
    /// needs more jumps than that.
    pub const MAX_POINTER_JUMPS_CEILING: usize = 127;
}

impl Default for DecoderLimits {
    fn default() -> Self {
        Self {
            max_pointer_jumps: default_max_pointer_jumps(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct DecoderConfig {
    #[serde(flatten)]
    pub limits: DecoderLimits,

    /// Report sections decoded before the first error instead of failing.
    #[serde(default)]
    pub lenient: bool,
}

fn default_max_pointer_jumps() -> usize {
    DecoderLimits::DEFAULT_MAX_POINTER_JUMPS
}
