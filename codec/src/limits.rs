//! Resource limits for decoding untrusted input.

/// Limits applied while encoding and decoding objects.
///
/// Wire data carries counts and lengths chosen by the sender. An
/// adversarial peer can declare a billion-element vector that the buffer
/// could never hold, or nest containers until the stack gives out.
/// Decoding validates every count and nesting level against these limits
/// before allocating, so memory use stays proportional to actual input
/// size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodecLimits {
    /// Maximum number of elements in a single vector.
    pub max_vector_len: usize,

    /// Maximum payload length of a byte string or string, in bytes.
    pub max_bytes_len: usize,

    /// Maximum container nesting level. The top-level object sits at
    /// level zero; each nested object or vector element adds one.
    pub max_depth: usize,
}

impl Default for CodecLimits {
    fn default() -> Self {
        Self {
            max_vector_len: 16 * 1024,
            max_bytes_len: 1 << 20,
            max_depth: 32,
        }
    }
}

impl CodecLimits {
    /// Small limits for tests that exercise limit handling.
    #[must_use]
    pub const fn for_testing() -> Self {
        Self {
            max_vector_len: 32,
            max_bytes_len: 1024,
            max_depth: 8,
        }
    }

    /// No limits. Only for trusted input.
    #[must_use]
    pub const fn unlimited() -> Self {
        Self {
            max_vector_len: usize::MAX,
            max_bytes_len: usize::MAX,
            max_depth: usize::MAX,
        }
    }
}
