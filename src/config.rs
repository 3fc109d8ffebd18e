//! Limits applied while decoding untrusted input

/// Decode limits
///
/// ```
/// use tagpack::DecodeConfig;
///
/// let cfg = DecodeConfig {
///     max_depth: 8,
///     ..DecodeConfig::default()
/// };
/// assert_eq!(cfg.max_items, u32::MAX as u64);
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct DecodeConfig {
    /// Maximum struct nesting, the outermost struct counting as depth 1
    ///
    /// Arrays add no level of their own; their struct elements sit one
    /// level below the enclosing struct. Encoding enforces the default.
    pub max_depth: usize,

    /// Maximum element count of a single array or struct
    pub max_items: u64,
}

impl DecodeConfig {
    pub const DEFAULT_MAX_DEPTH: usize = 64;

    /// Returns true if `count` items are allowed in one container
    pub fn allows_items(&self, count: u64) -> bool {
        count <= self.max_items
    }

    /// Returns true if structs may nest `depth` levels deep
    pub fn allows_depth(&self, depth: usize) -> bool {
        depth <= self.max_depth
    }
}

impl Default for DecodeConfig {
    fn default() -> Self {
        Self {
            max_depth: Self::DEFAULT_MAX_DEPTH,
            max_items: u32::MAX as u64,
        }
    }
}
