/// Direction blocks are carved from a codepoint sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Left-to-right: the remainder block (if any) is the last one carved
    Forward,
    /// Right-to-left: blocks are carved end-first, so the remainder block
    /// sits at the start of the input and is carved last
    Backward,
}

/// Partition a codepoint sequence into blocks of up to block_size codepoints
/// Blocks are returned in carving order; only the boundary block may be short
/// block_size must be non-zero (enforced at the parameter boundary)
pub fn partition(cps: &[char], block_size: usize, direction: Direction) -> Vec<&[char]> {
    debug_assert!(block_size > 0, "block size must be non-zero");
    match direction {
        Direction::Forward => cps.chunks(block_size).collect(),
        Direction::Backward => cps.rchunks(block_size).collect(),
    }
}

/// Join blocks back into a string, in the order given
pub fn concat(blocks: &[&[char]]) -> String {
    blocks.iter().flat_map(|block| block.iter()).collect()
}

/// Number of blocks a sequence of the given length partitions into
pub fn block_count(len: usize, block_size: usize) -> usize {
    if len == 0 {
        0
    } else {
        (len + block_size - 1) / block_size
    }
}
