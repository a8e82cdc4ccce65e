use super::partition::{concat, partition, Direction};

/// Reverse the block order of a codepoint sequence (the encode core)
/// Partitions forward, so the short remainder block ends up at the front of
/// the output after reversal
/// Identity for sequences no longer than one block
pub fn spin(cps: &[char], block_size: usize) -> String {
    if cps.len() <= block_size {
        return cps.iter().collect();
    }
    let mut blocks = partition(cps, block_size, Direction::Forward);
    blocks.reverse();
    concat(&blocks)
}

/// Undo `spin` (the decode core)
/// Partitions backward so the short remainder block is isolated at the head
/// of the input; carving order is already original order, so concatenation
/// restores it to the tail
/// Identity for sequences no longer than one block
pub fn unspin(cps: &[char], block_size: usize) -> String {
    if cps.len() <= block_size {
        return cps.iter().collect();
    }
    let blocks = partition(cps, block_size, Direction::Backward);
    concat(&blocks)
}
