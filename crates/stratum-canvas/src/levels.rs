use crate::model::{Block, Connection};
use std::hash::Hash;
use stratum::Levels;

/// Levels for every block: the block's own level when set, otherwise the longest-path level over
/// `connections`.
pub fn compute_levels<B, C>(blocks: &[Block<B>], connections: &[Connection<B, C>]) -> Levels<B>
where
    B: Clone + Eq + Hash,
{
    stratum::assign_levels_with_overrides(
        blocks.iter().map(|b| (b.id.clone(), b.level)),
        connections
            .iter()
            .map(|c| (c.source.clone(), c.target.clone())),
    )
}
