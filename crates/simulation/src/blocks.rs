//! Block partitioning for intra-run stability analysis.
//!
//! Each block is aggregated as an independent mini-run from the reset
//! initial bankroll, so its figures describe the quality of that slice of
//! outcomes alone.

use crate::bankroll::StakePolicy;
use crate::statistics::aggregate;
use wagersim_domain::value_objects::statistics::BlockStatistics;

/// Splits outcomes into `block_count` contiguous slices.
///
/// Every slice holds `len / block_count` outcomes except the last, which
/// also takes the remainder. Concatenating the slices gives back the input.
/// A block count of zero yields no slices.
#[must_use]
pub fn partition(outcomes: &[bool], block_count: usize) -> Vec<&[bool]> {
    if block_count == 0 {
        return Vec::new();
    }

    let block_size = outcomes.len() / block_count;
    (0..block_count)
        .map(|i| {
            let start = i * block_size;
            let end = if i == block_count - 1 {
                outcomes.len()
            } else {
                start + block_size
            };
            &outcomes[start..end]
        })
        .collect()
}

/// Partitions outcomes and aggregates each block independently.
///
/// # Arguments
/// * `outcomes` - Full win/loss sequence
/// * `block_count` - Number of blocks
/// * `avg_odds` - Decimal odds
/// * `policy` - Stake sizing rule; each block restarts from its initial bankroll
#[must_use]
pub fn block_statistics(
    outcomes: &[bool],
    block_count: usize,
    avg_odds: f64,
    policy: &StakePolicy,
) -> Vec<BlockStatistics> {
    let mut offset = 0;
    partition(outcomes, block_count)
        .into_iter()
        .enumerate()
        .map(|(i, slice)| {
            let block = BlockStatistics {
                id: i + 1,
                start_trial: offset + 1,
                end_trial: offset + slice.len(),
                run: aggregate(slice, avg_odds, policy),
            };
            offset += slice.len();
            block
        })
        .collect()
}
