//! Key-to-thruster binding with guaranteed coverage and injected redundancy.
//!
//! The primary pair always gets dedicated singleton keys, a near-balanced
//! pair additionally gets a joint key, and every remaining thruster lands in
//! some randomly-sized group binding. A final injection pass copies random
//! thruster subsets between bindings so several keys can drive the same
//! thruster. Baseline bindings (the singletons and the joint key) are never
//! altered by injection.

use serde::{Deserialize, Serialize};

use crate::error::GenError;
use crate::random::RandomSource;
use crate::settings::ShipSettings;
use crate::thrusters::Thruster;

/// A symbolic input key bound to one or more thruster indices.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThrusterKey {
    pub symbol: char,
    /// Non-empty, ordered; indices into the blueprint's thruster list.
    pub thrusters: Vec<usize>,
}

fn draw_symbol(pool: &mut Vec<char>, random: &mut RandomSource) -> Result<char, GenError> {
    let index = random.next_index(pool.len())?;
    Ok(pool.swap_remove(index))
}

/// Build the full key map for a thruster set.
///
/// The thruster list must hold at least the primary pair (indices 0 and 1).
pub fn map_keys(
    thrusters: &[Thruster],
    settings: &ShipSettings,
    random: &mut RandomSource,
) -> Result<Vec<ThrusterKey>, GenError> {
    let mut pool = settings.thruster_available_keys.clone();
    let mut bindings = Vec::new();

    // Baseline singletons for the primary pair.
    bindings.push(ThrusterKey {
        symbol: draw_symbol(&mut pool, random)?,
        thrusters: vec![0],
    });
    bindings.push(ThrusterKey {
        symbol: draw_symbol(&mut pool, random)?,
        thrusters: vec![1],
    });

    // A near-balanced pair also gets a joint key; it counts as baseline and
    // is never an injection target.
    if (thrusters[0].weight - 0.5).abs() <= settings.thruster_key_join_weight_threshold {
        bindings.push(ThrusterKey {
            symbol: draw_symbol(&mut pool, random)?,
            thrusters: vec![0, 1],
        });
    }
    let baseline = bindings.len();

    // Group the remaining thrusters under fresh keys until all are covered.
    let mut unassigned: Vec<usize> = (2..thrusters.len()).collect();
    while !unassigned.is_empty() && !pool.is_empty() {
        let size = if pool.len() == 1 {
            // The last key absorbs the tail so coverage never depends on
            // how the group sizes happened to fall.
            unassigned.len() as u32
        } else {
            random.next_int_range(1, unassigned.len() as u32)?
        };
        let mut group = Vec::with_capacity(size as usize);
        for _ in 0..size {
            let index = random.next_index(unassigned.len())?;
            group.push(unassigned.swap_remove(index));
        }
        bindings.push(ThrusterKey {
            symbol: draw_symbol(&mut pool, random)?,
            thrusters: group,
        });
    }

    // Redundancy injection: overlap a random subset of a random source
    // binding into a random group binding. Targets are only the group
    // bindings; re-adding keeps the target's original thrusters first.
    let overlaps = random.next_int_range(
        settings.min_thruster_key_overlap,
        settings.max_thruster_key_overlap,
    )?;
    if bindings.len() == baseline && overlaps > 0 {
        log::warn!(
            "no group bindings available for overlap injection; skipping {} overlaps",
            overlaps
        );
    }
    for _ in 0..overlaps {
        let group_count = bindings.len() - baseline;
        if group_count == 0 {
            break;
        }
        let source = random.next_index(bindings.len())?;
        let target = baseline + random.next_index(group_count)?;

        let mut subset_pool = bindings[source].thrusters.clone();
        let subset_size = random.next_int_range(1, subset_pool.len() as u32)?;
        let mut subset = Vec::with_capacity(subset_size as usize);
        for _ in 0..subset_size {
            let index = random.next_index(subset_pool.len())?;
            subset.push(subset_pool.swap_remove(index));
        }

        let mut rebound = bindings.remove(target);
        for thruster in subset {
            if !rebound.thrusters.contains(&thruster) {
                rebound.thrusters.push(thruster);
            }
        }
        bindings.push(rebound);
    }

    Ok(bindings)
}
