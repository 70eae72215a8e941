//! Selection of interior-disjoint paths.
//!
//! # Pluggability
//!
//! `af-sim` calls selection through the [`PathSelector`] trait, so callers can
//! plug in their own strategy.  Two are provided:
//!
//! | Selector               | Result                                          |
//! |------------------------|-------------------------------------------------|
//! | [`GreedySeedSelector`] | best-seed greedy heuristic (default)            |
//! | [`ExhaustiveSelector`] | maximum disjoint set, branch and bound          |
//!
//! Both first sort the paths by ascending length, keeping discovery order
//! between paths of equal length.  Two paths are compatible when no room
//! other than start and end appears in both.

use tracing::{debug, warn};

use af_core::config::MAX_EXHAUSTIVE_PATHS;
use af_core::SelectionStrategy;

use crate::{Colony, Path};

// ── PathSelector trait ────────────────────────────────────────────────────────

/// Pluggable disjoint-path selection.
///
/// Implementations must return a pairwise interior-disjoint subset of
/// `paths`.  An empty input yields an empty output.
pub trait PathSelector: Send + Sync {
    fn select(&self, colony: &Colony, paths: Vec<Path>) -> Vec<Path>;
}

/// Stable ascending sort by length.
pub fn sort_by_length(paths: &mut [Path]) {
    paths.sort_by_key(Path::length);
}

/// Move the paths at `order` out of `paths`, in `order`.
fn take_in_order(paths: Vec<Path>, order: &[usize]) -> Vec<Path> {
    let mut slots: Vec<Option<Path>> = paths.into_iter().map(Some).collect();
    order.iter().filter_map(|&i| slots[i].take()).collect()
}

// ── GreedySeedSelector ────────────────────────────────────────────────────────

/// Best-seed greedy heuristic.
///
/// Every path in sorted order serves once as a seed.  Starting from
/// `[seed]`, all other paths are scanned in sorted order and each one
/// compatible with everything already chosen is added.  The largest
/// candidate wins; ties keep the lowest seed.  The winning paths are
/// returned in the order they were added (seed first).
///
/// Not guaranteed to find the largest disjoint set.
pub struct GreedySeedSelector;

impl PathSelector for GreedySeedSelector {
    fn select(&self, colony: &Colony, mut paths: Vec<Path>) -> Vec<Path> {
        sort_by_length(&mut paths);
        let order = best_greedy_candidate(colony, &paths);
        debug!(
            enumerated = paths.len(),
            selected = order.len(),
            "greedy seed selection"
        );
        take_in_order(paths, &order)
    }
}

/// Indices of the candidate built from `seed`.
fn greedy_candidate(colony: &Colony, paths: &[Path], seed: usize) -> Vec<usize> {
    // claimed[r] = room r is interior to a path already in the candidate.
    let mut claimed = vec![false; colony.room_count()];
    let mut chosen  = Vec::with_capacity(paths.len());

    let scan = std::iter::once(seed).chain((0..paths.len()).filter(|&i| i != seed));
    for i in scan {
        let interior = paths[i].interior();
        if interior.iter().any(|r| claimed[r.index()]) {
            continue;
        }
        for r in interior {
            claimed[r.index()] = true;
        }
        chosen.push(i);
    }
    chosen
}

fn best_greedy_candidate(colony: &Colony, paths: &[Path]) -> Vec<usize> {
    if paths.is_empty() {
        return Vec::new();
    }

    #[cfg(not(feature = "parallel"))]
    let mut candidates: Vec<Vec<usize>> = (0..paths.len())
        .map(|seed| greedy_candidate(colony, paths, seed))
        .collect();

    #[cfg(feature = "parallel")]
    let mut candidates: Vec<Vec<usize>> = {
        use rayon::prelude::*;
        (0..paths.len())
            .into_par_iter()
            .map(|seed| greedy_candidate(colony, paths, seed))
            .collect()
    };

    // First strictly larger candidate wins, so ties keep the lowest seed.
    let mut best = 0;
    for (seed, candidate) in candidates.iter().enumerate() {
        if candidate.len() > candidates[best].len() {
            best = seed;
        }
    }
    candidates.swap_remove(best)
}

// ── ExhaustiveSelector ────────────────────────────────────────────────────────

/// Exact maximum interior-disjoint set.
///
/// Branch and bound over the sorted paths, include-before-exclude.  Among
/// sets of maximum size the one with the smallest total length wins; among
/// those, the first one found (lexicographically earliest in sorted order).
/// The result is returned in sorted order.
///
/// Conflicts are stored as `u64` masks, so at most
/// [`MAX_EXHAUSTIVE_PATHS`] paths are searched.  With more paths than
/// `max_paths` the selector falls back to [`GreedySeedSelector`].
pub struct ExhaustiveSelector {
    pub max_paths: usize,
}

impl PathSelector for ExhaustiveSelector {
    fn select(&self, colony: &Colony, mut paths: Vec<Path>) -> Vec<Path> {
        let limit = self.max_paths.min(MAX_EXHAUSTIVE_PATHS);
        if paths.len() > limit {
            warn!(
                paths = paths.len(),
                limit,
                "too many paths for exhaustive selection, using greedy seeds"
            );
            return GreedySeedSelector.select(colony, paths);
        }

        sort_by_length(&mut paths);
        let mut search = Search {
            conflicts:  conflict_masks(colony, &paths),
            lengths:    paths.iter().map(Path::length).collect(),
            best:       0,
            best_count: 0,
            best_len:   usize::MAX,
        };
        search.descend(0, 0, 0, 0);

        let order: Vec<usize> = (0..paths.len())
            .filter(|&i| search.best & (1u64 << i) != 0)
            .collect();
        debug!(
            enumerated = paths.len(),
            selected = order.len(),
            total_length = search.best_len,
            "exhaustive selection"
        );
        take_in_order(paths, &order)
    }
}

/// `masks[i]` has bit `j` set when paths `i` and `j` share an interior room.
fn conflict_masks(colony: &Colony, paths: &[Path]) -> Vec<u64> {
    let mut room_users = vec![0u64; colony.room_count()];
    for (i, path) in paths.iter().enumerate() {
        for r in path.interior() {
            room_users[r.index()] |= 1u64 << i;
        }
    }
    paths
        .iter()
        .enumerate()
        .map(|(i, path)| {
            let mask = path
                .interior()
                .iter()
                .fold(0u64, |acc, r| acc | room_users[r.index()]);
            mask & !(1u64 << i)
        })
        .collect()
}

struct Search {
    conflicts:  Vec<u64>,
    lengths:    Vec<usize>,
    best:       u64,
    best_count: usize,
    best_len:   usize,
}

impl Search {
    fn descend(&mut self, i: usize, chosen: u64, count: usize, total_len: usize) {
        let n = self.conflicts.len();
        if i == n {
            if count > self.best_count || (count == self.best_count && total_len < self.best_len) {
                self.best       = chosen;
                self.best_count = count;
                self.best_len   = total_len;
            }
            return;
        }

        // Even taking every remaining path cannot beat the incumbent.
        let reachable = count + (n - i);
        if reachable < self.best_count
            || (reachable == self.best_count && total_len >= self.best_len)
        {
            return;
        }

        if chosen & self.conflicts[i] == 0 {
            self.descend(i + 1, chosen | (1u64 << i), count + 1, total_len + self.lengths[i]);
        }
        self.descend(i + 1, chosen, count, total_len);
    }
}

// ── Strategy dispatch ─────────────────────────────────────────────────────────

impl PathSelector for SelectionStrategy {
    fn select(&self, colony: &Colony, paths: Vec<Path>) -> Vec<Path> {
        match *self {
            SelectionStrategy::GreedySeed => GreedySeedSelector.select(colony, paths),
            SelectionStrategy::Exhaustive { max_paths } => {
                ExhaustiveSelector { max_paths }.select(colony, paths)
            }
        }
    }
}
