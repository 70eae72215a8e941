//! Congestion-aware ant-to-path assignment.

use tracing::debug;

use af_colony::Path;

use crate::{SimError, SimResult};

/// Which selected path each ant travels.
///
/// `path_of[ant.index()]` indexes the selected-path list passed to
/// [`assign_ants`]; `load[p]` is the number of ants on path `p`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    pub path_of: Vec<usize>,
    pub load:    Vec<u32>,
}

impl Assignment {
    pub fn ant_count(&self) -> usize {
        self.path_of.len()
    }

    /// Total moves all ants make: the sum of their path lengths.
    pub fn total_moves(&self, paths: &[Path]) -> usize {
        self.load
            .iter()
            .zip(paths)
            .map(|(&n, p)| n as usize * p.length())
            .sum()
    }
}

/// Assign ants `1..=ant_count`, in order, to the path with the lowest
/// `length + ants already assigned`.  Ties go to the earliest path.
///
/// # Errors
///
/// [`SimError::NoPath`] when `paths` is empty, then [`SimError::NoAgents`]
/// when `ant_count` is zero.
pub fn assign_ants(paths: &[Path], ant_count: u32) -> SimResult<Assignment> {
    if paths.is_empty() {
        return Err(SimError::NoPath);
    }
    if ant_count == 0 {
        return Err(SimError::NoAgents);
    }

    let mut load    = vec![0u32; paths.len()];
    let mut path_of = Vec::with_capacity(ant_count as usize);
    for _ in 0..ant_count {
        let mut best      = 0;
        let mut best_cost = usize::MAX;
        for (p, path) in paths.iter().enumerate() {
            let cost = path.length() + load[p] as usize;
            if cost < best_cost {
                best      = p;
                best_cost = cost;
            }
        }
        load[best] += 1;
        path_of.push(best);
    }

    debug!(ants = ant_count, paths = paths.len(), ?load, "assigned ants");
    Ok(Assignment { path_of, load })
}
