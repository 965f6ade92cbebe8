//! Breadth-first shortest-path search over any [`SearchState`].
//!
//! The frontier is a FIFO queue, so states are expanded in order of their
//! distance from the start and the first goal popped is a nearest one. Every
//! discovered state is recorded once, together with the node it was first
//! reached from; those back links are walked to rebuild the path.

use std::collections::hash_map::Entry;
use std::collections::{HashMap, VecDeque};
use std::time::Instant;

use serde::Serialize;
use tracing::{debug, trace};

use crate::state::SearchState;

/// Exploration counters for one search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchStats {
    /// States generated, duplicates included (the start counts as one)
    pub total_configs: usize,
    /// Distinct states discovered
    pub unique_configs: usize,
    /// Wall time spent searching
    pub time_elapsed_ms: u64,
}

/// Outcome of [`solve`].
#[derive(Debug, Clone)]
pub struct SolverResult<S> {
    /// Shortest path from the start to a goal, both ends included.
    /// `None` when no goal is reachable.
    pub path: Option<Vec<S>>,
    pub stats: SearchStats,
}

impl<S> SolverResult<S> {
    /// Whether a goal was reached
    pub fn is_solved(&self) -> bool {
        self.path.is_some()
    }

    /// Number of moves in the solution, if there is one
    pub fn moves(&self) -> Option<usize> {
        self.path.as_ref().map(|path| path.len().saturating_sub(1))
    }
}

/// A discovered state and the node it was first reached from.
#[derive(Debug)]
struct SearchNode<S> {
    state: S,
    parent: Option<usize>,
}

/// Find a shortest sequence of states from `start` to any goal state.
///
/// Among several goals at the same distance, the one discovered first wins;
/// discovery order follows the order in which each state yields its
/// neighbors. Running out of states is reported as `path: None`, never as an
/// error.
///
/// The search is exhaustive and unbounded: it terminates only if the state
/// space reachable from `start` is finite.
pub fn solve<S: SearchState>(start: S) -> SolverResult<S> {
    let start_time = Instant::now();

    let mut nodes: Vec<SearchNode<S>> = Vec::new();
    let mut visited: HashMap<S, usize> = HashMap::new();
    let mut queue: VecDeque<usize> = VecDeque::new();
    let mut total_configs: usize = 1;

    visited.insert(start.clone(), 0);
    nodes.push(SearchNode {
        state: start,
        parent: None,
    });
    queue.push_back(0);

    while let Some(current) = queue.pop_front() {
        if nodes[current].state.is_goal() {
            let path = reconstruct_path(&nodes, current);
            let stats = finish_stats(start_time, total_configs, nodes.len());
            debug!(
                moves = path.len() - 1,
                total_configs = stats.total_configs,
                unique_configs = stats.unique_configs,
                elapsed_ms = stats.time_elapsed_ms,
                "solution found"
            );
            return SolverResult {
                path: Some(path),
                stats,
            };
        }

        let neighbors = nodes[current].state.neighbors();
        trace!(node = current, neighbors = neighbors.len(), "expand");

        for neighbor in neighbors {
            total_configs += 1;

            // First discovery wins; a later path to the same state is never shorter
            if let Entry::Vacant(slot) = visited.entry(neighbor) {
                let id = nodes.len();
                nodes.push(SearchNode {
                    state: slot.key().clone(),
                    parent: Some(current),
                });
                slot.insert(id);
                queue.push_back(id);
            }
        }
    }

    let stats = finish_stats(start_time, total_configs, nodes.len());
    debug!(
        total_configs = stats.total_configs,
        unique_configs = stats.unique_configs,
        elapsed_ms = stats.time_elapsed_ms,
        "search exhausted without reaching a goal"
    );
    SolverResult { path: None, stats }
}

/// Shortest path from `start` to a goal, without statistics.
pub fn shortest_path<S: SearchState>(start: S) -> Option<Vec<S>> {
    solve(start).path
}

/// Walk parent links from `goal` back to the root and return them root-first.
fn reconstruct_path<S: Clone>(nodes: &[SearchNode<S>], goal: usize) -> Vec<S> {
    let mut path = Vec::new();
    let mut cursor = Some(goal);
    while let Some(id) = cursor {
        let node = &nodes[id];
        path.push(node.state.clone());
        cursor = node.parent;
    }
    path.reverse();
    path
}

fn finish_stats(start_time: Instant, total_configs: usize, unique_configs: usize) -> SearchStats {
    SearchStats {
        total_configs,
        unique_configs,
        time_elapsed_ms: start_time.elapsed().as_millis() as u64,
    }
}
