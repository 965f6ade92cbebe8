//! The contract every searchable puzzle state must satisfy.
//!
//! The solver only ever talks to a puzzle through this trait: it compares
//! and hashes states to suppress duplicates, asks whether a state is a goal,
//! and asks for the states one legal move away.

use std::hash::Hash;

use smallvec::SmallVec;

/// Successor list returned by [`SearchState::neighbors`].
///
/// Most puzzles produce four or fewer successors, so these stay inline;
/// larger sets spill to the heap.
pub type Neighbors<S> = SmallVec<[S; 4]>;

/// A point in a puzzle's state space.
///
/// Implementations must keep `Eq` and `Hash` consistent with each other and
/// with the puzzle's notion of "the same position": two states that compare
/// equal must hash equally, report the same goal status, and produce the same
/// set of neighbors (in any order).
///
/// States are immutable. `neighbors` builds new values and never mutates the
/// receiver, so a state stored in the visited map stays valid for the whole
/// search.
pub trait SearchState: Clone + Eq + Hash {
    /// Whether this state ends the puzzle.
    fn is_goal(&self) -> bool;

    /// Every state reachable by exactly one legal move.
    ///
    /// May be empty (a dead end) and may contain duplicates; the solver
    /// deduplicates.
    fn neighbors(&self) -> Neighbors<Self>;
}
