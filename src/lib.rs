//! # Classic Algorithm Demonstrations
//!
//! *Four textbook problems, each solved the way the textbook draws it.*
//!
//! ## Intuition First
//!
//! Every algorithm here answers the same kind of question: out of an
//! exponential space of possibilities (code trees, item subsets, orderings,
//! queen placements) find an optimal or valid one without enumerating them
//! all. Each module demonstrates one classic escape hatch:
//!
//! - **Greedy** ([`huffman`]): always merge the two rarest symbols; the
//!   local choice happens to be globally optimal.
//! - **Dynamic programming** ([`knapsack`]): tabulate optimal answers to
//!   overlapping subproblems instead of recomputing them.
//! - **Branch and bound** ([`branch_bound`]): search the subset tree, but
//!   discard any branch whose optimistic bound cannot beat the best answer
//!   seen so far.
//! - **Divide and conquer** ([`quicksort`]): partition around a pivot and
//!   recurse on smaller independent halves.
//! - **Backtracking** ([`nqueens`]): extend a partial placement row by row
//!   and retreat the moment a constraint breaks.
//!
//! ## Historical Context
//!
//! ```text
//! 1850  Nauck     Eight-queens puzzle posed (and solved) in a chess column
//! 1952  Huffman   Optimal prefix codes from a term-paper assignment
//! 1957  Bellman   Dynamic programming and the principle of optimality
//! 1960  Land/Doig Branch and bound for discrete optimization
//! 1961  Hoare     Quicksort, partition-exchange sorting
//! ```
//!
//! ## Complexity Analysis
//!
//! - Huffman: $O(k \log k)$ for $k$ distinct symbols, plus linear passes.
//! - Knapsack DP: $O(n W)$ time; $O(W)$ space in the compact variant.
//! - Knapsack branch and bound: $O(2^n)$ worst case; the fractional bound
//!   prunes most of the tree on typical inputs.
//! - Quicksort: $O(n \log n)$ expected, $O(n^2)$ worst case.
//! - N-Queens: exponential; occupancy flags make each safety check $O(1)$.
//!
//! ## Implementation Notes
//!
//! The modules are deliberately independent: no shared state, no shared
//! traits, only the common [`Error`] type. Each demo binary under
//! `src/bin/` runs one module on small in-memory inputs and prints a
//! human-readable report.
//!
//! ## References
//!
//! - Huffman, D. (1952). "A Method for the Construction of
//!   Minimum-Redundancy Codes."
//! - Cormen, T., et al. *Introduction to Algorithms*: chapters on greedy
//!   methods, dynamic programming, and quicksort.
//! - Land, A., Doig, A. (1960). "An Automatic Method of Solving Discrete
//!   Programming Problems."

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod branch_bound;
pub mod error;
pub mod huffman;
pub mod knapsack;
pub mod nqueens;
pub mod quicksort;

pub use branch_bound::BranchBound;
pub use error::Error;
pub use huffman::{HuffmanDecoder, HuffmanEncoder};
pub use knapsack::{Item, Solution};
pub use quicksort::{quicksort, quicksort_in_place};
