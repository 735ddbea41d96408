//! Decision-diagram plumbing: the terminal-value protocol binding
//! [`Amplitude`][crate::amplitude::Amplitude] leaves into a hash-consing
//! engine, the capability interface onto that engine, a minimal in-memory
//! node table implementing it, and the single-qubit selector builders used
//! to assemble gate diagrams.
//!
//! The engine proper (a parallel, work-stealing apply recursion over a
//! shared node table with reference-counted collection) is an external
//! collaborator. Everything here is what such an engine needs from the leaf
//! algebra: lifecycle callbacks, terminal operations, and structural
//! builders.

use thiserror::Error;

/// Identifies a Boolean (qubit) decision variable.
///
/// Variables are ordered by index, smallest at the root.
pub type Var = u32;

/// Opaque handle to a node or terminal in an engine's shared table.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct DdRef(pub(crate) usize);

impl std::fmt::Display for DdRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Errors for fallible operations on engine node tables.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DdError {
    /// Returned when a node does not exist under a given handle.
    #[error("missing node {0}")]
    MissingNode(DdRef),

    /// Returned when a requested branch would place a child variable at or
    /// above its parent in the fixed variable order.
    #[error("child variable {child} at or above parent variable {parent}")]
    OrderViolation {
        /// Variable requested for the new branch.
        parent: Var,
        /// Offending child top variable.
        child: Var,
    },
}
pub type DdResult<T> = Result<T, DdError>;

pub mod leaf;
pub use leaf::{ AmpLeafOps, LeafData, LeafRegistry, LeafTypeId, TerminalOps };

pub mod engine;
pub use engine::{ BinOp, Engine, NodeTable, UnOp };

pub mod selector;
pub use selector::{
    make_selector, make_selector_comp, restrict_high, restrict_low,
};
