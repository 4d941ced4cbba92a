//! Literal definition tree for the command layer.
//!
//! A modal editor recognizes multi-character input sequences (repeat
//! counts, register and mark selectors, window commands) by walking a
//! forest of literal trees. This crate owns that forest:
//!
//! - [`Symbol`]: one atomic input unit (a character, a ctrl chord, a named key)
//! - [`LiteralRegistry`]: category roots, alias resolution, lookup, traversal
//! - [`builtins::default_registry`]: the stock forest sessions start from
//!
//! Trees are built once at startup and are read-heavy afterwards. Read paths
//! (`lookup`, `enumerate`, `resolve`) take `&self`, are pure, and never fail
//! on a well-formed registry; mutation takes `&mut self`, so the
//! mutate/enumerate exclusion the contracts require is enforced by the
//! borrow checker. Alias edges are validated for acyclicity when installed,
//! never at resolution time.

pub use error::{RegistryError, Result};
pub use node::{ActionId, LiteralNode, NodeId};
pub use registry::{Enumerate, LiteralRegistry, MatchResult};
pub use symbol::{SpecialKey, Symbol, seq};

pub mod builtins;
mod error;
mod node;
mod registry;
mod symbol;
