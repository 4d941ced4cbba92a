//! Error types for literal-tree construction.

use thiserror::Error;

use crate::symbol::Symbol;

/// Errors raised while building or rewiring the literal tree.
///
/// Read paths (`lookup`, `enumerate`, `resolve`) never fail on a well-formed
/// registry; everything here is a construction-time defect reported to the
/// code doing the construction.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegistryError {
	/// A category root is already bound under this name.
	#[error("duplicate category: {0}")]
	DuplicateCategory(String),

	/// No category root is bound under this name.
	#[error("unknown category: {0}")]
	UnknownCategory(String),

	/// A sibling with this symbol already exists (strict insertion only).
	#[error("duplicate symbol: {0}")]
	DuplicateSymbol(Symbol),

	/// Installing the alias would let a `ref` chain revisit a node.
	#[error("cyclic alias: {from} -> {to}")]
	CyclicAlias {
		/// Token of the node the alias was being installed on.
		from: String,
		/// Token of the requested target.
		to: String,
	},

	/// The category is still the target of alias edges from other trees.
	#[error("category is an alias target: {0}")]
	AliasedCategory(String),
}

/// Result type for registry construction.
pub type Result<T> = std::result::Result<T, RegistryError>;
