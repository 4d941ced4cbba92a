//! Tree nodes and identifier newtypes.

use std::collections::BTreeMap;

use crate::symbol::Symbol;

/// Numeric identifier for a semantic action bound to a literal.
///
/// The registry does not interpret action ids; the dispatcher maps them to
/// handlers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActionId(pub u32);

impl ActionId {
	/// Returns the underlying u32 value.
	#[inline]
	pub fn as_u32(self) -> u32 {
		self.0
	}
}

/// Dense index of a node in the registry arena.
///
/// Ids are only meaningful for the registry that issued them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(u32);

impl NodeId {
	pub(crate) fn new(index: usize) -> Self {
		Self(index as u32)
	}

	pub(crate) fn index(self) -> usize {
		self.0 as usize
	}
}

/// One literal in the definition tree.
///
/// Category roots carry no symbol; every other node matches exactly one.
/// Children are keyed by symbol, so sibling uniqueness and ascending-symbol
/// iteration hold by construction. The alias edge is non-owning: it redirects
/// resolution to another node's subtree and never participates in ownership.
#[derive(Debug, Clone)]
pub struct LiteralNode {
	symbol: Option<Symbol>,
	desc: String,
	action: Option<ActionId>,
	children: BTreeMap<Symbol, NodeId>,
	alias: Option<NodeId>,
}

impl LiteralNode {
	pub(crate) fn root() -> Self {
		Self {
			symbol: None,
			desc: String::new(),
			action: None,
			children: BTreeMap::new(),
			alias: None,
		}
	}

	pub(crate) fn leaf(symbol: Symbol) -> Self {
		Self { symbol: Some(symbol), ..Self::root() }
	}

	/// The symbol this node matches; `None` for category roots.
	pub fn symbol(&self) -> Option<Symbol> {
		self.symbol
	}

	/// Human-readable description, possibly empty.
	pub fn desc(&self) -> &str {
		&self.desc
	}

	pub(crate) fn set_desc(&mut self, desc: &str) {
		self.desc = desc.to_owned();
	}

	/// The semantic action bound to this literal, if any.
	pub fn action(&self) -> Option<ActionId> {
		self.action
	}

	pub(crate) fn set_action(&mut self, action: ActionId) {
		self.action = Some(action);
	}

	/// The alias edge, if one is installed.
	pub fn alias(&self) -> Option<NodeId> {
		self.alias
	}

	pub(crate) fn set_alias(&mut self, target: NodeId) {
		self.alias = Some(target);
	}

	/// Child nodes in ascending symbol order.
	pub fn children(&self) -> impl DoubleEndedIterator<Item = (Symbol, NodeId)> + '_ {
		self.children.iter().map(|(&symbol, &id)| (symbol, id))
	}

	/// The child matching `symbol`, if present.
	pub fn child(&self, symbol: Symbol) -> Option<NodeId> {
		self.children.get(&symbol).copied()
	}

	pub(crate) fn insert_child(&mut self, symbol: Symbol, id: NodeId) {
		self.children.insert(symbol, id);
	}

	/// Returns `true` if the node has at least one child of its own.
	pub fn has_children(&self) -> bool {
		!self.children.is_empty()
	}

	/// Canonical token for the node's symbol; empty for roots.
	pub fn token(&self) -> String {
		self.symbol.map(|s| s.token()).unwrap_or_default()
	}
}
