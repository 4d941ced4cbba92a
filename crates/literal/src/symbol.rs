//! Input symbols matched by the literal tree.

use std::fmt;

/// A named non-printable key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SpecialKey {
	/// Up arrow.
	Up,
	/// Down arrow.
	Down,
	/// Left arrow.
	Left,
	/// Right arrow.
	Right,
	/// Enter / return.
	Enter,
	/// Horizontal tab.
	Tab,
	/// Backspace.
	Backspace,
	/// Forward delete.
	Delete,
	/// Space bar.
	Space,
	/// Escape.
	Escape,
}

impl SpecialKey {
	/// Canonical token for this key in dump output and config syntax.
	pub fn token(self) -> &'static str {
		match self {
			SpecialKey::Up => "up",
			SpecialKey::Down => "down",
			SpecialKey::Left => "left",
			SpecialKey::Right => "right",
			SpecialKey::Enter => "enter",
			SpecialKey::Tab => "tab",
			SpecialKey::Backspace => "backspace",
			SpecialKey::Delete => "del",
			SpecialKey::Space => "space",
			SpecialKey::Escape => "esc",
		}
	}
}

/// An atomic input unit the command layer can match.
///
/// The derived ordering is total and is the canonical order used uniformly
/// for traversal and display, regardless of insertion order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Symbol {
	/// A printable character typed directly.
	Char(char),
	/// A character typed with the control modifier held.
	Ctrl(char),
	/// A named non-printable key.
	Key(SpecialKey),
}

impl Symbol {
	/// Canonical textual token: `g`, `ctrl-w`, `up`.
	pub fn token(&self) -> String {
		match self {
			Symbol::Char(c) => c.to_string(),
			Symbol::Ctrl(c) => format!("ctrl-{c}"),
			Symbol::Key(k) => k.token().to_owned(),
		}
	}
}

impl fmt::Display for Symbol {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.token())
	}
}

/// Maps a string of printable characters to a symbol sequence.
///
/// Convenience for building and matching plain-character literals; special
/// keys have no textual spelling here and are constructed directly.
pub fn seq(input: &str) -> Vec<Symbol> {
	input.chars().map(Symbol::Char).collect()
}
