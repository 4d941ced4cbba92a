//! The stock literal forest.
//!
//! Mirrors the editor's default command set: repeat counts, register and
//! mark selectors, and the ctrl-w window family. Sessions start from
//! [`default_registry`]; optional extensions register further categories on
//! load and deregister them on unload.

use crate::node::ActionId;
use crate::registry::LiteralRegistry;
use crate::symbol::Symbol;


/// Stable action ids for the builtin forest.
pub mod actions {
	use crate::node::ActionId;

	/// Accumulate a repeat count for the following command.
	pub const COUNT: ActionId = ActionId(1);
	/// Select the register for the next delete, yank or put.
	pub const SELECT_REGISTER: ActionId = ActionId(2);
	/// Set a mark at the cursor position.
	pub const MARK_SET: ActionId = ActionId(3);
	/// Jump to a marked position.
	pub const MARK_JUMP: ActionId = ActionId(4);
	/// Change to the next window.
	pub const WINDOW_NEXT: ActionId = ActionId(5);
	/// Change to the previous window.
	pub const WINDOW_PREV: ActionId = ActionId(6);
	/// Change to the top window.
	pub const WINDOW_TOP: ActionId = ActionId(7);
	/// Change to the bottom window.
	pub const WINDOW_BOTTOM: ActionId = ActionId(8);
	/// Split the current window.
	pub const WINDOW_SPLIT: ActionId = ActionId(9);
	/// Split the current window vertically.
	pub const WINDOW_VSPLIT: ActionId = ActionId(10);
	/// Grow the current window.
	pub const WINDOW_GROW: ActionId = ActionId(11);
	/// Shrink the current window.
	pub const WINDOW_SHRINK: ActionId = ActionId(12);
	/// Close the current window.
	pub const WINDOW_CLOSE: ActionId = ActionId(13);
	/// Make the current window the only one.
	pub const WINDOW_ONLY: ActionId = ActionId(14);
	/// Close the current window, or quit if it is the last.
	pub const WINDOW_QUIT: ActionId = ActionId(15);
}

/// Builds the registry every session starts from.
///
/// # Panics
///
/// Construction of the builtin forest is infallible by inspection; a panic
/// here is a defect in this module.
pub fn default_registry() -> LiteralRegistry {
	let mut reg = LiteralRegistry::new();
	count(&mut reg);
	register_select(&mut reg);
	marks(&mut reg);
	windows(&mut reg);
	reg
}

fn count(reg: &mut LiteralRegistry) {
	let root = reg.register_root("count").expect("builtin category");
	for lead in '1'..='9' {
		let digit = reg.add_child(root, Symbol::Char(lead));
		reg.describe(digit, "Repeat count for the following command");
		reg.bind_action(digit, actions::COUNT);
		for next in '0'..='9' {
			let more = reg.add_child(digit, Symbol::Char(next));
			reg.bind_action(more, actions::COUNT);
		}
	}
}

fn register_select(reg: &mut LiteralRegistry) {
	let root = reg.register_root("register").expect("builtin category");
	let select = reg.add_child(root, Symbol::Char('"'));
	reg.describe(
		select,
		"Use register {0-9a-zA-Z\"} for next delete, yank or put (use uppercase character to append with delete and yank)",
	);
	for name in register_names() {
		let node = reg.add_child(select, Symbol::Char(name));
		reg.bind_action(node, actions::SELECT_REGISTER);
	}
}

fn marks(reg: &mut LiteralRegistry) {
	let root = reg.register_root("mark").expect("builtin category");

	let set = reg.add_child(root, Symbol::Char('m'));
	reg.describe(set, "Set mark at cursor position, uppercase marks are valid between buffers");
	for name in mark_names() {
		let node = reg.add_child(set, Symbol::Char(name));
		reg.bind_action(node, actions::MARK_SET);
	}

	let jump = reg.add_child(root, Symbol::Char('`'));
	reg.describe(jump, "Go to marked position");
	for name in mark_names() {
		let node = reg.add_child(jump, Symbol::Char(name));
		reg.bind_action(node, actions::MARK_JUMP);
	}

	// The single quote borrows the backtick's subtree.
	let tick = reg.add_child(root, Symbol::Char('\''));
	reg.describe(tick, "Go to marked position");
	reg.set_ref(tick, jump).expect("builtin alias");
}

fn windows(reg: &mut LiteralRegistry) {
	let root = reg.register_root("window").expect("builtin category");
	let ctrlw = reg.add_child(root, Symbol::Ctrl('w'));

	let family: [(char, ActionId, &str); 11] = [
		('w', actions::WINDOW_NEXT, "Change to the next window"),
		('W', actions::WINDOW_PREV, "Change to the prev window"),
		('t', actions::WINDOW_TOP, "Change to the top window"),
		('b', actions::WINDOW_BOTTOM, "Change to the bottom window"),
		('s', actions::WINDOW_SPLIT, "Split current window"),
		('v', actions::WINDOW_VSPLIT, "Split current window vertically"),
		('+', actions::WINDOW_GROW, "Increase current window height [count] lines"),
		('-', actions::WINDOW_SHRINK, "Decrease current window height [count] lines"),
		('c', actions::WINDOW_CLOSE, "Close current window"),
		('o', actions::WINDOW_ONLY, "Make the current window the only one"),
		(
			'q',
			actions::WINDOW_QUIT,
			"Close current window if more than 1 windows exist else quit program",
		),
	];
	for (key, action, desc) in family {
		let node = reg.add_child(ctrlw, Symbol::Char(key));
		reg.describe(node, desc);
		reg.bind_action(node, action);
	}

	// Ctrl-doubled spellings of the family, as aliases of the plain keys.
	for key in ['w', 't', 'b', 's', 'v', 'o'] {
		let target = reg
			.node(ctrlw)
			.child(Symbol::Char(key))
			.expect("builtin window key");
		let (desc, action) = {
			let node = reg.node(target);
			(node.desc().to_owned(), node.action())
		};
		let doubled = reg.add_child(ctrlw, Symbol::Ctrl(key));
		reg.describe(doubled, &desc);
		if let Some(action) = action {
			reg.bind_action(doubled, action);
		}
		reg.set_ref(doubled, target).expect("builtin alias");
	}
}

fn register_names() -> impl Iterator<Item = char> {
	('a'..='z').chain('0'..='9').chain(std::iter::once('"'))
}

fn mark_names() -> impl Iterator<Item = char> {
	('a'..='z').chain('A'..='Z').chain('0'..='9')
}
