//! Register dump rendering.

use crate::options::{DEFAULT_REGISTERS_MAX_STRING, DumpOptions, REGISTERS_MAX_STRING};
use crate::sources::RegisterSource;

#[cfg(test)]
mod tests;

/// Sentinel emitted when no register would be listed.
pub const NO_REGISTER: &str = "No register";

/// Placeholder for an always-visible register with no content.
pub const NOT_USED: &str = "(not used)";

/// Renders one line per register, sorted by register name.
///
/// Empty registers are suppressed, except the default register `"` and the
/// digit-named registers, which always appear with the [`NOT_USED`]
/// placeholder. Content is decoded as UTF-8 (lossily) and truncated to the
/// configured maximum number of characters plus a trailing `...`.
pub fn list_registers<S: RegisterSource>(source: &S, options: &DumpOptions) -> Vec<String> {
	let max = options
		.get(REGISTERS_MAX_STRING)
		.unwrap_or(DEFAULT_REGISTERS_MAX_STRING) as usize;
	let mut lines = Vec::new();
	for (name, content) in source.registers() {
		let text = if !content.is_empty() {
			truncate(&String::from_utf8_lossy(&content), max)
		} else if always_visible(name) {
			NOT_USED.to_owned()
		} else {
			continue;
		};
		lines.push(format!("\"{name} {text}"));
	}
	if lines.is_empty() {
		lines.push(NO_REGISTER.to_owned());
	}
	lines
}

/// The default register and the digit registers are reported even when
/// empty.
fn always_visible(name: char) -> bool {
	name == '"' || name.is_ascii_digit()
}

fn truncate(text: &str, max: usize) -> String {
	let mut chars = text.chars();
	let head: String = chars.by_ref().take(max).collect();
	if chars.next().is_none() {
		head
	} else {
		head + "..."
	}
}
