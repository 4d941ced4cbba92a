//! Literal-tree rendering.

use hexed_literal::LiteralRegistry;


/// Sentinel emitted when a category has nothing to show.
pub const NO_ENTRIES: &str = "No entries";

/// Renders the canonical tree dump of one category.
///
/// One line per enumerated node: a 1-based running index (global across the
/// whole traversal, never reset per subtree), eight spaces of indentation
/// per tree level, the canonical symbol token, and the quoted
/// human-readable rendering. A category whose root has no children, and an
/// unknown category, renders as exactly one [`NO_ENTRIES`] line, never as
/// an empty sequence.
pub fn render_literals(registry: &LiteralRegistry, category: &str) -> Vec<String> {
	let mut lines = Vec::new();
	for (i, (depth, id)) in registry.enumerate(category).enumerate() {
		let token = registry.node(id).token();
		lines.push(format!("{:>3} {}{} \"{}\"", i + 1, " ".repeat(depth * 8), token, token));
	}
	if lines.len() <= 1 {
		return vec![NO_ENTRIES.to_owned()];
	}
	lines
}

/// Lists the described literals of one category in canonical order: the
/// symbol token padded to the longest token, then the description.
pub fn describe_literals(registry: &LiteralRegistry, category: &str) -> Vec<String> {
	let described: Vec<(String, &str)> = registry
		.enumerate(category)
		.filter_map(|(_, id)| {
			let node = registry.node(id);
			(!node.desc().is_empty()).then(|| (node.token(), node.desc()))
		})
		.collect();
	let Some(width) = described.iter().map(|(token, _)| token.chars().count()).max() else {
		return vec![NO_ENTRIES.to_owned()];
	};
	described
		.into_iter()
		.map(|(token, desc)| format!("{token:<width$} {desc}"))
		.collect()
}
