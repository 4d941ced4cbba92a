//! Mark dump rendering.

use crate::sources::BufferSource;

#[cfg(test)]
mod tests;

/// Header used for a buffer with no backing path.
pub const NO_NAME: &str = "[No Name]";

/// Sentinel for a buffer with no marks, and for a dump with no buffers.
pub const NO_MARK: &str = "No mark";

/// Renders one section per open buffer: a header line (the buffer's path,
/// or [`NO_NAME`]), then one line per mark sorted by mark name. Sections
/// are separated by a blank line.
///
/// A buffer whose data became unavailable mid-dump degrades to its header
/// plus [`NO_MARK`]; the rest of the dump is unaffected.
pub fn list_marks<S: BufferSource>(source: &S) -> Vec<String> {
	let mut lines = Vec::new();
	for (i, buffer) in source.buffers().iter().enumerate() {
		if i > 0 {
			lines.push(String::new());
		}
		let header = source.path(buffer).unwrap_or_else(|| NO_NAME.to_owned());
		let marks = source.marks(buffer);
		if marks.is_none() {
			tracing::warn!(buffer = %header, "buffer data unavailable during mark dump");
		}
		lines.push(header);
		let marks = marks.unwrap_or_default();
		if marks.is_empty() {
			lines.push(NO_MARK.to_owned());
		} else {
			for (name, offset) in marks {
				lines.push(mark_repr(name, offset));
			}
		}
	}
	if lines.is_empty() {
		lines.push(NO_MARK.to_owned());
	}
	lines
}

/// One mark row; the offset is a byte position.
fn mark_repr(name: char, offset: u64) -> String {
	format!("  '{name}' {offset}[B]")
}
