//! Collaborator contracts the dumps read from.
//!
//! The dump layer only ever reads snapshots; it never mutates collaborator
//! state and never caches a snapshot across calls. The host may mutate the
//! underlying data concurrently, so two reads are not a consistent joint
//! snapshot and a dump may be stale the instant it is produced.

use std::collections::BTreeMap;

/// Read-only view of the session's registers.
pub trait RegisterSource {
	/// Register name to byte content, possibly empty. A fresh snapshot
	/// per call.
	fn registers(&self) -> BTreeMap<char, Vec<u8>>;
}

/// Read-only view of the open buffers and their marks.
pub trait BufferSource {
	/// Opaque handle naming one open buffer.
	type Handle;

	/// All open buffers, in display order.
	fn buffers(&self) -> Vec<Self::Handle>;

	/// The buffer's backing path, if it has one.
	fn path(&self, buffer: &Self::Handle) -> Option<String>;

	/// Mark name to file-relative byte offset, or `None` if the buffer's
	/// data was unavailable at read time (e.g. it disappeared mid-dump).
	fn marks(&self, buffer: &Self::Handle) -> Option<BTreeMap<char, u64>>;
}
