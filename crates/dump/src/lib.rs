//! Diagnostic dump rendering for the command layer.
//!
//! Read-only views over the literal registry and the live register/mark
//! collaborators, rendered as line-oriented UTF-8 text for a host display
//! pane. The host owns all further formatting (wrapping, coloring, paging).
//!
//! Empty results always render explicit sentinel text (`"No entries"`,
//! `"No register"`, `"No mark"`) so the host never shows an ambiguous
//! empty pane. Collaborator data may be mutated by the host while a dump
//! renders; every dump is an unsynchronized snapshot.

pub use format::{NO_ENTRIES, describe_literals, render_literals};
pub use marks::{NO_MARK, NO_NAME, list_marks};
pub use options::{
	DEFAULT_REGISTERS_MAX_STRING, DumpOptions, OptionError, REGISTERS_MAX_STRING,
};
pub use registers::{NO_REGISTER, NOT_USED, list_registers};
pub use sources::{BufferSource, RegisterSource};

mod format;
mod marks;
pub mod options;
mod registers;
mod sources;
