//! Scoped dump options.
//!
//! Extensions register the options they consume at load time and remove
//! them at unload time; removal restores the absence of the option, not a
//! default. The store is passed to renderers at call time, so no ambient
//! mutable state exists.

use std::collections::BTreeMap;

use thiserror::Error;

/// Option key for the register-content truncation length, in characters.
pub const REGISTERS_MAX_STRING: &str = "registers_max_string";

/// Truncation length applied while [`REGISTERS_MAX_STRING`] is not
/// registered.
pub const DEFAULT_REGISTERS_MAX_STRING: i64 = 1024;

/// Errors raised by option registration and removal.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum OptionError {
	/// The key is already registered; re-registration never clobbers.
	#[error("option already registered: {0}")]
	AlreadyRegistered(String),

	/// The key is not registered.
	#[error("option not registered: {0}")]
	NotRegistered(String),

	/// The value must be declared greater than zero.
	#[error("option must be greater than zero: {0} = {1}")]
	NotPositive(String, i64),
}

/// Explicit store of numeric dump options.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DumpOptions {
	values: BTreeMap<String, i64>,
}

impl DumpOptions {
	/// Creates an empty store.
	pub fn new() -> Self {
		Self::default()
	}

	/// Registers `key` with a value greater than zero.
	///
	/// # Errors
	///
	/// [`OptionError::AlreadyRegistered`] if the key is present;
	/// [`OptionError::NotPositive`] if `value <= 0`. Either way the store
	/// is unchanged.
	pub fn register(&mut self, key: &str, value: i64) -> Result<(), OptionError> {
		if value <= 0 {
			return Err(OptionError::NotPositive(key.to_owned(), value));
		}
		if self.values.contains_key(key) {
			return Err(OptionError::AlreadyRegistered(key.to_owned()));
		}
		self.values.insert(key.to_owned(), value);
		tracing::debug!(key, value, "registered dump option");
		Ok(())
	}

	/// Removes `key`, returning its value.
	///
	/// # Errors
	///
	/// [`OptionError::NotRegistered`] if the key is absent.
	pub fn unregister(&mut self, key: &str) -> Result<i64, OptionError> {
		let value = self
			.values
			.remove(key)
			.ok_or_else(|| OptionError::NotRegistered(key.to_owned()))?;
		tracing::debug!(key, "unregistered dump option");
		Ok(value)
	}

	/// The registered value for `key`, if any.
	pub fn get(&self, key: &str) -> Option<i64> {
		self.values.get(key).copied()
	}

	/// Number of registered options.
	pub fn len(&self) -> usize {
		self.values.len()
	}

	/// Returns `true` if no options are registered.
	pub fn is_empty(&self) -> bool {
		self.values.is_empty()
	}
}

/// Registers the options the register dump consumes. Extension load hook.
pub fn load(options: &mut DumpOptions) -> Result<(), OptionError> {
	options.register(REGISTERS_MAX_STRING, DEFAULT_REGISTERS_MAX_STRING)
}

/// Removes them again. Extension unload hook; the store ends identical to
/// its state before [`load`].
pub fn unload(options: &mut DumpOptions) -> Result<(), OptionError> {
	options.unregister(REGISTERS_MAX_STRING).map(|_| ())
}
