use std::collections::BTreeMap;

use super::*;
use crate::options::load;

struct FakeRegisters(BTreeMap<char, Vec<u8>>);

impl FakeRegisters {
	fn of(entries: &[(char, &str)]) -> Self {
		Self(
			entries
				.iter()
				.map(|&(name, content)| (name, content.as_bytes().to_vec()))
				.collect(),
		)
	}
}

impl RegisterSource for FakeRegisters {
	fn registers(&self) -> BTreeMap<char, Vec<u8>> {
		self.0.clone()
	}
}

#[test]
fn lines_are_sorted_and_prefixed() {
	let source = FakeRegisters::of(&[('b', "two"), ('a', "one")]);
	let lines = list_registers(&source, &DumpOptions::new());
	assert_eq!(lines, vec!["\"a one".to_owned(), "\"b two".to_owned()]);
}

#[test]
fn empty_default_and_digit_registers_stay_visible() {
	let source = FakeRegisters::of(&[('"', ""), ('0', ""), ('7', ""), ('a', ""), ('b', "kept")]);
	let lines = list_registers(&source, &DumpOptions::new());
	assert_eq!(
		lines,
		vec![
			format!("\"\" {NOT_USED}"),
			format!("\"0 {NOT_USED}"),
			format!("\"7 {NOT_USED}"),
			"\"b kept".to_owned(),
		]
	);
}

#[test]
fn content_is_truncated_to_the_configured_maximum() {
	let mut options = DumpOptions::new();
	options.register(REGISTERS_MAX_STRING, 8).unwrap();
	let source = FakeRegisters::of(&[('a', "0123456789ab"), ('b', "01234567")]);
	let lines = list_registers(&source, &options);
	assert_eq!(lines, vec!["\"a 01234567...".to_owned(), "\"b 01234567".to_owned()]);
	// Rendered content never exceeds max + 3.
	assert!(lines.iter().all(|l| l.chars().count() <= 3 + 8 + 3));
}

#[test]
fn default_maximum_applies_when_the_option_is_absent() {
	let long = "x".repeat(2000);
	let source = FakeRegisters::of(&[('a', &long)]);
	let lines = list_registers(&source, &DumpOptions::new());
	let content = lines[0].strip_prefix("\"a ").unwrap();
	assert_eq!(content.chars().count(), DEFAULT_REGISTERS_MAX_STRING as usize + 3);
	assert!(content.ends_with("..."));

	// The registered option takes over.
	let mut options = DumpOptions::new();
	load(&mut options).unwrap();
	let lines = list_registers(&source, &options);
	let content = lines[0].strip_prefix("\"a ").unwrap();
	assert_eq!(content.chars().count(), DEFAULT_REGISTERS_MAX_STRING as usize + 3);
}

#[test]
fn sentinel_when_nothing_would_be_listed() {
	let source = FakeRegisters::of(&[('a', ""), ('z', "")]);
	assert_eq!(list_registers(&source, &DumpOptions::new()), vec![NO_REGISTER.to_owned()]);
	let source = FakeRegisters::of(&[]);
	assert_eq!(list_registers(&source, &DumpOptions::new()), vec![NO_REGISTER.to_owned()]);
}
