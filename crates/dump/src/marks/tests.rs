use std::collections::BTreeMap;

use super::*;

struct Buf {
	path: Option<String>,
	marks: Option<BTreeMap<char, u64>>,
}

struct FakeBuffers(Vec<Buf>);

impl BufferSource for FakeBuffers {
	type Handle = usize;

	fn buffers(&self) -> Vec<usize> {
		(0..self.0.len()).collect()
	}

	fn path(&self, buffer: &usize) -> Option<String> {
		self.0[*buffer].path.clone()
	}

	fn marks(&self, buffer: &usize) -> Option<BTreeMap<char, u64>> {
		self.0[*buffer].marks.clone()
	}
}

#[test]
fn sections_per_buffer_with_blank_separators() {
	let source = FakeBuffers(vec![
		Buf {
			path: Some("/tmp/a.bin".to_owned()),
			marks: Some(BTreeMap::from([('b', 32), ('a', 16)])),
		},
		Buf { path: None, marks: Some(BTreeMap::new()) },
	]);
	let lines = list_marks(&source);
	assert_eq!(
		lines,
		vec![
			"/tmp/a.bin".to_owned(),
			"  'a' 16[B]".to_owned(),
			"  'b' 32[B]".to_owned(),
			String::new(),
			NO_NAME.to_owned(),
			NO_MARK.to_owned(),
		]
	);
}

#[test]
fn unavailable_buffer_degrades_without_aborting_the_dump() {
	let source = FakeBuffers(vec![
		Buf { path: Some("/tmp/gone.bin".to_owned()), marks: None },
		Buf {
			path: Some("/tmp/live.bin".to_owned()),
			marks: Some(BTreeMap::from([('x', 7)])),
		},
	]);
	let lines = list_marks(&source);
	assert_eq!(
		lines,
		vec![
			"/tmp/gone.bin".to_owned(),
			NO_MARK.to_owned(),
			String::new(),
			"/tmp/live.bin".to_owned(),
			"  'x' 7[B]".to_owned(),
		]
	);
}

#[test]
fn sentinel_when_there_are_no_buffers() {
	let source = FakeBuffers(Vec::new());
	assert_eq!(list_marks(&source), vec![NO_MARK.to_owned()]);
}
