use serde_json::Value;

use crate::error::{ContentError, ContentResult};

const DELIMITER: &str = "---";

/// Ordered `key: value` metadata from the top of a post.
///
/// Keys keep file order; a repeated key replaces the earlier value in place.
/// Unknown keys are kept so newer post files still load.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Frontmatter {
	fields: Vec<(String, Value)>,
}

impl Frontmatter {
	/// Value of `key`.
	pub fn get(&self, key: &str) -> Option<&Value> {
		self.fields.iter().find(|(k, _)| k == key).map(|(_, v)| v)
	}

	/// String value of `key`, if it is one.
	pub fn text(&self, key: &str) -> Option<&str> {
		self.get(key).and_then(Value::as_str)
	}

	/// Boolean value of `key`, if it is one.
	pub fn flag(&self, key: &str) -> Option<bool> {
		self.get(key).and_then(Value::as_bool)
	}

	/// Sets `key`, replacing an existing value.
	pub fn insert(&mut self, key: impl Into<String>, value: Value) {
		let key = key.into();
		match self.fields.iter_mut().find(|(k, _)| *k == key) {
			Some(slot) => slot.1 = value,
			None => self.fields.push((key, value)),
		}
	}

	/// Removes `key`, returning its value.
	pub fn remove(&mut self, key: &str) -> Option<Value> {
		let at = self.fields.iter().position(|(k, _)| k == key)?;
		Some(self.fields.remove(at).1)
	}

	/// Fields in file order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
		self.fields.iter().map(|(k, v)| (k.as_str(), v))
	}

	/// Number of keys.
	pub fn len(&self) -> usize {
		self.fields.len()
	}

	/// Whether no key is present.
	pub fn is_empty(&self) -> bool {
		self.fields.is_empty()
	}
}

fn malformed(reason: &str) -> ContentError {
	ContentError::Malformed {
		path: String::new(),
		reason: reason.into(),
	}
}

/// Splits a post into its frontmatter and body.
///
/// The text must open with a `---` line and contain a later `---` line;
/// otherwise the post is malformed.
pub fn parse_frontmatter(raw: &str) -> ContentResult<(Frontmatter, String)> {
	let rest = raw
		.strip_prefix("---\n")
		.or_else(|| raw.strip_prefix("---\r\n"))
		.ok_or_else(|| malformed("missing opening delimiter"))?;

	let mut offset = 0;
	for line in rest.split_inclusive('\n') {
		if line.trim_end_matches(['\n', '\r']) == DELIMITER {
			let meta = parse_block(&rest[..offset]);
			let body = rest[offset + line.len()..].to_string();
			return Ok((meta, body));
		}
		offset += line.len();
	}
	Err(malformed("missing closing delimiter"))
}

fn parse_block(block: &str) -> Frontmatter {
	let mut meta = Frontmatter::default();
	for line in block.lines() {
		if let Some((key, raw)) = split_line(line) {
			meta.insert(key, coerce(raw));
		}
	}
	meta
}

/// `key: value` where the key is `[A-Za-z][A-Za-z0-9_]*`.
fn split_line(line: &str) -> Option<(&str, &str)> {
	let mut chars = line.char_indices();
	let (_, first) = chars.next()?;
	if !first.is_ascii_alphabetic() {
		return None;
	}
	let key_end = chars
		.find(|&(_, c)| !(c.is_ascii_alphanumeric() || c == '_'))
		.map_or(line.len(), |(i, _)| i);
	let key = &line[..key_end];
	let value = line[key_end..].trim_start().strip_prefix(':')?;
	Some((key, value.trim_start()))
}

fn coerce(raw: &str) -> Value {
	match raw {
		"true" => return Value::Bool(true),
		"false" => return Value::Bool(false),
		_ => {}
	}
	if raw.starts_with('[') {
		return serde_json::from_str(&requote(raw)).unwrap_or_else(|_| Value::String(raw.into()));
	}
	let quoted = raw.len() >= 2
		&& ((raw.starts_with('"') && raw.ends_with('"'))
			|| (raw.starts_with('\'') && raw.ends_with('\'')));
	if quoted {
		return Value::String(raw[1..raw.len() - 1].into());
	}
	Value::String(raw.into())
}

/// Turns `'single'` quoted segments into `"double"` quoted ones.
fn requote(raw: &str) -> String {
	let mut out = String::with_capacity(raw.len());
	let mut rest = raw;
	while let Some(open) = rest.find('\'') {
		let after = &rest[open + 1..];
		let Some(close) = after.find('\'') else {
			break;
		};
		out.push_str(&rest[..open]);
		out.push('"');
		out.push_str(&after[..close]);
		out.push('"');
		rest = &after[close + 1..];
	}
	out.push_str(rest);
	out
}

/// Writes metadata and body back into the delimited format.
///
/// Strings are always double quoted so values such as `true` or `[x]` stay
/// strings when read back.
pub fn serialize_frontmatter(meta: &Frontmatter, body: &str) -> String {
	let mut out = String::from("---\n");
	for (key, value) in meta.iter() {
		let rendered = match value {
			Value::String(s) => format!("\"{s}\""),
			other => other.to_string(),
		};
		out.push_str(key);
		out.push_str(": ");
		out.push_str(&rendered);
		out.push('\n');
	}
	out.push_str("---\n");
	out.push_str(body);
	out
}

#[cfg(test)]
mod tests {
	use serde_json::json;

	use super::*;

	const POST: &str = "---\n\
title: \"Hello, Verse\"\n\
description: 'Quoted once'\n\
date: 2025-06-01\n\
tags: ['rust', \"wasm\"]\n\
draft: false\n\
mood: upbeat\n\
---\n\
Body line one.\n\
Body line two.\n";

	#[test]
	fn parses_and_coerces_values() {
		let (meta, body) = parse_frontmatter(POST).unwrap();
		assert_eq!(meta.text("title"), Some("Hello, Verse"));
		assert_eq!(meta.text("description"), Some("Quoted once"));
		assert_eq!(meta.text("date"), Some("2025-06-01"));
		assert_eq!(meta.get("tags"), Some(&json!(["rust", "wasm"])));
		assert_eq!(meta.flag("draft"), Some(false));
		assert_eq!(meta.text("mood"), Some("upbeat"));
		assert_eq!(body, "Body line one.\nBody line two.\n");
	}

	#[test]
	fn broken_arrays_stay_strings() {
		let (meta, _) = parse_frontmatter("---\ntags: [oops\n---\n").unwrap();
		assert_eq!(meta.text("tags"), Some("[oops"));
	}

	#[test]
	fn ignores_lines_that_are_not_pairs() {
		let (meta, _) = parse_frontmatter("---\n# comment\n9lives: x\nok : yes\n---").unwrap();
		assert_eq!(meta.len(), 1);
		assert_eq!(meta.text("ok"), Some("yes"));
	}

	#[test]
	fn later_keys_win() {
		let (meta, _) = parse_frontmatter("---\na: 1\na: 2\n---\n").unwrap();
		assert_eq!(meta.len(), 1);
		assert_eq!(meta.text("a"), Some("2"));
	}

	#[test]
	fn crlf_files_parse() {
		let (meta, body) = parse_frontmatter("---\r\ntitle: x\r\n---\r\nbody").unwrap();
		assert_eq!(meta.text("title"), Some("x"));
		assert_eq!(body, "body");
	}

	#[test]
	fn missing_delimiters_are_malformed() {
		for raw in ["title: x\n", "---\ntitle: x\n", "", "--- \ntitle: x\n---\n"] {
			assert!(
				matches!(parse_frontmatter(raw), Err(ContentError::Malformed { .. })),
				"{raw:?}"
			);
		}
	}

	#[test]
	fn requote_pairs_left_to_right() {
		assert_eq!(requote("['a', 'b c']"), "[\"a\", \"b c\"]");
		assert_eq!(requote("['dangling]"), "['dangling]");
	}

	#[test]
	fn serialized_strings_keep_their_type() {
		let mut meta = Frontmatter::default();
		meta.insert("title", json!("true"));
		meta.insert("draft", json!(true));
		meta.insert("tags", json!(["a", "b"]));
		let text = serialize_frontmatter(&meta, "hi\n");
		let (back, body) = parse_frontmatter(&text).unwrap();
		assert_eq!(back, meta);
		assert_eq!(body, "hi\n");
	}

	#[cfg(not(target_arch = "wasm32"))]
	mod props {
		use proptest::prelude::*;

		use super::*;

		fn value() -> impl Strategy<Value = Value> {
			prop_oneof![
				any::<bool>().prop_map(Value::Bool),
				"[^\"'\\r\\n]{0,24}".prop_map(Value::String),
				prop::collection::vec("[a-z0-9 ]{0,10}", 0..4)
					.prop_map(|v| Value::Array(v.into_iter().map(Value::String).collect())),
			]
		}

		proptest! {
			#[test]
			fn serialize_then_parse_round_trips(
				fields in prop::collection::vec(("[a-zA-Z][a-zA-Z0-9_]{0,8}", value()), 0..8),
				body in "[^\\r]{0,64}",
			) {
				let mut meta = Frontmatter::default();
				for (k, v) in fields {
					meta.insert(k, v);
				}
				let (back, back_body) = parse_frontmatter(&serialize_frontmatter(&meta, &body)).unwrap();
				prop_assert_eq!(back, meta);
				prop_assert_eq!(back_body, body);
			}
		}
	}
}
