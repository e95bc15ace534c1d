//! # TextChange
//!
//! an editor-friendly representation of a text change in a document
//! to easily feed the cursor tracker from editors that don't speak deltas

use crate::api::cursor::UserId;
use crate::api::delta::Delta;

/// an editor-friendly representation of a text change in a document
///
/// this represent a range in the previous state of the string and a new content which should be
/// replaced to it, allowing to represent any combination of deletions, insertions or replacements
///
/// indexes are char indexes, matching the content units cursors count
///
/// ### examples
/// to insert 'a' after 4th character we should send a
///     `TextChange { start: 4, end: 4, content: "a".into(), author: None }`
///
/// to delete a the fourth character we should send a
///     `TextChange { start: 3, end: 4, content: "".into(), author: None }`
///
#[derive(Clone, Debug, Default)]
pub struct TextChange {
	/// range start of text change, as char index in document previous state
	pub start: usize,
	/// range end of text change, as char index in document previous state
	pub end: usize,
	/// new content of text inside span
	pub content: String,
	/// user who typed the new content, if known
	pub author: Option<UserId>,
}

impl TextChange {
	/// returns true if this TextChange deletes existing text
	pub fn is_delete(&self) -> bool {
		self.start < self.end
	}

	/// returns true if this TextChange adds new text
	pub fn is_insert(&self) -> bool {
		!self.content.is_empty()
	}

	/// returns true if this TextChange is effectively as no-op
	pub fn is_empty(&self) -> bool {
		!self.is_delete() && !self.is_insert()
	}

	/// applies this text change to given text, returning a new string
	///
	/// the span is clipped to the text extents, so this never panics
	pub fn apply(&self, txt: &str) -> String {
		let start = byte_offset(txt, self.start);
		let end = byte_offset(txt, self.end.max(self.start));
		let pre = &txt[..start];
		let post = &txt[end..];
		format!("{}{}{}", pre, self.content, post)
	}

	/// express this change as an op stream over a document
	pub fn to_delta(&self) -> Delta {
		let mut delta = Delta::default();
		if self.start > 0 {
			delta = delta.retain(self.start);
		}
		if self.is_delete() {
			delta = delta.delete(self.end - self.start);
		}
		if self.is_insert() {
			let len = self.content.chars().count();
			delta = match &self.author {
				Some(author) => delta.insert_by(len, author.clone()),
				None => delta.insert(len),
			};
		}
		delta
	}
}

impl From<&TextChange> for Delta {
	fn from(value: &TextChange) -> Self {
		value.to_delta()
	}
}

fn byte_offset(txt: &str, chars: usize) -> usize {
	txt.char_indices()
		.nth(chars)
		.map(|(i, _)| i)
		.unwrap_or(txt.len())
}
