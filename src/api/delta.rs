//! ### Delta
//! An ordered sequence of insert, delete and retain operations describing a document mutation.
//!
//! Only lengths are carried: cursors track content units, not the content itself.

use crate::api::cursor::UserId;

/// A single step of a [Delta], applied at the running document offset.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub enum Op {
	/// `len` content units inserted, optionally attributed to an author.
	Insert { len: usize, author: Option<UserId> },
	/// `len` content units removed.
	Delete(usize),
	/// `len` content units left untouched.
	Retain(usize),
}

impl Op {
	pub fn len(&self) -> usize {
		match self {
			Op::Insert { len, .. } | Op::Delete(len) | Op::Retain(len) => *len,
		}
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}
}

/// An op stream, as delivered by the host on every text change.
///
/// ```
/// use multicursor::api::Delta;
///
/// let delta = Delta::default().retain(5).delete(2).insert(3);
/// assert_eq!(delta.target_len(10), Some(11));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub struct Delta {
	pub ops: Vec<Op>,
}

impl Delta {
	pub fn retain(mut self, len: usize) -> Self {
		self.ops.push(Op::Retain(len));
		self
	}

	pub fn delete(mut self, len: usize) -> Self {
		self.ops.push(Op::Delete(len));
		self
	}

	/// insert `len` units without an author
	pub fn insert(mut self, len: usize) -> Self {
		self.ops.push(Op::Insert { len, author: None });
		self
	}

	/// insert `len` units typed by `author`
	pub fn insert_by(mut self, len: usize, author: impl Into<UserId>) -> Self {
		self.ops.push(Op::Insert { len, author: Some(author.into()) });
		self
	}

	pub fn is_empty(&self) -> bool {
		self.ops.iter().all(Op::is_empty)
	}

	/// total content units added by this delta
	pub fn inserted(&self) -> usize {
		self.ops.iter()
			.filter(|op| matches!(op, Op::Insert { .. }))
			.map(Op::len)
			.sum()
	}

	/// total content units removed by this delta
	pub fn deleted(&self) -> usize {
		self.ops.iter()
			.filter(|op| matches!(op, Op::Delete(_)))
			.map(Op::len)
			.sum()
	}

	/// Document length after applying this delta to a document of `base_len` units.
	///
	/// Returns None if the delta deletes more than the document holds.
	pub fn target_len(&self, base_len: usize) -> Option<usize> {
		(base_len + self.inserted()).checked_sub(self.deleted())
	}
}

impl From<Vec<Op>> for Delta {
	fn from(ops: Vec<Op>) -> Self {
		Self { ops }
	}
}

impl FromIterator<Op> for Delta {
	fn from_iter<T: IntoIterator<Item = Op>>(iter: T) -> Self {
		Self { ops: iter.into_iter().collect() }
	}
}

#[cfg(test)]
mod tests {
	use super::{Delta, Op};

	#[test]
	fn target_len_counts_inserts_and_deletes() {
		let delta = Delta::default()
			.retain(4)
			.insert_by(6, "alice")
			.delete(3)
			.retain(2)
			.insert(1);
		assert_eq!(delta.inserted(), 7);
		assert_eq!(delta.deleted(), 3);
		assert_eq!(delta.target_len(20), Some(24));
	}

	#[test]
	fn target_len_rejects_overdeletion() {
		let delta = Delta::default().delete(10);
		assert_eq!(delta.target_len(4), None);
	}

	#[test]
	fn zero_length_ops_make_empty_delta() {
		let delta: Delta = vec![Op::Retain(0), Op::Delete(0)].into();
		assert!(delta.is_empty());
		assert!(!Delta::default().retain(1).is_empty());
	}
}
