//! ### Delta Applier
//! Position arithmetic keeping cursors on the same logical content across document changes.
//!
//! A [Delta] is walked in document order with a running offset expressed against the post-op
//! document: inserts and retains advance it, deletes don't. Each insert or delete becomes a
//! [Step] at that offset, which the [crate::cursor::Registry] applies to every tracked cursor.
//!
//! Carets are sticky to the right: content inserted exactly at a caret pushes it forward. The
//! inserting author is the exception, its cursor is pinned right after the inserted content.

use crate::api::{Delta, Op, Position, UserId};

/// An effective edit, located at the running offset of its op.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step<'a> {
	Insert { at: usize, len: usize, author: Option<&'a UserId> },
	Delete { at: usize, len: usize },
}

/// Walk `delta`, locating every insert and delete it carries.
pub fn steps(delta: &Delta) -> impl Iterator<Item = Step<'_>> + '_ {
	let mut offset = 0usize;
	delta.ops.iter().filter_map(move |op| {
		let at = offset;
		match op {
			Op::Retain(len) => {
				offset = offset.saturating_add(*len);
				None
			},
			Op::Insert { len, author } => {
				offset = offset.saturating_add(*len);
				Some(Step::Insert { at, len: *len, author: author.as_ref() })
			},
			Op::Delete(len) => Some(Step::Delete { at, len: *len }),
		}
	})
}

/// Shift a position after `len` units were inserted at `at`.
///
/// Positions starting at or after `at` move as a whole, selections straddling `at` grow.
pub fn insert(position: Position, at: usize, len: usize) -> Position {
	if position.index >= at {
		Position { index: position.index.saturating_add(len), ..position }
	} else if position.end() > at {
		Position { length: position.length.saturating_add(len), ..position }
	} else {
		position
	}
}

/// Shift a position after `len` units were removed at `at`.
///
/// Boundaries inside the removed span collapse to `at`: a selection overlapping it is truncated,
/// never split.
pub fn delete(position: Position, at: usize, len: usize) -> Position {
	let map = |p: usize| {
		if p <= at {
			p
		} else if p <= at.saturating_add(len) {
			at
		} else {
			p - len
		}
	};
	let index = map(position.index);
	Position { index, length: map(position.end()) - index }
}

/// Apply a single step to a position owned by nobody in particular.
pub fn shift(position: Position, step: Step<'_>) -> Position {
	match step {
		Step::Insert { at, len, .. } => insert(position, at, len),
		Step::Delete { at, len } => delete(position, at, len),
	}
}

/// Carry a position through a whole delta, ignoring authorship.
///
/// ```
/// use multicursor::api::{Delta, Position};
///
/// let delta = Delta::default().retain(2).insert(3).retain(4).delete(2);
/// assert_eq!(multicursor::applier::transform(Position::caret(15), &delta), Position::caret(16));
/// ```
pub fn transform(position: Position, delta: &Delta) -> Position {
	steps(delta).fold(position, shift)
}
