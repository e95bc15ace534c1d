//! ### Cursor
//! Represents the position of a remote user's cursor.

use crate::api::surface::Placement;
use crate::timer::TimerId;

/// Opaque and stable user identifier.
///
/// Cursors are keyed by this in the [crate::cursor::Registry].
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serialize", serde(transparent))]
pub struct UserId(String);

impl UserId {
	pub fn as_str(&self) -> &str {
		&self.0
	}
}

impl std::fmt::Display for UserId {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(&self.0)
	}
}

impl From<&str> for UserId {
	fn from(value: &str) -> Self {
		Self(value.to_string())
	}
}

impl From<String> for UserId {
	fn from(value: String) -> Self {
		Self(value)
	}
}

impl From<uuid::Uuid> for UserId {
	fn from(value: uuid::Uuid) -> Self {
		Self(value.to_string())
	}
}

/// Logical cursor position in a document, counted in content units from its start.
///
/// A zero `length` is a caret, anything else is a selection spanning `index..index+length`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
	pub index: usize,
	pub length: usize,
}

impl Position {
	pub fn caret(index: usize) -> Self {
		Self { index, length: 0 }
	}

	pub fn range(index: usize, length: usize) -> Self {
		Self { index, length }
	}

	/// first content unit after this position
	pub fn end(&self) -> usize {
		self.index.saturating_add(self.length)
	}

	pub fn is_caret(&self) -> bool {
		self.length == 0
	}

	/// Clamp this position so that it ends within a document of given length.
	pub fn clamp(self, len: usize) -> Self {
		let index = self.index.min(len);
		Self {
			index,
			length: self.length.min(len - index),
		}
	}
}

impl From<usize> for Position {
	fn from(index: usize) -> Self {
		Self::caret(index)
	}
}

impl From<std::ops::Range<usize>> for Position {
	fn from(span: std::ops::Range<usize>) -> Self {
		Self::range(span.start, span.end.saturating_sub(span.start))
	}
}

/// A remote user's cursor, as tracked by the [crate::cursor::Registry].
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub struct Cursor {
	/// Owner of this cursor.
	pub user: UserId,
	/// Display name shown on the cursor flag.
	pub name: String,
	/// Display color, interpreted by the host surface.
	pub color: String,
	/// Current logical position.
	pub position: Position,
	/// Whether the cursor is currently shown, cleared after some inactivity.
	pub visible: bool,
	/// Last screen placement, if the position could be resolved.
	#[cfg_attr(feature = "serialize", serde(skip))]
	pub placement: Option<Placement>,
	#[cfg_attr(feature = "serialize", serde(skip))]
	pub(crate) timer: Option<TimerId>,
}

impl Cursor {
	pub(crate) fn new(user: UserId, position: Position, name: String, color: String) -> Self {
		Self {
			user,
			name,
			color,
			position,
			visible: false,
			placement: None,
			timer: None,
		}
	}

	/// Whether an inactivity timer is currently pending for this cursor.
	pub fn has_pending_timer(&self) -> bool {
		self.timer.is_some()
	}
}

#[cfg(test)]
mod tests {
	use super::Position;

	#[test]
	fn position_from_range_computes_length() {
		assert_eq!(Position::from(3..7), Position::range(3, 4));
		assert_eq!(Position::from(7..3), Position::range(7, 0));
	}

	#[test]
	fn position_clamp_keeps_end_inside_document() {
		assert_eq!(Position::range(4, 10).clamp(8), Position::range(4, 4));
		assert_eq!(Position::range(12, 3).clamp(8), Position::caret(8));
		assert_eq!(Position::range(2, 3).clamp(8), Position::range(2, 3));
	}
}
