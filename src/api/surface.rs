//! ### Surface
//! The host editor, as seen by the cursor tracker.
//!
//! Hosts implement [TextSurface] to answer layout queries and to draw cursors; the tracker never
//! assumes a specific editor. Every render hook has a no-op default, so a headless surface only
//! needs to answer queries.

use std::time::Duration;

use tokio::sync::mpsc;

use crate::api::cursor::Cursor;
use crate::api::delta::Delta;
use crate::cursor::worker::Command;

/// Glyph box of a single content unit, relative to the visible surface.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Bounds {
	pub top: f64,
	pub left: f64,
	pub width: f64,
	pub height: f64,
}

/// Screen-space rectangle, in surface coordinates.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Rect {
	pub top: f64,
	pub left: f64,
	pub width: f64,
	pub height: f64,
}

/// Where and how a cursor should be drawn.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Placement {
	/// caret, drawn at the end of the selection
	pub caret: Rect,
	/// one highlight block per visual line spanned by the selection, empty for carets
	pub selection: Vec<Rect>,
	/// flag would overflow the top edge
	pub near_top: bool,
	/// flag would overflow the left edge
	pub near_left: bool,
	/// flag would overflow the right edge
	pub near_right: bool,
}

/// Handle given to a [TextSurface] to report host events to the cursor worker.
///
/// Notifications join the same queue as controller requests, so everything is handled in the
/// order it was sent. A listener doesn't keep its worker alive.
#[derive(Debug, Clone)]
pub struct SurfaceListener(pub(crate) mpsc::WeakUnboundedSender<Command>);

impl SurfaceListener {
	/// Report a document change, already applied to the surface.
	///
	/// Returns false if the worker is gone.
	pub fn text_changed(&self, delta: Delta) -> bool {
		self.send(Command::Delta(delta))
	}

	/// Report a container resize. Returns false if the worker is gone.
	pub fn resized(&self) -> bool {
		self.send(Command::Refresh)
	}

	fn send(&self, command: Command) -> bool {
		self.0.upgrade().is_some_and(|tx| tx.send(command).is_ok())
	}
}

/// Host editor capabilities consumed by the cursor tracker.
pub trait TextSurface {
	/// Host handle to the leaf node holding some content.
	type Leaf;

	/// Bounding box of the content unit at `index`, None if it isn't laid out.
	fn bounds(&self, index: usize) -> Option<Bounds>;

	/// Leaf containing `index`, with the offset of `index` inside it.
	fn leaf(&self, index: usize) -> Option<(Self::Leaf, usize)>;

	/// Current document length, in content units.
	fn length(&self) -> usize;

	/// Vertical scroll of the surface container, added to every placement.
	fn scroll_top(&self) -> f64 {
		0.0
	}

	/// Visible width of the surface, used to flip flags near the right edge.
	fn width(&self) -> f64 {
		f64::INFINITY
	}

	/// Width and height of the name flag drawn for a cursor.
	fn flag_size(&self, _cursor: &Cursor) -> (f64, f64) {
		(0.0, 0.0)
	}

	/// Start reporting document changes to `listener`. Only called when listener auto-registration
	/// is enabled.
	fn listen_text_changes(&mut self, _listener: SurfaceListener) {}

	/// Start reporting container resizes to `listener`.
	fn listen_resizes(&mut self, _listener: SurfaceListener) {}

	/// A new cursor appeared: build its visual representation from `template`.
	fn build_cursor(&mut self, _cursor: &Cursor, _template: &str) {}

	/// Name or color of an existing cursor changed.
	fn restyle_cursor(&mut self, _cursor: &Cursor) {}

	/// Move a cursor's visual representation.
	fn place_cursor(&mut self, _cursor: &Cursor, _placement: &Placement) {}

	/// Show or hide a cursor, animating over `transition`.
	fn set_cursor_hidden(&mut self, _cursor: &Cursor, _hidden: bool, _transition: Duration) {}

	/// A cursor was removed: drop its visual representation.
	fn detach_cursor(&mut self, _cursor: &Cursor) {}
}
