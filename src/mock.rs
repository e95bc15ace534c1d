//! Monospaced grid surface recording every render call, for tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::api::surface::{Bounds, Placement, SurfaceListener, TextSurface};
use crate::api::{Cursor, UserId};

/// units per visual line, the last one being the line break
pub const LINE: usize = 10;
pub const UNIT_W: f64 = 8.0;
pub const UNIT_H: f64 = 16.0;

#[derive(Clone, Debug, PartialEq)]
pub enum Call {
	Build(UserId),
	Restyle(UserId),
	Place(UserId, Placement),
	Hidden(UserId, bool),
	Detach(UserId),
}

#[derive(Debug)]
pub struct MockSurface {
	pub len: Arc<AtomicUsize>,
	pub scroll: f64,
	pub width: f64,
	pub flag: (f64, f64),
	/// indexes whose leaf can't be found
	pub detached: Vec<usize>,
	pub calls: Arc<Mutex<Vec<Call>>>,
	/// listeners handed over by the worker
	pub changes: Arc<Mutex<Option<SurfaceListener>>>,
	pub resizes: Arc<Mutex<Option<SurfaceListener>>>,
}

impl MockSurface {
	pub fn new(len: usize) -> Self {
		Self {
			len: Arc::new(AtomicUsize::new(len)),
			scroll: 0.0,
			width: f64::INFINITY,
			flag: (0.0, 0.0),
			detached: Vec::new(),
			calls: Arc::new(Mutex::new(Vec::new())),
			changes: Arc::new(Mutex::new(None)),
			resizes: Arc::new(Mutex::new(None)),
		}
	}

	pub fn set_len(&self, len: usize) {
		self.len.store(len, Ordering::SeqCst);
	}

	pub fn calls(&self) -> Vec<Call> {
		self.calls.lock().unwrap().clone()
	}

	pub fn clear_calls(&self) {
		self.calls.lock().unwrap().clear();
	}

	fn record(&self, call: Call) {
		self.calls.lock().unwrap().push(call);
	}
}

impl TextSurface for MockSurface {
	type Leaf = usize;

	fn bounds(&self, index: usize) -> Option<Bounds> {
		if index > self.length() {
			return None;
		}
		Some(Bounds {
			top: (index / LINE) as f64 * UNIT_H,
			left: (index % LINE) as f64 * UNIT_W,
			width: UNIT_W,
			height: UNIT_H,
		})
	}

	fn leaf(&self, index: usize) -> Option<(usize, usize)> {
		if index > self.length() || self.detached.contains(&index) {
			return None;
		}
		Some((index / LINE, index % LINE))
	}

	fn length(&self) -> usize {
		self.len.load(Ordering::SeqCst)
	}

	fn scroll_top(&self) -> f64 {
		self.scroll
	}

	fn width(&self) -> f64 {
		self.width
	}

	fn flag_size(&self, _cursor: &Cursor) -> (f64, f64) {
		self.flag
	}

	fn listen_text_changes(&mut self, listener: SurfaceListener) {
		*self.changes.lock().unwrap() = Some(listener);
	}

	fn listen_resizes(&mut self, listener: SurfaceListener) {
		*self.resizes.lock().unwrap() = Some(listener);
	}

	fn build_cursor(&mut self, cursor: &Cursor, _template: &str) {
		self.record(Call::Build(cursor.user.clone()));
	}

	fn restyle_cursor(&mut self, cursor: &Cursor) {
		self.record(Call::Restyle(cursor.user.clone()));
	}

	fn place_cursor(&mut self, cursor: &Cursor, placement: &Placement) {
		self.record(Call::Place(cursor.user.clone(), placement.clone()));
	}

	fn set_cursor_hidden(&mut self, cursor: &Cursor, hidden: bool, _transition: Duration) {
		self.record(Call::Hidden(cursor.user.clone(), hidden));
	}

	fn detach_cursor(&mut self, cursor: &Cursor) {
		self.record(Call::Detach(cursor.user.clone()));
	}
}
