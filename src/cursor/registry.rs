//! ### Cursor Registry
//! Owns every tracked cursor, its visibility timer and its placement on the [TextSurface].

use std::collections::BTreeMap;

use crate::api::surface::TextSurface;
use crate::api::{Config, Cursor, Delta, Position, UnresolvedPolicy, UserId};
use crate::applier::{self, Step};
use crate::placement;
use crate::timer::{Scheduler, TimerId};

/// Map of remote users to their cursors, drawn over a [TextSurface].
///
/// Every cursor owns at most one pending inactivity timer, obtained from the [Scheduler]. Timers
/// are cancelled whenever their cursor is touched again or removed, and [CursorRegistry::expire]
/// ignores any timer no cursor currently owns, so late timers never act on removed state.
///
/// All methods take `&mut self`: the registry expects a single owner driving it, see
/// [crate::cursor::Controller] for an async one.
#[derive(Debug)]
pub struct CursorRegistry<S, T> {
	surface: S,
	scheduler: T,
	config: Config,
	cursors: BTreeMap<UserId, Cursor>,
}

impl<S: TextSurface, T: Scheduler> CursorRegistry<S, T> {
	pub fn new(surface: S, scheduler: T, config: Config) -> Self {
		Self {
			surface,
			scheduler,
			config,
			cursors: BTreeMap::new(),
		}
	}

	/// Create or update the cursor of `user`, then move it to `position`.
	///
	/// A new cursor gets its visual representation built from the configured template first.
	pub fn set_cursor(
		&mut self,
		user: impl Into<UserId>,
		position: impl Into<Position>,
		name: impl Into<String>,
		color: impl Into<String>,
	) -> Cursor {
		let user = user.into();
		let position = position.into();
		let name = name.into();
		let color = color.into();

		let mut cursor = match self.cursors.remove(&user) {
			Some(mut cursor) => {
				if cursor.name != name || cursor.color != color {
					cursor.name = name;
					cursor.color = color;
					self.surface.restyle_cursor(&cursor);
				}
				cursor
			},
			None => {
				tracing::debug!("tracking new cursor for {user}");
				let cursor = Cursor::new(user, position, name, color);
				self.surface.build_cursor(&cursor, self.config.template());
				cursor
			},
		};

		cursor.position = position;
		Self::touch(&mut self.scheduler, &mut self.surface, &self.config, &mut cursor);
		self.place(cursor)
	}

	/// Move the cursor of `user`, showing it and restarting its inactivity timer.
	///
	/// Returns None if `user` has no cursor.
	pub fn move_cursor(&mut self, user: &UserId, position: impl Into<Position>) -> Option<Cursor> {
		let mut cursor = self.cursors.remove(user)?;
		cursor.position = position.into();
		Self::touch(&mut self.scheduler, &mut self.surface, &self.config, &mut cursor);
		Some(self.place(cursor))
	}

	/// Stop tracking the cursor of `user`, returning it if there was one.
	pub fn remove_cursor(&mut self, user: &UserId) -> Option<Cursor> {
		let mut cursor = self.cursors.remove(user)?;
		if let Some(timer) = cursor.timer.take() {
			self.scheduler.cancel(timer);
		}
		self.surface.detach_cursor(&cursor);
		tracing::debug!("stopped tracking cursor for {user}");
		Some(cursor)
	}

	/// Remove every cursor, returning how many were tracked.
	pub fn clear_cursors(&mut self) -> usize {
		let users: Vec<UserId> = self.cursors.keys().cloned().collect();
		users.iter()
			.filter_map(|user| self.remove_cursor(user))
			.count()
	}

	/// Place every cursor again without moving it, e.g. after the surface was resized.
	pub fn refresh_all(&mut self) {
		let users: Vec<UserId> = self.cursors.keys().cloned().collect();
		for user in users {
			if let Some(cursor) = self.cursors.remove(&user) {
				self.place(cursor);
			}
		}
	}

	/// Shift every cursor through a document change, then place them all in a single pass.
	///
	/// The author of an insertion has its own cursor moved right after the inserted content.
	/// Positions are finally clamped to the surface's current length.
	pub fn apply_delta(&mut self, delta: &Delta) {
		for step in applier::steps(delta) {
			for cursor in self.cursors.values_mut() {
				match step {
					Step::Insert { author: Some(author), .. } if *author == cursor.user => {},
					_ => cursor.position = applier::shift(cursor.position, step),
				}
			}
			if let Step::Insert { at, len, author: Some(author) } = step {
				if let Some(cursor) = self.cursors.get_mut(author) {
					cursor.position = Position::caret(at.saturating_add(len));
					Self::touch(&mut self.scheduler, &mut self.surface, &self.config, cursor);
				}
			}
		}

		let len = self.surface.length();
		for cursor in self.cursors.values_mut() {
			cursor.position = cursor.position.clamp(len);
		}

		tracing::debug!("applied {} ops to {} cursors", delta.ops.len(), self.cursors.len());
		self.refresh_all();
	}

	/// Handle a fired timer, hiding the cursor owning it.
	///
	/// Returns false, doing nothing, if the timer was cancelled or belonged to a removed cursor.
	pub fn expire(&mut self, timer: TimerId) -> bool {
		let Some(cursor) = self.cursors.values_mut().find(|c| c.timer == Some(timer)) else {
			tracing::debug!("ignoring stale {timer}");
			return false;
		};
		cursor.timer = None;
		self.scheduler.cancel(timer);
		if cursor.visible {
			cursor.visible = false;
			self.surface.set_cursor_hidden(cursor, true, self.config.hide_speed());
		}
		true
	}

	pub fn get(&self, user: &UserId) -> Option<&Cursor> {
		self.cursors.get(user)
	}

	pub fn cursors(&self) -> impl Iterator<Item = &Cursor> {
		self.cursors.values()
	}

	pub fn len(&self) -> usize {
		self.cursors.len()
	}

	pub fn is_empty(&self) -> bool {
		self.cursors.is_empty()
	}

	pub fn config(&self) -> &Config {
		&self.config
	}

	pub fn surface(&self) -> &S {
		&self.surface
	}

	pub fn surface_mut(&mut self) -> &mut S {
		&mut self.surface
	}

	pub fn scheduler(&self) -> &T {
		&self.scheduler
	}

	pub fn scheduler_mut(&mut self) -> &mut T {
		&mut self.scheduler
	}

	// show the cursor and restart its inactivity timer
	fn touch(scheduler: &mut T, surface: &mut S, config: &Config, cursor: &mut Cursor) {
		if let Some(timer) = cursor.timer.take() {
			scheduler.cancel(timer);
		}
		cursor.timer = Some(scheduler.schedule(config.hide_delay()));
		if !cursor.visible {
			cursor.visible = true;
			surface.set_cursor_hidden(cursor, false, config.hide_speed());
		}
	}

	// resolve and draw a cursor taken out of the map, putting it back unless the policy drops it
	fn place(&mut self, mut cursor: Cursor) -> Cursor {
		let err = match placement::resolve(&self.surface, &cursor) {
			Ok(placement) => {
				self.surface.place_cursor(&cursor, &placement);
				cursor.placement = Some(placement);
				self.cursors.insert(cursor.user.clone(), cursor.clone());
				return cursor;
			},
			Err(e) => e,
		};

		if let Some(timer) = cursor.timer.take() {
			self.scheduler.cancel(timer);
		}
		cursor.placement = None;

		match self.config.unresolved() {
			UnresolvedPolicy::Hide => {
				tracing::warn!("hiding cursor for {}: {err}", cursor.user);
				if cursor.visible {
					cursor.visible = false;
					self.surface.set_cursor_hidden(&cursor, true, self.config.hide_speed());
				}
				self.cursors.insert(cursor.user.clone(), cursor.clone());
			},
			UnresolvedPolicy::Remove => {
				tracing::warn!("removing cursor for {}: {err}", cursor.user);
				self.surface.detach_cursor(&cursor);
			},
		}
		cursor
	}
}
