//! ### Cursor Controller
//! An async handle to a [super::Registry] running on its own worker task.

use std::sync::Arc;

use tokio::sync::{mpsc, oneshot};

use crate::api::{Cursor, Delta, Position, UserId};
use crate::errors::ControllerResult;

use super::worker::Command;

/// A cloneable handle for driving cursors from async code.
///
/// Every call is forwarded to a single worker task owning the registry, so operations from any
/// number of handles, host change notifications and timer expirations never interleave.
///
/// The worker stops once [CursorController::stop] is called or every handle is dropped.
#[derive(Debug, Clone)]
pub struct CursorController(pub(crate) Arc<CursorControllerInner>);

#[derive(Debug)]
pub(crate) struct CursorControllerInner {
	pub(crate) commands: mpsc::UnboundedSender<Command>,
	pub(crate) stop: mpsc::UnboundedSender<()>,
}

impl CursorController {
	/// Create or update the cursor of `user`, moving it to `position`.
	pub async fn set_cursor(
		&self,
		user: impl Into<UserId>,
		position: impl Into<Position>,
		name: impl Into<String>,
		color: impl Into<String>,
	) -> ControllerResult<Cursor> {
		let (tx, rx) = oneshot::channel();
		self.0.commands.send(Command::Set {
			user: user.into(),
			position: position.into(),
			name: name.into(),
			color: color.into(),
			tx,
		})?;
		Ok(rx.await?)
	}

	/// Move the cursor of `user`, if there is one.
	pub async fn move_cursor(&self, user: impl Into<UserId>, position: impl Into<Position>) -> ControllerResult<Option<Cursor>> {
		let (tx, rx) = oneshot::channel();
		self.0.commands.send(Command::Move { user: user.into(), position: position.into(), tx })?;
		Ok(rx.await?)
	}

	/// Stop tracking the cursor of `user`, returning it if there was one.
	pub async fn remove_cursor(&self, user: impl Into<UserId>) -> ControllerResult<Option<Cursor>> {
		let (tx, rx) = oneshot::channel();
		self.0.commands.send(Command::Remove { user: user.into(), tx })?;
		Ok(rx.await?)
	}

	/// Remove every cursor, returning how many there were.
	pub async fn clear_cursors(&self) -> ControllerResult<usize> {
		let (tx, rx) = oneshot::channel();
		self.0.commands.send(Command::Clear(tx))?;
		Ok(rx.await?)
	}

	/// Snapshot of every tracked cursor.
	pub async fn cursors(&self) -> ControllerResult<Vec<Cursor>> {
		let (tx, rx) = oneshot::channel();
		self.0.commands.send(Command::Snapshot(tx))?;
		Ok(rx.await?)
	}

	/// Enqueue a full re-placement of every cursor.
	pub fn refresh_all(&self) -> ControllerResult<()> {
		Ok(self.0.commands.send(Command::Refresh)?)
	}

	/// Enqueue a document change, for hosts not exposing a change stream.
	pub fn apply_delta(&self, delta: Delta) -> ControllerResult<()> {
		Ok(self.0.commands.send(Command::Delta(delta))?)
	}

	/// Stop underlying worker.
	///
	/// Returns true if the stop signal was successfully sent, false if channel was
	/// closed (probably because worker had already been stopped).
	pub fn stop(&self) -> bool {
		self.0.stop.send(()).is_ok()
	}
}
