use std::sync::Arc;

use tokio::sync::{mpsc, oneshot};

use crate::api::surface::{SurfaceListener, TextSurface};
use crate::api::{Config, Cursor, Delta, Position, UserId};
use crate::ext::IgnorableError;
use crate::timer::{TimerId, TokioScheduler};

use super::controller::{CursorController, CursorControllerInner};
use super::registry::CursorRegistry;

pub(crate) enum Command {
	Set {
		user: UserId,
		position: Position,
		name: String,
		color: String,
		tx: oneshot::Sender<Cursor>,
	},
	Move {
		user: UserId,
		position: Position,
		tx: oneshot::Sender<Option<Cursor>>,
	},
	Remove {
		user: UserId,
		tx: oneshot::Sender<Option<Cursor>>,
	},
	Clear(oneshot::Sender<usize>),
	Snapshot(oneshot::Sender<Vec<Cursor>>),
	Refresh,
	Delta(Delta),
}

impl std::fmt::Debug for Command {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Command::Set { user, position, .. } => write!(f, "Set({user}, {position:?})"),
			Command::Move { user, position, .. } => write!(f, "Move({user}, {position:?})"),
			Command::Remove { user, .. } => write!(f, "Remove({user})"),
			Command::Clear(_) => f.write_str("Clear"),
			Command::Snapshot(_) => f.write_str("Snapshot"),
			Command::Refresh => f.write_str("Refresh"),
			Command::Delta(delta) => write!(f, "Delta({} ops)", delta.ops.len()),
		}
	}
}

struct CursorWorker<S> {
	registry: CursorRegistry<S, TokioScheduler>,
	commands: mpsc::UnboundedReceiver<Command>,
	stop: mpsc::UnboundedReceiver<()>,
	fired: mpsc::UnboundedReceiver<TimerId>,
}

impl CursorController {
	/// Spawn a worker owning `surface` on the current tokio runtime, returning its handle.
	///
	/// The surface only gets a listener for its edits when listener auto-registration is enabled,
	/// resizes are always listened to.
	pub fn spawn<S>(mut surface: S, config: Config) -> Self
	where S : TextSurface + Send + 'static {
		let (commands_tx, commands_rx) = mpsc::unbounded_channel();
		let (stop_tx, stop_rx) = mpsc::unbounded_channel();
		let (scheduler, fired) = TokioScheduler::channel();

		let listener = SurfaceListener(commands_tx.downgrade());
		if config.auto_register_listener() {
			surface.listen_text_changes(listener.clone());
		}
		surface.listen_resizes(listener);

		let worker = CursorWorker {
			registry: CursorRegistry::new(surface, scheduler, config),
			commands: commands_rx,
			stop: stop_rx,
			fired,
		};

		tokio::spawn(async move {
			tracing::debug!("cursor worker started");
			CursorController::work(worker).await;
			tracing::debug!("cursor worker stopped");
		});

		CursorController(Arc::new(CursorControllerInner {
			commands: commands_tx,
			stop: stop_tx,
		}))
	}

	async fn work<S: TextSurface>(mut worker: CursorWorker<S>) {
		loop {
			// host edits share the command queue, keeping requests and edits in arrival order
			tokio::select! {
				biased;

				_ = worker.stop.recv() => break tracing::info!("stopping cursor worker"),

				Some(timer) = worker.fired.recv() => { worker.registry.expire(timer); },

				res = worker.commands.recv() => match res {
					None => break tracing::debug!("stopping: all controllers dropped"),
					Some(command) => worker.handle(command),
				},
			}
		}

		worker.registry.clear_cursors();
	}
}

impl<S: TextSurface> CursorWorker<S> {
	fn handle(&mut self, command: Command) {
		tracing::trace!("handling {command:?}");
		match command {
			Command::Set { user, position, name, color, tx } => tx
				.send(self.registry.set_cursor(user, position, name, color))
				.unwrap_or_warn("controller stopped waiting for cursor"),
			Command::Move { user, position, tx } => tx
				.send(self.registry.move_cursor(&user, position))
				.unwrap_or_warn("controller stopped waiting for cursor"),
			Command::Remove { user, tx } => tx
				.send(self.registry.remove_cursor(&user))
				.unwrap_or_warn("controller stopped waiting for cursor"),
			Command::Clear(tx) => tx
				.send(self.registry.clear_cursors())
				.unwrap_or_warn("controller stopped waiting for clear"),
			Command::Snapshot(tx) => tx
				.send(self.registry.cursors().cloned().collect())
				.unwrap_or_warn("controller stopped waiting for cursors"),
			Command::Refresh => self.registry.refresh_all(),
			Command::Delta(delta) => self.registry.apply_delta(&delta),
		}
	}
}
