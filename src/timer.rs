//! ### Timers
//! Deferred actions with explicit cancellation tokens.
//!
//! A [Scheduler] only promises to report a [TimerId] back once its delay elapsed; what happens
//! then is up to the [crate::cursor::Registry], which ignores any token it no longer owns. This
//! makes a timer racing its own cancellation harmless whatever the scheduler.

use std::collections::{BTreeMap, HashMap};
use std::time::Duration;

use tokio::sync::mpsc;
use uuid::Uuid;

use crate::ext::IgnorableError;

/// Cancellation token of a scheduled deferred action.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimerId(Uuid);

impl TimerId {
	pub(crate) fn new() -> Self {
		Self(Uuid::new_v4())
	}
}

impl std::fmt::Display for TimerId {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "timer:{}", self.0)
	}
}

/// Source of deferred actions.
pub trait Scheduler {
	/// Schedule a new timer firing after `delay`.
	fn schedule(&mut self, delay: Duration) -> TimerId;

	/// Cancel a pending timer, releasing anything held for it. Unknown timers are ignored.
	fn cancel(&mut self, timer: TimerId);
}

/// [Scheduler] spawning a sleeping tokio task per timer.
///
/// Fired timers are delivered on the channel given at construction. Must be used from within a
/// tokio runtime.
#[derive(Debug)]
pub struct TokioScheduler {
	fired: mpsc::UnboundedSender<TimerId>,
	pending: HashMap<TimerId, tokio::task::AbortHandle>,
}

impl TokioScheduler {
	pub fn new(fired: mpsc::UnboundedSender<TimerId>) -> Self {
		Self { fired, pending: HashMap::new() }
	}

	/// build a scheduler together with the receiving end of its fired timers
	pub fn channel() -> (Self, mpsc::UnboundedReceiver<TimerId>) {
		let (tx, rx) = mpsc::unbounded_channel();
		(Self::new(tx), rx)
	}

	pub fn pending(&self) -> usize {
		self.pending.len()
	}
}

impl Scheduler for TokioScheduler {
	fn schedule(&mut self, delay: Duration) -> TimerId {
		let id = TimerId::new();
		let tx = self.fired.clone();
		let task = tokio::spawn(async move {
			tokio::time::sleep(delay).await;
			tx.send(id).unwrap_or_warn("timer fired after its receiver closed");
		});
		self.pending.insert(id, task.abort_handle());
		id
	}

	fn cancel(&mut self, timer: TimerId) {
		if let Some(task) = self.pending.remove(&timer) {
			task.abort();
		}
	}
}

impl Drop for TokioScheduler {
	fn drop(&mut self) {
		for (_, task) in self.pending.drain() {
			task.abort();
		}
	}
}

/// [Scheduler] driven by a virtual clock, for hosts running their own event loop.
///
/// Nothing fires by itself: call [ManualScheduler::advance] and feed the returned timers to
/// [crate::cursor::Registry::expire].
#[derive(Debug, Default)]
pub struct ManualScheduler {
	now: Duration,
	pending: BTreeMap<TimerId, Duration>,
}

impl ManualScheduler {
	pub fn new() -> Self {
		Self::default()
	}

	/// time elapsed on the virtual clock
	pub fn now(&self) -> Duration {
		self.now
	}

	pub fn pending(&self) -> usize {
		self.pending.len()
	}

	pub fn is_pending(&self, timer: TimerId) -> bool {
		self.pending.contains_key(&timer)
	}

	/// Move the clock forward, returning the timers now due, earliest first.
	pub fn advance(&mut self, by: Duration) -> Vec<TimerId> {
		self.now += by;
		let mut due: Vec<(Duration, TimerId)> = self.pending.iter()
			.filter(|(_, deadline)| **deadline <= self.now)
			.map(|(id, deadline)| (*deadline, *id))
			.collect();
		due.sort();
		due.into_iter()
			.map(|(_, id)| {
				self.pending.remove(&id);
				id
			})
			.collect()
	}
}

impl Scheduler for ManualScheduler {
	fn schedule(&mut self, delay: Duration) -> TimerId {
		let id = TimerId::new();
		self.pending.insert(id, self.now + delay);
		id
	}

	fn cancel(&mut self, timer: TimerId) {
		self.pending.remove(&timer);
	}
}
