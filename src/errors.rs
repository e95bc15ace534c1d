//! ### Errors
//! Nothing the tracker does on expected input fails: unknown users are no-ops and positions are
//! clamped. These errors cover what's left, unresolvable placements and a gone worker.

pub type PlacementResult<T> = std::result::Result<T, PlacementError>;

/// The surface could not turn a logical position into screen coordinates.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlacementError {
	#[error("no leaf found at index {0}")]
	Leaf(usize),

	#[error("no bounds available at index {0}")]
	Bounds(usize),
}

pub type ControllerResult<T> = std::result::Result<T, ControllerError>;

#[derive(Debug, thiserror::Error)]
pub enum ControllerError {
	#[error("worker is already stopped")]
	Stopped,

	#[error("worker stopped before completing requested operation")]
	Unfulfilled,
}

impl<T> From<tokio::sync::mpsc::error::SendError<T>> for ControllerError {
	fn from(_: tokio::sync::mpsc::error::SendError<T>) -> Self {
		Self::Stopped
	}
}

impl From<tokio::sync::oneshot::error::RecvError> for ControllerError {
	fn from(_: tokio::sync::oneshot::error::RecvError) -> Self {
		Self::Unfulfilled
	}
}
