//! ### Prelude
//! 
//! all-in-one imports with `use multicursor::prelude::*`

pub use crate::errors::{
	ControllerError,
	ControllerResult,
	PlacementError,
};

pub use crate::api::{
	Config,
	Cursor,
	Delta,
	Op,
	Position,
	SurfaceListener,
	TextChange,
	TextSurface,
	UserId,
};

pub use crate::{
	cursor::Controller as CursorController,
	cursor::Registry as CursorRegistry,
	timer::{ManualScheduler, Scheduler, TokioScheduler},
};
