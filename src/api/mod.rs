//! # API
//! These traits and structs represent the main `multicursor` library API.

/// a generic representation of a text change
pub mod change;

/// op streams describing document mutations
pub mod delta;

/// representation for an user's cursor
pub mod cursor;

/// tracker configuration
pub mod config;

/// host editor capabilities
pub mod surface;

pub use change::TextChange;
pub use config::{Config, UnresolvedPolicy};
pub use cursor::{Cursor, Position, UserId};
pub use delta::{Delta, Op};
pub use surface::{Bounds, Placement, Rect, SurfaceListener, TextSurface};
