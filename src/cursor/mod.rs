//! ### Cursor
//! Each remote user holds at most one cursor, spanning zero or more content units of the document.
//! Cursors follow the document as it changes and hide themselves after some inactivity.

/// cursor worker implementation
pub(crate) mod worker;

/// cursor registry implementation
pub mod registry;
pub use registry::CursorRegistry as Registry;

/// cursor controller implementation
pub mod controller;
pub use controller::CursorController as Controller;
