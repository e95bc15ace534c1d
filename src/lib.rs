//! # multicursor
//! Track and draw remote users' cursors over a collaboratively edited text surface.
//!
//! Every remote user owns a [api::Cursor], a caret or a selection, kept in a
//! [cursor::Registry]. As the shared document changes, each [api::Delta] shifts every cursor so
//! it keeps pointing at the same content, while the author of an insertion finds its cursor right
//! after what it typed. Cursors hide themselves after some inactivity and show up again as soon
//! as they move.
//!
//! The host editor is never assumed: it plugs in as an [api::TextSurface], answering layout
//! queries and drawing what the registry tells it to. Surfaces report their own edits and
//! resizes through an [api::SurfaceListener].
//!
//! ## Driving the registry
//! Hosts with their own event loop can drive a [cursor::Registry] directly, using a
//! [timer::ManualScheduler] and feeding fired timers back with [cursor::Registry::expire].
//!
//! With tokio, [cursor::Controller::spawn] moves the registry on a worker task and hands back a
//! cloneable handle:
//!
//! ```no_run
//! # async fn run(surface: impl multicursor::api::TextSurface + Send + 'static) -> multicursor::errors::ControllerResult<()> {
//! use multicursor::api::{Config, Delta};
//!
//! let cursors = multicursor::cursor::Controller::spawn(surface, Config::default());
//!
//! // a remote user selected some text
//! cursors.set_cursor("alice", 4..9, "Alice", "#e06c75").await?;
//!
//! // someone typed three characters at the start of the document
//! cursors.apply_delta(Delta::default().insert_by(3, "bob"))?;
//!
//! let alice = cursors.move_cursor("alice", 12).await?;
//! # Ok(())
//! # }
//! ```

/// core structs and traits
pub mod api;

/// cursor registry, controller and worker
pub mod cursor;

/// position shifting across document changes
pub mod applier;

/// logical positions to screen rectangles
pub mod placement;

/// cancellable deferred actions
pub mod timer;

/// crate error types
pub mod errors;

/// common utils used in this library and re-exposed
pub mod ext;

/// all-in-one imports : `use multicursor::prelude::*;`
pub mod prelude;

#[cfg(test)]
pub(crate) mod mock;
