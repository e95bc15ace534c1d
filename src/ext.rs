/// an error which can be ignored with just a warning entry
pub trait IgnorableError {
	fn unwrap_or_warn(self, msg: &str);
}

impl<T, E> IgnorableError for std::result::Result<T, E>
where E : std::fmt::Debug {
	fn unwrap_or_warn(self, msg: &str) {
		match self {
			Ok(_) => {},
			Err(e) => tracing::warn!("{}: {:?}", msg, e),
		}
	}
}

/// install a compact stderr subscriber for this crate's logs
///
/// returns false if a global subscriber was already set
#[cfg(feature = "log")]
pub fn logger(debug: bool) -> bool {
	let level = if debug { tracing::Level::DEBUG } else { tracing::Level::INFO };
	let format = tracing_subscriber::fmt::format()
		.with_level(true)
		.with_target(true)
		.with_thread_ids(false)
		.with_thread_names(false)
		.with_file(false)
		.with_line_number(false)
		.with_source_location(false)
		.compact();

	tracing_subscriber::fmt()
		.event_format(format)
		.with_max_level(level)
		.with_writer(std::io::stderr)
		.try_init()
		.is_ok()
}
