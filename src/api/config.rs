//! # Config
//! Data structure defining cursor tracker configuration

use std::time::Duration;

/// default markup handed to the surface when building a cursor
pub const DEFAULT_TEMPLATE: &str = r#"<span class="ql-cursor-flag"><span class="ql-cursor-name"></span></span><span class="ql-cursor-caret"></span>"#;

/// What to do with a cursor whose position the surface can no longer resolve.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub enum UnresolvedPolicy {
	/// keep tracking the cursor, but hide it until it resolves again
	#[default]
	Hide,
	/// drop the cursor from the registry
	Remove,
}

/// Configuration struct for cursor tracking, every field falls back to a default
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub struct Config {
	/// ms of inactivity before a cursor auto-hides, default 2500
	pub hide_delay: Option<u64>,
	/// ms of hide transition passed to the surface, default 400
	pub hide_speed: Option<u64>,
	/// subscribe to the surface change stream automatically, default true
	pub auto_register_listener: Option<bool>,
	/// markup for the visual representation of a cursor, default [DEFAULT_TEMPLATE]
	pub template: Option<String>,
	/// policy for positions which can't be placed, default [UnresolvedPolicy::Hide]
	pub unresolved: Option<UnresolvedPolicy>,
}

impl Config {
	#[inline]
	pub fn hide_delay(&self) -> Duration {
		Duration::from_millis(self.hide_delay.unwrap_or(2500))
	}

	#[inline]
	pub fn hide_speed(&self) -> Duration {
		Duration::from_millis(self.hide_speed.unwrap_or(400))
	}

	#[inline]
	pub fn auto_register_listener(&self) -> bool {
		self.auto_register_listener.unwrap_or(true)
	}

	#[inline]
	pub fn template(&self) -> &str {
		self.template.as_deref().unwrap_or(DEFAULT_TEMPLATE)
	}

	#[inline]
	pub fn unresolved(&self) -> UnresolvedPolicy {
		self.unresolved.unwrap_or_default()
	}
}
