//! Optional observability helpers for market data calls.
//!
//! # Feature Flags
//!
//! - Enable `tracing` to emit structured spans named `exante_md.call` with the `scope`, `path`,
//!   and `status` fields.
//! - Enable `metrics` to increment the `exante_md_call_total` counter for every
//!   attempt/success/failure, labeled by `scope` + `outcome`.

mod metrics;
mod tracing;

pub use metrics::*;
pub use tracing::*;

// self
use crate::_prelude::*;

/// Outcome labels recorded for each call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CallOutcome {
	/// Entry to the executor.
	Attempt,
	/// Decoded a 200 response.
	Success,
	/// Error propagated back to the caller.
	Failure,
}
impl CallOutcome {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			CallOutcome::Attempt => "attempt",
			CallOutcome::Success => "success",
			CallOutcome::Failure => "failure",
		}
	}
}
impl Display for CallOutcome {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}
