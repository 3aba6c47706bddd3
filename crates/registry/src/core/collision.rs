//! Duplicate domain value handling.
//!
//! # Role
//!
//! Names are always unique within a registry. Domain values are expected to be unique
//! but the declaration cannot prove it, so this module defines what happens when two
//! members share one and the record kept for diagnostics.

use core::fmt;

/// How [`EnumBuilder::build`](crate::EnumBuilder::build) treats members sharing a domain value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DuplicatePolicy {
	/// Keep the lowest index for value lookup and record a [`ValueCollision`].
	#[default]
	FirstWins,
	/// Fail the build with [`BuildError::DuplicateValue`](crate::BuildError::DuplicateValue).
	Reject,
}

impl fmt::Display for DuplicatePolicy {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::FirstWins => write!(f, "first_wins"),
			Self::Reject => write!(f, "reject"),
		}
	}
}

/// A member whose domain value was already bound by an earlier member.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValueCollision {
	pub registry: &'static str,
	/// `Debug` rendering of the shared value.
	pub value: String,
	/// Index and name of the member `of` resolves to.
	pub kept: (usize, Box<str>),
	/// Index and name of the member only reachable by name or position.
	pub dropped: (usize, Box<str>),
}

impl fmt::Display for ValueCollision {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(
			f,
			"{}: value {} of `{}` (#{}) shadowed by `{}` (#{})",
			self.registry, self.value, self.dropped.1, self.dropped.0, self.kept.1, self.kept.0
		)
	}
}
