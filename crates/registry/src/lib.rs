//! Sealed registries of named, labeled enum members.
//!
//! An enum type here is a closed set of singleton members, each carrying a declared name,
//! a declaration index, a domain value and a human-readable label. Members are declared on
//! an [`EnumBuilder`] and sealed with [`EnumBuilder::build`], which yields the immutable
//! [`EnumRegistry`] used for every lookup:
//!
//! - [`EnumRegistry::of_key`] - by declared name
//! - [`EnumRegistry::of`] - by domain value (first declared wins)
//! - [`EnumRegistry::options`] - all members as label/value pairs
//!
//! [`labeled_enum!`] wraps the builder in a named handle type with a lazily sealed static
//! registry.
//!
//! ```
//! use roster_registry::EnumBuilder;
//!
//! let status = EnumBuilder::new("Status")
//!     .member("wip", "1", "WIP")
//!     .member("done", "2", "Done")
//!     .build()?;
//!
//! assert_eq!(status.of_key("wip").map(|m| m.label()), Some("WIP"));
//! assert_eq!(status.of("2").map(|m| m.label()), Some("Done"));
//! assert!(status.of("9").is_none());
//! # Ok::<(), roster_registry::BuildError>(())
//! ```

pub mod core;
mod macros;

#[doc(hidden)]
pub use paste;

pub use crate::core::{
	BuildError, DuplicatePolicy, EnumBuilder, EnumOption, EnumRegistry, Member, ValueCollision,
};
