//! Shared enum registry infrastructure.

pub mod collision;
pub mod error;
pub mod index;
pub mod member;

pub use collision::{DuplicatePolicy, ValueCollision};
pub use error::BuildError;
pub use index::{EnumBuilder, EnumRegistry};
pub use member::{EnumOption, Member};
