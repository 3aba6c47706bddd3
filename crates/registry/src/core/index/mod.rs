#![cfg_attr(doc, allow(rustdoc::private_intra_doc_links))]
//! Enum registry construction and lookup.
//!
//! # Purpose
//!
//! The `index` subsystem turns a list of declared members into a sealed [`EnumRegistry`]:
//! it assigns declaration indices, rejects malformed declarations, and builds the name and
//! domain value indices used by lookups.
//!
//! # Mental Model
//!
//! 1. **Declaration:** [`EnumBuilder`] collects `(name, value, label)` triples. Nothing is
//!    validated or indexed yet.
//! 2. **Sealing:** [`EnumBuilder::build`] walks the declarations once in order and returns
//!    the registry. This is the only way to obtain an [`EnumRegistry`], so a registry that
//!    can be queried is always complete.
//! 3. **Consumption:** Readers share `&EnumRegistry` freely; there are no writers.
//!
//! # Precedence Contract
//!
//! - Names are unique; a duplicate name fails the build.
//! - A shared domain value resolves to the member with the lowest index under
//!   [`DuplicatePolicy::FirstWins`], or fails the build under [`DuplicatePolicy::Reject`].
//!
//! - Enforced in: [`EnumBuilder::build`]
//! - Tested by: [`crate::core::index::invariants::test_first_declared_value_wins`]
//! - Failure symptom: `of` returns a member other than the first declared with that value.
//!
//! # Invariants
//!
//! - Member `i` MUST have index `i`.
//!   - Enforced in: [`EnumBuilder::build`].
//!   - Tested by: [`crate::core::index::invariants::test_index_matches_position`]
//!   - Failure symptom: `get(m.index())` returns a different member.
//!
//! - Every member MUST be reachable by its name.
//!   - Enforced in: [`EnumBuilder::build`] (name index built alongside the member table).
//!   - Tested by: [`crate::core::index::invariants::test_name_lookup_roundtrip`]
//!   - Failure symptom: `of_key(m.name())` misses or returns another member.
//!
//! - Names and members MUST stay positionally aligned.
//!   - Enforced in: [`EnumRegistry::names`] (derived from the member table).
//!   - Tested by: [`crate::core::index::invariants::test_names_align_with_members`]
//!   - Failure symptom: `options()` and `names()` disagree on length or order.
//!
//! - Reads MUST NOT change observable state.
//!   - Enforced in: [`EnumRegistry`] (no interior mutability).
//!   - Tested by: [`crate::core::index::invariants::test_reads_are_idempotent`]
//!   - Failure symptom: repeated lookups disagree.

mod build;
mod types;

pub use build::EnumBuilder;
pub use types::EnumRegistry;

#[cfg(any(test, doc))]
pub(crate) mod invariants;
