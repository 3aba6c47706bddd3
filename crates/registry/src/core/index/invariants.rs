#![allow(dead_code)]

use crate::core::index::build::EnumBuilder;
use crate::core::index::types::EnumRegistry;
use crate::core::{BuildError, DuplicatePolicy};

fn sample() -> EnumRegistry<&'static str> {
	EnumBuilder::new("Transport")
		.member("in_transit", "1", "Preparing")
		.member("wait_receiving", "2", "Receiving")
		.member("received", "3", "Received")
		.member("error_handling", "4", "Error")
		.build()
		.unwrap()
}

/// Invariant: member `i` carries index `i`.
pub(crate) fn inv_index_matches_position() {
	let reg = sample();
	for (pos, member) in reg.members().iter().enumerate() {
		assert_eq!(member.index(), pos, "member {} has a stale index", member.name());
		assert_eq!(reg.get(pos), Some(member));
	}
	assert!(reg.get(reg.len()).is_none());
}

#[cfg_attr(test, test)]
pub(crate) fn test_index_matches_position() {
	inv_index_matches_position()
}

/// Invariant: every member is reachable by its own name, and only by its own name.
pub(crate) fn inv_name_lookup_roundtrip() {
	let reg = sample();
	for member in &reg {
		let found = reg.of_key(member.name()).expect("declared name must resolve");
		assert!(core::ptr::eq(found, member), "{} resolved to {}", member.name(), found.name());
	}
	assert!(reg.of_key("IN_TRANSIT").is_none(), "name lookup is case-sensitive");
	assert!(reg.of_key("").is_none());
}

#[cfg_attr(test, test)]
pub(crate) fn test_name_lookup_roundtrip() {
	inv_name_lookup_roundtrip()
}

/// Invariant: names, members and options stay aligned in declaration order.
pub(crate) fn inv_names_align_with_members() {
	let reg = sample();
	let names: Vec<&str> = reg.names().collect();
	let options = reg.options();

	assert_eq!(names.len(), reg.len());
	assert_eq!(options.len(), reg.len());
	for ((name, option), member) in names.iter().zip(&options).zip(reg.members()) {
		assert_eq!(*name, member.name());
		assert_eq!(option.label, member.label());
		assert_eq!(option.value, member.value());
	}
}

#[cfg_attr(test, test)]
pub(crate) fn test_names_align_with_members() {
	inv_names_align_with_members()
}

/// Invariant: lookups and projections never mutate the registry.
pub(crate) fn inv_reads_are_idempotent() {
	let reg = sample();
	assert_eq!(reg.options(), reg.options());
	assert_eq!(reg.of_key("received"), reg.of_key("received"));
	assert_eq!(reg.of("2"), reg.of("2"));
	assert_eq!(reg.of_text("4"), reg.of_text("4"));
	assert_eq!(reg.of("9"), reg.of("9"));
}

#[cfg_attr(test, test)]
pub(crate) fn test_reads_are_idempotent() {
	inv_reads_are_idempotent()
}

/// Invariant: a shared domain value resolves to the first declared member.
pub(crate) fn inv_first_declared_value_wins() {
	let reg = EnumBuilder::new("Dup")
		.member("a", 1u32, "A")
		.member("b", 2u32, "B")
		.member("c", 1u32, "C")
		.member("d", 1u32, "D")
		.build()
		.unwrap();

	assert_eq!(reg.of(&1u32).map(|m| m.name()), Some("a"));
	assert_eq!(reg.of_text("1").map(|m| m.name()), Some("a"));
	assert_eq!(reg.collisions().len(), 2);
	for collision in reg.collisions() {
		assert_eq!(collision.kept.0, 0);
	}
	// Shadowed members stay reachable by name.
	assert_eq!(reg.of_key("d").map(|m| m.index()), Some(3));

	let err = EnumBuilder::new("Dup")
		.duplicate_policy(DuplicatePolicy::Reject)
		.member("a", 1u32, "A")
		.member("c", 1u32, "C")
		.build()
		.unwrap_err();
	assert!(matches!(err, BuildError::DuplicateValue { .. }));
}

#[cfg_attr(test, test)]
pub(crate) fn test_first_declared_value_wins() {
	inv_first_declared_value_wins()
}
