//! Integration tests for enum types declared with `labeled_enum!`.

use std::collections::HashSet;

use pretty_assertions::assert_eq;
use roster_registry::{DuplicatePolicy, EnumOption, labeled_enum};

labeled_enum! {
	/// Work item status.
	pub Status: &'static str {
		wip = ("1", "WIP"),
		done = ("2", "Done"),
	}
}

labeled_enum! {
	TransportType: &'static str {
		in_transit = ("1", "Preparing"),
		wait_receiving = ("2", "Receiving"),
		received = ("3", "Received"),
		/// Delivery failed and needs manual handling.
		error_handling = ("4", "Error"),
	}
}

labeled_enum! {
	Priority: u8 {
		low = (1, "Low"),
		high = (9, "High"),
	}
}

labeled_enum! {
	Single: &'static str {
		a = ("x", "A"),
	}
}

/// Helper kept next to `Single`; never part of its member set.
#[allow(dead_code)]
static SINGLE_MARKER: &str = "marker";

labeled_enum! {
	Shadowed: &'static str {
		#![duplicate_policy(DuplicatePolicy::FirstWins)]
		first = ("1", "First"),
		second = ("1", "Second"),
	}
}

labeled_enum! {
	Strict: &'static str {
		#![duplicate_policy(DuplicatePolicy::Reject)]
		first = ("1", "First"),
		second = ("1", "Second"),
	}
}

#[test]
fn test_status_scenario() {
	assert_eq!(Status::of_key("wip").map(|s| s.label()), Some("WIP"));
	assert_eq!(Status::of("2").map(|s| s.label()), Some("Done"));
	assert_eq!(
		Status::options(),
		vec![
			EnumOption { label: "WIP", value: &"1" },
			EnumOption { label: "Done", value: &"2" },
		]
	);
	assert_eq!(Status::of("9"), None);
	assert_eq!(Status::wip().to_string(), "Status.wip=WIP : 1");
}

#[test]
fn test_members_carry_name_and_index() {
	let received = TransportType::received();
	assert_eq!(received.name(), "received");
	assert_eq!(received.index(), 2);
	assert_eq!(*received.value(), "3");
	assert_eq!(received.type_name(), "TransportType");
	assert_eq!(TransportType::registry().names().collect::<Vec<_>>(), vec![
		"in_transit",
		"wait_receiving",
		"received",
		"error_handling",
	]);
}

#[test]
fn test_handles_compare_by_identity() {
	assert_eq!(TransportType::of_key("in_transit"), Some(TransportType::in_transit()));
	assert_ne!(TransportType::in_transit(), TransportType::received());

	let set: HashSet<TransportType> = TransportType::all().collect();
	assert_eq!(set.len(), 4);
	assert!(set.contains(&TransportType::error_handling()));
	assert_eq!(format!("{:?}", TransportType::error_handling()), "TransportType::error_handling");
}

#[test]
fn test_all_matches_registry() {
	let all: Vec<_> = TransportType::all().map(|t| t.index()).collect();
	assert_eq!(all, vec![0, 1, 2, 3]);
	assert!(std::ptr::eq(TransportType::all().last().unwrap().as_member(), &TransportType::registry().members()[3]));
}

#[test]
fn test_numeric_values() {
	assert_eq!(Priority::of(&9u8), Some(Priority::high()));
	assert_eq!(Priority::of_text("1"), Some(Priority::low()));
	assert_eq!(Priority::of(&5u8), None);
	assert_eq!(Priority::high().to_string(), "Priority.high=High : 9");
}

#[test]
fn test_auxiliary_items_are_not_registered() {
	assert_eq!(Single::registry().len(), 1);
	assert_eq!(Single::of_key("SINGLE_MARKER"), None);
	assert_eq!(Single::of(SINGLE_MARKER), None);
	assert_eq!(Single::a().label(), "A");
}

#[test]
fn test_shadowed_value_resolves_to_first() {
	assert_eq!(Shadowed::of("1"), Some(Shadowed::first()));
	assert_eq!(Shadowed::registry().collisions().len(), 1);
	assert_eq!(Shadowed::of_key("second").map(|s| s.label()), Some("Second"));
}

#[test]
#[should_panic(expected = "enum Strict: Strict: duplicate value \"1\" on `first` and `second`")]
fn test_rejected_declaration_panics_on_first_use() {
	let _ = Strict::registry();
}

#[test]
fn test_registry_is_sealed_once_across_threads() {
	let registries: Vec<usize> = std::thread::scope(|s| {
		let handles: Vec<_> = (0..8)
			.map(|_| s.spawn(|| Status::registry() as *const _ as usize))
			.collect();
		handles.into_iter().map(|h| h.join().unwrap()).collect()
	});
	assert!(registries.windows(2).all(|w| w[0] == w[1]));
}
