use core::fmt;
use core::hash::Hash;
use std::collections::hash_map::Entry;

use rustc_hash::FxHashMap as HashMap;

use super::types::EnumRegistry;
use crate::core::{BuildError, DuplicatePolicy, Member, ValueCollision};

/// A declared member waiting for the registry to be sealed.
struct Pending<V> {
	name: Box<str>,
	value: V,
	label: Box<str>,
}

/// Builder for constructing an [`EnumRegistry`].
///
/// Declaration order is preserved and becomes each member's index.
pub struct EnumBuilder<V> {
	type_name: &'static str,
	pending: Vec<Pending<V>>,
	policy: DuplicatePolicy,
}

impl<V> EnumBuilder<V> {
	/// Creates a new builder for the enum type `type_name`.
	pub fn new(type_name: &'static str) -> Self {
		Self {
			type_name,
			pending: Vec::new(),
			policy: DuplicatePolicy::default(),
		}
	}

	/// Returns the number of members declared so far.
	pub fn len(&self) -> usize {
		self.pending.len()
	}

	/// Returns true if no members have been declared.
	pub fn is_empty(&self) -> bool {
		self.pending.is_empty()
	}

	/// Sets the duplicate domain value policy.
	pub fn duplicate_policy(mut self, policy: DuplicatePolicy) -> Self {
		self.policy = policy;
		self
	}

	/// Declares a member.
	pub fn add(&mut self, name: impl Into<Box<str>>, value: V, label: impl Into<Box<str>>) -> &mut Self {
		self.pending.push(Pending {
			name: name.into(),
			value,
			label: label.into(),
		});
		self
	}

	/// Declares a member, consuming and returning the builder.
	pub fn member(mut self, name: impl Into<Box<str>>, value: V, label: impl Into<Box<str>>) -> Self {
		self.add(name, value, label);
		self
	}
}

impl<V: Clone + Eq + Hash + fmt::Debug> EnumBuilder<V> {
	/// Seals the declared members into an [`EnumRegistry`].
	///
	/// Assigns every member its name and declaration index, then indexes the set by
	/// name and by domain value. Names must be non-empty and unique. Shared domain
	/// values are handled per [`DuplicatePolicy`].
	pub fn build(self) -> Result<EnumRegistry<V>, BuildError> {
		let registry = self.type_name;
		let policy = self.policy;

		let mut by_name: HashMap<Box<str>, usize> =
			HashMap::with_capacity_and_hasher(self.pending.len(), Default::default());
		let mut by_value: HashMap<V, usize> =
			HashMap::with_capacity_and_hasher(self.pending.len(), Default::default());
		let mut collisions = Vec::new();
		let mut members = Vec::with_capacity(self.pending.len());

		for (index, Pending { name, value, label }) in self.pending.into_iter().enumerate() {
			if name.is_empty() {
				return Err(BuildError::EmptyName { registry, index });
			}

			match by_name.entry(name.clone()) {
				Entry::Vacant(v) => {
					v.insert(index);
				}
				Entry::Occupied(o) => {
					return Err(BuildError::DuplicateName {
						registry,
						name,
						first: *o.get(),
						second: index,
					});
				}
			}

			match by_value.entry(value.clone()) {
				Entry::Vacant(v) => {
					v.insert(index);
				}
				Entry::Occupied(o) => {
					let kept: &Member<V> = &members[*o.get()];
					match policy {
						DuplicatePolicy::Reject => {
							return Err(BuildError::DuplicateValue {
								registry,
								value: format!("{value:?}"),
								first: kept.name.clone(),
								second: name,
							});
						}
						DuplicatePolicy::FirstWins => {
							let collision = ValueCollision {
								registry,
								value: format!("{value:?}"),
								kept: (kept.index, kept.name.clone()),
								dropped: (index, name.clone()),
							};
							tracing::warn!(%collision, "duplicate enum value");
							collisions.push(collision);
						}
					}
				}
			}

			members.push(Member {
				type_name: registry,
				name,
				index,
				value,
				label,
			});
		}

		tracing::debug!(registry, members = members.len(), collisions = collisions.len(), "enum registry sealed");

		Ok(EnumRegistry {
			type_name: registry,
			members: members.into_boxed_slice(),
			by_name,
			by_value,
			collisions: collisions.into_boxed_slice(),
		})
	}
}

impl<V> fmt::Debug for EnumBuilder<V> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("EnumBuilder")
			.field("type_name", &self.type_name)
			.field("pending", &self.pending.len())
			.field("policy", &self.policy)
			.finish()
	}
}
