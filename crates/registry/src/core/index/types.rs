use core::borrow::Borrow;
use core::fmt::{self, Write as _};
use core::hash::Hash;

use rustc_hash::FxHashMap;

use crate::core::{EnumOption, Member, ValueCollision};

pub(super) type Map<K, V> = FxHashMap<K, V>;

/// Sealed set of enum members with lookup by name and by domain value.
///
/// Produced only by [`EnumBuilder::build`](crate::EnumBuilder::build), so every value of
/// this type is complete and immutable.
pub struct EnumRegistry<V> {
	pub(super) type_name: &'static str,
	pub(super) members: Box<[Member<V>]>,
	pub(super) by_name: Map<Box<str>, usize>,
	pub(super) by_value: Map<V, usize>,
	pub(super) collisions: Box<[ValueCollision]>,
}

impl<V> EnumRegistry<V> {
	/// Returns the enum type name.
	#[inline]
	pub fn type_name(&self) -> &'static str {
		self.type_name
	}

	/// Looks up a member by its declared name. Matching is exact and case-sensitive.
	#[inline]
	pub fn of_key(&self, name: &str) -> Option<&Member<V>> {
		let &idx = self.by_name.get(name)?;
		Some(&self.members[idx])
	}

	/// Returns the member at a declaration index.
	#[inline]
	pub fn get(&self, index: usize) -> Option<&Member<V>> {
		self.members.get(index)
	}

	/// Returns every member in declaration order.
	#[inline]
	pub fn members(&self) -> &[Member<V>] {
		&self.members
	}

	/// Returns an iterator over members in declaration order.
	#[inline]
	pub fn iter(&self) -> core::slice::Iter<'_, Member<V>> {
		self.members.iter()
	}

	/// Returns the declared names in declaration order.
	pub fn names(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
		self.members.iter().map(Member::name)
	}

	/// Returns the label/value projection of every member in declaration order.
	pub fn options(&self) -> Vec<EnumOption<'_, V>> {
		self.members.iter().map(Member::option).collect()
	}

	/// Returns duplicate value collisions recorded while sealing.
	#[inline]
	pub fn collisions(&self) -> &[ValueCollision] {
		&self.collisions
	}

	/// Returns the number of members.
	#[inline]
	pub fn len(&self) -> usize {
		self.members.len()
	}

	/// Returns true if the registry has no members.
	#[inline]
	pub fn is_empty(&self) -> bool {
		self.members.is_empty()
	}
}

impl<V: Eq + Hash> EnumRegistry<V> {
	/// Looks up a member by domain value.
	///
	/// When several members share the value, the one declared first wins.
	#[inline]
	pub fn of<Q>(&self, value: &Q) -> Option<&Member<V>>
	where
		V: Borrow<Q>,
		Q: Eq + Hash + ?Sized,
	{
		let &idx = self.by_value.get(value)?;
		Some(&self.members[idx])
	}
}

impl<V: fmt::Display> EnumRegistry<V> {
	/// Looks up a member by the textual rendering of its domain value.
	///
	/// Unlike [`of`](Self::of) this compares `to_string` output, so an integer valued
	/// enum can be queried with `"1"`. Scans in declaration order; the first match wins.
	pub fn of_text(&self, text: &str) -> Option<&Member<V>> {
		let mut buf = String::new();
		self.members.iter().find(|m| {
			buf.clear();
			// Writing into a String never fails.
			let _ = write!(buf, "{}", m.value);
			buf == text
		})
	}
}

impl<'a, V> IntoIterator for &'a EnumRegistry<V> {
	type Item = &'a Member<V>;
	type IntoIter = core::slice::Iter<'a, Member<V>>;

	fn into_iter(self) -> Self::IntoIter {
		self.members.iter()
	}
}

/// Lists every member rendering, one per line.
impl<V: fmt::Display> fmt::Display for EnumRegistry<V> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		for (i, member) in self.members.iter().enumerate() {
			if i > 0 {
				f.write_char('\n')?;
			}
			write!(f, "{member}")?;
		}
		Ok(())
	}
}

impl<V: fmt::Debug> fmt::Debug for EnumRegistry<V> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("EnumRegistry")
			.field("type_name", &self.type_name)
			.field("members", &self.members)
			.field("collisions", &self.collisions)
			.finish()
	}
}
