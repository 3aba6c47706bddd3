use core::fmt;

/// One sealed member of an enum registry.
///
/// Members only exist inside an [`EnumRegistry`](crate::EnumRegistry). The declared
/// name and the positional index are assigned when the registry is built; the
/// domain value and label come from the declaration.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Member<V> {
	pub(crate) type_name: &'static str,
	pub(crate) name: Box<str>,
	pub(crate) index: usize,
	pub(crate) value: V,
	pub(crate) label: Box<str>,
}

impl<V> Member<V> {
	/// Returns the name of the enum type this member belongs to.
	#[inline]
	pub fn type_name(&self) -> &'static str {
		self.type_name
	}

	/// Returns the declared name.
	#[inline]
	pub fn name(&self) -> &str {
		&self.name
	}

	/// Returns the zero-based declaration position.
	#[inline]
	pub fn index(&self) -> usize {
		self.index
	}

	/// Returns the domain value.
	#[inline]
	pub fn value(&self) -> &V {
		&self.value
	}

	/// Returns the human-readable label.
	#[inline]
	pub fn label(&self) -> &str {
		&self.label
	}

	/// Projects this member onto its label and value.
	#[inline]
	pub fn option(&self) -> EnumOption<'_, V> {
		EnumOption {
			label: &self.label,
			value: &self.value,
		}
	}
}

/// Renders as `Type.name=label : value`.
impl<V: fmt::Display> fmt::Display for Member<V> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}.{}={} : {}", self.type_name, self.name, self.label, self.value)
	}
}

/// Label and domain value of a member, for populating choice lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EnumOption<'a, V> {
	pub label: &'a str,
	pub value: &'a V,
}
