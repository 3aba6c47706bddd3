/// Errors raised while sealing an enum registry.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BuildError {
	/// A member was declared without a name.
	#[error("{registry}: member #{index} has an empty name")]
	EmptyName { registry: &'static str, index: usize },

	/// Two members were declared under the same name.
	#[error("{registry}: duplicate name `{name}` (#{first} and #{second})")]
	DuplicateName {
		registry: &'static str,
		name: Box<str>,
		first: usize,
		second: usize,
	},

	/// Two members share a domain value under [`DuplicatePolicy::Reject`](crate::DuplicatePolicy::Reject).
	#[error("{registry}: duplicate value {value} on `{first}` and `{second}`")]
	DuplicateValue {
		registry: &'static str,
		value: String,
		first: Box<str>,
		second: Box<str>,
	},
}
