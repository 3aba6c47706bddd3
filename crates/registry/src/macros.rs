//! Enum declaration macro.

/// Declares a labeled enum type backed by a static [`EnumRegistry`](crate::EnumRegistry).
///
/// Each member is written as `name = (value, label)`. The generated type is a `Copy`
/// handle to one member and dereferences to [`Member`](crate::Member); the common
/// accessors are repeated on the handle with `'static` lifetimes. The registry is sealed
/// on first use; a declaration that fails to build panics with the type name.
///
/// The value type must implement `Clone`, `Eq`, `Hash`, `Debug` and `Display`. Member
/// names share a namespace with the generated associated functions (`registry`, `of_key`,
/// `of`, `of_text`, `options`, `all`, `as_member`, `name`, `index`, `value`, `label`), so
/// avoid those names.
///
/// ```
/// roster_registry::labeled_enum! {
///     pub TransportType: &'static str {
///         in_transit = ("1", "Preparing"),
///         received = ("3", "Received"),
///     }
/// }
///
/// assert_eq!(TransportType::in_transit().label(), "Preparing");
/// assert_eq!(TransportType::of("3"), Some(TransportType::received()));
/// assert_eq!(TransportType::received().to_string(), "TransportType.received=Received : 3");
/// ```
///
/// An optional `#![duplicate_policy(...)]` line before the members selects the
/// [`DuplicatePolicy`](crate::DuplicatePolicy).
#[macro_export]
macro_rules! labeled_enum {
	(
		$(#[$attr:meta])*
		$vis:vis $ty:ident : $value_ty:ty {
			$(#![duplicate_policy($policy:expr)])?
			$(
				$(#[$member_attr:meta])*
				$member:ident = ($value:expr, $label:expr $(,)?)
			),* $(,)?
		}
	) => {
		$crate::paste::paste! {
			#[doc(hidden)]
			#[allow(non_camel_case_types, dead_code)]
			enum [<__ $ty Slot>] {
				$($member,)*
			}

			$(#[$attr])*
			#[derive(Clone, Copy)]
			$vis struct $ty(&'static $crate::Member<$value_ty>);

			#[allow(dead_code)]
			impl $ty {
				/// Returns the sealed registry holding every member of this type.
				pub fn registry() -> &'static $crate::EnumRegistry<$value_ty> {
					static REGISTRY: ::std::sync::LazyLock<$crate::EnumRegistry<$value_ty>> =
						::std::sync::LazyLock::new(|| {
							#[allow(unused_mut)]
							let mut builder = $crate::EnumBuilder::new(stringify!($ty))
								$(.duplicate_policy($policy))?;
							$(builder.add(stringify!($member), $value, $label);)*
							match builder.build() {
								Ok(registry) => registry,
								Err(e) => panic!("enum {}: {}", stringify!($ty), e),
							}
						});
					&REGISTRY
				}

				$(
					$(#[$member_attr])*
					#[allow(non_snake_case)]
					pub fn $member() -> Self {
						Self(&Self::registry().members()[[<__ $ty Slot>]::$member as usize])
					}
				)*

				/// Looks up a member by declared name.
				pub fn of_key(name: &str) -> ::core::option::Option<Self> {
					Self::registry().of_key(name).map(Self)
				}

				/// Looks up a member by domain value; the first declared wins on duplicates.
				pub fn of<Q>(value: &Q) -> ::core::option::Option<Self>
				where
					$value_ty: ::core::borrow::Borrow<Q>,
					Q: ::core::cmp::Eq + ::core::hash::Hash + ?Sized,
				{
					Self::registry().of(value).map(Self)
				}

				/// Looks up a member by the textual rendering of its domain value.
				pub fn of_text(text: &str) -> ::core::option::Option<Self> {
					Self::registry().of_text(text).map(Self)
				}

				/// Returns the label/value projection of every member.
				pub fn options() -> ::std::vec::Vec<$crate::EnumOption<'static, $value_ty>> {
					Self::registry().options()
				}

				/// Returns every member in declaration order.
				pub fn all() -> impl ::core::iter::ExactSizeIterator<Item = Self> {
					Self::registry().iter().map(Self)
				}

				/// Returns the underlying member.
				pub fn as_member(self) -> &'static $crate::Member<$value_ty> {
					self.0
				}

				/// Returns the declared name.
				pub fn name(self) -> &'static str {
					self.0.name()
				}

				/// Returns the zero-based declaration position.
				pub fn index(self) -> usize {
					self.0.index()
				}

				/// Returns the domain value.
				pub fn value(self) -> &'static $value_ty {
					self.0.value()
				}

				/// Returns the human-readable label.
				pub fn label(self) -> &'static str {
					self.0.label()
				}
			}

			impl ::core::ops::Deref for $ty {
				type Target = $crate::Member<$value_ty>;

				fn deref(&self) -> &Self::Target {
					self.0
				}
			}

			impl ::core::cmp::PartialEq for $ty {
				fn eq(&self, other: &Self) -> bool {
					self.0.index() == other.0.index()
				}
			}

			impl ::core::cmp::Eq for $ty {}

			impl ::core::hash::Hash for $ty {
				fn hash<H: ::core::hash::Hasher>(&self, state: &mut H) {
					::core::hash::Hash::hash(&self.0.index(), state);
				}
			}

			impl ::core::fmt::Debug for $ty {
				fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
					write!(f, "{}::{}", stringify!($ty), self.0.name())
				}
			}

			impl ::core::fmt::Display for $ty {
				fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
					::core::fmt::Display::fmt(self.0, f)
				}
			}
		}
	};
}
