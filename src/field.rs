use std::fmt::Debug;

/// A named, writable field of `T`.
///
/// Pairs the name observers are registered under with the storage it refers
/// to, so a write through [`Model::assign`](crate::Model::assign) can never
/// notify a different field than the one it changed.
pub struct Field<T, V> {
	name: &'static str,
	access: fn(&mut T) -> &mut V,
}

impl<T, V> Clone for Field<T, V> {
	fn clone(&self) -> Self {
		*self
	}
}

impl<T, V> Copy for Field<T, V> {}

impl<T, V> Field<T, V> {
	pub const fn new(name: &'static str, access: fn(&mut T) -> &mut V) -> Self {
		Field { name, access }
	}

	#[inline]
	pub fn name(&self) -> &'static str {
		self.name
	}

	#[inline]
	pub fn get_mut<'a>(&self, record: &'a mut T) -> &'a mut V {
		(self.access)(record)
	}
}

impl<T, V> Debug for Field<T, V> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_tuple("Field").field(&self.name).finish()
	}
}
