use std::fmt::Debug;

use crate::{Model, Observed};

/// Every observer name must start with this prefix.
pub const OBSERVE_PREFIX: &str = "observe_";

/// Signature of an observer body. It receives the model that owns the record,
/// so writes it makes are dispatched like any other.
pub type Handler<T> = fn(&mut Model<T>) -> Result<(), <T as Observed>::Error>;

pub const fn has_observe_prefix(name: &str) -> bool {
	let name = name.as_bytes();
	let prefix = OBSERVE_PREFIX.as_bytes();
	if name.len() < prefix.len() {
		return false;
	}

	let mut i = 0;
	while i < prefix.len() {
		if name[i] != prefix[i] {
			return false;
		}
		i += 1;
	}

	true
}

/// An observer method together with the fields it watches.
pub struct Observer<T>
where
	T: Observed,
{
	name: &'static str,
	fields: &'static [&'static str],
	handler: Handler<T>,
}

impl<T> Clone for Observer<T>
where
	T: Observed,
{
	fn clone(&self) -> Self {
		*self
	}
}

impl<T> Copy for Observer<T> where T: Observed {}

impl<T> Observer<T>
where
	T: Observed,
{
	/// Declares `handler` as the observer `name` of `fields`.
	///
	/// Panics with `name` as the message when it does not start with
	/// [`OBSERVE_PREFIX`]. Inside a `const` the panic is a compile error.
	pub const fn new(
		name: &'static str,
		fields: &'static [&'static str],
		handler: Handler<T>,
	) -> Self {
		// const panics only format a lone `&str`
		assert!(has_observe_prefix(name), "{}", name);

		Observer {
			name,
			fields,
			handler,
		}
	}

	#[inline]
	pub fn name(&self) -> &'static str {
		self.name
	}

	#[inline]
	pub fn fields(&self) -> &'static [&'static str] {
		self.fields
	}

	pub fn observes(&self, field: &str) -> bool {
		self.fields.iter().any(|f| *f == field)
	}

	#[inline]
	pub(crate) fn invoke(&self, model: &mut Model<T>) -> Result<(), T::Error> {
		(self.handler)(model)
	}
}

impl<T> Debug for Observer<T>
where
	T: Observed,
{
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Observer")
			.field("name", &self.name)
			.field("fields", &self.fields)
			.finish()
	}
}
