use std::fmt::Debug;
use std::ops::Deref;

use crate::{Field, Observed, ObserverMap};

/// A record plus the observers that keep its derived fields in sync.
///
/// Reads go straight to the record through `Deref`. Writes go through
/// [`assign`](Model::assign), [`replace`](Model::replace) or
/// [`update`](Model::update): the value is stored first, then every observer
/// of the written field runs in declaration order.
pub struct Model<T>
where
	T: Observed,
{
	record: T,
	observers: Option<ObserverMap<T>>,
}

impl<T> Model<T>
where
	T: Observed,
{
	/// Wraps `record` and, unless it is already persisted, runs every
	/// observer once per field it watches.
	pub fn new(record: T) -> Result<Self, T::Error> {
		Self::with_init(record, |_| Ok(()))
	}

	/// Like [`Model::new`], but runs `init` before the observers are
	/// registered. Writes made by `init` are stored without notifying anyone.
	pub fn with_init<F>(record: T, init: F) -> Result<Self, T::Error>
	where
		F: FnOnce(&mut Self) -> Result<(), T::Error>,
	{
		let mut model = Model {
			record,
			observers: None,
		};

		init(&mut model)?;

		let observers = ObserverMap::build(T::OBSERVERS);
		let prime = !model.record.is_persisted();
		tracing::debug!(
			observers = T::OBSERVERS.len(),
			fields = observers.len(),
			prime,
			"model constructed"
		);

		model.observers = Some(observers);
		if prime {
			model.prime()?;
		}

		Ok(model)
	}

	// NOTE: an observer watching N fields runs N times here.
	fn prime(&mut self) -> Result<(), T::Error> {
		for observer in T::OBSERVERS {
			for field in observer.fields() {
				tracing::trace!(field, observer = observer.name(), "prime");
				observer.invoke(self)?;
			}
		}

		Ok(())
	}

	pub fn into_inner(self) -> T {
		self.record
	}

	/// `false` while the model is still being initialized.
	pub fn is_constructed(&self) -> bool {
		self.observers.is_some()
	}

	pub fn observer_map(&self) -> Option<&ObserverMap<T>> {
		self.observers.as_ref()
	}

	/// Names of the observers of `field`, in the order they run.
	pub fn observers_of<'a>(&'a self, field: &'a str) -> impl Iterator<Item = &'static str> + 'a {
		self.observers
			.iter()
			.flat_map(move |map| map.get(field))
			.map(|observer| observer.name())
	}

	/// Stores `value` in `field` and notifies its observers.
	pub fn assign<V>(&mut self, field: &Field<T, V>, value: V) -> Result<(), T::Error> {
		*field.get_mut(&mut self.record) = value;
		self.notify(field.name())
	}

	/// Stores `value` in `field`, notifies its observers and returns the
	/// previous value.
	///
	/// When an observer fails the previous value is lost along with the
	/// returned error.
	pub fn replace<V>(&mut self, field: &Field<T, V>, value: V) -> Result<V, T::Error> {
		let old = std::mem::replace(field.get_mut(&mut self.record), value);
		self.notify(field.name())?;
		Ok(old)
	}

	/// Applies `func` to the record as a write of `field`.
	pub fn update(&mut self, field: &str, func: impl FnOnce(&mut T)) -> Result<(), T::Error> {
		func(&mut self.record);
		self.notify(field)
	}

	/// Runs the observers of `field`.
	///
	/// Does nothing before construction has finished or when `field` has no
	/// observers. The first failing observer stops the rest.
	pub fn notify(&mut self, field: &str) -> Result<(), T::Error> {
		let observers = match &self.observers {
			Some(map) => map.observers(field),
			None => {
				tracing::trace!(field, "write before construction, not dispatched");
				return Ok(());
			}
		};

		let Some(observers) = observers else {
			return Ok(());
		};

		for observer in observers {
			tracing::trace!(field, observer = observer.name(), "dispatch");
			observer.invoke(self)?;
		}

		Ok(())
	}
}

impl<T> Deref for Model<T>
where
	T: Observed,
{
	type Target = T;

	fn deref(&self) -> &Self::Target {
		&self.record
	}
}

impl<T> Debug for Model<T>
where
	T: Observed + Debug,
{
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Model")
			.field("record", &self.record)
			.field("constructed", &self.is_constructed())
			.finish()
	}
}
