use std::fmt::Debug;

use fxhash::FxHashMap;
use smallvec::SmallVec;

use crate::{Observed, Observer};

pub(crate) type Observers<T> = SmallVec<[&'static Observer<T>; 2]>;

/// Field name to the observers watching it, in declaration order.
///
/// Built once per [`Model`](crate::Model) and never changed afterwards.
pub struct ObserverMap<T>
where
	T: Observed,
{
	fields: FxHashMap<&'static str, Observers<T>>,
}

impl<T> ObserverMap<T>
where
	T: Observed,
{
	pub fn build(observers: &'static [Observer<T>]) -> Self {
		let mut fields: FxHashMap<&'static str, Observers<T>> = FxHashMap::default();
		for observer in observers {
			for field in observer.fields() {
				fields.entry(*field).or_default().push(observer);
			}
		}

		ObserverMap { fields }
	}

	/// Observers of `field`. Unknown fields have none.
	pub fn get(&self, field: &str) -> &[&'static Observer<T>] {
		match self.fields.get(field) {
			Some(observers) => observers.as_slice(),
			None => &[],
		}
	}

	pub fn contains(&self, field: &str) -> bool {
		self.fields.contains_key(field)
	}

	/// Number of observed fields.
	pub fn len(&self) -> usize {
		self.fields.len()
	}

	pub fn is_empty(&self) -> bool {
		self.fields.is_empty()
	}

	pub(crate) fn observers(&self, field: &str) -> Option<Observers<T>> {
		self.fields.get(field).cloned()
	}
}

impl<T> Debug for ObserverMap<T>
where
	T: Observed,
{
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_map()
			.entries(self.fields.iter().map(|(field, observers)| {
				let names: SmallVec<[&'static str; 2]> =
					observers.iter().map(|o| o.name()).collect();
				(field, names)
			}))
			.finish()
	}
}

#[cfg(test)]
mod tests {
	use std::convert::Infallible;

	use super::ObserverMap;
	use crate::{Model, Observed, Observer};

	struct Record;

	impl Record {
		fn observe_first(_: &mut Model<Self>) -> Result<(), Infallible> {
			Ok(())
		}

		fn observe_second(_: &mut Model<Self>) -> Result<(), Infallible> {
			Ok(())
		}
	}

	impl Observed for Record {
		type Error = Infallible;
		const OBSERVERS: &'static [Observer<Self>] = &[
			crate::observer!(observe_first => "a", "b"),
			crate::observer!(observe_second => "a"),
			crate::observer!(observe_first),
		];

		fn is_persisted(&self) -> bool {
			true
		}
	}

	#[test]
	fn groups_by_field_in_declaration_order() {
		let map = ObserverMap::build(Record::OBSERVERS);
		assert_eq!(map.len(), 2);

		let a: Vec<_> = map.get("a").iter().map(|o| o.name()).collect();
		assert_eq!(a, ["observe_first", "observe_second"]);

		let b: Vec<_> = map.get("b").iter().map(|o| o.name()).collect();
		assert_eq!(b, ["observe_first"]);
	}

	#[test]
	fn unknown_field_is_empty() {
		let map = ObserverMap::build(Record::OBSERVERS);
		assert!(map.get("c").is_empty());
		assert!(!map.contains("c"));
	}
}
