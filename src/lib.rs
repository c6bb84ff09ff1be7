//! Declared field observers for plain records.
//!
//! A record type lists its observers in [`Observed::OBSERVERS`]. Each observer
//! names the fields it watches. Wrapping the record in a [`Model`] builds the
//! per-instance dispatch map, primes derived fields for records that were never
//! persisted, and re-runs the watching observers after every write made
//! through the model.
//!
//! Observer methods are named with the [`OBSERVE_PREFIX`] `observe_`, such as
//! `observe_total`. The leading-underscore form `_observe_total` is rejected:
//! Rust methods are not hidden by a leading underscore the way attributes of
//! a dynamic object are, so the prefix carries no such marker.
//!
//! ```
//! use std::convert::Infallible;
//! use observe_fields::{field, observer, Field, Model, Observed, Observer};
//!
//! struct Line {
//! 	pk: Option<u64>,
//! 	qty: u32,
//! 	price: u32,
//! 	total: u32,
//! }
//!
//! impl Line {
//! 	const QTY: Field<Self, u32> = field!(Self, qty: u32);
//!
//! 	fn observe_total(line: &mut Model<Self>) -> Result<(), Infallible> {
//! 		let total = line.qty * line.price;
//! 		line.assign(&field!(Self, total: u32), total)
//! 	}
//! }
//!
//! impl Observed for Line {
//! 	type Error = Infallible;
//! 	const OBSERVERS: &'static [Observer<Self>] = &[observer!(observe_total => "qty", "price")];
//!
//! 	fn is_persisted(&self) -> bool {
//! 		self.pk.is_some()
//! 	}
//! }
//!
//! let mut line = Model::new(Line { pk: None, qty: 2, price: 5, total: 0 }).unwrap();
//! assert_eq!(line.total, 10);
//!
//! line.assign(&Line::QTY, 3).unwrap();
//! assert_eq!(line.total, 15);
//! ```
//!
//! Observer names are checked while the type is compiled:
//!
//! ```compile_fail
//! use std::convert::Infallible;
//! use observe_fields::{observer, Model, Observed, Observer};
//!
//! struct Bad;
//!
//! impl Bad {
//! 	fn total(_: &mut Model<Self>) -> Result<(), Infallible> {
//! 		Ok(())
//! 	}
//! }
//!
//! impl Observed for Bad {
//! 	type Error = Infallible;
//! 	const OBSERVERS: &'static [Observer<Self>] = &[observer!(total => "a")];
//!
//! 	fn is_persisted(&self) -> bool {
//! 		false
//! 	}
//! }
//! ```

mod macros;

mod field;
mod map;
mod model;
mod observer;

pub use field::Field;
pub use map::ObserverMap;
pub use model::Model;
pub use observer::{has_observe_prefix, Handler, Observer, OBSERVE_PREFIX};

/// A record whose derived fields are maintained by declared observers.
pub trait Observed: Sized + 'static {
	/// Error returned by observers. Use [`std::convert::Infallible`]
	/// when no observer can fail.
	type Error;

	/// Every observer of this type, in declaration order.
	const OBSERVERS: &'static [Observer<Self>];

	/// `true` once the record carries a persisted identity.
	///
	/// Observers are primed on construction only when this is `false`.
	fn is_persisted(&self) -> bool;
}
