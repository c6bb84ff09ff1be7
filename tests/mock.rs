use std::cell::{RefCell, RefMut};
use std::rc::Rc;

use mockall::automock;

/// Observers under test report the value they saw here.
#[automock]
pub trait Spy {
	fn first(&self, value: i64);
	fn second(&self, value: i64);
}

/// One mock shared by the test body and the record it builds. Records are
/// single-threaded, so a `RefCell` is enough.
#[derive(Clone, Default)]
pub struct SharedSpy(Rc<RefCell<MockSpy>>);

impl SharedSpy {
	pub fn get(&self) -> RefMut<'_, MockSpy> {
		self.0.borrow_mut()
	}
}
