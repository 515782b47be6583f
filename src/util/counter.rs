use std::cell::Cell;
use std::rc::Rc;

/// A shared counter for observing how many times a callback was invoked. Clones share the same
/// count, so a clone can be moved into a closure while the original is inspected afterwards.
#[derive(Debug, Default, Clone)]
pub struct CallCounter(pub Rc<Cell<usize>>);

impl CallCounter {
    pub fn new() -> CallCounter {
        CallCounter(Rc::new(Cell::new(0)))
    }

    /// Records a single invocation.
    pub fn hit(&self) {
        self.0.set(self.0.get() + 1);
    }

    pub fn count(&self) -> usize {
        self.0.get()
    }
}
