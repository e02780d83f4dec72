//! Element type that records how many instances were created and dropped.

use std::cell::Cell;
use std::rc::Rc;

#[derive(Default)]
struct Counts {
    made: Cell<usize>,
    dropped: Cell<usize>,
}

pub struct DropCounter(Rc<Counts>);

impl DropCounter {
    pub fn new() -> Self {
        DropCounter(Rc::default())
    }

    pub fn make(&self, id: usize) -> Tracked {
        self.0.made.set(self.0.made.get() + 1);
        Tracked {
            id,
            counts: self.0.clone(),
        }
    }

    pub fn made(&self) -> usize {
        self.0.made.get()
    }

    pub fn dropped(&self) -> usize {
        self.0.dropped.get()
    }
}

pub struct Tracked {
    id: usize,
    counts: Rc<Counts>,
}

impl Tracked {
    pub fn id(&self) -> usize {
        self.id
    }
}

impl Drop for Tracked {
    fn drop(&mut self) {
        self.counts.dropped.set(self.counts.dropped.get() + 1);
    }
}
