use std::cell::{Cell, RefCell};
use std::ops::{Deref, DerefMut};
use std::rc::Rc;

#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct ZeroSizedType;

/// Shared counter that is incremented every time an instance is dropped.
#[derive(Debug, Clone)]
pub struct CountedDrop(pub Rc<RefCell<usize>>);

impl CountedDrop {
    pub fn new(value: usize) -> CountedDrop {
        CountedDrop(Rc::new(RefCell::new(value)))
    }
}

impl Default for CountedDrop {
    fn default() -> Self {
        CountedDrop::new(0)
    }
}

impl Deref for CountedDrop {
    type Target = Rc<RefCell<usize>>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for CountedDrop {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl Drop for CountedDrop {
    fn drop(&mut self) {
        self.0.replace_with(|v| *v + 1);
    }
}

/// Shared counter of currently live instances: incremented on construction
/// and cloning, decremented on drop. A balanced sequence of container
/// operations followed by teardown must return it to zero; a double drop
/// takes it negative.
#[derive(Debug)]
pub struct LiveCounted(pub Rc<Cell<isize>>);

impl LiveCounted {
    pub fn new(counter: &Rc<Cell<isize>>) -> LiveCounted {
        counter.set(counter.get() + 1);
        LiveCounted(Rc::clone(counter))
    }
}

impl Clone for LiveCounted {
    fn clone(&self) -> Self {
        LiveCounted::new(&self.0)
    }
}

impl Drop for LiveCounted {
    fn drop(&mut self) {
        self.0.set(self.0.get() - 1);
    }
}
