use std::cell::RefCell;
use std::rc::Rc;

pub type SubId = usize;

pub struct Signal<T: 'static>(Rc<RefCell<Inner<T>>>);

impl<T> Clone for Signal<T> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

type Subscriber<T> = Rc<dyn Fn(&RefCell<Inner<T>>)>;

struct Inner<T: 'static> {
    value: T,
    subs: Vec<Subscriber<T>>,
}

impl<T> Signal<T> {
    pub fn new(value: T) -> Self {
        Self(Rc::new(RefCell::new(Inner {
            value,
            subs: Vec::new(),
        })))
    }
    pub fn get(&self) -> T
    where
        T: Clone,
    {
        self.0.borrow().value.clone()
    }
    /// Replaces the value. Never merges.
    pub fn set(&self, v: T) {
        {
            let mut inner = self.0.borrow_mut();
            inner.value = v;
        }
        self.notify();
    }
    pub fn update<F: FnOnce(&mut T)>(&self, f: F) {
        {
            let mut inner = self.0.borrow_mut();
            f(&mut inner.value);
        }
        self.notify();
    }
    /// Subscribers get a snapshot of the value and may write back to the signal.
    pub fn subscribe(&self, f: impl Fn(&T) + 'static) -> SubId
    where
        T: Clone,
    {
        let sub: Subscriber<T> = Rc::new(move |cell: &RefCell<Inner<T>>| {
            let snapshot = cell.borrow().value.clone();
            f(&snapshot);
        });
        let mut inner = self.0.borrow_mut();
        inner.subs.push(sub);
        inner.subs.len() - 1
    }

    fn notify(&self) {
        crate::runtime::request_frame();
        // No borrow is held while subscribers run.
        let subs = self.0.borrow().subs.clone();
        for s in subs {
            s(&self.0);
        }
    }
}

pub fn signal<T>(t: T) -> Signal<T> {
    Signal::new(t)
}
