//! Bookkeeping for recurring tasks that must be released exactly once.
//!
//! `H` is whatever keeps the task alive (a browser interval, for instance);
//! releasing a slot drops its handle, and dropping the set drops every handle
//! still held.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

struct SlotState<H> {
    handle: RefCell<Option<H>>,
    released: Cell<bool>,
}

type Slots<H> = RefCell<Vec<Rc<SlotState<H>>>>;

pub struct TaskSlot<H> {
    state: Rc<SlotState<H>>,
    owner: Weak<Slots<H>>,
}

impl<H> Clone for TaskSlot<H> {
    fn clone(&self) -> Self {
        Self {
            state: self.state.clone(),
            owner: self.owner.clone(),
        }
    }
}

impl<H> TaskSlot<H> {
    /// Stores the handle. A slot released before it was filled drops the
    /// handle straight away.
    pub fn fill(&self, handle: H) {
        if self.state.released.get() {
            drop(handle);
            return;
        }
        *self.state.handle.borrow_mut() = Some(handle);
    }

    pub fn release(&self) {
        if self.state.released.replace(true) {
            return;
        }

        let handle = self.state.handle.borrow_mut().take();

        if let Some(owner) = self.owner.upgrade() {
            if let Ok(mut slots) = owner.try_borrow_mut() {
                slots.retain(|other| !Rc::ptr_eq(other, &self.state));
            }
        }

        drop(handle);
    }

    pub fn is_released(&self) -> bool {
        self.state.released.get()
    }
}

pub struct TaskSet<H> {
    slots: Rc<Slots<H>>,
}

impl<H> Default for TaskSet<H> {
    fn default() -> Self {
        Self {
            slots: Rc::new(RefCell::new(Vec::new())),
        }
    }
}

impl<H> TaskSet<H> {
    pub fn reserve(&self) -> TaskSlot<H> {
        let state = Rc::new(SlotState {
            handle: RefCell::new(None),
            released: Cell::new(false),
        });
        self.slots.borrow_mut().push(state.clone());

        TaskSlot {
            state,
            owner: Rc::downgrade(&self.slots),
        }
    }

    /// Tasks reserved and not yet released.
    pub fn active(&self) -> usize {
        self.slots
            .borrow()
            .iter()
            .filter(|slot| !slot.released.get())
            .count()
    }
}

impl<H> Drop for TaskSet<H> {
    fn drop(&mut self) {
        let slots: Vec<_> = self.slots.borrow_mut().drain(..).collect();

        for slot in slots {
            slot.released.set(true);
            drop(slot.handle.borrow_mut().take());
        }
    }
}
