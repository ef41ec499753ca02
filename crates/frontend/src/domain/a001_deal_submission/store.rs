//! Где живёт состояние сессии.
//!
//! In the app it is an `RwSignal`; tests use `Rc<RefCell<_>>`. A store that
//! is gone (disposed signal after unmount) answers `None`, and the workflow
//! treats that as "nobody is listening anymore".

use leptos::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;

pub trait StateCell<T> {
    fn update_state<R>(&self, f: impl FnOnce(&mut T) -> R) -> Option<R>;

    fn read_state<R>(&self, f: impl FnOnce(&T) -> R) -> Option<R>;
}

impl<T: Send + Sync + 'static> StateCell<T> for RwSignal<T> {
    fn update_state<R>(&self, f: impl FnOnce(&mut T) -> R) -> Option<R> {
        self.try_update(f)
    }

    fn read_state<R>(&self, f: impl FnOnce(&T) -> R) -> Option<R> {
        self.try_with_untracked(f)
    }
}

impl<T> StateCell<T> for Rc<RefCell<T>> {
    fn update_state<R>(&self, f: impl FnOnce(&mut T) -> R) -> Option<R> {
        Some(f(&mut self.borrow_mut()))
    }

    fn read_state<R>(&self, f: impl FnOnce(&T) -> R) -> Option<R> {
        Some(f(&self.borrow()))
    }
}
