// ============================================================================
// REACTIVITY - Estado compartido con notificación a subscribers
// ============================================================================
// Los viewmodels mutan el controlador a través de `update`; cada cambio avisa
// a los subscribers (el hook hace un force_update). Los clones comparten
// valor y subscribers.
// ============================================================================

use std::cell::{Ref, RefCell};
use std::rc::Rc;

type Subscriber = Rc<dyn Fn()>;

pub struct ReactiveState<T> {
    value: Rc<RefCell<T>>,
    subscribers: Rc<RefCell<Vec<Subscriber>>>,
}

impl<T> ReactiveState<T> {
    pub fn new(value: T) -> Self {
        Self {
            value: Rc::new(RefCell::new(value)),
            subscribers: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// Lectura para renderizar. No mantener el `Ref` a través de un `.await`.
    pub fn borrow(&self) -> Ref<'_, T> {
        self.value.borrow()
    }

    pub fn read<R>(&self, reader: impl FnOnce(&T) -> R) -> R {
        reader(&self.value.borrow())
    }

    /// Muta el valor y notifica cuando el préstamo ya está liberado
    pub fn update<R>(&self, updater: impl FnOnce(&mut T) -> R) -> R {
        let result = updater(&mut self.value.borrow_mut());
        self.notify();
        result
    }

    pub fn subscribe<F>(&self, callback: F)
    where
        F: Fn() + 'static,
    {
        self.subscribers.borrow_mut().push(Rc::new(callback));
    }

    fn notify(&self) {
        // Copia: un subscriber puede suscribir a otro
        let subscribers = self.subscribers.borrow().clone();
        for callback in subscribers {
            callback();
        }
    }
}

impl<T> Clone for ReactiveState<T> {
    fn clone(&self) -> Self {
        Self {
            value: self.value.clone(),
            subscribers: self.subscribers.clone(),
        }
    }
}

impl<T> PartialEq for ReactiveState<T> {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.value, &other.value)
    }
}

impl<T: Default> Default for ReactiveState<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn update_notifies_every_clone() {
        let state = ReactiveState::new(1);
        let other = state.clone();
        let hits = Rc::new(Cell::new(0));

        let h = hits.clone();
        state.subscribe(move || h.set(h.get() + 1));

        other.update(|v| *v += 1);
        assert_eq!(*state.borrow(), 2);
        assert_eq!(hits.get(), 1);
    }

    #[test]
    fn subscriber_can_read_during_notify() {
        let state = ReactiveState::new(String::from("a"));
        let seen = Rc::new(RefCell::new(String::new()));

        let (s, reader) = (seen.clone(), state.clone());
        state.subscribe(move || *s.borrow_mut() = reader.borrow().clone());

        state.update(|v| v.push('b'));
        assert_eq!(*seen.borrow(), "ab");
    }
}
