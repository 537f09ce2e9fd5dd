//! Typed variable bindings.
//!
//! A binding connects a console name to storage owned by the application.
//! The console never owns the bound value: it either borrows it for `'a`
//! (`&Cell<T>`, `&RefCell<T>`) or shares it through a reference-counted
//! handle that the application also holds.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::sync::{Arc, Mutex, PoisonError, RwLock};

use super::{ConsoleValue, ParseValueError};

/// Storage that a console variable can read from and write to.
///
/// Implemented for borrowed and shared cells and locks. Lock poisoning is
/// ignored: the console is a debugging aid and still shows the inner value.
pub trait VarSlot {
    /// The bound value type.
    type Value: ConsoleValue;

    /// Run `f` with the current value.
    fn with_value<R>(&self, f: impl FnOnce(&Self::Value) -> R) -> R;

    /// Overwrite the current value.
    fn store(&self, value: Self::Value);
}

impl<T: ConsoleValue + Copy> VarSlot for &Cell<T> {
    type Value = T;

    fn with_value<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.get())
    }

    fn store(&self, value: T) {
        self.set(value);
    }
}

impl<T: ConsoleValue> VarSlot for &RefCell<T> {
    type Value = T;

    fn with_value<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&*self.borrow())
    }

    fn store(&self, value: T) {
        *self.borrow_mut() = value;
    }
}

impl<T: ConsoleValue + Copy> VarSlot for Rc<Cell<T>> {
    type Value = T;

    fn with_value<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.get())
    }

    fn store(&self, value: T) {
        self.set(value);
    }
}

impl<T: ConsoleValue> VarSlot for Rc<RefCell<T>> {
    type Value = T;

    fn with_value<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&*self.borrow())
    }

    fn store(&self, value: T) {
        *self.borrow_mut() = value;
    }
}

impl<T: ConsoleValue> VarSlot for Arc<Mutex<T>> {
    type Value = T;

    fn with_value<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        let guard = self.lock().unwrap_or_else(PoisonError::into_inner);
        f(&*guard)
    }

    fn store(&self, value: T) {
        *self.lock().unwrap_or_else(PoisonError::into_inner) = value;
    }
}

impl<T: ConsoleValue> VarSlot for Arc<RwLock<T>> {
    type Value = T;

    fn with_value<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        let guard = self.read().unwrap_or_else(PoisonError::into_inner);
        f(&*guard)
    }

    fn store(&self, value: T) {
        *self.write().unwrap_or_else(PoisonError::into_inner) = value;
    }
}

/// Type-erased trait for variable bindings.
///
/// This allows storing bindings of different types in the same registry.
pub trait VarBinding {
    /// Get the current value as text, read at call time.
    fn to_text(&self) -> String;

    /// Parse `text` and overwrite the bound value.
    ///
    /// On error the bound value is left untouched.
    fn from_text(&self, text: &str) -> Result<(), ParseValueError>;

    /// Name of the bound value type, for diagnostics.
    fn type_name(&self) -> &'static str;
}

/// A binding over a concrete slot type.
///
/// # Examples
///
/// ```
/// use std::cell::Cell;
/// use bevy_var_console::core::{Binding, VarBinding};
///
/// let speed = Cell::new(3.5f32);
/// let binding = Binding::new(&speed);
/// assert_eq!(binding.to_text(), "3.5");
///
/// binding.from_text("10").unwrap();
/// assert_eq!(speed.get(), 10.0);
/// ```
pub struct Binding<S: VarSlot> {
    slot: S,
}

impl<S: VarSlot> Binding<S> {
    /// Bind to `slot`.
    pub fn new(slot: S) -> Self {
        Self { slot }
    }

    /// Get the underlying slot.
    pub fn slot(&self) -> &S {
        &self.slot
    }
}

impl<S: VarSlot> VarBinding for Binding<S> {
    fn to_text(&self) -> String {
        self.slot.with_value(|value| value.format())
    }

    fn from_text(&self, text: &str) -> Result<(), ParseValueError> {
        let value = S::Value::parse(text)?;
        self.slot.store(value);
        Ok(())
    }

    fn type_name(&self) -> &'static str {
        std::any::type_name::<S::Value>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_binding_reads_current_value() {
        let health = Cell::new(100i32);
        let binding = Binding::new(&health);
        assert_eq!(binding.to_text(), "100");

        health.set(55);
        assert_eq!(binding.to_text(), "55");
    }

    #[test]
    fn test_binding_writes_in_place() {
        let name = RefCell::new(String::from("player"));
        let binding = Binding::new(&name);

        binding.from_text("ghost rider").unwrap();
        assert_eq!(*name.borrow(), "ghost rider");
    }

    #[test]
    fn test_binding_parse_failure_keeps_value() {
        let count = Cell::new(7u32);
        let binding = Binding::new(&count);

        let err = binding.from_text("-1").unwrap_err();
        assert_eq!(err.expected, "u32");
        assert_eq!(count.get(), 7);
    }

    #[test]
    fn test_binding_shared_handles() {
        let rc = Rc::new(Cell::new(false));
        let binding = Binding::new(Rc::clone(&rc));
        binding.from_text("on").unwrap();
        assert!(rc.get());

        let arc = Arc::new(Mutex::new(1.5f64));
        let binding = Binding::new(Arc::clone(&arc));
        binding.from_text("2.25").unwrap();
        assert_eq!(*arc.lock().unwrap(), 2.25);

        let lock = Arc::new(RwLock::new('a'));
        let binding = Binding::new(Arc::clone(&lock));
        assert_eq!(binding.to_text(), "a");
        binding.from_text("z").unwrap();
        assert_eq!(*lock.read().unwrap(), 'z');
    }

    #[test]
    fn test_binding_poisoned_lock() {
        let value = Arc::new(Mutex::new(3i64));
        let poisoner = Arc::clone(&value);
        let _ = std::thread::spawn(move || {
            let _guard = poisoner.lock().unwrap();
            panic!("poison the lock");
        })
        .join();

        let binding = Binding::new(Arc::clone(&value));
        assert_eq!(binding.to_text(), "3");
        binding.from_text("4").unwrap();
        assert_eq!(binding.to_text(), "4");
    }

    #[test]
    fn test_binding_dyn() {
        let a = Cell::new(1u8);
        let b = RefCell::new(String::from("x"));
        let mut bindings: Vec<Box<dyn VarBinding + '_>> = Vec::new();
        bindings.push(Box::new(Binding::new(&a)));
        bindings.push(Box::new(Binding::new(&b)));

        let texts: Vec<_> = bindings.iter().map(|b| b.to_text()).collect();
        assert_eq!(texts, vec!["1", "x"]);
        assert_eq!(bindings[0].type_name(), "u8");
    }
}
