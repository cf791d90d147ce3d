//! Call-recording doubles.
//!
//! A [`Double`] is a cheap, clonable handle onto one shared ledger. The mock
//! class appends calls through one handle while the test installs behaviors
//! and reads history through another.

use serde_json::Value;
use std::cell::RefCell;
use std::collections::VecDeque;
use std::fmt;
use std::rc::Rc;

/// Installed return behavior. Receives the recorded argument sequence.
pub type Behavior = Box<dyn FnMut(&[Value]) -> Option<Value>>;

#[derive(Default)]
struct Ledger {
    calls: Vec<Vec<Value>>,
    results: Vec<Option<Value>>,
    behavior: Option<Behavior>,
    once: VecDeque<Behavior>,
}

/// A callable that records every invocation and returns whatever its
/// installed behavior produces (nothing by default).
#[derive(Clone)]
pub struct Double {
    name: Rc<str>,
    ledger: Rc<RefCell<Ledger>>,
}

impl Double {
    pub fn new(name: impl Into<Rc<str>>) -> Self {
        Self {
            name: name.into(),
            ledger: Rc::new(RefCell::new(Ledger::default())),
        }
    }

    /// Key this double is registered under.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Record `args` as one call and return the installed behavior's result.
    ///
    /// One-shot behaviors are consumed first, in installation order. The
    /// behavior is taken out of the ledger while it runs, so it may call back
    /// into this double.
    pub fn invoke(&self, args: Vec<Value>) -> Option<Value> {
        tracing::trace!(double = %self.name, arity = args.len(), "Double invoked");

        let (slot, once, persistent) = {
            let mut ledger = self.ledger.borrow_mut();
            ledger.calls.push(args.clone());
            // Reserve the result slot now so nested calls land after it.
            let slot = ledger.results.len();
            ledger.results.push(None);
            match ledger.once.pop_front() {
                Some(behavior) => (slot, Some(behavior), None),
                None => (slot, None, ledger.behavior.take()),
            }
        };

        let result = match (once, persistent) {
            (Some(mut behavior), _) => behavior(args.as_slice()),
            (None, Some(mut behavior)) => {
                let result = behavior(args.as_slice());
                let mut ledger = self.ledger.borrow_mut();
                // A behavior installed during the call wins over the one that ran.
                if ledger.behavior.is_none() {
                    ledger.behavior = Some(behavior);
                }
                result
            }
            (None, None) => None,
        };

        if let Some(recorded) = self.ledger.borrow_mut().results.get_mut(slot) {
            *recorded = result.clone();
        }
        result
    }

    /// Replace the persistent behavior used for every later call.
    pub fn set_behavior<F>(&self, behavior: F)
    where
        F: FnMut(&[Value]) -> Option<Value> + 'static,
    {
        self.ledger.borrow_mut().behavior = Some(Box::new(behavior));
    }

    /// Queue a behavior for the next call only. Queued behaviors run before
    /// the persistent one.
    pub fn set_behavior_once<F>(&self, behavior: F)
    where
        F: FnMut(&[Value]) -> Option<Value> + 'static,
    {
        self.ledger.borrow_mut().once.push_back(Box::new(behavior));
    }

    /// Always return `value`.
    pub fn returns(&self, value: Value) {
        self.set_behavior(move |_| Some(value.clone()));
    }

    /// Return `value` from the next call only.
    pub fn returns_once(&self, value: Value) {
        let mut value = Some(value);
        self.set_behavior_once(move |_| value.take());
    }

    pub fn was_called(&self) -> bool {
        !self.ledger.borrow().calls.is_empty()
    }

    /// True if any recorded call carried exactly this argument sequence.
    pub fn was_called_with(&self, args: &[Value]) -> bool {
        self.ledger
            .borrow()
            .calls
            .iter()
            .any(|call| call.as_slice() == args)
    }

    pub fn call_count(&self) -> usize {
        self.ledger.borrow().calls.len()
    }

    /// Recorded argument sequences, oldest first.
    pub fn calls(&self) -> Vec<Vec<Value>> {
        self.ledger.borrow().calls.clone()
    }

    pub fn last_call(&self) -> Option<Vec<Value>> {
        self.ledger.borrow().calls.last().cloned()
    }

    /// Results produced by each call, aligned with [`Double::calls`].
    pub fn results(&self) -> Vec<Option<Value>> {
        self.ledger.borrow().results.clone()
    }

    /// Forget recorded calls and results. Behaviors stay installed.
    pub fn clear(&self) {
        let mut ledger = self.ledger.borrow_mut();
        ledger.calls.clear();
        ledger.results.clear();
    }

    /// Forget recorded calls, results and every installed behavior.
    pub fn reset(&self) {
        let mut ledger = self.ledger.borrow_mut();
        ledger.calls.clear();
        ledger.results.clear();
        ledger.behavior = None;
        ledger.once.clear();
    }

    /// Whether two handles point at the same ledger.
    pub fn same_ledger(&self, other: &Double) -> bool {
        Rc::ptr_eq(&self.ledger, &other.ledger)
    }
}

impl fmt::Debug for Double {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ledger = self.ledger.borrow();
        f.debug_struct("Double")
            .field("name", &self.name)
            .field("calls", &ledger.calls)
            .field("has_behavior", &ledger.behavior.is_some())
            .field("queued", &ledger.once.len())
            .finish()
    }
}
