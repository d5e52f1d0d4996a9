//! A module for handling diagnostics reported by the compiler phases.
//!
//! A phase never aborts on malformed input; it hands each diagnostic to a [`Handler`] and carries
//! on. What happens to the diagnostic afterwards is up to the handler.

use std::{
    cell::Cell,
    fmt::Display,
    sync::{
        atomic::{AtomicUsize, Ordering},
        PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard,
    },
};

/// Represents a trait responsible for handling diagnostics.
pub trait Handler<T> {
    /// Receives a diagnostic and handles it.
    fn receive(&self, error: T);
}

/// Collects every diagnostic it receives, in the order they were reported.
#[derive(Debug)]
pub struct Storage<T: Send + Sync> {
    errors: RwLock<Vec<T>>,
}

impl<T: Send + Sync> Storage<T> {
    /// Creates a new empty [`Storage`].
    #[must_use]
    pub fn new() -> Self {
        Self {
            errors: RwLock::new(Vec::new()),
        }
    }

    /// Consumes the [`Storage`] and returns the collected diagnostics.
    pub fn into_vec(self) -> Vec<T> {
        self.errors
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Locks the collected diagnostics for reading.
    pub fn as_vec(&self) -> RwLockReadGuard<Vec<T>> {
        self.errors.read().unwrap_or_else(PoisonError::into_inner)
    }

    /// Locks the collected diagnostics for writing.
    pub fn as_vec_mut(&self) -> RwLockWriteGuard<Vec<T>> {
        self.errors.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<T: Send + Sync> Default for Storage<T> {
    fn default() -> Self { Self::new() }
}

impl<T: Send + Sync, U> Handler<U> for Storage<T>
where
    U: Into<T>,
{
    fn receive(&self, error: U) { self.as_vec_mut().push(error.into()); }
}

/// Discards every diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Dummy;

impl<T> Handler<T> for Dummy {
    fn receive(&self, _error: T) {}
}

/// Counts the diagnostics it receives and otherwise drops them.
#[derive(Debug, Default)]
pub struct Counter {
    counter: AtomicUsize,
}

impl Counter {
    /// Returns the number of diagnostics received.
    #[must_use]
    pub fn count(&self) -> usize { self.counter.load(Ordering::Relaxed) }

    /// Resets the counter to zero.
    pub fn reset(&self) { self.counter.store(0, Ordering::Relaxed); }
}

impl<T> Handler<T> for Counter {
    fn receive(&self, _error: T) { self.counter.fetch_add(1, Ordering::Relaxed); }
}

/// A struct that implements [`Handler`] by printing every diagnostic to the standard error stream.
///
/// It remembers whether anything has been printed so the caller can decide to stop before handing
/// the output to the next phase.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Printer {
    printed: Cell<bool>,
}

impl Printer {
    /// Creates a new [`Printer`] that has not printed anything yet.
    #[must_use]
    pub fn new() -> Self {
        Self {
            printed: Cell::new(false),
        }
    }

    /// Returns `true` if at least one diagnostic has been printed.
    #[must_use]
    pub fn has_printed(&self) -> bool { self.printed.get() }

    /// Forgets the previously printed diagnostics, e.g. between two prompt lines.
    pub fn reset(&self) { self.printed.set(false); }
}

impl<E: Display> Handler<E> for Printer {
    fn receive(&self, error: E) {
        eprintln!("{error}");
        self.printed.set(true);
    }
}
