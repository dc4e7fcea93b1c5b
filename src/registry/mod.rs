//! Name-keyed codec registry.
//!
//! One registry instance exists per capability family (ingestion, emission).
//! Registries are plain values built at the composition root and passed by
//! reference to whatever resolves codec names; there is no process-global
//! registration state.

use std::collections::HashMap;

type Producer<T> = Box<dyn Fn() -> Box<T> + Send + Sync>;

/// A registry mapping a symbolic codec name to a zero-argument constructor
/// for some capability type `T`.
pub struct CodecRegistry<T: ?Sized> {
    producers: HashMap<String, Producer<T>>,
}

impl<T: ?Sized> Default for CodecRegistry<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ?Sized> CodecRegistry<T> {
    pub fn new() -> Self {
        Self {
            producers: HashMap::new(),
        }
    }

    /// Associate `name` with `producer`.
    ///
    /// Always succeeds; registering a name a second time silently replaces
    /// the previous producer. The `bool` return exists for call sites that
    /// register as part of a larger setup expression.
    pub fn register<F>(&mut self, name: &str, producer: F) -> bool
    where
        F: Fn() -> Box<T> + Send + Sync + 'static,
    {
        self.producers.insert(name.to_string(), Box::new(producer));
        true
    }

    /// Produce a fresh instance of the codec registered under `name`, or
    /// `None` if the name is unknown. Each call yields an independently
    /// owned instance.
    pub fn produce(&self, name: &str) -> Option<Box<T>> {
        self.producers.get(name).map(|producer| producer())
    }

    /// All registered names, sorted for stable usage output.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.producers.keys().cloned().collect();
        names.sort();
        names
    }

    pub fn len(&self) -> usize {
        self.producers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.producers.is_empty()
    }
}
