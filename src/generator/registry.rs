//! Registry binding token keys to generators

use std::collections::HashMap;
use std::fmt;

use super::{builtin, Generator};

/// Registry of generators keyed by token text.
///
/// Explicit registration always overwrites. Installing the default set
/// only fills keys that are still absent, so callers can pin their own
/// generator for one key and take the stock set for the rest.
#[derive(Default)]
pub struct GeneratorRegistry {
    generators: HashMap<String, Box<dyn Generator>>,
}

impl GeneratorRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with every built-in generator installed.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.merge_defaults();
        registry
    }

    /// Bind `key` to `generator`, replacing any existing binding.
    pub fn register(&mut self, key: impl Into<String>, generator: impl Generator + 'static) {
        self.generators.insert(key.into(), Box::new(generator));
    }

    /// Install the built-in generators for keys not already bound.
    /// Existing bindings win.
    pub fn merge_defaults(&mut self) {
        for (key, generator) in builtin::defaults() {
            self.generators.entry(key.to_string()).or_insert(generator);
        }
    }

    /// Look up the generator bound to `key`.
    pub fn get(&self, key: &str) -> Option<&dyn Generator> {
        self.generators.get(key).map(|generator| generator.as_ref())
    }

    /// Whether `key` has a binding.
    pub fn contains(&self, key: &str) -> bool {
        self.generators.contains_key(key)
    }

    /// Iterate over the bound keys, in arbitrary order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.generators.keys().map(String::as_str)
    }

    /// Number of bound keys.
    pub fn len(&self) -> usize {
        self.generators.len()
    }

    /// Whether the registry holds no bindings.
    pub fn is_empty(&self) -> bool {
        self.generators.is_empty()
    }
}

impl fmt::Debug for GeneratorRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut keys: Vec<&str> = self.names().collect();
        keys.sort_unstable();
        f.debug_struct("GeneratorRegistry")
            .field("keys", &keys)
            .finish()
    }
}
