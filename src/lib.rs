//! hrid - human-readable identifier generation
//!
//! This library fills `{key}` tokens in a template with values from
//! pluggable generators: random words from embedded adjective/noun/verb
//! lists, random integers from inclusive ranges, or anything a caller
//! registers.
//!
//! # Example
//!
//! ```rust
//! use hrid::{generate, GenerateConfig};
//!
//! let mut config = GenerateConfig::new().with_default_generators();
//!
//! let id = generate("{adj}-{noun}-{3-digit}", &mut config).unwrap();
//! assert_eq!(id.split('-').count(), 3);
//! ```

pub mod error;
pub mod generator;
pub mod words;

mod scanner;

pub use error::GenerateError;
pub use generator::{
    BuiltinError, GenerateContext, Generator, GeneratorError, GeneratorRegistry, IntGenerator,
    WordGenerator,
};
pub use words::WordList;

// Re-export the cancellation token so callers need no direct tokio-util
// dependency
pub use tokio_util::sync::CancellationToken;

use std::time::{SystemTime, UNIX_EPOCH};

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, trace};

use scanner::Fragment;

/// Configuration for generation passes
///
/// Built by chaining `with_*` options; later options override earlier
/// ones, except [`with_default_generators`](Self::with_default_generators),
/// which never overwrites a key that is already bound.
#[derive(Debug)]
pub struct GenerateConfig {
    registry: GeneratorRegistry,
    strict: bool,
    rng: ChaCha8Rng,
}

impl Default for GenerateConfig {
    fn default() -> Self {
        Self {
            registry: GeneratorRegistry::new(),
            strict: true,
            rng: ChaCha8Rng::seed_from_u64(clock_seed()),
        }
    }
}

impl GenerateConfig {
    /// Create a new configuration: no generators bound, strict mode on,
    /// randomness seeded from the clock.
    pub fn new() -> Self {
        Self::default()
    }

    /// Install the built-in generators for every key not already bound.
    ///
    /// The stock set binds `adj`, `noun`, and `verb` to the embedded word
    /// lists and `digit`, `2-digit`, and `3-digit` to integer ranges.
    pub fn with_default_generators(mut self) -> Self {
        self.registry.merge_defaults();
        self
    }

    /// Bind `key` to `generator`, replacing any existing binding.
    pub fn with_generator(
        mut self,
        key: impl Into<String>,
        generator: impl Generator + 'static,
    ) -> Self {
        self.registry.register(key, generator);
        self
    }

    /// Replace the whole registry.
    pub fn with_registry(mut self, registry: GeneratorRegistry) -> Self {
        self.registry = registry;
        self
    }

    /// Replace the randomness source with one seeded from `seed`.
    ///
    /// With a fixed seed, template, and generator set, output is
    /// byte-identical on every run.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = ChaCha8Rng::seed_from_u64(seed);
        self
    }

    /// Enable or disable strict token resolution. Strict is the default.
    ///
    /// In non-strict mode unknown and unclosed tokens pass through as
    /// literal text instead of failing; generator failures stay fatal
    /// either way.
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// The registry tokens are resolved against.
    pub fn registry(&self) -> &GeneratorRegistry {
        &self.registry
    }

    /// Whether unresolved tokens fail generation.
    pub fn strict(&self) -> bool {
        self.strict
    }
}

/// Low 64 bits of the nanosecond wall clock, for default seeding.
fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_nanos() as u64)
        .unwrap_or(0)
}

/// Generate an identifier from `template` with default cancellation
///
/// This is the main entry point for the library. It is equivalent to
/// [`generate_with_cancel`] with a fresh token nobody cancels.
///
/// # Example
///
/// ```rust
/// use hrid::{generate, GenerateConfig};
///
/// let mut config = GenerateConfig::new()
///     .with_default_generators()
///     .with_seed(42);
///
/// let first = generate("{adj}-{noun}", &mut config).unwrap();
/// assert!(first.contains('-'));
/// ```
pub fn generate(template: &str, config: &mut GenerateConfig) -> Result<String, GenerateError> {
    generate_with_cancel(&CancellationToken::new(), template, config)
}

/// Generate an identifier from `template`, threading `cancel` to every
/// generator invocation
///
/// The template is resolved in one left-to-right pass: literal text is
/// copied verbatim and each complete `{key}` token is replaced by the
/// output of the generator bound to `key`. Unknown keys and a trailing
/// unclosed token fail in strict mode and pass through as literal text
/// otherwise; a failing generator aborts the pass in both modes, and an
/// error never comes with partial output.
///
/// The engine itself never acts on `cancel` between tokens; only
/// generators observe it, via [`GenerateContext::is_cancelled`].
///
/// # Example
///
/// ```rust
/// use hrid::{generate_with_cancel, CancellationToken, GenerateConfig};
///
/// let cancel = CancellationToken::new();
/// let mut config = GenerateConfig::new().with_default_generators();
///
/// let id = generate_with_cancel(&cancel, "{verb}-{2-digit}", &mut config).unwrap();
/// assert!(!id.is_empty());
/// ```
pub fn generate_with_cancel(
    cancel: &CancellationToken,
    template: &str,
    config: &mut GenerateConfig,
) -> Result<String, GenerateError> {
    let strict = config.strict;
    let mut output = String::with_capacity(template.len());
    let mut resolved = 0usize;

    for fragment in scanner::scan(template) {
        match fragment {
            Fragment::Literal(text) => output.push_str(text),
            Fragment::Token { key, start } => match config.registry.get(key) {
                Some(generator) => {
                    trace!(key, offset = start, "dispatching generator");
                    let mut ctx = GenerateContext::new(cancel, &mut config.rng);
                    let value = generator.generate(&mut ctx).map_err(|source| {
                        GenerateError::GeneratorFailure {
                            key: key.to_string(),
                            offset: start,
                            source,
                        }
                    })?;
                    output.push_str(&value);
                    resolved += 1;
                }
                None if strict => {
                    return Err(GenerateError::UnknownGenerator {
                        key: key.to_string(),
                        offset: start,
                    });
                }
                None => {
                    trace!(key, offset = start, "unknown key kept as literal text");
                    output.push('{');
                    output.push_str(key);
                    output.push('}');
                }
            },
            Fragment::Unclosed { key, start } => {
                if strict {
                    return Err(GenerateError::UnclosedToken { offset: start });
                }
                // Passed through exactly as written: no closing brace is
                // invented for a token the template never closed.
                trace!(offset = start, "unclosed token kept as literal text");
                output.push('{');
                output.push_str(key);
            }
        }
    }

    debug!(
        template_len = template.len(),
        resolved, strict, "template resolved"
    );
    Ok(output)
}
