//! Pluggable generators for template tokens
//!
//! A [`Generator`] produces the replacement text for one `{key}` token.
//! The built-in word-pick and integer-range generators live here too, as
//! does the [`GeneratorRegistry`] that binds keys to generators. Any
//! `Send + Sync` closure with the right signature is a generator.

mod builtin;
mod registry;

pub use builtin::{BuiltinError, IntGenerator, WordGenerator};
pub use registry::GeneratorRegistry;

use rand::RngCore;
use tokio_util::sync::CancellationToken;

/// Error type generators return.
///
/// Boxed so custom generators can surface any failure they like; the
/// engine wraps it with the offending token's key and byte offset.
pub type GeneratorError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Produces the replacement text for one token.
///
/// Generators run once per token occurrence, in template order. Entropy
/// comes from [`GenerateContext::rng`]; keeping all draws on that source
/// is what makes seeded runs reproducible. Implementations doing slow or
/// blocking work should poll [`GenerateContext::is_cancelled`] and fail
/// promptly when it trips; the engine itself never interrupts a running
/// generator.
pub trait Generator: Send + Sync {
    /// Produce the text to substitute for the token.
    ///
    /// Any error aborts the whole generation pass, in strict and
    /// non-strict mode alike.
    fn generate(&self, ctx: &mut GenerateContext<'_>) -> Result<String, GeneratorError>;
}

impl<F> Generator for F
where
    F: Fn(&mut GenerateContext<'_>) -> Result<String, GeneratorError> + Send + Sync,
{
    fn generate(&self, ctx: &mut GenerateContext<'_>) -> Result<String, GeneratorError> {
        self(ctx)
    }
}

/// Per-invocation state handed to a generator.
///
/// Bundles the caller's cancellation signal with the configuration's
/// randomness source. One pass shares a single source across all of its
/// tokens, drawn from strictly left to right.
pub struct GenerateContext<'a> {
    cancel: &'a CancellationToken,
    rng: &'a mut dyn RngCore,
}

impl<'a> GenerateContext<'a> {
    pub(crate) fn new(cancel: &'a CancellationToken, rng: &'a mut dyn RngCore) -> Self {
        Self { cancel, rng }
    }

    /// The randomness source for this pass.
    pub fn rng(&mut self) -> &mut dyn RngCore {
        self.rng
    }

    /// Whether the surrounding call has been cancelled.
    pub fn is_cancelled(&self) -> bool {
        self.cancel.is_cancelled()
    }

    /// The cancellation token threaded through this call, for handing to
    /// nested operations.
    pub fn cancellation_token(&self) -> &CancellationToken {
        self.cancel
    }
}
