//! Caller-owned cache of bound kernels.

use std::collections::HashMap;

use crate::error::ConfigError;
use crate::kernel::Kernel;
use crate::metric::{Metric, ShapeHint};

/// Explicit cache of [`Kernel`] bindings keyed by metric, shape hint,
/// and symmetry flag.
///
/// Binding is cheap for the shipped metrics, so the cache exists for
/// repeated-call workflows that want bindings with a defined lifetime
/// rather than for raw speed. It is plain owned data: no global state,
/// no interior mutability, dropped when the caller drops it.
#[derive(Debug, Default)]
pub struct KernelCache {
    bindings: HashMap<(Metric, Option<ShapeHint>, bool), Kernel>,
}

impl KernelCache {
    /// Create an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Return a cached binding for the key, or bind and store one.
    ///
    /// # Errors
    ///
    /// | Variant | Condition |
    /// |---|---|
    /// | [`ConfigError`] | Metric parameters invalid for the hinted shape |
    pub fn get_or_bind(
        &mut self,
        metric: Metric,
        hint: Option<ShapeHint>,
        symmetric: bool,
    ) -> Result<Kernel, ConfigError> {
        let key = (metric, hint, symmetric);
        if let Some(kernel) = self.bindings.get(&key) {
            return Ok(*kernel);
        }
        let kernel = metric.bind(hint, symmetric)?;
        self.bindings.insert(key, kernel);
        Ok(kernel)
    }

    /// Return the number of cached bindings.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Return true if no bindings are cached.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Drop all cached bindings.
    pub fn clear(&mut self) {
        self.bindings.clear();
    }
}
