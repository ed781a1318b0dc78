//! Provider contract and a minimal layered configuration builder.
//!
//! Responsibilities:
//! - Define `ConfigurationProvider`: anything that produces a flat mapping.
//! - Bind a `SecretsSource` to a diagnostics sink (`SecretsProvider`).
//! - Merge providers in registration order (`ConfigurationBuilder`).
//!
//! Does NOT handle:
//! - Reload triggers or change notification. Hosts call `build()` again.
//!
//! Invariants:
//! - Providers registered later override earlier ones on key collision.
//! - Registration takes an owned `SecretsSource`, so a missing source cannot
//!   reach the loader.

use std::fmt;
use std::sync::Arc;

use crate::loader::diagnostics::{Diagnostics, TracingDiagnostics};
use crate::loader::load_with;
use crate::mapping::ConfigurationMapping;
use crate::source::SecretsSource;

/// A component that produces a flat key/value mapping.
pub trait ConfigurationProvider: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &str;

    /// Produce the provider's current mapping.
    fn load(&self) -> ConfigurationMapping;
}

/// Provider backed by a secrets directory.
#[derive(Clone)]
pub struct SecretsProvider {
    source: SecretsSource,
    diagnostics: Arc<dyn Diagnostics>,
}

impl SecretsProvider {
    /// Create a provider that logs through `tracing`.
    pub fn new(source: SecretsSource) -> Self {
        Self {
            source,
            diagnostics: Arc::new(TracingDiagnostics),
        }
    }

    /// Replace the diagnostics sink.
    pub fn with_diagnostics(mut self, diagnostics: Arc<dyn Diagnostics>) -> Self {
        self.diagnostics = diagnostics;
        self
    }

    /// The source this provider reads.
    pub fn source(&self) -> &SecretsSource {
        &self.source
    }
}

impl fmt::Debug for SecretsProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecretsProvider")
            .field("source", &self.source)
            .finish_non_exhaustive()
    }
}

impl ConfigurationProvider for SecretsProvider {
    fn name(&self) -> &str {
        "docker-secrets"
    }

    fn load(&self) -> ConfigurationMapping {
        load_with(&self.source, self.diagnostics.as_ref())
    }
}

/// Provider holding a fixed mapping.
#[derive(Debug, Clone)]
pub struct MemoryProvider {
    name: String,
    mapping: ConfigurationMapping,
}

impl MemoryProvider {
    /// Create a provider that always returns `mapping`.
    pub fn new(name: impl Into<String>, mapping: ConfigurationMapping) -> Self {
        Self {
            name: name.into(),
            mapping,
        }
    }
}

impl ConfigurationProvider for MemoryProvider {
    fn name(&self) -> &str {
        &self.name
    }

    fn load(&self) -> ConfigurationMapping {
        self.mapping.clone()
    }
}

/// Ordered list of providers merged into one mapping.
#[derive(Default)]
pub struct ConfigurationBuilder {
    providers: Vec<Box<dyn ConfigurationProvider>>,
}

impl ConfigurationBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a provider after all existing ones.
    pub fn add(mut self, provider: impl ConfigurationProvider + 'static) -> Self {
        self.providers.push(Box::new(provider));
        self
    }

    /// Register the Docker secrets provider for `source`.
    pub fn add_docker_secrets(self, source: SecretsSource) -> Self {
        self.add(SecretsProvider::new(source))
    }

    /// Number of registered providers.
    pub fn len(&self) -> usize {
        self.providers.len()
    }

    /// Whether no providers are registered.
    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }

    /// Load every provider and merge the results in registration order.
    pub fn build(&self) -> ConfigurationMapping {
        let mut merged = ConfigurationMapping::new();
        for provider in &self.providers {
            let mapping = provider.load();
            tracing::debug!(
                provider = provider.name(),
                entries = mapping.len(),
                "Loaded configuration provider"
            );
            merged.merge(mapping);
        }
        merged
    }
}
