//! The feature directory: registered names to feature factories.

use std::collections::HashMap;

use quadrille_core::logging::targets;

use crate::error::{GridError, Result};

use super::chain::FeatureChain;
use super::feature::Feature;

/// Creates a fresh feature instance.
pub type FeatureFactory = Box<dyn Fn() -> Box<dyn Feature> + Send + Sync>;

/// Registry of feature constructors, keyed by name.
///
/// A grid's chain is declared as a list of names and built by looking
/// each one up here. Chain building is all-or-nothing: one unknown name
/// fails the whole build, before any feature is constructed into a chain,
/// so a misconfigured grid never runs with a partial pipeline.
///
/// # Example
///
/// ```
/// use quadrille::input::{Feature, FeatureDirectory};
///
/// struct RowSelection;
///
/// impl Feature for RowSelection {
///     fn name(&self) -> &'static str {
///         "row-selection"
///     }
/// }
///
/// let mut directory = FeatureDirectory::new();
/// directory.register("row-selection", || Box::new(RowSelection));
///
/// let chain = directory.build_chain(&["row-selection".into()]).unwrap();
/// assert_eq!(chain.names(), ["row-selection"]);
///
/// assert!(directory.build_chain(&["no-such-feature".into()]).is_err());
/// ```
#[derive(Default)]
pub struct FeatureDirectory {
    factories: HashMap<String, FeatureFactory>,
}

impl FeatureDirectory {
    /// An empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a factory under `name`. Re-registering a name replaces
    /// the previous factory.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        factory: impl Fn() -> Box<dyn Feature> + Send + Sync + 'static,
    ) {
        let name = name.into();
        if self
            .factories
            .insert(name.clone(), Box::new(factory))
            .is_some()
        {
            tracing::debug!(target: targets::INPUT, name = %name, "feature factory replaced");
        }
    }

    /// True if `name` is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.factories.contains_key(name)
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.factories.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Builds a chain from an ordered list of feature names.
    ///
    /// Each listed occurrence becomes a fresh instance, so one name may
    /// appear more than once. The first unknown name aborts the build.
    pub fn build_chain(&self, names: &[String]) -> Result<FeatureChain> {
        let mut features = Vec::with_capacity(names.len());
        for name in names {
            let factory = self
                .factories
                .get(name)
                .ok_or_else(|| GridError::unknown_feature(name.as_str()))?;
            features.push(factory());
        }
        tracing::debug!(target: targets::INPUT, chain = ?names, "feature chain built");
        Ok(FeatureChain::new(features))
    }
}

impl std::fmt::Debug for FeatureDirectory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FeatureDirectory")
            .field("names", &self.names())
            .finish()
    }
}
