//! Underlying-implementation model.
//!
//! The desktop GL binding the shim resolves against: two read-only
//! lookup namespaces (the main GL namespace and a secondary
//! extra-features namespace) plus the runtime numeric model its
//! marshaling code consults. The shim never mutates any of it except
//! through [`NumericModel::define_alias`], and only from the patcher.

use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

use crate::value::Callable;

/// Name of the runtime's unified standard integer type.
pub const STANDARD_INT: &str = "int";

/// Legacy wide integer type name still referenced by some provider
/// builds but absent from newer runtime numeric models.
pub const LEGACY_LONG: &str = "long";

/// Calling convention tag for a provider entry point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Convention {
    /// Returns its result directly.
    Direct,
    /// Writes results through caller-supplied output slots and needs
    /// an adapter before it honors the target contract.
    OutParams,
}

/// One entry point exported by the underlying implementation.
#[derive(Clone)]
pub struct ProviderFn {
    pub call: Callable,
    pub convention: Convention,
    /// Integer type name consulted by this entry's size-argument
    /// marshaling, when it takes one.
    pub size_type: Option<String>,
}

impl ProviderFn {
    pub fn direct(call: Callable) -> Self {
        Self {
            call,
            convention: Convention::Direct,
            size_type: None,
        }
    }

    pub fn out_params(call: Callable) -> Self {
        Self {
            call,
            convention: Convention::OutParams,
            size_type: None,
        }
    }

    pub fn with_size_type(mut self, type_name: impl Into<String>) -> Self {
        self.size_type = Some(type_name.into());
        self
    }
}

/// The runtime numeric model: integer type names the host binding's
/// marshaling layer can resolve, with alias support. The handle is
/// shared between provider callables and the patcher.
#[derive(Clone)]
pub struct NumericModel {
    types: Arc<RwLock<BTreeMap<String, String>>>,
}

impl NumericModel {
    /// Model with no types defined; callers declare their own set.
    pub fn empty() -> Self {
        Self {
            types: Arc::new(RwLock::new(BTreeMap::new())),
        }
    }

    /// Model of a runtime with only the unified standard integer type.
    pub fn standard() -> Self {
        let model = Self::empty();
        model.define_alias(STANDARD_INT, STANDARD_INT);
        model
    }

    /// Model of an older runtime that still defines the wide legacy
    /// integer type as its own type.
    pub fn with_legacy_long() -> Self {
        let model = Self::standard();
        model.define_alias(LEGACY_LONG, LEGACY_LONG);
        model
    }

    pub fn defines(&self, name: &str) -> bool {
        self.types
            .read()
            .expect("numeric model poisoned")
            .contains_key(name)
    }

    /// Resolve a type name to the type it denotes, following one alias
    /// hop.
    pub fn resolve(&self, name: &str) -> Option<String> {
        self.types
            .read()
            .expect("numeric model poisoned")
            .get(name)
            .cloned()
    }

    /// Declare that `name` denotes `target`. This is the only mutation
    /// the shim ever performs against the underlying implementation.
    pub fn define_alias(&self, name: &str, target: &str) {
        self.types
            .write()
            .expect("numeric model poisoned")
            .insert(name.to_string(), target.to_string());
    }
}

impl Default for NumericModel {
    fn default() -> Self {
        Self::standard()
    }
}

/// The underlying implementation: what the host graphics binding
/// supplies to the shim at startup.
pub struct Provider {
    primary: BTreeMap<String, ProviderFn>,
    extras: BTreeMap<String, ProviderFn>,
    numeric: NumericModel,
}

impl Provider {
    pub fn new(numeric: NumericModel) -> Self {
        Self {
            primary: BTreeMap::new(),
            extras: BTreeMap::new(),
            numeric,
        }
    }

    pub fn register_primary(&mut self, name: impl Into<String>, entry: ProviderFn) {
        self.primary.insert(name.into(), entry);
    }

    pub fn register_extra(&mut self, name: impl Into<String>, entry: ProviderFn) {
        self.extras.insert(name.into(), entry);
    }

    pub fn primary(&self, name: &str) -> Option<&ProviderFn> {
        self.primary.get(name)
    }

    pub fn extra(&self, name: &str) -> Option<&ProviderFn> {
        self.extras.get(name)
    }

    pub fn numeric(&self) -> &NumericModel {
        &self.numeric
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_model_defines_only_the_unified_int() {
        let model = NumericModel::standard();
        assert!(model.defines(STANDARD_INT));
        assert!(!model.defines(LEGACY_LONG));
    }

    #[test]
    fn alias_resolves_to_its_target() {
        let model = NumericModel::standard();
        model.define_alias(LEGACY_LONG, STANDARD_INT);
        assert_eq!(model.resolve(LEGACY_LONG), Some(STANDARD_INT.to_string()));
    }

    #[test]
    fn model_handle_is_shared_between_clones() {
        let model = NumericModel::standard();
        let handle = model.clone();
        handle.define_alias(LEGACY_LONG, STANDARD_INT);
        assert!(model.defines(LEGACY_LONG));
    }

    #[test]
    fn provider_namespaces_are_looked_up_independently() {
        use crate::value::Value;
        use std::sync::Arc;

        let mut provider = Provider::new(NumericModel::standard());
        provider.register_primary("glClear", ProviderFn::direct(Arc::new(|_| Ok(Value::None))));
        provider.register_extra(
            "glBlitFramebuffer",
            ProviderFn::direct(Arc::new(|_| Ok(Value::None))),
        );

        assert!(provider.primary("glClear").is_some());
        assert!(provider.extra("glClear").is_none());
        assert!(provider.extra("glBlitFramebuffer").is_some());
    }
}
