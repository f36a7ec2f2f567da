//! Target namespaces: the symbol tables exposed to application code.
//!
//! Tables are owned values returned from initialization and passed to
//! consumers by reference; there is no ambient global state. Entries
//! are written during injection, individually replaced by the patcher,
//! and never removed.

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::error::{CallError, CallResult};
use crate::provider::{Convention, ProviderFn};
use crate::resolve::{AdapterKind, unavailable_stub};
use crate::value::{Callable, Value};

/// How a binding came to be in the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BindingKind {
    /// The underlying implementation's own callable, installed as-is.
    Provider { convention: Convention },
    /// Rewritten by the compatibility patcher.
    Adapted { fix: AdapterKind },
    /// Unresolvable; fails on invocation.
    Stub,
}

/// One installed entry: a symbol name bound to a callable.
#[derive(Clone)]
pub struct Binding {
    name: String,
    kind: BindingKind,
    call: Callable,
    origin: Option<ProviderFn>,
}

impl Binding {
    /// Bind the underlying callable directly, preserving its identity.
    pub fn provider(name: impl Into<String>, entry: &ProviderFn) -> Self {
        Self {
            name: name.into(),
            kind: BindingKind::Provider {
                convention: entry.convention,
            },
            call: Arc::clone(&entry.call),
            origin: Some(entry.clone()),
        }
    }

    pub fn stub(name: impl Into<String>) -> Self {
        let name = name.into();
        let call = unavailable_stub(&name);
        Self {
            name,
            kind: BindingKind::Stub,
            call,
            origin: None,
        }
    }

    pub fn adapted(
        name: impl Into<String>,
        fix: AdapterKind,
        call: Callable,
        origin: ProviderFn,
    ) -> Self {
        Self {
            name: name.into(),
            kind: BindingKind::Adapted { fix },
            call,
            origin: Some(origin),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> BindingKind {
        self.kind
    }

    pub fn callable(&self) -> &Callable {
        &self.call
    }

    /// The underlying provider entry, reachable through one adaptation
    /// layer when the patcher has rewritten the callable.
    pub fn origin(&self) -> Option<&ProviderFn> {
        self.origin.as_ref()
    }

    pub fn is_stub(&self) -> bool {
        matches!(self.kind, BindingKind::Stub)
    }

    pub fn invoke(&self, args: &[Value]) -> CallResult {
        (self.call)(args)
    }
}

/// A populated target namespace.
#[derive(Default)]
pub struct SymbolTable {
    entries: BTreeMap<String, Binding>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, binding: Binding) {
        self.entries.insert(binding.name.clone(), binding);
    }

    pub fn get(&self, name: &str) -> Option<&Binding> {
        self.entries.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn bindings(&self) -> impl Iterator<Item = &Binding> {
        self.entries.values()
    }

    /// Invoke a bound entry by name.
    pub fn call(&self, name: &str, args: &[Value]) -> CallResult {
        match self.entries.get(name) {
            Some(binding) => binding.invoke(args),
            None => Err(CallError::NotBound {
                symbol: name.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn noop_entry() -> ProviderFn {
        ProviderFn::direct(Arc::new(|_| Ok(Value::None)))
    }

    #[test]
    fn provider_binding_preserves_callable_identity() {
        let entry = noop_entry();
        let binding = Binding::provider("glClear", &entry);
        assert!(Arc::ptr_eq(binding.callable(), &entry.call));
        assert_eq!(
            binding.kind(),
            BindingKind::Provider {
                convention: Convention::Direct
            }
        );
    }

    #[test]
    fn stub_invocation_fails_with_the_symbol_name() {
        let mut table = SymbolTable::new();
        table.insert(Binding::stub("glTotallyFakeFunction"));

        let err = table
            .call("glTotallyFakeFunction", &[])
            .expect_err("stub must fail");
        assert_eq!(
            err,
            CallError::Unavailable("glTotallyFakeFunction".to_string())
        );
    }

    #[test]
    fn calling_an_uninjected_name_is_distinct_from_a_stub() {
        let table = SymbolTable::new();
        let err = table.call("glClear", &[]).expect_err("nothing bound");
        assert_eq!(
            err,
            CallError::NotBound {
                symbol: "glClear".to_string()
            }
        );
    }

    #[test]
    fn insert_replaces_an_existing_binding_in_place() {
        let mut table = SymbolTable::new();
        table.insert(Binding::stub("glClear"));
        table.insert(Binding::provider("glClear", &noop_entry()));

        assert_eq!(table.len(), 1);
        let binding = table.get("glClear").expect("still bound");
        assert!(!binding.is_stub());
    }
}
