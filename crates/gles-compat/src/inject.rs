//! Namespace Injector: drives the resolver over a symbol list and
//! populates one target namespace.

use serde::{Deserialize, Serialize};

use crate::config::ShimConfig;
use crate::provider::Provider;
use crate::resolve::{Resolved, resolve};
use crate::table::{Binding, SymbolTable};

/// Record of one injection pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InjectReport {
    /// Symbols bound to a working underlying callable.
    pub bound: usize,
    /// Symbols that degraded to stubs, in list order.
    pub stubbed: Vec<String>,
}

/// Populate a fresh table with every name in `names`. Unresolved
/// symbols degrade to stubs and emit one diagnostic line each (gated
/// by `config.show_warnings`); injection itself cannot fail, and every
/// name ends up bound.
pub fn inject(
    provider: &Provider,
    names: &[&str],
    config: &ShimConfig,
) -> (SymbolTable, InjectReport) {
    let mut table = SymbolTable::new();
    let mut report = InjectReport::default();

    for &name in names {
        match resolve(provider, name) {
            Some(Resolved::Direct(entry) | Resolved::NeedsAdapter(entry, _)) => {
                table.insert(Binding::provider(name, entry));
                report.bound += 1;
            }
            None => {
                if config.show_warnings {
                    eprintln!("warning: {name} not available");
                }
                table.insert(Binding::stub(name));
                report.stubbed.push(name.to_string());
            }
        }
    }

    (table, report)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::error::CallError;
    use crate::provider::{NumericModel, ProviderFn};
    use crate::value::Value;

    fn provider_with_primary(names: &[&str]) -> Provider {
        let mut provider = Provider::new(NumericModel::standard());
        for name in names {
            provider.register_primary(*name, ProviderFn::direct(Arc::new(|_| Ok(Value::None))));
        }
        provider
    }

    #[test]
    fn every_listed_name_ends_up_bound() {
        let provider = provider_with_primary(&["glClear"]);
        let names = ["glClear", "glTotallyFakeFunction"];
        let (table, report) = inject(&provider, &names, &ShimConfig::quiet());

        for name in names {
            assert!(table.contains(name), "{name} must be bound");
        }
        assert_eq!(report.bound, 1);
        assert_eq!(report.stubbed, vec!["glTotallyFakeFunction".to_string()]);
    }

    #[test]
    fn bound_entries_keep_the_underlying_callable() {
        let provider = provider_with_primary(&["glClear"]);
        let (table, _) = inject(&provider, &["glClear"], &ShimConfig::quiet());

        let binding = table.get("glClear").expect("bound");
        assert!(Arc::ptr_eq(
            binding.callable(),
            &provider.primary("glClear").expect("registered").call
        ));
    }

    #[test]
    fn suppressed_warnings_still_reach_the_report() {
        let provider = provider_with_primary(&[]);
        let (_, report) = inject(&provider, &["glTotallyFakeFunction"], &ShimConfig::quiet());
        assert_eq!(report.stubbed, vec!["glTotallyFakeFunction".to_string()]);
    }

    #[test]
    fn reinjection_yields_identical_bindings() {
        let provider = provider_with_primary(&["glClear"]);
        let names = ["glClear", "glTotallyFakeFunction"];
        let (first, _) = inject(&provider, &names, &ShimConfig::quiet());
        let (second, _) = inject(&provider, &names, &ShimConfig::quiet());

        // Real bindings are the same callable.
        assert!(Arc::ptr_eq(
            first.get("glClear").expect("bound").callable(),
            second.get("glClear").expect("bound").callable(),
        ));

        // Stubs are not interned, but they fail identically.
        let err_a = first
            .call("glTotallyFakeFunction", &[])
            .expect_err("stub must fail");
        let err_b = second
            .call("glTotallyFakeFunction", &[])
            .expect_err("stub must fail");
        assert_eq!(err_a, err_b);
        assert!(matches!(err_a, CallError::Unavailable(_)));
    }
}
