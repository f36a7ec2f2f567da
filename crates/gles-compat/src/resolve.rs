//! Symbol Resolver: ordered lookup strategies over the underlying
//! implementation.

use std::sync::Arc;

use crate::error::CallError;
use crate::provider::{Convention, Provider, ProviderFn};
use crate::value::Callable;

/// Suffix marking the float variant of an entry point. Some underlying
/// implementations only export the unsuffixed form, e.g. a depth-range
/// call without the trailing `f`.
const FLOAT_VARIANT_SUFFIX: char = 'f';

/// Which compatibility adapter a resolved entry still needs before it
/// honors the target contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdapterKind {
    /// Raw out-parameter query that must be adapted to return a
    /// `(name, size, type)` tuple.
    ActiveInfo,
}

/// Resolution outcome for one symbol name.
#[derive(Clone)]
pub enum Resolved<'p> {
    /// Install the underlying callable as-is.
    Direct(&'p ProviderFn),
    /// Install the raw callable now; the patcher replaces it after
    /// injection completes.
    NeedsAdapter(&'p ProviderFn, AdapterKind),
}

type Lookup = for<'p> fn(&'p Provider, &str) -> Option<&'p ProviderFn>;

/// Lookup strategies in resolution order; first match wins.
const STRATEGIES: &[Lookup] = &[lookup_primary, lookup_extras, lookup_float_variant];

/// Find the best matching callable for `name`. Returns `None` when the
/// name is absent under every strategy, in which case the injector
/// installs a stub; resolution itself never fails.
pub fn resolve<'p>(provider: &'p Provider, name: &str) -> Option<Resolved<'p>> {
    let entry = STRATEGIES
        .iter()
        .find_map(|lookup| lookup(provider, name))?;
    Some(classify(entry))
}

fn classify(entry: &ProviderFn) -> Resolved<'_> {
    match entry.convention {
        Convention::OutParams => Resolved::NeedsAdapter(entry, AdapterKind::ActiveInfo),
        Convention::Direct => Resolved::Direct(entry),
    }
}

fn lookup_primary<'p>(provider: &'p Provider, name: &str) -> Option<&'p ProviderFn> {
    provider.primary(name)
}

fn lookup_extras<'p>(provider: &'p Provider, name: &str) -> Option<&'p ProviderFn> {
    provider.extra(name)
}

/// Retry the primary namespace with the float-variant suffix stripped.
fn lookup_float_variant<'p>(provider: &'p Provider, name: &str) -> Option<&'p ProviderFn> {
    let stripped = name.strip_suffix(FLOAT_VARIANT_SUFFIX)?;
    provider.primary(stripped)
}

/// Stand-in for symbols absent from the underlying implementation.
/// Callable with any arguments; every invocation reports the missing
/// name.
pub fn unavailable_stub(name: &str) -> Callable {
    let name = name.to_string();
    Arc::new(move |_args| Err(CallError::Unavailable(name.clone())))
}
