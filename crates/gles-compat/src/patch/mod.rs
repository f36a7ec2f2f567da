//! Compatibility Patcher: post-injection rewrites for entries whose
//! native signature or marshaling does not honor the target contract.
//!
//! Runs once, strictly after both injection passes. Each fix detects
//! the exact defect it repairs and skips silently otherwise, so
//! reapplying the patcher is a no-op.

mod active_info;
mod legacy_int;

use crate::provider::Provider;
use crate::table::SymbolTable;

/// Apply all fixes to an injected core namespace. Returns the names of
/// entries actually rewritten or repaired.
pub fn apply(core: &mut SymbolTable, provider: &Provider) -> Vec<String> {
    let mut patched = Vec::new();
    if active_info::apply(core) {
        patched.push(active_info::SYMBOL.to_string());
    }
    if legacy_int::apply(core, provider) {
        patched.push(legacy_int::SYMBOL.to_string());
    }
    patched
}

pub use active_info::NAME_BUFFER_CAPACITY;
