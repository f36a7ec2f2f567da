//! Repair for provider builds whose buffer-upload marshaling consults
//! a legacy integer type name the runtime no longer defines.
//!
//! Without the repair, invoking the buffer-sub-upload entry fails with
//! a name-not-defined error on runtimes whose numeric model only knows
//! the unified standard integer. The repair aliases the missing name
//! to the standard type through the model's declared API; it is the
//! one mutation the shim ever performs on the underlying
//! implementation, and it lives in this module alone.

use crate::provider::{Provider, STANDARD_INT};
use crate::table::SymbolTable;

pub const SYMBOL: &str = "glBufferSubData";

/// Detect and repair the missing-type defect. The binding's underlying
/// entry is reached through its origin, so one adaptation layer of
/// wrapping does not hide it. Returns whether the repair ran.
pub fn apply(core: &SymbolTable, provider: &Provider) -> bool {
    let Some(binding) = core.get(SYMBOL) else {
        return false;
    };
    let Some(entry) = binding.origin() else {
        return false;
    };
    let Some(type_name) = entry.size_type.as_deref() else {
        return false;
    };
    if provider.numeric().defines(type_name) {
        return false;
    }

    provider.numeric().define_alias(type_name, STANDARD_INT);
    true
}
