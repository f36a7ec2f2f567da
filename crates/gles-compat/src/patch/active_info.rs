//! Adapter for the active-attribute query.
//!
//! The raw form writes its results (length, size, type, name) through
//! caller-allocated output parameters and expects a pre-sized name
//! buffer. The target contract is a pure call: `(program, index)` in,
//! `(name, size, type)` out. The adaptation happens here, once.

use std::sync::Arc;

use crate::error::CallError;
use crate::provider::{Convention, ProviderFn};
use crate::resolve::AdapterKind;
use crate::table::{Binding, BindingKind, SymbolTable};
use crate::value::{Callable, OutCell, Value};

pub const SYMBOL: &str = "glGetActiveAttrib";

/// Capacity of the pre-allocated attribute name buffer. Longer names
/// are silently truncated; that is an accepted limitation, not an
/// error.
pub const NAME_BUFFER_CAPACITY: usize = 32;

/// Replace the raw out-parameter form with the tuple-returning
/// adapter. Entries already adapted, bound directly, or stubbed are
/// left alone. Returns whether a rewrite happened.
pub fn apply(core: &mut SymbolTable) -> bool {
    let origin = match core.get(SYMBOL) {
        Some(binding)
            if binding.kind()
                == (BindingKind::Provider {
                    convention: Convention::OutParams,
                }) =>
        {
            match binding.origin() {
                Some(entry) => entry.clone(),
                None => return false,
            }
        }
        _ => return false,
    };

    let call = adapt(&origin);
    core.insert(Binding::adapted(SYMBOL, AdapterKind::ActiveInfo, call, origin));
    true
}

fn adapt(origin: &ProviderFn) -> Callable {
    let raw = Arc::clone(&origin.call);
    Arc::new(move |args: &[Value]| {
        if args.len() != 2 {
            return Err(CallError::ArgumentCount {
                symbol: SYMBOL.to_string(),
                expected: 2,
                got: args.len(),
            });
        }

        let length = OutCell::new(0i64);
        let size = OutCell::new(0i64);
        let attrib_type = OutCell::new(0i64);
        let name = OutCell::new(vec![0u8; NAME_BUFFER_CAPACITY]);

        raw(&[
            args[0].clone(),
            args[1].clone(),
            Value::Int(NAME_BUFFER_CAPACITY as i64),
            Value::OutInt(length.clone()),
            Value::OutInt(size.clone()),
            Value::OutInt(attrib_type.clone()),
            Value::OutBytes(name.clone()),
        ])?;

        let raw_name = name.get();
        let end = raw_name
            .iter()
            .position(|byte| *byte == 0)
            .unwrap_or(raw_name.len());

        Ok(Value::Tuple(vec![
            Value::Bytes(raw_name[..end.min(NAME_BUFFER_CAPACITY)].to_vec()),
            Value::Int(size.get()),
            Value::Int(attrib_type.get()),
        ]))
    })
}
