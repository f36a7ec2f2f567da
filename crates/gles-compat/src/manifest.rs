//! JSON provider manifests.
//!
//! A manifest describes the surface an underlying implementation
//! exports: which names each namespace defines, which integer types
//! the runtime numeric model knows, and which entries come in shapes
//! that need patching. Building a provider from a manifest yields
//! synthetic callables that honor those shapes, so the full
//! inject-and-patch pipeline can run against a described binding
//! without a live GL context.

use std::fs;
use std::io;
use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::error::CallError;
use crate::provider::{LEGACY_LONG, NumericModel, Provider, ProviderFn, STANDARD_INT};
use crate::value::{Callable, Value};

#[derive(Error, Debug)]
pub enum ManifestError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Description of an underlying implementation's exported surface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderManifest {
    /// Names exported by the main GL namespace.
    pub primary: Vec<String>,
    /// Names exported by the secondary extra-features namespace.
    #[serde(default)]
    pub extras: Vec<String>,
    /// Integer type names the runtime numeric model defines.
    #[serde(default = "default_numeric_types")]
    pub numeric_types: Vec<String>,
    /// Entries exported in the raw out-parameter query form.
    #[serde(default)]
    pub out_param_queries: Vec<String>,
    /// Entries whose size marshaling consults the legacy integer type.
    #[serde(default)]
    pub legacy_size_symbols: Vec<String>,
}

fn default_numeric_types() -> Vec<String> {
    vec![STANDARD_INT.to_string()]
}

impl Default for ProviderManifest {
    fn default() -> Self {
        Self {
            primary: Vec::new(),
            extras: Vec::new(),
            numeric_types: default_numeric_types(),
            out_param_queries: Vec::new(),
            legacy_size_symbols: Vec::new(),
        }
    }
}

impl ProviderManifest {
    pub fn parse_file(path: impl AsRef<Path>) -> Result<Self, ManifestError> {
        let bytes = fs::read(path)?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    pub fn parse_str(raw: &str) -> Result<Self, ManifestError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Build a synthetic provider honoring the described surface.
    pub fn build_provider(&self) -> Provider {
        let numeric = NumericModel::empty();
        for name in &self.numeric_types {
            numeric.define_alias(name, name);
        }

        let mut provider = Provider::new(numeric.clone());
        for name in &self.primary {
            let entry = self.entry_for(name, &numeric);
            provider.register_primary(name.clone(), entry);
        }
        for name in &self.extras {
            let entry = self.entry_for(name, &numeric);
            provider.register_extra(name.clone(), entry);
        }
        provider
    }

    fn entry_for(&self, name: &str, numeric: &NumericModel) -> ProviderFn {
        if self.out_param_queries.iter().any(|n| n == name) {
            ProviderFn::out_params(out_param_query(name))
        } else if self.legacy_size_symbols.iter().any(|n| n == name) {
            ProviderFn::direct(sized_upload(name, LEGACY_LONG, numeric))
                .with_size_type(LEGACY_LONG)
        } else {
            ProviderFn::direct(echo())
        }
    }
}

/// Plain entry: returns its arguments so calls stay observable.
fn echo() -> Callable {
    Arc::new(|args| Ok(Value::Tuple(args.to_vec())))
}

/// Raw query form: `(program, index, bufsize, &length, &size, &type,
/// name_buf)`, writing a synthetic attribute record through the output
/// slots and respecting the buffer capacity.
fn out_param_query(name: &str) -> Callable {
    let symbol = name.to_string();
    Arc::new(move |args: &[Value]| {
        if args.len() != 7 {
            return Err(CallError::ArgumentCount {
                symbol: symbol.clone(),
                expected: 7,
                got: args.len(),
            });
        }
        let index = args[1].as_int(&symbol, 1)?;
        let bufsize = args[2].as_int(&symbol, 2)? as usize;
        let length = args[3].as_out_int(&symbol, 3)?;
        let size = args[4].as_out_int(&symbol, 4)?;
        let attrib_type = args[5].as_out_int(&symbol, 5)?;
        let name_buf = args[6].as_out_bytes(&symbol, 6)?;

        let mut written = format!("attribute_{index}").into_bytes();
        written.truncate(bufsize.saturating_sub(1));
        length.set(written.len() as i64);
        size.set(1);
        attrib_type.set(4);
        written.push(0);
        name_buf.set(written);
        Ok(Value::None)
    })
}

/// Upload form whose size marshaling resolves a named integer type in
/// the runtime numeric model before accepting the argument.
fn sized_upload(name: &str, size_type: &str, numeric: &NumericModel) -> Callable {
    let symbol = name.to_string();
    let size_type = size_type.to_string();
    let numeric = numeric.clone();
    Arc::new(move |args: &[Value]| {
        if args.len() != 4 {
            return Err(CallError::ArgumentCount {
                symbol: symbol.clone(),
                expected: 4,
                got: args.len(),
            });
        }
        if numeric.resolve(&size_type).is_none() {
            return Err(CallError::UnknownTypeName {
                symbol: symbol.clone(),
                type_name: size_type.clone(),
            });
        }
        let size = args[2].as_int(&symbol, 2)?;
        Ok(Value::Int(size))
    })
}
