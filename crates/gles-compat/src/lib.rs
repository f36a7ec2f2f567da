//! Capability resolution and compatibility shim for the GL ES 2.0
//! surface.
//!
//! This crate provides:
//! - **Symbol resolution** against an underlying desktop GL binding,
//!   trying the primary namespace, the extra-features namespace, and
//!   known naming variants in order
//! - **Namespace injection** binding every catalog name to a working
//!   callable or a stub that fails with the symbol name
//! - **Compatibility patching** for entries whose native signature or
//!   marshaling does not honor the target contract
//! - **Provider manifests** (JSON) describing a binding's surface so
//!   the pipeline can be audited without a live GL context

pub mod config;
pub mod error;
pub mod inject;
pub mod manifest;
pub mod patch;
pub mod provider;
pub mod resolve;
pub mod table;
pub mod value;

use serde::{Deserialize, Serialize};

pub use config::ShimConfig;
pub use error::{CallError, CallResult};
pub use inject::{InjectReport, inject};
pub use manifest::{ManifestError, ProviderManifest};
pub use provider::{Convention, LEGACY_LONG, NumericModel, Provider, ProviderFn, STANDARD_INT};
pub use resolve::{AdapterKind, Resolved, resolve, unavailable_stub};
pub use table::{Binding, BindingKind, SymbolTable};
pub use value::{Callable, OutCell, Value};

/// The two populated target namespaces plus the initialization record.
/// Constructed once at startup; read-only from then on.
pub struct Namespaces {
    pub core: SymbolTable,
    pub ext: SymbolTable,
    pub report: InitReport,
}

/// Combined record of both injection passes and the applied patches.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InitReport {
    pub core: InjectReport,
    pub ext: InjectReport,
    /// Entries the compatibility patcher rewrote or repaired.
    pub patched: Vec<String>,
}

/// Resolve the full GL ES 2.0 surface against `provider` and return
/// the populated namespaces. One injection pass per catalog list, then
/// the patcher rewrites entries whose native shape does not honor the
/// target contract. Single-shot: callers run this once at startup and
/// treat the result as read-only.
pub fn initialize(provider: &Provider, config: &ShimConfig) -> Namespaces {
    let (core, core_report) = inject::inject(provider, gles_catalog::CORE_FUNCTIONS, config);
    let (ext, ext_report) = inject::inject(provider, gles_catalog::EXT_FUNCTIONS, config);

    let mut namespaces = Namespaces {
        core,
        ext,
        report: InitReport {
            core: core_report,
            ext: ext_report,
            patched: Vec::new(),
        },
    };
    namespaces.report.patched = patch::apply(&mut namespaces.core, provider);
    namespaces
}
