// Build-time settings for the bootstrap binary.
//
// Responsibilities
// - Fix where the compiled module lives and which export is its entry point.
// - Read nothing at runtime. Both values are baked in when the binary is compiled:
//   BOOTSTRAP_MODULE_ARTIFACT and BOOTSTRAP_ENTRY_POINT override the defaults.

use std::path::PathBuf;

use crate::adapters::wasm::wasm_module::DEFAULT_ENTRY_POINT;

/// Where `wasm-pack build --target web` writes the frontend module.
pub const DEFAULT_MODULE_ARTIFACT: &str = "frontend/pkg/frontend_bg.wasm";

const MODULE_ARTIFACT: &str = match option_env!("BOOTSTRAP_MODULE_ARTIFACT") {
    Some(path) => path,
    None => DEFAULT_MODULE_ARTIFACT,
};

const ENTRY_POINT: &str = match option_env!("BOOTSTRAP_ENTRY_POINT") {
    Some(name) => name,
    None => DEFAULT_ENTRY_POINT,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BootSettings {
    pub module_artifact: PathBuf,
    pub entry_point: String,
}

impl BootSettings {
    pub fn from_build() -> Self {
        Self {
            module_artifact: PathBuf::from(MODULE_ARTIFACT),
            entry_point: ENTRY_POINT.to_string(),
        }
    }
}
