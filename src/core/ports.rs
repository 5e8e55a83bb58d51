// Ports define what the bootstrapper needs from the outside world, without implementing it.
//
// Purpose
// - Describe the artifact fetch, the module initialization capability and the
//   module handle as traits.
//
// Responsibilities
// - Keep the bootstrapper independent of any wasm engine or storage by coding against traits.
// - Encode the hand-off rules in the signatures: `init` consumes the module and is the only
//   way to obtain a handle, and `invoke` consumes the handle.
//
// Boundaries
// - No concrete input or output here. Adapters implement these traits in the adapters layer.
//
// Testing guidance
// - Provide in memory implementations for tests and local development.

use async_trait::async_trait;
use thiserror::Error;

use crate::application::errors::InitializationFailure;

#[derive(Debug, Error)]
pub enum ArtifactError {
    #[error("module artifact not found at {location}")]
    NotFound { location: String },

    #[error("module artifact at {location} could not be read")]
    Unreadable {
        location: String,
        #[source]
        source: std::io::Error,
    },

    #[error("module artifact source {location} is offline")]
    Offline { location: String },
}

/// Where the compiled module's bytes come from.
#[async_trait]
pub trait ArtifactSource: Send + Sync {
    fn location(&self) -> &str;
    async fn fetch(&self) -> Result<Vec<u8>, ArtifactError>;
}

/// The initialization capability of a compiled module.
///
/// A successful `init` is the only way to get a [`ModuleHandle`], so nothing can reach the
/// entry point before initialization has completed.
#[async_trait]
pub trait CompiledModule: Send {
    type Handle: ModuleHandle;

    fn location(&self) -> &str;
    async fn init(self) -> Result<Self::Handle, InitializationFailure>;
}

/// A loaded module whose exports are callable.
pub trait ModuleHandle: Send {
    fn entry_point(&self) -> &str;

    /// Calls the entry point with no arguments. Any return value is discarded; an error is
    /// whatever the module itself raised.
    fn invoke(self) -> anyhow::Result<()>;
}
