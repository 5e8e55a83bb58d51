use thiserror::Error;

use crate::core::ports::ArtifactError;

/// The one failure a bootstrap run can end in before the hand-off.
///
/// Variants name the stage that failed. In every case the entry point has not been invoked.
#[derive(Debug, Error)]
pub enum InitializationFailure {
    #[error(transparent)]
    Unreachable(#[from] ArtifactError),

    #[error("module artifact at {location} is malformed: {reason}")]
    Malformed { location: String, reason: String },

    #[error("module at {location} failed to instantiate: {reason}")]
    Instantiation { location: String, reason: String },

    #[error("module at {location} does not export an entry point named `{entry_point}`")]
    MissingEntryPoint { location: String, entry_point: String },

    #[error("entry point `{entry_point}` of module at {location} is not callable without arguments: {reason}")]
    EntryPointSignature {
        location: String,
        entry_point: String,
        reason: String,
    },
}
