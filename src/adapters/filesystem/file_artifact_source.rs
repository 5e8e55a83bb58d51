// Filesystem implementation of the ArtifactSource port.
//
// Purpose
// - Load the compiled module from the path the frontend build writes it to.
//
// Responsibilities
// - Read the whole artifact asynchronously. This is the suspension point of a bootstrap run.
// - Report a missing file as NotFound, anything else as Unreadable.

use std::io::ErrorKind;
use std::path::PathBuf;

use async_trait::async_trait;

use crate::core::ports::{ArtifactError, ArtifactSource};

pub struct FileArtifactSource {
    path: PathBuf,
    location: String,
}

impl FileArtifactSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let location = path.display().to_string();
        Self { path, location }
    }
}

#[async_trait]
impl ArtifactSource for FileArtifactSource {
    fn location(&self) -> &str {
        &self.location
    }

    async fn fetch(&self) -> Result<Vec<u8>, ArtifactError> {
        tracing::debug!(path = %self.location, "reading module artifact");
        tokio::fs::read(&self.path).await.map_err(|source| {
            if source.kind() == ErrorKind::NotFound {
                ArtifactError::NotFound {
                    location: self.location.clone(),
                }
            } else {
                ArtifactError::Unreadable {
                    location: self.location.clone(),
                    source,
                }
            }
        })
    }
}
