// In memory implementation of the ArtifactSource port.
//
// Purpose
// - Support bootstrapper and wasm adapter tests without touching the filesystem.
//
// Responsibilities
// - Hand out a fixed byte payload.
// - Optionally simulate a slow fetch and an unreachable source.

use std::time::Duration;

use async_trait::async_trait;

use crate::core::ports::{ArtifactError, ArtifactSource};

pub struct InMemoryArtifactSource {
    location: String,
    bytes: Vec<u8>,
    delay: Option<Duration>,
    offline: bool,
}

impl InMemoryArtifactSource {
    pub fn new(location: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            location: location.into(),
            bytes: bytes.into(),
            delay: None,
            offline: false,
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn toggle_offline(&mut self) {
        self.offline = !self.offline;
    }
}

#[async_trait]
impl ArtifactSource for InMemoryArtifactSource {
    fn location(&self) -> &str {
        &self.location
    }

    async fn fetch(&self) -> Result<Vec<u8>, ArtifactError> {
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        if self.offline {
            return Err(ArtifactError::Offline {
                location: self.location.clone(),
            });
        }
        Ok(self.bytes.clone())
    }
}
