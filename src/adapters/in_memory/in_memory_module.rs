// Scripted implementation of the CompiledModule and ModuleHandle ports.
//
// Purpose
// - Exercise the bootstrapper's ordering and fail-closed rules without a wasm engine.
//
// Responsibilities
// - Record initialization and entry-point calls in a shared call log.
// - Optionally hold initialization open until the test releases it.
// - Optionally fail initialization, or raise from the entry point.

use std::sync::{Arc, Mutex, PoisonError};

use async_trait::async_trait;
use tokio::sync::oneshot;

use crate::application::errors::InitializationFailure;
use crate::core::ports::{CompiledModule, ModuleHandle};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModuleCall {
    InitStarted,
    InitCompleted,
    EntryPointInvoked,
}

#[derive(Debug, Clone, Default)]
pub struct CallLog {
    calls: Arc<Mutex<Vec<ModuleCall>>>,
}

impl CallLog {
    pub fn record(&self, call: ModuleCall) {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(call);
    }

    pub fn calls(&self) -> Vec<ModuleCall> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn count(&self, call: ModuleCall) -> usize {
        self.calls().iter().filter(|c| **c == call).count()
    }
}

pub struct InMemoryModule {
    location: String,
    entry_point: String,
    failure: Option<InitializationFailure>,
    gate: Option<oneshot::Receiver<()>>,
    raise: Option<String>,
    log: CallLog,
}

impl InMemoryModule {
    pub fn new(location: impl Into<String>, log: CallLog) -> Self {
        Self {
            location: location.into(),
            entry_point: "wasm_main".to_string(),
            failure: None,
            gate: None,
            raise: None,
            log,
        }
    }

    pub fn failing_with(mut self, failure: InitializationFailure) -> Self {
        self.failure = Some(failure);
        self
    }

    /// Initialization does not complete until the returned sender fires. Dropping the sender
    /// fails initialization.
    pub fn gated(mut self) -> (Self, oneshot::Sender<()>) {
        let (release, gate) = oneshot::channel();
        self.gate = Some(gate);
        (self, release)
    }

    pub fn raising(mut self, message: impl Into<String>) -> Self {
        self.raise = Some(message.into());
        self
    }
}

#[async_trait]
impl CompiledModule for InMemoryModule {
    type Handle = InMemoryModuleHandle;

    fn location(&self) -> &str {
        &self.location
    }

    async fn init(self) -> Result<Self::Handle, InitializationFailure> {
        self.log.record(ModuleCall::InitStarted);
        if let Some(gate) = self.gate {
            gate.await.map_err(|_| InitializationFailure::Instantiation {
                location: self.location.clone(),
                reason: "initialization abandoned".to_string(),
            })?;
        }
        if let Some(failure) = self.failure {
            return Err(failure);
        }
        self.log.record(ModuleCall::InitCompleted);
        Ok(InMemoryModuleHandle {
            entry_point: self.entry_point,
            raise: self.raise,
            log: self.log,
        })
    }
}

pub struct InMemoryModuleHandle {
    entry_point: String,
    raise: Option<String>,
    log: CallLog,
}

impl ModuleHandle for InMemoryModuleHandle {
    fn entry_point(&self) -> &str {
        &self.entry_point
    }

    fn invoke(self) -> anyhow::Result<()> {
        self.log.record(ModuleCall::EntryPointInvoked);
        match self.raise {
            Some(message) => Err(anyhow::anyhow!(message)),
            None => Ok(()),
        }
    }
}
