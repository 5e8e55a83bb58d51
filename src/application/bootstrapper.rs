// Bootstrapper sequences the hand-off from "module not yet usable" to "module running".
//
// Responsibilities
// - Drive the lifecycle: Unstarted -> Initializing -> Ready -> Running, or Initializing -> Failed.
// - Await the module's initialization capability, then invoke its entry point exactly once.
// - Propagate an InitializationFailure unchanged. No retry, no timeout, no cancellation.
//
// How it is used
// - Built once by the binary and consumed by `run`, so a second run cannot be expressed.

use tokio::sync::broadcast;

use crate::core::lifecycle::{BootState, Lifecycle};
use crate::core::ports::{CompiledModule, ModuleHandle};

pub struct Bootstrapper<M: CompiledModule> {
    module: M,
    lifecycle: Lifecycle,
}

impl<M: CompiledModule> Bootstrapper<M> {
    pub fn new(module: M) -> Self {
        Self {
            module,
            lifecycle: Lifecycle::new(),
        }
    }

    pub fn state(&self) -> BootState {
        self.lifecycle.current()
    }

    pub fn subscribe(&self) -> broadcast::Receiver<BootState> {
        self.lifecycle.subscribe()
    }

    pub async fn run(self) -> anyhow::Result<()> {
        let Self {
            module,
            mut lifecycle,
        } = self;
        let location = module.location().to_owned();

        lifecycle.advance(BootState::Initializing)?;
        tracing::info!(%location, "initializing module");

        let handle = match module.init().await {
            Ok(handle) => handle,
            Err(failure) => {
                lifecycle.advance(BootState::Failed)?;
                tracing::error!(%location, error = %failure, "module initialization failed");
                return Err(failure.into());
            }
        };
        lifecycle.advance(BootState::Ready)?;

        let entry_point = handle.entry_point().to_owned();
        lifecycle.advance(BootState::Running)?;
        tracing::info!(%location, %entry_point, "handing off to entry point");
        handle.invoke()
    }
}
