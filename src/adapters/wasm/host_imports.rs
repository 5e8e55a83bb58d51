// Host functions offered to the loaded module.
//
// Purpose
// - Give the module a way to report what it is doing, the way a browser offers `console.log`.
//
// Responsibilities
// - Define every import under the `env` namespace on a linker.
// - Turn module log lines into tracing events and, when asked, keep them for inspection.
//
// Boundaries
// - Host functions never trap. A bad pointer or a missing memory export is logged and ignored.

use std::sync::{Arc, Mutex, PoisonError};

use wasmi::errors::LinkerError;
use wasmi::{Caller, Extern, Linker};

pub const HOST_NAMESPACE: &str = "env";

/// Longest log line read out of module memory, in bytes.
pub const MAX_LOG_LINE: usize = 64 * 1024;

/// Sink for lines the module writes through `env.log`.
#[derive(Debug, Clone, Default)]
pub struct Console {
    recorded: Option<Arc<Mutex<Vec<String>>>>,
}

impl Console {
    pub fn tracing_only() -> Self {
        Self::default()
    }

    pub fn recording() -> Self {
        Self {
            recorded: Some(Arc::default()),
        }
    }

    pub fn write(&self, location: &str, line: String) {
        tracing::info!(target: "module", %location, "{line}");
        if let Some(recorded) = &self.recorded {
            recorded
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .push(line);
        }
    }

    pub fn lines(&self) -> Vec<String> {
        match &self.recorded {
            Some(recorded) => recorded
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .clone(),
            None => Vec::new(),
        }
    }
}

pub struct HostState {
    location: String,
    console: Console,
}

impl HostState {
    pub fn new(location: impl Into<String>, console: Console) -> Self {
        Self {
            location: location.into(),
            console,
        }
    }

    pub fn location(&self) -> &str {
        &self.location
    }
}

pub fn define(linker: &mut Linker<HostState>) -> Result<(), LinkerError> {
    linker.func_wrap(
        HOST_NAMESPACE,
        "log",
        |caller: Caller<'_, HostState>, ptr: i32, len: i32| log(caller, ptr, len),
    )?;
    Ok(())
}

fn log(caller: Caller<'_, HostState>, ptr: i32, len: i32) {
    let location = caller.data().location();
    let Some(memory) = caller.get_export("memory").and_then(Extern::into_memory) else {
        tracing::warn!(%location, "env.log called but the module exports no memory");
        return;
    };
    // wasm32 pointers and lengths are unsigned.
    let offset = ptr as u32 as usize;
    let len = (len as u32 as usize).min(MAX_LOG_LINE);
    let mut buffer = vec![0u8; len];
    if let Err(error) = memory.read(&caller, offset, &mut buffer) {
        tracing::warn!(%location, offset, len, %error, "env.log pointer outside module memory");
        return;
    }
    let line = String::from_utf8_lossy(&buffer).into_owned();
    caller.data().console.write(location, line);
}
