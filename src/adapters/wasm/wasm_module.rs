// WebAssembly implementation of the CompiledModule and ModuleHandle ports, backed by wasmi.
//
// Purpose
// - Turn the bytes of a compiled frontend module into a callable entry point.
//
// Responsibilities
// - Fetch the artifact, check the wasm preamble and compile it off the async thread.
// - Link the host imports, instantiate the module and run its start section.
// - Resolve the entry-point export and check it can be called without arguments.
//
// Boundaries
// - Every failure before the handle exists is an InitializationFailure.
// - A trap raised by the entry point belongs to the module and is reported as such.

use async_trait::async_trait;
use wasmi::{Engine, Extern, Func, Instance, Linker, Module, Store, Value};

use crate::adapters::wasm::host_imports::{self, Console, HostState};
use crate::application::errors::InitializationFailure;
use crate::core::ports::{ArtifactSource, CompiledModule, ModuleHandle};

/// Magic number followed by binary format version 1.
pub const WASM_PREAMBLE: [u8; 8] = [0x00, 0x61, 0x73, 0x6d, 0x01, 0x00, 0x00, 0x00];

pub const DEFAULT_ENTRY_POINT: &str = "wasm_main";

pub struct WasmModule<S: ArtifactSource> {
    source: S,
    entry_point: String,
    console: Console,
}

impl<S: ArtifactSource> WasmModule<S> {
    pub fn new(source: S, entry_point: impl Into<String>) -> Self {
        Self {
            source,
            entry_point: entry_point.into(),
            console: Console::tracing_only(),
        }
    }

    pub fn with_console(mut self, console: Console) -> Self {
        self.console = console;
        self
    }
}

#[async_trait]
impl<S: ArtifactSource> CompiledModule for WasmModule<S> {
    type Handle = WasmModuleHandle;

    fn location(&self) -> &str {
        self.source.location()
    }

    async fn init(self) -> Result<Self::Handle, InitializationFailure> {
        let location = self.source.location().to_owned();
        let bytes = self.source.fetch().await?;
        tracing::debug!(%location, size = bytes.len(), "module artifact fetched");

        check_preamble(&location, &bytes)?;
        let engine = Engine::default();
        let module = compile(&engine, &location, bytes).await?;

        let mut store = Store::new(&engine, HostState::new(location.clone(), self.console));
        let mut linker = Linker::new(&engine);
        host_imports::define(&mut linker).map_err(|error| InitializationFailure::Instantiation {
            location: location.clone(),
            reason: error.to_string(),
        })?;
        let instance = linker
            .instantiate(&mut store, &module)
            .and_then(|pre| pre.start(&mut store))
            .map_err(|error| InitializationFailure::Instantiation {
                location: location.clone(),
                reason: error.to_string(),
            })?;

        let entry = resolve_entry_point(&instance, &store, &location, &self.entry_point)?;
        tracing::debug!(%location, entry_point = %self.entry_point, "module instantiated");
        Ok(WasmModuleHandle {
            store,
            entry,
            entry_point: self.entry_point,
            location,
        })
    }
}

pub struct WasmModuleHandle {
    store: Store<HostState>,
    entry: Func,
    entry_point: String,
    location: String,
}

impl ModuleHandle for WasmModuleHandle {
    fn entry_point(&self) -> &str {
        &self.entry_point
    }

    fn invoke(mut self) -> anyhow::Result<()> {
        let ty = self.entry.ty(&self.store);
        // Results are required by the call signature and then discarded.
        let mut results: Vec<Value> = ty.results().iter().copied().map(Value::default).collect();
        self.entry
            .call(&mut self.store, &[], &mut results)
            .map_err(|trap| {
                anyhow::anyhow!(
                    "entry point `{}` of module at {} trapped: {trap}",
                    self.entry_point,
                    self.location
                )
            })
    }
}

pub fn check_preamble(location: &str, bytes: &[u8]) -> Result<(), InitializationFailure> {
    match bytes.get(..WASM_PREAMBLE.len()) {
        Some(preamble) if preamble == WASM_PREAMBLE => Ok(()),
        Some(preamble) if preamble[..4] == WASM_PREAMBLE[..4] => {
            Err(InitializationFailure::Malformed {
                location: location.to_owned(),
                reason: format!(
                    "unsupported binary format version {:?}",
                    &preamble[4..]
                ),
            })
        }
        Some(_) => Err(InitializationFailure::Malformed {
            location: location.to_owned(),
            reason: "not a WebAssembly binary".to_string(),
        }),
        None => Err(InitializationFailure::Malformed {
            location: location.to_owned(),
            reason: format!("artifact is only {} bytes long", bytes.len()),
        }),
    }
}

async fn compile(
    engine: &Engine,
    location: &str,
    bytes: Vec<u8>,
) -> Result<Module, InitializationFailure> {
    let engine = engine.clone();
    let compiled = tokio::task::spawn_blocking(move || {
        Module::new(&engine, &mut &bytes[..]).map_err(|error| error.to_string())
    })
    .await;
    match compiled {
        Ok(Ok(module)) => Ok(module),
        Ok(Err(reason)) => Err(InitializationFailure::Malformed {
            location: location.to_owned(),
            reason,
        }),
        Err(join_error) => Err(InitializationFailure::Instantiation {
            location: location.to_owned(),
            reason: format!("compilation task did not finish: {join_error}"),
        }),
    }
}

fn resolve_entry_point(
    instance: &Instance,
    store: &Store<HostState>,
    location: &str,
    entry_point: &str,
) -> Result<Func, InitializationFailure> {
    let export = instance
        .get_export(store, entry_point)
        .ok_or_else(|| InitializationFailure::MissingEntryPoint {
            location: location.to_owned(),
            entry_point: entry_point.to_owned(),
        })?;
    let Some(func) = Extern::into_func(export) else {
        return Err(InitializationFailure::EntryPointSignature {
            location: location.to_owned(),
            entry_point: entry_point.to_owned(),
            reason: "export is not a function".to_string(),
        });
    };
    let params = func.ty(store).params().len();
    if params != 0 {
        return Err(InitializationFailure::EntryPointSignature {
            location: location.to_owned(),
            entry_point: entry_point.to_owned(),
            reason: format!("expects {params} parameter(s)"),
        });
    }
    Ok(func)
}
