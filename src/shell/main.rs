use wasm_bootstrap::adapters::filesystem::file_artifact_source::FileArtifactSource;
use wasm_bootstrap::adapters::wasm::wasm_module::WasmModule;
use wasm_bootstrap::application::bootstrapper::Bootstrapper;
use wasm_bootstrap::shell::{settings::BootSettings, telemetry};

// One logical thread of control: the artifact fetch is the only suspension point.
#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    telemetry::init();

    let settings = BootSettings::from_build();
    let source = FileArtifactSource::new(settings.module_artifact);
    let module = WasmModule::new(source, settings.entry_point);

    Bootstrapper::new(module).run().await
}
