// Crate entry point. Re-export modules so tests and binaries can import them easily.
//
// Responsibilities
// - Only declare and expose modules. No bootstrapping logic here.
//
// How it is used
// - The binary in shell/main.rs wires the concrete adapters and calls the bootstrapper.
// - Tests import modules from this crate root to reach the code under test.

pub mod core {
    pub mod lifecycle;
    pub mod ports;
}

pub mod application {
    pub mod bootstrapper;
    pub mod errors;
}

pub mod adapters {
    pub mod filesystem {
        pub mod file_artifact_source;
    }
    pub mod in_memory {
        pub mod in_memory_artifact_source;
        pub mod in_memory_module;
    }
    pub mod wasm {
        pub mod host_imports;
        pub mod wasm_module;
    }
}

pub mod shell {
    pub mod settings;
    pub mod telemetry;
}
