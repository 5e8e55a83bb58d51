//! Build file

fn main() {
    // Both values are baked into the binary through `option_env!`.
    println!("cargo:rerun-if-env-changed=BOOTSTRAP_MODULE_ARTIFACT");
    println!("cargo:rerun-if-env-changed=BOOTSTRAP_ENTRY_POINT");
}
