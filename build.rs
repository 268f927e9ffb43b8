//! Generates `include/sumaddon.h` for C hosts loading the cdylib.

use std::error::Error;
use std::path::PathBuf;

const HEADER: &str = "sumaddon.h";

fn main() -> Result<(), Box<dyn Error>> {
    let crate_dir = PathBuf::from(std::env::var("CARGO_MANIFEST_DIR")?);
    let include_dir = crate_dir.join("include");
    std::fs::create_dir_all(&include_dir)?;

    // Missing cbindgen.toml falls back to cbindgen's defaults.
    let config = cbindgen::Config::from_file(crate_dir.join("cbindgen.toml")).unwrap_or_default();

    let bindings = cbindgen::Builder::new()
        .with_crate(&crate_dir)
        .with_config(config)
        .with_language(cbindgen::Language::C)
        .generate()?;
    bindings.write_to_file(include_dir.join(HEADER));

    // cbindgen reads the whole crate, including re-exports in lib.rs.
    println!("cargo:rerun-if-changed=src/");
    println!("cargo:rerun-if-changed=cbindgen.toml");
    Ok(())
}
