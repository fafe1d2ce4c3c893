use std::path::PathBuf;

fn main() {
    println!("cargo:rerun-if-changed=src");

    let crate_dir = PathBuf::from(std::env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".to_string()));
    let include_dir = crate_dir.join("include");
    if let Err(e) = std::fs::create_dir_all(&include_dir) {
        println!("cargo:warning=cannot create {}: {e}", include_dir.display());
        return;
    }

    let result = cbindgen::Builder::new()
        .with_crate(&crate_dir)
        .with_language(cbindgen::Language::C)
        .with_include_guard("NEWS_FFI_H")
        .with_documentation(true)
        .generate();
    match result {
        Ok(bindings) => {
            bindings.write_to_file(include_dir.join("news_ffi.h"));
        }
        Err(e) => println!("cargo:warning=cbindgen failed: {e}"),
    }
}
