use std::{env, path::PathBuf, str::FromStr};

fn main() {
    let crate_dir = env::var("CARGO_MANIFEST_DIR").unwrap();
    let crate_name = env::var("CARGO_PKG_NAME").unwrap();
    let write_dest = PathBuf::from_str(crate_dir.as_str())
        .unwrap()
        .join("..")
        .join("..")
        .join("target")
        .join("include")
        .join(format!("{}.h", crate_name));

    println!("cargo:rerun-if-changed=src");

    let mut conf = cbindgen::Config::default();
    conf.language = cbindgen::Language::C;
    conf.include_guard = Some("CALCULATOR_FFI_H".to_string());
    conf.cpp_compat = true;
    conf.no_includes = true;

    cbindgen::Builder::new()
        .with_crate(crate_dir)
        .with_config(conf)
        .generate()
        .expect("Unable to generate bindings")
        .write_to_file(write_dest);
}
