// Link setup for the `ffi` feature: the C `answer()` lives in an external library.
fn main() {
    println!("cargo:rerun-if-env-changed=ANSWER_LIB_DIR");
    println!("cargo:rerun-if-env-changed=ANSWER_LIB");

    if std::env::var_os("CARGO_FEATURE_FFI").is_none() {
        return;
    }

    if let Some(dir) = std::env::var_os("ANSWER_LIB_DIR") {
        println!("cargo:rustc-link-search=native={}", dir.to_string_lossy());
    }
    let lib = std::env::var("ANSWER_LIB").unwrap_or_else(|_| "answer".to_string());
    println!("cargo:rustc-link-lib={}", lib);
}
