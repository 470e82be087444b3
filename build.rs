fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("cargo:rerun-if-changed=proto/plugin.proto");
    println!("cargo:rerun-if-env-changed=PROTOC_GEN_SQLC_REGENERATE");

    // src/plugin.rs is checked in; only regenerate on request so that
    // ordinary builds do not need protoc.
    if std::env::var_os("PROTOC_GEN_SQLC_REGENERATE").is_none() {
        return Ok(());
    }

    prost_build::Config::new()
        .out_dir("src/")
        .compile_protos(&["proto/plugin.proto"], &["proto/"])?;
    Ok(())
}
