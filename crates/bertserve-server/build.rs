use std::env;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Prefer a system protoc when one is configured, otherwise use the vendored binary
    if env::var_os("PROTOC").is_none() {
        env::set_var("PROTOC", protoc_bin_vendored::protoc_bin_path()?);
    }

    tonic_build::configure()
        .build_server(true)
        .build_client(true)
        .compile_protos(&["proto/bert_server.proto"], &["proto"])?;

    println!("cargo:rerun-if-changed=proto/bert_server.proto");
    println!("cargo:rerun-if-env-changed=PROTOC");
    Ok(())
}
