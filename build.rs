fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("cargo:rerun-if-changed=proto/packer.proto");

    // Only the gRPC surface needs generated code (and a protoc install).
    if std::env::var_os("CARGO_FEATURE_SERVER").is_some() {
        tonic_build::compile_protos("proto/packer.proto")?;
    }

    Ok(())
}
