fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Compile the proto file for the similarity model client
    tonic_build::compile_protos("../../proto/similarity.proto")?;
    Ok(())
}
