use anyhow::Result;

pub fn execute() -> Result<()> {
    println!("nvdu version {}", env!("CARGO_PKG_VERSION"));
    Ok(())
}
