//! ultra - UltraDNS name server record tool
//!
//! Builds, inspects, validates and compares name server records.

use anyhow::Result;

fn main() -> Result<()> {
    ultra_cli::run()
}
