//! `webaid mkdir <path>` – idempotent recursive directory creation.

use anyhow::Result;
use std::path::Path;
use webaid_core::fs_util::create_dir;

pub fn run_mkdir(path: &Path) -> Result<()> {
    let created = create_dir(path)?;
    println!("{created}");
    Ok(())
}
