use std::path::Path;

use anyhow::Result;

use kenslide_core::gallery;

pub fn run(dir: &Path) -> Result<()> {
    let items = gallery::scan(dir)?;

    if items.is_empty() {
        println!("No images found under {}", dir.display());
        return Ok(());
    }

    for item in &items {
        println!("{:>3}  {}", item.index, item.path.display());
    }
    Ok(())
}
