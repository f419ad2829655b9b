use std::path::{Path, PathBuf};

use unyaffs_core::error::Result;
use unyaffs_core::{ExtractOptions, extract};

pub fn handle_extract(image: PathBuf, opts: ExtractOptions) -> Result<()> {
    tracing::info!("extracting {}", image.display());
    let stats = extract(&image, Path::new("."), Some(&opts))?;
    tracing::debug!("{stats:?}");
    println!("end of image");
    Ok(())
}
