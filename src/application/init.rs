//! Initialize phone book use case

use crate::error::Result;
use crate::infrastructure::FlatFileRepository;
use std::path::Path;
use tracing::info;

/// Create an empty phone book file at `path`.
pub fn init(path: &Path) -> Result<()> {
    let repo = FlatFileRepository::new(path);
    repo.initialize()?;

    info!("Initialized phone book at {}", path.display());
    Ok(())
}
