use scanset_util::errors::ScansetResult;

use scanset_util::errors::ScansetError;

pub fn exec(references: &[String]) -> ScansetResult<()> {
    let cwd = std::env::current_dir().map_err(ScansetError::Io)?;
    let path = scanset_ops::ops_init::init(&cwd, references)?;
    tracing::debug!("wrote {}", path.display());
    println!("Initialized scanset project in {}", cwd.display());
    Ok(())
}
