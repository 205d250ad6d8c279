//! Handler for `scanset why`.

use scanset_util::errors::ScansetResult;

pub fn exec(name: &str) -> ScansetResult<()> {
    let project_root = super::project_root()?;
    scanset_ops::ops_why::why(&project_root, name)
}
