//! Handler for `scanset report`.

use scanset_util::errors::ScansetResult;

pub fn exec(json: bool) -> ScansetResult<()> {
    let project_root = super::project_root()?;
    scanset_ops::ops_report::report(&project_root, json)
}
