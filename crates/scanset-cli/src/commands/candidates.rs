//! Handler for `scanset candidates`.

use scanset_util::errors::ScansetResult;

use scanset_ops::ops_candidates::{self, CandidateOptions};

pub fn exec(json: bool, kinds: Vec<String>) -> ScansetResult<()> {
    let project_root = super::project_root()?;
    let opts = CandidateOptions { json, kinds };
    ops_candidates::candidates(&project_root, &opts)
}
