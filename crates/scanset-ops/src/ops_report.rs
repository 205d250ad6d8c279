//! Operation: summarize how every library was classified.

use std::path::Path;

use scanset_resolver::report::ClassificationReport;
use scanset_util::errors::ScansetResult;
use scanset_util::progress;

pub fn report(project_root: &Path, json: bool) -> ScansetResult<()> {
    let project = crate::load_project(project_root)?;
    let report = ClassificationReport::from_resolved(&project.resolved);
    progress::status_info(
        "Classified",
        &format!("{} libraries", report.libraries),
    );

    if project.wants_json(json) {
        return crate::print_json(&report);
    }
    println!("{report}");
    Ok(())
}
