use serde_json::{json, Value};

use crate::report::LogReport;

/// Render one report as a JSON value.
pub(crate) fn report_json(report: &LogReport) -> Value {
    let pointers: Vec<_> = report
        .pointers
        .iter()
        .map(|pointer| {
            json!({
                "path": pointer.loc.pathname(),
                "linenr": if pointer.loc.line == 0 { None } else { Some(pointer.loc.line) },
                "column": if pointer.loc.column == 0 { None } else { Some(pointer.loc.column) },
                "length": pointer.length,
                "tag": pointer.msg,
            })
        })
        .collect();
    json!({
        "severity": report.severity,
        "key": report.key.to_string(),
        "message": report.msg,
        "info": report.info,
        "locations": pointers,
    })
}
