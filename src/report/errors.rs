use std::fs::read_to_string;
use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;

use ahash::AHashMap;

use crate::report::writer::log_report;
use crate::report::writer_json::report_json;
use crate::report::{ErrorKey, LogReport, OutputStyle, PointedMessage, Severity};
use crate::token::{Loc, Token};

/// Collects the reports produced while loading and validating catalogs.
///
/// The collector is passed explicitly rather than living in a process-wide
/// static, so that concurrent sessions and tests stay isolated.
#[derive(Debug)]
pub struct Reports {
    reports: Vec<LogReport>,
    /// Reports below this severity are dropped at logging time.
    min_severity: Severity,
    /// Cache of catalog file contents, for printing source lines.
    filecache: AHashMap<Arc<PathBuf>, Option<String>>,
}

impl Default for Reports {
    fn default() -> Self {
        Reports {
            reports: Vec::new(),
            min_severity: Severity::Untidy,
            filecache: AHashMap::new(),
        }
    }
}

impl Reports {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop reports below this severity instead of collecting them.
    pub fn minimum_severity(&mut self, severity: Severity) {
        self.min_severity = severity;
    }

    pub fn push(&mut self, report: LogReport) {
        if report.severity >= self.min_severity {
            self.reports.push(report);
        }
    }

    fn log(
        &mut self,
        severity: Severity,
        key: ErrorKey,
        pointers: Vec<PointedMessage>,
        msg: &str,
        info: Option<&str>,
    ) {
        self.push(LogReport {
            severity,
            key,
            msg: msg.to_string(),
            info: info.map(str::to_string),
            pointers,
        });
    }

    pub fn error<E: ErrorLoc>(&mut self, eloc: E, key: ErrorKey, msg: &str) {
        self.log(Severity::Error, key, vec![eloc.into_pointer()], msg, None);
    }

    pub fn error_info<E: ErrorLoc>(&mut self, eloc: E, key: ErrorKey, msg: &str, info: &str) {
        self.log(Severity::Error, key, vec![eloc.into_pointer()], msg, Some(info));
    }

    pub fn warn<E: ErrorLoc>(&mut self, eloc: E, key: ErrorKey, msg: &str) {
        self.log(Severity::Warning, key, vec![eloc.into_pointer()], msg, None);
    }

    pub fn warn_info<E: ErrorLoc>(&mut self, eloc: E, key: ErrorKey, msg: &str, info: &str) {
        self.log(Severity::Warning, key, vec![eloc.into_pointer()], msg, Some(info));
    }

    /// A warning with a second pointer, for problems that involve two places at once.
    pub fn warn2<E: ErrorLoc, F: ErrorLoc>(
        &mut self,
        eloc: E,
        key: ErrorKey,
        msg: &str,
        eloc2: F,
        msg2: &str,
    ) {
        let mut second = eloc2.into_pointer();
        second.msg = Some(msg2.to_string());
        self.log(Severity::Warning, key, vec![eloc.into_pointer(), second], msg, None);
    }

    pub fn advice<E: ErrorLoc>(&mut self, eloc: E, key: ErrorKey, msg: &str) {
        self.log(Severity::Info, key, vec![eloc.into_pointer()], msg, None);
    }

    pub fn advice_info<E: ErrorLoc>(&mut self, eloc: E, key: ErrorKey, msg: &str, info: &str) {
        self.log(Severity::Info, key, vec![eloc.into_pointer()], msg, Some(info));
    }

    pub fn untidy<E: ErrorLoc>(&mut self, eloc: E, key: ErrorKey, msg: &str) {
        self.log(Severity::Untidy, key, vec![eloc.into_pointer()], msg, None);
    }

    pub fn is_empty(&self) -> bool {
        self.reports.is_empty()
    }

    pub fn len(&self) -> usize {
        self.reports.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, LogReport> {
        self.reports.iter()
    }

    /// The most severe level among the collected reports.
    pub fn worst(&self) -> Option<Severity> {
        self.reports.iter().map(|report| report.severity).max()
    }

    /// Take the reports out of the collector, leaving it empty.
    pub fn take(&mut self) -> Vec<LogReport> {
        std::mem::take(&mut self.reports)
    }

    /// The source line a report points at, for the caret display.
    pub(crate) fn get_line(&mut self, loc: &Loc) -> Option<String> {
        if loc.line == 0 {
            return None;
        }
        let contents = self
            .filecache
            .entry(Arc::clone(&loc.pathname))
            .or_insert_with(|| read_to_string(loc.pathname.as_ref()).ok());
        contents.as_ref().and_then(|s| s.lines().nth(loc.line - 1)).map(str::to_string)
    }

    /// Print the reports in human-readable form, sorted by file and location.
    pub fn emit(&mut self, styles: &OutputStyle) {
        let mut reports = self.take();
        reports.sort_by(|a, b| {
            let a = &a.primary().loc;
            let b = &b.primary().loc;
            a.pathname.cmp(&b.pathname).then(a.line.cmp(&b.line)).then(a.column.cmp(&b.column))
        });
        for report in &reports {
            log_report(self, styles, report);
        }
    }

    /// Print the reports as a JSON array.
    pub fn emit_json<W: Write>(&mut self, output: &mut W) -> Result<(), serde_json::Error> {
        let reports = self.take();
        let values: Vec<_> = reports.iter().map(report_json).collect();
        serde_json::to_writer_pretty(output, &values)
    }
}

/// Anything that can point a report at a place in a catalog file.
pub trait ErrorLoc {
    fn into_pointer(self) -> PointedMessage;
}

impl ErrorLoc for Loc {
    fn into_pointer(self) -> PointedMessage {
        PointedMessage::new(self)
    }
}

impl ErrorLoc for &Loc {
    fn into_pointer(self) -> PointedMessage {
        PointedMessage::new(self.clone())
    }
}

impl ErrorLoc for &Token {
    fn into_pointer(self) -> PointedMessage {
        PointedMessage {
            loc: self.loc.clone(),
            length: self.width().max(1),
            msg: None,
        }
    }
}
