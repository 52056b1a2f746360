use ansiterm::{ANSIString, ANSIStrings};
use unicode_width::UnicodeWidthChar;

use crate::report::errors::Reports;
use crate::report::output_style::{OutputStyle, Styled};
use crate::report::{LogReport, PointedMessage, Severity};

/// Log the report.
pub(crate) fn log_report(reports: &mut Reports, styles: &OutputStyle, report: &LogReport) {
    log_line_title(styles, report);

    log_pointer(reports, styles, None, report.primary(), report.indentation(), report.severity);
    for pointers in report.pointers.windows(2) {
        log_pointer(
            reports,
            styles,
            pointers.first(),
            pointers.get(1).expect("must exist"),
            report.indentation(),
            report.severity,
        );
    }

    if let Some(info) = &report.info {
        log_line_info(styles, report.indentation(), info);
    }
    println!();
}

fn log_pointer(
    reports: &mut Reports,
    styles: &OutputStyle,
    previous: Option<&PointedMessage>,
    pointer: &PointedMessage,
    indentation: usize,
    severity: Severity,
) {
    let same_file = previous.is_some_and(|prev| prev.loc.pathname == pointer.loc.pathname);
    if !same_file {
        log_line_file_location(styles, pointer, indentation);
    }
    if pointer.loc.line == 0 {
        // Line zero means the location is an entire file,
        // not any particular location within the file.
        return;
    }
    if let Some(line) = reports.get_line(&pointer.loc) {
        log_line_from_source(styles, pointer, indentation, &line);
        log_line_carets(styles, pointer, &line, indentation, severity);
    }
}

/// Log the first line of a report, containing the severity level and the error message.
fn log_line_title(styles: &OutputStyle, report: &LogReport) {
    let line: &[ANSIString<'static>] = &[
        styles
            .style(Styled::Tag(report.severity, true))
            .paint(format!("{}", report.severity)),
        styles.style(Styled::Tag(report.severity, false)).paint("("),
        styles.style(Styled::Tag(report.severity, false)).paint(format!("{}", report.key)),
        styles.style(Styled::Tag(report.severity, false)).paint(")"),
        styles.style(Styled::Default).paint(": "),
        styles.style(Styled::ErrorMessage).paint(report.msg.clone()),
    ];
    println!("{}", ANSIStrings(line));
}

/// Log the optional info line that is part of the overall report.
fn log_line_info(styles: &OutputStyle, indentation: usize, info: &str) {
    let line: &[ANSIString<'static>] = &[
        styles.style(Styled::Default).paint(format!("{:indentation$}", "")),
        styles.style(Styled::Default).paint(" "),
        styles.style(Styled::Location).paint("="),
        styles.style(Styled::Default).paint(" "),
        styles.style(Styled::InfoTag).paint("info"),
        styles.style(Styled::Default).paint(": "),
        styles.style(Styled::Info).paint(info.to_string()),
    ];
    println!("{}", ANSIStrings(line));
}

/// Log the line containing the location's pathname.
fn log_line_file_location(styles: &OutputStyle, pointer: &PointedMessage, indentation: usize) {
    let line: &[ANSIString<'static>] = &[
        styles.style(Styled::Default).paint(format!("{:indentation$}", "")),
        styles.style(Styled::Location).paint("-->"),
        styles.style(Styled::Default).paint(" "),
        styles
            .style(Styled::Location)
            .paint(format!("{}", pointer.loc.pathname().display())),
    ];
    println!("{}", ANSIStrings(line));
}

/// Print a line from the source file.
fn log_line_from_source(
    styles: &OutputStyle,
    pointer: &PointedMessage,
    indentation: usize,
    line: &str,
) {
    let line_from_source: &[ANSIString<'static>] = &[
        styles
            .style(Styled::Location)
            .paint(format!("{:indentation$}", pointer.loc.line)),
        styles.style(Styled::Default).paint(" "),
        styles.style(Styled::Location).paint("|"),
        styles.style(Styled::Default).paint(" "),
        styles.style(Styled::SourceText).paint(line.to_string()),
    ];
    println!("{}", ANSIStrings(line_from_source));
}

/// Print the carets that point out the location within the source line.
fn log_line_carets(
    styles: &OutputStyle,
    pointer: &PointedMessage,
    line: &str,
    indentation: usize,
    severity: Severity,
) {
    let mut spacing = String::new();
    for c in line.chars().take(pointer.loc.column.saturating_sub(1)) {
        if c == '\t' {
            spacing.push('\t');
        } else {
            for _ in 0..c.width().unwrap_or(0) {
                spacing.push(' ');
            }
        }
    }
    let carets: &[ANSIString<'static>] = &[
        styles.style(Styled::Default).paint(format!("{:indentation$}", "")),
        styles.style(Styled::Default).paint(" "),
        styles.style(Styled::Location).paint("|"),
        styles.style(Styled::Default).paint(" "),
        styles.style(Styled::Default).paint(spacing),
        styles
            .style(Styled::Tag(severity, true))
            .paint(format!("{:^<length$}", "", length = pointer.length)),
        styles.style(Styled::Default).paint(" "),
        styles
            .style(Styled::Caret)
            .paint(pointer.msg.clone().unwrap_or_default()),
    ];
    println!("{}", ANSIStrings(carets));
}
