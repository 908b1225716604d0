use serde::Serialize;
use std::io::{self, Write};

use crate::cli::Format;
use crate::extract::summary::FileSummary;
use crate::pipeline::SkippedFile;

#[derive(Serialize)]
struct JsonRecord<'a> {
    path: &'a str,
    #[serde(flatten)]
    summary: &'a FileSummary,
}

pub fn write_record<W: Write>(
    out: &mut W,
    path: &str,
    summary: &FileSummary,
    format: Format,
) -> io::Result<()> {
    match format {
        Format::Text => writeln!(
            out,
            "{}\t{}\t{}\t{}",
            path,
            summary.has_loop,
            summary.joined_functions(),
            summary.joined_callees()
        ),
        Format::Json => {
            let record = JsonRecord { path, summary };
            serde_json::to_writer(&mut *out, &record)?;
            writeln!(out)
        }
    }
}

pub fn write_skipped<W: Write>(out: &mut W, skipped: &[SkippedFile]) -> io::Result<()> {
    writeln!(out, "Skipped {} file(s):", skipped.len())?;

    for skipped_file in skipped {
        let path_str = skipped_file.path.to_string_lossy().replace('\\', "/");
        writeln!(out, "  {} - {}", path_str, skipped_file.reason)?;
    }

    Ok(())
}

pub fn is_broken_pipe(err: &anyhow::Error) -> bool {
    err.chain().any(|cause| {
        cause
            .downcast_ref::<io::Error>()
            .is_some_and(|e| e.kind() == io::ErrorKind::BrokenPipe)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn render(summary: &FileSummary, format: Format) -> String {
        let mut out = Vec::new();
        write_record(&mut out, "dir/a.result", summary, format).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn text_record_is_tab_separated() {
        let summary = FileSummary {
            functions: vec!["main".into(), "run".into()],
            callees: vec!["a".into(), "b".into()],
            has_loop: true,
            marker_lines: 2,
        };
        assert_eq!(
            render(&summary, Format::Text),
            "dir/a.result\ttrue\tmain,run\ta,b\n"
        );
    }

    #[test]
    fn empty_text_record_keeps_all_columns() {
        assert_eq!(
            render(&FileSummary::default(), Format::Text),
            "dir/a.result\tfalse\t\t\n"
        );
    }

    #[test]
    fn json_record_is_a_single_line() {
        let summary = FileSummary {
            functions: vec!["f\tg".into()],
            callees: Vec::new(),
            has_loop: false,
            marker_lines: 1,
        };
        let rendered = render(&summary, Format::Json);
        assert_eq!(rendered.lines().count(), 1);

        let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(value["path"], "dir/a.result");
        assert_eq!(value["functions"][0], "f\tg");
        assert_eq!(value["callees"], serde_json::json!([]));
    }

    #[test]
    fn skipped_report_lists_each_file() {
        let skipped = vec![SkippedFile {
            path: PathBuf::from("x.result"),
            reason: "Failed to open x.result: denied".into(),
        }];
        let mut out = Vec::new();
        write_skipped(&mut out, &skipped).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Skipped 1 file(s):\n  x.result - Failed to open x.result: denied\n"
        );
    }

    #[test]
    fn detects_broken_pipe_through_context() {
        let err = anyhow::Error::from(io::Error::from(io::ErrorKind::BrokenPipe))
            .context("writing record");
        assert!(is_broken_pipe(&err));

        let other = anyhow::anyhow!("something else");
        assert!(!is_broken_pipe(&other));
    }
}
