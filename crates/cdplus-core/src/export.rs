//! Delivery of the formatted selection.
//!
//! When the navigator finishes with a [`PendingExport`], the frontend formats
//! it and hands the string to an [`ExportGateway`]. The gateway tries every
//! registered [`ExportSink`] in order; one sink failing does not stop the
//! others.

use std::io::Write;

use crate::error::{CoreError, CoreResult};
use crate::format::PathFormatter;
use crate::nav::navigator::PendingExport;

/// A destination for the exported text (clipboard, stdout, ...).
pub trait ExportSink {
    /// Short name used in logs and reports.
    fn name(&self) -> &str;

    /// Writes `text` to the destination.
    fn deliver(&mut self, text: &str) -> CoreResult<()>;
}

/// Writes the text followed by a newline.
#[derive(Debug)]
pub struct StdoutSink<W: Write> {
    writer: W,
}

impl StdoutSink<std::io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write> StdoutSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> ExportSink for StdoutSink<W> {
    fn name(&self) -> &str {
        "stdout"
    }

    fn deliver(&mut self, text: &str) -> CoreResult<()> {
        writeln!(self.writer, "{text}")?;
        self.writer.flush()?;
        Ok(())
    }
}

/// What happened to one export.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportReport {
    /// The text that was exported.
    pub text: String,
    /// Names of the sinks that accepted the text.
    pub delivered: Vec<String>,
    /// `(sink name, error message)` for each sink that failed.
    pub failures: Vec<(String, String)>,
}

impl ExportReport {
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Ordered collection of sinks.
#[derive(Default)]
pub struct ExportGateway {
    sinks: Vec<Box<dyn ExportSink>>,
}

impl ExportGateway {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_sink(mut self, sink: Box<dyn ExportSink>) -> Self {
        self.sinks.push(sink);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.sinks.is_empty()
    }

    /// Sends `text` to every sink, in registration order.
    pub fn deliver(&mut self, text: &str) -> ExportReport {
        let mut report = ExportReport {
            text: text.to_string(),
            ..ExportReport::default()
        };
        for sink in &mut self.sinks {
            let name = sink.name().to_string();
            match sink.deliver(text) {
                Ok(()) => {
                    tracing::debug!(sink = %name, "export delivered");
                    report.delivered.push(name);
                }
                Err(e) => {
                    tracing::warn!(sink = %name, error = %e, "export failed");
                    report.failures.push((name, e.to_string()));
                }
            }
        }
        report
    }

    /// Formats `pending` with `formatter` and delivers the result.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Format`] if the path cannot be formatted; no sink
    /// is called in that case.
    pub fn export(
        &mut self,
        pending: &PendingExport,
        formatter: &PathFormatter,
    ) -> CoreResult<ExportReport> {
        let text = formatter.format(&pending.selected, Some(pending.format))?;
        tracing::info!(format = %pending.format, "exporting selection");
        Ok(self.deliver(&text))
    }
}

impl std::fmt::Debug for ExportGateway {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names: Vec<&str> = self.sinks.iter().map(|s| s.name()).collect();
        f.debug_struct("ExportGateway").field("sinks", &names).finish()
    }
}

/// Builds the error for a sink that cannot be reached at all.
pub fn unavailable(sink: &str, detail: impl std::fmt::Display) -> CoreError {
    CoreError::Export(format!("{sink} unavailable: {detail}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::path::PathBuf;
    use std::rc::Rc;

    use crate::format::FormatCode;

    #[derive(Clone, Default)]
    struct Recorder {
        seen: Rc<RefCell<Vec<String>>>,
    }

    impl ExportSink for Recorder {
        fn name(&self) -> &str {
            "recorder"
        }

        fn deliver(&mut self, text: &str) -> CoreResult<()> {
            self.seen.borrow_mut().push(text.to_string());
            Ok(())
        }
    }

    struct Broken;

    impl ExportSink for Broken {
        fn name(&self) -> &str {
            "broken"
        }

        fn deliver(&mut self, _text: &str) -> CoreResult<()> {
            Err(unavailable("broken", "no display"))
        }
    }

    #[test]
    fn stdout_sink_appends_newline() {
        let mut sink = StdoutSink::new(Vec::new());
        sink.deliver("/home/alice/projects").unwrap();
        assert_eq!(sink.into_inner(), b"/home/alice/projects\n");
    }

    #[test]
    fn gateway_delivers_to_all_sinks_in_order() {
        let first = Recorder::default();
        let second = Recorder::default();
        let mut gateway = ExportGateway::new()
            .with_sink(Box::new(first.clone()))
            .with_sink(Box::new(second.clone()));

        let report = gateway.deliver("README.md");

        assert!(report.is_complete());
        assert_eq!(report.delivered, vec!["recorder", "recorder"]);
        assert_eq!(*first.seen.borrow(), vec!["README.md"]);
        assert_eq!(*second.seen.borrow(), vec!["README.md"]);
    }

    #[test]
    fn failing_sink_does_not_block_others() {
        let recorder = Recorder::default();
        let mut gateway = ExportGateway::new()
            .with_sink(Box::new(Broken))
            .with_sink(Box::new(recorder.clone()));

        let report = gateway.deliver("x");

        assert!(!report.is_complete());
        assert_eq!(report.failures.len(), 1);
        assert_eq!(report.failures[0].0, "broken");
        assert!(report.failures[0].1.contains("no display"));
        assert_eq!(*recorder.seen.borrow(), vec!["x"]);
    }

    #[test]
    fn empty_gateway_reports_nothing() {
        let mut gateway = ExportGateway::new();
        assert!(gateway.is_empty());
        let report = gateway.deliver("x");
        assert!(report.delivered.is_empty());
        assert!(report.is_complete());
    }

    #[cfg(unix)]
    #[test]
    fn export_formats_then_delivers() {
        let recorder = Recorder::default();
        let mut gateway = ExportGateway::new().with_sink(Box::new(recorder.clone()));
        let formatter = PathFormatter::new("/home/alice/projects")
            .with_home_dir(Some(PathBuf::from("/home/alice")));
        let pending = PendingExport {
            format: FormatCode::Relative,
            selected: PathBuf::from("/home/alice/projects/app/README.md"),
        };

        let report = gateway.export(&pending, &formatter).unwrap();

        assert_eq!(report.text, "app/README.md");
        assert_eq!(*recorder.seen.borrow(), vec!["app/README.md"]);
    }

    #[test]
    fn export_format_error_skips_sinks() {
        let recorder = Recorder::default();
        let mut gateway = ExportGateway::new().with_sink(Box::new(recorder.clone()));
        let formatter = PathFormatter::new("relative/base");
        let pending = PendingExport {
            format: FormatCode::Relative,
            selected: std::env::temp_dir().join("elsewhere"),
        };

        let err = gateway.export(&pending, &formatter).unwrap_err();

        assert!(matches!(err, CoreError::Format(_)));
        assert!(recorder.seen.borrow().is_empty());
    }
}
