use std::io::Write;
use std::path::Path;
use std::time::Duration;

use sortl_model::Sequence;

use crate::application::ports::Report;

/// An adapter that implements the `Report` port as plain text lines.
pub struct ConsoleReport<W: Write> {
    out: W,
}

impl<W: Write> ConsoleReport<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Report for ConsoleReport<W> {
    fn announce(&mut self, path: &Path) -> anyhow::Result<()> {
        writeln!(self.out, "Reading from {}", path.display())?;
        Ok(())
    }

    fn elapsed(&mut self, elapsed: Duration) -> anyhow::Result<()> {
        writeln!(
            self.out,
            "Elapsed time for Array sorting: {} seconds",
            elapsed.as_secs_f64()
        )?;
        Ok(())
    }

    fn sorted(&mut self, sequence: &Sequence) -> anyhow::Result<()> {
        writeln!(self.out, "Sorted list for Array:")?;
        for line in sequence {
            writeln!(self.out, "{line}")?;
        }
        // Each file's report is complete before the next file starts.
        self.out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::application::{job::Job, service::SortService};
    use crate::config::Config;
    use crate::infrastructure::file_source::FileLineSource;

    fn output(report: ConsoleReport<Vec<u8>>) -> anyhow::Result<String> {
        Ok(String::from_utf8(report.into_inner())?)
    }

    #[test]
    fn writes_report_lines() -> anyhow::Result<()> {
        let mut report = ConsoleReport::new(Vec::new());
        report.announce(Path::new("data.txt"))?;
        report.elapsed(Duration::from_millis(1500))?;
        report.sorted(&Sequence::from_lines(["a", "b"]))?;

        assert_eq!(
            output(report)?,
            "Reading from data.txt\n\
             Elapsed time for Array sorting: 1.5 seconds\n\
             Sorted list for Array:\n\
             a\n\
             b\n"
        );
        Ok(())
    }

    #[test]
    fn empty_sequence_prints_header_only() -> anyhow::Result<()> {
        let mut report = ConsoleReport::new(Vec::new());
        report.sorted(&Sequence::new())?;
        assert_eq!(output(report)?, "Sorted list for Array:\n");
        Ok(())
    }

    #[test]
    fn default_files_end_to_end() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        std::fs::write(dir.path().join("bestCase.txt"), "apple\nbanana\ncherry\n")?;
        std::fs::write(dir.path().join("worstCase.txt"), "cherry\napple\nbanana\n")?;

        let mut config = Config::default();
        config.driver.input_dir = dir.path().to_path_buf();
        let jobs = crate::application::job::plan_jobs(&config.driver);

        let source = FileLineSource::new(&config);
        let mut service = SortService::new(source, ConsoleReport::new(Vec::new()), false);
        service.run(&jobs)?;

        assert_eq!(
            output(service.into_report())?,
            "Sorted list for Array:\napple\nbanana\ncherry\n\
             Sorted list for Array:\napple\nbanana\ncherry\n"
        );
        Ok(())
    }

    #[test]
    fn named_missing_file_still_reports() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let mut config = Config::default();
        config.driver.input_dir = dir.path().to_path_buf();
        config.driver.timing = true;

        let source = FileLineSource::new(&config);
        let report = ConsoleReport::new(Vec::new());
        let mut service = SortService::new(source, report, config.driver.timing);
        service.run(&[Job {
            path: "nope.txt".into(),
            announce: true,
        }])?;

        let text = output(service.into_report())?;
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "Reading from nope.txt");
        assert!(lines[1].starts_with("Elapsed time for Array sorting: "));
        assert!(lines[1].ends_with(" seconds"));
        assert_eq!(lines[2], "Sorted list for Array:");
        Ok(())
    }
}
