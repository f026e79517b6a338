use std::time::Instant;

use sortl_engine::MergeSorter;

use super::job::Job;
use super::ports::{LineSource, Report};

/// The main application service: load, sort, report, one file at a time.
/// It is generic over the LineSource and Report traits, allowing for
/// dependency injection.
pub struct SortService<S: LineSource, R: Report> {
    source: S,
    report: R,
    timing: bool,
    sorter: MergeSorter<String>,
}

impl<S: LineSource, R: Report> SortService<S, R> {
    /// Creates a new service with concrete implementations of the ports.
    pub fn new(source: S, report: R, timing: bool) -> Self {
        Self {
            source,
            report,
            timing,
            sorter: MergeSorter::new(),
        }
    }

    /// Processes every job in order. An unreadable input is logged and
    /// reported with the lines read before the failure; only report
    /// failures stop the run.
    pub fn run(&mut self, jobs: &[Job]) -> anyhow::Result<()> {
        tracing::info!(files = jobs.len(), timing = self.timing, "Starting sort run");
        for job in jobs {
            self.process(job)?;
        }
        tracing::info!("Sort run finished");
        Ok(())
    }

    #[cfg(test)]
    pub fn into_report(self) -> R {
        self.report
    }

    fn process(&mut self, job: &Job) -> anyhow::Result<()> {
        let span = tracing::info_span!("file", path = %job.path.display());
        let _guard = span.enter();

        if job.announce {
            self.report.announce(&job.path)?;
        }

        let mut sequence = match self.source.load(&job.path) {
            Ok(sequence) => sequence,
            Err(e) => {
                tracing::error!(
                    error = %e.io_error(),
                    partial = e.partial().len(),
                    "{e}, continuing with the lines read so far"
                );
                e.into_partial()
            }
        };
        tracing::debug!(lines = sequence.len(), "Input loaded");

        let start = Instant::now();
        sequence.sort_with(&mut self.sorter);
        let elapsed = start.elapsed();
        tracing::info!(lines = sequence.len(), ?elapsed, "Input sorted");

        if self.timing {
            self.report.elapsed(elapsed)?;
        }
        self.report.sorted(&sequence)?;

        Ok(())
    }
}
