use std::path::PathBuf;

use crate::config::DriverConfig;

/// One input file to process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Job {
    pub path: PathBuf,
    /// Print `Reading from <path>` before the file's report.
    pub announce: bool,
}

/// Explicitly named files in the order given, or else every default file
/// exactly once.
pub fn plan_jobs(driver: &DriverConfig) -> Vec<Job> {
    if driver.files.is_empty() {
        driver
            .default_files
            .iter()
            .map(|path| Job {
                path: path.clone(),
                announce: false,
            })
            .collect()
    } else {
        driver
            .files
            .iter()
            .map(|path| Job {
                path: path.clone(),
                announce: true,
            })
            .collect()
    }
}
