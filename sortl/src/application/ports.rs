use std::path::Path;
use std::time::Duration;

use sortl_model::{LoadError, Sequence};

/// Supplies the lines of one named input.
pub trait LineSource {
    /// A failed load still hands back whatever was read, via [`LoadError`].
    fn load(&self, path: &Path) -> Result<Sequence, LoadError>;
}

/// Receives the user-facing output for each processed input.
pub trait Report {
    fn announce(&mut self, path: &Path) -> anyhow::Result<()>;

    fn elapsed(&mut self, elapsed: Duration) -> anyhow::Result<()>;

    fn sorted(&mut self, sequence: &Sequence) -> anyhow::Result<()>;
}
