use std::path::{Path, PathBuf};

use sortl_model::{LoadError, Sequence};

use crate::{application::ports::LineSource, config::Config};

/// An adapter that implements the `LineSource` port by reading files from
/// disk. Relative paths are resolved against the configured input directory.
pub struct FileLineSource {
    input_dir: PathBuf,
}

impl FileLineSource {
    pub fn new(config: &Config) -> Self {
        Self {
            input_dir: config.driver.input_dir.clone(),
        }
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        self.input_dir.join(path)
    }
}

impl LineSource for FileLineSource {
    fn load(&self, path: &Path) -> Result<Sequence, LoadError> {
        let resolved = self.resolve(path);
        tracing::debug!("Reading lines from {:?}", resolved);
        Sequence::load(resolved)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn source_in(dir: &Path) -> FileLineSource {
        let mut config = Config::default();
        config.driver.input_dir = dir.to_path_buf();
        FileLineSource::new(&config)
    }

    #[test]
    fn reads_relative_to_input_dir() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        std::fs::write(dir.path().join("data.txt"), "b\na\n")?;

        let sequence = source_in(dir.path()).load(Path::new("data.txt"))?;
        assert_eq!(sequence.lines(), ["b", "a"]);
        Ok(())
    }

    #[test]
    fn absolute_paths_ignore_input_dir() -> anyhow::Result<()> {
        let data_dir = tempfile::tempdir()?;
        let file_path = data_dir.path().join("abs.txt");
        std::fs::write(&file_path, "x\n")?;

        let other_dir = tempfile::tempdir()?;
        let sequence = source_in(other_dir.path()).load(&file_path)?;
        assert_eq!(sequence.lines(), ["x"]);
        Ok(())
    }

    #[test]
    fn missing_file_is_a_load_error() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let err = source_in(dir.path())
            .load(Path::new("bestCase.txt"))
            .unwrap_err();
        assert_eq!(err.path(), dir.path().join("bestCase.txt"));
        assert!(err.partial().is_empty());
        Ok(())
    }
}
