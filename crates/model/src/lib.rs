pub mod error;
pub mod lines;
pub mod sequence;

pub use error::LoadError;
pub use lines::{Case, LineGenerator};
pub use sequence::Sequence;

use std::io::Write;
use std::path::{Path, PathBuf};

/// Writes one data file per case into `out_dir`.
///
/// Every case holds the same `count` lines, arranged per case. Files that
/// already exist are kept as they are. Returns the paths that were written.
pub fn generate_data(
    out_dir: &Path,
    cases: impl IntoIterator<Item = Case>,
    count: usize,
    seed: Option<u64>,
) -> anyhow::Result<Vec<PathBuf>> {
    let generator = match seed {
        Some(seed) => LineGenerator::seeded(seed),
        None => LineGenerator::new(),
    };
    let pool: Vec<String> = generator.take(count).collect();

    let mut written = vec![];
    for case in cases {
        let file_path = out_dir.join(case.file_name());
        let file = match std::fs::File::create_new(&file_path) {
            Ok(file) => file,
            Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists => continue,
            Err(e) => return Err(e.into()),
        };
        let arranged = lines::arrange(case, pool.clone());
        write_lines(std::io::BufWriter::new(file), &arranged)?;
        written.push(file_path);
    }

    Ok(written)
}

/// Writes each line followed by `\n`.
pub fn write_lines<W: Write>(mut writer: W, lines: &[String]) -> anyhow::Result<()> {
    for line in lines {
        writeln!(writer, "{line}")?;
    }
    writer.flush()?;
    Ok(())
}
