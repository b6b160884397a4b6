use humansize::{BINARY, format_size};
use jwalk::{Parallelism, WalkDir};
use std::path::Path;

const BYTES_PER_MB: f64 = 1_048_576.0;

/// Disk usage of one directory tree. `skipped` counts entries that could
/// not be read or stat'ed and are therefore missing from `size`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Measurement {
    pub size: u64,
    pub skipped: usize,
}

impl Measurement {
    pub fn size_mb(&self) -> f64 {
        to_megabytes(self.size)
    }

    pub fn display_size(&self) -> String {
        format_size(self.size, BINARY)
    }
}

/// Megabytes rounded to two decimal places.
pub(crate) fn to_megabytes(bytes: u64) -> f64 {
    #[allow(clippy::cast_precision_loss)]
    let megabytes = bytes as f64 / BYTES_PER_MB;
    (megabytes * 100.0).round() / 100.0
}

/// Sums the byte sizes of every regular file under `path`.
///
/// Unreadable entries (permission islands, entries racing with external
/// deletion) are excluded from the sum and tallied in `skipped` instead
/// of aborting the measurement. Read-only; never errors.
pub fn measure(path: &Path) -> Measurement {
    let mut measurement = Measurement::default();

    // Use serial execution for individual tree measurement to avoid
    // resource exhaustion when many trees are measured concurrently.
    for entry in WalkDir::new(path)
        .skip_hidden(false)
        .parallelism(Parallelism::Serial)
    {
        match entry {
            Ok(entry) => match entry.metadata() {
                Ok(metadata) => {
                    if metadata.is_file() {
                        measurement.size += metadata.len();
                    }
                }
                Err(_) => measurement.skipped += 1,
            },
            Err(_) => measurement.skipped += 1,
        }
    }

    measurement
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use std::fs::{self, File};
    use std::io::Write;
    use std::path::PathBuf;
    use tempfile::tempdir;

    #[test]
    fn sums_nested_files() -> Result<()> {
        let dir = tempdir()?;
        let root = dir.path();

        let mut f1 = File::create(root.join("index"))?;
        f1.write_all(&[0u8; 1000])?;

        let nested = root.join("js").join("index");
        fs::create_dir_all(&nested)?;
        let mut f2 = File::create(nested.join("data_0"))?;
        f2.write_all(&[0u8; 2000])?;

        let measurement = measure(root);
        assert_eq!(measurement.size, 3000);
        assert_eq!(measurement.skipped, 0);
        Ok(())
    }

    #[test]
    fn rounds_to_two_decimals() -> Result<()> {
        let dir = tempdir()?;

        let mut file = File::create(dir.path().join("blob"))?;
        file.write_all(&vec![0u8; 1_572_864])?;

        assert_eq!(measure(dir.path()).size_mb(), 1.5);
        Ok(())
    }

    #[test]
    fn empty_directory_is_zero() -> Result<()> {
        let dir = tempdir()?;
        let measurement = measure(dir.path());
        assert_eq!(measurement.size, 0);
        assert_eq!(measurement.size_mb(), 0.0);
        Ok(())
    }

    #[test]
    fn adding_a_file_never_shrinks_the_sum() -> Result<()> {
        let dir = tempdir()?;

        let mut f1 = File::create(dir.path().join("f_000001"))?;
        f1.write_all(&[0u8; 500])?;
        let before = measure(dir.path());

        let mut f2 = File::create(dir.path().join("f_000002"))?;
        f2.write_all(&[0u8; 1])?;
        let after = measure(dir.path());

        assert!(after.size >= before.size);
        Ok(())
    }

    #[test]
    fn missing_path_reports_skip() {
        let path = PathBuf::from("/path/to/non/existent/cachesweep_test_random_12345");
        let measurement = measure(&path);
        assert_eq!(measurement.size, 0);
        assert!(measurement.skipped >= 1);
    }
}
