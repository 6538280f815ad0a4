//! graythresh-cli - Batch processing of PNG directories
//!
//! [`run_batch`] applies every selected [`Algorithm`] to every PNG file in
//! an input directory and writes the results to
//! `<output>/<algorithm name>/<file name>`. A file that fails is logged and
//! recorded in the [`BatchReport`]; the batch carries on with the next one.

mod error;

pub use error::{BatchError, BatchResult};

use graythresh::Algorithm;
use graythresh::io::{is_png_path, read_image, write_image};
use std::fs;
use std::path::{Path, PathBuf};

/// What to process and where to put it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchConfig {
    /// Directory scanned for `*.png` files (not recursive)
    pub input_dir: PathBuf,
    /// Root of the per-algorithm output directories
    pub output_dir: PathBuf,
    /// Algorithms to apply, in order
    pub algorithms: Vec<Algorithm>,
}

impl BatchConfig {
    /// Config applying every algorithm.
    pub fn new(input_dir: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            input_dir: input_dir.into(),
            output_dir: output_dir.into(),
            algorithms: Algorithm::ALL.to_vec(),
        }
    }

    /// Output directory for one algorithm.
    pub fn algorithm_dir(&self, algorithm: Algorithm) -> PathBuf {
        self.output_dir.join(algorithm.name())
    }
}

/// One file that could not be processed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchFailure {
    /// Input file
    pub path: PathBuf,
    /// Algorithm that failed; `None` when the file could not be decoded
    pub algorithm: Option<Algorithm>,
    /// Error text
    pub message: String,
}

/// Outcome of a batch run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchReport {
    /// PNG files found in the input directory
    pub files: usize,
    /// Output images written
    pub written: usize,
    /// Per-file failures, in processing order
    pub failures: Vec<BatchFailure>,
}

impl BatchReport {
    /// True when nothing failed.
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }
}

/// PNG files directly inside `dir`, sorted by path.
pub fn collect_png_files(dir: &Path) -> BatchResult<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(BatchError::MissingInput(dir.to_path_buf()));
    }
    let entries = fs::read_dir(dir).map_err(|source| BatchError::ReadDir {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| BatchError::ReadDir {
            path: dir.to_path_buf(),
            source,
        })?;
        let path = entry.path();
        if path.is_file() && is_png_path(&path) {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Apply every configured algorithm to every PNG in the input directory.
///
/// # Errors
///
/// Fails before processing any file if no algorithm is selected, the input
/// directory cannot be listed, or an output directory cannot be created.
pub fn run_batch(config: &BatchConfig) -> BatchResult<BatchReport> {
    if config.algorithms.is_empty() {
        return Err(BatchError::NoAlgorithms);
    }
    let files = collect_png_files(&config.input_dir)?;
    for &algorithm in &config.algorithms {
        let dir = config.algorithm_dir(algorithm);
        fs::create_dir_all(&dir).map_err(|source| BatchError::CreateDir { path: dir, source })?;
    }

    log::info!(
        "{} file(s) in {}, {} algorithm(s)",
        files.len(),
        config.input_dir.display(),
        config.algorithms.len()
    );

    let mut report = BatchReport {
        files: files.len(),
        ..Default::default()
    };
    for path in &files {
        process_file(config, path, &mut report);
    }
    Ok(report)
}

fn process_file(config: &BatchConfig, path: &Path, report: &mut BatchReport) {
    let raster = match read_image(path) {
        Ok(raster) => raster,
        Err(e) => {
            log::warn!("skipping {}: {}", path.display(), e);
            report.failures.push(BatchFailure {
                path: path.to_path_buf(),
                algorithm: None,
                message: e.to_string(),
            });
            return;
        }
    };
    // collect_png_files only yields paths with a file name
    let Some(name) = path.file_name() else {
        return;
    };

    for &algorithm in &config.algorithms {
        let target = config.algorithm_dir(algorithm).join(name);
        let result = algorithm
            .apply(&raster)
            .map_err(|e| e.to_string())
            .and_then(|out| write_image(&out, &target).map_err(|e| e.to_string()));
        match result {
            Ok(()) => {
                log::info!("{} -> {}", path.display(), target.display());
                report.written += 1;
            }
            Err(message) => {
                log::warn!("{} on {}: {}", algorithm, path.display(), message);
                report.failures.push(BatchFailure {
                    path: path.to_path_buf(),
                    algorithm: Some(algorithm),
                    message,
                });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use graythresh::Raster;

    #[test]
    fn test_default_config_has_every_algorithm() {
        let config = BatchConfig::new("in", "out");
        assert_eq!(config.algorithms.len(), Algorithm::ALL.len());
        assert_eq!(config.algorithm_dir(Algorithm::Median), PathBuf::from("out/median"));
    }

    #[test]
    fn test_missing_input_dir() {
        let tmp = tempfile::tempdir().unwrap();
        let config = BatchConfig::new(tmp.path().join("nope"), tmp.path().join("out"));
        assert!(matches!(run_batch(&config), Err(BatchError::MissingInput(_))));
    }

    #[test]
    fn test_no_algorithms() {
        let tmp = tempfile::tempdir().unwrap();
        let mut config = BatchConfig::new(tmp.path(), tmp.path().join("out"));
        config.algorithms.clear();
        assert!(matches!(run_batch(&config), Err(BatchError::NoAlgorithms)));
    }

    #[test]
    fn test_collect_sorted_png_only() {
        let tmp = tempfile::tempdir().unwrap();
        let raster = Raster::new_filled(4, 4, 10).unwrap();
        for name in ["b.png", "a.PNG", "c.txt"] {
            write_image(&raster, tmp.path().join(name)).unwrap();
        }
        let files = collect_png_files(tmp.path()).unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, ["a.PNG", "b.png"]);
    }

    #[test]
    fn test_corrupt_file_recorded() {
        let tmp = tempfile::tempdir().unwrap();
        let input = tmp.path().join("in");
        fs::create_dir(&input).unwrap();
        fs::write(input.join("bad.png"), b"not a png").unwrap();
        let raster = Raster::from_fn(20, 20, |x, y| (x * 12 + y) as u8).unwrap();
        write_image(&raster, input.join("good.png")).unwrap();

        let config = BatchConfig {
            input_dir: input,
            output_dir: tmp.path().join("out"),
            algorithms: vec![Algorithm::Otsu, Algorithm::Minimum],
        };
        let report = run_batch(&config).unwrap();
        assert_eq!(report.files, 2);
        assert_eq!(report.written, 2);
        assert_eq!(report.failures.len(), 1);
        assert_eq!(report.failures[0].algorithm, None);
        assert!(config.algorithm_dir(Algorithm::Otsu).join("good.png").is_file());
        assert!(!config.algorithm_dir(Algorithm::Minimum).join("bad.png").exists());
    }
}
