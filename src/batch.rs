//! Convert every export below an input directory into a mirrored output tree.

use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use tracing::{debug, info};
use walkdir::WalkDir;

use crate::builder::StatementBuilder;
use crate::config::Config;
use crate::errors::{ConvertError, ConvertResult};
use crate::registry::Registry;
use crate::writer::write_transactions;

/// Files and transactions written by one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub files: usize,
    pub transactions: usize,
}

fn is_hidden(name: &std::ffi::OsStr) -> bool {
    name.to_str().is_some_and(|name| name.starts_with('.'))
}

/// Input files matching `<input_dir>/*/*/*.csv`, in path order.
pub fn discover(input_dir: &Path) -> ConvertResult<Vec<PathBuf>> {
    debug!("Looking for files matching '{}'", input_dir.join("*/*/*.csv").display());

    let mut paths = Vec::new();
    let walker = WalkDir::new(input_dir)
        .min_depth(1)
        .max_depth(3)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| !is_hidden(entry.file_name()));

    for entry in walker {
        let entry = entry.map_err(|e| ConvertError::Io(e.into()))?;
        let is_csv = entry.path().extension().is_some_and(|ext| ext == "csv");
        if entry.depth() == 3 && entry.file_type().is_file() && is_csv {
            paths.push(entry.into_path());
        }
    }
    Ok(paths)
}

/// Where the conversion of `file` is written: its path relative to `input_dir`, below `output_dir`.
pub fn output_path(file: &Path, input_dir: &Path, output_dir: &Path) -> ConvertResult<PathBuf> {
    let relative = file
        .strip_prefix(input_dir)
        .map_err(|_| ConvertError::OutsideInputDir(file.to_path_buf()))?;
    Ok(output_dir.join(relative))
}

/// Convert one file and write the result. Returns the number of transactions.
pub fn convert_file(
    file: &Path,
    input_dir: &Path,
    output_dir: &Path,
    registry: &Registry,
) -> ConvertResult<usize> {
    let format = registry.lookup(file)?;
    info!("Handling file '{}' as {}", file.display(), format.tag);

    let transactions = StatementBuilder::new()
        .filename(file)
        .format(format)
        .parse()?;

    let out_path = output_path(file, input_dir, output_dir)?;
    if let Some(parent) = out_path.parent() {
        fs::create_dir_all(parent).map_err(|e| ConvertError::from(e).in_file(parent))?;
    }

    info!("Writing {} transaction(s) to '{}'", transactions.len(), out_path.display());
    let output = File::create(&out_path).map_err(|e| ConvertError::from(e).in_file(&out_path))?;
    write_transactions(BufWriter::new(output), &transactions).map_err(|e| e.in_file(&out_path))?;

    Ok(transactions.len())
}

/// Convert every discovered file. The first failure aborts the run.
pub fn run(config: &Config, registry: &Registry) -> ConvertResult<BatchSummary> {
    let mut summary = BatchSummary::default();

    for file in discover(&config.input_dir)? {
        summary.transactions += convert_file(&file, &config.input_dir, &config.output_dir, registry)?;
        summary.files += 1;
    }

    info!(
        files = summary.files,
        transactions = summary.transactions,
        "Finished"
    );
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn touch(root: &Path, relative: &str) {
        let path = root.join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "").unwrap();
    }

    #[test]
    fn test_discover_two_levels_deep() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        touch(root, "smbc_v2/main/b.csv");
        touch(root, "smbc_v2/main/a.csv");
        touch(root, "dkb_giro_v1/2025/jan.csv");
        touch(root, "top.csv");
        touch(root, "smbc_v2/one_level.csv");
        touch(root, "smbc_v2/main/deeper/too_deep.csv");
        touch(root, "smbc_v2/main/notes.txt");
        touch(root, "smbc_v2/main/upper.CSV");
        touch(root, "smbc_v2/.hidden/x.csv");
        touch(root, "smbc_v2/main/.~lock.csv");

        let found: Vec<PathBuf> = discover(root)
            .unwrap()
            .into_iter()
            .map(|p| p.strip_prefix(root).unwrap().to_path_buf())
            .collect();

        assert_eq!(
            found,
            [
                PathBuf::from("dkb_giro_v1/2025/jan.csv"),
                PathBuf::from("smbc_v2/main/a.csv"),
                PathBuf::from("smbc_v2/main/b.csv"),
            ]
        );
    }

    #[test]
    fn test_discover_missing_dir() {
        let result = discover(Path::new("/nonexistent/statement/input"));
        assert!(matches!(result, Err(ConvertError::Io(_))));
    }

    #[rstest]
    #[case("in/smbc_v2/main/a.csv", "in", "out", "out/smbc_v2/main/a.csv")]
    #[case("/data/in/dkb_giro_v1/2025/jan.csv", "/data/in", "/data/out", "/data/out/dkb_giro_v1/2025/jan.csv")]
    fn test_output_path(#[case] file: &str, #[case] input: &str, #[case] output: &str, #[case] expected: &str) {
        let path = output_path(Path::new(file), Path::new(input), Path::new(output)).unwrap();
        assert_eq!(path, PathBuf::from(expected));
    }

    #[test]
    fn test_output_path_outside_input() {
        let result = output_path(Path::new("elsewhere/a.csv"), Path::new("in"), Path::new("out"));
        assert!(matches!(result, Err(ConvertError::OutsideInputDir(p)) if p == PathBuf::from("elsewhere/a.csv")));
    }

    #[test]
    fn test_run_unknown_format_aborts() {
        let dir = tempfile::tempdir().unwrap();
        let input_dir = dir.path().join("in");
        touch(&input_dir, "mystery_bank/main/a.csv");

        let config = Config {
            input_dir,
            output_dir: dir.path().join("out"),
        };
        let result = run(&config, Registry::builtin());
        assert!(matches!(result, Err(ConvertError::UnknownFormat(_))));
        assert!(!dir.path().join("out").exists());
    }

    #[test]
    fn test_run_empty_input() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config {
            input_dir: dir.path().to_path_buf(),
            output_dir: dir.path().join("out"),
        };
        assert_eq!(run(&config, Registry::builtin()).unwrap(), BatchSummary::default());
    }
}
