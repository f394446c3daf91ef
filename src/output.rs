use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;

pub const REPORT_FILE_NAME: &str = "lab_report.html";
pub const REPORT_MIME: &str = "text/html";
pub const SUMMARY_FILE_NAME: &str = "lab_report.summary.json";

#[derive(Debug, Error)]
pub enum OutputError {
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to encode summary: {0}")]
    Encode(#[from] serde_json::Error),
}

pub fn write_report(out_dir: &Path, html: &str) -> Result<PathBuf, OutputError> {
    let path = out_dir.join(REPORT_FILE_NAME);
    write_text(out_dir, &path, html)?;
    Ok(path)
}

pub fn write_summary(out_dir: &Path, summary: &serde_json::Value) -> Result<PathBuf, OutputError> {
    let path = out_dir.join(SUMMARY_FILE_NAME);
    let text = serde_json::to_string_pretty(summary)?;
    write_text(out_dir, &path, &text)?;
    Ok(path)
}

pub fn write_stdout(html: &str) -> Result<(), OutputError> {
    let stdout = io::stdout();
    let mut lock = stdout.lock();
    lock.write_all(html.as_bytes())
        .and_then(|_| lock.flush())
        .map_err(|source| OutputError::Write {
            path: PathBuf::from("<stdout>"),
            source,
        })
}

fn write_text(out_dir: &Path, path: &Path, text: &str) -> Result<(), OutputError> {
    let wrap = |source| OutputError::Write {
        path: path.to_path_buf(),
        source,
    };
    fs::create_dir_all(out_dir).map_err(wrap)?;
    let mut w = BufWriter::new(File::create(path).map_err(wrap)?);
    w.write_all(text.as_bytes()).map_err(wrap)?;
    w.flush().map_err(wrap)
}

#[cfg(test)]
#[path = "../tests/src_inline/output.rs"]
mod tests;
