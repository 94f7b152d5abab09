//! File-level work: pick inputs, reduce each one, write the result.
//!
//! Every input is an independent job. Directory runs fan the jobs out over
//! a rayon pool and collect exactly one outcome per file; a failure is
//! logged and never stops the other files. Directory entries without a JPEG
//! extension are skipped up front and never count as failures.

use std::ffi::OsStr;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use junkify_core::{reduce_jpeg, ByteLimit, Quality};
use rayon::prelude::*;
use tracing::{debug, error, info, warn};
use walkdir::WalkDir;

/// Counts of what a run did.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub processed: usize,
    pub failed: usize,
    pub skipped: usize,
}

impl Summary {
    pub fn is_success(&self) -> bool {
        self.failed == 0
    }
}

/// Whether the file name carries a JPEG extension (`.jpg`/`.jpeg`, any case).
pub fn is_jpeg(path: &Path) -> bool {
    path.extension()
        .and_then(OsStr::to_str)
        .is_some_and(|ext| ext.eq_ignore_ascii_case("jpg") || ext.eq_ignore_ascii_case("jpeg"))
}

/// `<out_dir>/<file name>_quality_<N>.jpg`
pub fn output_path(out_dir: &Path, file_name: &OsStr, quality: Quality) -> PathBuf {
    let mut name = file_name.to_os_string();
    name.push(format!("_quality_{quality}.jpg"));
    out_dir.join(name)
}

/// Top-level entries of `dir` that are not directories, sorted by name.
pub fn collect_inputs(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut inputs = Vec::new();
    for entry in WalkDir::new(dir).min_depth(1).max_depth(1).sort_by_file_name() {
        let entry = entry.with_context(|| format!("reading input directory {}", dir.display()))?;
        if !entry.file_type().is_dir() {
            inputs.push(entry.into_path());
        }
    }
    Ok(inputs)
}

/// Shrink one file and write it next to its siblings in `out_dir`.
///
/// Returns the path written. Existing files are never overwritten.
pub fn reduce_file(input: &Path, out_dir: &Path, limit: ByteLimit) -> Result<PathBuf> {
    if !is_jpeg(input) {
        bail!("{} is not a jpeg", input.display());
    }
    let file_name = input
        .file_name()
        .with_context(|| format!("{} has no file name", input.display()))?;

    let reader = File::open(input)
        .with_context(|| format!("opening input file {}", input.display()))?;
    let result = reduce_jpeg(reader, limit)
        .with_context(|| format!("error shrinking {}", input.display()))?;
    debug!(
        input = %input.display(),
        quality = result.quality().value(),
        size = result.len(),
        untouched = result.is_original(),
        "reduced"
    );

    let output = output_path(out_dir, file_name, result.quality());
    write_new_file(&output, |file| file.write_all(result.bytes()))?;

    Ok(output)
}

/// Create `path` (never replacing an existing file) and fill it. A failed
/// fill removes the partial file again.
fn write_new_file(path: &Path, fill: impl FnOnce(&mut File) -> io::Result<()>) -> Result<()> {
    let mut file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .with_context(|| format!("opening output to save {}", path.display()))?;

    if let Err(err) = fill(&mut file) {
        drop(file);
        if let Err(cleanup) = fs::remove_file(path) {
            warn!(path = %path.display(), "removing partial output: {cleanup}");
        }
        return Err(err).with_context(|| format!("writing output file {}", path.display()));
    }
    Ok(())
}

/// Reduce every input, reporting each outcome as it completes.
pub fn reduce_all(inputs: &[PathBuf], out_dir: &Path, limit: ByteLimit) -> Summary {
    inputs
        .par_iter()
        .map(|input| report(input, reduce_file(input, out_dir, limit)))
        .reduce(Summary::default, |a, b| Summary {
            processed: a.processed + b.processed,
            failed: a.failed + b.failed,
            skipped: a.skipped + b.skipped,
        })
}

/// Reduce every JPEG at the top level of `in_dir`, skipping other files.
pub fn reduce_directory(in_dir: &Path, out_dir: &Path, limit: ByteLimit) -> Result<Summary> {
    let (inputs, others): (Vec<_>, Vec<_>) =
        collect_inputs(in_dir)?.into_iter().partition(|path| is_jpeg(path));
    for path in &others {
        info!(path = %path.display(), "not a jpeg, skipping");
    }

    fs::create_dir_all(out_dir)
        .with_context(|| format!("creating output directory {}", out_dir.display()))?;
    info!(
        count = inputs.len(),
        skipped = others.len(),
        dir = %in_dir.display(),
        limit = limit.get(),
        "reducing directory"
    );
    Ok(Summary {
        skipped: others.len(),
        ..reduce_all(&inputs, out_dir, limit)
    })
}

fn report(input: &Path, outcome: Result<PathBuf>) -> Summary {
    match outcome {
        Ok(output) => {
            println!("processed {} to {}", input.display(), output.display());
            Summary {
                processed: 1,
                ..Summary::default()
            }
        }
        Err(err) => {
            error!("{err:#}");
            Summary {
                failed: 1,
                ..Summary::default()
            }
        }
    }
}
