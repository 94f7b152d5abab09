use std::path::PathBuf;

use clap::Parser;
use junkify_core::ByteLimit;

use crate::limit::parse_byte_limit;

#[derive(Parser, Debug)]
#[command(name = "junkify")]
#[command(about = "Reduces the quality of JPEG image(s) until they fit a size limit")]
#[command(long_about = None)]
#[command(version)]
pub struct Cli {
    /// The maximum image size, in bytes. Example suffixes: 1000, 1KB, 1K, 2M
    /// (the first three are equivalent)
    #[arg(
        short = 'b',
        long = "bytes-limit",
        value_name = "SIZE",
        default_value = "1MB",
        value_parser = parse_byte_limit
    )]
    pub bytes_limit: ByteLimit,

    /// The JPEG file to junkify
    #[arg(short = 'f', long = "file", value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Directory of JPEG images to junkify. Takes precedence over --file
    #[arg(long = "in-dir", value_name = "DIR")]
    pub in_dir: Option<PathBuf>,

    /// Directory to write junkified images to. Defaults to the current
    /// directory for --in-dir, and to the input's own directory for --file
    #[arg(long = "out-dir", value_name = "DIR")]
    pub out_dir: Option<PathBuf>,

    /// Number of images to process at once (defaults to one per CPU)
    #[arg(
        short = 'j',
        long = "jobs",
        value_name = "N",
        value_parser = clap::value_parser!(u16).range(1..)
    )]
    pub jobs: Option<u16>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// What the parsed flags ask for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    Directory { in_dir: PathBuf, out_dir: PathBuf },
    File { file: PathBuf, out_dir: PathBuf },
}

impl Cli {
    /// Resolve the input flags, `--in-dir` winning over `--file`.
    pub fn mode(&self) -> Option<Mode> {
        if let Some(in_dir) = &self.in_dir {
            return Some(Mode::Directory {
                in_dir: in_dir.clone(),
                out_dir: self.out_dir.clone().unwrap_or_else(|| PathBuf::from(".")),
            });
        }
        let file = self.file.clone()?;
        let out_dir = match &self.out_dir {
            Some(dir) => dir.clone(),
            None => file
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(".")),
        };
        Some(Mode::File { file, out_dir })
    }

    pub fn log_filter(&self) -> String {
        let level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };
        format!("junkify={level},junkify_core={level}")
    }
}
