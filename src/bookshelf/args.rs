use clap::error::ErrorKind;
use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;

#[derive(Parser, Debug, Default)]
#[command(name = "bookshelf")]
#[command(about = "Interactive personal library catalog", long_about = None)]
pub struct Cli {
    /// Library data file (defaults to library.json in the working directory)
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Directory holding bookshelf.json (defaults to the working directory)
    #[arg(long)]
    pub config_dir: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Parses `args`, falling back to defaults when they do not parse.
    /// `--help` and `--version` still print and exit.
    pub fn parse_or_default<I, T>(args: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        match Cli::try_parse_from(args) {
            Ok(cli) => cli,
            Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
                e.exit()
            }
            Err(e) => {
                eprintln!("Warning: {}; using defaults", e.kind());
                Cli::default()
            }
        }
    }
}
