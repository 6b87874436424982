use bookshelf::config::LibraryConfig;
use bookshelf::error::Result;
use bookshelf::store::fs::FileStore;
use std::io;
use std::path::PathBuf;

mod args;
mod cli;
use args::Cli;
use cli::Session;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let args = Cli::parse_or_default(std::env::args_os());
    init_logging(args.verbose);

    let config_dir = args
        .config_dir
        .clone()
        .unwrap_or_else(|| PathBuf::from("."));
    let config = LibraryConfig::load(&config_dir)
        .unwrap_or_else(|e| {
            log::warn!(
                "Ignoring unreadable config in {}: {}",
                config_dir.display(),
                e
            );
            LibraryConfig::default()
        })
        .with_data_file(args.file);
    log::debug!("Using data file {}", config.data_file.display());

    let store = FileStore::new(config.data_file);
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(store, stdin.lock(), stdout.lock());
    session.run()
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}
