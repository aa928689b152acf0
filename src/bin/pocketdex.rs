//! `pocketdex` is an in-memory document store with a full-text index.
//!
//! Statements are read from the files named on the command line, or from
//! standard input when there are none:
//!
//! ```text
//! CREATE docs;
//! INSERT docs "The quick brown fox";
//! SEARCH docs WHERE "quick" <2 "fox";
//! PRINT_INDEX docs;
//! ```
//!
//! Logging goes to stderr and is filtered with `RUST_LOG`.

use argparse::{ArgumentParser, Collect, StoreTrue};
use pocketdex::run;
use tracing_subscriber::EnvFilter;

fn main() {
    let mut verbose = false;
    let mut quiet = false;
    let mut scripts = vec![];

    {
        let mut ap = ArgumentParser::new();
        ap.set_description("Keep documents in memory and search them by word.");
        _ = ap.refer(&mut verbose).add_option(
            &["-v", "--verbose"],
            StoreTrue,
            "Log every statement and document to stderr.",
        );
        _ = ap.refer(&mut quiet).add_option(
            &["-q", "--quiet"],
            StoreTrue,
            "Don't print the banner when reading from standard input.",
        );
        _ = ap.refer(&mut scripts).add_argument(
            "scripts",
            Collect,
            "Files of statements to run, in order. \
                With none, statements are read from standard input.",
        );
        ap.parse_args_or_exit();
    }

    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match run(scripts, quiet) {
        Ok(()) => {}
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(1);
        }
    }
}
