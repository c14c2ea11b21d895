// SPDX-License-Identifier: Apache-2.0

//! Print the title of a feed document followed by the title of each entry.
//!
//! ```text
//! jsondoc-demo demos/testdata/example.json
//! ```

use std::error::Error;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use jsondoc::{ParserConfig, Value};
use log::{info, warn};

#[derive(Parser)]
#[command(name = "jsondoc-demo")]
#[command(about = "Print the title and entry titles of a JSON document", long_about = None)]
#[command(version)]
struct Cli {
    /// Accept comments, trailing commas, NaN/Infinity and big unsigned integers
    #[arg(long)]
    lenient: bool,

    /// Maximum nesting depth of arrays and objects
    #[arg(long, default_value_t = jsondoc::DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    /// JSON file to read
    file: PathBuf,
}

impl Cli {
    fn config(&self) -> ParserConfig {
        let base = if self.lenient {
            ParserConfig::lenient()
        } else {
            ParserConfig::strict()
        };
        base.with_max_depth(self.max_depth)
    }
}

fn print_titles(root: &Value) -> Result<(), Box<dyn Error>> {
    let title = root.get("title").ok_or("document has no \"title\"")?;
    println!("title: {}", title.as_str()?);

    let Some(entries) = root.get("entries") else {
        warn!("document has no \"entries\"");
        return Ok(());
    };
    for (index, entry) in entries.array_iter()?.enumerate() {
        match entry.get("title") {
            Some(title) => println!("{}", title.as_str()?),
            None => info!("entry {index} has no title"),
        }
    }
    Ok(())
}

fn run(cli: &Cli) -> Result<(), Box<dyn Error>> {
    let document = jsondoc::read_file_with_config(&cli.file, &cli.config())?;
    info!(
        "read {} bytes from {}",
        document.bytes_read(),
        cli.file.display()
    );
    print_titles(document.root())
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}: {e}", cli.file.display());
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_flags() {
        let cli = Cli::parse_from(["jsondoc-demo", "--lenient", "--max-depth", "4", "in.json"]);
        let config = cli.config();
        assert_eq!(config.max_depth(), 4);
        assert!(config.is_allow_comments());
        assert_eq!(cli.file, PathBuf::from("in.json"));
    }

    #[test]
    fn test_cli_defaults_are_strict() {
        let cli = Cli::parse_from(["jsondoc-demo", "in.json"]);
        assert_eq!(cli.config(), ParserConfig::default());
    }

    #[test]
    fn test_print_titles_of_example() {
        let path = concat!(env!("CARGO_MANIFEST_DIR"), "/testdata/example.json");
        let document = jsondoc::read_file(path).unwrap();
        print_titles(document.root()).unwrap();
    }

    #[test]
    fn test_print_titles_requires_title() {
        let root = jsondoc::parse(br#"{"entries": []}"#).unwrap();
        assert!(print_titles(&root).is_err());

        let root = jsondoc::parse(br#"{"title": 1}"#).unwrap();
        assert!(print_titles(&root).is_err());
    }
}
