//! Command-line argument definition.

use std::path::PathBuf;

use clap::Parser;

use crate::logic::PAGE_SIZES;

/// clonedeck - pick the disks and configuration profiles of an instance to clone
#[derive(Parser, Debug, Default)]
#[command(name = "clonedeck")]
#[command(version)]
#[command(about = "Pick the disks and configuration profiles of an instance to clone", long_about = None)]
pub struct Args {
    /// Instance whose disks and configurations are listed
    pub instance_id: Option<u64>,

    /// Read disks, configurations and images from a JSON file instead of the API
    #[arg(long, value_name = "PATH")]
    pub fixture: Option<PathBuf>,

    /// API root (default from settings.conf, then https://api.linode.com/v4)
    #[arg(long, value_name = "URL")]
    pub api_url: Option<String>,

    /// Rows per page in the disk and image tables (25, 50, 75 or 100)
    #[arg(long, value_parser = parse_page_size)]
    pub page_size: Option<usize>,

    /// Print every image and exit without starting the TUI
    #[arg(long)]
    pub list_images: bool,

    /// Set the logging level (trace, debug, info, warn, error)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Enable verbose output (equivalent to --log-level debug)
    #[arg(short, long)]
    pub verbose: bool,
}

/// What: Validate a `--page-size` value.
///
/// Inputs:
/// - `s`: Raw argument.
///
/// Output:
/// - The size when it is one of the offered page sizes.
///
/// # Errors
/// - Returns a message listing the accepted sizes otherwise.
fn parse_page_size(s: &str) -> Result<usize, String> {
    let n: usize = s
        .trim()
        .parse()
        .map_err(|_| format!("'{s}' is not a number"))?;
    if PAGE_SIZES.contains(&n) {
        Ok(n)
    } else {
        Err(format!("page size must be one of {PAGE_SIZES:?}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Positional instance id and flags parse
    fn args_parse_full_command_line() {
        let args = Args::try_parse_from([
            "clonedeck",
            "123",
            "--fixture",
            "fx.json",
            "--page-size",
            "50",
            "-v",
        ])
        .expect("valid args");
        assert_eq!(args.instance_id, Some(123));
        assert_eq!(args.fixture, Some(PathBuf::from("fx.json")));
        assert_eq!(args.page_size, Some(50));
        assert!(args.verbose);
        assert!(!args.list_images);
    }

    #[test]
    /// What: Page sizes outside the offered list are rejected
    fn args_reject_unknown_page_size() {
        assert!(Args::try_parse_from(["clonedeck", "--page-size", "30"]).is_err());
        assert!(Args::try_parse_from(["clonedeck", "--page-size", "x"]).is_err());
    }
}
