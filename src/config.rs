//! Settings for a carving run, as parsed from the command line.

use crate::errors::{CarveError, Result};
use clap::ArgMatches;
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_SEAMS: usize = 5;
pub const DEFAULT_PREFIX: &str = "img";

/// Everything the `carve` subcommand needs to know.
#[derive(Debug, Clone, PartialEq)]
pub struct CarveOptions {
    pub input: PathBuf,
    pub seams: usize,
    pub output_dir: PathBuf,
    pub prefix: String,
    /// Also write a PNG beside every `.bin`.
    pub png: bool,
}

impl Default for CarveOptions {
    fn default() -> Self {
        CarveOptions {
            input: PathBuf::new(),
            seams: DEFAULT_SEAMS,
            output_dir: PathBuf::from("."),
            prefix: DEFAULT_PREFIX.to_string(),
            png: false,
        }
    }
}

impl CarveOptions {
    /// Pull the options out of the `carve` subcommand's matches.
    pub fn from_matches(matches: &ArgMatches) -> Result<Self> {
        let mut options = CarveOptions::default();
        options.input = matches
            .value_of("input")
            .map(PathBuf::from)
            .ok_or_else(|| CarveError::Config("no input image given".to_string()))?;
        if let Some(seams) = matches.value_of("seams") {
            options.seams = seams
                .parse()
                .map_err(|_| CarveError::Config(format!("'{}' is not a seam count", seams)))?;
        }
        if let Some(dir) = matches.value_of("output-dir") {
            options.output_dir = PathBuf::from(dir);
        }
        if let Some(prefix) = matches.value_of("prefix") {
            options.prefix = prefix.to_string();
        }
        options.png = matches.is_present("png");
        options.validate()?;
        Ok(options)
    }

    /// Reject settings that can't produce anything.
    pub fn validate(&self) -> Result<()> {
        if self.seams == 0 {
            return Err(CarveError::Config("seam count must be at least 1".to_string()));
        }
        if self.prefix.is_empty() {
            return Err(CarveError::Config("output prefix is empty".to_string()));
        }
        if self.output_dir.exists() && !self.output_dir.is_dir() {
            return Err(CarveError::Config(format!(
                "{} is not a directory",
                self.output_dir.display()
            )));
        }
        Ok(())
    }

    /// Create the output directory if it isn't there yet.
    pub fn prepare_output_dir(&self) -> Result<()> {
        fs::create_dir_all(&self.output_dir)?;
        Ok(())
    }

    /// Where pass `iteration` is written, with the given extension.
    pub fn output_path(&self, iteration: usize, extension: &str) -> PathBuf {
        self.output_dir
            .join(format!("{}{}.{}", self.prefix, iteration, extension))
    }

    pub fn input(&self) -> &Path {
        &self.input
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::{App, Arg};

    fn parse(args: &[&str]) -> Result<CarveOptions> {
        let app = App::new("test")
            .arg(Arg::with_name("input").required(true).index(1))
            .arg(Arg::with_name("seams").short("n").takes_value(true))
            .arg(Arg::with_name("output-dir").short("o").takes_value(true))
            .arg(Arg::with_name("prefix").long("prefix").takes_value(true))
            .arg(Arg::with_name("png").long("png"));
        let matches = app.get_matches_from(args.to_vec());
        CarveOptions::from_matches(&matches)
    }

    #[test]
    fn defaults_fill_the_gaps() {
        let options = parse(&["test", "in.bin"]).unwrap();
        assert_eq!(options.input, PathBuf::from("in.bin"));
        assert_eq!(options.seams, DEFAULT_SEAMS);
        assert_eq!(options.prefix, "img");
        assert!(!options.png);
    }

    #[test]
    fn output_paths_are_numbered() {
        let options = parse(&["test", "in.bin", "-o", "out", "--prefix", "step", "--png"]).unwrap();
        assert_eq!(options.output_path(3, "bin"), PathBuf::from("out/step3.bin"));
        assert_eq!(options.output_path(0, "png"), PathBuf::from("out/step0.png"));
        assert!(options.png);
    }

    #[test]
    fn bad_seam_counts_are_refused() {
        assert!(parse(&["test", "in.bin", "-n", "zero"]).is_err());
        assert!(parse(&["test", "in.bin", "-n", "0"]).is_err());
        assert_eq!(parse(&["test", "in.bin", "-n", "12"]).unwrap().seams, 12);
    }
}
