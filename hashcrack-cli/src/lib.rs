//! Command-line front end for [`hashcrack`].
//!
//! ```sh
//! hashcrack hashes.txt rockyou.txt
//! ```
//!
//! Every cracked hash is printed to stdout as `<digest> <word>` the moment it
//! is found, followed by a `<count> hashes cracked!` summary. Diagnostics go
//! to stderr.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum};
use hashcrack::{
    Algorithm, Collector, DEFAULT_MAX_LINE_LEN, Driver, Matcher, ScanStats, Source, TargetSet,
    open_input,
};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, info};

pub mod error;

pub use error::Error;

#[derive(Parser, Debug, Clone)]
#[command(name = "hashcrack")]
#[command(about = "Crack unsalted password hashes with a dictionary attack")]
pub struct Args {
    /// File of target digests, one per line
    pub hash_file: PathBuf,

    /// File of candidate passwords, one per line
    pub dict_file: PathBuf,

    /// Digest algorithm the hashes were produced with
    #[arg(short, long, value_enum, default_value_t = AlgorithmArg::Md5)]
    pub algorithm: AlgorithmArg,

    /// Skip input lines longer than this many bytes
    #[arg(long, default_value_t = DEFAULT_MAX_LINE_LEN)]
    pub max_line_len: usize,

    /// Show a progress bar on stderr while scanning the dictionary
    #[arg(long)]
    pub progress: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum AlgorithmArg {
    Md5,
    Sha1,
    Sha256,
}

impl From<AlgorithmArg> for Algorithm {
    fn from(arg: AlgorithmArg) -> Self {
        match arg {
            AlgorithmArg::Md5 => Algorithm::Md5,
            AlgorithmArg::Sha1 => Algorithm::Sha1,
            AlgorithmArg::Sha256 => Algorithm::Sha256,
        }
    }
}

/// What a finished run found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outcome {
    pub cracked: usize,
    pub stats: ScanStats,
    /// Collection stopped early because memory ran out.
    pub exhausted: bool,
}

/// Opens both inputs and streams results to `out`.
///
/// Both files are opened before anything is read so that a bad dictionary
/// path fails before a large hash file is loaded.
pub fn run<W: Write>(args: &Args, out: &mut W) -> Result<Outcome, Error> {
    let algorithm = Algorithm::from(args.algorithm);
    let hashes = open_input(&args.hash_file, Source::Hashes)?;
    let dictionary = open_input(&args.dict_file, Source::Dictionary)?;

    let targets = TargetSet::load(hashes, algorithm, args.max_line_len)?;
    info!(targets = targets.len(), %algorithm, "loaded hashes");

    if args.progress {
        let len = dictionary.get_ref().metadata().map(|m| m.len()).unwrap_or(0);
        let progress_bar = ProgressBar::new(len);
        progress_bar.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {bytes}/{total_bytes} ({percent}%) {msg}")?
                .progress_chars("#>-"),
        );
        let dictionary = progress_bar.wrap_read(dictionary);
        let outcome = scan(&targets, algorithm, dictionary, args.max_line_len, out);
        progress_bar.finish_and_clear();
        outcome
    } else {
        scan(&targets, algorithm, dictionary, args.max_line_len, out)
    }
}

/// Drives the dictionary through the matcher, printing each new crack.
///
/// On memory exhaustion the summary is still written for what was collected.
pub fn scan<R: BufRead, W: Write>(
    targets: &TargetSet,
    algorithm: Algorithm,
    dictionary: R,
    max_line_len: usize,
    out: &mut W,
) -> Result<Outcome, Error> {
    scan_with(Collector::new(), targets, algorithm, dictionary, max_line_len, out)
}

/// [`scan`] into a caller-supplied collector, e.g. one built with
/// [`Collector::with_limit`].
pub fn scan_with<R: BufRead, W: Write>(
    mut collector: Collector,
    targets: &TargetSet,
    algorithm: Algorithm,
    dictionary: R,
    max_line_len: usize,
    out: &mut W,
) -> Result<Outcome, Error> {
    let matcher = Matcher::new(targets, algorithm);
    let mut driver = Driver::new(dictionary, matcher, max_line_len);
    let mut exhausted = false;

    while let Some(record) = driver.next() {
        let record = record?;
        match collector.accept(record) {
            Ok(Some(new)) => write_match(out, &new.digest, &new.word).map_err(Error::Output)?,
            Ok(None) => {}
            Err(e) => {
                tracing::error!(error = %e, "stopping early, reporting what was found");
                exhausted = true;
                break;
            }
        }
    }

    let cracked = collector.count();
    writeln!(out, "{cracked} hashes cracked!").map_err(Error::Output)?;
    out.flush().map_err(Error::Output)?;

    let stats = driver.stats();
    debug!(?stats, cracked, "scan finished");
    Ok(Outcome { cracked, stats, exhausted })
}

fn write_match<W: Write>(out: &mut W, digest: &str, word: &[u8]) -> std::io::Result<()> {
    out.write_all(digest.as_bytes())?;
    out.write_all(b" ")?;
    out.write_all(word)?;
    out.write_all(b"\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    const HELLO_MD5: &str = "5d41402abc4b2a76b9719d911017c592";

    fn scan_to_string(hashes: &[u8], dictionary: &[u8]) -> (String, Outcome) {
        let targets = TargetSet::load(hashes, Algorithm::Md5, DEFAULT_MAX_LINE_LEN).unwrap();
        let mut out = Vec::new();
        let outcome =
            scan(&targets, Algorithm::Md5, dictionary, DEFAULT_MAX_LINE_LEN, &mut out).unwrap();
        (String::from_utf8(out).unwrap(), outcome)
    }

    #[test]
    fn test_scan_output_format() {
        let (out, outcome) = scan_to_string(HELLO_MD5.as_bytes(), b"hello\n");
        assert_eq!(out, format!("{HELLO_MD5} hello\n1 hashes cracked!\n"));
        assert_eq!(outcome.cracked, 1);
        assert!(!outcome.exhausted);
    }

    #[test]
    fn test_scan_prints_duplicates_once() {
        let (out, outcome) = scan_to_string(HELLO_MD5.as_bytes(), b"hello\nhello\n");
        assert_eq!(out, format!("{HELLO_MD5} hello\n1 hashes cracked!\n"));
        assert_eq!(outcome.stats.hits, 2);
    }

    #[test]
    fn test_scan_nothing_cracked() {
        let (out, outcome) = scan_to_string(b"", b"hello\n");
        assert_eq!(out, "0 hashes cracked!\n");
        assert_eq!(outcome.cracked, 0);
    }

    #[test]
    fn test_exhausted_scan_still_prints_summary() {
        let hashes = format!("{HELLO_MD5}\n7d793037a0760186574b0282f2f435e7\n");
        let targets =
            TargetSet::load(hashes.as_bytes(), Algorithm::Md5, DEFAULT_MAX_LINE_LEN).unwrap();
        let mut out = Vec::new();
        let dictionary = &b"hello\nworld\nhello\n"[..];
        let outcome = scan_with(
            Collector::with_limit(1),
            &targets,
            Algorithm::Md5,
            dictionary,
            DEFAULT_MAX_LINE_LEN,
            &mut out,
        )
        .unwrap();

        let out = String::from_utf8(out).unwrap();
        assert_eq!(out, format!("{HELLO_MD5} hello\n1 hashes cracked!\n"));
        assert!(outcome.exhausted);
        assert_eq!(outcome.cracked, 1);
        // scanning stopped at "world"
        assert_eq!(outcome.stats.words, 2);
    }

    #[test]
    fn test_word_bytes_written_verbatim() {
        let mut out = Vec::new();
        write_match(&mut out, HELLO_MD5, b"caf\xe9").unwrap();
        assert_eq!(out, [HELLO_MD5.as_bytes(), b" caf\xe9\n"].concat());
    }

    #[test]
    fn test_args_parse() {
        let args =
            Args::try_parse_from(["hashcrack", "-a", "sha1", "-vv", "h.txt", "d.txt"]).unwrap();
        assert_eq!(args.algorithm, AlgorithmArg::Sha1);
        assert_eq!(args.verbose, 2);
        assert_eq!(args.hash_file, PathBuf::from("h.txt"));
        assert_eq!(args.dict_file, PathBuf::from("d.txt"));
        assert_eq!(args.max_line_len, DEFAULT_MAX_LINE_LEN);
    }

    #[test]
    fn test_args_require_both_files() {
        assert!(Args::try_parse_from(["hashcrack", "h.txt"]).is_err());
        assert!(Args::try_parse_from(["hashcrack"]).is_err());
    }

    #[test]
    fn test_run_reports_missing_hash_file_path() {
        let argv = ["hashcrack", "/nonexistent/h.txt", "/nonexistent/d.txt"];
        let args = Args::try_parse_from(argv).unwrap();
        let mut out = Vec::new();
        let err = run(&args, &mut out).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/h.txt"));
        assert!(out.is_empty());
    }
}
