use anyhow::{Context, Result};
use clap::{
    builder::RangedU64ValueParser, error::ErrorKind, ArgGroup, CommandFactory, Parser,
};
use differ_lib::{join, Differ, Params, Source, DEFAULT_CHUNK_SIZE};
use tracing::Level;

/// Stores near-identical images as a verbatim base plus sparse diffs.
///
/// --diff: `a.png b.png c.png` -> `a.BASE.png b.DIFF.png c.DIFF.png`
///
/// --join: `a.BASE.png b.DIFF.png c.DIFF.png` -> `a.png b.png c.png`
#[derive(Parser, Debug)]
#[command(name = "differ", version)]
#[command(group(ArgGroup::new("mode").required(true).args(["diff", "join"])))]
struct Cli {
    /// Generate difference files (BASE + DIFFs).
    #[arg(short, long)]
    diff: bool,

    /// Reconstruct images from BASE + DIFFs.
    #[arg(short, long)]
    join: bool,

    /// Images to process, in sequence order; glob patterns are expanded.
    #[arg(required = true, num_args = 1..)]
    files: Vec<String>,

    /// Worker threads for --diff (defaults to one per CPU).
    #[arg(short, long, value_parser = RangedU64ValueParser::<usize>::new().range(1..))]
    threads: Option<usize>,

    /// Images decoded per batch before their pairs are compared.
    #[arg(
        long,
        default_value_t = DEFAULT_CHUNK_SIZE,
        value_parser = RangedU64ValueParser::<usize>::new().range(1..)
    )]
    chunk_size: usize,

    /// Show a progress bar while generating diffs.
    #[arg(long)]
    progress: bool,

    /// Log debug messages.
    #[arg(short, long, conflicts_with = "quiet")]
    verbose: bool,

    /// Log warnings and errors only.
    #[arg(short, long)]
    quiet: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Mode {
    Diff,
    Join,
}

impl Cli {
    fn mode(&self) -> Mode {
        if self.diff {
            Mode::Diff
        } else {
            Mode::Join
        }
    }

    fn log_level(&self) -> Level {
        if self.verbose {
            Level::DEBUG
        } else if self.quiet {
            Level::WARN
        } else {
            Level::INFO
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(cli.log_level())
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let source = Source::from_args(&cli.files).context("Couldn't resolve input files")?;

    if let Err(err) = ensure_enough_inputs(&source) {
        err.exit();
    }

    match cli.mode() {
        Mode::Diff => run_diff(&cli, &source),
        Mode::Join => run_join(&source),
    }
}

/// Checked after glob expansion, since a single pattern may stand for many
/// files.
fn ensure_enough_inputs(source: &Source) -> Result<(), clap::Error> {
    if source.len() >= 2 {
        return Ok(());
    }

    Err(Cli::command().error(
        ErrorKind::TooFewValues,
        format!(
            "at least two input images are required, got {}",
            source.len()
        ),
    ))
}

fn run_diff(cli: &Cli, source: &Source) -> Result<()> {
    let params = Params::new(cli.threads, cli.chunk_size, cli.progress)?;

    let summary = Differ::new(&params)
        .run(source.paths())
        .context("Couldn't generate diffs")?;

    println!("base: {}", summary.base.display());
    println!("{}", summary.stats);

    Ok(())
}

fn run_join(source: &Source) -> Result<()> {
    let summary = join(source.paths()).context("Couldn't reconstruct images")?;

    for frame in &summary.frames {
        println!("{}", frame.display());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn requires_exactly_one_mode() {
        let err = Cli::try_parse_from(["differ", "a.png", "b.png"]).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);

        let err = Cli::try_parse_from(["differ", "-d", "-j", "a.png", "b.png"]).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::ArgumentConflict);
    }

    #[test]
    fn requires_files() {
        let err = Cli::try_parse_from(["differ", "--diff"]).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn requires_two_inputs_after_expansion() {
        let one = Source::from(vec![PathBuf::from("a.png")]);
        let err = ensure_enough_inputs(&one).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::TooFewValues);
        assert_eq!(err.exit_code(), 2);

        let two = Source::from(vec![PathBuf::from("a.png"), PathBuf::from("b.png")]);

        assert!(ensure_enough_inputs(&two).is_ok());
    }

    #[test]
    fn parses_diff_mode() {
        let cli = Cli::try_parse_from([
            "differ", "--diff", "-t", "3", "--chunk-size", "8", "a.png", "b.png", "c.png",
        ])
        .unwrap();

        assert_eq!(cli.mode(), Mode::Diff);
        assert_eq!(cli.threads, Some(3));
        assert_eq!(cli.chunk_size, 8);
        assert_eq!(cli.files, ["a.png", "b.png", "c.png"]);
        assert_eq!(cli.log_level(), Level::INFO);
    }

    #[test]
    fn parses_join_mode() {
        let cli =
            Cli::try_parse_from(["differ", "-j", "-q", "a.BASE.png", "b.DIFF.png"]).unwrap();

        assert_eq!(cli.mode(), Mode::Join);
        assert_eq!(cli.chunk_size, DEFAULT_CHUNK_SIZE);
        assert_eq!(cli.log_level(), Level::WARN);
    }

    #[test]
    fn zero_threads_or_chunk_size_is_a_usage_error() {
        for args in [
            ["differ", "-d", "-t", "0", "a.png", "b.png"],
            ["differ", "-d", "--chunk-size", "0", "a.png", "b.png"],
        ] {
            let err = Cli::try_parse_from(args).unwrap_err();

            assert_eq!(err.kind(), ErrorKind::ValueValidation);
            assert_eq!(err.exit_code(), 2);
        }
    }

    #[test]
    fn verbose_and_quiet_conflict() {
        assert!(Cli::try_parse_from(["differ", "-d", "-v", "-q", "a.png", "b.png"]).is_err());
    }

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }
}
