//! resumerank CLI - rank PDF resumes against a job description

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use resumerank::render::{self, CSV_FILE_NAME, DEFAULT_PRECISION};
use resumerank::{
    BatchPolicy, Error, OutputFormat, RankingResult, ResumeDocument, ScreenOptions, Screener,
    TextExtractor, VectorizerOptions,
};

#[derive(Parser)]
#[command(name = "resumerank")]
#[command(author = "iyulab")]
#[command(version)]
#[command(about = "Rank PDF resumes against a job description", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Rank resumes by similarity to a job description
    Rank(RankArgs),

    /// Print the text extracted from a PDF
    Extract {
        /// Input PDF file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Show version information
    Version,
}

#[derive(clap::Args)]
struct RankArgs {
    /// Resume PDF files
    #[arg(value_name = "FILE")]
    resumes: Vec<PathBuf>,

    /// Job description text
    #[arg(short, long, value_name = "TEXT", conflicts_with = "job_file")]
    job: Option<String>,

    /// Read the job description from a file ("-" for stdin)
    #[arg(long, value_name = "FILE")]
    job_file: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    format: Format,

    /// Also export the ranking as CSV (`--csv=FILE` to choose the file)
    #[arg(
        long,
        value_name = "FILE",
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = CSV_FILE_NAME
    )]
    csv: Option<PathBuf>,

    /// Skip unreadable resumes instead of rejecting the batch
    #[arg(long)]
    skip_unreadable: bool,

    /// Use logarithmic term frequency
    #[arg(long)]
    sublinear_tf: bool,

    /// Ignore a word when comparing (repeatable)
    #[arg(long = "stop-word", value_name = "WORD")]
    stop_words: Vec<String>,

    /// Cached results per cache (0 disables caching)
    #[arg(long, env = "RESUMERANK_CACHE_SIZE", default_value_t = resumerank::cache::DEFAULT_CACHE_SIZE)]
    cache_size: usize,

    /// Suppress progress and notes
    #[arg(short, long)]
    quiet: bool,
}

#[derive(Copy, Clone, PartialEq, Eq, Debug, ValueEnum)]
enum Format {
    /// Aligned table
    Table,
    /// Comma-separated values
    Csv,
    /// JSON array
    Json,
}

impl From<Format> for OutputFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Table => OutputFormat::Table,
            Format::Csv => OutputFormat::Csv,
            Format::Json => OutputFormat::Json,
        }
    }
}

impl RankArgs {
    fn screen_options(&self) -> ScreenOptions {
        let policy = if self.skip_unreadable {
            BatchPolicy::SkipFailed
        } else {
            BatchPolicy::FailFast
        };

        ScreenOptions::new()
            .with_policy(policy)
            .with_cache_size(self.cache_size)
            .with_vectorizer(
                VectorizerOptions::new()
                    .with_sublinear_tf(self.sublinear_tf)
                    .with_stop_words(self.stop_words.iter().cloned()),
            )
    }
}

fn main() -> ExitCode {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Rank(args)) => cmd_rank(&args),
        Some(Commands::Extract { input, output }) => cmd_extract(&input, output.as_deref()),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => {
            println!(
                "{}",
                "Usage: resumerank rank --job <TEXT> <FILE>...".yellow()
            );
            println!("       resumerank --help for more information");
            Ok(())
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) if e.is_warning() => {
            eprintln!("{}: {}", "Warning".yellow().bold(), e);
            ExitCode::from(2)
        }
        Err(e) => {
            eprintln!("{}: {}", "Error".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}

fn cmd_rank(args: &RankArgs) -> Result<(), Error> {
    let job_description = read_job_description(args.job.as_deref(), args.job_file.as_deref())?;

    // extension and header checks happen before anything reaches the core
    let resumes = args
        .resumes
        .iter()
        .map(ResumeDocument::from_path)
        .collect::<Result<Vec<_>, _>>()?;

    let screener = Screener::with_options(args.screen_options());

    let pb = if args.quiet || resumes.len() < 2 {
        ProgressBar::hidden()
    } else {
        ProgressBar::new(resumes.len() as u64)
    };
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-"),
    );
    pb.set_message("Processing resumes...");

    let outcome = screener.screen_with_progress(job_description, &resumes, |doc| {
        pb.set_message(doc.name.clone());
        pb.inc(1);
    });
    pb.finish_and_clear();
    let ranking = outcome?;

    log::debug!(
        "text cache {:?}, score cache {:?}",
        screener.text_cache_stats(),
        screener.score_cache_stats()
    );

    print_ranking(&ranking, args.format, args.quiet)?;

    if let Some(path) = &args.csv {
        fs::write(path, render::to_csv(&ranking)?)?;
        if !args.quiet {
            println!("{} {}", "Saved to".green(), path.display());
        }
    }

    Ok(())
}

fn print_ranking(ranking: &RankingResult, format: Format, quiet: bool) -> Result<(), Error> {
    match format {
        Format::Table => {
            if !quiet {
                println!("{}", "Ranking Results".cyan().bold());
                println!("{}", "─".repeat(40).dimmed());
            }
            print!("{}", render::to_table(ranking, DEFAULT_PRECISION));
            if !quiet {
                println!();
                println!(
                    "{}",
                    "Note: scores reflect text similarity only. Review resumes manually before deciding."
                        .dimmed()
                );
            }
        }
        other => print!("{}", render::render(ranking, other.into())?),
    }
    Ok(())
}

/// Resolve the job description from `--job` or `--job-file`.
///
/// A missing description resolves to an empty string so the core reports it
/// alongside a missing resume set.
fn read_job_description(job: Option<&str>, job_file: Option<&Path>) -> Result<String, Error> {
    match (job, job_file) {
        (Some(text), _) => Ok(text.to_string()),
        (None, Some(path)) if path == Path::new("-") => {
            let mut text = String::new();
            io::stdin().read_to_string(&mut text)?;
            Ok(text)
        }
        (None, Some(path)) => Ok(fs::read_to_string(path)?),
        (None, None) => Ok(String::new()),
    }
}

fn cmd_extract(input: &Path, output: Option<&Path>) -> Result<(), Error> {
    let document = ResumeDocument::from_path(input)?;
    let text = TextExtractor::new().extract_bytes(&document.data)?;

    if let Some(path) = output {
        fs::write(path, &text)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", text);
    }

    Ok(())
}

fn cmd_version() {
    println!("{} {}", "resumerank".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Resume ranking by TF-IDF similarity");
    println!();
    println!("License: MIT");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_rank(args: &[&str]) -> RankArgs {
        let cli = Cli::try_parse_from(args).unwrap();
        match cli.command {
            Some(Commands::Rank(args)) => args,
            _ => panic!("expected rank command"),
        }
    }

    #[test]
    fn test_rank_defaults() {
        let args = parse_rank(&["resumerank", "rank", "--job", "rust", "a.pdf", "b.pdf"]);
        assert_eq!(args.resumes.len(), 2);
        assert_eq!(args.format, Format::Table);
        assert!(args.csv.is_none());

        let options = args.screen_options();
        assert_eq!(options.policy, BatchPolicy::FailFast);
        assert!(!options.vectorizer.sublinear_tf);
    }

    #[test]
    fn test_rank_flags() {
        let args = parse_rank(&[
            "resumerank",
            "rank",
            "--job",
            "rust",
            "--skip-unreadable",
            "--sublinear-tf",
            "--stop-word",
            "the",
            "--stop-word",
            "and",
            "--cache-size",
            "0",
            "--format",
            "json",
            "a.pdf",
        ]);

        let options = args.screen_options();
        assert_eq!(options.policy, BatchPolicy::SkipFailed);
        assert_eq!(options.cache_size, 0);
        assert!(options.vectorizer.sublinear_tf);
        assert!(options.vectorizer.stop_words.contains("the"));
        assert!(options.vectorizer.stop_words.contains("and"));
        assert_eq!(args.format, Format::Json);
    }

    #[test]
    fn test_csv_flag_default_file_name() {
        let args = parse_rank(&["resumerank", "rank", "--job", "rust", "--csv", "a.pdf"]);
        assert_eq!(args.csv, Some(PathBuf::from(CSV_FILE_NAME)));
        assert_eq!(args.resumes, vec![PathBuf::from("a.pdf")]);

        let args = parse_rank(&["resumerank", "rank", "--csv=out.csv", "a.pdf"]);
        assert_eq!(args.csv, Some(PathBuf::from("out.csv")));
    }

    #[test]
    fn test_csv_flag_never_takes_a_resume() {
        let args = parse_rank(&[
            "resumerank",
            "rank",
            "--job",
            "rust",
            "--csv",
            "alice.pdf",
            "bob.pdf",
        ]);
        assert_eq!(args.csv, Some(PathBuf::from(CSV_FILE_NAME)));
        assert_eq!(
            args.resumes,
            vec![PathBuf::from("alice.pdf"), PathBuf::from("bob.pdf")]
        );
    }

    #[test]
    fn test_job_and_job_file_conflict() {
        let result = Cli::try_parse_from([
            "resumerank",
            "rank",
            "--job",
            "rust",
            "--job-file",
            "job.txt",
            "a.pdf",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_read_job_description_sources() {
        assert_eq!(read_job_description(Some("inline"), None).unwrap(), "inline");
        assert_eq!(read_job_description(None, None).unwrap(), "");

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("job.txt");
        fs::write(&path, "from file").unwrap();
        assert_eq!(read_job_description(None, Some(&path)).unwrap(), "from file");

        let missing = dir.path().join("missing.txt");
        assert!(matches!(
            read_job_description(None, Some(&missing)),
            Err(Error::Io(_))
        ));
    }

    #[test]
    fn test_missing_inputs_are_warnings() {
        let args = parse_rank(&["resumerank", "rank"]);
        let err = cmd_rank(&args).unwrap_err();
        assert!(err.is_warning());
    }

    #[test]
    fn test_format_conversion() {
        assert_eq!(OutputFormat::from(Format::Csv), OutputFormat::Csv);
        assert_eq!(OutputFormat::from(Format::Json), OutputFormat::Json);
        assert_eq!(OutputFormat::from(Format::Table), OutputFormat::Table);
    }
}
