// citydir CLI - parse historical city-directory entries from the shell.
//
// Output contract: --json (and stdin streaming mode) writes exactly one
// compact JSON record per input line to stdout; human-readable blocks
// and notes go to stderr or the default argv mode only.

mod exit_codes;
mod lexicon;

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use citydir_engine::{parse_line, OccupationMatcher};
use exit_codes::{EXIT_ERROR, EXIT_SUCCESS, EXIT_USAGE};

#[derive(Parser)]
#[command(name = "citydir")]
#[command(about = "Parse historical city-directory entries into labeled records")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse directory lines into labeled JSON records
    #[command(after_help = "\
Examples:
  citydir parse \"SMITH JOHN A. r 45 Elm\"
  citydir parse --json \"DOE JANE, wid, JOHN\"
  cat directory.txt | citydir parse
  citydir parse --lexicon titles.json \"BROWN ROBERT, carpenter, h 12 Oak\"")]
    Parse {
        /// Lines to parse (omit to stream stdin, one record per line)
        lines: Vec<String>,

        /// Emit one compact JSON record per line instead of the human block
        #[arg(long)]
        json: bool,

        /// JSON file with occupation titles (overrides the embedded list)
        #[arg(long)]
        lexicon: Option<PathBuf>,
    },

    /// Show per-token winning categories for one line (debug view)
    #[command(after_help = "\
Examples:
  citydir tokens \"SMITH JOHN A. r 45 Elm\"")]
    Tokens {
        /// Line to classify
        line: String,

        /// JSON file with occupation titles (overrides the embedded list)
        #[arg(long)]
        lexicon: Option<PathBuf>,
    },
}

#[derive(Debug)]
pub struct CliError {
    pub code: u8,
    pub message: String,
    pub hint: Option<String>,
}

fn main() -> ExitCode {
    // Route usage errors through the exit-code registry; --help and
    // --version are "errors" to clap but succeed here.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            let code = if err.exit_code() == 0 { EXIT_SUCCESS } else { EXIT_USAGE };
            return ExitCode::from(code);
        }
    };

    let result = match cli.command {
        Commands::Parse { lines, json, lexicon } => cmd_parse(lines, json, lexicon),
        Commands::Tokens { line, lexicon } => cmd_tokens(line, lexicon),
    };

    match result {
        Ok(()) => ExitCode::from(EXIT_SUCCESS),
        Err(err) => {
            eprintln!("error: {}", err.message);
            if let Some(hint) = err.hint {
                eprintln!("hint: {hint}");
            }
            ExitCode::from(err.code)
        }
    }
}

fn cmd_parse(lines: Vec<String>, json: bool, lexicon_path: Option<PathBuf>) -> Result<(), CliError> {
    let lexicon = lexicon::load(lexicon_path.as_deref())?;

    if lines.is_empty() {
        return stream_stdin(&lexicon);
    }

    for line in &lines {
        let record = parse_line(line, &lexicon);
        if json {
            println!("{}", to_json(&record)?);
        } else {
            print_human(line, &record)?;
        }
    }
    Ok(())
}

/// Stdin streaming mode: one compact JSON record per input line.
fn stream_stdin(matcher: &dyn OccupationMatcher) -> Result<(), CliError> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut count: usize = 0;

    for line in stdin.lock().lines() {
        let line = line.map_err(|e| CliError {
            code: EXIT_ERROR,
            message: format!("cannot read stdin: {e}"),
            hint: None,
        })?;
        let record = parse_line(&line, matcher);
        writeln!(out, "{}", to_json(&record)?).map_err(|e| CliError {
            code: EXIT_ERROR,
            message: format!("cannot write stdout: {e}"),
            hint: None,
        })?;
        count += 1;
    }

    eprintln!("parsed {count} line(s)");
    Ok(())
}

/// Argv human mode: echo the input, then the indented pretty record.
fn print_human(line: &str, record: &citydir_engine::Record) -> Result<(), CliError> {
    println!("Input:\n  \"{line}\"");
    let pretty = serde_json::to_string_pretty(record).map_err(json_err)?;
    let indented: String = pretty
        .lines()
        .map(|l| format!("  {l}"))
        .collect::<Vec<_>>()
        .join("\n");
    println!("Output:\n{indented}");
    Ok(())
}

fn cmd_tokens(line: String, lexicon_path: Option<PathBuf>) -> Result<(), CliError> {
    use citydir_engine::resolve::resolve_winners;
    use citydir_engine::tokenize::tokenize;
    use citydir_engine::vote::cast_votes;

    let lexicon = lexicon::load(lexicon_path.as_deref())?;

    let tokens = tokenize(&line);
    let mut decisions = cast_votes(&tokens, &lexicon);
    resolve_winners(&mut decisions);

    for decision in &decisions {
        let (category, sum) = decision.winner;
        let label = category.to_string();
        println!("{:>2}  {label:<12} {sum:>5.2}  {}", decision.index, decision.token);
    }
    Ok(())
}

fn to_json(record: &citydir_engine::Record) -> Result<String, CliError> {
    serde_json::to_string(record).map_err(json_err)
}

fn json_err(e: serde_json::Error) -> CliError {
    CliError {
        code: EXIT_ERROR,
        message: format!("JSON serialization error: {e}"),
        hint: None,
    }
}
