//! # orfscan CLI - Command-Line ORF Scanner
//!
//! A command-line interface for scanning RNA sequences for open reading
//! frames and keeping a history of every frame found.
//!
//! ## Usage
//!
//! ```bash
//! # Scan a single sequence
//! orfscan -s AUGCCCUAA
//!
//! # Scan every record of a FASTA file as TSV
//! orfscan -i transcripts.fasta -f tsv -o orfs.tsv
//!
//! # Interactive menu
//! orfscan
//!
//! # Print the archived history
//! orfscan --history -f gff
//! ```
//!
//! ## Options
//!
//! - `-s, --sequence <SEQ>`: Scan a single sequence
//! - `-i, --input <FILE>`: Scan every record of a FASTA file
//! - `-o, --output <STREAM>`: stdout, stderr or a file path (default: stdout)
//! - `-a, --archive <FILE>`: History archive (default: orf_history.json)
//! - `-f, --format <FORMAT>`: Output format: text, tsv, gff, json (default: text)
//! - `-l, --max-length <N>`: Maximum sequence length (default: 10000)
//! - `--history`: Print the archived history and exit
//! - `--save-each-turn`: Save the archive after every scan
//! - `-q, --quiet`: Suppress progress messages
//!
//! Without `--sequence`, `--input` or `--history` the menu is read from stdin.

use clap::{Arg, ArgAction, Command};
use orfscan_core::config::{OutputFormat, SavePolicy, ScanConfig};
use orfscan_core::constants::DEFAULT_MAX_SEQUENCE_LENGTH;
use orfscan_core::output::{write_results, write_store};
use orfscan_core::*;
use std::fs::File;
use std::io::{self, BufRead, BufWriter, Write};
use std::path::PathBuf;
use tracing::warn;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let matches = Command::new("orfscan")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Open reading frame scanner")
        .arg(
            Arg::new("sequence")
                .short('s')
                .long("sequence")
                .value_name("SEQ")
                .help("Sequence to scan")
                .conflicts_with("input"),
        )
        .arg(
            Arg::new("input")
                .short('i')
                .long("input")
                .value_name("FILE")
                .help("Input FASTA file"),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_name("STREAM")
                .help("Output stream: stdout, stderr or a file path")
                .default_value("stdout"),
        )
        .arg(
            Arg::new("archive")
                .short('a')
                .long("archive")
                .value_name("FILE")
                .help("History archive file")
                .default_value(constants::DEFAULT_ARCHIVE_PATH),
        )
        .arg(
            Arg::new("format")
                .short('f')
                .long("format")
                .value_name("FORMAT")
                .help("Output format: text, tsv, gff, json")
                .default_value("text"),
        )
        .arg(
            Arg::new("max-length")
                .short('l')
                .long("max-length")
                .value_name("N")
                .help("Maximum sequence length")
                .value_parser(clap::value_parser!(usize))
                .default_value("10000"),
        )
        .arg(
            Arg::new("history")
                .long("history")
                .help("Print the archived history and exit")
                .action(ArgAction::SetTrue)
                .conflicts_with_all(["sequence", "input"]),
        )
        .arg(
            Arg::new("save-each-turn")
                .long("save-each-turn")
                .help("Save the archive after every scan")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .short('q')
                .long("quiet")
                .help("Quiet mode")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    let quiet = matches.get_flag("quiet");
    init_logging(quiet);

    let output_format = match matches.get_one::<String>("format").map(String::as_str) {
        Some("text") => OutputFormat::Text,
        Some("tsv") => OutputFormat::Tsv,
        Some("gff") => OutputFormat::Gff,
        Some("json") => OutputFormat::Json,
        _ => return Err("Invalid output format".into()),
    };

    let config = ScanConfig {
        max_sequence_length: matches
            .get_one::<usize>("max-length")
            .copied()
            .unwrap_or(DEFAULT_MAX_SEQUENCE_LENGTH),
        archive_path: matches
            .get_one::<String>("archive")
            .map(PathBuf::from)
            .ok_or("Missing archive path")?,
        save_policy: if matches.get_flag("save-each-turn") {
            SavePolicy::EachTurn
        } else {
            SavePolicy::OnExit
        },
        output_format,
        quiet,
        ..Default::default()
    };

    let mut writer = open_output(
        matches
            .get_one::<String>("output")
            .map_or("stdout", String::as_str),
    )?;

    let mut session = Session::open(config)?;

    if matches.get_flag("history") {
        write_store(&mut writer, session.history(), "history", output_format)?;
        writer.flush()?;
        return Ok(());
    }

    let results = if let Some(sequence) = matches.get_one::<String>("sequence") {
        vec![session.analyze(sequence)?]
    } else if let Some(input_file) = matches.get_one::<String>("input") {
        session.analyze_fasta_file(input_file)?
    } else {
        run_interactive(&mut session, io::stdin().lock(), &mut writer)?;
        session.finish()?;
        writer.flush()?;
        return Ok(());
    };

    for result in &results {
        write_results(&mut writer, result, output_format)?;
    }
    writer.flush()?;

    let history = session.finish()?;
    if !quiet {
        eprintln!(
            "Scan complete! Found {} ORFs in {} sequences ({} in history).",
            results.iter().map(|r| r.total_orfs()).sum::<usize>(),
            results.len(),
            history.len()
        );
    }

    Ok(())
}

fn init_logging(quiet: bool) {
    let default_filter = if quiet { "warn" } else { "orfscan=info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter)),
        )
        .with_writer(io::stderr)
        .init();
}

/// Resolves an output stream name to a writer
fn open_output(name: &str) -> io::Result<Box<dyn Write>> {
    let writer: Box<dyn Write> = match name {
        "stdout" => Box::new(BufWriter::new(io::stdout())),
        "stderr" => Box::new(io::stderr()),
        path => Box::new(BufWriter::new(File::create(path)?)),
    };
    Ok(writer)
}

/// Menu loop over `input`; prompts and results go to `output`.
///
/// Scan errors are reported and the loop continues. End of input exits.
fn run_interactive<R: BufRead, W: Write>(
    session: &mut Session,
    mut input: R,
    output: &mut W,
) -> Result<(), OrfScanError> {
    let format = session.config().output_format;
    writeln!(output, "Welcome to orfscan {}!", constants::VERSION)?;

    loop {
        writeln!(output)?;
        writeln!(output, "MENU")?;
        writeln!(output, "1. Scan a sequence for open reading frames.")?;
        writeln!(output, "2. Show history.")?;
        writeln!(output, "3. Exit.")?;

        let choice = loop {
            let Some(line) = prompt(&mut input, output, "Your input: ")? else {
                return Ok(());
            };
            match line.as_str() {
                "1" | "2" | "3" => break line,
                _ => writeln!(
                    output,
                    "The number you entered doesn't correspond to any menu option. \
                     Choose one of the menu options (1-3)."
                )?,
            }
        };

        match choice.as_str() {
            "1" => {
                let Some(sequence) = prompt(&mut input, output, "Sequence: ")? else {
                    return Ok(());
                };
                match session.analyze(&sequence) {
                    Ok(results) => write_results(output, &results, format)?,
                    Err(error) => {
                        warn!(%error, "scan rejected");
                        writeln!(output, "Error: {}", error)?;
                    }
                }
            }
            "2" => write_store(output, session.history(), "history", format)?,
            _ => {
                writeln!(output, "See you around!")?;
                return Ok(());
            }
        }

        let again = loop {
            let Some(line) = prompt(
                &mut input,
                output,
                "Would you like to start over again? (YES: 1  NO: 0) ",
            )?
            else {
                return Ok(());
            };
            match line.as_str() {
                "1" => break true,
                "0" => break false,
                _ => writeln!(output, "You should enter 1 for YES or 0 for NO.")?,
            }
        };

        if !again {
            writeln!(output, "See you around!")?;
            return Ok(());
        }
    }
}

/// Writes `message` and reads one trimmed line; `None` at end of input
fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    message: &str,
) -> io::Result<Option<String>> {
    write!(output, "{}", message)?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        writeln!(output)?;
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use tempfile::tempdir;

    fn session_in(dir: &std::path::Path) -> Session {
        Session::with_history(
            ScanConfig {
                archive_path: dir.join("history.json"),
                fallback_archive_path: dir.join("history.json"),
                output_format: OutputFormat::Tsv,
                quiet: true,
                ..Default::default()
            },
            RecordStore::new(),
        )
    }

    fn run(session: &mut Session, input: &str) -> String {
        let mut output = Vec::new();
        run_interactive(session, Cursor::new(input), &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_interactive_scan_then_exit() {
        let dir = tempdir().unwrap();
        let mut session = session_in(dir.path());

        let output = run(&mut session, "1\nAUGCCCUAA\n0\n");

        assert!(output.contains("1\tFORWARD\t1\t9\t3\tAUGCCCUAA"));
        assert!(output.ends_with("See you around!\n"));
        assert_eq!(session.history().len(), 1);
    }

    #[test]
    fn test_interactive_reprompts_on_bad_choice() {
        let dir = tempdir().unwrap();
        let mut session = session_in(dir.path());

        let output = run(&mut session, "7\n3\n");

        assert!(output.contains("doesn't correspond to any menu option"));
        assert!(output.ends_with("See you around!\n"));
    }

    #[test]
    fn test_interactive_reports_invalid_sequence_and_continues() {
        let dir = tempdir().unwrap();
        let mut session = session_in(dir.path());

        let output = run(&mut session, "1\nATGTAA\n1\n2\n0\n");

        assert!(output.contains("Error: Invalid sequence"));
        assert!(output.contains("index\tdirection"));
        assert!(session.history().is_empty());
    }

    #[test]
    fn test_interactive_stops_at_end_of_input() {
        let dir = tempdir().unwrap();
        let mut session = session_in(dir.path());

        let output = run(&mut session, "1\n");

        assert!(output.ends_with("Sequence: \n"));
    }

    #[test]
    fn test_open_output_rejects_missing_directory() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing").join("out.txt");
        assert!(open_output(path.to_str().unwrap()).is_err());
    }
}
