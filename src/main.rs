use clap::{Parser, Subcommand, ValueEnum};
use miette::{IntoDiagnostic, Result};
use std::fs::File;
use std::io::{self, BufRead, Read, Write};
use std::path::{Path, PathBuf};
use tipcalc::application::engine::TipEngine;
use tipcalc::domain::currency::Locale;
use tipcalc::domain::tip::TipRequest;
use tipcalc::infrastructure::locale::LocaleCurrencyFormatter;
use tipcalc::interfaces::csv::request_reader::RequestReader;
use tipcalc::interfaces::csv::result_writer::{ResultWriter, TipRecord, write_json};
use tipcalc::interfaces::form::TipForm;
use tipcalc::interfaces::input::parse_number;
use tipcalc::interfaces::session::SessionCommand;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Locale used to format the tip (en-US, en-GB, de-DE, fr-FR, ja-JP).
    /// Defaults to the host locale from LC_ALL, LC_MONETARY or LANG.
    #[arg(long, global = true, value_name = "LOCALE", env = "TIPCALC_LOCALE")]
    locale: Option<Locale>,

    #[arg(long, global = true, default_value = "compact", value_name = "FORMAT")]
    log_format: LogFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Calculate a single tip
    Calc {
        /// Bill amount. Empty or unparseable text counts as zero.
        #[arg(long, value_name = "AMOUNT", allow_hyphen_values = true)]
        bill: Option<String>,

        /// Tip percentage. Defaults to 15 when omitted.
        #[arg(long, value_name = "PERCENT", allow_hyphen_values = true)]
        tip: Option<String>,

        /// Round the tip up to the next whole currency unit
        #[arg(long)]
        round_up: bool,
    },
    /// Calculate tips for every row of a `bill,tip,round_up` CSV file
    Batch {
        /// Input CSV file, or `-` for stdin
        input: PathBuf,

        #[arg(long, default_value = "csv", value_name = "FORMAT")]
        format: OutputFormat,
    },
    /// Edit the calculator inputs line by line and print the tip after every change
    Session,
}

#[derive(Clone, ValueEnum)]
enum LogFormat {
    Compact,
    Json,
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Csv,
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so stdout stays machine readable
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr);
    match cli.log_format {
        LogFormat::Compact => {
            let format = tracing_subscriber::fmt::format().compact();
            subscriber.event_format(format).init();
        }
        LogFormat::Json => {
            let format = tracing_subscriber::fmt::format().json();
            subscriber.event_format(format).init();
        }
    };

    let locale = cli.locale.unwrap_or_else(Locale::from_env);
    tracing::debug!(%locale, "Starting up");
    let engine = TipEngine::new(Box::new(LocaleCurrencyFormatter::new(locale)));

    match cli.command {
        Command::Calc {
            bill,
            tip,
            round_up,
        } => {
            let request = TipRequest::new(
                parse_number(bill.as_deref().unwrap_or_default()),
                tip.as_deref().map(parse_number),
                round_up,
            );
            println!("{}", engine.calculate(&request));
        }
        Command::Batch { input, format } => run_batch(&engine, &input, format)?,
        Command::Session => run_session(&engine)?,
    }

    Ok(())
}

fn run_batch(engine: &TipEngine, input: &Path, format: OutputFormat) -> Result<()> {
    let source: Box<dyn Read> = if input == Path::new("-") {
        Box::new(io::stdin().lock())
    } else {
        Box::new(File::open(input).into_diagnostic()?)
    };

    let reader = RequestReader::new(source);
    let records = reader
        .rows()
        .enumerate()
        .filter_map(|(index, row)| match row {
            Ok(row) => {
                let request = row.into_request();
                Some(TipRecord::new(&request, engine.calculate(&request)))
            }
            Err(e) => {
                tracing::warn!(record = index + 1, error = %e, "Skipping unreadable row");
                None
            }
        });

    let stdout = io::stdout();
    match format {
        OutputFormat::Csv => ResultWriter::new(stdout.lock()).write_records(records)?,
        OutputFormat::Json => {
            let records: Vec<TipRecord> = records.collect();
            write_json(stdout.lock(), &records)?;
        }
    }

    Ok(())
}

fn run_session(engine: &TipEngine) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut form = TipForm::new();
    writeln!(out, "{}", form.render(engine)).into_diagnostic()?;

    for line in io::stdin().lock().lines() {
        let line = line.into_diagnostic()?;
        let command = match SessionCommand::parse(&line) {
            None => continue,
            Some(Ok(command)) => command,
            Some(Err(line)) => {
                tracing::warn!(%line, "Unknown session command");
                continue;
            }
        };

        if !command.apply(&mut form) {
            break;
        }
        writeln!(out, "{}", form.render(engine)).into_diagnostic()?;
    }

    Ok(())
}
