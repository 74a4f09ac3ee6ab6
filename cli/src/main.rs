//! MapleLeap CLI binary: interview a business and print its export and productivity reports.
//!
//! Subcommands: `questions` (list interview), `generate` (model call), `parse` (offline),
//! `contacts` (simulated decision makers).

mod log_format;
mod logging;

use std::io::Read;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use clap::{Parser, Subcommand};
use mapleleap::{
    simulated_contacts, ChatOpenAI, InterviewAnswers, LlmSettings, ReportService, Reports,
    QUESTIONS,
};
use mapleleap_cli::{prompt_answers, render_contacts, render_reports, write_json_output, CliError};
use tracing::{info, info_span, Instrument};

#[derive(Parser, Debug)]
#[command(name = "mapleleap")]
#[command(about = "MapleLeap: AI export-market and productivity reports for Canadian businesses")]
struct Args {
    #[command(subcommand)]
    cmd: Command,

    /// Verbose: log to stderr (unless LOG_FILE is set)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the four interview questions
    Questions,
    /// Ask the model for reports (answers from a YAML file, or prompted on stdin)
    Generate(GenerateArgs),
    /// Parse a saved model reply (file or stdin) without calling the model
    Parse(ParseArgs),
    /// Show simulated decision-maker contacts for a company
    Contacts(ContactsArgs),
}

#[derive(clap::Args, Debug)]
struct OutputArgs {
    /// Output reports as JSON
    #[arg(long)]
    json: bool,

    /// When using --json, write output to this file instead of stdout
    #[arg(long, value_name = "PATH")]
    file: Option<PathBuf>,

    /// When using --json, pretty-print (multi-line)
    #[arg(long)]
    pretty: bool,
}

#[derive(clap::Args, Debug)]
struct GenerateArgs {
    /// YAML file with keys product, location, industry, value_proposition
    #[arg(short, long, value_name = "FILE")]
    answers: Option<PathBuf>,

    /// Model name (overrides MAPLELEAP_MODEL / OPENAI_MODEL)
    #[arg(long, value_name = "MODEL")]
    model: Option<String>,

    #[command(flatten)]
    output: OutputArgs,
}

#[derive(clap::Args, Debug)]
struct ParseArgs {
    /// Markdown reply to parse; reads stdin when omitted
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    #[command(flatten)]
    output: OutputArgs,
}

#[derive(clap::Args, Debug)]
struct ContactsArgs {
    /// Company name
    company: String,

    /// Output contacts as JSON
    #[arg(long)]
    json: bool,
}

/// Default max length for free-text fields in plain-text output. 0 means no truncation.
const DEFAULT_MAX_FIELD_LEN: usize = 0;

/// Reads max field length from `MAPLELEAP_MAX_FIELD_LEN`. Returns default on missing/invalid.
fn max_field_len() -> usize {
    std::env::var("MAPLELEAP_MAX_FIELD_LEN")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(DEFAULT_MAX_FIELD_LEN)
}

fn print_reports(reports: &Reports, output: &OutputArgs) -> Result<(), CliError> {
    if output.json {
        write_json_output(reports, output.file.as_deref(), output.pretty)
    } else {
        println!("{}", render_reports(reports, max_field_len()));
        Ok(())
    }
}

fn read_input(path: Option<&Path>) -> Result<String, CliError> {
    match path {
        Some(p) => Ok(std::fs::read_to_string(p)?),
        None => {
            let mut s = String::new();
            std::io::stdin().read_to_string(&mut s)?;
            Ok(s)
        }
    }
}

async fn generate(args: &GenerateArgs) -> Result<(), CliError> {
    let answers = match &args.answers {
        Some(path) => InterviewAnswers::from_yaml_file(path)?,
        None => prompt_answers(std::io::stdin().lock(), std::io::stderr())?,
    };
    answers.validate()?;

    let mut settings = LlmSettings::from_env();
    if let Some(model) = &args.model {
        settings = settings.with_model(model.clone());
    }
    let llm = ChatOpenAI::from_settings(&settings)?;
    info!(model = %llm.model(), "generating reports");
    eprintln!("Generating reports with {}...", llm.model());

    let service = ReportService::new(Arc::new(llm));
    let reports = service.generate(&answers).await?;
    print_reports(&reports, &args.output)
}

fn parse(args: &ParseArgs) -> Result<(), CliError> {
    let markdown = read_input(args.input.as_deref())?;
    let reports = mapleleap::parse_report(&markdown).map_err(mapleleap::ReportError::from)?;
    print_reports(&reports, &args.output)
}

fn contacts(args: &ContactsArgs) -> Result<(), CliError> {
    let contacts = simulated_contacts(&args.company);
    if args.json {
        write_json_output(&contacts, None, false)
    } else {
        println!("{}", render_contacts(&args.company, &contacts));
        Ok(())
    }
}

async fn run(cmd: &Command) -> Result<(), CliError> {
    match cmd {
        Command::Questions => {
            for (i, q) in QUESTIONS.iter().enumerate() {
                println!("{}. {}", i + 1, q);
            }
            Ok(())
        }
        Command::Generate(a) => generate(a).await,
        Command::Parse(a) => parse(a),
        Command::Contacts(a) => contacts(a),
    }
}

fn command_name(cmd: &Command) -> &'static str {
    match cmd {
        Command::Questions => "questions",
        Command::Generate(_) => "generate",
        Command::Parse(_) => "parse",
        Command::Contacts(_) => "contacts",
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    if let Err(e) = config::load_and_apply("mapleleap", None::<&Path>) {
        eprintln!("mapleleap: config: {}", e);
    }
    let guard = logging::init(args.verbose)?;

    let span = info_span!(
        "command",
        name = command_name(&args.cmd),
        run_id = %uuid::Uuid::new_v4()
    );
    let result = run(&args.cmd).instrument(span).await;

    if let Err(e) = result {
        eprintln!("mapleleap: {}", e);
        let code = e.exit_code();
        drop(guard);
        std::process::exit(code);
    }
    Ok(())
}
