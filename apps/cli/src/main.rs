mod error;
mod output;
mod questions;

use std::fs::{self, File};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use catalog_matcher::{CatalogError, CatalogFilter, CatalogMatcher, DEFAULT_TOP_N};
use clap::{ArgAction, Args, Parser, Subcommand};
use log::{LevelFilter, info};
use profile::{AnswerRecord, ConfigError, PersonalityAggregator, ProfileConfig};
use serde_json::{Value, json};
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode, WriteLogger};

use crate::error::InputError;
use crate::questions::Questionnaire;

const CLI_VERSION: &str = "1.0";

const EXIT_OK: i32 = 0;
const EXIT_DATA: i32 = 1;
const EXIT_IO: i32 = 2;
const EXIT_INVALID_INPUT: i32 = 3;

#[derive(Debug, Parser)]
#[command(
    name = "autoquiz",
    version,
    about = "Find the car that matches your personality",
    args_override_self = true
)]
struct Cli {
    /// Catalog document with a `cars` list
    #[arg(long, global = true, env = "AUTOQUIZ_CATALOG", default_value = "data/cars.json")]
    catalog: PathBuf,

    /// Questionnaire used to resolve `--choices`
    #[arg(long, global = true, env = "AUTOQUIZ_QUESTIONS", default_value = "data/questions.json")]
    questions: PathBuf,

    /// Profile config (dimension weights, dominant threshold) as JSON
    #[arg(long, global = true, env = "AUTOQUIZ_CONFIG")]
    config: Option<PathBuf>,

    #[arg(long, global = true)]
    json: bool,

    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[arg(long, global = true, env = "AUTOQUIZ_LOG_FILE")]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Args)]
struct AnswerSource {
    /// JSON list of `{"weights": [..]}` records
    #[arg(long, conflicts_with = "choices")]
    answers: Option<PathBuf>,

    /// Option index per question, e.g. `0,2,1`
    #[arg(long, value_delimiter = ',')]
    choices: Vec<usize>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Rank catalog items against the quiz answers
    Recommend {
        #[command(flatten)]
        input: AnswerSource,
        #[arg(long, default_value_t = DEFAULT_TOP_N)]
        top: usize,
    },
    /// Show the personality profile for the quiz answers
    Profile {
        #[command(flatten)]
        input: AnswerSource,
    },
    /// List the questionnaire
    Questions,
    /// Catalog statistics
    Stats,
    /// Show one catalog item
    Show { id: String },
    /// Items most similar to a reference item
    Similar {
        id: String,
        #[arg(long, default_value_t = DEFAULT_TOP_N)]
        top: usize,
    },
    /// Filter catalog items by attributes
    Filter {
        #[arg(long = "type")]
        item_type: Option<String>,
        #[arg(long)]
        price_range: Option<String>,
        /// Accepted for compatibility; attribute filtering ignores it
        #[arg(long)]
        min_match: Option<f64>,
    },
}

impl Command {
    fn name(&self) -> &'static str {
        match self {
            Command::Recommend { .. } => "recommend",
            Command::Profile { .. } => "profile",
            Command::Questions => "questions",
            Command::Stats => "stats",
            Command::Show { .. } => "show",
            Command::Similar { .. } => "similar",
            Command::Filter { .. } => "filter",
        }
    }
}

struct Output {
    data: Value,
    text: String,
}

#[derive(Debug)]
struct CliError {
    code: i32,
    kind: &'static str,
    message: String,
}

impl From<anyhow::Error> for CliError {
    fn from(err: anyhow::Error) -> Self {
        let (code, kind) = classify(&err);
        Self {
            code,
            kind,
            message: format!("{err:#}"),
        }
    }
}

fn classify(err: &anyhow::Error) -> (i32, &'static str) {
    for cause in err.chain() {
        if cause.downcast_ref::<InputError>().is_some() {
            return (EXIT_INVALID_INPUT, "InputError");
        }
        if cause.downcast_ref::<CatalogError>().is_some() {
            return (EXIT_DATA, "CatalogError");
        }
        if cause.downcast_ref::<ConfigError>().is_some() {
            return (EXIT_DATA, "ConfigError");
        }
        if cause.downcast_ref::<std::io::Error>().is_some() {
            return (EXIT_IO, "IoError");
        }
        if cause.downcast_ref::<serde_json::Error>().is_some() {
            return (EXIT_DATA, "ParseError");
        }
    }
    (EXIT_DATA, "Error")
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let code = if err.use_stderr() {
                EXIT_INVALID_INPUT
            } else {
                EXIT_OK
            };
            let _ = err.print();
            std::process::exit(code);
        }
    };

    let command = cli.command.name();
    let result = init_logging(cli.verbose, cli.log_file.as_deref()).and_then(|()| run(&cli));
    match result {
        Ok(out) => print_success(cli.json, command, out),
        Err(err) => print_error(cli.json, command, CliError::from(err)),
    }
}

fn init_logging(verbose: u8, log_file: Option<&Path>) -> Result<()> {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    match log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to create log file {}", path.display()))?;
            WriteLogger::init(level, Config::default(), file)?;
        }
        None => TermLogger::init(level, Config::default(), TerminalMode::Stderr, ColorChoice::Never)?,
    }
    Ok(())
}

fn run(cli: &Cli) -> Result<Output> {
    match &cli.command {
        Command::Recommend { input, top } => {
            let matcher = load_matcher(&cli.catalog)?;
            let aggregator = load_aggregator(cli.config.as_deref())?;
            let answers = load_answers(input, &cli.questions)?;
            let vector = aggregator.compute_vector(&answers);
            let profile = aggregator.export_profile(&vector);
            let matches = matcher.top_matches(&vector, *top);
            info!("recommended {} of {} items", matches.len(), matcher.len());
            Ok(Output {
                data: json!({ "profile": profile, "matches": matches }),
                text: format!(
                    "{}\n\n{}",
                    output::profile_text(&profile),
                    output::matches_text("Top Matches", &matches)
                ),
            })
        }
        Command::Profile { input } => {
            let aggregator = load_aggregator(cli.config.as_deref())?;
            let answers = load_answers(input, &cli.questions)?;
            let profile = aggregator.export_profile(&aggregator.compute_vector(&answers));
            Ok(Output {
                data: serde_json::to_value(&profile)?,
                text: output::profile_text(&profile),
            })
        }
        Command::Questions => {
            let questionnaire = load_questionnaire(&cli.questions)?;
            Ok(Output {
                data: serde_json::to_value(&questionnaire)?,
                text: output::questions_text(&questionnaire),
            })
        }
        Command::Stats => {
            let stats = load_matcher(&cli.catalog)?.statistics();
            Ok(Output {
                data: serde_json::to_value(&stats)?,
                text: output::statistics_text(&stats),
            })
        }
        Command::Show { id } => {
            let matcher = load_matcher(&cli.catalog)?;
            let item = matcher
                .get_by_id(id)
                .ok_or_else(|| InputError::UnknownItem(id.clone()))?;
            Ok(Output {
                data: serde_json::to_value(item)?,
                text: output::item_text(item),
            })
        }
        Command::Similar { id, top } => {
            let matcher = load_matcher(&cli.catalog)?;
            let similar = matcher.similar_items(id, *top);
            Ok(Output {
                data: json!({ "reference": id, "matches": similar }),
                text: output::matches_text(&format!("Similar to {id}"), &similar),
            })
        }
        Command::Filter {
            item_type,
            price_range,
            min_match,
        } => {
            let matcher = load_matcher(&cli.catalog)?;
            let criteria = CatalogFilter {
                min_match_percentage: *min_match,
                item_type: item_type.clone(),
                price_range: price_range.clone(),
            };
            let items = matcher.filter(&criteria);
            Ok(Output {
                data: serde_json::to_value(&items)?,
                text: output::items_text(&items),
            })
        }
    }
}

fn load_matcher(path: &Path) -> Result<CatalogMatcher> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read catalog {}", path.display()))?;
    CatalogMatcher::from_json_str(&raw)
        .with_context(|| format!("failed to load catalog {}", path.display()))
}

fn load_aggregator(path: Option<&Path>) -> Result<PersonalityAggregator> {
    let Some(path) = path else {
        return Ok(PersonalityAggregator::default());
    };
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read profile config {}", path.display()))?;
    let config = ProfileConfig::from_json_str(&raw)
        .with_context(|| format!("invalid profile config {}", path.display()))?;
    Ok(PersonalityAggregator::new(config))
}

fn load_questionnaire(path: &Path) -> Result<Questionnaire> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read questionnaire {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("invalid questionnaire {}", path.display()))
}

fn load_answers(source: &AnswerSource, questions: &Path) -> Result<Vec<AnswerRecord>> {
    if let Some(path) = &source.answers {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read answers {}", path.display()))?;
        return serde_json::from_str(&raw)
            .with_context(|| format!("invalid answers {}", path.display()));
    }
    if source.choices.is_empty() {
        return Ok(Vec::new());
    }
    let questionnaire = load_questionnaire(questions)?;
    Ok(questionnaire.answers_for(&source.choices)?)
}

fn print_success(json_mode: bool, command: &str, out: Output) {
    if json_mode {
        let response = json!({
            "status": "ok",
            "version": CLI_VERSION,
            "command": command,
            "data": out.data,
            "error": null
        });
        println!("{}", render(&response));
    } else {
        println!("{}", out.text);
    }
    std::process::exit(EXIT_OK);
}

fn print_error(json_mode: bool, command: &str, err: CliError) {
    if json_mode {
        let response = json!({
            "status": "error",
            "version": CLI_VERSION,
            "command": command,
            "data": null,
            "error": {
                "code": err.code,
                "type": err.kind,
                "message": err.message
            }
        });
        eprintln!("{}", render(&response));
    } else {
        eprintln!("Error: {}", err.message);
    }
    std::process::exit(err.code);
}

fn render(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}
