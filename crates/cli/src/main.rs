mod echo;

use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Context;
use clap::{Args, CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use mensura_core::{
    Analyzer, ArticleRef, FetchConfig, JsonConfig, OutputTable, PipelineConfig, ReportFormat, TextStore,
    convert_to_json, fetch_file, fetch_stdin, metrics_to_json, read_inputs_file, scrape_all, write_csv_file,
};
use owo_colors::OwoColorize;
use tracing_subscriber::EnvFilter;
use url::Url;

use crate::echo::{print_banner, print_detail, print_info, print_scrape_summary, print_step, print_success, print_warning};

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Report format for the metrics table
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum FormatArg {
    Csv,
    Json,
}

impl From<FormatArg> for ReportFormat {
    fn from(value: FormatArg) -> Self {
        match value {
            FormatArg::Csv => ReportFormat::Csv,
            FormatArg::Json => ReportFormat::Json,
        }
    }
}

/// Scrape articles and score their readability and sentiment
#[derive(Parser, Debug)]
#[command(name = "mensura")]
#[command(version)]
#[command(about = "Scrape articles and score their readability and sentiment", long_about = None)]
struct Cli {
    /// Directory holding MasterDictionary/ and StopWords/
    #[arg(long, global = true, default_value = "data", value_name = "DIR")]
    data_dir: PathBuf,

    /// Directory for scraped article texts
    #[arg(long, global = true, default_value = "output/texts", value_name = "DIR")]
    texts_dir: PathBuf,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Scrape every URL, then score the texts and write the report
    Run {
        /// CSV file with URL_ID and URL columns
        #[arg(value_name = "INPUT")]
        input: PathBuf,

        #[command(flatten)]
        report: ReportArgs,

        #[command(flatten)]
        fetch: FetchArgs,
    },

    /// Fetch every URL and save the article texts
    Scrape {
        /// CSV file with URL_ID and URL columns
        #[arg(value_name = "INPUT")]
        input: PathBuf,

        #[command(flatten)]
        fetch: FetchArgs,
    },

    /// Score previously scraped texts and write the report
    Analyze {
        /// CSV file with URL_ID and URL columns
        #[arg(value_name = "INPUT")]
        input: PathBuf,

        #[command(flatten)]
        report: ReportArgs,
    },

    /// Score a single document and print its metrics as JSON
    Score {
        /// URL to fetch, local HTML or text file, or "-" for stdin
        #[arg(value_name = "SOURCE")]
        source: String,

        /// Treat the input as HTML and extract the article first
        #[arg(long)]
        html: bool,

        #[command(flatten)]
        fetch: FetchArgs,
    },

    /// Print a shell completion script
    Completions {
        #[arg(value_enum, value_name = "SHELL")]
        shell: Shell,
    },
}

#[derive(Args, Debug, Clone)]
struct ReportArgs {
    /// Report file
    #[arg(short, long, default_value = "output/output.csv", value_name = "FILE")]
    output: PathBuf,

    /// Report format
    #[arg(short, long, value_enum, default_value = "csv", value_name = "FORMAT")]
    format: FormatArg,
}

#[derive(Args, Debug, Clone)]
struct FetchArgs {
    /// HTTP timeout in seconds
    #[arg(long, default_value = "10", value_name = "SECS")]
    timeout: u64,

    /// Custom User-Agent for HTTP requests
    #[arg(long, value_name = "UA")]
    user_agent: Option<String>,

    /// Pause between requests in milliseconds
    #[arg(long, default_value = "1000", value_name = "MS")]
    delay_ms: u64,
}

impl FetchArgs {
    fn to_config(&self) -> FetchConfig {
        let defaults = FetchConfig::default();
        FetchConfig {
            timeout: self.timeout,
            user_agent: self.user_agent.clone().unwrap_or(defaults.user_agent),
            delay: Duration::from_millis(self.delay_ms),
        }
    }
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "mensura_core=debug,mensura=debug,warn" } else { "mensura_core=info,warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn pipeline_config(
    cli: &Cli, report: Option<&ReportArgs>, fetch: Option<&FetchArgs>,
) -> anyhow::Result<PipelineConfig> {
    let mut builder = PipelineConfig::builder().data_dir(&cli.data_dir).texts_dir(&cli.texts_dir);
    if let Some(report) = report {
        builder = builder.output(&report.output).format(report.format.into());
    }
    if let Some(fetch) = fetch {
        builder = builder.fetch(fetch.to_config());
    }
    let config = builder.build().context("Invalid configuration")?;
    tracing::debug!(
        data_dir = %config.data_dir.display(),
        texts_dir = %config.texts_dir.display(),
        output = %config.output.display(),
        format = ?config.format,
        "resolved pipeline configuration"
    );
    Ok(config)
}

fn load_analyzer(config: &PipelineConfig) -> anyhow::Result<Analyzer> {
    Analyzer::from_config(config)
        .with_context(|| format!("Failed to load dictionaries from {}", config.data_dir.display()))
}

fn load_inputs(path: &Path) -> anyhow::Result<Vec<ArticleRef>> {
    read_inputs_file(path).with_context(|| format!("Failed to read input table: {}", path.display()))
}

fn write_report(table: &OutputTable, config: &PipelineConfig) -> anyhow::Result<()> {
    let path = &config.output;
    match config.format {
        ReportFormat::Csv => {
            write_csv_file(table, path).with_context(|| format!("Failed to write report: {}", path.display()))?
        }
        ReportFormat::Json => {
            let json = convert_to_json(table, &JsonConfig { pretty: true }).context("Failed to render JSON")?;
            if let Some(parent) = path.parent()
                && !parent.as_os_str().is_empty()
            {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
            }
            std::fs::write(path, json).with_context(|| format!("Failed to write report: {}", path.display()))?;
        }
    }
    Ok(())
}

/// Scores stored texts and writes the report. `steps` holds the scoring step,
/// the writing step and the step total announced in verbose mode.
fn analyze_stored(
    analyzer: &Analyzer, inputs: &[ArticleRef], store: &TextStore, config: &PipelineConfig,
    steps: Option<(usize, usize, usize)>,
) -> anyhow::Result<()> {
    if let Some((scoring, _, total)) = steps {
        print_step(scoring, total, "Scoring articles");
        print_detail("Articles", inputs.len());
    }
    let table = analyzer.analyze_batch(inputs, store);

    let missing = inputs.len() - table.len();
    if missing > 0 {
        print_warning(&format!("{} article(s) had no scraped text and were skipped", missing));
    }

    if let Some((_, writing, total)) = steps {
        print_step(writing, total, "Writing report");
        print_detail("Output", config.output.display());
    }
    write_report(&table, config)?;
    print_success(&format!(
        "{} row(s) written to {}",
        table.len(),
        config.output.display().bright_white()
    ));
    Ok(())
}

async fn run(cli: &Cli, input: &Path, report: &ReportArgs, fetch: &FetchArgs) -> anyhow::Result<()> {
    let config = pipeline_config(cli, Some(report), Some(fetch))?;

    if cli.verbose {
        print_step(1, 4, "Loading dictionaries");
    }
    let analyzer = load_analyzer(&config)?;

    if cli.verbose {
        print_step(2, 4, &format!("Scraping articles listed in {}", input.display().bright_white()));
    }
    let inputs = load_inputs(input)?;
    let store = config.text_store();
    let summary = scrape_all(&inputs, &store, &config.fetch).await.context("Failed to start scraping")?;
    print_scrape_summary(&summary);

    analyze_stored(&analyzer, &inputs, &store, &config, cli.verbose.then_some((3, 4, 4)))
}

async fn scrape(cli: &Cli, input: &Path, fetch: &FetchArgs) -> anyhow::Result<()> {
    let config = pipeline_config(cli, None, Some(fetch))?;
    let inputs = load_inputs(input)?;
    let store = config.text_store();

    if cli.verbose {
        print_step(1, 1, &format!("Scraping {} article(s)", inputs.len()));
        print_detail("Texts", store.dir().display());
    }
    let summary = scrape_all(&inputs, &store, &config.fetch).await.context("Failed to start scraping")?;
    print_scrape_summary(&summary);
    print_success(&format!("Texts saved to {}", store.dir().display().bright_white()));
    Ok(())
}

fn analyze(cli: &Cli, input: &Path, report: &ReportArgs) -> anyhow::Result<()> {
    let config = pipeline_config(cli, Some(report), None)?;

    if cli.verbose {
        print_step(1, 4, "Loading dictionaries");
    }
    let analyzer = load_analyzer(&config)?;

    if cli.verbose {
        print_step(2, 4, &format!("Reading {}", input.display().bright_white()));
    }
    let inputs = load_inputs(input)?;

    analyze_stored(&analyzer, &inputs, &config.text_store(), &config, cli.verbose.then_some((3, 4, 4)))
}

fn is_web_url(source: &str) -> bool {
    Url::parse(source).is_ok_and(|url| matches!(url.scheme(), "http" | "https"))
}

fn looks_like_html(source: &str) -> bool {
    Path::new(source)
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("html") || ext.eq_ignore_ascii_case("htm"))
}

async fn score(cli: &Cli, source: &str, html: bool, fetch: &FetchArgs) -> anyhow::Result<()> {
    let config = pipeline_config(cli, None, Some(fetch))?;
    let analyzer = load_analyzer(&config)?;

    let metrics = if is_web_url(source) {
        if cli.verbose {
            print_step(1, 2, &format!("Fetching {}", source.bright_white().underline()));
        }
        analyzer
            .fetch_and_analyze(source, &config.fetch)
            .await
            .with_context(|| format!("Failed to fetch URL: {}", source))?
    } else {
        let content = if source == "-" {
            if cli.verbose {
                print_step(1, 2, "Reading from stdin");
            }
            fetch_stdin().context("Failed to read from stdin")?
        } else {
            if cli.verbose {
                print_step(1, 2, &format!("Reading from file {}", source.bright_white()));
            }
            fetch_file(source).with_context(|| format!("Failed to read file: {}", source))?
        };

        if html || looks_like_html(source) {
            analyzer.analyze_html(&content).context("Failed to extract article")?
        } else {
            analyzer.analyze_text(&content)
        }
    };

    if cli.verbose {
        print_step(2, 2, "Scoring text");
        print_detail("Words", metrics.word_count);
        print_detail("Fog index", format!("{:.2}", metrics.fog_index));
    }

    println!("{}", metrics_to_json(&metrics, true).context("Failed to render metrics")?);
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if let Command::Completions { shell } = &cli.command {
        clap_complete::generate(*shell, &mut Cli::command(), "mensura", &mut io::stdout());
        return Ok(());
    }

    init_tracing(cli.verbose);

    if cli.verbose {
        print_banner();
        print_info("Debug logging enabled");
        eprintln!();
    }

    tracing::debug!(command = ?cli.command, "dispatching");
    match &cli.command {
        Command::Run { input, report, fetch } => run(&cli, input, report, fetch).await,
        Command::Scrape { input, fetch } => scrape(&cli, input, fetch).await,
        Command::Analyze { input, report } => analyze(&cli, input, report),
        Command::Score { source, html, fetch } => score(&cli, source, *html, fetch).await,
        Command::Completions { .. } => Ok(()),
    }
}
