// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{anyhow, Context, Result};
use clap::{Args, CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{generate, Shell};
use log::{debug, Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use std::io::Write;
use std::path::{Path, PathBuf};

use scenesmith::app_config::{self, Config, DEFAULT_CONFIG_FILE};
use scenesmith::app_controller::Controller;
use scenesmith::demo::DEMO_SCRIPT;
use scenesmith::file_utils::FileManager;
use scenesmith::OutputFormat;

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, Copy, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for app_config::LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => app_config::LogLevel::Error,
            CliLogLevel::Warn => app_config::LogLevel::Warn,
            CliLogLevel::Info => app_config::LogLevel::Info,
            CliLogLevel::Debug => app_config::LogLevel::Debug,
            CliLogLevel::Trace => app_config::LogLevel::Trace,
        }
    }
}

/// CLI Wrapper for OutputFormat to implement ValueEnum
#[derive(Debug, Clone, Copy, ValueEnum)]
enum CliOutputFormat {
    Text,
    Json,
    Markdown,
}

impl From<CliOutputFormat> for OutputFormat {
    fn from(cli_format: CliOutputFormat) -> Self {
        match cli_format {
            CliOutputFormat::Text => OutputFormat::Text,
            CliOutputFormat::Json => OutputFormat::Json,
            CliOutputFormat::Markdown => OutputFormat::Markdown,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Split a script into scenes and write a prompt for each
    #[command(alias = "gen")]
    Generate(GenerateArgs),

    /// Run the engine on the built-in demo script
    Demo(CommonArgs),

    /// Generate shell completions for scenesmith
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Args, Debug)]
struct CommonArgs {
    /// Output format (defaults to the configured format)
    #[arg(long, value_enum)]
    format: Option<CliOutputFormat>,

    /// Configuration file path
    #[arg(short, long = "config", default_value = DEFAULT_CONFIG_FILE)]
    config_path: PathBuf,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,

    /// Maximum words per scene
    #[arg(long)]
    max_words: Option<usize>,

    /// Maximum sentences per scene
    #[arg(long)]
    max_sentences: Option<usize>,
}

#[derive(Args, Debug)]
struct GenerateArgs {
    /// Script file, directory of scripts, or `-` for stdin (default)
    #[arg(value_name = "INPUT")]
    input: Option<PathBuf>,

    /// Output file, or output directory when INPUT is a directory
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Force overwrite of existing output files
    #[arg(short, long)]
    force_overwrite: bool,

    #[command(flatten)]
    common: CommonArgs,
}

/// scenesmith - turn a short-form script into vertical video scene prompts
#[derive(Parser, Debug)]
#[command(name = "scenesmith")]
#[command(version)]
#[command(about = "Split short-form scripts into 2-4 second scenes with text-to-video prompts")]
#[command(long_about = "scenesmith splits a prose script into short vertical scenes and writes a
cinematic text-to-video prompt for each one.

EXAMPLES:
    scenesmith generate pitch.txt                  # Print scenes for one script
    scenesmith generate pitch.txt -o pitch.json --format json
    cat pitch.txt | scenesmith generate            # Read the script from stdin
    scenesmith generate scripts/ --format markdown # One output per script in a folder
    scenesmith generate --max-words 25 pitch.txt   # Tighter scenes
    scenesmith demo                                # Try the built-in demo script
    scenesmith completions bash > scenesmith.bash  # Generate bash completions

CONFIGURATION:
    Configuration is stored in scenesmith.json by default. You can specify a
    different config file with --config. If the config file doesn't exist, a
    default one will be created automatically.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Commands,
}

// @struct: Custom logger implementation
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    // @creates: New logger with specified level
    fn new(level: LevelFilter) -> Self {
        CustomLogger { level }
    }

    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        let logger = Box::new(CustomLogger::new(level));
        log::set_boxed_logger(logger)?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: ANSI colour for log level
    fn color_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "\x1B[1;31m",
            Level::Warn => "\x1B[1;33m",
            Level::Info => "\x1B[1;32m",
            Level::Debug => "\x1B[1;36m",
            Level::Trace => "\x1B[1;35m",
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S.%3f");
            let color = Self::color_for_level(record.level());

            let mut stderr = std::io::stderr();
            let _ = writeln!(
                stderr,
                "{}{} {:<5} {}\x1B[0m",
                color,
                now,
                record.level(),
                record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

fn main() -> Result<()> {
    // The logger accepts everything; the max level is adjusted once the
    // config is loaded
    CustomLogger::init(LevelFilter::Trace)?;
    log::set_max_level(LevelFilter::Info);

    let cli = CommandLineOptions::parse();

    match cli.command {
        Commands::Completions { shell } => {
            let mut cmd = CommandLineOptions::command();
            generate(shell, &mut cmd, "scenesmith", &mut std::io::stdout());
            Ok(())
        }
        Commands::Demo(common) => run_demo(common),
        Commands::Generate(args) => run_generate(args),
    }
}

/// Load the config, apply CLI overrides, validate, and set the log level.
fn load_config(options: &CommonArgs) -> Result<Config> {
    // If log level is set via command line, apply it immediately
    if let Some(cmd_log_level) = options.log_level {
        let log_level: app_config::LogLevel = cmd_log_level.into();
        log::set_max_level(log_level.to_level_filter());
    }

    let mut config = Config::load_or_create(&options.config_path)?;

    // Override config with CLI options if provided
    if let Some(log_level) = options.log_level {
        config.log_level = log_level.into();
    }
    if let Some(max_words) = options.max_words {
        config.segmentation.max_words_per_scene = max_words;
    }
    if let Some(max_sentences) = options.max_sentences {
        config.segmentation.max_sentences_per_scene = max_sentences;
    }
    if let Some(format) = options.format {
        config.output.format = format.into();
    }

    // Validate the configuration after loading and overriding
    config.validate().context("Configuration validation failed")?;

    log::set_max_level(config.log_level.to_level_filter());
    debug!("Using configuration from {}", options.config_path.display());

    Ok(config)
}

fn run_demo(options: CommonArgs) -> Result<()> {
    let config = load_config(&options)?;
    let format = config.output.format;
    let controller = Controller::with_config(config)?;

    let rendered = controller.render_script(DEMO_SCRIPT, format)?;
    print!("{}", rendered);
    Ok(())
}

fn run_generate(options: GenerateArgs) -> Result<()> {
    let config = load_config(&options.common)?;
    let format = config.output.format;
    let controller = Controller::with_config(config)?;

    let input = options.input.filter(|path| path.as_os_str() != "-");

    match input {
        None => {
            let script = FileManager::read_stdin()?;
            let rendered = controller.render_script(&script, format)?;
            emit(&rendered, options.output.as_deref(), options.force_overwrite)
        }
        Some(path) if path.is_dir() => {
            let report = controller.run_folder(
                &path,
                options.output.as_deref(),
                format,
                options.force_overwrite,
            )?;
            if report.errors > 0 {
                return Err(anyhow!("{} script(s) failed", report.errors));
            }
            Ok(())
        }
        Some(path) if path.is_file() => match options.output {
            Some(output_path) => {
                Controller::ensure_writable(&output_path, options.force_overwrite)?;
                controller.run(&path, output_path, format, true)?;
                Ok(())
            }
            None => {
                let script = FileManager::read_to_string(&path)?;
                let rendered = controller.render_script(&script, format)?;
                print!("{}", rendered);
                Ok(())
            }
        },
        Some(path) => Err(anyhow!("Input path does not exist: {:?}", path)),
    }
}

/// Print rendered output, or write it to a file.
fn emit(rendered: &str, output: Option<&Path>, force_overwrite: bool) -> Result<()> {
    match output {
        None => {
            print!("{}", rendered);
            Ok(())
        }
        Some(path) => {
            Controller::ensure_writable(path, force_overwrite)?;
            FileManager::write_to_file(path, rendered)
        }
    }
}
