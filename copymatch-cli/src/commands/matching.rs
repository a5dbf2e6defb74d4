//! Match command implementation

use crate::config::CliConfig;
use crate::error::CliError;
use crate::input::{resolve_sources, FileReader};
use crate::output::{create_formatter, write_report, FormatOptions, OutputFormat};
use crate::progress::ProgressReporter;
use anyhow::{Context, Result};
use clap::Args;
use copymatch_engine::{
    ExecutionMode, Input, MatchProcessorBuilder, MatchReport, SourceInput, Vocabulary,
};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Arguments for the match command
#[derive(Debug, Args)]
pub struct MatchArgs {
    /// Suspect document ("-" reads stdin)
    #[arg(value_name = "SUSPECT")]
    pub suspect: String,

    /// Source documents or patterns (supports glob)
    #[arg(value_name = "SOURCES", required = true)]
    pub sources: Vec<String>,

    /// Maximum edit distance between equivalent words (0 = exact)
    #[arg(short, long, value_name = "N")]
    pub distance: Option<u8>,

    /// Minimum number of consecutive matching words
    #[arg(short, long, value_name = "N")]
    pub length: Option<usize>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Word list used to rejoin words hyphenated across lines
    #[arg(long, value_name = "FILE")]
    pub vocabulary: Option<PathBuf>,

    /// Do not rejoin hyphenated words
    #[arg(long)]
    pub no_hyphen_merge: bool,

    /// Force parallel scanning even for few small sources
    #[arg(short, long)]
    pub parallel: bool,

    /// Number of worker threads
    #[arg(short, long, value_name = "N")]
    pub threads: Option<usize>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Settings after merging the config file with command-line flags
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    /// Minimum run length
    pub window_size: usize,
    /// Per-token edit distance
    pub distance: u8,
    /// Output format
    pub format: OutputFormat,
    /// Hyphen merging requested by config and flags
    pub merge_hyphenated: bool,
    /// Word list for hyphen merging, if merging is on
    pub vocabulary: Option<PathBuf>,
    /// Execution mode
    pub execution_mode: ExecutionMode,
    /// Worker thread override
    pub threads: Option<usize>,
    /// Formatter options
    pub format_options: FormatOptions,
}

impl MatchArgs {
    /// Execute the match command
    pub fn execute(&self) -> Result<()> {
        self.init_logging()?;

        log::info!("Starting passage matching");
        log::debug!("Arguments: {:?}", self);

        let config = match &self.config {
            Some(path) => CliConfig::load(path)?,
            None => CliConfig::default(),
        };
        let settings = self.settings(&config)?;
        log::debug!("Settings: {:?}", settings);

        let (suspect_label, suspect_text) = self.read_suspect()?;
        let sources = resolve_sources(&self.sources)?;
        log::info!("Matching {} against {} sources", suspect_label, sources.len());

        let report = self.run(&settings, &suspect_label, &suspect_text, sources)?;
        self.write_output(&settings, &report, &suspect_text)
    }

    /// Merge config file values with flags; flags win
    pub fn settings(&self, config: &CliConfig) -> Result<Settings> {
        let format = match self.format {
            Some(format) => format,
            None => OutputFormat::from_name(&config.output.default_format).ok_or_else(|| {
                CliError::ConfigError(format!(
                    "unknown output format: {}",
                    config.output.default_format
                ))
            })?,
        };

        let merge_hyphenated = !self.no_hyphen_merge && config.text.merge_hyphenated;
        let vocabulary = if merge_hyphenated {
            self.vocabulary
                .clone()
                .or_else(|| config.text.vocabulary.clone())
        } else {
            None
        };
        if merge_hyphenated && vocabulary.is_none() {
            log::info!(
                "hyphen merging is on but no vocabulary is set; words broken across lines stay split"
            );
        }

        let execution_mode = if self.parallel || config.performance.parallel {
            ExecutionMode::Parallel
        } else {
            ExecutionMode::Adaptive
        };

        let threads = self
            .threads
            .or(match config.performance.worker_threads {
                0 => None,
                n => Some(n),
            });
        if let Some(n) = threads {
            let cpus = num_cpus::get();
            if n > cpus {
                log::warn!("{n} worker threads requested on {cpus} CPUs");
            }
        }

        Ok(Settings {
            window_size: self.length.unwrap_or(config.matching.window_size),
            distance: self.distance.unwrap_or(config.matching.distance),
            format,
            merge_hyphenated,
            vocabulary,
            execution_mode,
            threads,
            format_options: FormatOptions {
                pretty_json: config.output.pretty_json,
                context_chars: config.output.context_chars,
            },
        })
    }

    fn read_suspect(&self) -> Result<(String, String)> {
        if self.suspect == "-" {
            return Ok(("<stdin>".to_string(), FileReader::read_stdin()?));
        }
        let path = Path::new(&self.suspect);
        let text = FileReader::read_text(path)?;
        let label = SourceInput::from(path.to_path_buf()).label;
        Ok((label, text))
    }

    fn run(
        &self,
        settings: &Settings,
        suspect_label: &str,
        suspect_text: &str,
        sources: Vec<PathBuf>,
    ) -> Result<MatchReport> {
        let mut builder = MatchProcessorBuilder::new()
            .window_size(settings.window_size)
            .equivalence_threshold(settings.distance)
            .execution_mode(settings.execution_mode)
            .threads(settings.threads);
        if let Some(path) = &settings.vocabulary {
            let vocabulary: Vocabulary = FileReader::read_vocabulary(path)?;
            log::debug!("Loaded {} vocabulary words", vocabulary.len());
            builder = builder.vocabulary(vocabulary);
        }
        let processor = builder
            .build()
            .map_err(|e| CliError::ConfigError(e.to_string()))?;

        let mut progress = ProgressReporter::new(self.quiet);
        progress.init_sources(sources.len() as u64);

        let suspect = SourceInput::labeled(suspect_label, Input::from_text(suspect_text));
        let sources = sources.into_iter().map(SourceInput::from).collect();
        let report = processor
            .process_with_progress(suspect, sources, &|label| progress.source_completed(label))
            .map_err(|e| CliError::MatchFailed {
                suspect: suspect_label.to_string(),
                reason: e.to_string(),
            })?;
        progress.finish();

        log::info!(
            "Processed in {:.1} ms ({:?} mode)",
            report.metadata.processing_time_ms,
            report.metadata.execution_mode
        );
        Ok(report)
    }

    fn write_output(&self, settings: &Settings, report: &MatchReport, suspect_text: &str) -> Result<()> {
        let writer: Box<dyn Write + Send + Sync> = match &self.output {
            Some(path) => Box::new(BufWriter::new(
                File::create(path)
                    .with_context(|| format!("Failed to create output file: {}", path.display()))?,
            )),
            None => Box::new(io::stdout()),
        };

        let mut formatter =
            create_formatter(settings.format, writer, suspect_text, settings.format_options);
        write_report(formatter.as_mut(), report)
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) -> Result<()> {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            // A second init (e.g. from tests) keeps the first logger
            let _ = env_logger::Builder::from_env(
                env_logger::Env::default().default_filter_or(log_level),
            )
            .try_init();
        }

        Ok(())
    }
}
