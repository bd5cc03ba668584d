//! name-verify: rule-based personal name verification
//!
//! Generates a target name, stores it, and verifies candidate spellings
//! against it with an explainable confidence score.

#![allow(clippy::needless_pass_by_value)]

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use name_verify::{
    cli::{self, exit_codes, CorpusConfig, VerifyConfig},
    config::{AppConfig, ConfigOverrides, Validatable},
    reports::ReportFormat,
};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "name-verify")]
#[command(version)]
#[command(about = "Rule-based personal name verification", long_about = None)]
#[command(after_help = "EXIT CODES:
    0  Candidate matched (or command succeeded)
    1  No match / corpus failure / no stored target (show)
    3  Error occurred (including verifying with no stored target)

EXAMPLES:
    # Generate and store a target name
    name-verify generate \"an arabic name with ibn\"

    # Verify a candidate against the stored target
    name-verify verify \"Omar Ibn Alkhattab\"

    # Verify against an explicit target with the signal breakdown
    name-verify verify \"Tlyer Bilha\" --target \"Tyler Bliha\" --explain

    # Run the regression corpus as JSON
    name-verify corpus -o json")]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Disable colored output (also respects `NO_COLOR` env)
    #[arg(long, global = true)]
    no_color: bool,

    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Path of the stored target file
    #[arg(long, global = true, env = "NAME_VERIFY_STORAGE")]
    storage: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Matching options shared by `verify`, `corpus` and `rules`
#[derive(clap::Args)]
struct MatchingArgs {
    /// Scoring preset (strict, balanced, permissive)
    #[arg(long)]
    preset: Option<String>,

    /// Match threshold (0.0-1.0), overrides the preset
    #[arg(long)]
    threshold: Option<f64>,

    /// JSON or YAML rule file merged over the builtin rules
    #[arg(long)]
    rules: Option<PathBuf>,
}

/// Arguments for the `verify` subcommand
#[derive(Parser)]
struct VerifyArgs {
    /// Candidate name to verify
    candidate: String,

    /// Verify against this name instead of the stored target
    #[arg(long)]
    target: Option<String>,

    /// Output format
    #[arg(short, long)]
    output: Option<ReportFormat>,

    /// Output file path (stdout if not specified)
    #[arg(short = 'O', long)]
    output_file: Option<PathBuf>,

    /// Show the signal breakdown behind the confidence
    #[arg(long)]
    explain: bool,

    #[command(flatten)]
    matching: MatchingArgs,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a target name from a prompt and store it
    Generate {
        /// Free-text description, e.g. "a slavic name"
        prompt: String,
    },

    /// Verify a candidate name against the stored target
    Verify(VerifyArgs),

    /// Show the stored target
    Show {
        /// Output format
        #[arg(short, long)]
        output: Option<ReportFormat>,
    },

    /// Clear the stored target
    Clear,

    /// Run the builtin regression corpus
    Corpus {
        /// Output format
        #[arg(short, long)]
        output: Option<ReportFormat>,

        /// Output file path (stdout if not specified)
        #[arg(short = 'O', long)]
        output_file: Option<PathBuf>,

        /// List only failing cases
        #[arg(long)]
        failures_only: bool,

        #[command(flatten)]
        matching: MatchingArgs,
    },

    /// Print the effective variation rule set as JSON
    Rules {
        /// JSON or YAML rule file merged over the builtin rules
        #[arg(long)]
        rules: Option<PathBuf>,

        /// Output file path (stdout if not specified)
        #[arg(short = 'O', long)]
        output_file: Option<PathBuf>,
    },

    /// Print the JSON schema of the configuration file
    Schema {
        /// Write the schema to a file instead of stdout
        #[arg(short = 'O', long)]
        output_file: Option<PathBuf>,
    },

    /// Configuration file utilities
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Generate shell completions
    Completions {
        /// Target shell
        shell: Shell,
    },
}

/// Sub-subcommands for the `config` command
#[derive(Subcommand)]
enum ConfigAction {
    /// Print the effective configuration (defaults + file)
    Show,
    /// Generate an example .name-verify.yaml in the current directory
    Init,
}

impl Cli {
    /// CLI flags as an override layer for the config file.
    fn overrides(
        &self,
        matching: Option<&MatchingArgs>,
        output: Option<ReportFormat>,
    ) -> ConfigOverrides {
        let mut overrides = ConfigOverrides {
            storage_path: self.storage.clone(),
            output_format: output,
            no_color: self.no_color,
            ..ConfigOverrides::default()
        };
        if let Some(args) = matching {
            overrides.preset.clone_from(&args.preset);
            overrides.threshold = args.threshold;
            overrides.rules_file.clone_from(&args.rules);
        }
        overrides
    }

    fn load_config(&self, overrides: &ConfigOverrides) -> Result<AppConfig> {
        let (config, loaded_from) =
            AppConfig::from_file_with_overrides(self.config.as_deref(), overrides);
        if let Some(path) = &loaded_from {
            tracing::debug!("Loaded config from {}", path.display());
        }

        let errors = config.validate();
        if !errors.is_empty() {
            let messages: Vec<String> = errors.iter().map(ToString::to_string).collect();
            anyhow::bail!("Invalid configuration:\n  {}", messages.join("\n  "));
        }
        Ok(config)
    }
}

fn main() {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "warn"
    } else {
        "info"
    };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(io::stderr),
        )
        .init();

    let exit_code = match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e:#}");
            exit_codes::ERROR
        }
    };
    if exit_code != exit_codes::SUCCESS {
        std::process::exit(exit_code);
    }
}

fn run(cli: Cli) -> Result<i32> {
    match &cli.command {
        Commands::Generate { prompt } => {
            let config = cli.load_config(&cli.overrides(None, None))?;
            cli::run_generate(prompt, &config, cli.quiet)
        }

        Commands::Verify(args) => {
            let config = cli.load_config(&cli.overrides(Some(&args.matching), args.output))?;
            cli::run_verify(VerifyConfig {
                candidate: args.candidate.clone(),
                target: args.target.clone(),
                app: config,
                explain: args.explain,
                output_file: args.output_file.clone(),
                quiet: cli.quiet,
            })
        }

        Commands::Show { output } => {
            let config = cli.load_config(&cli.overrides(None, *output))?;
            cli::run_show(&config.storage, config.output.format, None)
        }

        Commands::Clear => {
            let config = cli.load_config(&cli.overrides(None, None))?;
            cli::run_clear(&config.storage, cli.quiet)
        }

        Commands::Corpus {
            output,
            output_file,
            failures_only,
            matching,
        } => {
            let config = cli.load_config(&cli.overrides(Some(matching), *output))?;
            cli::run_corpus(CorpusConfig {
                app: config,
                failures_only: *failures_only,
                output_file: output_file.clone(),
                quiet: cli.quiet,
            })
        }

        Commands::Rules { rules, output_file } => {
            let overrides = ConfigOverrides {
                rules_file: rules.clone(),
                ..cli.overrides(None, None)
            };
            let config = cli.load_config(&overrides)?;
            cli::run_rules(&config.matching, output_file.clone())
        }

        Commands::Schema { output_file } => {
            let schema = name_verify::config::generate_json_schema();
            match output_file {
                Some(path) => {
                    std::fs::write(path, &schema)
                        .with_context(|| format!("failed to write {}", path.display()))?;
                    if !cli.quiet {
                        eprintln!("Schema written to {}", path.display());
                    }
                }
                None => println!("{schema}"),
            }
            Ok(exit_codes::SUCCESS)
        }

        Commands::Config { action } => match action {
            ConfigAction::Show => {
                let (config, loaded_from) =
                    name_verify::config::load_or_default(cli.config.as_deref());
                if let Some(path) = &loaded_from {
                    eprintln!("# Loaded from: {}", path.display());
                } else {
                    eprintln!("# No config file found; showing defaults");
                }
                let yaml = serde_yaml::to_string(&config).context("failed to serialize config")?;
                print!("{yaml}");
                Ok(exit_codes::SUCCESS)
            }
            ConfigAction::Init => {
                let target = std::env::current_dir()
                    .context("cannot determine current directory")?
                    .join(".name-verify.yaml");
                if target.exists() {
                    anyhow::bail!(
                        "{} already exists. Remove it first to re-initialize.",
                        target.display()
                    );
                }
                std::fs::write(&target, name_verify::config::generate_example_config())
                    .with_context(|| format!("failed to write {}", target.display()))?;
                eprintln!("Created {}", target.display());
                Ok(exit_codes::SUCCESS)
            }
        },

        Commands::Completions { shell } => {
            generate(*shell, &mut Cli::command(), "name-verify", &mut io::stdout());
            Ok(exit_codes::SUCCESS)
        }
    }
}
