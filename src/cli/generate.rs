//! Generate command handler.

use super::exit_codes;
use crate::config::{AppConfig, GeneratorConfig};
use crate::generator::{GenerationService, NameGenerator, PatternGenerator};
use anyhow::{Context, Result};

/// Pick the generator for `config`.
///
/// The LLM generator is used when the crate is built with the `llm` feature
/// and an API key is available; pattern generation otherwise.
pub fn build_generator(config: &GeneratorConfig) -> Result<Box<dyn NameGenerator>> {
    if let Some(generator) = llm_generator(config)? {
        return Ok(generator);
    }
    Ok(Box::new(PatternGenerator::new()))
}

#[cfg(feature = "llm")]
fn llm_generator(config: &GeneratorConfig) -> Result<Option<Box<dyn NameGenerator>>> {
    let Some(llm_config) = config.to_llm_config() else {
        return Ok(None);
    };
    let generator = crate::generator::LlmGenerator::new(llm_config)
        .context("Failed to initialize LLM generator")?;
    Ok(Some(Box::new(generator)))
}

#[cfg(not(feature = "llm"))]
#[allow(clippy::unnecessary_wraps)]
fn llm_generator(config: &GeneratorConfig) -> Result<Option<Box<dyn NameGenerator>>> {
    if config.resolved_api_key().is_some() {
        tracing::debug!("API key ignored: built without the `llm` feature");
    }
    Ok(None)
}

/// Run the generate command: generate a name, store it and print it.
pub fn run_generate(prompt: &str, config: &AppConfig, quiet: bool) -> Result<i32> {
    let generator = build_generator(&config.generator)?;
    let store = config
        .storage
        .open()
        .context("Failed to open target storage")?;

    let service = GenerationService::new(generator, store);
    let name = service
        .generate(prompt)
        .context("Failed to generate target name")?;

    println!("{name}");
    if !quiet {
        eprintln!("Target stored in {}", service.store().path().display());
    }
    Ok(exit_codes::SUCCESS)
}
