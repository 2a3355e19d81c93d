use crate::classify::{ClassificationProvider, Gemini, ModelOptions};
use crate::prelude::*;
use anstream::{eprintln, println};
use scamlens_core::{prompt, reply, url};

#[derive(Debug, clap::Args)]
pub struct UrlOptions {
    /// URL to classify (must start with http:// or https://)
    pub url: String,

    #[clap(flatten)]
    pub model: ModelOptions,
}

#[derive(Debug, clap::Args)]
pub struct FileOptions {
    /// Path to a .pdf or .txt file
    pub path: std::path::PathBuf,

    #[clap(flatten)]
    pub model: ModelOptions,
}

/// One-shot URL classification: same validation and normalization as the
/// web route, category printed to stdout.
pub async fn run_url(options: UrlOptions, global: crate::Global) -> Result<()> {
    let target = options.url.trim();

    if !url::has_supported_scheme(target) {
        return Err(eyre!(Error::InvalidUrlFormat));
    }

    if global.verbose {
        eprintln!("Model: {}", options.model.model);
        eprintln!("URL: {}", target);
    }

    let provider = Gemini::new(&options.model)?;
    let raw = provider.classify(&prompt::url_prompt(target)).await?;

    println!("{}", reply::url_category(&raw));

    Ok(())
}

/// One-shot content classification of a local document, result sentence
/// printed to stdout.
pub async fn run_file(options: FileOptions, global: crate::Global) -> Result<()> {
    let filename = options
        .path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or_default()
        .to_string();

    let bytes = tokio::fs::read(&options.path)
        .await
        .map_err(|e| eyre!("Failed to read file '{}': {}", options.path.display(), e))?;

    let text = crate::extract::extract_text(&filename, &bytes)?;

    if global.verbose {
        eprintln!("Model: {}", options.model.model);
        eprintln!("Extracted {} chars", text.len());
    }

    let provider = Gemini::new(&options.model)?;
    let raw = provider.classify(&prompt::content_prompt(&text)).await?;

    println!("{}", reply::content_message(&raw));

    Ok(())
}
