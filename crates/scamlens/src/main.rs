use crate::prelude::*;
use clap::Parser;

mod check;
mod classify;
mod error;
mod extract;
mod prelude;
mod serve;

#[derive(Debug, clap::Parser)]
#[command(
    author,
    version,
    about,
    long_about = "Screen suspicious messages, documents, and URLs with a generative model"
)]
pub struct App {
    #[command(subcommand)]
    pub command: SubCommands,

    #[clap(flatten)]
    global: Global,
}

#[derive(Debug, Clone, clap::Args)]
pub struct Global {
    /// Whether to display additional information.
    #[clap(long, env = "SCAMLENS_VERBOSE", global = true, default_value = "false")]
    verbose: bool,
}

#[derive(Debug, clap::Parser)]
pub enum SubCommands {
    /// Run the web application
    Serve(crate::serve::Options),

    /// Classify a single URL from the command line
    Url(crate::check::UrlOptions),

    /// Classify a local document from the command line
    File(crate::check::FileOptions),
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    color_eyre::install()?;

    let app = App::parse();

    match app.command {
        SubCommands::Serve(options) => crate::serve::run(options, app.global).await,
        SubCommands::Url(options) => crate::check::run_url(options, app.global).await,
        SubCommands::File(options) => crate::check::run_file(options, app.global).await,
    }
    .map_err(|err: color_eyre::eyre::Report| eyre!(err))
}
