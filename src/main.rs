use clap::Parser;
use scrollfeed::cli::Cli;
use scrollfeed::logging::init_tracing;
use scrollfeed::ui::runtime;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_file.as_deref());

    let config = cli.load_config()?;
    tracing::info!(
        endpoint = %config.source.endpoint,
        page_size = config.source.page_size,
        "Starting scrollfeed"
    );

    runtime::run(config).await
}
