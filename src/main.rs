use appdelivery_lib::bootstrap::{
    config::resolve_config_path, init_tracing_subscriber, load_app_config, wire_dependencies,
};
use appdelivery_lib::cli::{self, Cli};
use clap::Parser;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Cli::parse();

    let config = load_app_config()?;
    init_tracing_subscriber(&config)?;
    tracing::debug!(
        path = ?resolve_config_path(),
        backend = %config.profile_backend,
        "configuration loaded"
    );

    let deps = wire_dependencies(&config)?;
    let output = cli::run(args, deps).await?;
    println!("{output}");

    Ok(())
}
