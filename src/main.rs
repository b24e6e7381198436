use anyhow::Result;
use tasklist::config::Config;
use tasklist::logger::Logger;
use tasklist::ui;

#[tokio::main]
async fn main() -> Result<()> {
    if std::env::args().skip(1).any(|arg| arg == "--init-config") {
        Config::generate_default_config(Config::get_default_config_path()?)?;
        return Ok(());
    }

    let config = Config::load()?;
    let logger = Logger::from_config(config.logging.enabled)?;
    log::info!("tasklist starting");

    // Run the TUI application
    ui::run_app(config, logger).await?;

    Ok(())
}
