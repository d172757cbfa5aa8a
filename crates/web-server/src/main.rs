// This main function is the entry point when running `cargo run -p web-server`.
// It loads the settings, sets up logging and hands over to `run_server`.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = configuration::load_config(None)?;
    let _log_guard = configuration::init_logging(&config.logging)?;
    web_server::run_server(config).await
}
