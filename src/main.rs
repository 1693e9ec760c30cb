use hmcalc::commands::Cli;
use hmcalc::libs::messages::macros::is_debug_mode;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    if is_debug_mode() {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
        tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
        tracing::debug!("Starting hmcalc v{}", env!("CARGO_PKG_VERSION"));
    }

    Cli::menu()
}
