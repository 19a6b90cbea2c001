use bank_accounts::account::Output;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Err(error) = bank_accounts::demo::run(&Output::new(std::io::stdout())) {
        tracing::error!(error = %error, "demo scenario aborted");
    }
}
