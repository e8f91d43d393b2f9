//! bignat — regression and benchmark driver for the arithmetic engine.

mod app;
mod config;
mod errors;
mod generator;

fn main() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    let config = config::AppConfig::parse();
    if let Err(error) = app::run(&config) {
        eprintln!("error: {error}");
        std::process::exit(errors::handle_error(&error));
    }
}
