use clap::{CommandFactory, Parser};
use clap_complete::generate;
use mock_class::cli::{commands, Cli, Commands, Verbosity};
use mock_class::config::Config;
use mock_class::ui::formatter::Formatter;
use std::io;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn initialize_tracing(verbosity: Verbosity) {
    let log_level = verbosity.to_log_level();
    let fallback_filter = format!("mock_class={}", log_level);

    let use_json = std::env::var("MOCK_CLASS_LOG_JSON").is_ok();

    if use_json {
        let json_layer = tracing_subscriber::fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_level(true);

        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| fallback_filter.clone().into()),
            )
            .with(json_layer)
            .init();
    } else {
        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_level(true);

        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| fallback_filter.into()),
            )
            .with(fmt_layer)
            .init();
    }
}

fn main() -> miette::Result<()> {
    Formatter::configure_colors_from_env();

    let cli = Cli::parse();
    let verbosity = cli.verbosity();
    Formatter::set_verbosity(verbosity.level());

    initialize_tracing(verbosity);

    let config = Config::load_or_default();

    match cli.command {
        Commands::Inspect(mut args) => {
            args.merge_config(&config);
            commands::inspect(args)
        }
        Commands::Scaffold(mut args) => {
            args.merge_config(&config);
            commands::scaffold(args)
        }
        Commands::Completions(args) => {
            let mut cmd = Cli::command();
            generate(args.shell, &mut cmd, "mock-class", &mut io::stdout());
            Ok(())
        }
    }
}
