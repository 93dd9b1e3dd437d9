//! SermonGen CLI entry point

use std::process::ExitCode;

use clap::Parser;

use sermon_gen::cli::{
    app::{config_form, load_merged_config, load_request_form, run_generate, EXIT_ERROR, EXIT_USAGE_ERROR},
    args::{Cli, Commands},
    config_cmd::handle_config_command,
    history_cmd::handle_history_command,
    logging,
    presenter::Presenter,
    GenerateOptions,
};
use sermon_gen::domain::config::AppConfig;
use sermon_gen::infrastructure::{JsonHistoryStore, XdgConfigStore};

#[tokio::main(flavor = "multi_thread", worker_threads = 2)]
async fn main() -> ExitCode {
    let mut cli = Cli::parse();
    logging::init(cli.verbose);
    let presenter = Presenter::new();

    // Handle subcommands
    match cli.command.take() {
        Some(Commands::Config { action }) => {
            let store = XdgConfigStore::new();
            if let Err(e) = handle_config_command(action, &store, &presenter).await {
                presenter.error(&e.to_string());
                return ExitCode::from(EXIT_ERROR);
            }
            return ExitCode::SUCCESS;
        }
        Some(Commands::History { action }) => {
            let store = JsonHistoryStore::new();
            if let Err(e) = handle_history_command(action, &store, &presenter).await {
                presenter.error(&e.to_string());
                return ExitCode::from(EXIT_ERROR);
            }
            return ExitCode::SUCCESS;
        }
        None => {}
    }

    // Build CLI config from args
    let cli_config = AppConfig {
        model: cli.model.clone(),
        history: cli.no_save.then_some(false),
        clipboard: cli.clipboard.then_some(true),
        ..Default::default()
    };

    // Merge config
    let config = load_merged_config(cli_config, &presenter).await;

    // Form: config defaults < request file < flags
    let mut form = config_form(&config);
    if let Some(path) = cli.request.as_deref() {
        match load_request_form(path).await {
            Ok(file_form) => form = form.merge(file_form),
            Err(e) => {
                presenter.error(&e);
                return ExitCode::from(EXIT_USAGE_ERROR);
            }
        }
    }
    let form = form.merge(cli.to_form());

    let options = GenerateOptions {
        form,
        dry_run: cli.dry_run,
        json: cli.json,
    };

    run_generate(options, &config).await
}
