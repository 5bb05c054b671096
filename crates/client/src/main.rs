//! huxley-client CLI entry point.

use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use huxley_client::cli::committees::CommitteesAction;
use huxley_client::cli::welcome::WelcomeAction;
use huxley_client::cli::{Cli, Commands, OutputFormat};
use huxley_client::output::{format_output, pretty};
use huxley_client::{CommitteeCache, CommitteeStore, FormSyncController, HuxleyClient, SaveError};
use huxley_core::welcome::{FormSchema, RuleRegistry, WelcomeRecord};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "huxley_client=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = cli.client_config();
    let client = Arc::new(HuxleyClient::from_config(&config)?);
    tracing::debug!(base_url = client.base_url(), "Client configured");

    match cli.command {
        Commands::Welcome(welcome_cmd) => match welcome_cmd.action {
            WelcomeAction::Validate { fields } => {
                let record: WelcomeRecord = fields.into_iter().collect();
                match FormSchema::welcome().validate(&RuleRegistry::standard(), &record) {
                    Ok(()) => {
                        if !cli.quiet {
                            println!("Valid");
                        }
                    }
                    Err(report) => {
                        match cli.format {
                            OutputFormat::Json => println!("{}", format_output(&report, cli.format)),
                            OutputFormat::Pretty => println!("{}", pretty::format_report(&report)),
                        }
                        anyhow::bail!("validation failed");
                    }
                }
            }
            WelcomeAction::Save { fields } => {
                let controller = FormSyncController::new(client, WelcomeRecord::new());
                for (field, value) in fields {
                    controller.field_changed(field, value).await;
                }
                match controller.submit().await {
                    Ok(()) => {
                        let record = controller.record().await;
                        match cli.format {
                            OutputFormat::Json => println!("{}", format_output(&record, cli.format)),
                            OutputFormat::Pretty => {
                                println!("Saved:\n{}", pretty::format_record(&record))
                            }
                        }
                    }
                    Err(SaveError::Validation(report)) => {
                        match cli.format {
                            OutputFormat::Json => println!("{}", format_output(&report, cli.format)),
                            OutputFormat::Pretty => println!("{}", pretty::format_report(&report)),
                        }
                        anyhow::bail!("validation failed; nothing was saved");
                    }
                    Err(e) => return Err(e.into()),
                }
            }
        },
        Commands::Committees(committees_cmd) => match committees_cmd.action {
            CommitteesAction::List { special } => {
                let store = CommitteeStore::new(client, Arc::new(CommitteeCache::new()));
                let committees = if special {
                    store.special_committees().await?
                } else {
                    store.committees().await?
                };
                match cli.format {
                    OutputFormat::Json => println!("{}", format_output(&committees[..], cli.format)),
                    OutputFormat::Pretty => {
                        println!("{}", pretty::format_committees(&committees))
                    }
                }
            }
        },
    }

    Ok(())
}
