use anyhow::Context;
use clap::Parser;
use portfolio_ai::{cli, config, logging, suggestion};
use cli::{Cli, Commands};
use config::Config;
use portfolio_common::{Category, ProjectDirectory};
use suggestion::{GeminiClient, SuggestionService};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match cli.command {
        Commands::Projects { category, expand, file, format } => {
            print!("{}", cli::run_projects(&category, expand, file.as_deref(), format)?);
        }

        Commands::Categories => {
            for category in Category::VALUES {
                println!("{}", category.label());
            }
        }

        Commands::Suggest { text, merge_into } => {
            let text = text.join(" ");
            let config = Config::load()?;
            let client = GeminiClient::from_config(&config)?;

            println!("Generating project entry...");

            match merge_into {
                Some(path) => {
                    let directory = ProjectDirectory::load(&path)
                        .with_context(|| format!("failed to load projects from {}", path.display()))?;
                    let (suggestion, merged) =
                        suggestion::suggest_and_merge(&client, &directory, &text)
                            .await
                            .inspect_err(|e| eprintln!("{}", cli::failure_hint(e.kind())))?;

                    println!("{}", serde_json::to_string_pretty(&suggestion)?);
                    merged.save(&path)?;
                    println!("✔ Added to {} ({} projects)", path.display(), merged.len());
                }
                None => {
                    let suggestion = client
                        .generate(&text)
                        .await
                        .inspect_err(|e| eprintln!("{}", cli::failure_hint(e.kind())))?;
                    println!("{}", serde_json::to_string_pretty(&suggestion)?);
                }
            }
        }

        Commands::Config { set_api_key, show } => {
            let mut config = Config::load()?;

            if let Some(key) = set_api_key {
                config.set_api_key(key)?;
                println!("✔ API key saved");
            }

            if show {
                println!("Settings:");
                println!("  Model: {}", config.model);
                println!("  API base: {}", config.resolve_api_base());
                println!("  Timeout: {}s", config.timeout_seconds);
                println!(
                    "  API key: {}",
                    if config.resolve_api_key().is_some() { "set" } else { "not set" }
                );
            }
        }
    }

    Ok(())
}
