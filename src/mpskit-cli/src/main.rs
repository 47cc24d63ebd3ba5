mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use cli::*;

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "mpskit=info,mpskit_cli=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing();

    match cli.command {
        Commands::Charmap { command } => match command {
            CharmapCommand::Create { dir } => {
                commands::charmap::create(dir.as_deref())?;
            }

            CharmapCommand::Show { json } => {
                let loaded = commands::load_charmap(cli.charmap.as_deref(), cli.dir.as_deref())?;
                commands::charmap::show(&loaded, json)?;
            }
        },

        Commands::Text { command } => {
            let loaded = commands::load_charmap(cli.charmap.as_deref(), cli.dir.as_deref())?;

            match command {
                TextCommand::Decode {
                    input,
                    offset,
                    length,
                    null_term,
                } => {
                    commands::text::decode(&input, offset, length, null_term, &loaded.charmap)?;
                }

                TextCommand::Encode {
                    text,
                    null_term,
                    max_len,
                    fill,
                    output,
                } => {
                    let options = mpskit::EncodeOptions {
                        null_term,
                        max_len,
                        fill,
                    };
                    commands::text::encode(&text, &options, output.as_deref(), &loaded.charmap)?;
                }
            }
        }
    }

    Ok(())
}
