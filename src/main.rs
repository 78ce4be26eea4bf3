use std::{fs, path::PathBuf};

use anyhow::{Context, Error, Result, anyhow};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use whatsapp_templates::{
    clients::template::TemplateClient,
    config::Config,
    models::template::{TemplateDefinition, TemplateField},
};

#[derive(Parser)]
#[command(name = "wa_templates")]
#[command(about = "List, fetch and create WhatsApp message templates")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List every template of a business account
    List {
        #[arg(long)]
        waba_id: Option<String>,

        /// Comma-separated fields to return, e.g. `name,status`
        #[arg(long)]
        fields: Option<String>,
    },

    /// Fetch a single template by id
    Get {
        template_id: String,

        #[arg(long)]
        fields: Option<String>,
    },

    /// Search templates by name
    Find {
        name: String,

        #[arg(long)]
        waba_id: Option<String>,

        #[arg(long)]
        fields: Option<String>,
    },

    /// Validate and submit a template definition read from a JSON file
    Create {
        file: PathBuf,

        #[arg(long)]
        waba_id: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .json()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = Config::load()?;
    let client = TemplateClient::new(&config)?;

    match cli.command {
        Command::List { waba_id, fields } => {
            let fields = parse_fields(fields.as_deref())?;
            let templates = client
                .get_all_templates(waba_id.as_deref(), fields.as_deref())
                .await?;
            print_json(&templates)
        }
        Command::Get {
            template_id,
            fields,
        } => {
            let fields = parse_fields(fields.as_deref())?;
            let template = client
                .get_template_by_id(&template_id, fields.as_deref())
                .await?;
            print_json(&template)
        }
        Command::Find {
            name,
            waba_id,
            fields,
        } => {
            let fields = parse_fields(fields.as_deref())?;
            let templates = client
                .get_template_by_name(&name, waba_id.as_deref(), fields.as_deref())
                .await?;
            print_json(&templates)
        }
        Command::Create { file, waba_id } => {
            let raw = fs::read_to_string(&file)
                .with_context(|| format!("Failed to read {}", file.display()))?;
            let definition: TemplateDefinition = serde_json::from_str(&raw)
                .with_context(|| format!("Invalid template definition in {}", file.display()))?;
            let created = client
                .create_template(&definition, waba_id.as_deref())
                .await?;
            print_json(&created)
        }
    }
}

fn parse_fields(raw: Option<&str>) -> Result<Option<Vec<TemplateField>>, Error> {
    let Some(raw) = raw else {
        return Ok(None);
    };

    raw.split(',')
        .filter(|field| !field.trim().is_empty())
        .map(|field| {
            TemplateField::parse(field).ok_or_else(|| anyhow!("Unknown template field '{}'", field.trim()))
        })
        .collect::<Result<Vec<_>, _>>()
        .map(Some)
}

fn print_json<T: Serialize>(value: &T) -> Result<(), Error> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
