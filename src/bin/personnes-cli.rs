use clap::{Parser, Subcommand};
use serde_json::Value;
use url::Url;

use personnes_gateway::store::Person;

#[derive(Parser)]
#[command(name = "personnes-cli")]
#[command(about = "Command-line client for the personnes gateway", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:12345")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List every person
    List,
    /// Show one person
    Get { id: String },
    /// Add a person under the given id
    Create {
        id: String,
        #[arg(long)]
        prenom: Option<String>,
        #[arg(long)]
        nom: Option<String>,
        #[arg(long)]
        ville: Option<String>,
        #[arg(long)]
        pays: Option<String>,
    },
    /// Remove the first person with the given id
    Delete { id: String },
    /// Look up a country through the legacy service
    Country { name: String },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();
    let base = Url::parse(&cli.url)?;

    let res = match cli.command {
        Commands::List => client.get(endpoint(&base, &["personnes"])?).send().await?,
        Commands::Get { id } => {
            client
                .get(endpoint(&base, &["personnes", id.as_str()])?)
                .send()
                .await?
        }
        Commands::Create {
            id,
            prenom,
            nom,
            ville,
            pays,
        } => {
            let mut person = Person::new("", prenom.unwrap_or_default(), nom.unwrap_or_default());
            if ville.is_some() || pays.is_some() {
                person = person.with_address(ville.unwrap_or_default(), pays.unwrap_or_default());
            }
            client
                .post(endpoint(&base, &["personnes", id.as_str()])?)
                .json(&person)
                .send()
                .await?
        }
        Commands::Delete { id } => {
            client
                .delete(endpoint(&base, &["personnes", id.as_str()])?)
                .send()
                .await?
        }
        Commands::Country { name } => {
            client
                .get(endpoint(&base, &["country", name.as_str()])?)
                .send()
                .await?
        }
    };

    print_response(res).await
}

/// Append `segments` to the gateway URL, percent-encoding each one.
fn endpoint(base: &Url, segments: &[&str]) -> Result<Url, Box<dyn std::error::Error>> {
    let mut url = base.clone();
    url.path_segments_mut()
        .map_err(|_| format!("gateway URL {} cannot take a path", base))?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}

async fn print_response(res: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    let status = res.status();
    if !status.is_success() {
        eprintln!("Error: gateway returned status {}", status);
        if let Ok(text) = res.text().await {
            eprintln!("Response: {}", text);
        }
        return Ok(());
    }

    let json: Value = res.json().await?;
    println!("{}", serde_json::to_string_pretty(&json)?);
    Ok(())
}
