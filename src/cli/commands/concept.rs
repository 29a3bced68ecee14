use clap::Subcommand;
use reqwest::Method;
use serde_json::{json, Value};

use crate::cli::client::HubClient;
use crate::cli::utils::{output_concepts, output_empty_collection, output_success};
use crate::cli::OutputFormat;

#[derive(Subcommand)]
pub enum ConceptCommands {
    #[command(about = "List all concepts")]
    List,

    #[command(about = "Show a single concept")]
    Show {
        #[arg(help = "Concept ID")]
        id: i64,
    },

    #[command(about = "Create a concept")]
    Create {
        #[arg(long, help = "Concept description")]
        description: String,
        #[arg(long = "term", required = true, help = "Associated term (repeat for several)")]
        terms: Vec<String>,
        #[arg(long, help = "Preferred term, stored as given")]
        preferred_term: Option<String>,
        #[arg(long, help = "Declared status, stored as given")]
        status: Option<String>,
    },

    #[command(about = "Set the preferred term (must be one of the concept's terms)")]
    Prefer {
        #[arg(help = "Concept ID")]
        id: i64,
        #[arg(help = "Preferred term")]
        term: String,
    },

    #[command(about = "Replace the concept's terms")]
    Terms {
        #[arg(help = "Concept ID")]
        id: i64,
        #[arg(required = true, help = "New terms, in order")]
        terms: Vec<String>,
    },

    #[command(about = "Remove one term from a concept")]
    RemoveTerm {
        #[arg(help = "Concept ID")]
        id: i64,
        #[arg(help = "Term to remove")]
        term: String,
    },

    #[command(about = "Set the status of the first concept whose terms contain NAME")]
    Status {
        #[arg(help = "Name to search for within terms (substring match)")]
        name: String,
        #[arg(help = "Status to store")]
        status: String,
    },
}

pub async fn handle(cmd: ConceptCommands, client: &HubClient, output_format: OutputFormat) -> anyhow::Result<()> {
    match cmd {
        ConceptCommands::List => {
            let data = client.get(&["all-concepts"]).await?;
            let concepts = data.as_array().cloned().unwrap_or_default();
            if concepts.is_empty() {
                return output_empty_collection(&output_format, "concepts", "No concepts found");
            }
            output_concepts(&output_format, &concepts)
        }
        ConceptCommands::Show { id } => {
            let data = client.get(&["concept", &id.to_string()]).await?;
            output_concepts(&output_format, &[data])
        }
        ConceptCommands::Create { description, terms, preferred_term, status } => {
            let mut body = json!({
                "description": description,
                "terms": terms,
            });
            if let Some(preferred_term) = preferred_term {
                body["preferred_term"] = Value::String(preferred_term);
            }
            if let Some(status) = status {
                body["status"] = Value::String(status);
            }

            let data = client.send(Method::POST, &["concepts"], Some(body)).await?;
            let id = data.get("id").and_then(Value::as_i64).unwrap_or_default();
            output_success(&output_format, &format!("Created concept {}", id), Some(data))
        }
        ConceptCommands::Prefer { id, term } => {
            let id = id.to_string();
            let data = client
                .send(
                    Method::PUT,
                    &["concept", &id, "preferred-term"],
                    Some(json!({ "preferred_term": term })),
                )
                .await?;
            output_success(&output_format, &message_of(&data), None)
        }
        ConceptCommands::Terms { id, terms } => {
            let id = id.to_string();
            let data = client
                .send(Method::PUT, &["concept", &id, "update-terms"], Some(json!({ "terms": terms })))
                .await?;
            output_success(&output_format, &message_of(&data), Some(data))
        }
        ConceptCommands::RemoveTerm { id, term } => {
            let id = id.to_string();
            let data = client
                .send(Method::DELETE, &["concept", &id, "terms", &term], None)
                .await?;
            output_success(&output_format, &message_of(&data), Some(data))
        }
        ConceptCommands::Status { name, status } => {
            let data = client
                .send(Method::PUT, &["update-status", &name], Some(json!({ "status": status })))
                .await?;
            output_success(&output_format, &message_of(&data), Some(data))
        }
    }
}

fn message_of(data: &Value) -> String {
    data.get("message")
        .and_then(Value::as_str)
        .unwrap_or("Done")
        .to_string()
}
