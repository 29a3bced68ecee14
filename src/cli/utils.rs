use serde_json::{json, Value};
use crate::cli::OutputFormat;

/// Output a success message in the appropriate format
pub fn output_success(
    output_format: &OutputFormat,
    message: &str,
    data: Option<Value>,
) -> anyhow::Result<()> {
    match output_format {
        OutputFormat::Json => {
            let mut response = json!({
                "success": true,
                "message": message
            });

            if let Some(data_value) = data {
                response["data"] = data_value;
            }

            println!("{}", serde_json::to_string_pretty(&response)?);
        }
        OutputFormat::Text => {
            println!("✓ {}", message);
        }
    }
    Ok(())
}

/// Output an empty collection in the appropriate format
pub fn output_empty_collection(
    output_format: &OutputFormat,
    collection_name: &str,
    message: &str,
) -> anyhow::Result<()> {
    match output_format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&json!({
                collection_name: []
            }))?);
        }
        OutputFormat::Text => {
            println!("{}", message);
        }
    }
    Ok(())
}

/// Output one or more concepts in the appropriate format
pub fn output_concepts(output_format: &OutputFormat, concepts: &[Value]) -> anyhow::Result<()> {
    match output_format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&json!({ "concepts": concepts }))?);
        }
        OutputFormat::Text => {
            for concept in concepts {
                println!("{}", concept_line(concept));
            }
        }
    }
    Ok(())
}

/// One-line text rendering: `#id [status] description: term, term (preferred: x)`
pub fn concept_line(concept: &Value) -> String {
    let id = concept.get("id").and_then(Value::as_i64).unwrap_or_default();
    let status = concept.get("status").and_then(Value::as_str).unwrap_or("?");
    let description = concept.get("description").and_then(Value::as_str).unwrap_or("");
    let terms = concept
        .get("terms")
        .and_then(Value::as_array)
        .map(|terms| {
            terms
                .iter()
                .filter_map(Value::as_str)
                .collect::<Vec<_>>()
                .join(", ")
        })
        .unwrap_or_default();

    let mut line = format!("#{} [{}] {}: {}", id, status, description, terms);
    if let Some(preferred) = concept.get("preferred_term").and_then(Value::as_str) {
        line.push_str(&format!(" (preferred: {})", preferred));
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_concept_lines() {
        let concept = json!({
            "id": 3,
            "description": "Heart attack",
            "terms": ["MI", "myocardial infarction"],
            "preferred_term": "MI",
            "status": "resolved"
        });
        assert_eq!(
            concept_line(&concept),
            "#3 [resolved] Heart attack: MI, myocardial infarction (preferred: MI)"
        );

        let unresolved = json!({ "id": 4, "description": "d", "terms": ["x"], "preferred_term": null, "status": "not resolved" });
        assert_eq!(concept_line(&unresolved), "#4 [not resolved] d: x");
    }
}
