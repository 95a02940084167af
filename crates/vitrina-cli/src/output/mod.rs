use serde::Serialize;
use serde_json::Value;
use vitrina_core::schema::COLUMNS;
use vitrina_core::{ChatResponse, Record};

use crate::cli::OutputFormat;

pub mod table;

/// Render a chat response. The table format prints the reply text
/// followed by the returned rows.
pub fn render_chat(response: &ChatResponse, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json | OutputFormat::Raw => render(response, format),
        OutputFormat::Table => {
            if response.data.is_empty() {
                return Ok(response.reply.clone());
            }
            Ok(format!("{}\n\n{}", response.reply, rows_table(&response.data)))
        }
    }
}

/// Render any serializable value in the requested format.
pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
        OutputFormat::Table => match serde_json::to_value(value)? {
            Value::Object(map) => {
                let rows = map
                    .iter()
                    .map(|(key, value)| vec![key.clone(), value_to_cell(value)])
                    .collect::<Vec<_>>();
                Ok(table::render_rows_table(&["key", "value"], &rows, options()))
            }
            other => Ok(value_to_cell(&other)),
        },
    }
}

pub fn output<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    println!("{}", render(value, format)?);
    Ok(())
}

fn options() -> table::TableOptions {
    table::TableOptions {
        max_width: std::env::var("COLUMNS")
            .ok()
            .and_then(|value| value.parse().ok()),
    }
}

/// Catalog columns come first in their declared order; anything else the
/// datastore returned follows alphabetically.
fn headers_for(rows: &[Record]) -> Vec<String> {
    let mut headers: Vec<String> = COLUMNS
        .iter()
        .filter(|column| rows.iter().any(|row| row.contains_key(**column)))
        .map(|column| (*column).to_string())
        .collect();

    let mut extra: Vec<String> = rows
        .iter()
        .flat_map(|row| row.keys())
        .filter(|key| !COLUMNS.contains(&key.as_str()))
        .cloned()
        .collect();
    extra.sort();
    extra.dedup();

    headers.extend(extra);
    headers
}

fn rows_table(rows: &[Record]) -> String {
    let headers = headers_for(rows);
    let header_refs = headers.iter().map(String::as_str).collect::<Vec<_>>();
    let cells = rows
        .iter()
        .map(|row| {
            headers
                .iter()
                .map(|header| row.get(header).map_or_else(|| String::from("-"), value_to_cell))
                .collect::<Vec<_>>()
        })
        .collect::<Vec<_>>();

    table::render_rows_table(&header_refs, &cells, options())
}

fn value_to_cell(value: &Value) -> String {
    match value {
        Value::Null => String::from("null"),
        Value::Bool(v) => v.to_string(),
        Value::Number(v) => v.to_string(),
        Value::String(v) => v.clone(),
        other => serde_json::to_string(other).unwrap_or_else(|_| String::from("<invalid-json>")),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use vitrina_core::{ChatResponse, GeneratedQuery, Record};

    use super::{headers_for, render, render_chat};
    use crate::cli::OutputFormat;

    fn record(value: serde_json::Value) -> Record {
        value.as_object().cloned().expect("object literal")
    }

    #[test]
    fn raw_chat_is_single_line_json() {
        let response = ChatResponse::terminal("No se encontraron resultados.");
        let out = render_chat(&response, OutputFormat::Raw).expect("render should work");
        assert_eq!(out, r#"{"reply":"No se encontraron resultados.","data":[]}"#);
    }

    #[test]
    fn table_chat_without_rows_is_only_the_reply() {
        let response = ChatResponse::terminal("Envía un mensaje.");
        let out = render_chat(&response, OutputFormat::Table).expect("render should work");
        assert_eq!(out, "Envía un mensaje.");
    }

    #[test]
    fn table_chat_prints_reply_then_rows() {
        let response = ChatResponse::answered(
            "Hay dos camisetas.",
            vec![
                record(json!({"nombre": "Camiseta azul", "precio": 12})),
                record(json!({"nombre": "Camiseta roja", "precio": 14})),
            ],
        );

        let out = render_chat(&response, OutputFormat::Table).expect("render should work");
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(lines[0], "Hay dos camisetas.");
        assert_eq!(lines[1], "");
        assert!(lines[2].starts_with("nombre"));
        assert!(lines[4].starts_with("Camiseta azul"));
        assert_eq!(lines.len(), 6);
    }

    #[test]
    fn catalog_columns_lead_in_declared_order() {
        let rows = vec![record(json!({"total": 3, "precio": 10, "id": 1, "nombre": "x"}))];
        assert_eq!(headers_for(&rows), vec!["id", "nombre", "precio", "total"]);
    }

    #[test]
    fn generated_query_renders_as_key_value_table() {
        let query = GeneratedQuery {
            raw_text: "SELECT 1;".to_string(),
            sanitized_sql: "SELECT 1".to_string(),
            valid: true,
        };
        let out = render(&query, OutputFormat::Table).expect("render should work");
        assert!(out.lines().next().is_some_and(|line| line.starts_with("key")));
        assert!(out.contains("sanitized_sql"));
        assert!(out.contains("true"));
    }
}
