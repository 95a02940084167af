//! Prompt templates.
//!
//! All three prompts embed the fixed `productos` schema from
//! [`vitrina_core::schema`]; nothing is discovered at runtime.

use vitrina_core::{Record, schema};

/// Literal the correction prompt asks for when no better query exists.
pub const NO_CHANGE_SENTINEL: &str = "NO CAMBIO";

/// Prompt asking for exactly one `SELECT` answering `message`.
#[must_use]
pub fn build_sql_prompt(message: &str) -> String {
    format!(
        "Convierte esta consulta en lenguaje natural en una consulta SQL válida para PostgreSQL.\n\
         Usa exclusivamente la tabla '{table}' con las columnas:\n\
         {columns}.\n\
         Responde SOLO con el SQL, sin explicaciones ni comentarios.\n\
         Debe comenzar con SELECT y no incluir punto y coma.\n\
         Usuario: \"{message}\"\n",
        table = schema::TABLE,
        columns = schema::column_description(),
    )
}

/// Prompt asking for a corrected `SELECT` after `sql` returned no rows.
#[must_use]
pub fn build_retry_prompt(sql: &str) -> String {
    format!(
        "Se ejecutó esta consulta SQL: \"{sql}\"\n\
         y no arrojó resultados, pero podrían existir variaciones semánticas, \
         de singular y plural, o errores ortográficos.\n\
         Analiza la tabla '{table}' (columnas: {columns}) y genera una NUEVA consulta \
         SQL corregida si detectas variaciones.\n\
         Debe comenzar con SELECT y no incluir punto y coma.\n\
         Responde SOLO con la nueva consulta SQL o \"{NO_CHANGE_SENTINEL}\".\n",
        table = schema::TABLE,
        columns = schema::column_description(),
    )
}

/// Prompt asking for a concise answer to `message` from `rows`.
#[must_use]
pub fn build_summary_prompt(message: &str, sql: &str, rows: &[Record]) -> String {
    let data = serde_json::to_string(rows).unwrap_or_else(|_| String::from("[]"));
    format!(
        "Genera una respuesta clara y concisa en lenguaje natural basándote en los siguientes datos:\n\
         Resultado SQL: {data}\n\
         Consulta final usada: \"{sql}\"\n\
         Pregunta original del usuario: \"{message}\"\n"
    )
}
