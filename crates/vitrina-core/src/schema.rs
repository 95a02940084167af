//! Fixed schema contract for the `productos` table.
//!
//! The schema is not discovered at runtime. Prompts embed it verbatim, so a
//! change here is a change to every prompt.

/// Table every generated statement must read from.
pub const TABLE: &str = "productos";

/// Columns of [`TABLE`], in declaration order.
pub const COLUMNS: [&str; 8] = [
    "id",
    "nombre",
    "categoria",
    "genero",
    "talla",
    "precio",
    "stock_actual",
    "fecha_actualizacion",
];

/// Allowed values of the `genero` column.
pub const GENDERS: [&str; 4] = ["Hombre", "Mujer", "Niño", "Niña"];

/// Column list as written into prompts, with the `genero` enum spelled out.
#[must_use]
pub fn column_description() -> String {
    let genders = GENDERS
        .iter()
        .map(|g| format!("'{g}'"))
        .collect::<Vec<_>>()
        .join(", ");

    COLUMNS
        .iter()
        .map(|column| {
            if *column == "genero" {
                format!("{column} (valores posibles: {genders})")
            } else {
                (*column).to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(", ")
}
