//! Column layouts of the two tables

use crate::shared::components::table::{ColumnField, TableColumn};

pub fn pokemon_columns() -> Vec<TableColumn> {
    vec![
        TableColumn::new("ID", ColumnField::Id, 80.0),
        TableColumn::new("Nombre", ColumnField::Name, 200.0),
    ]
}

pub fn ability_columns() -> Vec<TableColumn> {
    vec![
        TableColumn::new("ID", ColumnField::Id, 80.0),
        TableColumn::new("Nombre", ColumnField::Name, 200.0),
        TableColumn::new("URL", ColumnField::Url, 300.0),
    ]
}
