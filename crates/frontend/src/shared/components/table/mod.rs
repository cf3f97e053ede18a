pub mod entity_table;

pub use entity_table::{ColumnField, EntityTable, TableColumn};
