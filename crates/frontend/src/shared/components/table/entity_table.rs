//! Table of collection items driven by a list of column descriptors
//!
//! # Example
//!
//! ```rust,ignore
//! <EntityTable
//!     title="Pokémons"
//!     columns=vec![
//!         TableColumn::new("ID", ColumnField::Id, 80.0),
//!         TableColumn::new("Nombre", ColumnField::Name, 200.0),
//!     ]
//!     items=Signal::derive(move || state.with(|s| s.pokemon.clone()))
//!     empty_text=Signal::derive(move || state.with(|s| s.empty_text()))
//!     on_select=Callback::new(move |item| vm.open_command(item))
//! />
//! ```
//!
//! When `on_select` is given, the name cell becomes a link that selects the row.

use contracts::shared::collection::CollectionItem;
use leptos::prelude::*;
use thaw::{Table, TableBody, TableCell, TableCellLayout, TableHeader, TableHeaderCell, TableRow};

/// Which value of a [`CollectionItem`] a column shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnField {
    Id,
    Name,
    Url,
}

impl ColumnField {
    pub fn value(&self, item: &CollectionItem) -> String {
        match self {
            ColumnField::Id => item.id.to_string(),
            ColumnField::Name => item.name.clone(),
            ColumnField::Url => item.url.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TableColumn {
    pub title: &'static str,
    pub field: ColumnField,
    pub min_width: f64,
}

impl TableColumn {
    pub const fn new(title: &'static str, field: ColumnField, min_width: f64) -> Self {
        Self {
            title,
            field,
            min_width,
        }
    }
}

#[component]
pub fn EntityTable(
    /// Caption rendered above the table
    #[prop(into)]
    title: String,
    columns: Vec<TableColumn>,
    #[prop(into)]
    items: Signal<Vec<CollectionItem>>,
    /// Text shown instead of the table while it has no rows
    #[prop(into)]
    empty_text: Signal<&'static str>,
    /// Row selection; tables without it are read-only
    #[prop(optional)]
    on_select: Option<Callback<CollectionItem>>,
) -> impl IntoView {
    let columns = StoredValue::new(columns);

    view! {
        <div class="entity-table">
            <h3 class="entity-table__title">{title}</h3>
            <Show
                when=move || items.with(|rows| !rows.is_empty())
                fallback=move || view! {
                    <div class="entity-table__empty" style="padding: 24px; text-align: center;">
                        <p style="color: var(--thaw-color-neutral-foreground-2);">{move || empty_text.get()}</p>
                    </div>
                }
            >
                <Table>
                    <TableHeader>
                        <TableRow>
                            {columns
                                .get_value()
                                .into_iter()
                                .map(|column| view! {
                                    <TableHeaderCell resizable=true min_width=column.min_width>
                                        {column.title}
                                    </TableHeaderCell>
                                })
                                .collect_view()}
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        {move || {
                            items
                                .get()
                                .into_iter()
                                .map(|item| {
                                    let cells = columns
                                        .get_value()
                                        .into_iter()
                                        .map(|column| render_cell(&column, &item, on_select))
                                        .collect_view();
                                    view! { <TableRow>{cells}</TableRow> }
                                })
                                .collect_view()
                        }}
                    </TableBody>
                </Table>
            </Show>
        </div>
    }
}

fn render_cell(
    column: &TableColumn,
    item: &CollectionItem,
    on_select: Option<Callback<CollectionItem>>,
) -> impl IntoView {
    let value = column.field.value(item);

    let content = match (column.field, on_select) {
        (ColumnField::Name, Some(on_select)) => {
            let selected = item.clone();
            view! {
                <a
                    href="#"
                    class="entity-table__link"
                    style="color: var(--thaw-color-brand-foreground-1); text-decoration: none; font-weight: 600; cursor: pointer;"
                    on:click=move |e| {
                        e.prevent_default();
                        on_select.run(selected.clone());
                    }
                >
                    {value}
                </a>
            }
            .into_any()
        }
        _ => view! { <span class="cell-truncate">{value}</span> }.into_any(),
    };

    view! {
        <TableCell>
            <TableCellLayout>{content}</TableCellLayout>
        </TableCell>
    }
}
