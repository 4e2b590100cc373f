//! Table output formatting

use tabled::{
    Table, Tabled,
    builder::Builder,
    settings::{Alignment, Modify, Style, object::Rows},
};

/// Format rows as a table
pub fn format_table<T: Tabled>(data: &[T]) -> String {
    if data.is_empty() {
        return "No results found.".to_string();
    }

    let mut table = Table::new(data);
    table
        .with(Style::rounded())
        .with(Modify::new(Rows::first()).with(Alignment::center()));

    table.to_string()
}

/// Format label/value pairs for a single entity, one per line
pub fn format_details(fields: &[(&str, String)]) -> String {
    let mut builder = Builder::default();
    for (label, value) in fields {
        let value = if value.is_empty() { "-" } else { value.as_str() };
        builder.push_record([format!("{}:", label), value.to_string()]);
    }

    let mut table = builder.build();
    table.with(Style::blank());
    table.to_string()
}
