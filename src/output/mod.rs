//! Output formatting for CLI results

use colored::Colorize;
use serde::Serialize;
use tabled::Tabled;

use crate::cli::OutputFormat;
use crate::error::Result;

pub mod json;
pub mod table;

/// Print a collection in the requested format
pub fn print_list<T, R>(items: &[T], format: OutputFormat) -> Result<()>
where
    T: Serialize,
    R: Tabled + for<'a> From<&'a T>,
{
    match format {
        OutputFormat::Table => {
            let rows: Vec<R> = items.iter().map(R::from).collect();
            println!("{}", table::format_table(&rows));
        }
        OutputFormat::Json => println!("{}", json::format_json(items)?),
    }
    Ok(())
}

/// Print a single entity as label/value lines or JSON
pub fn print_item<T: Serialize>(
    item: &T,
    title: &str,
    fields: &[(&str, String)],
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Table => {
            println!("{}", title.bold());
            println!();
            println!("{}", table::format_details(fields));
        }
        OutputFormat::Json => println!("{}", json::format_json(item)?),
    }
    Ok(())
}

/// Tell the user Graph gave nothing back for `what`
pub fn print_no_response(what: &str) {
    eprintln!(
        "{} No response from Microsoft Graph for {} (run with --debug for details)",
        "⚠".yellow(),
        what
    );
}
