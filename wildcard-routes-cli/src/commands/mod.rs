//! CLI command implementations

pub mod list;
pub mod uri;

pub use list::ListCommand;
pub use uri::{parse_alias, UriCommand};

use wildcard_routes::router::RegisteredRoute;

/// Render routes as an aligned plain-text table
///
/// Columns: methods, path, route name, controller action.
#[must_use]
pub fn format_routes(routes: &[RegisteredRoute]) -> String {
    let rows: Vec<[String; 4]> = routes
        .iter()
        .map(|route| {
            [
                route.method_list(),
                route.path(),
                route.action.name.clone(),
                route.action.uses.clone(),
            ]
        })
        .collect();

    let header = ["METHOD", "PATH", "NAME", "ACTION"].map(str::to_string);
    let mut widths = header.clone().map(|cell| cell.len());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.len());
        }
    }

    std::iter::once(&header)
        .chain(&rows)
        .map(|row| {
            let line = row
                .iter()
                .zip(widths)
                .map(|(cell, width)| format!("{cell:<width$}"))
                .collect::<Vec<_>>()
                .join("  ");
            format!("{}\n", line.trim_end())
        })
        .collect()
}
