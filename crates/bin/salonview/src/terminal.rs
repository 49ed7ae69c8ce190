//! Plain-text rendering of the catalog view.

use std::fmt;
use std::io::{self, Write};

use salonview_domain::pagination::{PageControl, PaginationControls};
use salonview_domain::row::{COLUMNS, ServiceRow};
use salonview_domain::state::ApplicationState;
use salonview_domain::view::{CatalogView, ReadyView};
use tokio::sync::watch;

const TITLE: &str = "Salon Services";

/// One full screen for the given state.
pub struct Screen<'a>(pub &'a ApplicationState);

impl fmt::Display for Screen<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0.view() {
            CatalogView::Loading => writeln!(f, "Loading\u{2026}"),
            CatalogView::Error(message) => writeln!(f, "Error: {message}"),
            CatalogView::Ready(view) => write_ready(f, &view),
        }
    }
}

/// Draw the latest state seen by `screen` and mark it as seen.
pub fn draw(
    out: &mut impl Write,
    screen: &mut watch::Receiver<ApplicationState>,
) -> io::Result<()> {
    let state = screen.borrow_and_update();
    write!(out, "{}", Screen(&state))?;
    out.flush()
}

fn write_ready(f: &mut fmt::Formatter<'_>, view: &ReadyView<'_>) -> fmt::Result {
    writeln!(f, "{TITLE}")?;
    if view.search_query.is_empty() {
        writeln!(f, "Search by ID or Service Name...")?;
    } else {
        writeln!(
            f,
            "Search: {} ({} matching)",
            view.search_query, view.projection.filtered_count
        )?;
    }
    writeln!(f)?;
    write_table(f, &view.rows())?;
    writeln!(f)?;
    write_controls(f, &view.controls)
}

fn write_table(f: &mut fmt::Formatter<'_>, rows: &[ServiceRow]) -> fmt::Result {
    if rows.is_empty() {
        return writeln!(f, "No services found.");
    }

    let mut widths = COLUMNS.map(|header| header.chars().count());
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row.cells()) {
            *width = (*width).max(cell.chars().count());
        }
    }

    write_line(f, &widths, COLUMNS)?;
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    writeln!(f, "{}", rule.join("-+-"))?;
    for row in rows {
        write_line(f, &widths, row.cells())?;
    }
    Ok(())
}

fn write_line(f: &mut fmt::Formatter<'_>, widths: &[usize; 6], cells: [&str; 6]) -> fmt::Result {
    let padded: Vec<String> = widths
        .iter()
        .zip(cells)
        .map(|(&width, cell)| format!("{cell:<width$}"))
        .collect();
    writeln!(f, "{}", padded.join(" | ").trim_end())
}

fn write_controls(f: &mut fmt::Formatter<'_>, controls: &PaginationControls) -> fmt::Result {
    let mut parts = vec![
        boundary("First", controls.first),
        boundary("Prev", controls.prev),
    ];
    parts.extend(controls.pages.iter().map(|number| {
        if number.current {
            format!("*{}*", number.page)
        } else {
            number.page.to_string()
        }
    }));
    parts.push(boundary("Next", controls.next));
    parts.push(boundary("Last", controls.last));
    writeln!(f, "{}", parts.join(" "))
}

/// Enabled controls are bracketed, disabled ones parenthesised.
fn boundary(label: &str, control: PageControl) -> String {
    if control.disabled {
        format!("({label})")
    } else {
        format!("[{label}]")
    }
}
