//! Line-oriented chat loop.
//!
//! Plain lines go to the assistant. Lines starting with `/` drive the
//! selection: `/select <id>`, `/clear`, `/compare`, `/list`, `/suggest`,
//! `/quit`.

use std::io::{self, BufRead, Write};

use homescout_chat::{
    ChatError, ChatSession, ChatTurn, ComparisonReport, ComparisonTable, SelectionChange,
    QUICK_SUGGESTIONS,
};
use homescout_core::{CurrencyFormatter, Listing};
use tracing::warn;

/// Read commands and messages from `input` until EOF or `/quit`.
pub fn run<R: BufRead, W: Write>(
    session: &mut ChatSession,
    input: R,
    mut out: W,
) -> io::Result<()> {
    if let Some(welcome) = session.turns().first() {
        writeln!(out, "{}\n", welcome.content)?;
    }

    for line in input.lines() {
        let line = line?;
        let line = line.trim();

        match line.split_once(' ').unwrap_or((line, "")) {
            ("/quit", _) => break,
            ("/select", id) => select(session, id.trim(), &mut out)?,
            ("/clear", _) => {
                session.clear_selection();
                writeln!(out, "Selection cleared.")?;
            }
            ("/compare", _) => match session.compare_selection() {
                Ok(report) => write_table(&report, session, &mut out)?,
                Err(e) => writeln!(out, "{}", e)?,
            },
            ("/list", _) => {
                for listing in session.catalog() {
                    writeln!(out, "{}", summary(listing, formatter(session)))?;
                }
            }
            ("/suggest", _) => {
                for q in QUICK_SUGGESTIONS {
                    writeln!(out, "{}: {}", q.label, q.prompt)?;
                }
            }
            _ => match session.send(line) {
                Ok(Some(reply)) => write_reply(&reply, session, &mut out)?,
                Ok(None) => {}
                Err(e) => {
                    warn!(error = %e, "Message could not be answered");
                    writeln!(out, "{}", e)?;
                }
            },
        }
    }
    Ok(())
}

fn formatter(session: &ChatSession) -> &CurrencyFormatter {
    session.classifier().engine().formatter()
}

fn select<W: Write>(session: &mut ChatSession, id: &str, out: &mut W) -> io::Result<()> {
    match session.toggle_selection(id) {
        Ok(SelectionChange::Added) => writeln!(out, "Selected {}.", id),
        Ok(SelectionChange::Removed) => writeln!(out, "Deselected {}.", id),
        Ok(SelectionChange::AddedWithEviction { evicted }) => {
            writeln!(out, "Selected {} (dropped {}).", id, evicted.id)
        }
        Err(ChatError::ListingNotFound(id)) => writeln!(out, "No listing with id {}.", id),
        Err(e) => writeln!(out, "{}", e),
    }
}

fn write_reply<W: Write>(reply: &ChatTurn, session: &ChatSession, out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", reply.content)?;
    if let Some(ref listings) = reply.listings {
        for listing in listings {
            writeln!(out, "{}", summary(listing, formatter(session)))?;
        }
    }
    if let Some(ref report) = reply.comparison {
        write_table(report, session, out)?;
    }
    writeln!(out)
}

/// One-line listing summary: "[id] address, City, ST - 3 bd / 2 ba house - $485,000".
fn summary(listing: &Listing, formatter: &CurrencyFormatter) -> String {
    format!(
        "[{}] {}, {} - {} bd / {} ba {} - {}",
        listing.id,
        listing.address,
        listing.city_state(),
        listing.bedrooms,
        listing.bathrooms,
        listing.property_type.as_str(),
        formatter.format(listing.price as f64)
    )
}

/// Best values are starred.
fn write_table<W: Write>(
    report: &ComparisonReport,
    session: &ChatSession,
    out: &mut W,
) -> io::Result<()> {
    let table = ComparisonTable::build(report, formatter(session));
    writeln!(out, "{:<22}{}", "", table.headers.join("  "))?;
    for row in &table.rows {
        let cells: Vec<String> = row
            .cells
            .iter()
            .map(|c| {
                if c.best {
                    format!("{}*", c.text)
                } else {
                    c.text.clone()
                }
            })
            .collect();
        writeln!(out, "{:<22}{}", row.label, cells.join("  "))?;
    }
    Ok(())
}
