//! Non-interactive use of the form.
//!
//! Print mode feeds the command-line values through the same handlers the
//! terminal UI uses, then writes whatever the form ends up showing.

use super::state::FormState;
use crate::domain::{ExportError, ExportFormat, TableExporter};
use std::io::Write;

/// What a single submission produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PrintOutcome {
    /// The table was written; it may have no rows if the limit is below 1.
    Printed { rows: u64 },
    /// The form rejected the input with this message.
    Rejected(String),
}

/// Fills in the form, submits it once and writes the table to `writer`.
///
/// Nothing is written when the input is rejected.
///
/// # Examples
///
/// ```
/// use timestable::application::{print_table, PrintOutcome};
/// use timestable::domain::ExportFormat;
///
/// let mut out = Vec::new();
/// let outcome = print_table("7", "2", ExportFormat::Tsv, &mut out).unwrap();
/// assert_eq!(outcome, PrintOutcome::Printed { rows: 2 });
/// assert_eq!(String::from_utf8(out).unwrap(), "#\tExpression\tProduct\n1\t7 × 1\t7\n2\t7 × 2\t14\n");
/// ```
pub fn print_table<W: Write>(
    number_text: &str,
    upper_bound_text: &str,
    format: ExportFormat,
    writer: W,
) -> Result<PrintOutcome, ExportError> {
    let mut form = FormState::default();
    form.on_number_change(number_text);
    form.on_upper_bound_change(upper_bound_text);
    form.on_generate(None);

    if let Some(message) = form.error_message {
        return Ok(PrintOutcome::Rejected(message));
    }
    TableExporter::write(&form.table, &form.number_text, format, writer)?;
    Ok(PrintOutcome::Printed {
        rows: form.table.len(),
    })
}
