use crate::domain::{ExportError, ExportFormat, MultiplicationTable, TableExporter};
use arboard::Clipboard;
use thiserror::Error;

/// Tables larger than this are not copied; the text would be unwieldy and
/// building it would stall the UI.
pub const CLIPBOARD_ROW_LIMIT: u64 = 10_000;

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("Nothing to copy")]
    EmptyTable,
    #[error("Table too large to copy ({0} rows)")]
    TooLarge(u64),
    #[error(transparent)]
    Export(#[from] ExportError),
    #[error("Clipboard unavailable: {0}")]
    Unavailable(#[from] arboard::Error),
}

pub struct ClipboardService;

impl ClipboardService {
    /// Copies `table` to the system clipboard as tab separated records.
    ///
    /// Returns the number of rows copied.
    pub fn copy_table(table: &MultiplicationTable, number_text: &str) -> Result<u64, ClipboardError> {
        let text = Self::clipboard_text(table, number_text)?;
        let mut clipboard = Clipboard::new()?;
        clipboard.set_text(text)?;
        Ok(table.len())
    }

    /// Builds the text that [`copy_table`](Self::copy_table) places on the clipboard.
    pub fn clipboard_text(table: &MultiplicationTable, number_text: &str) -> Result<String, ClipboardError> {
        if table.is_empty() {
            return Err(ClipboardError::EmptyTable);
        }
        if table.len() > CLIPBOARD_ROW_LIMIT {
            return Err(ClipboardError::TooLarge(table.len()));
        }
        Ok(TableExporter::to_string(table, number_text, ExportFormat::Tsv)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TableGenerator;

    #[test]
    fn test_clipboard_text_is_tab_separated() {
        let table = TableGenerator::generate(7.0, 2.0);
        let text = ClipboardService::clipboard_text(&table, "7").unwrap();
        assert_eq!(text, "#\tExpression\tProduct\n1\t7 × 1\t7\n2\t7 × 2\t14\n");
    }

    #[test]
    fn test_clipboard_text_rejects_empty_table() {
        let result = ClipboardService::clipboard_text(&MultiplicationTable::empty(), "7");
        assert!(matches!(result, Err(ClipboardError::EmptyTable)));
    }

    #[test]
    fn test_clipboard_text_rejects_huge_table() {
        let table = TableGenerator::generate(1.0, 1e9);
        let result = ClipboardService::clipboard_text(&table, "1");
        match result {
            Err(err) => assert_eq!(err.to_string(), "Table too large to copy (1000000000 rows)"),
            Ok(_) => panic!("expected the copy to be refused"),
        }
    }
}
