//! Rendering tables as text, delimited records or JSON.
//!
//! Exporters stream rows straight into a writer so that a large table never
//! has to be materialized.

use super::errors::ExportError;
use super::models::{MultiplicationTable, format_number};
use serde::Serialize;
use serde::ser::{SerializeSeq, Serializer};
use std::io::Write;

/// Output formats understood by [`TableExporter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// Heading plus aligned columns, for people.
    Text,
    /// Comma separated records with a header record.
    Csv,
    /// Tab separated records with a header record.
    Tsv,
    /// Pretty printed JSON document.
    Json,
}

pub const COLUMN_HEADERS: [&str; 3] = ["#", "Expression", "Product"];

/// The text shown in the "Expression" column, e.g. `7 × 3`.
///
/// The number is shown exactly as typed.
pub fn expression(number_text: &str, multiplier: u64) -> String {
    format!("{number_text} × {multiplier}")
}

#[derive(Serialize)]
struct JsonTable<'a> {
    number: &'a str,
    #[serde(serialize_with = "serialize_rows")]
    rows: &'a MultiplicationTable,
}

fn serialize_rows<S>(table: &&MultiplicationTable, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let mut seq = serializer.serialize_seq(usize::try_from(table.len()).ok())?;
    for row in table.rows() {
        seq.serialize_element(&row)?;
    }
    seq.end()
}

pub struct TableExporter;

impl TableExporter {
    /// Writes `table` in the requested format.
    ///
    /// # Arguments
    ///
    /// * `table` - Table to export
    /// * `number_text` - The "Number" field as typed, used in headings and expressions
    /// * `format` - Output format
    /// * `writer` - Destination
    pub fn write<W: Write>(
        table: &MultiplicationTable,
        number_text: &str,
        format: ExportFormat,
        writer: W,
    ) -> Result<(), ExportError> {
        match format {
            ExportFormat::Text => Self::write_text(table, number_text, writer),
            ExportFormat::Csv => Self::write_delimited(table, number_text, b',', writer),
            ExportFormat::Tsv => Self::write_delimited(table, number_text, b'\t', writer),
            ExportFormat::Json => Self::write_json(table, number_text, writer),
        }
    }

    /// Exports `table` into a string.
    ///
    /// # Examples
    ///
    /// ```
    /// use timestable::domain::{ExportFormat, TableExporter, TableGenerator};
    ///
    /// let table = TableGenerator::generate(7.0, 2.0);
    /// let csv = TableExporter::to_string(&table, "7", ExportFormat::Csv).unwrap();
    /// assert_eq!(csv, "#,Expression,Product\n1,7 × 1,7\n2,7 × 2,14\n");
    /// ```
    pub fn to_string(
        table: &MultiplicationTable,
        number_text: &str,
        format: ExportFormat,
    ) -> Result<String, ExportError> {
        let mut buffer = Vec::new();
        Self::write(table, number_text, format, &mut buffer)?;
        Ok(String::from_utf8(buffer)?)
    }

    fn write_text<W: Write>(
        table: &MultiplicationTable,
        number_text: &str,
        mut writer: W,
    ) -> Result<(), ExportError> {
        writeln!(writer, "Table for {number_text}")?;
        let index_width = table.len().to_string().len().max(COLUMN_HEADERS[0].len());
        for row in table.rows() {
            writeln!(
                writer,
                "{:>index_width$}  {}  {}",
                row.multiplier,
                expression(number_text, row.multiplier),
                format_number(row.product),
            )?;
        }
        writer.flush()?;
        Ok(())
    }

    fn write_delimited<W: Write>(
        table: &MultiplicationTable,
        number_text: &str,
        delimiter: u8,
        writer: W,
    ) -> Result<(), ExportError> {
        let mut records = csv::WriterBuilder::new()
            .delimiter(delimiter)
            .from_writer(writer);
        records.write_record(COLUMN_HEADERS)?;
        for row in table.rows() {
            records.write_record([
                row.multiplier.to_string(),
                expression(number_text, row.multiplier),
                format_number(row.product),
            ])?;
        }
        records.flush()?;
        Ok(())
    }

    fn write_json<W: Write>(
        table: &MultiplicationTable,
        number_text: &str,
        mut writer: W,
    ) -> Result<(), ExportError> {
        let document = JsonTable {
            number: number_text,
            rows: table,
        };
        serde_json::to_writer_pretty(&mut writer, &document)?;
        writeln!(writer)?;
        writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TableGenerator;

    #[test]
    fn test_expression_uses_text_as_typed() {
        assert_eq!(expression("7", 3), "7 × 3");
        assert_eq!(expression("2.50", 2), "2.50 × 2");
    }

    #[test]
    fn test_text_export() {
        let table = TableGenerator::generate(2.5, 3.0);
        let text = TableExporter::to_string(&table, "2.5", ExportFormat::Text).unwrap();
        assert_eq!(
            text,
            "Table for 2.5\n1  2.5 × 1  2.5\n2  2.5 × 2  5\n3  2.5 × 3  7.5\n"
        );
    }

    #[test]
    fn test_text_export_pads_index_column() {
        let table = TableGenerator::generate(1.0, 10.0);
        let text = TableExporter::to_string(&table, "1", ExportFormat::Text).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[1], " 1  1 × 1  1");
        assert_eq!(lines[10], "10  1 × 10  10");
    }

    #[test]
    fn test_tsv_export() {
        let table = TableGenerator::generate(-3.0, 2.0);
        let tsv = TableExporter::to_string(&table, "-3", ExportFormat::Tsv).unwrap();
        assert_eq!(tsv, "#\tExpression\tProduct\n1\t-3 × 1\t-3\n2\t-3 × 2\t-6\n");
    }

    #[test]
    fn test_csv_export_quotes_fields_with_commas() {
        let table = TableGenerator::generate(1.0, 1.0);
        let csv = TableExporter::to_string(&table, "1,0", ExportFormat::Csv).unwrap();
        assert_eq!(csv, "#,Expression,Product\n1,\"1,0 × 1\",1\n");
    }

    #[test]
    fn test_json_export() {
        let table = TableGenerator::generate(7.0, 2.0);
        let json = TableExporter::to_string(&table, "7", ExportFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["number"], "7");
        assert_eq!(value["rows"][0]["multiplier"], 1);
        assert_eq!(value["rows"][1]["product"], 14.0);
        assert_eq!(value["rows"].as_array().map(|rows| rows.len()), Some(2));
    }

    #[test]
    fn test_overflowed_products_agree_across_formats() {
        let table = TableGenerator::generate(1e308, 10.0);

        let text = TableExporter::to_string(&table, "1e308", ExportFormat::Text).unwrap();
        assert_eq!(text.lines().last(), Some("10  1e308 × 10  Infinity"));

        let json = TableExporter::to_string(&table, "1e308", ExportFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["rows"][0]["product"], 1e308);
        assert_eq!(value["rows"][9]["product"], "Infinity");
    }

    #[test]
    fn test_empty_table_exports_headers_only() {
        let table = MultiplicationTable::empty();
        let csv = TableExporter::to_string(&table, "7", ExportFormat::Csv).unwrap();
        assert_eq!(csv, "#,Expression,Product\n");
        let json = TableExporter::to_string(&table, "7", ExportFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["rows"], serde_json::json!([]));
    }
}
