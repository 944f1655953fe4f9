use serde::{Serialize, Serializer};
use std::iter::FusedIterator;

/// One line of a multiplication table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TableRow {
    pub multiplier: u64,
    #[serde(serialize_with = "serialize_product")]
    pub product: f64,
}

/// Finite products serialize as numbers. Overflowed ones serialize as the
/// same `Infinity` / `-Infinity` text the table shows, since JSON has no
/// number for them.
fn serialize_product<S>(product: &f64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    if product.is_finite() {
        serializer.serialize_f64(*product)
    } else {
        serializer.serialize_str(&format_number(*product))
    }
}

impl TableRow {
    pub fn new(base: f64, multiplier: u64) -> Self {
        Self {
            multiplier,
            product: base * multiplier as f64,
        }
    }
}

/// Form input that passed validation.
///
/// Only exists between parsing and generation; the form never stores it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValidatedParameters {
    /// The number being multiplied.
    pub base: f64,
    /// Upper bound on the multiplier, finite and strictly positive.
    pub limit: f64,
}

/// An immutable multiplication table.
///
/// Rows are computed on demand from the base and the row count, so a table
/// for a huge limit is as cheap to hold as a table for a small one. Row `i`
/// (zero-based) has multiplier `i + 1`.
///
/// # Examples
///
/// ```
/// use timestable::domain::MultiplicationTable;
///
/// let table = MultiplicationTable::new(7.0, 3);
/// let products: Vec<f64> = table.rows().map(|row| row.product).collect();
/// assert_eq!(products, vec![7.0, 14.0, 21.0]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MultiplicationTable {
    base: f64,
    len: u64,
}

impl MultiplicationTable {
    pub fn new(base: f64, len: u64) -> Self {
        // All empty tables compare equal, whatever base produced them.
        if len == 0 {
            return Self::empty();
        }
        Self { base, len }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn len(&self) -> u64 {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the row at a zero-based index.
    pub fn row(&self, index: u64) -> Option<TableRow> {
        if index < self.len {
            Some(TableRow::new(self.base, index + 1))
        } else {
            None
        }
    }

    pub fn rows(&self) -> Rows {
        Rows {
            base: self.base,
            multiplier: 1,
            remaining: self.len,
        }
    }

    /// Returns at most `count` rows starting at the zero-based `offset`.
    pub fn window(&self, offset: u64, count: usize) -> impl Iterator<Item = TableRow> {
        let remaining = self.len.saturating_sub(offset);
        Rows {
            base: self.base,
            multiplier: offset.saturating_add(1),
            remaining,
        }
        .take(count)
    }
}

/// Iterator over the rows of a [`MultiplicationTable`], in ascending
/// multiplier order.
#[derive(Debug, Clone)]
pub struct Rows {
    base: f64,
    multiplier: u64,
    remaining: u64,
}

impl Iterator for Rows {
    type Item = TableRow;

    fn next(&mut self) -> Option<TableRow> {
        if self.remaining == 0 {
            return None;
        }
        let row = TableRow::new(self.base, self.multiplier);
        self.multiplier = self.multiplier.saturating_add(1);
        self.remaining -= 1;
        Some(row)
    }

    fn nth(&mut self, n: usize) -> Option<TableRow> {
        let skip = (n as u64).min(self.remaining);
        self.multiplier = self.multiplier.saturating_add(skip);
        self.remaining -= skip;
        self.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match usize::try_from(self.remaining) {
            Ok(n) => (n, Some(n)),
            Err(_) => (usize::MAX, None),
        }
    }
}

impl FusedIterator for Rows {}

/// Formats a product the way the table displays it.
///
/// Whole numbers print without a fractional part, negative zero prints as
/// `0`, and overflowed products print as `Infinity` / `-Infinity`.
/// Magnitudes of at least 1e21 or below 1e-6 switch to exponent notation
/// with an explicit exponent sign.
///
/// ```
/// use timestable::domain::format_number;
///
/// assert_eq!(format_number(35.0), "35");
/// assert_eq!(format_number(7.5), "7.5");
/// assert_eq!(format_number(-0.0), "0");
/// assert_eq!(format_number(1e21), "1e+21");
/// assert_eq!(format_number(1.5e-7), "1.5e-7");
/// ```
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        "0".to_string()
    } else if value == f64::INFINITY {
        "Infinity".to_string()
    } else if value == f64::NEG_INFINITY {
        "-Infinity".to_string()
    } else if value.abs() >= 1e21 || value.abs() < 1e-6 {
        let exponent_form = format!("{value:e}");
        if exponent_form.contains("e-") {
            exponent_form
        } else {
            exponent_form.replacen('e', "e+", 1)
        }
    } else {
        value.to_string()
    }
}
