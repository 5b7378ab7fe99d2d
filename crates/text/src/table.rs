//! CSV field-table formatter
//!
//! Renders `type,length,value` rows into an aligned pipe-delimited table.
//! Type tag `1` declares a string field, `2` an integer field. Integer
//! lengths are declared in bytes and rendered as a bit width (`4` → `32bit`);
//! the bit width must be a power of two and wide enough for the value.

use thiserror::Error;

const TYPE_HEADER: &str = "Type";
const LENGTH_HEADER: &str = "Length";
const VALUE_HEADER: &str = "value";
const STRING_LABEL: &str = "String";
const INTEGER_LABEL: &str = "Integer";
const BITS_PER_BYTE: usize = 8;

/// A row the formatter refuses to render.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TableError {
    /// The row does not have exactly three comma-separated fields.
    #[error("row {row}: expected 3 fields, found {found}")]
    FieldCount {
        /// 1-based row number.
        row: usize,
        /// Fields actually present.
        found: usize,
    },

    /// The type tag is neither `1` nor `2`.
    #[error("row {row}: unknown type tag {tag:?}")]
    UnknownTypeTag {
        /// 1-based row number.
        row: usize,
        /// The offending tag.
        tag: String,
    },

    /// The length field is not a number.
    #[error("row {row}: invalid length field {field:?}")]
    BadLength {
        /// 1-based row number.
        row: usize,
        /// The offending field.
        field: String,
    },

    /// A string row whose value is entirely numeric.
    #[error("row {row}: declared a string but the value is numeric")]
    StringWithNumericValue {
        /// 1-based row number.
        row: usize,
    },

    /// A string row whose value length does not match the declared length.
    #[error("row {row}: string value is {actual} characters, declared {declared}")]
    StringLengthMismatch {
        /// 1-based row number.
        row: usize,
        /// Declared character count.
        declared: usize,
        /// Actual character count.
        actual: usize,
    },

    /// An integer row whose value is not numeric.
    #[error("row {row}: declared an integer but the value is not numeric")]
    IntegerWithTextValue {
        /// 1-based row number.
        row: usize,
    },

    /// An integer row whose declared width is not a power of two bits.
    #[error("row {row}: {bits} bits is not a power of two")]
    NotPowerOfTwo {
        /// 1-based row number.
        row: usize,
        /// Declared width in bits.
        bits: usize,
    },

    /// An integer row whose value does not fit the declared width.
    #[error("row {row}: value does not fit in {bits} bits")]
    ValueTooWide {
        /// 1-based row number.
        row: usize,
        /// Declared width in bits.
        bits: usize,
    },
}

enum FieldRow {
    Str { declared: usize, value: String },
    Int { bits: usize, value: String },
}

impl FieldRow {
    fn type_label(&self) -> &'static str {
        match self {
            FieldRow::Str { .. } => STRING_LABEL,
            FieldRow::Int { .. } => INTEGER_LABEL,
        }
    }

    fn length_cell(&self) -> String {
        match self {
            FieldRow::Str { declared, .. } => declared.to_string(),
            FieldRow::Int { bits, .. } => format!("{bits}bit"),
        }
    }

    fn value_cell(&self) -> &str {
        match self {
            FieldRow::Str { value, .. } | FieldRow::Int { value, .. } => value,
        }
    }
}

fn is_numeric(value: &str) -> bool {
    !value.is_empty() && value.chars().all(|c| c.is_ascii_digit())
}

/// Bit length of a non-negative decimal number of any size.
fn decimal_bit_length(digits: &str) -> usize {
    let mut digits: Vec<u8> = digits.bytes().map(|b| b - b'0').collect();
    let mut bits = 0;
    while digits.iter().any(|&d| d != 0) {
        let mut rem = 0u8;
        for d in digits.iter_mut() {
            let cur = rem * 10 + *d;
            *d = cur / 2;
            rem = cur % 2;
        }
        bits += 1;
    }
    bits
}

fn parse_row(row: usize, line: &str) -> Result<FieldRow, TableError> {
    let fields: Vec<&str> = line.split(',').collect();
    if fields.len() != 3 {
        return Err(TableError::FieldCount {
            row,
            found: fields.len(),
        });
    }
    let tag = fields[0].trim();
    let length_field = fields[1].trim();
    let value = fields[2].trim();

    let declared: usize = length_field.parse().map_err(|_| TableError::BadLength {
        row,
        field: length_field.to_string(),
    })?;

    match tag {
        "1" => {
            if is_numeric(value) {
                return Err(TableError::StringWithNumericValue { row });
            }
            let actual = value.chars().count();
            if actual != declared {
                return Err(TableError::StringLengthMismatch {
                    row,
                    declared,
                    actual,
                });
            }
            Ok(FieldRow::Str {
                declared,
                value: value.to_string(),
            })
        }
        "2" => {
            if !is_numeric(value) {
                return Err(TableError::IntegerWithTextValue { row });
            }
            let bits = declared * BITS_PER_BYTE;
            if bits == 0 || bits & (bits - 1) != 0 {
                return Err(TableError::NotPowerOfTwo { row, bits });
            }
            if decimal_bit_length(value) > bits {
                return Err(TableError::ValueTooWide { row, bits });
            }
            Ok(FieldRow::Int {
                bits,
                value: value.to_string(),
            })
        }
        other => Err(TableError::UnknownTypeTag {
            row,
            tag: other.to_string(),
        }),
    }
}

fn pad(cell: &str, width: usize) -> String {
    format!("{cell:<width$}")
}

/// Render `type,length,value` CSV rows as an aligned pipe table.
///
/// Empty lines are skipped; any malformed row aborts the whole render.
pub fn render_table(input: &str) -> Result<String, TableError> {
    let rows: Vec<FieldRow> = input
        .lines()
        .filter(|line| !line.trim().is_empty())
        .enumerate()
        .map(|(i, line)| parse_row(i + 1, line))
        .collect::<Result<_, _>>()?;

    let type_width = INTEGER_LABEL.len();
    let length_width = rows
        .iter()
        .map(|r| r.length_cell().len())
        .chain([LENGTH_HEADER.len()])
        .max()
        .unwrap_or(LENGTH_HEADER.len());
    let value_width = rows
        .iter()
        .map(|r| r.value_cell().chars().count())
        .chain([VALUE_HEADER.len()])
        .max()
        .unwrap_or(VALUE_HEADER.len());

    let mut out = String::new();
    out.push_str(&format!(
        "|{}|{}|{}|\n",
        pad(TYPE_HEADER, type_width),
        pad(LENGTH_HEADER, length_width),
        pad(VALUE_HEADER, value_width),
    ));
    out.push_str(&format!(
        "|{}|{}|{}|\n",
        "_".repeat(type_width),
        "_".repeat(length_width),
        "_".repeat(value_width),
    ));
    for row in &rows {
        out.push_str(&format!(
            "|{}|{}|{}|\n",
            pad(row.type_label(), type_width),
            pad(&row.length_cell(), length_width),
            pad(row.value_cell(), value_width),
        ));
    }
    Ok(out)
}
