//! Tolerant CSV expense parser.
//!
//! Expected input:
//!   date,category,amount
//!   2025-01-01,Marketing,1200
//!   2025-01-03,Operación,500
//!
//! The first non-blank line is the header; its fields are trimmed,
//! lowercased, and define the column positions used for every data line.
//! Malformed data lines (too few fields, missing date, unparseable amount)
//! are dropped, never stored.

use csv::ReaderBuilder;
use log::debug;

use crate::row::{Row, UNCATEGORIZED};

/// Minimum fields a data line must carry to be considered at all.
const MIN_FIELDS: usize = 3;

/// Column positions resolved from the header row.
struct Columns {
    date: Option<usize>,
    category: Option<usize>,
    amount: Option<usize>,
}

impl Columns {
    fn from_header(record: &csv::StringRecord) -> Self {
        let mut cols = Columns {
            date: None,
            category: None,
            amount: None,
        };
        for (idx, name) in record.iter().enumerate() {
            let slot = match name.trim().to_lowercase().as_str() {
                "date" => &mut cols.date,
                "category" => &mut cols.category,
                "amount" => &mut cols.amount,
                _ => continue,
            };
            // First occurrence wins when a header name repeats.
            if slot.is_none() {
                *slot = Some(idx);
            }
        }
        cols
    }
}

fn is_blank(record: &csv::StringRecord) -> bool {
    record.iter().all(|f| f.trim().is_empty())
}

/// Normalize an amount field into a finite f64.
///
/// Accepts dot-decimal ("1234.56") and single-comma-decimal ("1234,56")
/// notation. Thousands separators are not supported: "1.234,56" becomes
/// "1.234.56" and fails the parse, so the row is dropped instead of being
/// silently corrupted.
pub fn normalize_amount(raw: &str) -> Option<f64> {
    let cleaned = raw.trim().replacen(',', ".", 1);
    match cleaned.parse::<f64>() {
        Ok(v) if v.is_finite() => Some(v),
        _ => None,
    }
}

/// Parse raw CSV text into an ordered sequence of rows.
///
/// Pure transformation: input order is preserved, nothing is deduplicated
/// or sorted, and rejected lines are only visible at debug log level.
pub fn parse_expenses(text: &str) -> Vec<Row> {
    let mut rdr = ReaderBuilder::new()
        .flexible(true)
        .has_headers(false)
        .from_reader(text.as_bytes());

    let mut records = rdr.records();

    // First non-blank record is the header.
    let cols = loop {
        match records.next() {
            Some(Ok(rec)) if !is_blank(&rec) => break Columns::from_header(&rec),
            Some(Ok(_)) => continue,
            Some(Err(err)) => {
                debug!("skipping unreadable line before header: {err}");
                continue;
            }
            None => return Vec::new(),
        }
    };

    let mut rows = Vec::new();
    for result in records {
        let record = match result {
            Ok(rec) => rec,
            Err(err) => {
                debug!("skipping unreadable line: {err}");
                continue;
            }
        };
        if is_blank(&record) {
            continue;
        }
        if record.len() < MIN_FIELDS {
            debug!("dropping {record:?}: fewer than {MIN_FIELDS} fields");
            continue;
        }

        let field = |idx: Option<usize>| idx.and_then(|i| record.get(i)).map(str::trim).unwrap_or("");

        let date = field(cols.date);
        if date.is_empty() {
            debug!("dropping {record:?}: missing date");
            continue;
        }

        let Some(amount) = normalize_amount(field(cols.amount)) else {
            debug!("dropping {record:?}: unparseable amount");
            continue;
        };

        let category = match field(cols.category) {
            "" => UNCATEGORIZED,
            c => c,
        };

        rows.push(Row {
            date: date.to_string(),
            category: category.to_string(),
            amount,
        });
    }

    rows
}
