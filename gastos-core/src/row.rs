use serde::{Deserialize, Serialize};

/// Category substituted when a row has a blank or absent category field.
pub const UNCATEGORIZED: &str = "Sin categoría";

/// One normalized expense record.
///
/// `date` is carried as opaque text: upstream exports disagree on date
/// formats and nothing downstream does calendar math. `amount` is always
/// finite; the parser drops rows whose amount fails to parse, so a
/// non-finite amount never reaches storage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Row {
    pub date: String,
    pub category: String,
    pub amount: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_wire_field_names() {
        let row = Row {
            date: "2025-01-01".to_string(),
            category: "Marketing".to_string(),
            amount: 1200.0,
        };

        let v = serde_json::to_value(&row).unwrap();
        assert_eq!(v["date"], "2025-01-01");
        assert_eq!(v["category"], "Marketing");
        assert_eq!(v["amount"], 1200.0);
    }
}
