//! Full flow over the documented sample statement: parse, summarize, page.

use gastos_core::{Pager, parse_expenses, summarize};

const SAMPLE: &str = "\
date,category,amount
2025-01-01,Marketing,1200
2025-01-03,Operación,500
2025-01-04,Marketing,300,extra
2025-01-05,,abc
";

#[test]
fn sample_statement_parses_to_three_rows() {
    let rows = parse_expenses(SAMPLE);

    // Last line drops on the non-numeric amount; the extra field on the
    // third line is ignored.
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0].date, "2025-01-01");
    assert_eq!(rows[1].category, "Operación");
    assert_eq!(rows[2].amount, 300.0);
}

#[test]
fn sample_statement_summary() {
    let rows = parse_expenses(SAMPLE);
    let summary = summarize(&rows);

    assert!((summary.total - 2000.0).abs() < 1e-9);
    assert_eq!(summary.by_category.len(), 2);
    assert!((summary.by_category["Marketing"] - 1500.0).abs() < 1e-9);
    assert!((summary.by_category["Operación"] - 500.0).abs() < 1e-9);

    let by_cat: f64 = summary.by_category.values().sum();
    assert!((by_cat - summary.total).abs() < 1e-9);
}

#[test]
fn sample_statement_pages() {
    let rows = parse_expenses(SAMPLE);
    let mut pager = Pager::new(rows, 2);

    assert_eq!(pager.total_pages(), 2);
    let view = pager.page();
    assert_eq!(view.rows.len(), 2);
    assert_eq!((view.start, view.end), (1, 2));

    pager.change_page(1);
    let view = pager.page();
    assert_eq!(view.rows.len(), 1);
    assert_eq!(view.rows[0].category, "Marketing");
    assert_eq!((view.start, view.end), (3, 3));

    // A fresh upload replaces the dataset and returns to page 1.
    pager.reset(parse_expenses(SAMPLE));
    assert_eq!(pager.current_page(), 1);
}
