//! gastos-core: expense row model, tolerant CSV parser, summary aggregation,
//! and a paginated read-only view over parsed rows.

pub mod pager;
pub mod parser;
pub mod row;
pub mod summary;

pub use pager::{DEFAULT_PAGE_SIZE, PageView, Pager};
pub use parser::{normalize_amount, parse_expenses};
pub use row::{Row, UNCATEGORIZED};
pub use summary::{Summary, summarize};
