//! Static content data: loading, validation and reporting.

mod loader;
mod report;
mod validate;

pub use loader::{get_articles_data, get_db_data, load_articles, load_db};
pub use report::ValidationReport;
pub use validate::Record;
