//! Search box plus status/category dropdown filtering over record lists.

pub mod apply;
pub mod criteria;
pub mod query;

pub use apply::filter_records;
pub use criteria::parse_criteria;
pub use query::{parse_query, QueryPairs};
