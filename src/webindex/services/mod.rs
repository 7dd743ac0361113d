pub mod aggregator;
pub mod index_parser;

pub use aggregator::summarize;
pub use index_parser::parse_index;
