mod html_formatter;
pub mod html_tree;

pub use html_formatter::HtmlFormatter;
