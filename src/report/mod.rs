mod export;
mod text;

pub use export::{DifferenceEntry, FileEntry, ReportDocument, write_toml_report};
pub use text::{format_chunk, write_text_report};
