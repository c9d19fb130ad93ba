//! Document ingestion pipeline: parse, de-noise, split into passages

pub mod noise;
mod parser;
mod splitter;

pub use parser::{FileParser, PageContent, ParsedDocument};
pub use splitter::{split_lines, PassageSplitter};
