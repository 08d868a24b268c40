//! Directory tree reading
//!
//! `TreeBuilder` performs a single depth-first walk and returns the whole
//! listing as a `Vec<FileEntry>`, held in memory until it is rendered.

mod builder;
mod config;
mod entry;
mod utils;

pub use builder::{TreeBuilder, read_tree};
pub use config::BuilderConfig;
pub use entry::FileEntry;
pub use utils::resolve_link;
