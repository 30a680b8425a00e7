//! Plain-text extractors for fields and reference collections.

mod collection;
mod field;

pub use collection::CollectionExtractor;
pub use field::FieldExtractor;
