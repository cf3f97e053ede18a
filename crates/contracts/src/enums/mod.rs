pub mod collection_kind;

pub use collection_kind::CollectionKind;
