// Adapters layer: concrete catalog sources (local file, in-memory bytes).

pub mod local_source;
pub mod static_source;

pub use local_source::LocalCatalogSource;
pub use static_source::StaticCatalogSource;
