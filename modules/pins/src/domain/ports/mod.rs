pub mod tag_catalog;

pub use tag_catalog::TagCatalog;
