pub mod http_catalog;
pub mod memory;

pub use http_catalog::HttpTagCatalog;
pub use memory::InMemoryTagCatalog;
