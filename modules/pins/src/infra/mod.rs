pub mod storage;
pub mod tag_catalog;
