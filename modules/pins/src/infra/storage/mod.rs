pub mod entity;
pub mod mapper;
pub mod memory_repo;

pub use memory_repo::InMemoryPinsRepository;
