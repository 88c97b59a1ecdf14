mod in_memory_herb_repository;
mod traits;

pub use in_memory_herb_repository::InMemoryHerbRepository;
pub use traits::HerbRepository;
