//! In-memory repository implementations for tests and local runs.

mod characters;
mod matches;

pub use characters::InMemoryCharacterRepository;
pub use matches::InMemoryMatchRepository;
