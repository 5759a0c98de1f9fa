//! Repository implementations backed by `SQLite`.

mod row_mappers;
mod sqlite_planet_repository;

pub use sqlite_planet_repository::SqlitePlanetRepository;
