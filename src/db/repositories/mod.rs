//! Database repositories

pub mod contest_repo;

pub use contest_repo::ContestRepository;
