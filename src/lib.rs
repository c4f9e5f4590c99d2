pub mod adapters;
pub mod config;
pub mod dtos;
pub mod errors;
pub mod services;

pub use adapters::postgres::repositories::{
    Entity, ItemsRepo, Repository, UnitOfWork, UnitOfWorkFactory, UnitOfWorkPublic,
};
pub use errors::RepositoryError;
