//! Persistence models and request DTOs.
//! - SeaORM entities for every resource
//! - DTO validation run at the HTTP boundary
//! - Prefixed resource identifiers

pub mod errors;
pub mod db;
pub mod ids;
pub mod validate;
pub mod resource;
pub mod address;
pub mod company;
pub mod customer;

pub use resource::Resource;
pub use validate::Validate;

#[cfg(test)]
mod tests;
