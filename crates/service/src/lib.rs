//! Service layer providing resource-generic CRUD operations on top of models.
//! - Separates business logic from data access through `ResourceRepository`.
//! - Reuses validation and entity definitions in `models` crate.
//! - Provides clear error types and documented interfaces.

pub mod errors;
pub mod pagination;
pub mod repository;
pub mod crud;
pub mod runtime;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

use models::{company, customer};

pub use crud::CrudService;
pub use errors::ServiceError;
pub use pagination::{ListOptions, ListQuery};
pub use repository::{FindOptions, ResourceRepository, SeaOrmRepository};

/// Company resources backed by SeaORM.
pub type CompanyService = CrudService<company::Model>;
/// Customer resources backed by SeaORM.
pub type CustomerService = CrudService<customer::Model>;
