use sea_orm::DatabaseConnection;
use service::{CompanyService, CrudService, CustomerService};

/// Services shared by all handlers, built once at startup.
#[derive(Clone)]
pub struct ServerState {
    pub companies: CompanyService,
    pub customers: CustomerService,
}

impl ServerState {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            companies: CrudService::from_db(db.clone()),
            customers: CrudService::from_db(db),
        }
    }
}
