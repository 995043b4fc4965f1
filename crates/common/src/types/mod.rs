use serde::Serialize;

#[derive(Serialize, Debug)]
pub struct Health {
    pub status: &'static str,
}

/// Body returned by create endpoints.
#[derive(Serialize, Debug)]
pub struct Created {
    pub id: String,
}
