//! List query and offset pagination for the CRUD service.
//!
//! Pages are 1-based. A `page` only takes effect together with a `limit`;
//! `page` alone is ignored and the full filtered set is returned.

use models::{errors::ModelError, Validate};
use serde::Deserialize;

/// Pagination parameters
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ListOptions {
    /// maximum number of records returned
    pub limit: Option<u64>,
    /// 1-based page index, only meaningful with `limit`
    pub page: Option<u64>,
}

impl ListOptions {
    pub fn new(limit: Option<u64>, page: Option<u64>) -> Self { Self { limit, page } }

    /// Convert to `(take, skip)`. Page `0` is treated as the first page.
    pub fn take_skip(self) -> (Option<u64>, Option<u64>) {
        match (self.limit, self.page) {
            (Some(limit), Some(page)) => {
                let skip = page.max(1).saturating_sub(1).saturating_mul(limit);
                (Some(limit), Some(skip))
            }
            (Some(limit), None) => (Some(limit), None),
            (None, _) => (None, None),
        }
    }

    /// `page` was supplied without a `limit` and will have no effect.
    pub fn page_ignored(self) -> bool { self.limit.is_none() && self.page.is_some() }

    pub fn is_empty(self) -> bool { self.limit.is_none() && self.page.is_none() }
}

impl Validate for ListOptions {
    fn validate(&self) -> Result<(), ModelError> {
        if self.limit == Some(0) {
            return Err(ModelError::validation("limit must be at least 1"));
        }
        if self.page == Some(0) {
            return Err(ModelError::validation("page must be at least 1"));
        }
        Ok(())
    }
}

/// Exact-match filter plus optional pagination.
#[derive(Clone, Debug, Default)]
pub struct ListQuery<F> {
    pub filter: F,
    pub options: Option<ListOptions>,
}

impl<F> ListQuery<F> {
    pub fn new(filter: F) -> Self { Self { filter, options: None } }

    pub fn with_options(mut self, options: ListOptions) -> Self {
        self.options = Some(options);
        self
    }
}

impl<F: Default> ListQuery<F> {
    pub fn paged(limit: Option<u64>, page: Option<u64>) -> Self {
        Self::new(F::default()).with_options(ListOptions::new(limit, page))
    }
}
