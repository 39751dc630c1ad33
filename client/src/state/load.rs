//! Load status of data fetched by a page.

#[cfg(test)]
#[path = "load_test.rs"]
mod load_test;

use crate::net::error::ApiError;

#[derive(Clone, Debug, Default, PartialEq)]
pub enum Load<T> {
    #[default]
    Loading,
    Ready(T),
    Failed(String),
}

impl<T> Load<T> {
    #[must_use]
    pub fn from_result(result: Result<T, ApiError>) -> Self {
        match result {
            Ok(value) => Self::Ready(value),
            Err(e) => Self::Failed(failure_message(&e)),
        }
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }
}

/// Message shown in place of data that could not be loaded.
#[must_use]
pub fn failure_message(error: &ApiError) -> String {
    match error {
        ApiError::SessionExpired => "Your session has expired. Sign in again.".to_owned(),
        ApiError::Unavailable => "Loading…".to_owned(),
        ApiError::Transport(_) => "The server could not be reached.".to_owned(),
        ApiError::Status { status: 403, .. } => "You do not have access to this section.".to_owned(),
        ApiError::Status { status: 404, .. } => "Nothing found here.".to_owned(),
        other => other.detail().unwrap_or_else(|| "Could not load data.".to_owned()),
    }
}
