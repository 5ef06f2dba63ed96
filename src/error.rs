use thiserror::Error;

/// Errors returned while building or querying a [`crate::NCList`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum NCListError {
    #[error("Invalid interval: start is greater than stop")]
    InvalidInterval,
}
