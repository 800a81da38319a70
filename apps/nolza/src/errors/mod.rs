//! Error handling for the Nolza catalog.

pub mod domain;

#[cfg(test)]
mod tests_error_mapping;

pub use domain::DomainError;
