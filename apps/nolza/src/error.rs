use thiserror::Error;

use crate::errors::domain::{DomainError, InfraErrorKind, NotFoundKind};

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {detail}")]
    Config { detail: String },
    #[error("Catalog error: {detail}")]
    Catalog { code: &'static str, detail: String },
    #[error("Not found: {detail}")]
    NotFound { code: &'static str, detail: String },
    #[error("Internal error: {detail}")]
    Internal { detail: String },
}

impl AppError {
    /// Stable machine-readable code for any error variant
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Config { .. } => "CONFIG_ERROR",
            AppError::Catalog { code, .. } => code,
            AppError::NotFound { code, .. } => code,
            AppError::Internal { .. } => "INTERNAL",
        }
    }

    pub fn config(detail: impl Into<String>) -> Self {
        Self::Config {
            detail: detail.into(),
        }
    }
}

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation(_, detail) => AppError::Catalog {
                code: "INVALID_CATALOG",
                detail,
            },
            DomainError::NotFound(NotFoundKind::CatalogFile, detail) => AppError::NotFound {
                code: "CATALOG_NOT_FOUND",
                detail,
            },
            DomainError::Infra(InfraErrorKind::Parse, detail) => AppError::Catalog {
                code: "CATALOG_PARSE",
                detail,
            },
            DomainError::Infra(InfraErrorKind::Io, detail) => AppError::Internal { detail },
        }
    }
}
