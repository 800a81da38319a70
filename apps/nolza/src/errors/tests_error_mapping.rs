// Unit tests for error mapping - pure conversions, no I/O
use crate::errors::domain::{DomainError, InfraErrorKind, NotFoundKind, ValidationKind};
use crate::AppError;

#[test]
fn maps_validation_to_invalid_catalog() {
    let de = DomainError::validation(ValidationKind::DuplicateSlug, "slug 'a' appears twice");
    let app: AppError = de.into();
    assert_eq!(app.code(), "INVALID_CATALOG");
    assert!(app.to_string().contains("appears twice"));
}

#[test]
fn maps_missing_catalog_file() {
    let file: AppError =
        DomainError::not_found(NotFoundKind::CatalogFile, "games.json missing").into();
    assert_eq!(file.code(), "CATALOG_NOT_FOUND");
    assert!(file.to_string().contains("games.json"));
}

#[test]
fn maps_infra_errors() {
    let parse: AppError = DomainError::infra(InfraErrorKind::Parse, "bad json").into();
    assert_eq!(parse.code(), "CATALOG_PARSE");

    let io: AppError = DomainError::infra(InfraErrorKind::Io, "disk").into();
    assert_eq!(io.code(), "INTERNAL");
}

#[test]
fn domain_error_display_includes_kind_and_detail() {
    let de = DomainError::validation(ValidationKind::EmptySlug, "entry 3");
    assert_eq!(de.to_string(), "validation EmptySlug: entry 3");
}
