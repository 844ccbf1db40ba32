use actix_web::http::StatusCode;

use crate::error::AppError;
use crate::errors::domain::{ConflictKind, DomainError, NotFoundKind, ValidationKind};
use crate::errors::ErrorCode;

#[test]
fn validation_kinds_map_to_400_with_specific_codes() {
    let cases = [
        (ValidationKind::InvalidThrow, ErrorCode::InvalidThrow),
        (
            ValidationKind::InvalidPlayerCount,
            ErrorCode::InvalidPlayerCount,
        ),
        (ValidationKind::TurnComplete, ErrorCode::TurnComplete),
        (ValidationKind::TurnNotComplete, ErrorCode::TurnNotComplete),
        (ValidationKind::GameNotActive, ErrorCode::GameNotActive),
        (
            ValidationKind::Other("X".into()),
            ErrorCode::ValidationError,
        ),
    ];

    for (kind, code) in cases {
        let app: AppError = DomainError::validation(kind, "detail").into();
        assert_eq!(app.status(), StatusCode::BAD_REQUEST);
        assert_eq!(app.code(), code);
    }
}

#[test]
fn not_found_kinds_map_to_404() {
    let cases = [
        (NotFoundKind::Game, ErrorCode::GameNotFound),
        (NotFoundKind::Player, ErrorCode::PlayerNotFound),
        (NotFoundKind::Other("X".into()), ErrorCode::NotFound),
    ];

    for (kind, code) in cases {
        let app: AppError = DomainError::not_found(kind, "detail").into();
        assert_eq!(app.status(), StatusCode::NOT_FOUND);
        assert_eq!(app.code(), code);
    }
}

#[test]
fn conflicts_map_to_409() {
    let app: AppError =
        DomainError::conflict(ConflictKind::PlayerNameTaken, "taken").into();
    assert_eq!(app.status(), StatusCode::CONFLICT);
    assert_eq!(app.code(), ErrorCode::PlayerNameTaken);
}

#[test]
fn infra_maps_to_500() {
    let app: AppError = DomainError::infra("store down").into();
    assert_eq!(app.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(app.code(), ErrorCode::Internal);
}
