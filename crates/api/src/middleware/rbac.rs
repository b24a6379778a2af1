//! Role-based access control (RBAC) extractors.
//!
//! Each extractor wraps [`AuthUser`] and rejects requests whose role does
//! not meet the requirement. Every check fails closed: a request without a
//! valid token is rejected with 401 before any role comparison happens.

use academe_core::error::CoreError;
use academe_core::roles::{ROLE_ADMIN, ROLE_COORDINATOR, ROLE_DEAN, ROLE_TEACHER};
use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum::http::Method;

use super::auth::AuthUser;
use crate::error::AppError;
use crate::state::AppState;

/// Requires the `admin` role. Rejects with 403 Forbidden otherwise.
///
/// ```ignore
/// async fn admin_only(RequireAdmin(user): RequireAdmin) -> AppResult<Json<()>> {
///     // user is guaranteed to be an admin here
///     Ok(Json(()))
/// }
/// ```
pub struct RequireAdmin(pub AuthUser);

impl FromRequestParts<AppState> for RequireAdmin {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = AuthUser::from_request_parts(parts, state).await?;
        if user.role != ROLE_ADMIN {
            return Err(AppError::Core(CoreError::Forbidden(
                "Admin role required".into(),
            )));
        }
        Ok(RequireAdmin(user))
    }
}

/// Requires the `dean` role. Rejects with 403 Forbidden otherwise.
///
/// Gates every route under `/dean`.
pub struct RequireDean(pub AuthUser);

impl FromRequestParts<AppState> for RequireDean {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = AuthUser::from_request_parts(parts, state).await?;
        if user.role != ROLE_DEAN {
            return Err(AppError::Core(CoreError::Forbidden(
                "Dean role required".into(),
            )));
        }
        Ok(RequireDean(user))
    }
}

/// Requires the `coordinator` role. Rejects with 403 Forbidden otherwise.
pub struct RequireCoordinator(pub AuthUser);

impl FromRequestParts<AppState> for RequireCoordinator {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = AuthUser::from_request_parts(parts, state).await?;
        if user.role != ROLE_COORDINATOR {
            return Err(AppError::Core(CoreError::Forbidden(
                "Coordinator role required".into(),
            )));
        }
        Ok(RequireCoordinator(user))
    }
}

/// Read methods (GET/HEAD/OPTIONS) pass for any authenticated user; write
/// methods require the `teacher` or `admin` role.
///
/// Used by the study-plan routes: anyone signed in may browse plans, but
/// only teachers (and admins) may create or modify them.
pub struct TeacherOrAdminOrReadOnly(pub AuthUser);

impl FromRequestParts<AppState> for TeacherOrAdminOrReadOnly {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = AuthUser::from_request_parts(parts, state).await?;

        let is_read = matches!(parts.method, Method::GET | Method::HEAD | Method::OPTIONS);
        if !is_read && user.role != ROLE_TEACHER && user.role != ROLE_ADMIN {
            return Err(AppError::Core(CoreError::Forbidden(
                "Teacher or Admin role required".into(),
            )));
        }
        Ok(TeacherOrAdminOrReadOnly(user))
    }
}

/// Requires any authenticated user (any valid role).
///
/// Functionally equivalent to [`AuthUser`] but named explicitly for use in
/// route definitions where the intent "this route requires authentication"
/// should be self-documenting.
///
/// ```ignore
/// async fn any_authed(RequireAuth(user): RequireAuth) -> AppResult<Json<()>> {
///     Ok(Json(()))
/// }
/// ```
pub struct RequireAuth(pub AuthUser);

impl FromRequestParts<AppState> for RequireAuth {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = AuthUser::from_request_parts(parts, state).await?;
        Ok(RequireAuth(user))
    }
}
