//! Authentication and authorization middleware extractors.
//!
//! - [`auth::AuthUser`] -- Extracts the authenticated user from a JWT Bearer token.
//! - [`rbac::RequireAdmin`] -- Requires the `admin` role.
//! - [`rbac::RequireDean`] -- Requires the `dean` role.
//! - [`rbac::RequireCoordinator`] -- Requires the `coordinator` role.
//! - [`rbac::TeacherOrAdminOrReadOnly`] -- Writes require `teacher` or `admin`.
//! - [`rbac::RequireAuth`] -- Requires any authenticated user.

pub mod auth;
pub mod rbac;
