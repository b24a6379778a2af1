//! Route definitions for the `/meetings` resource (authenticated mount).
//!
//! The dean-gated mount of the same handlers lives in [`super::dean`].

use axum::routing::get;
use axum::Router;

use crate::handlers::meetings;
use crate::state::AppState;

/// Routes mounted at `/meetings`. Any authenticated user.
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(meetings::list_meetings).post(meetings::create_meeting),
        )
        .route(
            "/{id}",
            get(meetings::get_meeting)
                .put(meetings::update_meeting)
                .delete(meetings::delete_meeting),
        )
}
