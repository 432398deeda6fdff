//! Course membership controller.

use crate::{
    responses::{ok, ApiResult},
    state::AppState,
};
use axum::{extract::State, routing::get, Router};
use searcher_core::MembershipList;
use tracing::debug;

/// Creates the course membership router.
pub fn router() -> Router<AppState> {
    Router::new().route("/course/members", get(list_course_members))
}

/// Lists all course memberships with their user details attached.
#[utoipa::path(
    get,
    path = "/course/members",
    tag = "memberships",
    responses(
        (status = 200, description = "Memberships with user details", body = MembershipList),
        (status = 502, description = "Membership backend request failed", body = searcher_core::ErrorResponse),
        (status = 504, description = "Membership backend timed out", body = searcher_core::ErrorResponse)
    )
)]
pub async fn list_course_members(State(state): State<AppState>) -> ApiResult<MembershipList> {
    debug!("List course members request");

    let memberships = state
        .membership_service
        .fetch_all_memberships_with_users()
        .await?;
    ok(memberships)
}
