//! OpenAPI documentation configuration.

use crate::controllers::HealthResponse;
use searcher_core::{ErrorResponse, Membership, MembershipList, User};
use searcher_service::CacheStatus;
use utoipa::OpenApi;

/// OpenAPI documentation for the Member Searcher API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Member Searcher API",
        version = "0.1.0",
        description = "Course memberships enriched with user details",
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        )
    ),
    paths(
        crate::controllers::membership_controller::list_course_members,
        crate::controllers::health_controller::health_check,
        crate::controllers::health_controller::readiness_check,
        crate::controllers::health_controller::liveness_check,
    ),
    components(
        schemas(
            User,
            Membership,
            MembershipList,
            ErrorResponse,
            CacheStatus,
            HealthResponse,
        )
    ),
    tags(
        (name = "memberships", description = "Course membership endpoints"),
        (name = "health", description = "Health check endpoints")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_lists_course_members_path() {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key("/course/members"));
        assert!(doc.paths.paths.contains_key("/health"));
    }

    #[test]
    fn test_openapi_registers_membership_schema() {
        let doc = ApiDoc::openapi();
        let components = doc.components.expect("components");
        assert!(components.schemas.contains_key("MembershipList"));
        assert!(components.schemas.contains_key("ErrorResponse"));
    }
}
