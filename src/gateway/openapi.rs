//! OpenAPI / Swagger UI Documentation
//!
//! - Swagger UI: `http://localhost:8080/docs`
//! - OpenAPI JSON: `http://localhost:8080/api-docs/openapi.json`

use utoipa::OpenApi;

use crate::commission::CommissionPreview;
use crate::content::Page;
use crate::gateway::error::ErrorBody;
use crate::gateway::handlers::{HealthResponse, PageResponse};

/// Main API Documentation struct
#[derive(OpenApi)]
#[openapi(
    info(
        title = "OnTheDeal Gateway API",
        version = "1.0.0",
        description = "Public content pages and commission rate preview for the OnTheDeal B2B marketplace.",
        license(
            name = "MIT"
        )
    ),
    servers(
        (url = "http://localhost:8080", description = "Development"),
    ),
    paths(
        crate::gateway::handlers::health::health_check,
        crate::gateway::handlers::pages::get_page,
        crate::gateway::handlers::commission::get_commission_preview,
    ),
    components(
        schemas(
            HealthResponse,
            Page,
            PageResponse,
            CommissionPreview,
            ErrorBody,
        )
    ),
    tags(
        (name = "System", description = "Health and status"),
        (name = "Content", description = "Public content pages"),
        (name = "Commission", description = "Commission rate preview"),
    )
)]
pub struct ApiDoc;
