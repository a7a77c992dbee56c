use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Todo API",
        version = "0.1.0",
        description = "Create, list, search, update and delete short text tasks"
    ),
    paths(crate::api::health::ready_handler),
    tags((name = "health", description = "Probes"))
)]
struct BaseApiDoc;

/// Service metadata plus the todo domain's paths, served at `/api-docs/openapi.json`.
pub struct ApiDoc;

impl OpenApi for ApiDoc {
    fn openapi() -> utoipa::openapi::OpenApi {
        BaseApiDoc::openapi().merge_from(domain_todo::ApiDoc::openapi())
    }
}
