use crate::application::http::{
    analysis::router::AnalysisApiDoc,
    diagnostic::router::{AdminDiagnosticApiDoc, DiagnosticApiDoc},
    health::router::HealthApiDoc,
    ingredient::router::IngredientApiDoc,
    product::router::ProductApiDoc,
    routine::router::RoutineApiDoc,
    scan::router::ScanApiDoc,
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "BeautyScan API"
    ),
    nest(
        (path = "/health", api = HealthApiDoc),
        (path = "/ingredients", api = IngredientApiDoc),
        (path = "/products", api = ProductApiDoc),
        (path = "/routines", api = RoutineApiDoc),
        (path = "/analysis", api = AnalysisApiDoc),
        (path = "/scans", api = ScanApiDoc),
        (path = "/diagnostics", api = DiagnosticApiDoc),
        (path = "/admin/diagnostics", api = AdminDiagnosticApiDoc),
    )
)]
pub struct ApiDoc;
