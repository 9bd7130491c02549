use crate::domain::{
    authentication::{ports::UserRoleRepository, services::TokenVerifier},
    common::policies::BeautyScanPolicy,
    diagnostic::ports::{DiagnosticClassifier, DiagnosticRepository},
    health::ports::HealthCheckRepository,
    ingredient::ports::IngredientRepository,
    product::ports::ProductRepository,
    product_analysis::ports::{ProductLookup, ScanHistoryRepository},
    routine::ports::RoutineRepository,
};

/// Application service holding every outbound port.
///
/// Domain service traits (`IngredientService`, `DiagnosticService`, ...) are
/// implemented on this type in their own modules.
#[derive(Clone)]
pub struct Service<IR, PR, RR, SH, DR, UR, HC, PL, DC>
where
    IR: IngredientRepository,
    PR: ProductRepository,
    RR: RoutineRepository,
    SH: ScanHistoryRepository,
    DR: DiagnosticRepository,
    UR: UserRoleRepository,
    HC: HealthCheckRepository,
    PL: ProductLookup,
    DC: DiagnosticClassifier,
{
    pub(crate) ingredient_repository: IR,
    pub(crate) product_repository: PR,
    pub(crate) routine_repository: RR,
    pub(crate) scan_history_repository: SH,
    pub(crate) diagnostic_repository: DR,
    pub(crate) user_role_repository: UR,
    pub(crate) health_check_repository: HC,
    pub(crate) product_lookup: PL,
    pub(crate) classifier: DC,
    pub(crate) token_verifier: TokenVerifier,
    pub(crate) policy: BeautyScanPolicy,
}

impl<IR, PR, RR, SH, DR, UR, HC, PL, DC> Service<IR, PR, RR, SH, DR, UR, HC, PL, DC>
where
    IR: IngredientRepository,
    PR: ProductRepository,
    RR: RoutineRepository,
    SH: ScanHistoryRepository,
    DR: DiagnosticRepository,
    UR: UserRoleRepository,
    HC: HealthCheckRepository,
    PL: ProductLookup,
    DC: DiagnosticClassifier,
{
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        ingredient_repository: IR,
        product_repository: PR,
        routine_repository: RR,
        scan_history_repository: SH,
        diagnostic_repository: DR,
        user_role_repository: UR,
        health_check_repository: HC,
        product_lookup: PL,
        classifier: DC,
        token_verifier: TokenVerifier,
    ) -> Self {
        Self {
            ingredient_repository,
            product_repository,
            routine_repository,
            scan_history_repository,
            diagnostic_repository,
            user_role_repository,
            health_check_repository,
            product_lookup,
            classifier,
            token_verifier,
            policy: BeautyScanPolicy::new(),
        }
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::Service;
    use crate::domain::{
        authentication::{ports::MockUserRoleRepository, services::TokenVerifier},
        diagnostic::ports::{MockDiagnosticClassifier, MockDiagnosticRepository},
        health::ports::MockHealthCheckRepository,
        ingredient::ports::MockIngredientRepository,
        product::ports::MockProductRepository,
        product_analysis::ports::{MockProductLookup, MockScanHistoryRepository},
        routine::ports::MockRoutineRepository,
    };

    pub(crate) const TEST_JWT_SECRET: &str = "test-secret";

    pub(crate) type MockService = Service<
        MockIngredientRepository,
        MockProductRepository,
        MockRoutineRepository,
        MockScanHistoryRepository,
        MockDiagnosticRepository,
        MockUserRoleRepository,
        MockHealthCheckRepository,
        MockProductLookup,
        MockDiagnosticClassifier,
    >;

    /// Every port of the service as a mock; tests set expectations on the
    /// ones they exercise and leave the rest untouched.
    pub(crate) struct ServiceMocks {
        pub ingredients: MockIngredientRepository,
        pub products: MockProductRepository,
        pub routines: MockRoutineRepository,
        pub scans: MockScanHistoryRepository,
        pub diagnostics: MockDiagnosticRepository,
        pub roles: MockUserRoleRepository,
        pub health: MockHealthCheckRepository,
        pub lookup: MockProductLookup,
        pub classifier: MockDiagnosticClassifier,
    }

    impl ServiceMocks {
        pub(crate) fn new() -> Self {
            Self {
                ingredients: MockIngredientRepository::new(),
                products: MockProductRepository::new(),
                routines: MockRoutineRepository::new(),
                scans: MockScanHistoryRepository::new(),
                diagnostics: MockDiagnosticRepository::new(),
                roles: MockUserRoleRepository::new(),
                health: MockHealthCheckRepository::new(),
                lookup: MockProductLookup::new(),
                classifier: MockDiagnosticClassifier::new(),
            }
        }

        pub(crate) fn into_service(self) -> MockService {
            Service::new(
                self.ingredients,
                self.products,
                self.routines,
                self.scans,
                self.diagnostics,
                self.roles,
                self.health,
                self.lookup,
                self.classifier,
                TokenVerifier::new(TEST_JWT_SECRET),
            )
        }
    }
}
