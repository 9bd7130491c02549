use std::time::Duration;

use crate::{
    domain::{
        authentication::services::TokenVerifier,
        common::{BeautyScanConfig, services::Service},
        diagnostic::classifier::{CompositeClassifier, GenerativeClassifier, RuleBasedClassifier},
    },
    infrastructure::{
        authentication::PostgresUserRoleRepository,
        db::postgres::{Postgres, PostgresConfig},
        diagnostic::PostgresDiagnosticRepository,
        health::PostgresHealthCheckRepository,
        ingredient::PostgresIngredientRepository,
        llm::ChatCompletionClient,
        open_food_facts::OpenFoodFactsClient,
        product::PostgresProductRepository,
        product_analysis::PostgresScanHistoryRepository,
        routine::PostgresRoutineRepository,
    },
};

pub type BeautyScanClassifier =
    CompositeClassifier<RuleBasedClassifier, GenerativeClassifier<ChatCompletionClient>>;

pub type BeautyScanService = Service<
    PostgresIngredientRepository,
    PostgresProductRepository,
    PostgresRoutineRepository,
    PostgresScanHistoryRepository,
    PostgresDiagnosticRepository,
    PostgresUserRoleRepository,
    PostgresHealthCheckRepository,
    OpenFoodFactsClient,
    BeautyScanClassifier,
>;

pub async fn create_service(config: BeautyScanConfig) -> Result<BeautyScanService, anyhow::Error> {
    let postgres = Postgres::new(PostgresConfig {
        database_url: config.database.url(),
    })
    .await?;

    let llm_client = ChatCompletionClient::new(
        config.llm.gateway_url,
        config.llm.api_key,
        config.llm.model,
        Duration::from_secs(config.llm.timeout_secs),
    )?;

    let product_lookup = OpenFoodFactsClient::new(
        config.open_food_facts.base_url,
        Duration::from_secs(config.open_food_facts.timeout_secs),
    )?;

    let classifier =
        CompositeClassifier::new(RuleBasedClassifier, GenerativeClassifier::new(llm_client));

    Ok(Service::new(
        PostgresIngredientRepository::new(postgres.get_db()),
        PostgresProductRepository::new(postgres.get_db()),
        PostgresRoutineRepository::new(postgres.get_db()),
        PostgresScanHistoryRepository::new(postgres.get_db()),
        PostgresDiagnosticRepository::new(postgres.get_db()),
        PostgresUserRoleRepository::new(postgres.get_db()),
        PostgresHealthCheckRepository::new(postgres.get_db()),
        product_lookup,
        classifier,
        TokenVerifier::new(&config.auth.jwt_secret),
    ))
}
