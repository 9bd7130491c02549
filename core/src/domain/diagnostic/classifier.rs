use thiserror::Error;
use tracing::{debug, warn};

use crate::domain::{
    common::entities::app_errors::CoreError,
    diagnostic::{
        beauty::{
            BEAUTY_SYSTEM_PROMPT, assemble_beauty_result, beauty_fallback, build_beauty_prompt,
            parse_beauty_selection,
        },
        entities::{DiagnosticKind, DiagnosticResult},
        hair::{
            HAIR_SYSTEM_PROMPT, HAIR_TEMPERATURE, build_hair_prompt, hair_fallback,
            parse_hair_response,
        },
        ports::{CompletionRequest, DiagnosticClassifier, LLMClient},
        skin::score_skin,
        value_objects::{BeautyAnswers, DiagnosticAnswers, HairAnswers},
    },
};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClassificationError {
    #[error("Limite de requêtes dépassée, veuillez réessayer plus tard.")]
    RateLimited,

    #[error("Paiement requis, veuillez ajouter des crédits à votre compte Lovable AI.")]
    PaymentRequired,

    #[error("classification service unavailable: {0}")]
    Unavailable(String),

    #[error("no classifier handles `{0}` diagnostics")]
    Unsupported(DiagnosticKind),

    /// The model answered but not in the expected shape; `fallback` is the
    /// default result to use instead.
    #[error("unexpected model reply: {reason}")]
    ShapeMismatch {
        fallback: Box<DiagnosticResult>,
        reason: String,
    },
}

impl From<CoreError> for ClassificationError {
    fn from(error: CoreError) -> Self {
        match error {
            CoreError::RateLimited => ClassificationError::RateLimited,
            CoreError::PaymentRequired => ClassificationError::PaymentRequired,
            other => ClassificationError::Unavailable(other.to_string()),
        }
    }
}

impl From<ClassificationError> for CoreError {
    fn from(error: ClassificationError) -> Self {
        match error {
            ClassificationError::RateLimited => CoreError::RateLimited,
            ClassificationError::PaymentRequired => CoreError::PaymentRequired,
            ClassificationError::Unavailable(message) => CoreError::ExternalServiceError(message),
            ClassificationError::ShapeMismatch { reason, .. } => {
                CoreError::ExternalServiceError(reason)
            }
            ClassificationError::Unsupported(kind) => {
                tracing::error!("No classifier registered for {} diagnostics", kind);
                CoreError::InternalServerError
            }
        }
    }
}

/// Scores skin questionnaires locally with lookup tables.
#[derive(Debug, Clone, Default)]
pub struct RuleBasedClassifier;

impl DiagnosticClassifier for RuleBasedClassifier {
    async fn classify(
        &self,
        answers: DiagnosticAnswers,
    ) -> Result<DiagnosticResult, ClassificationError> {
        match answers {
            DiagnosticAnswers::Skin(answers) => Ok(DiagnosticResult::Skin(score_skin(&answers))),
            other => Err(ClassificationError::Unsupported(other.kind())),
        }
    }
}

/// Delegates hair and beauty questionnaires to a chat-completion model.
///
/// One completion call per classification, never retried.
#[derive(Debug, Clone)]
pub struct GenerativeClassifier<L: LLMClient> {
    llm: L,
}

impl<L: LLMClient> GenerativeClassifier<L> {
    pub fn new(llm: L) -> Self {
        Self { llm }
    }

    async fn classify_hair(
        &self,
        answers: HairAnswers,
    ) -> Result<DiagnosticResult, ClassificationError> {
        let reply = self
            .llm
            .complete(CompletionRequest {
                system_prompt: HAIR_SYSTEM_PROMPT.to_string(),
                user_prompt: build_hair_prompt(&answers),
                temperature: Some(HAIR_TEMPERATURE),
            })
            .await?;

        match parse_hair_response(&reply) {
            Ok(result) => Ok(DiagnosticResult::Hair(result)),
            Err(reason) => {
                warn!(reason = %reason, "Hair diagnostic reply did not match the expected shape");
                Err(ClassificationError::ShapeMismatch {
                    fallback: Box::new(DiagnosticResult::Hair(hair_fallback(&answers))),
                    reason,
                })
            }
        }
    }

    async fn classify_beauty(
        &self,
        answers: BeautyAnswers,
    ) -> Result<DiagnosticResult, ClassificationError> {
        let reply = self
            .llm
            .complete(CompletionRequest {
                system_prompt: BEAUTY_SYSTEM_PROMPT.to_string(),
                user_prompt: build_beauty_prompt(&answers),
                temperature: None,
            })
            .await?;

        let mismatch = |reason: String| {
            warn!(reason = %reason, "Beauty diagnostic reply did not match the expected shape");
            ClassificationError::ShapeMismatch {
                fallback: Box::new(DiagnosticResult::Beauty(beauty_fallback(&answers))),
                reason,
            }
        };

        let selection = parse_beauty_selection(&reply).map_err(mismatch)?;
        let result = assemble_beauty_result(&answers, &selection);
        if result.profiles.is_empty() {
            return Err(mismatch(format!(
                "none of the selected profiles exist: {:?}",
                selection.selected_profiles
            )));
        }

        debug!(
            category = %result.beauty_profile.profile_category,
            profiles = result.profiles.len(),
            "Beauty profile selected"
        );

        Ok(DiagnosticResult::Beauty(result))
    }
}

impl<L: LLMClient> DiagnosticClassifier for GenerativeClassifier<L> {
    async fn classify(
        &self,
        answers: DiagnosticAnswers,
    ) -> Result<DiagnosticResult, ClassificationError> {
        match answers {
            DiagnosticAnswers::Hair(answers) => self.classify_hair(answers).await,
            DiagnosticAnswers::Beauty(answers) => self.classify_beauty(answers).await,
            other => Err(ClassificationError::Unsupported(other.kind())),
        }
    }
}

/// Routes skin questionnaires to `rules` and everything else to `generative`.
#[derive(Debug, Clone)]
pub struct CompositeClassifier<S, G>
where
    S: DiagnosticClassifier,
    G: DiagnosticClassifier,
{
    rules: S,
    generative: G,
}

impl<S, G> CompositeClassifier<S, G>
where
    S: DiagnosticClassifier,
    G: DiagnosticClassifier,
{
    pub fn new(rules: S, generative: G) -> Self {
        Self { rules, generative }
    }
}

impl<S, G> DiagnosticClassifier for CompositeClassifier<S, G>
where
    S: DiagnosticClassifier,
    G: DiagnosticClassifier,
{
    async fn classify(
        &self,
        answers: DiagnosticAnswers,
    ) -> Result<DiagnosticResult, ClassificationError> {
        match answers.kind() {
            DiagnosticKind::Skin => self.rules.classify(answers).await,
            DiagnosticKind::Hair | DiagnosticKind::Beauty => {
                self.generative.classify(answers).await
            }
        }
    }
}
