use async_trait::async_trait;
use thiserror::Error;

pub const MEDIGUIDE_INSTRUCTION: &str = "You are MediGuide, a professional medical information assistant. \
Provide clear, evidence-based health information to the user. \
IMPORTANT: Always include a disclaimer that you are an AI, not a doctor, \
and that users should seek professional medical advice for emergencies.";

pub const MEDIGUIDE_TEMPERATURE: f32 = 0.3;

/// Sent back with a 200 when the model produces no text.
pub const FALLBACK_REPLY: &str = "I'm sorry, I couldn't generate a response.";

#[derive(Debug, Error)]
pub enum ChatbotError {
    #[error(transparent)]
    Request(#[from] reqwest::Error),

    #[error("{0}")]
    Api(String),
}

pub type ChatbotResult<T> = Result<T, ChatbotError>;

/// One completion call: the user's prompt plus the fixed steering parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationRequest<'a> {
    pub prompt: &'a str,
    pub system_instruction: &'a str,
    pub temperature: f32,
}

/// A text-generation backend.
///
/// Implementations return `Ok(String::new())` when the model answered
/// without any text; only transport or API failures are errors.
#[async_trait]
pub trait ChatClient: Send + Sync {
    async fn generate(&self, request: GenerationRequest<'_>) -> ChatbotResult<String>;
}

#[derive(Debug, Clone, PartialEq)]
pub struct Persona {
    pub system_instruction: String,
    pub temperature: f32,
}

impl Persona {
    pub fn mediguide() -> Self {
        Self {
            system_instruction: MEDIGUIDE_INSTRUCTION.to_string(),
            temperature: MEDIGUIDE_TEMPERATURE,
        }
    }
}

impl Default for Persona {
    fn default() -> Self {
        Self::mediguide()
    }
}

/// Ask the model for a reply to `user_msg`, falling back to a canned
/// apology when it returns nothing.
pub async fn generate_reply(
    client: &dyn ChatClient,
    persona: &Persona,
    user_msg: &str,
) -> ChatbotResult<String> {
    let text = client
        .generate(GenerationRequest {
            prompt: user_msg,
            system_instruction: &persona.system_instruction,
            temperature: persona.temperature,
        })
        .await?;

    if text.is_empty() {
        tracing::warn!("model returned no text, using fallback reply");
        return Ok(FALLBACK_REPLY.to_string());
    }
    Ok(text)
}
