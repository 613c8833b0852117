pub mod chat_model;
pub mod envelope;
pub mod fallback;
pub mod openai_agent;
pub mod prompt;
pub mod title_match;
pub mod tools;

pub use crate::chat_model::{
    ChatModel, ChatModelError, ChatRequest, ChatRole, ChatTurn, ModelReply, OfflineChatModel,
    ToolSpec,
};
pub use crate::envelope::{ChatEnvelope, GameCard, QuizState, RecommendationCard, ReviewCard, ToolReply};
pub use crate::openai_agent::OpenAiChatAgent;
pub use crate::tools::AgentTool;
