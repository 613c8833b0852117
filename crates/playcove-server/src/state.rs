//! Dependency wiring for the HTTP surface.

use std::sync::Arc;

use anyhow::Context;

use playcove_application::{ChatGateway, ProfileUseCase};
use playcove_core::config::AppConfig;
use playcove_core::friendship::FriendshipService;
use playcove_core::game::GameService;
use playcove_core::identity::{IdentityVerifier, VerifiedIdentity};
use playcove_core::review::ReviewService;
use playcove_core::user::UserService;
use playcove_infrastructure::{
    HttpIdentityVerifier, InMemoryFriendshipRepository, InMemoryGameRepository,
    InMemoryReviewRepository, InMemoryUserRepository, StaticIdentityVerifier,
};
use playcove_interaction::tools::{RandomGameTool, RecommendationTool, ReviewLookupTool};
use playcove_interaction::{AgentTool, ChatModel, OfflineChatModel, OpenAiChatAgent};

/// Shared application state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<UserService>,
    pub games: Arc<GameService>,
    pub reviews: Arc<ReviewService>,
    pub friendships: Arc<FriendshipService>,
    pub profiles: Arc<ProfileUseCase>,
    pub chat: Arc<ChatGateway>,
    pub identity: Arc<dyn IdentityVerifier>,
}

impl AppState {
    /// Wires the in-memory stores, services, assistant tools, and the
    /// identity collaborator.
    pub fn build(config: &AppConfig) -> anyhow::Result<Self> {
        let user_repo = Arc::new(InMemoryUserRepository::new());
        let game_repo = Arc::new(InMemoryGameRepository::new());
        let review_repo = Arc::new(InMemoryReviewRepository::new());
        let friendship_repo = Arc::new(InMemoryFriendshipRepository::new());

        let users = Arc::new(UserService::new(user_repo.clone()));
        let games = Arc::new(GameService::new(game_repo.clone()));
        let reviews = Arc::new(ReviewService::new(
            review_repo.clone(),
            user_repo.clone(),
            game_repo.clone(),
        ));
        let friendships = Arc::new(FriendshipService::new(
            friendship_repo.clone(),
            user_repo.clone(),
        ));
        let profiles = Arc::new(ProfileUseCase::new(users.clone(), friendships.clone()));

        let tools: Vec<Arc<dyn AgentTool>> = vec![
            Arc::new(ReviewLookupTool::new(
                game_repo.clone(),
                review_repo.clone(),
                user_repo.clone(),
            )),
            Arc::new(RecommendationTool::new(game_repo.clone())),
            Arc::new(RandomGameTool::new(game_repo)),
        ];

        let model: Arc<dyn ChatModel> = match OpenAiChatAgent::try_from_env() {
            Ok(agent) => Arc::new(agent),
            Err(err) => {
                tracing::warn!(%err, "Chat model not configured; assistant runs offline");
                Arc::new(OfflineChatModel)
            }
        };
        let chat = Arc::new(ChatGateway::new(model, tools).context("building chat gateway")?);

        let identity: Arc<dyn IdentityVerifier> = match &config.identity.token_info_url {
            Some(url) => Arc::new(HttpIdentityVerifier::new(url.clone())),
            None => {
                tracing::warn!("No identity provider configured; using development tokens");
                Arc::new(development_verifier())
            }
        };

        Ok(Self {
            users,
            games,
            reviews,
            friendships,
            profiles,
            chat,
            identity,
        })
    }
}

/// Fixed tokens for local development, matching the sample-data subjects.
fn development_verifier() -> StaticIdentityVerifier {
    StaticIdentityVerifier::new()
        .with_token(
            "dev-ada",
            VerifiedIdentity {
                subject: "seed-sub-ada".to_string(),
                email: Some("ada@example.com".to_string()),
                display_name: Some("Ada".to_string()),
                email_verified: true,
            },
        )
        .with_token(
            "dev-noel",
            VerifiedIdentity {
                subject: "seed-sub-noel".to_string(),
                email: Some("noel@example.com".to_string()),
                display_name: Some("Noel".to_string()),
                email_verified: true,
            },
        )
}
