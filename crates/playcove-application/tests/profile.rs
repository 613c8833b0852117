//! Profile view gating against the in-memory stores.

use std::sync::Arc;

use playcove_application::ProfileUseCase;
use playcove_core::friendship::FriendshipService;
use playcove_core::user::{GamertagVisibility, NewUser, UserService};
use playcove_infrastructure::{InMemoryFriendshipRepository, InMemoryUserRepository};

struct Fixture {
    users: Arc<UserService>,
    friendships: Arc<FriendshipService>,
    profiles: ProfileUseCase,
}

fn fixture() -> Fixture {
    let user_repo = Arc::new(InMemoryUserRepository::new());
    let friendship_repo = Arc::new(InMemoryFriendshipRepository::new());
    let users = Arc::new(UserService::new(user_repo.clone()));
    let friendships = Arc::new(FriendshipService::new(friendship_repo, user_repo));
    let profiles = ProfileUseCase::new(users.clone(), friendships.clone());
    Fixture {
        users,
        friendships,
        profiles,
    }
}

async fn make_user(fx: &Fixture, username: &str, visibility: GamertagVisibility) -> String {
    let user = fx
        .users
        .create_user(NewUser {
            subject_id: format!("sub-{username}"),
            username: username.to_string(),
            email: None,
            bio: None,
            avatar_url: None,
        })
        .await
        .unwrap();
    fx.users
        .add_gamertag(&user.id, "steam", &format!("{username}_tag"))
        .await
        .unwrap();
    fx.users
        .update_gamertags_visibility(&user.id, visibility)
        .await
        .unwrap();
    user.id
}

#[tokio::test]
async fn owners_see_their_own_gamertags_regardless_of_visibility() {
    let fx = fixture();
    let owner = make_user(&fx, "owner", GamertagVisibility::Friends).await;

    let view = fx.profiles.view_profile(&owner, Some(&owner)).await.unwrap();
    let gamertags = view.gamertags.expect("owner should see gamertags");
    assert_eq!(gamertags.get("steam").map(String::as_str), Some("owner_tag"));
}

#[tokio::test]
async fn friends_only_gamertags_are_hidden_until_accepted() {
    let fx = fixture();
    let owner = make_user(&fx, "owner", GamertagVisibility::Friends).await;
    let viewer = make_user(&fx, "viewer", GamertagVisibility::Public).await;

    let view = fx.profiles.view_profile(&owner, Some(&viewer)).await.unwrap();
    assert!(view.gamertags.is_none());
    // The rest of the profile is still visible.
    assert_eq!(view.username, "owner");

    let request = fx
        .friendships
        .send_friend_request(&viewer, &owner)
        .await
        .unwrap();
    fx.friendships
        .accept_friend_request(&request.id, &owner)
        .await
        .unwrap();

    let view = fx.profiles.view_profile(&owner, Some(&viewer)).await.unwrap();
    assert!(view.gamertags.is_some());
}

#[tokio::test]
async fn anonymous_viewers_only_see_public_gamertags() {
    let fx = fixture();
    let public_owner = make_user(&fx, "pub", GamertagVisibility::Public).await;
    let private_owner = make_user(&fx, "priv", GamertagVisibility::Friends).await;

    let view = fx.profiles.view_profile(&public_owner, None).await.unwrap();
    assert!(view.gamertags.is_some());

    let view = fx.profiles.view_profile(&private_owner, None).await.unwrap();
    assert!(view.gamertags.is_none());
}
