use std::sync::Arc;

use client_core::{ActivityApi, ActivityError};
use tokio::sync::RwLock;
use tracing::{info, warn};

use crate::store::{BoardState, MessageKind, MESSAGE_VISIBLE_FOR};
use crate::view;

pub const CATALOG_FALLBACK: &str = "Failed to load activities. Please try again later.";
pub const SIGNUP_FALLBACK: &str = "Failed to sign up. Please try again.";
pub const REMOVAL_FALLBACK: &str = "Failed to remove participant. Please try again.";
pub const GENERIC_REJECTION: &str = "An error occurred";

/// Owns the board state and talks to the activity service. Handlers call in
/// with explicit activity and email arguments; nothing is read back out of
/// rendered markup.
pub struct Synchronizer {
    api: Arc<dyn ActivityApi>,
    state: RwLock<BoardState>,
}

impl Synchronizer {
    pub fn new(api: Arc<dyn ActivityApi>) -> Arc<Self> {
        Arc::new(Self {
            api,
            state: RwLock::new(BoardState::default()),
        })
    }

    pub async fn render(&self) -> String {
        view::render_board(&*self.state.read().await)
    }

    /// Fetches the catalog and installs it under a reload generation, so a
    /// slow response from an older fetch can never overwrite a newer one.
    pub async fn load_catalog(&self) {
        let generation = self.state.write().await.begin_reload();
        match self.api.fetch_activities().await {
            Ok(catalog) => {
                let mut state = self.state.write().await;
                if state.install_catalog(generation, catalog) {
                    info!(generation, "catalog installed");
                } else {
                    info!(generation, "discarded stale catalog fetch");
                }
            }
            Err(err) => {
                warn!(%err, "catalog fetch failed");
                self.state.write().await.fail_reload(generation, CATALOG_FALLBACK);
            }
        }
    }

    /// On success: show the service's message, then refresh the catalog.
    /// On failure: show what went wrong and leave the board as it was.
    pub async fn submit_signup(self: &Arc<Self>, activity: &str, email: &str) {
        match self.api.signup(activity, email).await {
            Ok(response) => {
                self.publish(MessageKind::Success, response.message).await;
                self.load_catalog().await;
            }
            Err(err) => {
                warn!(%err, activity, "signup failed");
                self.publish(MessageKind::Error, failure_text(err, SIGNUP_FALLBACK))
                    .await;
            }
        }
    }

    pub async fn remove_participant(self: &Arc<Self>, activity: &str, email: &str) {
        match self.api.remove_participant(activity, email).await {
            Ok(response) => {
                self.publish(MessageKind::Success, response.message).await;
                self.load_catalog().await;
            }
            Err(err) => {
                warn!(%err, activity, "participant removal failed");
                self.publish(MessageKind::Error, failure_text(err, REMOVAL_FALLBACK))
                    .await;
            }
        }
    }

    pub async fn toggle_participants(&self, activity: &str) {
        self.state.write().await.toggle_expanded(activity);
    }

    /// Shows a banner and schedules its hide. The hide presents the banner's
    /// token, so it only clears the banner it was armed for.
    async fn publish(self: &Arc<Self>, kind: MessageKind, text: String) {
        let token = self.state.write().await.message.set(kind, text);
        let sync = Arc::clone(self);
        tokio::spawn(async move {
            tokio::time::sleep(MESSAGE_VISIBLE_FOR).await;
            sync.state.write().await.message.clear_if(token);
        });
    }
}

/// What the banner says when a request fails. A rejection with a service
/// detail shows that detail verbatim; a rejection without one shows the
/// generic text; transport and parse failures show the action's fallback.
fn failure_text(err: ActivityError, fallback: &str) -> String {
    match err {
        ActivityError::Rejected {
            detail: Some(detail),
            ..
        } => detail,
        ActivityError::Rejected { detail: None, .. } => GENERIC_REJECTION.to_string(),
        ActivityError::Transport(_) | ActivityError::Parse(_) => fallback.to_string(),
    }
}
