use std::collections::HashSet;
use std::time::{Duration, Instant};

use shared::domain::ActivityCatalog;

/// How long a status banner stays on the board before it is hidden.
pub const MESSAGE_VISIBLE_FOR: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Success,
    Error,
}

/// A single status banner. Only one exists at a time.
#[derive(Debug, Clone)]
pub struct TransientMessage {
    pub kind: MessageKind,
    pub text: String,
    token: u64,
    expires_at: Instant,
}

/// Holds the banner and hands out a fresh token on every `set`. A scheduled
/// hide must present its token back, so a timer armed for an older banner
/// can never blank a newer one.
#[derive(Debug, Default)]
pub struct MessageSlot {
    current: Option<TransientMessage>,
    next_token: u64,
}

impl MessageSlot {
    pub fn set(&mut self, kind: MessageKind, text: String) -> u64 {
        self.next_token += 1;
        let token = self.next_token;
        self.current = Some(TransientMessage {
            kind,
            text,
            token,
            expires_at: Instant::now() + MESSAGE_VISIBLE_FOR,
        });
        token
    }

    pub fn clear_if(&mut self, token: u64) {
        if self.current.as_ref().is_some_and(|m| m.token == token) {
            self.current = None;
        }
    }

    pub fn visible(&self) -> Option<&TransientMessage> {
        self.visible_at(Instant::now())
    }

    /// Expiry is also checked at read time, in case the scheduled hide has
    /// not fired yet.
    fn visible_at(&self, now: Instant) -> Option<&TransientMessage> {
        self.current.as_ref().filter(|m| m.expires_at > now)
    }
}

/// Everything the board renders from. Handlers mutate this store and the
/// view reads it; nothing else holds display state.
#[derive(Debug, Default)]
pub struct BoardState {
    pub catalog: ActivityCatalog,
    pub catalog_error: Option<String>,
    pub expanded: HashSet<String>,
    pub message: MessageSlot,
    reload_generation: u64,
}

impl BoardState {
    /// Claims the next reload. A fetch still in flight under an earlier
    /// generation loses the right to install its result.
    pub fn begin_reload(&mut self) -> u64 {
        self.reload_generation += 1;
        self.reload_generation
    }

    /// Installs a fetched catalog unless a newer reload has started since.
    /// Installing collapses every participant panel.
    pub fn install_catalog(&mut self, generation: u64, catalog: ActivityCatalog) -> bool {
        if generation != self.reload_generation {
            return false;
        }
        self.catalog = catalog;
        self.catalog_error = None;
        self.expanded.clear();
        true
    }

    /// Records a failed reload. The previous catalog is kept so the signup
    /// form still lists the activities we last knew about.
    pub fn fail_reload(&mut self, generation: u64, fallback: &str) -> bool {
        if generation != self.reload_generation {
            return false;
        }
        self.catalog_error = Some(fallback.to_string());
        true
    }

    pub fn toggle_expanded(&mut self, activity: &str) {
        if !self.expanded.remove(activity) {
            self.expanded.insert(activity.to_string());
        }
    }

    pub fn is_expanded(&self, activity: &str) -> bool {
        self.expanded.contains(activity)
    }
}
