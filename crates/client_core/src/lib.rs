use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use shared::{domain::ActivityCatalog, error::ErrorDetail, protocol::MessageResponse};
use thiserror::Error;
use url::Url;

/// Failures surfaced to callers of [`ActivityApi`].
///
/// `Rejected` means the service answered with a non-success status; its
/// `detail` is the service's own explanation when the body carried one.
/// `Transport` covers everything that kept a response from arriving at all.
#[derive(Debug, Error)]
pub enum ActivityError {
    #[error("transport failure: {0}")]
    Transport(String),
    #[error("service rejected the request (status {status})")]
    Rejected { status: u16, detail: Option<String> },
    #[error("unreadable response body: {0}")]
    Parse(String),
}

impl From<reqwest::Error> for ActivityError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ActivityError::Parse(err.to_string())
        } else {
            ActivityError::Transport(err.to_string())
        }
    }
}

/// The activity service as the board sees it.
#[async_trait]
pub trait ActivityApi: Send + Sync {
    async fn fetch_activities(&self) -> Result<ActivityCatalog, ActivityError>;

    async fn signup(&self, activity: &str, email: &str)
        -> Result<MessageResponse, ActivityError>;

    async fn remove_participant(
        &self,
        activity: &str,
        email: &str,
    ) -> Result<MessageResponse, ActivityError>;
}

/// [`ActivityApi`] over HTTP, against the service's JSON endpoints.
pub struct HttpActivityClient {
    http: Client,
    base_url: Url,
}

impl HttpActivityClient {
    pub fn new(base_url: Url) -> Self {
        Self {
            http: Client::new(),
            base_url,
        }
    }

    /// Builds `{base}/{segments...}?email=...`, percent-encoding activity
    /// names and emails so spaces and `+` survive the round trip.
    fn endpoint(&self, segments: &[&str], email: Option<&str>) -> Result<Url, ActivityError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ActivityError::Transport("base url cannot carry paths".to_string()))?
            .pop_if_empty()
            .extend(segments);
        if let Some(email) = email {
            url.query_pairs_mut().append_pair("email", email);
        }
        Ok(url)
    }

    async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ActivityError> {
        let status = response.status();
        if !status.is_success() {
            let detail = response
                .json::<ErrorDetail>()
                .await
                .ok()
                .map(|body| body.detail);
            return Err(ActivityError::Rejected {
                status: status.as_u16(),
                detail,
            });
        }
        response
            .json::<T>()
            .await
            .map_err(|err| ActivityError::Parse(err.to_string()))
    }
}

#[async_trait]
impl ActivityApi for HttpActivityClient {
    async fn fetch_activities(&self) -> Result<ActivityCatalog, ActivityError> {
        let url = self.endpoint(&["activities"], None)?;
        let response = self.http.get(url).send().await?;
        Self::read_json(response).await
    }

    async fn signup(
        &self,
        activity: &str,
        email: &str,
    ) -> Result<MessageResponse, ActivityError> {
        let url = self.endpoint(&["activities", activity, "signup"], Some(email))?;
        let response = self.http.post(url).send().await?;
        Self::read_json(response).await
    }

    async fn remove_participant(
        &self,
        activity: &str,
        email: &str,
    ) -> Result<MessageResponse, ActivityError> {
        let url = self.endpoint(&["activities", activity, "participants"], Some(email))?;
        let response = self.http.delete(url).send().await?;
        Self::read_json(response).await
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
