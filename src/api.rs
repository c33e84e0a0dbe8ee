use crate::models::TimeEntryRequest;
use crate::{CLOCKIFY_API_URL, WORKSPACE_ID};
use reqwest::StatusCode;
use std::{error, fmt};

#[derive(Debug)]
pub enum ApiError {
    Http(reqwest::Error),
    Rejected(StatusCode, String),
}

impl error::Error for ApiError {}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let description = match self {
            ApiError::Http(e) => format!("transport error: {}", e),
            ApiError::Rejected(status, body) => format!("HTTP {}: {}", status, body),
        };
        f.write_str(&description)
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        ApiError::Http(e)
    }
}

/// Blocking client for the time-tracking service, holding the API key.
pub struct ClockifyClient {
    http: reqwest::blocking::Client,
    base_url: String,
    api_key: String,
}

impl ClockifyClient {
    pub fn new(api_key: String) -> Result<Self, ApiError> {
        Self::with_base_url(CLOCKIFY_API_URL, api_key)
    }

    pub fn with_base_url(base_url: &str, api_key: String) -> Result<Self, ApiError> {
        let http = reqwest::blocking::Client::builder().build()?;

        Ok(Self {
            http,
            base_url: base_url.to_owned(),
            api_key,
        })
    }

    fn time_entries_url(&self) -> String {
        format!("{}/workspaces/{}/time-entries", self.base_url, WORKSPACE_ID)
    }

    /// POST one entry. Only 201 counts as created; any other status comes
    /// back with the raw response body.
    pub fn create_time_entry(&self, request: &TimeEntryRequest) -> Result<(), ApiError> {
        let response = self
            .http
            .post(self.time_entries_url())
            .header("X-Api-Key", &self.api_key)
            .header("Content-Type", "application/json")
            .json(request)
            .send()?;

        let status = response.status();
        if status != StatusCode::CREATED {
            let body = response.text()?;
            return Err(ApiError::Rejected(status, body));
        }

        Ok(())
    }
}
