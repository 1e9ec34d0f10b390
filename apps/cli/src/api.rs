//! HTTP client for the coordinator API.

use anyhow::{Context, Result};
use coordinator::presentation::dto::{
    ChallengeResponse, SolutionResponse, StatusResponse, SubmitRequest, SubmitResponse,
    TransactionIdResponse, WinnerResponse,
};
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Client for the coordinator's JSON endpoints.
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .context("failed to build HTTP client")?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    async fn get_json<R: DeserializeOwned>(&self, path: &str) -> Result<R> {
        let url = format!("{}{}", self.base_url, path);

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .with_context(|| format!("failed to reach {url}"))?
            .error_for_status()
            .with_context(|| format!("server fault on {url}"))?;

        response
            .json()
            .await
            .with_context(|| format!("failed to parse response from {url}"))
    }

    /// GET /transaction - the id of the current pending transaction.
    pub async fn current_transaction(&self) -> Result<i64> {
        let response: TransactionIdResponse = self.get_json("/transaction").await?;
        Ok(response.id)
    }

    /// GET /transaction/{id}/challenge - difficulty, -1 for an unknown id.
    pub async fn challenge(&self, txid: i64) -> Result<i32> {
        let response: ChallengeResponse =
            self.get_json(&format!("/transaction/{txid}/challenge")).await?;
        Ok(response.difficulty)
    }

    /// GET /transaction/{id}/status - 0 resolved, 1 pending, -1 unknown.
    pub async fn status(&self, txid: i64) -> Result<i32> {
        let response: StatusResponse =
            self.get_json(&format!("/transaction/{txid}/status")).await?;
        Ok(response.status)
    }

    /// GET /transaction/{id}/winner - client id, 0 none yet, -1 unknown.
    pub async fn winner(&self, txid: i64) -> Result<i64> {
        let response: WinnerResponse =
            self.get_json(&format!("/transaction/{txid}/winner")).await?;
        Ok(response.client_id)
    }

    /// GET /transaction/{id}/solution - status, solution and difficulty.
    pub async fn solution(&self, txid: i64) -> Result<SolutionResponse> {
        self.get_json(&format!("/transaction/{txid}/solution")).await
    }

    /// POST /submit - adjudicate a candidate; returns the outcome code.
    pub async fn submit(&self, request: &SubmitRequest) -> Result<i32> {
        let url = format!("{}/submit", self.base_url);

        let response: SubmitResponse = self
            .http
            .post(&url)
            .json(request)
            .send()
            .await
            .with_context(|| format!("failed to reach {url}"))?
            .error_for_status()
            .with_context(|| format!("server fault on {url}"))?
            .json()
            .await
            .with_context(|| format!("failed to parse response from {url}"))?;

        Ok(response.code)
    }
}
