use carryover_notes::{Note, NoteCreateInput, NoteUpdateInput};
use carryover_tasks::{Task, TaskCreateInput, TaskUpdateInput, TaskView};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::debug;

use crate::error::{ClientError, ClientResult};

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ErrorDetail {
    message: String,
}

/// Thin typed wrapper over the Carryover HTTP API
#[derive(Debug, Clone)]
pub struct ApiClient {
    http_client: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> ClientResult<Self> {
        let http_client = Client::builder()
            .build()
            .map_err(|e| ClientError::Network(e.to_string()))?;

        Ok(Self {
            http_client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, resource: &str) -> String {
        format!("{}/{}", self.base_url, resource)
    }

    pub async fn list_tasks(&self, view: TaskView) -> ClientResult<Vec<Task>> {
        debug!("GET /tasks?view={}", view.as_str());
        let response = self
            .http_client
            .get(self.url("tasks"))
            .query(&[("view", view.as_str())])
            .send()
            .await?;
        read_json(response).await
    }

    pub async fn create_task(&self, input: &TaskCreateInput) -> ClientResult<Task> {
        debug!("POST /tasks");
        let response = self
            .http_client
            .post(self.url("tasks"))
            .json(input)
            .send()
            .await?;
        read_json(response).await
    }

    pub async fn update_task(&self, id: &str, input: &TaskUpdateInput) -> ClientResult<Task> {
        debug!("PATCH /tasks?id={}", id);
        let response = self
            .http_client
            .patch(self.url("tasks"))
            .query(&[("id", id)])
            .json(input)
            .send()
            .await?;
        read_json(response).await
    }

    pub async fn delete_task(&self, id: &str) -> ClientResult<()> {
        debug!("DELETE /tasks?id={}", id);
        let response = self
            .http_client
            .delete(self.url("tasks"))
            .query(&[("id", id)])
            .send()
            .await?;
        check_status(response).await.map(|_| ())
    }

    pub async fn list_notes(&self) -> ClientResult<Vec<Note>> {
        debug!("GET /notes");
        let response = self.http_client.get(self.url("notes")).send().await?;
        read_json(response).await
    }

    pub async fn create_note(&self, input: &NoteCreateInput) -> ClientResult<Note> {
        debug!("POST /notes");
        let response = self
            .http_client
            .post(self.url("notes"))
            .json(input)
            .send()
            .await?;
        read_json(response).await
    }

    pub async fn update_note(&self, id: &str, input: &NoteUpdateInput) -> ClientResult<Note> {
        debug!("PATCH /notes?id={}", id);
        let response = self
            .http_client
            .patch(self.url("notes"))
            .query(&[("id", id)])
            .json(input)
            .send()
            .await?;
        read_json(response).await
    }

    pub async fn delete_note(&self, id: &str) -> ClientResult<()> {
        debug!("DELETE /notes?id={}", id);
        let response = self
            .http_client
            .delete(self.url("notes"))
            .query(&[("id", id)])
            .send()
            .await?;
        check_status(response).await.map(|_| ())
    }
}

/// Turn a non-success status into `ClientError::Api`, using the server's
/// message when the body carries one.
async fn check_status(response: Response) -> ClientResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let text = match response.text().await {
        Ok(text) => text,
        Err(e) => {
            debug!("Failed to read error body for {} response: {}", status, e);
            String::new()
        }
    };
    let message = serde_json::from_str::<ErrorBody>(&text)
        .map(|body| body.error.message)
        .unwrap_or_else(|_| {
            status
                .canonical_reason()
                .unwrap_or("Request failed")
                .to_string()
        });
    Err(ClientError::api(status, message))
}

async fn read_json<T: DeserializeOwned>(response: Response) -> ClientResult<T> {
    let response = check_status(response).await?;
    response
        .json::<T>()
        .await
        .map_err(|e| ClientError::InvalidResponse(e.to_string()))
}
