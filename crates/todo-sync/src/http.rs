//! HTTP Collection Resource
//!
//! `TodoResource` over the REST endpoints of the to-do server:
//! `GET/POST {base}/todos` and `PUT/DELETE {base}/todos/{id}`.

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{Operation, SyncError, SyncResult};
use crate::model::{Todo, TodoId};
use crate::resource::TodoResource;

const COLLECTION_PATH: &str = "/todos";

#[derive(Serialize)]
struct TextBody<'a> {
    text: &'a str,
}

/// REST client for the `/todos` collection
#[derive(Debug, Clone)]
pub struct HttpTodoResource {
    client: Client,
    base_url: String,
}

impl HttpTodoResource {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn collection_url(&self) -> String {
        format!("{}{}", self.base_url, COLLECTION_PATH)
    }

    pub fn entry_url(&self, id: TodoId) -> String {
        format!("{}{}/{}", self.base_url, COLLECTION_PATH, id)
    }

    async fn send(
        &self,
        operation: Operation,
        request: reqwest::RequestBuilder,
    ) -> SyncResult<reqwest::Response> {
        let response = request
            .send()
            .await
            .map_err(|e| SyncError::transport(operation, e))?;

        let status = response.status();
        if !status.is_success() {
            log::warn!("{} answered with status {}", operation, status);
            return Err(SyncError::status(operation, status.as_u16()));
        }
        Ok(response)
    }

    async fn read_json<T: DeserializeOwned>(
        operation: Operation,
        response: reqwest::Response,
    ) -> SyncResult<T> {
        let body = response
            .text()
            .await
            .map_err(|e| SyncError::transport(operation, e))?;
        decode(operation, &body)
    }
}

fn decode<T: DeserializeOwned>(operation: Operation, body: &str) -> SyncResult<T> {
    serde_json::from_str(body).map_err(|e| SyncError::malformed(operation, e))
}

#[async_trait(?Send)]
impl TodoResource for HttpTodoResource {
    async fn fetch_all(&self) -> SyncResult<Vec<Todo>> {
        let request = self.client.get(self.collection_url());
        let response = self.send(Operation::FetchAll, request).await?;
        // An empty collection is serialized as `null` by the server.
        Self::read_json::<Option<Vec<Todo>>>(Operation::FetchAll, response)
            .await
            .map(Option::unwrap_or_default)
    }

    async fn create(&self, text: &str) -> SyncResult<Todo> {
        let request = self.client.post(self.collection_url()).json(&TextBody { text });
        let response = self.send(Operation::Create, request).await?;
        Self::read_json(Operation::Create, response).await
    }

    async fn update(&self, id: TodoId, text: &str) -> SyncResult<Todo> {
        let request = self.client.put(self.entry_url(id)).json(&TextBody { text });
        let response = self.send(Operation::Update, request).await?;
        Self::read_json(Operation::Update, response).await
    }

    async fn delete(&self, id: TodoId) -> SyncResult<()> {
        let request = self.client.delete(self.entry_url(id));
        self.send(Operation::Delete, request).await?;
        Ok(())
    }
}
