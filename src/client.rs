use std::future::Future;

use reqwest::{Client, Response};
use serde::{de::DeserializeOwned, Serialize};
use tracing::debug;

use crate::error::{BuilderError, Result};
use crate::types::Project;

const PROJECTS_PATH: &str = "projects";

/// Backend operations the project store is driven by.
pub trait ProjectApi {
    fn list_projects(&self) -> impl Future<Output = Result<Vec<Project>>>;

    fn create_project(&self, project: &Project) -> impl Future<Output = Result<Project>>;
}

pub struct ApiClient {
    http: Client,
    api_url: String,
}

impl ApiClient {
    pub fn new(api_url: String) -> Self {
        Self {
            http: Client::new(),
            api_url,
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.api_url, path)
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = self.endpoint(path);
        debug!(%url, "GET");

        let response = self.http.get(&url).send().await?;
        decode(response).await
    }

    pub async fn post<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let url = self.endpoint(path);
        debug!(%url, "POST");

        let response = self.http.post(&url).json(body).send().await?;
        decode(response).await
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T> {
    let status = response.status();
    debug!(status = status.as_u16(), "response");

    if !status.is_success() {
        return Err(BuilderError::ApiError {
            status: status.as_u16(),
            message: response
                .text()
                .await
                .unwrap_or_else(|_| "<failed to read response body>".to_string()),
        });
    }

    Ok(response.json().await?)
}

impl ProjectApi for ApiClient {
    async fn list_projects(&self) -> Result<Vec<Project>> {
        self.get(PROJECTS_PATH).await
    }

    async fn create_project(&self, project: &Project) -> Result<Project> {
        self.post(PROJECTS_PATH, project).await
    }
}
