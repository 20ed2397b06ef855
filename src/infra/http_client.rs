//! HTTP client for the employee REST API

use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder, Response, Url};
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::EmployeeApi;
use crate::config::{Config, EMPLOYEES_RESOURCE, SEARCH_BY_NAME_SEGMENT};
use crate::domain::{Employee, EmployeeRequest};
use crate::errors::{AppError, AppResult};

/// reqwest-backed implementation of [`EmployeeApi`]
#[derive(Debug, Clone)]
pub struct HttpEmployeeClient {
    client: Client,
    base_url: Url,
}

impl HttpEmployeeClient {
    /// Create a client for the API rooted at `base_url`
    pub fn new(base_url: &str) -> AppResult<Self> {
        let base_url = Url::parse(base_url)
            .map_err(|e| AppError::invalid_input(format!("Invalid API URL {}: {}", base_url, e)))?;
        if base_url.cannot_be_a_base() {
            return Err(AppError::invalid_input(format!(
                "API URL cannot be used as a base: {}",
                base_url
            )));
        }

        let client = Client::builder()
            .build()
            .map_err(|e| AppError::internal(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { client, base_url })
    }

    pub fn from_config(config: &Config) -> AppResult<Self> {
        Self::new(&config.api_base_url)
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// URL of the employee resource with extra path segments appended.
    /// Segments are percent-encoded.
    fn endpoint(&self, segments: &[&str]) -> AppResult<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| AppError::internal("API URL cannot be used as a base"))?
            .pop_if_empty()
            .push(EMPLOYEES_RESOURCE)
            .extend(segments);
        Ok(url)
    }

    fn request(&self, method: Method, url: Url) -> RequestBuilder {
        tracing::debug!(%method, %url, "Sending request");
        self.client.request(method, url)
    }

    async fn fetch<T: DeserializeOwned>(&self, builder: RequestBuilder) -> AppResult<T> {
        let response = Self::check(builder.send().await?).await?;
        response.json().await.map_err(Into::into)
    }

    /// Turn a non-success response into [`AppError::Api`], keeping its body
    async fn check(response: Response) -> AppResult<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let text = response.text().await.unwrap_or_default();
        let payload = if text.trim().is_empty() {
            None
        } else {
            Some(serde_json::from_str::<Value>(&text).unwrap_or(Value::String(text)))
        };

        tracing::debug!(%status, "Request failed");
        Err(AppError::api(status, payload))
    }
}

#[async_trait]
impl EmployeeApi for HttpEmployeeClient {
    async fn list(&self) -> AppResult<Vec<Employee>> {
        let url = self.endpoint(&[])?;
        self.fetch(self.request(Method::GET, url)).await
    }

    async fn get(&self, id: i64) -> AppResult<Employee> {
        let url = self.endpoint(&[&id.to_string()])?;
        self.fetch(self.request(Method::GET, url)).await
    }

    async fn create(&self, request: EmployeeRequest) -> AppResult<Employee> {
        let url = self.endpoint(&[])?;
        self.fetch(self.request(Method::POST, url).json(&request)).await
    }

    async fn update(&self, id: i64, request: EmployeeRequest) -> AppResult<Employee> {
        let url = self.endpoint(&[&id.to_string()])?;
        self.fetch(self.request(Method::PUT, url).json(&request)).await
    }

    async fn delete(&self, id: i64) -> AppResult<()> {
        let url = self.endpoint(&[&id.to_string()])?;
        Self::check(self.request(Method::DELETE, url).send().await?).await?;
        Ok(())
    }

    async fn search_by_name(&self, name: String) -> AppResult<Vec<Employee>> {
        let url = self.endpoint(&[SEARCH_BY_NAME_SEGMENT, &name])?;
        self.fetch(self.request(Method::GET, url)).await
    }
}
