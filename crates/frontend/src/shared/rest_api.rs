//! `ResourceApi` over the browser fetch API (`gloo-net`)

use async_trait::async_trait;
use contracts::shared::list_resource::{
    ApiError, ApiRequest, FetchParams, HttpMethod, ListResource, ResourceApi,
};
use contracts::shared::session::SessionContext;
use gloo_net::http::{Request, RequestBuilder, Response};
use serde_json::Value;
use std::marker::PhantomData;
use std::sync::Arc;

/// REST binding for one entity
pub struct RestResourceApi<R> {
    base_url: String,
    session: Arc<SessionContext>,
    _resource: PhantomData<fn() -> R>,
}

impl<R: ListResource> RestResourceApi<R> {
    pub fn new(base_url: String, session: Arc<SessionContext>) -> Self {
        Self {
            base_url,
            session,
            _resource: PhantomData,
        }
    }

    async fn execute(&self, request: ApiRequest) -> Result<Response, ApiError> {
        let url = request.url(&self.base_url);
        log::debug!("{} {}", request.method.as_str(), url);

        let mut builder: RequestBuilder = match request.method {
            HttpMethod::Get => Request::get(&url),
            HttpMethod::Post => Request::post(&url),
            HttpMethod::Put => Request::put(&url),
        };
        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }
        let prepared = match &request.body {
            Some(body) => builder.json(body),
            None => builder.build(),
        }
        .map_err(|e| ApiError::Request(e.to_string()))?;

        let response = prepared
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if !response.ok() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::http(response.status(), &body));
        }
        Ok(response)
    }

    async fn mutation_body(response: Response) -> Result<Value, ApiError> {
        let text = response
            .text()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))?;
        if text.trim().is_empty() {
            return Ok(Value::Null);
        }
        // Some endpoints answer with plain text ("Saved")
        Ok(serde_json::from_str(&text).unwrap_or(Value::String(text)))
    }
}

#[async_trait(?Send)]
impl<R: ListResource> ResourceApi<R> for RestResourceApi<R> {
    async fn fetch_all(&self, params: &FetchParams) -> Result<Vec<R>, ApiError> {
        let response = self.execute(ApiRequest::list::<R>(params, &self.session)).await?;
        response
            .json::<Vec<R>>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    async fn create(&self, payload: &Value) -> Result<Value, ApiError> {
        let request = ApiRequest::create::<R>(payload.clone(), &self.session);
        let response = self.execute(request).await?;
        Self::mutation_body(response).await
    }

    async fn update(&self, key: &str, payload: &Value) -> Result<Value, ApiError> {
        let request =
            ApiRequest::update::<R>(key, payload.clone(), &self.session).map_err(ApiError::Request)?;
        let response = self.execute(request).await?;
        Self::mutation_body(response).await
    }
}
