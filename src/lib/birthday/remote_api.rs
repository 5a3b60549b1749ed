use log::{debug, warn};
use reqwest::Client;
use serde::Deserialize;
use serde_json::{json, Value};

use super::error::{BitrixError, BitrixResult};

/// A trait, necessary for every entity that talks to the portal's REST API.
#[allow(async_fn_in_trait)]
pub trait RemoteApi {
    /// Calls a list method and collects every page of its result.
    async fn list(&self, method: &str, params: Value) -> BitrixResult<Vec<Value>>;

    /// Calls a method once and returns its `result`.
    async fn call(&self, method: &str, params: Value) -> BitrixResult<Value>;
}

#[derive(Deserialize, Debug)]
struct BitrixResponse {
    #[serde(default)]
    result: Option<Value>,
    #[serde(default)]
    next: Option<u64>,
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    error_description: Option<String>,
}

/// Client of an incoming webhook, e.g. `https://portal.bitrix24.ru/rest/1/token/`.
pub struct BitrixClient {
    http_client: Client,
    webhook: String,
}

impl BitrixClient {
    pub fn new(http_client: Client, webhook: impl Into<String>) -> Self {
        let mut webhook = webhook.into();
        if !webhook.ends_with('/') {
            webhook.push('/');
        }
        BitrixClient {
            http_client,
            webhook,
        }
    }

    async fn request(&self, method: &str, params: &Value) -> BitrixResult<BitrixResponse> {
        debug!("Calling {} with {}", method, params);
        let request_url = format!("{}{}.json", self.webhook, method);
        let response: BitrixResponse = self
            .http_client
            .post(request_url)
            .json(params)
            .send()
            .await?
            .json()
            .await?;

        if let Some(error) = response.error {
            return Err(BitrixError::Api {
                error,
                description: response.error_description.unwrap_or_default(),
            });
        }
        Ok(response)
    }
}

impl RemoteApi for BitrixClient {
    async fn list(&self, method: &str, params: Value) -> BitrixResult<Vec<Value>> {
        let mut items = Vec::new();
        let mut start = 0;
        loop {
            let mut page_params = params.clone();
            if let Some(page_params) = page_params.as_object_mut() {
                page_params.insert("start".to_owned(), json!(start));
            }

            let response = self.request(method, &page_params).await?;
            match response.result {
                Some(Value::Array(page)) => items.extend(page),
                None | Some(Value::Null) => {}
                Some(_) => return Err(BitrixError::UnexpectedResult(method.to_owned())),
            }

            match response.next {
                Some(next) if next > start => start = next,
                Some(next) => {
                    warn!("{} answered next={} for start={}, stopping", method, next, start);
                    break;
                }
                None => break,
            }
        }
        debug!("{} returned {} items", method, items.len());
        Ok(items)
    }

    async fn call(&self, method: &str, params: Value) -> BitrixResult<Value> {
        Ok(self
            .request(method, &params)
            .await?
            .result
            .unwrap_or(Value::Null))
    }
}
