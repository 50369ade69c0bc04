use std::{collections::HashMap, str::FromStr, time::Duration};

use crate::{errors::TransportError, request_builder::ReqBuilder};
use patchwork_utils::HttpError;
use reqwest::header::{self, HeaderMap, HeaderName, HeaderValue};

#[derive(Debug, Clone)]
pub struct HttpClient {
    base_url: String,
    client: reqwest::Client,
}

impl HttpClient {
    pub fn new(
        base_url: &str,
        headers_opt: Option<HashMap<String, String>>,
        timeout: Option<Duration>,
    ) -> Result<Self, TransportError> {
        let mut headers = HeaderMap::new();

        headers.append(header::ACCEPT, "application/json".parse().unwrap());
        headers.append(header::CONTENT_TYPE, "application/json".parse().unwrap());

        if let Some(opt) = headers_opt {
            for (key, value) in opt {
                let name = HeaderName::from_str(&key)
                    .map_err(|_| TransportError::Utils(HttpError::InvalidHeader.into()))?;
                let value = HeaderValue::from_str(&value)
                    .map_err(|_| TransportError::Utils(HttpError::InvalidHeader.into()))?;
                headers.append(name, value);
            }
        };

        let client = reqwest::ClientBuilder::new()
            .default_headers(headers)
            .timeout(timeout.unwrap_or(Duration::from_secs(15)))
            .build()
            .map_err(|e| TransportError::Utils(patchwork_utils::Error::Http(e.into())))?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_owned(),
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn post(&self, endpoint: &str) -> ReqBuilder {
        let url = format!("{}/{}", self.base_url, endpoint);
        tracing::debug!("request url = {}", url);
        ReqBuilder(self.client.post(url))
    }

    pub fn get(&self, endpoint: &str) -> ReqBuilder {
        let url = format!("{}/{}", self.base_url, endpoint);
        tracing::debug!("request url = {}", url);
        ReqBuilder(self.client.get(url))
    }
}
