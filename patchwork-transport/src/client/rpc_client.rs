use crate::{errors::TransportError, request_builder::ReqBuilder};
use patchwork_utils::HttpError;
use reqwest::header::{self, HeaderMap, HeaderName, HeaderValue};
use serde::Serialize;
use std::{collections::HashMap, fmt::Debug, str::FromStr};

#[derive(Debug, Clone)]
pub struct RpcClient {
    base_url: String,
    client: reqwest::Client,
}

impl RpcClient {
    pub fn new(
        base_url: &str,
        header_opt: Option<HashMap<String, String>>,
    ) -> Result<Self, TransportError> {
        let mut headers = HeaderMap::new();

        headers.append(header::ACCEPT, "application/json".parse().unwrap());
        headers.append(header::CONTENT_TYPE, "application/json".parse().unwrap());

        if let Some(opt) = header_opt {
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
            .timeout(std::time::Duration::from_secs(15))
            .build()
            .map_err(|e| TransportError::Utils(patchwork_utils::Error::Http(e.into())))?;

        Ok(Self {
            base_url: base_url.to_owned(),
            client,
        })
    }

    pub fn set_params<T: Serialize + Debug>(&self, p: T) -> ReqBuilder {
        tracing::debug!("[rpc request] = {:?}", p);
        ReqBuilder(self.client.post(&self.base_url).json(&p))
    }
}
