use crate::{types::RpcResult, TransportError};
use reqwest::RequestBuilder;
use serde::{de::DeserializeOwned, Serialize};
use std::fmt::Debug;

pub struct ReqBuilder(pub RequestBuilder);

impl ReqBuilder {
    pub fn json(mut self, v: impl Serialize + Debug) -> Self {
        if let Ok(body) = patchwork_utils::serde_func::serde_to_string(&v) {
            tracing::debug!("request params: {}", body);
        }
        self.0 = self.0.json(&v);
        self
    }

    pub fn query(mut self, v: impl Serialize + Debug) -> Self {
        tracing::debug!("request params: {:?}", v);
        self.0 = self.0.query(&v);
        self
    }

    async fn send_checked(self) -> Result<String, TransportError> {
        let res = self
            .0
            .send()
            .await
            .map_err(|e| TransportError::Utils(patchwork_utils::Error::Http(e.into())))?;

        let status = res.status();
        let body = res
            .text()
            .await
            .map_err(|e| TransportError::Utils(patchwork_utils::Error::Http(e.into())))?;

        if !status.is_success() {
            return Err(TransportError::NonSuccessStatus {
                status: status.as_u16(),
                body,
            });
        }
        tracing::debug!("response = {}", body);
        Ok(body)
    }

    pub async fn send<T: DeserializeOwned>(self) -> Result<T, TransportError> {
        let response = self.send_checked().await?;
        Ok(patchwork_utils::serde_func::serde_from_str(&response)?)
    }

    /// Like [`send`](Self::send) but keeps the raw body; use for endpoints
    /// that reply with an empty or non-JSON payload.
    pub async fn send_string(self) -> Result<String, TransportError> {
        self.send_checked().await
    }

    pub async fn send_json_rpc<T: DeserializeOwned>(self) -> Result<T, TransportError> {
        let response_str = self.send_checked().await?;

        let rpc_result =
            patchwork_utils::serde_func::serde_from_str::<RpcResult<T>>(&response_str)?;
        if let Some(err) = rpc_result.error {
            return Err(TransportError::NodeResponseError(err.message));
        }

        match rpc_result.result {
            Some(res) => Ok(res),
            None => Err(TransportError::EmptyResult),
        }
    }
}
