use alloy::primitives::Address;
use patchwork_transport::client::HttpClient;

use crate::request::ProposeTransactionReq;
use crate::response_vo::SafeInfo;

#[derive(Debug, Clone)]
pub struct SafeTransactionApi {
    pub base_url: String,
    client: HttpClient,
}

impl SafeTransactionApi {
    pub fn new(base_url: &str) -> Result<Self, crate::Error> {
        let client = HttpClient::new(base_url, None, None).map_err(crate::Error::Transport)?;
        Ok(Self {
            base_url: base_url.to_string(),
            client,
        })
    }

    pub async fn safe_info(&self, safe: Address) -> Result<SafeInfo, crate::Error> {
        self.client
            .get(&format!("api/v1/safes/{safe}/"))
            .send::<SafeInfo>()
            .await
            .map_err(crate::Error::classify)
    }

    /// Submit the full proposal tuple. A successful POST has an empty
    /// body; rejections are classified from the response.
    pub async fn propose_transaction(
        &self,
        safe: Address,
        req: &ProposeTransactionReq,
    ) -> Result<(), crate::Error> {
        tracing::debug!(safe = %safe, nonce = %req.nonce, "proposing safe transaction");

        self.client
            .post(&format!("api/v1/safes/{safe}/multisig-transactions/"))
            .json(req)
            .send_string()
            .await
            .map(drop)
            .map_err(crate::Error::classify)
    }
}
