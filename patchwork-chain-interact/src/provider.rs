use alloy::rpc::types::TransactionRequest;
use patchwork_transport::{client::RpcClient, types::JsonRpcParams};
use serde_json::json;

pub struct Provider {
    client: RpcClient,
}

impl Provider {
    pub fn new(rpc_client: RpcClient) -> crate::Result<Self> {
        Ok(Self { client: rpc_client })
    }

    pub async fn eth_call(&self, tx: TransactionRequest) -> crate::Result<String> {
        let params = JsonRpcParams::default()
            .method("eth_call")
            .params(vec![json!(tx), json!("latest")]);

        let r = self
            .client
            .set_params(params)
            .send_json_rpc::<String>()
            .await?;

        Ok(r)
    }

    pub async fn chain_id(&self) -> crate::Result<u64> {
        let c: Vec<String> = Vec::with_capacity(1);
        let params = JsonRpcParams::default().method("eth_chainId").params(c);

        let rs = self
            .client
            .set_params(params)
            .send_json_rpc::<String>()
            .await?;

        let chain_id = patchwork_utils::unit::u256_from_str(&rs)?;
        Ok(chain_id.to::<u64>())
    }
}
