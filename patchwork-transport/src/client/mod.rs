mod http_client;
pub use http_client::HttpClient;
mod rpc_client;
pub use rpc_client::RpcClient;
