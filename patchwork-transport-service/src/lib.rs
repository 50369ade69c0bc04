pub mod api;
pub mod consts;
pub mod error;
pub mod request;
pub mod response_vo;

pub use api::SafeTransactionApi;
pub use error::Error;
pub use request::ProposeTransactionReq;
pub use response_vo::SafeInfo;
