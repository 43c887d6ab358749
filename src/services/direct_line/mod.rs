pub mod client;
pub mod error;
pub mod http;
pub mod issuer;
pub mod user_id;

pub use error::DirectLineError;
pub use http::HttpDirectLineClient;
pub use issuer::{IssuedToken, TokenIssuer};
