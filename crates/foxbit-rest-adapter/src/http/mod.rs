/*
[INPUT]:  HTTP client configuration, credentials and API endpoints
[OUTPUT]: Signed HTTP requests and raw API responses
[POS]:    HTTP layer - REST API communication
[UPDATE]: When adding new endpoints or changing client behavior
*/

pub mod client;
pub mod dispatch;
pub mod error;
pub mod member;
pub mod signature;
pub mod trade;

pub use error::{FoxbitError, Result};
pub use signature::{Signature, Signer};

pub use client::{ClientConfig, Credentials, FoxbitClient};
pub use dispatch::{
    ApiResponse, HEADER_ACCESS_KEY, HEADER_ACCESS_SIGNATURE, HEADER_ACCESS_TIMESTAMP,
    SignedRequest, Verb,
};
