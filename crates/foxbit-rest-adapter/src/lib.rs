/*
[INPUT]:  Crate modules and public type definitions
[OUTPUT]: Public Foxbit REST adapter crate surface
[POS]:    Crate root - module wiring
[UPDATE]: When public modules or exports change
*/

pub mod http;
pub mod types;

// Re-export commonly used types from http
pub use http::{
    ApiResponse,
    ClientConfig,
    Credentials,
    FoxbitClient,
    FoxbitError,
    Result,
    Signature,
    SignedRequest,
    Signer,
    Verb,
};

// Re-export all types
pub use types::*;
