/*
[INPUT]:  Signed client
[OUTPUT]: Raw member (account) information
[POS]:    HTTP layer - member endpoints (require signature headers)
[UPDATE]: When adding new member endpoints
*/

use crate::http::{ApiResponse, FoxbitClient, Result, SignedRequest};

pub const ME_PATH: &str = "/rest/v3/me";

impl FoxbitClient {
    /// Current member information
    ///
    /// GET /rest/v3/me
    pub async fn me(&self) -> Result<ApiResponse> {
        self.execute(SignedRequest::get(ME_PATH)).await
    }
}
