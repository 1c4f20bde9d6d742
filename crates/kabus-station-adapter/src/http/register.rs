/*
[INPUT]:  Symbol lists
[OUTPUT]: Current push-notification registration list
[POS]:    HTTP layer - registration endpoints (require X-API-KEY)
[UPDATE]: When registration endpoints change
*/

use async_trait::async_trait;

use crate::http::requester::endpoint_requester;
use crate::http::{Requester, Result};
use crate::types::{RegisterRequest, RegisterResponse, UnregisterRequest};

endpoint_requester!(
    /// Adds symbols to the push-notification list
    ///
    /// PUT /register
    RegisterRequester,
    "/register"
);

endpoint_requester!(
    /// Removes symbols from the push-notification list
    ///
    /// PUT /unregister
    UnregisterRequester,
    "/unregister"
);

endpoint_requester!(
    /// Clears the push-notification list
    ///
    /// PUT /unregister/all
    UnregisterAllRequester,
    "/unregister/all"
);

#[async_trait]
impl Requester for RegisterRequester {
    type Request = RegisterRequest;
    type Response = RegisterResponse;

    async fn exec(&self, request: RegisterRequest) -> Result<RegisterResponse> {
        let body = serde_json::to_vec(&request)?;
        self.client.put(Some(body)).await?.parse()
    }
}

#[async_trait]
impl Requester for UnregisterRequester {
    type Request = UnregisterRequest;
    type Response = RegisterResponse;

    async fn exec(&self, request: UnregisterRequest) -> Result<RegisterResponse> {
        let body = serde_json::to_vec(&request)?;
        self.client.put(Some(body)).await?.parse()
    }
}

#[async_trait]
impl Requester for UnregisterAllRequester {
    type Request = ();
    type Response = RegisterResponse;

    async fn exec(&self, _request: ()) -> Result<RegisterResponse> {
        self.client.put(None).await?.parse()
    }
}
