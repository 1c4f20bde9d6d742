/*
[INPUT]:  Typed request values
[OUTPUT]: Typed responses or KabusError
[POS]:    HTTP layer - common contract shared by every endpoint requester
[UPDATE]: When changing how requesters are constructed or executed
*/

use async_trait::async_trait;

use crate::http::Result;

/// A client bound to one API endpoint
#[async_trait]
pub trait Requester {
    type Request: Send + 'static;
    type Response: Send;

    /// Send one request and parse the answer
    async fn exec(&self, request: Self::Request) -> Result<Self::Response>;
}

/// Declares a requester struct bound to an authenticated endpoint path
macro_rules! endpoint_requester {
    ($(#[$meta:meta])* $name:ident, $path:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        pub struct $name {
            client: $crate::http::HttpClient,
        }

        impl $name {
            pub const PATH: &'static str = $path;

            pub fn new(
                token: impl Into<String>,
                environment: $crate::http::Environment,
            ) -> $crate::http::Result<Self> {
                Self::with_config(token, environment, $crate::http::ClientConfig::default())
            }

            pub fn with_config(
                token: impl Into<String>,
                environment: $crate::http::Environment,
                config: $crate::http::ClientConfig,
            ) -> $crate::http::Result<Self> {
                let client =
                    $crate::http::HttpClient::for_endpoint(Self::PATH, token, environment, config)?;
                Ok(Self { client })
            }

            /// Bind the requester to an already configured transport
            pub fn from_client(client: $crate::http::HttpClient) -> Self {
                Self { client }
            }

            pub fn client(&self) -> &$crate::http::HttpClient {
                &self.client
            }
        }
    };
}

pub(crate) use endpoint_requester;
