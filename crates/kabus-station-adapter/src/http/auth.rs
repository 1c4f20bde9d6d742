/*
[INPUT]:  API password
[OUTPUT]: Session token for authenticated endpoints
[POS]:    HTTP layer - token issuance (no X-API-KEY header)
[UPDATE]: When the token endpoint changes
*/

use async_trait::async_trait;

use crate::http::{ClientConfig, Environment, HttpClient, Requester, Result};
use crate::types::{TokenRequest, TokenResponse};

/// Issues session tokens
///
/// POST /token
#[derive(Debug, Clone)]
pub struct TokenRequester {
    client: HttpClient,
}

impl TokenRequester {
    pub const PATH: &'static str = "/token";

    pub fn new(environment: Environment) -> Result<Self> {
        Self::with_config(environment, ClientConfig::default())
    }

    pub fn with_config(environment: Environment, config: ClientConfig) -> Result<Self> {
        let client = HttpClient::for_endpoint(Self::PATH, "", environment, config)?;
        Ok(Self { client })
    }

    pub fn from_client(client: HttpClient) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &HttpClient {
        &self.client
    }
}

#[async_trait]
impl Requester for TokenRequester {
    type Request = TokenRequest;
    type Response = TokenResponse;

    async fn exec(&self, request: TokenRequest) -> Result<TokenResponse> {
        let body = serde_json::to_vec(&request)?;
        self.client.post(body).await?.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::KabusError;
    use rstest::rstest;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[rstest]
    #[case(Environment::Production, "http://localhost:18080/kabusapi/token")]
    #[case(Environment::Verification, "http://localhost:18081/kabusapi/token")]
    fn test_new_token_requester(#[case] environment: Environment, #[case] want: &str) {
        let requester = TokenRequester::new(environment).expect("requester");
        assert_eq!(requester.client().url().as_str(), want);
        assert_eq!(requester.client().token(), None);
    }

    #[tokio::test]
    async fn test_exec_returns_token() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/kabusapi/token"))
            .and(body_json(serde_json::json!({"APIPassword": "password"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "ResultCode": 0,
                "Token": "8d6b5d1d6c7a4bd9a37e6c3c5e3b6d1f"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = HttpClient::new(&format!("{}/kabusapi/token", server.uri()), "")
            .expect("client");
        let response = TokenRequester::from_client(client)
            .exec(TokenRequest {
                api_password: "password".to_string(),
            })
            .await
            .expect("token");

        assert_eq!(
            response,
            TokenResponse {
                result_code: 0,
                token: "8d6b5d1d6c7a4bd9a37e6c3c5e3b6d1f".to_string(),
            }
        );
    }

    #[tokio::test]
    async fn test_exec_wrong_password() {
        let server = MockServer::start().await;
        let body = r#"{"Code": 4001007,"Message": "ログイン認証エラー"}"#;
        Mock::given(method("POST"))
            .and(path("/kabusapi/token"))
            .respond_with(ResponseTemplate::new(401).set_body_string(body))
            .mount(&server)
            .await;

        let client = HttpClient::new(&format!("{}/kabusapi/token", server.uri()), "")
            .expect("client");
        let err = TokenRequester::from_client(client)
            .exec(TokenRequest {
                api_password: "wrong".to_string(),
            })
            .await
            .expect_err("should fail");

        assert!(err.is_auth_error());
        match err {
            KabusError::Api(response) => {
                assert_eq!(response.code, 4001007);
                assert_eq!(response.body, body);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
