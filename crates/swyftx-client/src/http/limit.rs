/*
[INPUT]:  Bearer token
[OUTPUT]: Withdrawal limit for the account
[POS]:    HTTP layer - limit endpoint (require auth)
[UPDATE]: When limit endpoints change
*/

use crate::http::{Result, SwyftxClient};
use crate::types::WithdrawLimit;

#[derive(Debug, Clone, Copy)]
pub struct LimitService<'a> {
    client: &'a SwyftxClient,
}

impl SwyftxClient {
    pub fn limit(&self) -> LimitService<'_> {
        LimitService { client: self }
    }
}

impl LimitService<'_> {
    /// GET limits/withdrawal/
    pub async fn withdrawal(&self) -> Result<WithdrawLimit> {
        self.client.get("limits/withdrawal/").await
    }
}

#[cfg(test)]
mod tests {
    use crate::http::{ClientConfig, SwyftxClient};
    use crate::types::WithdrawLimit;
    use rust_decimal::Decimal;
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_withdrawal_limit() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/limits/withdrawal/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "used": 1000, "remaining": 49000, "limit": 50000, "rollingCycleHrs": 24
            })))
            .expect(1)
            .mount(&server)
            .await;

        let config = ClientConfig {
            base_url: server.uri(),
            ..ClientConfig::default()
        };
        let client = SwyftxClient::with_config(config, "api-key")
            .unwrap()
            .with_token("token");

        let limit = client.limit().withdrawal().await.unwrap();
        assert_eq!(
            limit,
            WithdrawLimit {
                used: Decimal::from(1000),
                remaining: Decimal::from(49000),
                limit: Decimal::from(50000),
                rolling_cycle_hrs: 24,
            }
        );
    }
}
