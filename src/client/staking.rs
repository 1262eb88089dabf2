use log::info;
use serde_json::Value;

use super::NodeClient;
use super::types::{ClaimRewardsRequest, StakeRequest};
use crate::http::SdkError;
use crate::log::{mask_amount, mask_string};

impl NodeClient {
    /// Locks `amount` of `address`'s balance as stake.
    pub async fn stake(&self, address: &str, amount: f64, private_key: &str) -> Result<Value, SdkError> {
        info!(
            target: "audit",
            address = &*mask_string(address),
            amount = &*mask_amount(amount);
            "HTTP: Staking"
        );
        let body = StakeRequest {
            address,
            amount,
            private_key,
        };
        self.post("/staking/stake", &body).await
    }

    pub async fn unstake(&self, address: &str, amount: f64, private_key: &str) -> Result<Value, SdkError> {
        info!(
            target: "audit",
            address = &*mask_string(address),
            amount = &*mask_amount(amount);
            "HTTP: Unstaking"
        );
        let body = StakeRequest {
            address,
            amount,
            private_key,
        };
        self.post("/staking/unstake", &body).await
    }

    pub async fn get_staking_info(&self, address: &str) -> Result<Value, SdkError> {
        self.get(&format!("/staking/info/{address}")).await
    }

    pub async fn claim_rewards(&self, address: &str, private_key: &str) -> Result<Value, SdkError> {
        info!(target: "audit", address = &*mask_string(address); "HTTP: Claiming staking rewards");
        self.post("/staking/claim", &ClaimRewardsRequest { address, private_key })
            .await
    }
}

#[cfg(test)]
mod tests {
    use crate::client::test_support::{ADDRESS, client_with_mock};
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, ResponseTemplate};

    #[tokio::test]
    async fn stake_and_unstake_share_body_shape() {
        let (mock_server, client) = client_with_mock().await;
        for (p, amount) in [("/api/staking/stake", 100.0), ("/api/staking/unstake", 40.5)] {
            Mock::given(method("POST"))
                .and(path(p))
                .and(body_json(json!({"address": ADDRESS, "amount": amount, "privateKey": "pk"})))
                .respond_with(ResponseTemplate::new(200).set_body_json(json!({"staked": amount})))
                .expect(1)
                .mount(&mock_server)
                .await;
        }

        assert_eq!(client.stake(ADDRESS, 100.0, "pk").await.unwrap()["staked"], 100.0);
        assert_eq!(client.unstake(ADDRESS, 40.5, "pk").await.unwrap()["staked"], 40.5);
    }

    #[tokio::test]
    async fn claim_and_info() {
        let (mock_server, client) = client_with_mock().await;
        Mock::given(method("POST"))
            .and(path("/api/staking/claim"))
            .and(body_json(json!({"address": ADDRESS, "privateKey": "pk"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"claimed": 1.5})))
            .expect(1)
            .mount(&mock_server)
            .await;
        Mock::given(method("GET"))
            .and(path(format!("/api/staking/info/{ADDRESS}")))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"staked": 60})))
            .expect(1)
            .mount(&mock_server)
            .await;

        assert_eq!(client.claim_rewards(ADDRESS, "pk").await.unwrap()["claimed"], 1.5);
        assert_eq!(client.get_staking_info(ADDRESS).await.unwrap()["staked"], 60);
    }

    #[tokio::test]
    async fn non_finite_amount_is_sent_as_null() {
        let (mock_server, client) = client_with_mock().await;
        Mock::given(method("POST"))
            .and(path("/api/staking/stake"))
            .and(body_json(json!({"address": ADDRESS, "amount": null, "privateKey": "pk"})))
            .respond_with(ResponseTemplate::new(400).set_body_json(json!({"error": "invalid amount"})))
            .expect(1)
            .mount(&mock_server)
            .await;

        let err = client.stake(ADDRESS, f64::NAN, "pk").await.unwrap_err();
        assert_eq!(err.to_string(), "API Error (400 Bad Request): invalid amount");
    }
}
