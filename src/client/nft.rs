use log::info;
use reqwest::Method;
use serde_json::Value;

use super::NodeClient;
use super::types::NftTransferRequest;
use crate::http::SdkError;
use crate::log::mask_string;

impl NodeClient {
    /// Mints an NFT from a free-form payload.
    ///
    /// The node defines the payload shape (metadata, owner, signing key and so
    /// on); it is forwarded unchanged.
    pub async fn mint_nft(&self, data: Value) -> Result<Value, SdkError> {
        info!(target: "audit", "HTTP: Minting NFT");
        self.http_client.execute(Method::POST, "/nft/mint", Some(data)).await
    }

    /// Token ids are passed through unchecked; the node rejects unknown ones.
    pub async fn get_nft(&self, token_id: u64) -> Result<Value, SdkError> {
        self.get(&format!("/nft/{token_id}")).await
    }

    pub async fn transfer_nft(&self, token_id: u64, from: &str, to: &str, private_key: &str) -> Result<Value, SdkError> {
        info!(
            target: "audit",
            token_id = token_id,
            from = &*mask_string(from),
            to = &*mask_string(to);
            "HTTP: Transferring NFT"
        );
        let body = NftTransferRequest {
            token_id,
            from,
            to,
            private_key,
        };
        self.post("/nft/transfer", &body).await
    }

    pub async fn list_nfts(&self, owner: &str) -> Result<Value, SdkError> {
        self.get(&format!("/nft/list/{owner}")).await
    }
}

#[cfg(test)]
mod tests {
    use crate::client::test_support::{ADDRESS, client_with_mock};
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, ResponseTemplate};

    #[tokio::test]
    async fn mint_forwards_payload_untouched() {
        let (mock_server, client) = client_with_mock().await;
        let payload = json!({"name": "Genesis", "metadata": {"rarity": 9}, "owner": ADDRESS, "privateKey": "pk"});
        Mock::given(method("POST"))
            .and(path("/api/nft/mint"))
            .and(body_json(payload.clone()))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"tokenId": 1})))
            .expect(1)
            .mount(&mock_server)
            .await;

        assert_eq!(client.mint_nft(payload).await.unwrap()["tokenId"], 1);
    }

    #[tokio::test]
    async fn transfer_uses_integer_token_id() {
        let (mock_server, client) = client_with_mock().await;
        Mock::given(method("POST"))
            .and(path("/api/nft/transfer"))
            .and(body_json(json!({"tokenId": 7, "from": ADDRESS, "to": "0xbeef", "privateKey": "pk"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"owner": "0xbeef"})))
            .expect(1)
            .mount(&mock_server)
            .await;

        let result = client.transfer_nft(7, ADDRESS, "0xbeef", "pk").await.unwrap();
        assert_eq!(result["owner"], "0xbeef");
    }

    #[tokio::test]
    async fn nft_lookups_hit_expected_paths() {
        let (mock_server, client) = client_with_mock().await;
        Mock::given(method("GET"))
            .and(path("/api/nft/7"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"tokenId": 7})))
            .expect(1)
            .mount(&mock_server)
            .await;
        Mock::given(method("GET"))
            .and(path(format!("/api/nft/list/{ADDRESS}")))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"tokenId": 7}])))
            .expect(1)
            .mount(&mock_server)
            .await;

        assert_eq!(client.get_nft(7).await.unwrap()["tokenId"], 7);
        assert_eq!(client.list_nfts(ADDRESS).await.unwrap()[0]["tokenId"], 7);
    }
}
