use log::info;
use reqwest::Method;
use serde_json::Value;
use url::form_urlencoded;

use super::NodeClient;
use super::types::VoteRequest;
use crate::http::SdkError;
use crate::log::mask_string;

impl NodeClient {
    /// Submits a proposal. The payload is free-form and forwarded unchanged.
    pub async fn create_proposal(&self, data: Value) -> Result<Value, SdkError> {
        info!(target: "audit", "HTTP: Creating governance proposal");
        self.http_client
            .execute(Method::POST, "/governance/proposal", Some(data))
            .await
    }

    /// Casts a yes (`true`) or no (`false`) vote on a proposal.
    pub async fn vote(&self, proposal_id: u64, vote: bool, voter: &str, private_key: &str) -> Result<Value, SdkError> {
        info!(
            target: "audit",
            proposal_id = proposal_id,
            vote = vote,
            voter = &*mask_string(voter);
            "HTTP: Casting vote"
        );
        let body = VoteRequest {
            proposal_id,
            vote,
            voter,
            private_key,
        };
        self.post("/governance/vote", &body).await
    }

    pub async fn get_proposal(&self, proposal_id: u64) -> Result<Value, SdkError> {
        self.get(&format!("/governance/proposal/{proposal_id}")).await
    }

    /// Lists proposals, optionally only those in `status` (e.g. `active`).
    pub async fn list_proposals(&self, status: Option<&str>) -> Result<Value, SdkError> {
        match status {
            Some(status) => {
                let status: String = form_urlencoded::byte_serialize(status.as_bytes()).collect();
                self.get(&format!("/governance/proposals?status={status}")).await
            },
            None => self.get("/governance/proposals").await,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::client::test_support::{ADDRESS, client_with_mock};
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path, query_param};
    use wiremock::{Mock, ResponseTemplate};

    #[tokio::test]
    async fn vote_sends_boolean() {
        let (mock_server, client) = client_with_mock().await;
        Mock::given(method("POST"))
            .and(path("/api/governance/vote"))
            .and(body_json(json!({"proposalId": 3, "vote": false, "voter": ADDRESS, "privateKey": "pk"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"recorded": true})))
            .expect(1)
            .mount(&mock_server)
            .await;

        assert_eq!(client.vote(3, false, ADDRESS, "pk").await.unwrap()["recorded"], true);
    }

    #[tokio::test]
    async fn create_proposal_forwards_payload() {
        let (mock_server, client) = client_with_mock().await;
        let payload = json!({"title": "Lower fees", "description": "Halve the base fee", "proposer": ADDRESS});
        Mock::given(method("POST"))
            .and(path("/api/governance/proposal"))
            .and(body_json(payload.clone()))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": 11})))
            .expect(1)
            .mount(&mock_server)
            .await;

        assert_eq!(client.create_proposal(payload).await.unwrap()["id"], 11);
    }

    #[tokio::test]
    async fn proposal_queries() {
        let (mock_server, client) = client_with_mock().await;
        Mock::given(method("GET"))
            .and(path("/api/governance/proposal/11"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 11})))
            .expect(1)
            .mount(&mock_server)
            .await;
        Mock::given(method("GET"))
            .and(path("/api/governance/proposals"))
            .and(query_param("status", "voting open"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"id": 12}])))
            .expect(1)
            .mount(&mock_server)
            .await;
        Mock::given(method("GET"))
            .and(path("/api/governance/proposals"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"id": 11}, {"id": 12}])))
            .expect(1)
            .mount(&mock_server)
            .await;

        assert_eq!(client.get_proposal(11).await.unwrap()["id"], 11);
        assert_eq!(client.list_proposals(Some("voting open")).await.unwrap()[0]["id"], 12);
        assert_eq!(client.list_proposals(None).await.unwrap().as_array().map(Vec::len), Some(2));
    }
}
