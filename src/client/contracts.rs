use log::info;
use serde_json::Value;

use super::NodeClient;
use super::types::{ContractCallRequest, DeployContractRequest};
use crate::http::SdkError;
use crate::log::mask_string;

/// Page size used for contract listings when the caller has no preference.
pub const DEFAULT_CONTRACT_PAGE: u32 = 50;

impl NodeClient {
    /// Deploys contract source `code` owned by `owner`.
    ///
    /// The private key travels in the body unmodified; the node signs.
    pub async fn deploy_contract(&self, code: &str, owner: &str, private_key: &str) -> Result<Value, SdkError> {
        info!(
            target: "audit",
            owner = &*mask_string(owner),
            code_len = code.len();
            "HTTP: Deploying contract"
        );
        let body = DeployContractRequest {
            code,
            owner,
            private_key,
        };
        self.post("/contracts/deploy", &body).await
    }

    /// Invokes `method` on a deployed contract with positional `params`.
    pub async fn call_contract(
        &self,
        contract_address: &str,
        method: &str,
        params: &[Value],
        caller: &str,
        private_key: &str,
    ) -> Result<Value, SdkError> {
        info!(
            target: "audit",
            contract = &*mask_string(contract_address),
            method = method;
            "HTTP: Calling contract"
        );
        let body = ContractCallRequest {
            contract_address,
            method,
            params,
            caller,
            private_key,
        };
        self.post("/contracts/call", &body).await
    }

    pub async fn get_contract(&self, contract_address: &str) -> Result<Value, SdkError> {
        self.get(&format!("/contracts/{contract_address}")).await
    }

    pub async fn get_contract_state(&self, contract_address: &str) -> Result<Value, SdkError> {
        self.get(&format!("/contracts/{contract_address}/state")).await
    }

    pub async fn list_contracts(&self, limit: u32, offset: u32) -> Result<Value, SdkError> {
        self.get(&format!("/contracts?limit={limit}&offset={offset}")).await
    }
}

#[cfg(test)]
mod tests {
    use crate::client::test_support::{ADDRESS, client_with_mock};
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path, query_param};
    use wiremock::{Mock, ResponseTemplate};

    #[tokio::test]
    async fn deploy_includes_raw_private_key() {
        let (mock_server, client) = client_with_mock().await;
        Mock::given(method("POST"))
            .and(path("/api/contracts/deploy"))
            .and(body_json(json!({"code": "contract Foo {}", "owner": ADDRESS, "privateKey": "pk-raw"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"contractAddress": "0xc0"})))
            .expect(1)
            .mount(&mock_server)
            .await;

        let deployed = client.deploy_contract("contract Foo {}", ADDRESS, "pk-raw").await.unwrap();
        assert_eq!(deployed["contractAddress"], "0xc0");
    }

    #[tokio::test]
    async fn call_sends_params_array() {
        let (mock_server, client) = client_with_mock().await;
        Mock::given(method("POST"))
            .and(path("/api/contracts/call"))
            .and(body_json(json!({
                "contractAddress": "0xc0",
                "method": "transfer",
                "params": ["0xdead", 5, true],
                "caller": ADDRESS,
                "privateKey": "pk",
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"result": "ok"})))
            .expect(1)
            .mount(&mock_server)
            .await;

        let params = [json!("0xdead"), json!(5), json!(true)];
        let result = client
            .call_contract("0xc0", "transfer", &params, ADDRESS, "pk")
            .await
            .unwrap();
        assert_eq!(result["result"], "ok");
    }

    #[tokio::test]
    async fn contract_queries_hit_expected_paths() {
        let (mock_server, client) = client_with_mock().await;
        Mock::given(method("GET"))
            .and(path("/api/contracts/0xc0"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"owner": ADDRESS})))
            .expect(1)
            .mount(&mock_server)
            .await;
        Mock::given(method("GET"))
            .and(path("/api/contracts/0xc0/state"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"counter": 3})))
            .expect(1)
            .mount(&mock_server)
            .await;
        Mock::given(method("GET"))
            .and(path("/api/contracts"))
            .and(query_param("limit", "10"))
            .and(query_param("offset", "0"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .expect(1)
            .mount(&mock_server)
            .await;

        assert_eq!(client.get_contract("0xc0").await.unwrap()["owner"], ADDRESS);
        assert_eq!(client.get_contract_state("0xc0").await.unwrap()["counter"], 3);
        assert_eq!(client.list_contracts(10, 0).await.unwrap(), json!([]));
    }
}
