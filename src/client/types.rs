// Request bodies, serialized with the node's camelCase field names. Private
// keys are forwarded verbatim; nothing here signs anything.

use serde::Serialize;
use serde_json::Value;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SendTransactionRequest<'a> {
    pub from_address: &'a str,
    pub to_address: &'a str,
    pub amount: f64,
    pub private_key: &'a str,
}

#[derive(Serialize)]
pub(crate) struct RegisterRequest<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct DeployContractRequest<'a> {
    pub code: &'a str,
    pub owner: &'a str,
    pub private_key: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ContractCallRequest<'a> {
    pub contract_address: &'a str,
    pub method: &'a str,
    pub params: &'a [Value],
    pub caller: &'a str,
    pub private_key: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct StartMiningRequest<'a> {
    pub miner_address: &'a str,
}

/// Shared by stake and unstake.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct StakeRequest<'a> {
    pub address: &'a str,
    pub amount: f64,
    pub private_key: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ClaimRewardsRequest<'a> {
    pub address: &'a str,
    pub private_key: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct NftTransferRequest<'a> {
    pub token_id: u64,
    pub from: &'a str,
    pub to: &'a str,
    pub private_key: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct VoteRequest<'a> {
    pub proposal_id: u64,
    pub vote: bool,
    pub voter: &'a str,
    pub private_key: &'a str,
}
