//! End-to-end lifecycle flows against the scripted mock service:
//! build → sign → prove → poll job → confirm inclusion.

use serde_json::json;
use zktokens::api::types::{AirdropParams, AirdropRecipient, DeployTokenParams, SignerPayload};
use zktokens::{ClientConfig, Error, Network, SignError, Signer, TokenClient, TransactionHash};

mod common;
use common::{fault, ok, start_mock_service, test_client, MockService};

struct TestSigner;

impl Signer for TestSigner {
    fn sign(&self, payload: &SignerPayload) -> Result<String, SignError> {
        Ok(format!("{{\"signature\":\"sig-{}\"}}", payload.nonce))
    }
}

fn deploy_params() -> DeployTokenParams {
    DeployTokenParams {
        admin_address: "B62qmoZq".into(),
        symbol: "TEST".into(),
        decimals: 9,
        uri: "https://example.com/token.json".into(),
        memo: None,
        whitelist: None,
    }
}

fn airdrop_params(count: usize) -> AirdropParams {
    AirdropParams {
        sender: "B62qmoZq".into(),
        token_address: "B62qn25cKc4".into(),
        recipients: (0..count)
            .map(|i| AirdropRecipient {
                address: format!("B62qRecipient{i}"),
                amount: 10_000_000_000,
            })
            .collect(),
    }
}

#[tokio::test]
async fn deploy_runs_the_full_lifecycle() {
    let service = MockService::new();
    service.script_job([
        ok(json!({ "jobStatus": "pending" })),
        ok(json!({ "jobStatus": "used", "hash": "5Ju1" })),
    ]);
    service.script_tx([
        ok(json!({ "status": "pending" })),
        ok(json!({
            "status": "applied",
            "details": { "blockHeight": 361_801, "txStatus": "applied" }
        })),
    ]);
    let base = start_mock_service(service.clone()).await;
    let client = test_client(&base, 10);

    let built = client.build_deploy(&deploy_params()).await.unwrap();
    let receipt = client.execute(built, &TestSigner).await.unwrap();

    assert_eq!(receipt.hash, TransactionHash::from("5Ju1"));
    assert_eq!(receipt.details.unwrap().block_height, 361_801);

    // The prove submission carried the external signature.
    let bodies = service.prove_bodies.lock().unwrap();
    assert_eq!(bodies.len(), 1);
    assert_eq!(bodies[0]["signedData"], "{\"signature\":\"sig-1\"}");
}

#[tokio::test]
async fn airdrop_batch_confirms_every_hash_in_input_order() {
    let service = MockService::new();
    service.script_job([ok(json!({
        "jobStatus": "used",
        "hashes": ["h1", "h2", "h3"]
    }))]);
    service.script_tx([
        ok(json!({ "status": "applied" })),
        ok(json!({ "status": "applied" })),
        ok(json!({ "status": "applied" })),
    ]);
    let base = start_mock_service(service.clone()).await;
    let client = test_client(&base, 10);

    let built = client.build_airdrop(&airdrop_params(3)).await.unwrap();
    assert_eq!(built.len(), 3);

    let receipts = client.execute_batch(built, &TestSigner).await.unwrap();

    let hashes: Vec<&str> = receipts.iter().map(|r| r.hash.as_str()).collect();
    assert_eq!(hashes, ["h1", "h2", "h3"]);
    assert_eq!(service.tx_poll_count(), 3);

    // One prove call carrying the whole ordered batch.
    let bodies = service.prove_bodies.lock().unwrap();
    assert_eq!(bodies.len(), 1);
    assert_eq!(bodies[0]["txs"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn batch_halt_carries_the_confirmed_prefix() {
    let service = MockService::new();
    service.script_job([ok(json!({
        "jobStatus": "used",
        "hashes": ["h1", "h2", "h3"]
    }))]);
    service.script_tx([
        ok(json!({ "status": "applied" })),
        ok(json!({ "status": "failed", "error": "insufficient balance" })),
    ]);
    let base = start_mock_service(service.clone()).await;
    let client = test_client(&base, 10);

    let built = client.build_airdrop(&airdrop_params(3)).await.unwrap();
    let err = client.execute_batch(built, &TestSigner).await.unwrap_err();

    match err {
        Error::BatchHalted {
            confirmed,
            total,
            source,
        } => {
            assert_eq!(total, 3);
            assert_eq!(confirmed.len(), 1);
            assert_eq!(confirmed[0].hash, TransactionHash::from("h1"));
            match *source {
                Error::TransactionFailed { hash, ref reason } => {
                    assert_eq!(hash, TransactionHash::from("h2"));
                    assert_eq!(reason, "insufficient balance");
                }
                ref other => panic!("expected TransactionFailed, got {other}"),
            }
        }
        other => panic!("expected BatchHalted, got {other}"),
    }

    // h3 was never watched: h1 applied, h2 failed, then the batch halted.
    assert_eq!(service.tx_poll_count(), 2);
}

#[tokio::test]
async fn hash_count_mismatch_is_a_hard_error() {
    let service = MockService::new();
    service.script_job([ok(json!({
        "jobStatus": "used",
        "hashes": ["h1", "h2"]
    }))]);
    let base = start_mock_service(service.clone()).await;
    let client = test_client(&base, 10);

    let built = client.build_airdrop(&airdrop_params(3)).await.unwrap();
    let err = client.execute_batch(built, &TestSigner).await.unwrap_err();

    assert!(matches!(
        err,
        Error::HashCountMismatch {
            expected: 3,
            got: 2,
            ..
        }
    ));
}

#[tokio::test]
async fn job_failure_surfaces_through_execute() {
    let service = MockService::new();
    service.script_job([ok(json!({
        "jobStatus": "failed",
        "error": "proof generation failed"
    }))]);
    let base = start_mock_service(service.clone()).await;
    let client = test_client(&base, 10);

    let built = client.build_deploy(&deploy_params()).await.unwrap();
    let err = client.execute(built, &TestSigner).await.unwrap_err();

    assert!(matches!(err, Error::JobFailed { ref reason, .. } if reason == "proof generation failed"));
}

#[tokio::test]
async fn job_exhaustion_surfaces_distinctly() {
    let service = MockService::new();
    service.script_job([fault(503)]);
    let base = start_mock_service(service.clone()).await;
    let client = test_client(&base, 3);

    let built = client.build_deploy(&deploy_params()).await.unwrap();
    let err = client.execute(built, &TestSigner).await.unwrap_err();

    assert!(matches!(err, Error::JobUnresolved { errors: 3, .. }));
}

#[tokio::test]
async fn lookups_round_trip() {
    let service = MockService::new();
    let base = start_mock_service(service).await;
    let client = test_client(&base, 10);

    let info = client.token_info("B62qn25cKc4").await.unwrap();
    assert_eq!(info.token_symbol, "TEST");
    assert_eq!(info.token_address, "B62qn25cKc4");

    let balance = client
        .balance(&zktokens::api::types::BalanceRequest {
            token_address: Some("B62qn25cKc4".into()),
            address: "B62qmoZq".into(),
        })
        .await
        .unwrap();
    assert_eq!(balance.balance, Some(940_000_000_000));
}

#[tokio::test]
async fn mainnet_is_rejected_at_construction() {
    let err = TokenClient::new(ClientConfig::new("k-123", Network::Mainnet)).unwrap_err();
    assert!(err.to_string().contains("mainnet is not supported yet"));
}

#[tokio::test]
async fn empty_batch_is_a_no_op() {
    let service = MockService::new();
    let base = start_mock_service(service.clone()).await;
    let client = test_client(&base, 10);

    let receipts = client.execute_batch(Vec::new(), &TestSigner).await.unwrap();
    assert!(receipts.is_empty());
    assert!(service.prove_bodies.lock().unwrap().is_empty());
}
