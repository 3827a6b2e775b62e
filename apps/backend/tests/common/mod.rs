#![allow(dead_code)]

use actix_web::body::BoxBody;
use actix_web::dev::ServiceResponse;
use actix_web::test;
use serde_json::Value;

// Logging is auto-installed for every test binary that includes `common`
#[ctor::ctor]
fn init_logging() {
    backend_test_support::logging::init();
}

// Each test owns a private in-memory database, so successful units of work
// commit unless `TRIO_TXN_POLICY=rollback` flips the whole binary.
#[ctor::ctor]
fn init_txn_policy() {
    let policy = match std::env::var("TRIO_TXN_POLICY")
        .unwrap_or_default()
        .to_lowercase()
        .as_str()
    {
        "rollback" => backend::db::txn_policy::TxnPolicy::RollbackOnOk,
        _ => backend::db::txn_policy::TxnPolicy::CommitOnOk,
    };

    backend::db::txn_policy::set_txn_policy(policy);
}

/// Read a successful response body as JSON, asserting the expected status.
pub async fn json_body(resp: ServiceResponse<BoxBody>, expected_status: u16) -> Value {
    let status = resp.status().as_u16();
    let body = test::read_body(resp).await;
    let json: Value = serde_json::from_slice(&body).unwrap_or_else(|_| {
        panic!(
            "body should be JSON (status {status}): {}",
            String::from_utf8_lossy(&body)
        )
    });
    assert_eq!(status, expected_status, "unexpected status, body: {json}");
    json
}

/// Ids of the `questions` array in a trivia response.
pub fn question_ids(json: &Value) -> Vec<i64> {
    json["questions"]
        .as_array()
        .expect("questions should be an array")
        .iter()
        .map(|q| q["id"].as_i64().expect("question id"))
        .collect()
}
