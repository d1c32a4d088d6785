//! Campaign builds through `DelegatedHasher` against an in-process hashing service.

#![allow(
    clippy::indexing_slicing,
    clippy::arithmetic_side_effects,
    clippy::as_conversions,
    reason = "Test code should panic on invalid data"
)]

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse as _, Response};
use axum::routing::post;
use axum::{Json, Router};
use hushdrop_core::base::{
    Amount, FieldElement, Recipient, Secret, SecretGenerator, SecretMask, WalletId,
};
use hushdrop_hash::{
    DelegatedHasher, DelegatedHasherConfig, HashProvider as _, HashServiceError, LocalHasher,
};
use hushdrop_tree::{BuildOptions, CAPACITY, TreeError, build_campaign_tree};
use rand::SeedableRng as _;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;

const RECIPIENTS: usize = 4;

#[derive(Deserialize)]
struct HashRequest {
    inputs: Vec<String>,
}

#[derive(Serialize)]
struct HashResponse {
    hash: String,
}

/// Answers with the local hash until `fail_from` requests were served, then with 500.
#[derive(Clone)]
struct ServiceState {
    fail_from: usize,
    calls: Arc<AtomicUsize>,
}

async fn hash_poseidon(
    State(state): State<ServiceState>,
    Json(request): Json<HashRequest>,
) -> Response {
    if state.calls.fetch_add(1, Ordering::SeqCst) >= state.fail_from {
        return (StatusCode::INTERNAL_SERVER_ERROR, "hash backend unavailable").into_response();
    }

    let inputs: Vec<FieldElement> = request
        .inputs
        .iter()
        .map(|input| FieldElement::from_loose_hex(input).expect("client sends hex"))
        .collect();
    let hasher = LocalHasher::new();
    let hash = match inputs.as_slice() {
        [left, right] => hasher.hash2(*left, *right).await,
        [first, second, third] => hasher.hash3(*first, *second, *third).await,
        _ => return StatusCode::BAD_REQUEST.into_response(),
    }
    .expect("local hash never fails");

    Json(HashResponse {
        hash: hash.to_hex(),
    })
    .into_response()
}

async fn spawn_service(fail_from: usize) -> (DelegatedHasher, Arc<AtomicUsize>) {
    let calls = Arc::new(AtomicUsize::new(0));
    let app = Router::new()
        .route("/api/hash/poseidon", post(hash_poseidon))
        .with_state(ServiceState {
            fail_from,
            calls: Arc::clone(&calls),
        });

    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind hashing service");
    let address = listener.local_addr().expect("local address");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("serve hashing service");
    });

    let config = DelegatedHasherConfig {
        request_timeout: Duration::from_secs(5),
        ..DelegatedHasherConfig::for_endpoint(format!("http://{address}/api/hash/poseidon"))
    }
    .validate()
    .expect("valid config");
    (DelegatedHasher::new(config), calls)
}

fn recipients() -> Vec<Recipient> {
    (0..RECIPIENTS)
        .map(|i| {
            Recipient::with_secret(
                WalletId::parse(&format!("wallet{i}")).expect("valid label"),
                Amount::from_base_units(10 + i as u64),
                Secret::from_bytes([i as u8 + 1; 32]),
            )
        })
        .collect()
}

fn options() -> BuildOptions {
    BuildOptions { max_concurrency: 8 }
}

fn secrets() -> SecretGenerator<StdRng> {
    SecretGenerator::new(StdRng::seed_from_u64(3), SecretMask::FieldCompatible)
}

#[tokio::test(flavor = "multi_thread")]
async fn delegated_build_matches_local_build() {
    let (hasher, calls) = spawn_service(usize::MAX).await;

    let delegated = build_campaign_tree(recipients(), &hasher, &mut secrets(), options())
        .await
        .expect("service answers every hash");
    let local = build_campaign_tree(recipients(), &LocalHasher::new(), &mut secrets(), options())
        .await
        .expect("local hash never fails");

    assert_eq!(delegated.tree.root(), local.tree.root());
    assert_eq!(delegated.tree.leaves(), local.tree.leaves());
    // One hash per leaf plus one per inner node
    assert_eq!(calls.load(Ordering::SeqCst), RECIPIENTS + CAPACITY - 1);
}

#[tokio::test(flavor = "multi_thread")]
async fn failure_inside_a_level_aborts_the_build() {
    // Leaves succeed, then the service dies 40 hashes into the first inner level
    let fail_from = RECIPIENTS + 40;
    let (hasher, calls) = spawn_service(fail_from).await;

    let result = build_campaign_tree(recipients(), &hasher, &mut secrets(), options()).await;

    assert!(
        matches!(
            result,
            Err(TreeError::HashService(HashServiceError::Status(500)))
        ),
        "unexpected result {result:?}"
    );
    let served = calls.load(Ordering::SeqCst);
    assert!(served > fail_from);
    assert!(served < RECIPIENTS + CAPACITY / 2);
}
