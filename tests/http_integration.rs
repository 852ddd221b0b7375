// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Integration tests for the HTTP device client using wiremock.

use std::sync::Arc;
use std::time::Duration;

use doorlock_lib::client::{HttpClient, LockDevice};
use doorlock_lib::error::TransportError;
use doorlock_lib::poll::PollScheduler;
use doorlock_lib::state::ViewStore;
use doorlock_lib::surface::ToggleControl;
use doorlock_lib::types::LockState;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const PAYLOAD: &str = "iVBORw0KGgoAAAANSUhEUg==";

async fn mount_image(server: &MockServer, payload: &str) {
    Mock::given(method("GET"))
        .and(path("/image"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "image": payload
        })))
        .mount(server)
        .await;
}

fn client_for(server: &MockServer) -> HttpClient {
    HttpClient::new(server.uri()).unwrap()
}

// ============================================================================
// Device Client Tests
// ============================================================================

mod device_client {
    use super::*;

    #[tokio::test]
    async fn fetch_image_returns_payload() {
        let mock_server = MockServer::start().await;
        mount_image(&mock_server, PAYLOAD).await;

        let client = client_for(&mock_server);
        let image = client.fetch_image().await.unwrap();

        assert_eq!(image.as_base64(), PAYLOAD);
    }

    #[tokio::test]
    async fn fetch_image_rejects_missing_field() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/image"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "picture": PAYLOAD
            })))
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);
        let result = client.fetch_image().await;

        assert!(matches!(result.unwrap_err(), TransportError::Decode(_)));
    }

    #[tokio::test]
    async fn fetch_image_rejects_server_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/image"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);
        let result = client.fetch_image().await;

        assert!(matches!(
            result.unwrap_err(),
            TransportError::Status { code: 500, .. }
        ));
    }

    #[tokio::test]
    async fn fetch_lock_state_parses_bare_body() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/lock-state"))
            .respond_with(ResponseTemplate::new(200).set_body_string("unlock"))
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);
        let state = client.fetch_lock_state().await.unwrap();

        assert_eq!(state, LockState::Unlocked);
    }

    #[tokio::test]
    async fn fetch_lock_state_tolerates_surrounding_whitespace() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/lock-state"))
            .respond_with(ResponseTemplate::new(200).set_body_string("lock\n"))
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);
        let state = client.fetch_lock_state().await.unwrap();

        assert_eq!(state, LockState::Locked);
    }

    #[tokio::test]
    async fn fetch_lock_state_rejects_unknown_token() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/lock-state"))
            .respond_with(ResponseTemplate::new(200).set_body_string("ajar"))
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);
        let result = client.fetch_lock_state().await;

        assert!(matches!(result.unwrap_err(), TransportError::Body(token) if token == "ajar"));
    }

    #[tokio::test]
    async fn set_lock_state_posts_wire_token() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/toggle-lock"))
            .and(body_json(serde_json::json!({"state": "unlock"})))
            .respond_with(ResponseTemplate::new(200))
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);
        client.set_lock_state(LockState::Unlocked).await.unwrap();
    }

    #[tokio::test]
    async fn set_lock_state_rejects_server_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/toggle-lock"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);
        let result = client.set_lock_state(LockState::Unlocked).await;

        assert!(matches!(
            result.unwrap_err(),
            TransportError::Status { code: 503, .. }
        ));
    }

    #[tokio::test]
    async fn handles_connection_refused() {
        // Use a port that's definitely not listening
        let client = HttpClient::new("127.0.0.1:59999").unwrap();
        let result = client.fetch_lock_state().await;

        assert!(matches!(result.unwrap_err(), TransportError::Http(_)));
    }
}

// ============================================================================
// View Store over HTTP Tests
// ============================================================================

mod view_store {
    use super::*;

    #[tokio::test]
    async fn refresh_image_caches_payload() {
        let mock_server = MockServer::start().await;
        mount_image(&mock_server, PAYLOAD).await;

        let store = ViewStore::new(client_for(&mock_server));
        store.refresh_image().await;

        let state = store.state();
        assert_eq!(state.image().unwrap().as_base64(), PAYLOAD);
        assert!(!state.loading());
    }

    #[tokio::test]
    async fn failed_refresh_keeps_cached_payload() {
        let mock_server = MockServer::start().await;

        // One successful fetch, then the device starts failing.
        Mock::given(method("GET"))
            .and(path("/image"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "image": PAYLOAD
            })))
            .up_to_n_times(1)
            .mount(&mock_server)
            .await;
        Mock::given(method("GET"))
            .and(path("/image"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&mock_server)
            .await;

        let store = ViewStore::new(client_for(&mock_server));

        store.refresh_image().await;
        assert_eq!(store.state().image().unwrap().as_base64(), PAYLOAD);

        store.refresh_image().await;

        let state = store.state();
        assert_eq!(state.image().unwrap().as_base64(), PAYLOAD);
        assert!(!state.loading());
    }

    #[tokio::test]
    async fn toggle_lock_round_trip() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/toggle-lock"))
            .and(body_json(serde_json::json!({"state": "unlock"})))
            .respond_with(ResponseTemplate::new(200))
            .mount(&mock_server)
            .await;

        let store = ViewStore::new(client_for(&mock_server));
        assert_eq!(store.state().lock_state(), LockState::Locked);

        store.toggle_lock().await;

        assert_eq!(store.state().lock_state(), LockState::Unlocked);
        assert_eq!(
            ToggleControl::for_state(store.state().lock_state()).label(),
            "Unlocked (tap to lock)"
        );
    }

    #[tokio::test]
    async fn toggle_lock_failure_leaves_state() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/toggle-lock"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&mock_server)
            .await;

        let store = ViewStore::new(client_for(&mock_server));
        store.toggle_lock().await;

        assert_eq!(store.state().lock_state(), LockState::Locked);
    }
}

// ============================================================================
// Poll Scheduler over HTTP Tests
// ============================================================================

mod poll_scheduler {
    use super::*;

    async fn request_count(server: &MockServer, endpoint: &str) -> usize {
        server
            .received_requests()
            .await
            .unwrap_or_default()
            .iter()
            .filter(|request| request.url.path() == endpoint)
            .count()
    }

    async fn mount_lock_state(server: &MockServer) {
        Mock::given(method("GET"))
            .and(path("/lock-state"))
            .respond_with(ResponseTemplate::new(200).set_body_string("lock"))
            .mount(server)
            .await;
    }

    #[tokio::test]
    async fn first_cycle_fires_before_first_period() {
        let mock_server = MockServer::start().await;
        mount_image(&mock_server, PAYLOAD).await;
        mount_lock_state(&mock_server).await;

        let store = Arc::new(ViewStore::new(client_for(&mock_server)));
        let scheduler = PollScheduler::start_with_period(Arc::clone(&store), Duration::from_secs(60));

        tokio::time::sleep(Duration::from_millis(150)).await;
        scheduler.stop();

        assert_eq!(request_count(&mock_server, "/image").await, 1);
        assert_eq!(request_count(&mock_server, "/lock-state").await, 1);
        assert_eq!(store.state().image().unwrap().as_base64(), PAYLOAD);
    }

    #[tokio::test]
    async fn teardown_stops_scheduled_requests() {
        let mock_server = MockServer::start().await;
        mount_image(&mock_server, PAYLOAD).await;
        mount_lock_state(&mock_server).await;

        let store = Arc::new(ViewStore::new(client_for(&mock_server)));
        let scheduler = PollScheduler::start_with_period(Arc::clone(&store), Duration::from_millis(60));

        tokio::time::sleep(Duration::from_millis(200)).await;
        scheduler.stop();

        // Let anything in flight settle, then take the baseline.
        tokio::time::sleep(Duration::from_millis(100)).await;
        let images = request_count(&mock_server, "/image").await;
        let locks = request_count(&mock_server, "/lock-state").await;
        assert!(images >= 2, "expected at least two poll cycles, saw {images}");

        tokio::time::sleep(Duration::from_millis(250)).await;
        assert_eq!(request_count(&mock_server, "/image").await, images);
        assert_eq!(request_count(&mock_server, "/lock-state").await, locks);
    }
}
