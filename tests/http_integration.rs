// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Integration tests for the HTTP API client using wiremock.

use std::sync::Arc;

use poolsync_lib::control::build_controls;
use poolsync_lib::coordinator::{Coordinator, Credential};
use poolsync_lib::protocol::{ApiClient, HttpClient};
use poolsync_lib::{Error, ProtocolError, WriteError};
use serde_json::json;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ============================================================================
// HttpClient Tests
// ============================================================================

mod http_client {
    use super::*;

    #[tokio::test]
    async fn patch_sends_integer_value() {
        let mock_server = MockServer::start().await;

        Mock::given(method("PATCH"))
            .and(path("/api/device/5/chlorOutput"))
            .and(query_param("password", "secret"))
            .and(body_json(json!({"value": 42})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "devices": {"5": {"config": {"chlorOutput": 42}}}
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = HttpClient::new(mock_server.uri()).unwrap();
        let response = client
            .patch("5", "chlorOutput", 42, &Credential::new("secret"))
            .await
            .unwrap();

        assert!(response.body().contains("chlorOutput"));
    }

    #[tokio::test]
    async fn patch_encodes_password() {
        let mock_server = MockServer::start().await;

        Mock::given(method("PATCH"))
            .and(path("/api/device/7/setpoint"))
            .and(query_param("password", "p@ss word"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = HttpClient::new(mock_server.uri()).unwrap();
        client
            .patch("7", "setpoint", 68, &Credential::new("p@ss word"))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn patch_unauthorized_is_authentication_failed() {
        let mock_server = MockServer::start().await;

        Mock::given(method("PATCH"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&mock_server)
            .await;

        let client = HttpClient::new(mock_server.uri()).unwrap();
        let err = client
            .patch("5", "chlorOutput", 42, &Credential::new("wrong"))
            .await
            .unwrap_err();

        assert!(matches!(err, ProtocolError::AuthenticationFailed));
    }

    #[tokio::test]
    async fn patch_server_error_is_connection_failed() {
        let mock_server = MockServer::start().await;

        Mock::given(method("PATCH"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&mock_server)
            .await;

        let client = HttpClient::new(mock_server.uri()).unwrap();
        let err = client
            .patch("5", "chlorOutput", 42, &Credential::new("secret"))
            .await
            .unwrap_err();

        match err {
            ProtocolError::ConnectionFailed(message) => {
                assert!(message.contains("500"), "unexpected message: {message}");
            }
            other => panic!("expected ConnectionFailed, got {other:?}"),
        }
    }
}

// ============================================================================
// End-to-end control flow
// ============================================================================

mod control_flow {
    use super::*;

    fn coordinator_with_both_devices() -> Arc<Coordinator> {
        let coordinator = Coordinator::new("a4:e5:7c:00:11:22");
        coordinator.replace_state(json!({
            "deviceType": {"5": "chlorSync", "7": "heatPump"},
            "devices": {
                "5": {"config": {"chlorOutput": 42}},
                "7": {"config": {"setpoint": 98.6, "mode": 1}}
            }
        }));
        coordinator
    }

    #[tokio::test]
    async fn setpoint_write_converts_celsius_and_truncates() {
        let mock_server = MockServer::start().await;

        // 23.9 °C is 75.02 °F; the wire value must be the truncated 75.
        Mock::given(method("PATCH"))
            .and(path("/api/device/7/setpoint"))
            .and(query_param("password", "secret"))
            .and(body_json(json!({"value": 75})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
            .expect(1)
            .mount(&mock_server)
            .await;

        let coordinator = coordinator_with_both_devices();
        coordinator.set_credential(Credential::new("secret"));
        let client = Arc::new(HttpClient::new(mock_server.uri()).unwrap());
        let controls = build_controls(&coordinator, &client);

        let setpoint = controls
            .iter()
            .find(|c| c.descriptor().key == "temperature_output_control")
            .unwrap();
        setpoint.write_value(23.9).await.unwrap();

        // The write must leave a refresh request pending.
        coordinator.refresh_requested().await;
    }

    #[tokio::test]
    async fn chlor_write_sends_unconverted_integer() {
        let mock_server = MockServer::start().await;

        Mock::given(method("PATCH"))
            .and(path("/api/device/5/chlorOutput"))
            .and(body_json(json!({"value": 60})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
            .expect(1)
            .mount(&mock_server)
            .await;

        let coordinator = coordinator_with_both_devices();
        coordinator.set_credential(Credential::new("secret"));
        let client = Arc::new(HttpClient::new(mock_server.uri()).unwrap());
        let controls = build_controls(&coordinator, &client);

        let chlor = controls
            .iter()
            .find(|c| c.descriptor().key == "chlor_output_control")
            .unwrap();
        chlor.write_value(60.0).await.unwrap();
    }

    #[tokio::test]
    async fn write_without_credential_never_reaches_api() {
        let mock_server = MockServer::start().await;

        // Zero requests expected; verified when the server drops.
        Mock::given(method("PATCH"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&mock_server)
            .await;

        let coordinator = coordinator_with_both_devices();
        let client = Arc::new(HttpClient::new(mock_server.uri()).unwrap());
        let controls = build_controls(&coordinator, &client);

        let err = controls[0].write_value(60.0).await.unwrap_err();
        assert!(matches!(
            err,
            Error::Write(WriteError::CredentialUnavailable)
        ));
    }

    #[tokio::test]
    async fn api_failure_surfaces_to_caller() {
        let mock_server = MockServer::start().await;

        Mock::given(method("PATCH"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&mock_server)
            .await;

        let coordinator = coordinator_with_both_devices();
        coordinator.set_credential(Credential::new("stale"));
        let client = Arc::new(HttpClient::new(mock_server.uri()).unwrap());
        let controls = build_controls(&coordinator, &client);

        let err = controls[0].write_value(60.0).await.unwrap_err();
        assert!(matches!(
            err,
            Error::Protocol(ProtocolError::AuthenticationFailed)
        ));
    }

    #[tokio::test]
    async fn reads_reflect_replaced_snapshot() {
        let coordinator = coordinator_with_both_devices();
        let client = Arc::new(HttpClient::new("192.0.2.1").unwrap());
        let controls = build_controls(&coordinator, &client);

        assert_eq!(controls[0].read_value(), Some(42.0));

        coordinator.replace_state(json!({
            "deviceType": {"5": "chlorSync", "7": "heatPump"},
            "devices": {"5": {"config": {"chlorOutput": 80}}}
        }));

        assert_eq!(controls[0].read_value(), Some(80.0));
        // Heat pump vanished from the snapshot; its controls degrade to absent.
        assert!(controls[1].read_value().is_none());
    }
}
