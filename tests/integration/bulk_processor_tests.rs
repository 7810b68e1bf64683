//! Bulk processor integration tests
//!
//! Runs bulk requests end to end through `HttpTransport` against a wiremock
//! server and checks both what the backend received and what came back.

#[cfg(test)]
mod tests {
    use crate::common::{BulkRequestFactory, SCIM_PATH, ScimTestServer, TEST_TOKEN};
    use gristctl_scim::core::scim::{BULK_REQUEST_SCHEMA, BULK_RESPONSE_SCHEMA, SCIM_CONTENT_TYPE};
    use gristctl_scim::{BulkOperation, BulkProcessor, BulkRequest, HttpTransport, OperationStatus};
    use reqwest::StatusCode;
    use serde_json::json;
    use std::sync::Arc;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, ResponseTemplate};

    /// Create a single user; the response is echoed back with status "201"
    #[tokio::test]
    async fn test_create_user_end_to_end() {
        let backend = ScimTestServer::start().await;
        Mock::given(method("POST"))
            .and(path(format!("{}/Users", SCIM_PATH)))
            .and(header("authorization", format!("Bearer {}", TEST_TOKEN).as_str()))
            .and(header("content-type", SCIM_CONTENT_TYPE))
            .and(body_json(json!({"userName": "testuser"})))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": "user123"})))
            .expect(1)
            .mount(&backend.server)
            .await;

        let request = BulkRequest::new(vec![
            BulkOperation::new("POST", "/Users")
                .with_bulk_id("bulk1")
                .with_data(json!({"userName": "testuser"})),
        ]);
        let outcome = backend.processor().process(request).await;

        assert_eq!(outcome.status, StatusCode::OK);
        assert_eq!(
            serde_json::to_value(&outcome.response).unwrap(),
            json!({
                "schemas": [BULK_RESPONSE_SCHEMA],
                "Operations": [{
                    "method": "POST",
                    "bulkId": "bulk1",
                    "status": "201",
                    "response": {"id": "user123"}
                }]
            })
        );
    }

    /// POST, PATCH and DELETE in one envelope keep their order
    #[tokio::test]
    async fn test_create_update_delete_sequence() {
        let backend = ScimTestServer::start().await;
        Mock::given(method("POST"))
            .and(path(format!("{}/Users", SCIM_PATH)))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": "10"})))
            .expect(1)
            .mount(&backend.server)
            .await;
        Mock::given(method("PATCH"))
            .and(path(format!("{}/Users/11", SCIM_PATH)))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "11"})))
            .expect(1)
            .mount(&backend.server)
            .await;
        Mock::given(method("DELETE"))
            .and(path(format!("{}/Users/12", SCIM_PATH)))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&backend.server)
            .await;

        let request = BulkRequest::new(vec![
            BulkRequestFactory::create_user("alice@example.com"),
            BulkRequestFactory::rename_user("11", "Bob"),
            BulkRequestFactory::delete_user("12"),
        ]);
        let outcome = backend.processor().process(request).await;

        assert!(outcome.is_success());
        let ops = &outcome.response.operations;
        let summary: Vec<(&str, u16)> = ops
            .iter()
            .map(|op| (op.method.as_str(), op.status.as_u16()))
            .collect();
        assert_eq!(summary, vec![("POST", 201), ("PATCH", 200), ("DELETE", 204)]);
        assert_eq!(ops[0].bulk_id.as_deref(), Some("create-alice@example.com"));
        assert_eq!(ops[2].response, None);

        // Requests reached the backend in envelope order
        let received = backend.server.received_requests().await.unwrap();
        let methods: Vec<String> = received.iter().map(|r| r.method.to_string()).collect();
        assert_eq!(methods, vec!["POST", "PATCH", "DELETE"]);
    }

    /// GET inside a bulk envelope never reaches the backend
    #[tokio::test]
    async fn test_get_operation_rejected_locally() {
        let backend = ScimTestServer::start().await;

        let request = BulkRequest::new(vec![BulkOperation::new("GET", "/Users").with_bulk_id("g")]);
        let outcome = backend.processor().process(request).await;

        assert_eq!(outcome.status, StatusCode::OK);
        assert_eq!(outcome.response.operations.len(), 1);
        assert_eq!(outcome.response.operations[0].status, OperationStatus::BAD_REQUEST);
        assert_eq!(backend.request_count().await, 0);
    }

    /// Four failing creates with failOnErrors = 2 stop after two backend calls
    #[tokio::test]
    async fn test_fail_on_errors_stops_dispatch() {
        let backend = ScimTestServer::start().await;
        Mock::given(method("POST"))
            .and(path(format!("{}/Users", SCIM_PATH)))
            .respond_with(ResponseTemplate::new(400).set_body_json(json!({
                "schemas": ["urn:ietf:params:scim:api:messages:2.0:Error"],
                "status": "400",
                "detail": "invalid user"
            })))
            .expect(2)
            .mount(&backend.server)
            .await;

        let request = BulkRequestFactory::create_users(4).with_fail_on_errors(2);
        let outcome = backend.processor().process(request).await;

        assert_eq!(outcome.status, StatusCode::OK);
        let ops = &outcome.response.operations;
        assert_eq!(ops.len(), 2);
        for op in ops {
            assert_eq!(op.status, OperationStatus::BAD_REQUEST);
            assert_eq!(op.response.as_ref().unwrap()["detail"], "invalid user");
        }
    }

    /// Unparseable text is rejected with one synthesized "400" entry
    #[tokio::test]
    async fn test_malformed_text() {
        let backend = ScimTestServer::start().await;

        let outcome = backend.processor().process_text("{invalid json}").await;

        assert_eq!(outcome.status, StatusCode::BAD_REQUEST);
        let value = serde_json::to_value(&outcome.response).unwrap();
        assert_eq!(value["Operations"].as_array().unwrap().len(), 1);
        assert_eq!(value["Operations"][0]["status"], "400");
        assert_eq!(backend.request_count().await, 0);
    }

    /// Wrong schema URN rejects the envelope before any dispatch
    #[tokio::test]
    async fn test_invalid_schema() {
        let backend = ScimTestServer::start().await;

        let text = json!({
            "schemas": ["invalid:schema"],
            "Operations": [{"method": "POST", "path": "/Users", "data": {"userName": "x"}}]
        })
        .to_string();
        let outcome = backend.processor().process_text(&text).await;

        assert_eq!(outcome.status, StatusCode::BAD_REQUEST);
        assert!(outcome.response.operations.is_empty());
        assert_eq!(backend.request_count().await, 0);
    }

    /// Text input with a valid envelope is dispatched like a parsed request
    #[tokio::test]
    async fn test_text_entrypoint_dispatches() {
        let backend = ScimTestServer::start().await;
        Mock::given(method("PUT"))
            .and(path(format!("{}/Users/5", SCIM_PATH)))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": "5",
                "meta": {"location": "http://grist.test/api/scim/v2/Users/5"}
            })))
            .expect(1)
            .mount(&backend.server)
            .await;

        let text = json!({
            "schemas": [BULK_REQUEST_SCHEMA],
            "failOnErrors": 1,
            "Operations": [
                {"method": "PUT", "path": "/Users/5", "bulkId": "r5", "data": {"userName": "five"}}
            ]
        })
        .to_string();
        let outcome = backend.processor().process_text(&text).await;

        let result = &outcome.response.operations[0];
        assert_eq!(result.status.as_u16(), 200);
        assert_eq!(result.bulk_id.as_deref(), Some("r5"));
        assert_eq!(
            result.location.as_deref(),
            Some("http://grist.test/api/scim/v2/Users/5")
        );
    }

    /// Backend failures and successes interleave without reordering
    #[tokio::test]
    async fn test_partial_failure_preserves_order() {
        let backend = ScimTestServer::start().await;
        Mock::given(method("DELETE"))
            .and(path(format!("{}/Users/missing", SCIM_PATH)))
            .respond_with(ResponseTemplate::new(404).set_body_string("not found"))
            .mount(&backend.server)
            .await;
        Mock::given(method("DELETE"))
            .and(path(format!("{}/Users/present", SCIM_PATH)))
            .respond_with(ResponseTemplate::new(204))
            .mount(&backend.server)
            .await;

        let request = BulkRequest::new(vec![
            BulkRequestFactory::delete_user("missing"),
            BulkOperation::new("DELETE", ""),
            BulkRequestFactory::delete_user("present"),
        ]);
        let outcome = backend.processor().process(request).await;

        assert_eq!(outcome.status, StatusCode::OK);
        let statuses: Vec<u16> = outcome
            .response
            .operations
            .iter()
            .map(|op| op.status.as_u16())
            .collect();
        assert_eq!(statuses, vec![404, 400, 204]);
        assert_eq!(
            outcome.response.operations[0].response,
            Some(json!("not found"))
        );
        assert_eq!(outcome.failed_operations(), 2);
        assert_eq!(backend.request_count().await, 2);
    }

    /// An unreachable backend yields "503" entries, not an aborted call
    #[tokio::test]
    async fn test_unreachable_backend() {
        let transport = HttpTransport::new(reqwest::Client::new(), TEST_TOKEN);
        let processor = BulkProcessor::new(Arc::new(transport), "http://127.0.0.1:9/api/scim/v2");

        let request = BulkRequestFactory::create_users(2);
        let outcome = processor.process(request).await;

        assert_eq!(outcome.status, StatusCode::OK);
        let ops = &outcome.response.operations;
        assert_eq!(ops.len(), 2);
        assert!(ops.iter().all(|op| op.status == OperationStatus::SERVICE_UNAVAILABLE));
        assert_eq!(ops[1].bulk_id.as_deref(), Some("create-user1@example.com"));
    }
}
