//! Behavior-driven tests for error classification.
//!
//! The kind chosen for a failure must depend only on the status code or
//! transport condition, never on which operation was running.

use roster_tests::*;

fn expected_kind(status: u16) -> StudentErrorKind {
    match status {
        400 => StudentErrorKind::InvalidRequest,
        401 => StudentErrorKind::Unauthorized,
        404 => StudentErrorKind::NotFound,
        500 => StudentErrorKind::ServerError,
        other => StudentErrorKind::UnexpectedStatus(other),
    }
}

#[tokio::test]
async fn every_operation_maps_each_status_to_the_same_kind() {
    for status in [400_u16, 401, 403, 404, 405, 409, 422, 429, 500, 502, 503] {
        // Given: A service that answers every request with `status`
        let server = FakeStudentServer::with_students(&[("Ana", 20)]);
        server.fail_with(Fault::Status(status));
        let client = client_for(&server);

        for operation in Operation::ALL {
            // When: The operation runs
            let error = invoke(&client, operation)
                .await
                .expect_err("injected status must fail");

            // Then: The kind follows the status table and keeps the code
            assert_eq!(error.kind(), expected_kind(status), "{operation} / {status}");
            assert_eq!(error.status(), Some(status), "{operation} / {status}");
            assert_eq!(error.operation(), operation);
            assert!(!error.message().is_empty());
        }
    }
}

#[tokio::test]
async fn when_network_is_down_every_operation_reports_connection_error() {
    // Given: A service that cannot be reached
    let server = FakeStudentServer::with_students(&[("Ana", 20)]);
    server.fail_with(Fault::Transport(HttpErrorKind::Connect));
    let client = client_for(&server);

    for operation in Operation::ALL {
        // When: The operation runs
        let error = invoke(&client, operation).await.expect_err("must fail");

        // Then: ConnectionError with no status attached
        assert_eq!(error.kind(), StudentErrorKind::ConnectionError, "{operation}");
        assert_eq!(error.status(), None);
    }
}

#[tokio::test]
async fn when_deadline_expires_every_operation_reports_timeout() {
    let server = FakeStudentServer::with_students(&[("Ana", 20)]);
    server.fail_with(Fault::Transport(HttpErrorKind::Timeout));
    let client = client_for(&server);

    for operation in Operation::ALL {
        let error = invoke(&client, operation).await.expect_err("must fail");
        assert_eq!(error.kind(), StudentErrorKind::Timeout, "{operation}");
    }
}

#[tokio::test]
async fn when_success_body_is_json_null_every_reading_operation_reports_empty_response() {
    // Given: A service that answers 200 with a literal `null`
    let server = FakeStudentServer::with_students(&[("Ana", 20)]);
    server.fail_with(Fault::Reply(200, String::from("null")));
    let client = client_for(&server);

    for operation in Operation::ALL {
        // When: The operation runs
        let outcome = invoke(&client, operation).await;

        // Then: Operations that need a record see EmptyResponse; delete needs none
        if operation == Operation::Delete {
            assert!(outcome.is_ok(), "{operation}");
            continue;
        }
        let error = outcome.expect_err("null body must fail");
        assert_eq!(error.kind(), StudentErrorKind::EmptyResponse, "{operation}");
        assert_eq!(error.status(), Some(200), "{operation}");
    }
}

#[tokio::test]
async fn when_response_body_is_cut_off_user_gets_connection_error() {
    let server = FakeStudentServer::with_students(&[("Ana", 20)]);
    server.fail_with(Fault::Transport(HttpErrorKind::Body));
    let client = client_for(&server);

    let error = client.list_students().await.expect_err("must fail");

    assert_eq!(error.kind(), StudentErrorKind::ConnectionError);
}

#[tokio::test]
async fn when_service_recovers_calls_succeed_again() {
    // Given: A service that was failing with 500
    let server = FakeStudentServer::with_students(&[("Ana", 20)]);
    server.fail_with(Fault::Status(500));
    let client = client_for(&server);
    let error = client.list_students().await.expect_err("must fail");
    assert_eq!(error.kind(), StudentErrorKind::ServerError);

    // When: It recovers and the caller asks again
    server.heal();
    let students = client.list_students().await.expect("should succeed");

    // Then: No retry happened on the first call; the second call succeeds
    assert_eq!(students.len(), 1);
    assert_eq!(server.requests().len(), 2);
}

#[tokio::test]
async fn unexpected_status_message_includes_the_code() {
    let server = FakeStudentServer::new();
    server.fail_with(Fault::Status(418));
    let client = client_for(&server);

    let error = client.list_students().await.expect_err("must fail");

    assert_eq!(error.kind(), StudentErrorKind::UnexpectedStatus(418));
    assert!(error.message().contains("418"));
    assert_eq!(error.code(), "student.unexpected_status");
}
