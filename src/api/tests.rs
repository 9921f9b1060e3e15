#![cfg(not(coverage))]

use super::*;
use crate::utils::session;
use httpmock::prelude::*;
use serde_json::json;

fn token_json(role: &str, user_id: i64) -> serde_json::Value {
    json!({
        "access_token": "tok1",
        "token_type": "bearer",
        "role": role,
        "user_id": user_id,
        "name": "Admin User",
        "email": "admin@company.com"
    })
}

fn leave_json(id: i64, status: &str) -> serde_json::Value {
    json!({
        "id": id,
        "start_date": "2026-09-10",
        "end_date": "2026-09-12",
        "reason": "Family event",
        "leave_type": "Annual",
        "status": status,
        "applied_at": "2026-09-01T09:30:00",
        "user_id": 7,
        "user_name": "Admin User"
    })
}

fn attendance_json(id: i64) -> serde_json::Value {
    json!({
        "id": id,
        "date": "2026-08-28",
        "status": "Present",
        "in_time": "09:02:11",
        "out_time": null,
        "work_hours": null
    })
}

#[tokio::test]
async fn login_persists_session_and_derives_employee_code() {
    session::testing::reset();
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(POST)
            .path("/token")
            .x_www_form_urlencoded_tuple("username", "admin@company.com")
            .x_www_form_urlencoded_tuple("password", "x");
        then.status(200).json_body(token_json("admin", 7));
    });

    let api = ApiClient::new_with_base_url(server.base_url());
    let user = api.login("admin@company.com", "x").await.unwrap();

    assert_eq!(user.employee_code, "EMP007");
    assert!(user.is_admin());
    assert_eq!(session::stored_token().as_deref(), Some("tok1"));

    // A fresh hydrate (simulated reload) reproduces the same session.
    let restored = session::load().expect("persisted record should restore");
    assert_eq!(restored, user);
}

#[tokio::test]
async fn login_rejection_surfaces_backend_detail_and_touches_nothing() {
    session::testing::reset();
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(POST).path("/token");
        then.status(401)
            .json_body(json!({ "detail": "Incorrect email or password" }));
    });

    let api = ApiClient::new_with_base_url(server.base_url());
    let error = api.login("admin@company.com", "wrong").await.unwrap_err();

    match error {
        ApiError::Backend { status, message } => {
            assert_eq!(status, 401);
            assert_eq!(message, "Incorrect email or password");
        }
        other => panic!("expected backend error, got {:?}", other),
    }
    assert!(session::stored_token().is_none());
    assert!(session::load().is_none());
}

#[tokio::test]
async fn login_without_reachable_backend_is_a_network_error() {
    session::testing::reset();
    let api = ApiClient::new_with_base_url("http://127.0.0.1:9");
    let error = api.login("a@b.c", "x").await.unwrap_err();
    assert!(matches!(error, ApiError::Network(_)));
    assert!(session::load().is_none());
}

#[tokio::test]
async fn gateway_attaches_bearer_from_persisted_store() {
    session::testing::reset();
    session::testing::seed_token_only("tok1");
    let server = MockServer::start_async().await;
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/leaves")
            .header("authorization", "Bearer tok1");
        then.status(200).json_body(json!([leave_json(1, "Pending")]));
    });

    let api = ApiClient::new_with_base_url(server.base_url());
    let leaves = api.get_leaves().await.unwrap();

    mock.assert();
    assert_eq!(leaves.len(), 1);
    assert!(leaves[0].is_pending());
}

#[tokio::test]
async fn gateway_without_credential_fails_before_sending() {
    session::testing::reset();
    let api = ApiClient::new_with_base_url("http://127.0.0.1:9");
    let error = api.get_leaves().await.unwrap_err();
    assert!(matches!(error, ApiError::Storage(_)));
}

#[tokio::test]
async fn unauthorized_response_clears_session_and_yields_expiry() {
    session::testing::reset();
    session::testing::seed_raw(
        "tok1",
        r#"{"id":7,"email":"admin@company.com","name":"Admin User","role":"admin","employee_code":"EMP007"}"#,
    );
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(GET).path("/leaves");
        then.status(401).json_body(json!({ "detail": "Token expired" }));
    });

    let api = ApiClient::new_with_base_url(server.base_url());
    let error = api.get_leaves().await.unwrap_err();

    // The caller sees the distinguished expiry failure, never the 401 body,
    // and the persisted record is already gone.
    assert_eq!(error, ApiError::SessionExpired);
    assert!(session::stored_token().is_none());
    assert!(session::load().is_none());
}

#[tokio::test]
async fn late_success_does_not_resurrect_a_torn_down_session() {
    session::testing::reset();
    session::testing::seed_token_only("tok1");
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(GET).path("/leaves");
        then.status(200).json_body(json!([leave_json(1, "Approved")]));
    });
    server.mock(|when, then| {
        when.method(GET).path("/dashboard/stats");
        then.status(401).json_body(json!({ "detail": "Token expired" }));
    });

    let api = ApiClient::new_with_base_url(server.base_url());
    let (leaves, stats) = futures::join!(api.get_leaves(), api.get_dashboard_stats());

    // The stats call tore the session down; the leaves call still delivers
    // its data to its caller, but nothing restores the session.
    assert_eq!(stats.unwrap_err(), ApiError::SessionExpired);
    assert_eq!(leaves.unwrap().len(), 1);
    assert!(session::stored_token().is_none());
    assert!(session::load().is_none());
}

#[tokio::test]
async fn create_leave_posts_json_and_decodes_result() {
    session::testing::reset();
    session::testing::seed_token_only("tok1");
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(POST)
            .path("/leaves")
            .json_body_partial(r#"{ "leave_type": "Annual", "start_date": "2026-09-10" }"#);
        then.status(200).json_body(leave_json(9, "Pending"));
    });

    let api = ApiClient::new_with_base_url(server.base_url());
    let request = CreateLeaveRequest {
        leave_type: "Annual".into(),
        start_date: chrono::NaiveDate::from_ymd_opt(2026, 9, 10).unwrap(),
        end_date: chrono::NaiveDate::from_ymd_opt(2026, 9, 12).unwrap(),
        reason: "Family event".into(),
    };
    let created = api.create_leave(&request).await.unwrap();
    assert_eq!(created.id, 9);
    assert!(created.is_pending());
}

#[tokio::test]
async fn update_leave_status_puts_decision() {
    session::testing::reset();
    session::testing::seed_token_only("tok1");
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(PUT)
            .path("/leaves/9/status")
            .json_body_partial(r#"{ "status": "Approved" }"#);
        then.status(200).json_body(leave_json(9, "Approved"));
    });

    let api = ApiClient::new_with_base_url(server.base_url());
    let updated = api
        .update_leave_status(9, leave_status::APPROVED)
        .await
        .unwrap();
    assert_eq!(updated.status, leave_status::APPROVED);
}

#[tokio::test]
async fn rejected_mutation_keeps_backend_message() {
    session::testing::reset();
    session::testing::seed_token_only("tok1");
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(POST).path("/leaves");
        then.status(400)
            .json_body(json!({ "detail": "Cannot apply for leave in the past" }));
    });

    let api = ApiClient::new_with_base_url(server.base_url());
    let request = CreateLeaveRequest {
        leave_type: "Annual".into(),
        start_date: chrono::NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
        end_date: chrono::NaiveDate::from_ymd_opt(2020, 1, 2).unwrap(),
        reason: "late".into(),
    };
    let error = api.create_leave(&request).await.unwrap_err();
    assert_eq!(
        error,
        ApiError::Backend {
            status: 400,
            message: "Cannot apply for leave in the past".into()
        }
    );
    // Non-401 failures never tear the session down.
    assert!(session::is_active());
}

#[tokio::test]
async fn attendance_round_trip_decodes() {
    session::testing::reset();
    session::testing::seed_token_only("tok1");
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(GET).path("/attendance/today");
        then.status(200).json_body(json!({
            "checked_in": false,
            "checked_out": false,
            "attendance": null
        }));
    });
    server.mock(|when, then| {
        when.method(POST).path("/attendance/check-in");
        then.status(200).json_body(attendance_json(3));
    });
    server.mock(|when, then| {
        when.method(GET).path("/attendance/my-history");
        then.status(200).json_body(json!([attendance_json(3)]));
    });

    let api = ApiClient::new_with_base_url(server.base_url());
    let today = api.get_today_attendance().await.unwrap();
    assert!(!today.checked_in);

    let record = api.check_in().await.unwrap();
    assert_eq!(record.status, "Present");
    assert!(record.out_time.is_none());

    let history = api.get_my_history().await.unwrap();
    assert_eq!(history.len(), 1);
}

#[tokio::test]
async fn dashboard_and_payroll_decode() {
    session::testing::reset();
    session::testing::seed_token_only("tok1");
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(GET).path("/dashboard/stats");
        then.status(200).json_body(json!({
            "attendance_percentage": 87.5,
            "pending_leaves": 3,
            "next_holiday": "Diwali (Oct 20, 2026)",
            "total_employees": 12,
            "present_today": 9,
            "on_leave_today": 1
        }));
    });
    server.mock(|when, then| {
        when.method(GET).path("/payroll/me");
        then.status(200).json_body(json!({
            "user_id": 7,
            "name": "Admin User",
            "month": "July 2026",
            "base_salary": 50000.0,
            "tax": 6000.0,
            "deductions": 3200.0,
            "net_salary": 40800.0,
            "absent_days": 2,
            "working_days": 22
        }));
    });

    let api = ApiClient::new_with_base_url(server.base_url());
    let stats = api.get_dashboard_stats().await.unwrap();
    assert_eq!(stats.pending_leaves, 3);
    assert_eq!(stats.next_holiday.as_deref(), Some("Diwali (Oct 20, 2026)"));

    let payslip = api.get_my_payroll().await.unwrap();
    assert_eq!(payslip.month, "July 2026");
    assert_eq!(payslip.absent_days, 2);
    assert!((payslip.net_salary - 40800.0).abs() < f64::EPSILON);
}
