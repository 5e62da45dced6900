//! End-to-end form submission against a live roster-server on a local port.

use std::net::SocketAddr;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use roster_client::form::GENERIC_FAILURE_MESSAGE;
use roster_client::{
    ClientConfig, ClientError, Department, EmployeeDraft, EmployeeField, EmployeeForm,
    FormStatus, HttpClient, SubmitOutcome,
};
use roster_server::db::{BoxError, EmployeeRepository, MemoryEmployeeRepository};
use roster_server::{AppState, api};
use shared::models::{Employee, NewEmployee};

struct BrokenRepository;

#[async_trait]
impl EmployeeRepository for BrokenRepository {
    async fn insert(&self, _record: &NewEmployee) -> Result<Employee, BoxError> {
        Err("relation \"employees\" does not exist".into())
    }
}

async fn spawn_server(repo: Arc<dyn EmployeeRepository>) -> SocketAddr {
    let app = api::build_app(AppState::new(repo, "http://localhost:5173").unwrap());
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

fn client_for(addr: SocketAddr) -> HttpClient {
    ClientConfig::new(format!("http://{addr}"))
        .with_timeout(5)
        .build_http_client()
        .unwrap()
}

fn filled_form() -> EmployeeForm {
    let mut form = EmployeeForm::with_max_date(NaiveDate::from_ymd_opt(2025, 1, 1).unwrap());
    form.set(EmployeeField::EmployeeId, "EMP-100");
    form.set(EmployeeField::Name, "Mary Jackson");
    form.set(EmployeeField::Email, "mary@example.com");
    form.set(EmployeeField::Phone, "7575550142");
    form.select_department(Department::Marketing);
    form.pick_date(NaiveDate::from_ymd_opt(2019, 11, 4).unwrap())
        .unwrap();
    form.set(EmployeeField::Role, "Engineer");
    form
}

#[tokio::test]
async fn submitted_form_is_stored_and_cleared() {
    let repo = MemoryEmployeeRepository::new();
    let addr = spawn_server(Arc::new(repo.clone())).await;
    let client = client_for(addr);

    let mut form = filled_form();
    let outcome = form.submit(&client).await;

    let created = match outcome {
        SubmitOutcome::Saved(created) => created,
        other => panic!("unexpected outcome {other:?}"),
    };
    assert_eq!(created.message, "Employee added successfully");
    assert_eq!(created.new_employee.department, "Marketing");
    assert_eq!(
        created.new_employee.date_of_joining,
        NaiveDate::from_ymd_opt(2019, 11, 4).unwrap()
    );

    assert!(matches!(form.status(), FormStatus::Saved { employee, .. } if employee.id == created.new_employee.id));
    assert!(form.fields().iter().all(|f| f.value.is_empty()));

    let rows = repo.all().await;
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].employee_id, "EMP-100");
}

#[tokio::test]
async fn server_reports_field_errors_for_unchecked_draft() {
    let addr = spawn_server(Arc::new(MemoryEmployeeRepository::new())).await;
    let client = client_for(addr);

    let draft = EmployeeDraft {
        employee_id: "EMP-1".into(),
        name: "Ada".into(),
        email: "ada-at-example".into(),
        phone: "5550100000".into(),
        department: "HR".into(),
        date_of_joining: "2020-01-01".into(),
        role: "Analyst".into(),
    };
    let err = client.create_employee(&draft).await.unwrap_err();

    let violations = err.violations().expect("structured errors");
    assert_eq!(violations.len(), 1);
    assert_eq!(violations[0].field(), Some(EmployeeField::Email));
    assert_eq!(violations[0].message, "Invalid email format");
}

#[tokio::test]
async fn server_failure_shows_generic_message() {
    let addr = spawn_server(Arc::new(BrokenRepository)).await;
    let client = client_for(addr);

    let mut form = filled_form();
    let outcome = form.submit(&client).await;

    match outcome {
        SubmitOutcome::Failed(ClientError::Server { status, message }) => {
            assert_eq!(status, 500);
            assert_eq!(message, "Internal Server Error");
        }
        other => panic!("unexpected outcome {other:?}"),
    }
    assert_eq!(
        form.status(),
        &FormStatus::Failed {
            message: GENERIC_FAILURE_MESSAGE.to_string()
        }
    );
    assert_eq!(form.value(EmployeeField::Name), "Mary Jackson");
}

#[tokio::test]
async fn unreachable_server_shows_generic_message() {
    // Bind then drop to get a port nothing listens on
    let addr = {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        listener.local_addr().unwrap()
    };
    let client = client_for(addr);

    let mut form = filled_form();
    let outcome = form.submit(&client).await;

    assert!(matches!(outcome, SubmitOutcome::Failed(ClientError::Http(_))));
    assert!(matches!(form.status(), FormStatus::Failed { .. }));
    assert!(!form.has_errors());
}
