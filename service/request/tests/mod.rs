use std::collections::HashSet;
use std::sync::{Arc, Mutex};

use chrono::Utc;
use domain_request::{
    exception::RequestException,
    mock::{MockEmployeeIdGenerator, MockRequestRecordRepo},
    model::{
        entity::{RequestRecord, RequestStatus},
        vo::{RequestDraft, RequestStats, TransitionPolicy},
    },
    service::RequestRecordService,
};
use service_request::RequestRecordServiceImpl;

fn draft() -> RequestDraft {
    RequestDraft {
        requester: Some("Ana".to_string()),
        requester_area: Some("Almoxarifado".to_string()),
        operation_type: Some("saida".to_string()),
        item_code: Some("X1".to_string()),
        ..Default::default()
    }
}

fn stored(employee_id: &str, status: RequestStatus) -> RequestRecord {
    let mut record = RequestRecord::from_draft(draft(), employee_id.to_string(), Utc::now());
    record.id = 1;
    record.status = status;
    record
}

fn taken(employee_id: &str) -> anyhow::Error {
    RequestException::EmployeeIdTaken {
        employee_id: employee_id.to_string(),
    }
    .into()
}

#[tokio::test]
async fn create_stores_pending_record_with_generated_id() {
    let mut repo = MockRequestRecordRepo::new();
    repo.expect_insert().times(1).returning(|record| {
        let mut stored = record.clone();
        stored.id = 1;
        Ok(stored)
    });
    repo.expect_save_changed().returning(|| Ok(false));
    let service = RequestRecordServiceImpl::builder()
        .request_record_repository(Arc::new(repo))
        .build();

    let record = service.create(draft()).await.unwrap();

    assert_eq!(record.id, 1);
    assert_eq!(record.status, RequestStatus::Pending);
    assert_eq!(record.requester, "Ana");
    assert!(record.employee_id.starts_with("EMP"));
    assert!(record.service_started_at.is_none());
}

#[tokio::test]
async fn generated_employee_ids_are_distinct() {
    let used = Arc::new(Mutex::new(HashSet::new()));
    let mut repo = MockRequestRecordRepo::new();
    let seen = used.clone();
    repo.expect_insert().returning(move |record| {
        if !seen.lock().unwrap().insert(record.employee_id.clone()) {
            return Err(taken(&record.employee_id));
        }
        Ok(record.clone())
    });
    repo.expect_save_changed().returning(|| Ok(false));
    let service = RequestRecordServiceImpl::builder()
        .request_record_repository(Arc::new(repo))
        .build();

    let mut ids = HashSet::new();
    for _ in 0..300 {
        let record = service.create(draft()).await.unwrap();
        assert!(ids.insert(record.employee_id));
    }
    assert_eq!(used.lock().unwrap().len(), 300);
}

#[tokio::test]
async fn conflicting_generated_id_is_redrawn() {
    let mut generator = MockEmployeeIdGenerator::new();
    let mut draws = vec!["EMP0002".to_string(), "EMP0001".to_string()];
    generator.expect_generate().times(2).returning(move || draws.pop().unwrap());
    let mut repo = MockRequestRecordRepo::new();
    repo.expect_insert().times(2).returning(|record| {
        if record.employee_id == "EMP0001" {
            return Err(taken("EMP0001"));
        }
        Ok(record.clone())
    });
    repo.expect_save_changed().times(1).returning(|| Ok(false));
    let service = RequestRecordServiceImpl::builder()
        .request_record_repository(Arc::new(repo))
        .employee_id_generator(Arc::new(generator))
        .build();

    let record = service.create(draft()).await.unwrap();

    assert_eq!(record.employee_id, "EMP0002");
}

#[tokio::test]
async fn generation_gives_up_after_configured_attempts() {
    let mut generator = MockEmployeeIdGenerator::new();
    generator.expect_generate().returning(|| "EMP0001".to_string());
    let mut repo = MockRequestRecordRepo::new();
    repo.expect_insert().times(3).returning(|record| Err(taken(&record.employee_id)));
    repo.expect_save_changed().never();
    let service = RequestRecordServiceImpl::builder()
        .request_record_repository(Arc::new(repo))
        .employee_id_generator(Arc::new(generator))
        .employee_id_attempts(3)
        .build();

    let err = service.create(draft()).await.unwrap_err();

    assert!(matches!(err, RequestException::EmployeeIdExhausted { attempts: 3 }));
}

#[tokio::test]
async fn explicit_employee_id_is_not_regenerated() {
    let mut generator = MockEmployeeIdGenerator::new();
    generator.expect_generate().never();
    let mut repo = MockRequestRecordRepo::new();
    repo.expect_insert()
        .times(1)
        .withf(|record| record.employee_id == "EMP1234")
        .returning(|record| Err(taken(&record.employee_id)));
    let service = RequestRecordServiceImpl::builder()
        .request_record_repository(Arc::new(repo))
        .employee_id_generator(Arc::new(generator))
        .build();

    let err = service
        .create(RequestDraft {
            employee_id: Some("EMP1234".to_string()),
            ..draft()
        })
        .await
        .unwrap_err();

    assert!(
        matches!(err, RequestException::EmployeeIdTaken { ref employee_id } if employee_id == "EMP1234")
    );
}

#[tokio::test]
async fn storage_failure_on_create_is_internal() {
    let mut repo = MockRequestRecordRepo::new();
    repo.expect_insert().times(1).returning(|_| Err(anyhow::anyhow!("database is locked")));
    let service = RequestRecordServiceImpl::builder()
        .request_record_repository(Arc::new(repo))
        .build();

    let err = service.create(draft()).await.unwrap_err();

    assert!(matches!(err, RequestException::InternalError { .. }));
}

#[tokio::test]
async fn list_keeps_repository_order() {
    let mut repo = MockRequestRecordRepo::new();
    repo.expect_get_all().returning(|| {
        Ok(vec![
            stored("EMP0003", RequestStatus::Pending),
            stored("EMP0002", RequestStatus::Done),
            stored("EMP0001", RequestStatus::Pending),
        ])
    });
    let service = RequestRecordServiceImpl::builder()
        .request_record_repository(Arc::new(repo))
        .build();

    let ids = service
        .list()
        .await
        .unwrap()
        .into_iter()
        .map(|r| r.employee_id)
        .collect::<Vec<_>>();

    assert_eq!(ids, ["EMP0003", "EMP0002", "EMP0001"]);
}

#[tokio::test]
async fn update_unknown_employee_id_is_not_found() {
    let mut repo = MockRequestRecordRepo::new();
    repo.expect_get_by_employee_id()
        .withf(|id| id == "EMP9999")
        .returning(|_| Ok(None));
    repo.expect_update().never();
    repo.expect_save_changed().never();
    let service = RequestRecordServiceImpl::builder()
        .request_record_repository(Arc::new(repo))
        .build();

    let err = service
        .update_status("EMP9999", Some(RequestStatus::Done))
        .await
        .unwrap_err();

    assert!(
        matches!(err, RequestException::NotFound { ref employee_id } if employee_id == "EMP9999")
    );
}

#[tokio::test]
async fn update_without_status_changes_nothing() {
    let current = stored("EMP0042", RequestStatus::InProgress);
    let expected = current.clone();
    let mut repo = MockRequestRecordRepo::new();
    repo.expect_get_by_employee_id()
        .returning(move |_| Ok(Some(current.clone())));
    repo.expect_update().never();
    repo.expect_save_changed().never();
    let service = RequestRecordServiceImpl::builder()
        .request_record_repository(Arc::new(repo))
        .build();

    let record = service.update_status("EMP0042", None).await.unwrap();

    assert_eq!(record, expected);
}

#[tokio::test]
async fn update_to_in_progress_stamps_and_persists() {
    let mut repo = MockRequestRecordRepo::new();
    repo.expect_get_by_employee_id()
        .returning(|_| Ok(Some(stored("EMP0042", RequestStatus::Pending))));
    repo.expect_update()
        .times(1)
        .withf(|record| {
            record.status == RequestStatus::InProgress && record.service_started_at.is_some()
        })
        .returning(|_| Ok(()));
    repo.expect_save_changed().times(1).returning(|| Ok(true));
    let service = RequestRecordServiceImpl::builder()
        .request_record_repository(Arc::new(repo))
        .build();

    let record = service
        .update_status("EMP0042", Some(RequestStatus::InProgress))
        .await
        .unwrap();

    assert_eq!(record.status, RequestStatus::InProgress);
    assert!(record.service_started_at.is_some());
    assert!(record.service_completed_at.is_none());
}

#[tokio::test]
async fn permissive_policy_allows_going_back() {
    let mut repo = MockRequestRecordRepo::new();
    repo.expect_get_by_employee_id()
        .returning(|_| Ok(Some(stored("EMP0042", RequestStatus::Done))));
    repo.expect_update().times(1).returning(|_| Ok(()));
    repo.expect_save_changed().times(1).returning(|| Ok(true));
    let service = RequestRecordServiceImpl::builder()
        .request_record_repository(Arc::new(repo))
        .build();

    let record = service
        .update_status("EMP0042", Some(RequestStatus::Pending))
        .await
        .unwrap();

    assert_eq!(record.status, RequestStatus::Pending);
}

#[tokio::test]
async fn forward_only_policy_rejects_going_back() {
    let mut repo = MockRequestRecordRepo::new();
    repo.expect_get_by_employee_id()
        .returning(|_| Ok(Some(stored("EMP0042", RequestStatus::Done))));
    repo.expect_update().never();
    repo.expect_save_changed().never();
    let service = RequestRecordServiceImpl::builder()
        .request_record_repository(Arc::new(repo))
        .transition_policy(TransitionPolicy::ForwardOnly)
        .build();

    let err = service
        .update_status("EMP0042", Some(RequestStatus::Pending))
        .await
        .unwrap_err();

    assert!(matches!(err, RequestException::InvalidTransition { .. }));
}

#[tokio::test]
async fn stats_skip_unrecognized_statuses() {
    let mut repo = MockRequestRecordRepo::new();
    repo.expect_count_by_status().returning(|| {
        Ok(vec![
            (RequestStatus::Pending, 3),
            (RequestStatus::Done, 1),
            (RequestStatus::Unrecognized("archived".to_string()), 4),
        ])
    });
    let service = RequestRecordServiceImpl::builder()
        .request_record_repository(Arc::new(repo))
        .build();

    let stats = service.stats().await.unwrap();

    assert_eq!(
        stats,
        RequestStats {
            pending: 3,
            in_progress: 0,
            done: 1
        }
    );
}
