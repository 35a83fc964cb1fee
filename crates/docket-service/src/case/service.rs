//! Case creation, detail, and listing.

use std::sync::Arc;

use tracing::info;

use docket_core::error::{AppError, FieldError};
use docket_core::events::CaseEvent;
use docket_core::result::AppResult;
use docket_core::types::{CaseId, PageRequest, PageResponse};
use docket_database::RecordStore;
use docket_entity::case::{Case, CaseDetail, CaseSummary, CreateCase};

use crate::events::EventBus;

/// Maximum length of a case title, attorney, or defendant.
pub const MAX_CASE_FIELD_CHARS: usize = 500;

/// Creates and reads cases.
#[derive(Clone)]
pub struct CaseService {
    store: Arc<dyn RecordStore>,
    events: EventBus,
}

impl std::fmt::Debug for CaseService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CaseService")
            .field("store", &self.store.backend())
            .finish()
    }
}

impl CaseService {
    /// Creates a new case service.
    pub fn new(store: Arc<dyn RecordStore>, events: EventBus) -> Self {
        Self { store, events }
    }

    /// Creates a case from trimmed input and announces it.
    pub async fn create(&self, input: CreateCase) -> AppResult<Case> {
        let data = normalize(input)?;
        let case = self.store.create_case(&data).await?;

        info!(case_id = %case.id, "Case created");
        self.events.publish(CaseEvent::CaseCreated {
            case_id: case.id,
            case_title: case.case_title.clone(),
        });
        Ok(case)
    }

    /// Returns a case with all of its versions and files.
    pub async fn get(&self, id: CaseId) -> AppResult<CaseDetail> {
        self.store
            .case_detail(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Case {id} not found")))
    }

    /// Returns one page of the case listing, newest first.
    pub async fn list(&self, page: u64) -> AppResult<PageResponse<CaseSummary>> {
        let request = PageRequest::records(page);
        Ok(self.store.list_cases(&request).await?.map(CaseSummary::from))
    }
}

fn normalize(input: CreateCase) -> AppResult<CreateCase> {
    let mut errors = Vec::new();
    let mut check = |field: &str, value: String| -> String {
        let value = value.trim().to_string();
        if value.is_empty() {
            errors.push(FieldError::new(field, "must not be blank"));
        } else if value.chars().count() > MAX_CASE_FIELD_CHARS {
            errors.push(FieldError::new(
                field,
                format!("must be at most {MAX_CASE_FIELD_CHARS} characters"),
            ));
        }
        value
    };

    let data = CreateCase {
        case_title: check("caseTitle", input.case_title),
        attorney: check("attorney", input.attorney),
        defendant: check("defendant", input.defendant),
    };

    if errors.is_empty() {
        Ok(data)
    } else {
        Err(AppError::invalid_fields("Invalid case details", errors))
    }
}

#[cfg(test)]
mod tests {
    use docket_core::error::ErrorKind;
    use docket_database::MemoryRecordStore;

    use super::*;

    fn service() -> (CaseService, EventBus) {
        let events = EventBus::new(16);
        let store: Arc<dyn RecordStore> = Arc::new(MemoryRecordStore::new());
        (CaseService::new(store, events.clone()), events)
    }

    fn input(title: &str) -> CreateCase {
        CreateCase {
            case_title: title.into(),
            attorney: "A. Counsel".into(),
            defendant: "J. Doe".into(),
        }
    }

    #[tokio::test]
    async fn test_create_trims_and_publishes() {
        let (service, events) = service();
        let mut rx = events.subscribe();

        let case = service.create(input("  State v. Doe  ")).await.unwrap();
        assert_eq!(case.case_title, "State v. Doe");

        let event = rx.recv().await.unwrap();
        assert_eq!(
            event.payload,
            CaseEvent::CaseCreated {
                case_id: case.id,
                case_title: "State v. Doe".into(),
            }
        );
    }

    #[tokio::test]
    async fn test_create_lists_every_invalid_field() {
        let (service, _) = service();
        let err = service
            .create(CreateCase {
                case_title: "   ".into(),
                attorney: "x".repeat(501),
                defendant: "J. Doe".into(),
            })
            .await
            .unwrap_err();

        assert_eq!(err.kind, ErrorKind::Validation);
        let fields: Vec<String> = err.field_errors().into_iter().map(|f| f.field).collect();
        assert_eq!(fields, vec!["caseTitle", "attorney"]);
    }

    #[tokio::test]
    async fn test_get_unknown_case_is_not_found() {
        let (service, _) = service();
        let err = service.get(CaseId(9)).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::NotFound);
    }

    #[tokio::test]
    async fn test_list_empty() {
        let (service, _) = service();
        let page = service.list(1).await.unwrap();
        assert!(page.items.is_empty());
        assert_eq!(page.total_items, 0);
        assert_eq!(page.total_pages, 0);
    }
}
