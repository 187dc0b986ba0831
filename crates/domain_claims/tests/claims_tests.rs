//! Comprehensive tests for domain_claims
//!
//! Drives `ClaimsService` over the in-memory port to check the query,
//! aggregation, identifier, and CRUD contracts end to end.

use std::collections::HashSet;
use std::sync::Arc;

use chrono::NaiveDate;

use core_kernel::ClaimId;
use domain_claims::content::demo_claims;
use domain_claims::ports::mock::MockClaimsPort;
use domain_claims::{
    AreaInput, Claim, ClaimQuery, ClaimSubmission, ClaimUpdate, ClaimsService, SortField,
    SortOrder,
};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 10, 1).unwrap()
}

fn submission(id: Option<&str>, name: &str, location: &str, status: &str) -> ClaimSubmission {
    ClaimSubmission {
        id: id.map(str::to_string),
        claimant_name: Some(name.to_string()),
        location: Some(location.to_string()),
        area: Some(AreaInput::Number(2.0)),
        status: Some(status.to_string()),
        date_submitted: Some("2024-06-01".into()),
        remarks: Some("field visit pending".to_string()),
    }
}

async fn empty_service() -> (ClaimsService, MockClaimsPort) {
    let port = MockClaimsPort::new();
    (ClaimsService::new(Arc::new(port.clone())), port)
}

async fn seeded_service() -> ClaimsService {
    ClaimsService::new(Arc::new(MockClaimsPort::with_claims(demo_claims()).await))
}

// ============================================================================
// Create / Read round trip
// ============================================================================

mod round_trip_tests {
    use super::*;

    #[tokio::test]
    async fn test_client_id_round_trip() {
        let (service, _) = empty_service().await;
        let created = service
            .create_on(submission(Some("CUSTOM-7"), "Sita Munda", "Jharkhand, Khunti", "Approved"), today())
            .await
            .unwrap();

        let read = service.get(&ClaimId::from("CUSTOM-7")).await.unwrap();
        assert_eq!(read, created);
        assert_eq!(read.claimant_name, "Sita Munda");
        assert_eq!(read.location, "Jharkhand, Khunti");
        assert_eq!(read.area, 2.0);
        assert_eq!(read.status, "Approved");
        assert_eq!(read.date_submitted, NaiveDate::from_ymd_opt(2024, 6, 1).unwrap());
        assert_eq!(read.remarks, "field visit pending");
    }

    #[tokio::test]
    async fn test_missing_claim_is_not_found() {
        let service = seeded_service().await;
        let err = service.get(&ClaimId::from("FRA20249999")).await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_invalid_area_rejected_before_storage() {
        let (service, port) = empty_service().await;
        let mut s = submission(None, "A", "B, C", "Pending");
        s.area = Some(AreaInput::Text("two".to_string()));

        let err = service.create_on(s, today()).await.unwrap_err();
        assert_eq!(err.to_string(), "Invalid area");
        assert!(port.is_empty().await);
    }
}

// ============================================================================
// Identifier generation
// ============================================================================

mod id_generation_tests {
    use super::*;

    #[tokio::test]
    async fn test_next_id_on_empty_store() {
        let (service, _) = empty_service().await;
        assert_eq!(service.next_id(2024).await.unwrap().as_str(), "FRA20240001");
    }

    #[tokio::test]
    async fn test_next_id_is_max_based() {
        let (service, _) = empty_service().await;
        for id in ["FRA20240001", "FRA20240005"] {
            service
                .create_on(submission(Some(id), "X", "Y, Z", "Pending"), today())
                .await
                .unwrap();
        }
        assert_eq!(service.next_id(2024).await.unwrap().as_str(), "FRA20240006");
    }

    #[tokio::test]
    async fn test_generated_id_uses_submission_year() {
        let (service, _) = empty_service().await;
        let mut s = submission(None, "X", "Y, Z", "Pending");
        s.date_submitted = Some("2023-12-31".into());

        let claim = service.create_on(s, today()).await.unwrap();
        assert_eq!(claim.id.as_str(), "FRA20230001");
    }

    #[tokio::test]
    async fn test_racing_insert_of_same_id_conflicts() {
        let (service, port) = empty_service().await;
        let first = service.next_id(2024).await.unwrap();
        let second = service.next_id(2024).await.unwrap();
        assert_eq!(first, second);

        service
            .create_on(submission(Some(first.as_str()), "First", "A, B", "Pending"), today())
            .await
            .unwrap();
        let err = service
            .create_on(submission(Some(second.as_str()), "Second", "A, B", "Pending"), today())
            .await
            .unwrap_err();

        assert!(err.is_conflict());
        assert_eq!(port.len().await, 1);
        assert_eq!(service.get(&first).await.unwrap().claimant_name, "First");
    }
}

// ============================================================================
// Listing
// ============================================================================

mod listing_tests {
    use super::*;

    #[tokio::test]
    async fn test_status_filter_matches_stats() {
        let service = seeded_service().await;
        let page = service
            .list(&ClaimQuery::new().status("Approved").paginate(1, 100))
            .await
            .unwrap();
        let stats = service.stats().await.unwrap();

        assert!(page.items.iter().all(|c| c.status == "Approved"));
        assert_eq!(page.total, stats.approved);
        assert_eq!(page.total, 2);
    }

    #[tokio::test]
    async fn test_pages_do_not_overlap() {
        let (service, _) = empty_service().await;
        for i in 0..15 {
            service
                .create_on(submission(None, &format!("Claimant {i:02}"), "Odisha, Puri", "Pending"), today())
                .await
                .unwrap();
        }

        let first = service.list(&ClaimQuery::new().paginate(1, 10)).await.unwrap();
        let second = service.list(&ClaimQuery::new().paginate(2, 10)).await.unwrap();

        assert_eq!(first.items.len(), 10);
        assert_eq!(second.items.len(), 5);
        assert_eq!(first.total, 15);
        assert_eq!(first.total_pages, 2);

        let ids: HashSet<_> = first.items.iter().chain(&second.items).map(|c| c.id.clone()).collect();
        assert_eq!(ids.len(), 15);
    }

    #[tokio::test]
    async fn test_total_reflects_filtered_set() {
        let service = seeded_service().await;
        let page = service
            .list(&ClaimQuery::new().location("Jharkhand").paginate(1, 1))
            .await
            .unwrap();
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.total, 2);
        assert_eq!(page.total_pages, 2);
    }

    #[tokio::test]
    async fn test_search_and_status_combine() {
        let service = seeded_service().await;
        let page = service
            .list(&ClaimQuery::new().search("RAVI").status("Pending"))
            .await
            .unwrap();
        assert_eq!(page.total, 1);
        assert_eq!(page.items[0].id.as_str(), "FRA2024005");

        let none = service
            .list(&ClaimQuery::new().search("ravi").status("Approved"))
            .await
            .unwrap();
        assert_eq!(none.total, 0);
        assert!(none.items.is_empty());
    }

    #[tokio::test]
    async fn test_sort_by_area_desc() {
        let service = seeded_service().await;
        let page = service
            .list(&ClaimQuery::new().sort(SortField::Area, SortOrder::Desc))
            .await
            .unwrap();
        let areas: Vec<f64> = page.items.iter().map(|c| c.area).collect();
        assert_eq!(areas, vec![3.2, 2.8, 2.5, 1.9, 1.8]);
    }

    #[tokio::test]
    async fn test_page_past_end_is_empty() {
        let service = seeded_service().await;
        let page = service.list(&ClaimQuery::new().paginate(9, 10)).await.unwrap();
        assert!(page.items.is_empty());
        assert_eq!(page.total, 5);
        assert_eq!(page.page, 9);
    }
}

// ============================================================================
// Aggregation
// ============================================================================

mod aggregation_tests {
    use super::*;

    #[tokio::test]
    async fn test_claims_by_state_grouping() {
        let claims: Vec<Claim> = [("A1", "Jharkhand, Ranchi"), ("A2", "Jharkhand, Gumla"), ("A3", "")]
            .into_iter()
            .map(|(id, location)| Claim {
                id: ClaimId::from(id),
                claimant_name: "N".to_string(),
                location: location.to_string(),
                area: 1.0,
                status: "Pending".to_string(),
                date_submitted: today(),
                remarks: String::new(),
            })
            .collect();
        let service = ClaimsService::new(Arc::new(MockClaimsPort::with_claims(claims).await));

        let chart = service.chart_data().await.unwrap();
        let groups: Vec<(String, u64)> = chart
            .claims_by_state
            .into_iter()
            .map(|g| (g.state, g.claims))
            .collect();
        assert_eq!(groups, vec![("Jharkhand".to_string(), 2), ("Unknown".to_string(), 1)]);
    }

    #[tokio::test]
    async fn test_stats_counts() {
        let service = seeded_service().await;
        let stats = service.stats().await.unwrap();
        assert_eq!((stats.total, stats.approved, stats.pending, stats.rejected), (5, 2, 2, 1));
        assert_eq!(stats.trends.total_change, "+12%");
    }

    #[tokio::test]
    async fn test_dashboard_payload() {
        let service = seeded_service().await;
        let dashboard = service.dashboard().await.unwrap();
        assert_eq!(dashboard.recent_claims.len(), 5);
        assert_eq!(dashboard.recent_claims[0].id.as_str(), "FRA2024001");
        assert_eq!(dashboard.faq_data.len(), 6);

        let json = serde_json::to_value(&dashboard).unwrap();
        for key in ["claimsStats", "recentClaims", "chartData", "aiInsights", "faqData", "teamMembers"] {
            assert!(json.get(key).is_some(), "missing {key}");
        }
        assert_eq!(json["recentClaims"][0]["dateSubmitted"], "2024-09-15");
    }
}

// ============================================================================
// Update / Delete
// ============================================================================

mod mutation_tests {
    use super::*;

    #[tokio::test]
    async fn test_remarks_only_update_preserves_other_fields() {
        let service = seeded_service().await;
        let id = ClaimId::from("FRA2024002");
        let before = service.get(&id).await.unwrap();

        let after = service
            .update(&id, ClaimUpdate { remarks: Some("Title deed issued".to_string()), ..Default::default() })
            .await
            .unwrap();

        assert_eq!(after.remarks, "Title deed issued");
        assert_eq!(after.area, before.area);
        assert_eq!(after.status, before.status);
        assert_eq!(after.location, before.location);
        assert_eq!(after.date_submitted, before.date_submitted);
    }

    #[tokio::test]
    async fn test_update_with_bad_area_fails_and_changes_nothing() {
        let service = seeded_service().await;
        let id = ClaimId::from("FRA2024002");
        let before = service.get(&id).await.unwrap();

        let err = service
            .update(
                &id,
                ClaimUpdate {
                    status: Some("Rejected".to_string()),
                    area: Some(AreaInput::Text("wide".to_string())),
                    ..Default::default()
                },
            )
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "Invalid area");
        assert_eq!(service.get(&id).await.unwrap(), before);
    }

    #[tokio::test]
    async fn test_update_missing_is_not_found() {
        let service = seeded_service().await;
        let err = service
            .update(&ClaimId::from("NOPE"), ClaimUpdate { status: Some("Approved".to_string()), ..Default::default() })
            .await
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_delete_missing_leaves_store_unchanged() {
        let port = MockClaimsPort::with_claims(demo_claims()).await;
        let service = ClaimsService::new(Arc::new(port.clone()));

        let err = service.delete(&ClaimId::from("FRA20240042")).await.unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(port.len().await, 5);

        service.delete(&ClaimId::from("FRA2024003")).await.unwrap();
        assert_eq!(port.len().await, 4);
        assert!(service.delete(&ClaimId::from("FRA2024003")).await.unwrap_err().is_not_found());
    }
}
