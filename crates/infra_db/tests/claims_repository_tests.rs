//! PostgreSQL integration tests for the claims adapter
//!
//! Each test starts its own container; run with `cargo test -- --ignored`.

use std::collections::HashSet;

use core_kernel::{AdapterHealth, ClaimId, HealthCheckable};
use domain_claims::{
    AreaInput, ClaimQuery, ClaimStatus, ClaimUpdate, ClaimsPort, ClaimsService, SortField,
    SortOrder,
};
use infra_db::{ensure_schema, PostgresClaimsAdapter};
use test_utils::{
    assert_all_have_status, assert_disjoint_pages, assert_page_meta, assert_same_except_remarks,
    db_test, sequential_claims, ClaimFixtures, TestClaimBuilder,
};

// ============================================================================
// Schema
// ============================================================================

db_test!(test_ensure_schema_is_rerunnable, |pool| {
    ensure_schema(&pool).await.unwrap();
    ensure_schema(&pool).await.unwrap();

    let indexes: Vec<String> = sqlx::query_scalar(
        "SELECT indexname::text FROM pg_indexes WHERE tablename = 'claims' ORDER BY indexname",
    )
    .fetch_all(&pool)
    .await
    .unwrap();
    assert!(indexes.contains(&"idx_claims_status".to_string()));
    assert!(indexes.contains(&"idx_claims_location".to_string()));
});

// ============================================================================
// CRUD
// ============================================================================

db_test!(test_insert_get_round_trip, |pool| {
    let adapter = PostgresClaimsAdapter::new(pool);
    let claim = ClaimFixtures::approved();

    adapter.insert_claim(claim.clone()).await.unwrap();
    assert_eq!(adapter.get_claim(&claim.id).await.unwrap(), claim);
});

db_test!(test_duplicate_insert_is_conflict, |pool| {
    let adapter = PostgresClaimsAdapter::new(pool.clone());
    let claim = ClaimFixtures::pending();

    adapter.insert_claim(claim.clone()).await.unwrap();
    let err = adapter.insert_claim(claim).await.unwrap_err();
    assert!(err.is_conflict());

    assert_eq!(adapter.repository().count().await.unwrap(), 1);
});

db_test!(test_update_remarks_only, |pool| {
    let adapter = PostgresClaimsAdapter::new(pool);
    let before = ClaimFixtures::rejected();
    adapter.insert_claim(before.clone()).await.unwrap();

    let after = adapter
        .update_claim(
            &before.id,
            ClaimUpdate { remarks: Some("Appeal filed".to_string()), ..Default::default() },
        )
        .await
        .unwrap();

    assert_eq!(after.remarks, "Appeal filed");
    assert_same_except_remarks(&after, &before);
});

db_test!(test_update_with_invalid_area_rolls_back, |pool| {
    let adapter = PostgresClaimsAdapter::new(pool);
    let before = ClaimFixtures::pending();
    adapter.insert_claim(before.clone()).await.unwrap();

    let err = adapter
        .update_claim(
            &before.id,
            ClaimUpdate {
                status: Some("Approved".to_string()),
                area: Some(AreaInput::Text("lots".to_string())),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();

    assert!(matches!(err, core_kernel::PortError::Validation { .. }));
    assert_eq!(adapter.get_claim(&before.id).await.unwrap(), before);
});

db_test!(test_delete_missing_leaves_table_unchanged, |pool| {
    let adapter = PostgresClaimsAdapter::new(pool.clone());
    for claim in ClaimFixtures::mixed() {
        adapter.insert_claim(claim).await.unwrap();
    }

    let err = adapter.delete_claim(&ClaimId::from("FRA20249999")).await.unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(adapter.repository().count().await.unwrap(), 3);

    let deleted = sqlx::query("DELETE FROM claims WHERE id = 'FRA20240001'")
        .execute(&pool)
        .await
        .unwrap();
    assert_eq!(deleted.rows_affected(), 1);
});

// ============================================================================
// Listing
// ============================================================================

db_test!(test_pagination_has_no_overlap, |pool| {
    let adapter = PostgresClaimsAdapter::new(pool);
    for claim in sequential_claims(15) {
        adapter.insert_claim(claim).await.unwrap();
    }

    let first = adapter.list_claims(&ClaimQuery::new().paginate(1, 10)).await.unwrap();
    let second = adapter.list_claims(&ClaimQuery::new().paginate(2, 10)).await.unwrap();

    assert_page_meta(&first, 15, 2);
    assert_eq!(second.items.len(), 5);
    assert_disjoint_pages(&first, &second);
});

db_test!(test_filters_and_sort, |pool| {
    let adapter = PostgresClaimsAdapter::new(pool);
    let claims = vec![
        TestClaimBuilder::new().with_sequence(1).with_claimant_name("Ravi Oraon")
            .with_location("Jharkhand, Gumla").with_status(ClaimStatus::Pending).with_area(2.8).build(),
        TestClaimBuilder::new().with_sequence(2).with_claimant_name("Ravina Tudu")
            .with_location("Jharkhand, Dumka").with_status(ClaimStatus::Approved).with_area(1.1).build(),
        TestClaimBuilder::new().with_sequence(3).with_claimant_name("Asha 100%")
            .with_location("Odisha, Puri").with_status(ClaimStatus::Approved).with_area(5.0).build(),
    ];
    for claim in claims {
        adapter.insert_claim(claim).await.unwrap();
    }

    let page = adapter
        .list_claims(&ClaimQuery::new().search("RAVI").sort(SortField::Area, SortOrder::Desc))
        .await
        .unwrap();
    let names: Vec<_> = page.items.iter().map(|c| c.claimant_name.as_str()).collect();
    assert_eq!(names, vec!["Ravi Oraon", "Ravina Tudu"]);

    let approved = adapter.list_claims(&ClaimQuery::new().status("Approved")).await.unwrap();
    assert_all_have_status(&approved, "Approved");
    assert_eq!(approved.total, adapter.count_by_status().await.unwrap().approved);

    let jharkhand = adapter.list_claims(&ClaimQuery::new().location("Jharkhand")).await.unwrap();
    assert_eq!(jharkhand.total, 2);
    let lower = adapter.list_claims(&ClaimQuery::new().location("jharkhand")).await.unwrap();
    assert_eq!(lower.total, 0);

    // Wildcards in search text match literally
    let literal = adapter.list_claims(&ClaimQuery::new().search("%")).await.unwrap();
    assert_eq!(literal.total, 1);
});

// ============================================================================
// Service over PostgreSQL
// ============================================================================

db_test!(test_service_generates_sequential_ids, |pool| {
    let service = ClaimsService::new(std::sync::Arc::new(PostgresClaimsAdapter::new(pool)));
    service.seed_if_empty(domain_claims::content::demo_claims()).await.unwrap();

    let id = service.next_id(2024).await.unwrap();
    assert_eq!(id.as_str(), "FRA20240006");

    let chart = service.chart_data().await.unwrap();
    let states: HashSet<_> = chart.claims_by_state.iter().map(|s| s.state.as_str()).collect();
    assert!(states.contains("Jharkhand"));
    assert_eq!(chart.claims_by_state.iter().map(|s| s.claims).sum::<u64>(), 5);
});

db_test!(test_health_check_reports_healthy, |pool| {
    let adapter = PostgresClaimsAdapter::new(pool);
    assert_eq!(adapter.health_check().await.status, AdapterHealth::Healthy);
});
