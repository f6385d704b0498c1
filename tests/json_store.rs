//! JSON store behavior: id assignment, snapshot completeness, deletes, and
//! the snapshot-driven dashboard refresh.

mod common;

use common::{ad_cost, date, sale};
use dashboard_core::config::DashboardConfig;
use dashboard_core::domain::{Origin, Package};
use dashboard_core::errors::DashboardError;
use dashboard_core::report::Dashboard;
use dashboard_core::store::{JsonStore, RecordStore};

fn store_in(dir: &std::path::Path) -> JsonStore {
    let config = DashboardConfig {
        app_id: "test-app".into(),
        user_id: "user-1".into(),
        data_dir: dir.to_path_buf(),
    };
    JsonStore::new(&config).unwrap()
}

#[test]
fn add_assigns_an_id_and_snapshot_returns_it() {
    let dir = tempfile::tempdir().unwrap();
    let store = store_in(dir.path());

    let id = store
        .add_sale(sale(date(2024, 1, 10), 100.0, Package::Simples, Origin::BR))
        .unwrap();
    let snapshot = store.snapshot_sales().unwrap();
    assert_eq!(snapshot.len(), 1);
    assert_eq!(snapshot[0].id, Some(id));
    assert_eq!(snapshot[0].amount, 100.0);
}

#[test]
fn empty_client_name_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let store = store_in(dir.path());

    let mut nameless = sale(date(2024, 1, 10), 100.0, Package::Simples, Origin::BR);
    nameless.client_name = "  ".into();
    let err = store.add_sale(nameless).expect_err("name is required");
    assert!(matches!(err, DashboardError::InvalidRecord(_)));
    assert!(store.snapshot_sales().unwrap().is_empty());
}

#[test]
fn delete_removes_only_the_identified_record() {
    let dir = tempfile::tempdir().unwrap();
    let store = store_in(dir.path());

    let first = store
        .add_sale(sale(date(2024, 1, 10), 100.0, Package::Simples, Origin::BR))
        .unwrap();
    let second = store
        .add_sale(sale(date(2024, 1, 11), 50.0, Package::Ouro, Origin::BR))
        .unwrap();

    store.delete_sale(first).unwrap();
    let snapshot = store.snapshot_sales().unwrap();
    assert_eq!(snapshot.len(), 1);
    assert_eq!(snapshot[0].id, Some(second));

    let err = store.delete_sale(first).expect_err("already gone");
    assert!(matches!(err, DashboardError::NotFound(_)));
}

#[test]
fn ad_costs_persist_and_delete_independently() {
    let dir = tempfile::tempdir().unwrap();
    let store = store_in(dir.path());

    let id = store.add_ad_cost(ad_cost(date(2024, 1, 11), 40.0)).unwrap();
    assert_eq!(store.snapshot_ad_costs().unwrap().len(), 1);
    store.delete_ad_cost(id).unwrap();
    assert!(store.snapshot_ad_costs().unwrap().is_empty());
}

#[test]
fn dashboard_refreshes_from_store_snapshots_only() {
    let dir = tempfile::tempdir().unwrap();
    let store = store_in(dir.path());
    let mut dashboard = Dashboard::new();

    store
        .add_sale(sale(date(2024, 1, 10), 100.0, Package::Simples, Origin::BR))
        .unwrap();
    // The write alone changes nothing; aggregates derive from the last
    // snapshot handed to the dashboard.
    assert_eq!(dashboard.totals().revenue, 0.0);

    dashboard.replace_sales(store.snapshot_sales().unwrap());
    dashboard.replace_ad_costs(store.snapshot_ad_costs().unwrap());
    assert_eq!(dashboard.totals().revenue, 100.0);
}

#[test]
fn users_do_not_share_collections() {
    let dir = tempfile::tempdir().unwrap();
    let store_a = store_in(dir.path());
    let config_b = DashboardConfig {
        app_id: "test-app".into(),
        user_id: "user-2".into(),
        data_dir: dir.path().to_path_buf(),
    };
    let store_b = JsonStore::new(&config_b).unwrap();

    store_a
        .add_sale(sale(date(2024, 1, 10), 100.0, Package::Simples, Origin::BR))
        .unwrap();
    assert!(store_b.snapshot_sales().unwrap().is_empty());
}
