//! Mock-database tests for the Postgres store, asserting both row mapping
//! and the exact statements and bind order sent to the database.

use std::collections::BTreeMap;

use chrono::Utc;
use sea_orm::{DatabaseBackend, DbErr, MockDatabase, MockExecResult, Transaction, Value};

use quill_core::domain::PostDraft;
use quill_core::error::StoreError;
use quill_core::pagination::PageBounds;
use quill_core::ports::PostStore;
use quill_core::query::{ListFilter, build_list_query, build_read_query};

use super::PostgresPostStore;
use super::postgres::{DELETE_POST, INSERT_POST, UPDATE_POST};

fn post_row(id: i32, title: &str) -> BTreeMap<&'static str, Value> {
    BTreeMap::from([
        ("id", Value::from(id)),
        ("image", Value::from("https://example.com/cover.jpg")),
        ("category", Value::from("Tech")),
        ("title", Value::from(title)),
        ("description", Value::from("summary")),
        ("date", Value::from(Utc::now())),
        ("content", Value::from("body")),
        ("status", Value::from("Published")),
        ("likes_count", Value::from(3)),
    ])
}

fn count_row(total: i64) -> BTreeMap<&'static str, Value> {
    BTreeMap::from([("total", Value::from(total))])
}

fn sample_draft() -> PostDraft {
    PostDraft {
        title: "Scaling AI agents".to_string(),
        image: "https://example.com/cover.jpg".to_string(),
        category_id: 2,
        description: "summary".to_string(),
        content: "body".to_string(),
        status_id: 2,
    }
}

fn draft_bind_values() -> Vec<Value> {
    vec![
        Value::from("Scaling AI agents"),
        Value::from("https://example.com/cover.jpg"),
        Value::from(2),
        Value::from("summary"),
        Value::from("body"),
        Value::from(2),
    ]
}

#[tokio::test]
async fn test_find_by_id_maps_joined_row() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![vec![post_row(7, "Test Post")]])
        .into_connection();

    let store = PostgresPostStore::new(db);
    let post = store.find_by_id(7).await.unwrap().unwrap();

    assert_eq!(post.id, 7);
    assert_eq!(post.title, "Test Post");
    assert_eq!(post.category, "Tech");
    assert_eq!(post.status, "Published");
    assert_eq!(post.likes_count, 3);

    let log = store.db.into_transaction_log();
    assert_eq!(
        log,
        vec![Transaction::from_sql_and_values(
            DatabaseBackend::Postgres,
            &build_read_query(),
            [Value::from(7)],
        )]
    );
}

#[tokio::test]
async fn test_find_by_id_missing_returns_none() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![Vec::<BTreeMap<&'static str, Value>>::new()])
        .into_connection();

    let store = PostgresPostStore::new(db);
    assert!(store.find_by_id(99).await.unwrap().is_none());
}

#[tokio::test]
async fn test_insert_binds_six_columns() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_exec_results(vec![MockExecResult {
            last_insert_id: 1,
            rows_affected: 1,
        }])
        .into_connection();

    let store = PostgresPostStore::new(db);
    store.insert(&sample_draft()).await.unwrap();

    let log = store.db.into_transaction_log();
    assert_eq!(
        log,
        vec![Transaction::from_sql_and_values(
            DatabaseBackend::Postgres,
            INSERT_POST,
            draft_bind_values(),
        )]
    );
}

#[tokio::test]
async fn test_update_binds_id_last_and_refreshes_date() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_exec_results(vec![MockExecResult {
            last_insert_id: 0,
            rows_affected: 1,
        }])
        .into_connection();

    let store = PostgresPostStore::new(db);
    store.update(7, &sample_draft()).await.unwrap();

    assert!(UPDATE_POST.contains("date = NOW()"));

    let mut values = draft_bind_values();
    values.push(Value::from(7));
    let log = store.db.into_transaction_log();
    assert_eq!(
        log,
        vec![Transaction::from_sql_and_values(
            DatabaseBackend::Postgres,
            UPDATE_POST,
            values,
        )]
    );
}

#[tokio::test]
async fn test_update_zero_rows_is_not_found() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_exec_results(vec![MockExecResult {
            last_insert_id: 0,
            rows_affected: 0,
        }])
        .into_connection();

    let store = PostgresPostStore::new(db);
    let err = store.update(99, &sample_draft()).await.unwrap_err();
    assert!(matches!(err, StoreError::NotFound));
}

#[tokio::test]
async fn test_delete_by_id() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_exec_results(vec![MockExecResult {
            last_insert_id: 0,
            rows_affected: 1,
        }])
        .into_connection();

    let store = PostgresPostStore::new(db);
    store.delete(7).await.unwrap();

    let log = store.db.into_transaction_log();
    assert_eq!(
        log,
        vec![Transaction::from_sql_and_values(
            DatabaseBackend::Postgres,
            DELETE_POST,
            [Value::from(7)],
        )]
    );
}

#[tokio::test]
async fn test_delete_zero_rows_is_not_found() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_exec_results(vec![MockExecResult {
            last_insert_id: 0,
            rows_affected: 0,
        }])
        .into_connection();

    let store = PostgresPostStore::new(db);
    let err = store.delete(99).await.unwrap_err();
    assert!(matches!(err, StoreError::NotFound));
}

#[tokio::test]
async fn test_list_runs_data_then_count_with_shared_filter_params() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![vec![post_row(12, "Newest"), post_row(11, "Older")]])
        .append_query_results(vec![vec![count_row(12)]])
        .into_connection();

    let store = PostgresPostStore::new(db);
    let filter = ListFilter::new(Some("Tech".into()), Some("AI".into()));
    let bounds = PageBounds::new(Some(2), Some(6));

    let (posts, total) = store.list(&filter, &bounds).await.unwrap();
    assert_eq!(total, 12);
    assert_eq!(posts.len(), 2);
    assert_eq!(posts[0].id, 12);

    let query = build_list_query(&filter, &bounds);
    let filter_values: Vec<Value> = query
        .filter_params
        .iter()
        .cloned()
        .map(Value::from)
        .collect();
    let mut data_values = filter_values.clone();
    data_values.push(Value::from(6i64));
    data_values.push(Value::from(6i64));

    // Data statement binds limit and offset as the last two parameters;
    // the count statement binds the filter params only.
    let log = store.db.into_transaction_log();
    assert_eq!(
        log,
        vec![
            Transaction::from_sql_and_values(
                DatabaseBackend::Postgres,
                &query.data_sql,
                data_values,
            ),
            Transaction::from_sql_and_values(
                DatabaseBackend::Postgres,
                &query.count_sql,
                filter_values,
            ),
        ]
    );
}

#[tokio::test]
async fn test_list_without_rows_counts_zero() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![Vec::<BTreeMap<&'static str, Value>>::new()])
        .append_query_results(vec![vec![count_row(0)]])
        .into_connection();

    let store = PostgresPostStore::new(db);
    let (posts, total) = store
        .list(&ListFilter::default(), &PageBounds::new(None, None))
        .await
        .unwrap();
    assert!(posts.is_empty());
    assert_eq!(total, 0);
}

#[tokio::test]
async fn test_query_failure_maps_to_store_error() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_errors(vec![DbErr::Custom("connection reset".to_string())])
        .into_connection();

    let store = PostgresPostStore::new(db);
    let err = store.find_by_id(1).await.unwrap_err();
    assert!(matches!(err, StoreError::Query(_)));
}
