//! PostgreSQL post store.
//!
//! Runs the parameterized statements assembled by the core query builder
//! over a shared SeaORM connection pool. Mutations are single direct
//! statements; zero affected rows on update/delete maps to `NotFound`.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::{ConnectionTrait, DbBackend, DbConn, DbErr, FromQueryResult, Statement, Value};

use quill_core::domain::{Post, PostDraft};
use quill_core::error::StoreError;
use quill_core::pagination::PageBounds;
use quill_core::ports::PostStore;
use quill_core::query::{ListFilter, build_list_query, build_read_query};

pub(crate) const INSERT_POST: &str = "INSERT INTO posts \
     (title, image, category_id, description, content, status_id) \
     VALUES ($1, $2, $3, $4, $5, $6)";

pub(crate) const UPDATE_POST: &str = "UPDATE posts \
     SET title = $1, image = $2, category_id = $3, description = $4, \
     content = $5, status_id = $6, date = NOW() \
     WHERE id = $7";

pub(crate) const DELETE_POST: &str = "DELETE FROM posts WHERE id = $1";

/// Post store backed by PostgreSQL.
pub struct PostgresPostStore {
    pub(crate) db: DbConn,
}

impl PostgresPostStore {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }
}

/// Row of the joined list/read projection.
#[derive(Debug, FromQueryResult)]
struct PostRow {
    id: i32,
    image: String,
    category: String,
    title: String,
    description: String,
    date: DateTime<Utc>,
    content: String,
    status: String,
    likes_count: i32,
}

impl From<PostRow> for Post {
    fn from(row: PostRow) -> Self {
        Self {
            id: row.id,
            image: row.image,
            category: row.category,
            title: row.title,
            description: row.description,
            date: row.date,
            content: row.content,
            status: row.status,
            likes_count: row.likes_count,
        }
    }
}

#[derive(Debug, FromQueryResult)]
struct CountRow {
    total: i64,
}

fn store_err(err: DbErr) -> StoreError {
    match &err {
        DbErr::Conn(_) | DbErr::ConnectionAcquire(_) => StoreError::Connection(err.to_string()),
        _ => StoreError::Query(err.to_string()),
    }
}

/// The six client-supplied columns, in statement order.
fn draft_values(draft: &PostDraft) -> Vec<Value> {
    vec![
        draft.title.clone().into(),
        draft.image.clone().into(),
        draft.category_id.into(),
        draft.description.clone().into(),
        draft.content.clone().into(),
        draft.status_id.into(),
    ]
}

#[async_trait]
impl PostStore for PostgresPostStore {
    async fn insert(&self, draft: &PostDraft) -> Result<(), StoreError> {
        let stmt =
            Statement::from_sql_and_values(DbBackend::Postgres, INSERT_POST, draft_values(draft));
        self.db.execute(stmt).await.map_err(store_err)?;
        Ok(())
    }

    async fn update(&self, id: i32, draft: &PostDraft) -> Result<(), StoreError> {
        let mut values = draft_values(draft);
        values.push(id.into());

        let stmt = Statement::from_sql_and_values(DbBackend::Postgres, UPDATE_POST, values);
        let result = self.db.execute(stmt).await.map_err(store_err)?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound);
        }
        Ok(())
    }

    async fn delete(&self, id: i32) -> Result<(), StoreError> {
        let stmt =
            Statement::from_sql_and_values(DbBackend::Postgres, DELETE_POST, [Value::from(id)]);
        let result = self.db.execute(stmt).await.map_err(store_err)?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound);
        }
        Ok(())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Post>, StoreError> {
        let stmt = Statement::from_sql_and_values(
            DbBackend::Postgres,
            build_read_query(),
            [Value::from(id)],
        );

        let row = PostRow::find_by_statement(stmt)
            .one(&self.db)
            .await
            .map_err(store_err)?;

        Ok(row.map(Into::into))
    }

    async fn list(
        &self,
        filter: &ListFilter,
        bounds: &PageBounds,
    ) -> Result<(Vec<Post>, u64), StoreError> {
        let query = build_list_query(filter, bounds);

        // Filter params bind $1..$n in both statements; limit and offset
        // are appended to the data statement only.
        let mut data_values: Vec<Value> =
            query.filter_params.iter().cloned().map(Value::from).collect();
        data_values.push(query.limit.into());
        data_values.push(query.offset.into());

        let rows = PostRow::find_by_statement(Statement::from_sql_and_values(
            DbBackend::Postgres,
            query.data_sql,
            data_values,
        ))
        .all(&self.db)
        .await
        .map_err(store_err)?;

        let count_values: Vec<Value> =
            query.filter_params.into_iter().map(Value::from).collect();

        let total = CountRow::find_by_statement(Statement::from_sql_and_values(
            DbBackend::Postgres,
            query.count_sql,
            count_values,
        ))
        .one(&self.db)
        .await
        .map_err(store_err)?
        .map(|row| row.total.max(0) as u64)
        .unwrap_or(0);

        Ok((rows.into_iter().map(Into::into).collect(), total))
    }
}
