//! List query builder.
//!
//! Builds the paired data/count statements for `GET /posts`. Both statements
//! are produced from one [`PredicateBuilder`] pass, so their filter
//! predicates cannot drift apart. Limit and offset carry named roles on
//! [`ListQuery`] and are bound as the last two parameters of the data
//! statement only.

use crate::pagination::PageBounds;

/// Optional list filters, normalized so blank values count as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListFilter {
    pub category: Option<String>,
    pub keyword: Option<String>,
}

impl ListFilter {
    pub fn new(category: Option<String>, keyword: Option<String>) -> Self {
        Self {
            category: normalize(category),
            keyword: normalize(keyword),
        }
    }
}

fn normalize(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_owned())
        .filter(|v| !v.is_empty())
}

const SELECT_POSTS: &str = "SELECT posts.id, posts.image, categories.name AS category, \
     posts.title, posts.description, posts.date, posts.content, \
     statuses.status, posts.likes_count \
     FROM posts \
     INNER JOIN categories ON posts.category_id = categories.id \
     INNER JOIN statuses ON posts.status_id = statuses.id";

const SELECT_COUNT: &str = "SELECT COUNT(*) AS total \
     FROM posts \
     INNER JOIN categories ON posts.category_id = categories.id \
     INNER JOIN statuses ON posts.status_id = statuses.id";

/// A data/count statement pair over one shared predicate.
///
/// `filter_params` bind `$1..$n` in both statements; `limit` and `offset`
/// bind `$n+1` and `$n+2` in the data statement and nowhere else.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery {
    pub data_sql: String,
    pub count_sql: String,
    pub filter_params: Vec<String>,
    pub limit: i64,
    pub offset: i64,
}

/// Single-post read statement, sharing the list projection and joins.
/// Binds the post id as `$1`.
pub fn build_read_query() -> String {
    format!("{SELECT_POSTS} WHERE posts.id = $1")
}

/// Ordered clause/parameter accumulator. Placeholders are numbered as
/// parameters are bound, keeping clause text and bind order in lockstep.
#[derive(Default)]
struct PredicateBuilder {
    clauses: Vec<String>,
    params: Vec<String>,
}

impl PredicateBuilder {
    fn bind(&mut self, param: String) -> String {
        self.params.push(param);
        format!("${}", self.params.len())
    }

    fn push(&mut self, clause: String) {
        self.clauses.push(clause);
    }

    fn where_clause(&self) -> String {
        if self.clauses.is_empty() {
            String::new()
        } else {
            format!(" WHERE {}", self.clauses.join(" AND "))
        }
    }
}

/// Assemble the list statement pair for the given filters and bounds.
///
/// Four filter cases: both category and keyword, either alone, or neither.
/// Category matches the joined category name; keyword matches title,
/// description, or content. All matches are case-insensitive substrings.
pub fn build_list_query(filter: &ListFilter, bounds: &PageBounds) -> ListQuery {
    let mut predicate = PredicateBuilder::default();

    if let Some(category) = &filter.category {
        let name = predicate.bind(format!("%{category}%"));
        predicate.push(format!("categories.name ILIKE {name}"));
    }

    if let Some(keyword) = &filter.keyword {
        let title = predicate.bind(format!("%{keyword}%"));
        let description = predicate.bind(format!("%{keyword}%"));
        let content = predicate.bind(format!("%{keyword}%"));
        predicate.push(format!(
            "(posts.title ILIKE {title} OR posts.description ILIKE {description} \
             OR posts.content ILIKE {content})"
        ));
    }

    let where_clause = predicate.where_clause();
    let next = predicate.params.len() + 1;
    let data_sql = format!(
        "{SELECT_POSTS}{where_clause} ORDER BY posts.date DESC LIMIT ${next} OFFSET ${}",
        next + 1
    );
    let count_sql = format!("{SELECT_COUNT}{where_clause}");

    ListQuery {
        data_sql,
        count_sql,
        filter_params: predicate.params,
        limit: bounds.limit as i64,
        offset: bounds.offset() as i64,
    }
}
