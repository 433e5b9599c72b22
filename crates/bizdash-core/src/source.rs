//! Data source collaborator and the query result a list view renders.

use bizdash_types::{Identified, Searchable};

use crate::presenter::FetchFlags;
use crate::query::{QueryParams, QueryState};
use crate::{Error, Result};

/// One page of rows as served by a data source.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<Row> {
    pub rows: Vec<Row>,
    /// Matching rows across all pages
    pub total: usize,
    pub has_more: bool,
}

/// Supplies rows for a query. Transport is the implementor's business.
pub trait DataSource<Row> {
    fn fetch(&self, params: &QueryParams) -> Result<Page<Row>>;
}

/// What a list view renders: the rows plus the flags of the request that produced them.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryResult<Row> {
    pub data: Vec<Row>,
    pub flags: FetchFlags,
    pub total: usize,
}

impl<Row> QueryResult<Row> {
    pub fn pending() -> Self {
        Self {
            data: Vec::new(),
            flags: FetchFlags::loading(),
            total: 0,
        }
    }

    pub fn failed() -> Self {
        Self {
            data: Vec::new(),
            flags: FetchFlags::error(),
            total: 0,
        }
    }

    /// Same rows, marked as being refetched.
    pub fn refetching(mut self) -> Self {
        self.flags.is_fetching = true;
        self
    }
}

impl<Row> Default for QueryResult<Row> {
    fn default() -> Self {
        Self::pending()
    }
}

/// Run `query` against `source`, driving the query's loading flags.
///
/// Fetch errors collapse into `is_error`; the detail is only logged.
pub fn load<Row, S>(source: &S, query: &mut QueryState) -> QueryResult<Row>
where
    S: DataSource<Row> + ?Sized,
{
    query.begin_fetch();
    match source.fetch(&query.params()) {
        Ok(page) => {
            query.finish_fetch(page.has_more);
            QueryResult {
                data: page.rows,
                flags: FetchFlags::idle(),
                total: page.total,
            }
        }
        Err(err) => {
            tracing::warn!(error = %err, "fetch failed");
            query.fail_fetch();
            QueryResult::failed()
        }
    }
}

/// Rows held in memory, searched and paged on request.
#[derive(Debug, Clone, Default)]
pub struct MemorySource<Row> {
    rows: Vec<Row>,
}

impl<Row> MemorySource<Row>
where
    Row: Identified + Searchable + Clone,
{
    pub fn new(rows: Vec<Row>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn into_rows(self) -> Vec<Row> {
        self.rows
    }

    pub fn get(&self, id: &Row::Id) -> Option<&Row> {
        self.rows.iter().find(|row| row.id() == id)
    }

    pub fn remove(&mut self, id: &Row::Id) -> Result<Row> {
        let pos = self
            .rows
            .iter()
            .position(|row| row.id() == id)
            .ok_or_else(|| Error::NotFound(id.to_string()))?;
        Ok(self.rows.remove(pos))
    }

    pub fn update<F, T>(&mut self, id: &Row::Id, apply: F) -> Result<T>
    where
        F: FnOnce(&mut Row) -> T,
    {
        let row = self
            .rows
            .iter_mut()
            .find(|row| row.id() == id)
            .ok_or_else(|| Error::NotFound(id.to_string()))?;
        Ok(apply(row))
    }
}

impl<Row> DataSource<Row> for MemorySource<Row>
where
    Row: Identified + Searchable + Clone,
{
    fn fetch(&self, params: &QueryParams) -> Result<Page<Row>> {
        let matching: Vec<&Row> = self
            .rows
            .iter()
            .filter(|row| row.matches(&params.search))
            .collect();
        let total = matching.len();
        let offset = params.offset();
        let rows: Vec<Row> = matching
            .into_iter()
            .skip(offset)
            .take(params.size as usize)
            .cloned()
            .collect();

        Ok(Page {
            has_more: offset + rows.len() < total,
            rows,
            total,
        })
    }
}
