//! MySQL-backed `PlanRepository` implementation using Diesel ORM.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel::sql_types::Text;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{PlanRepository, PlanRepositoryError};
use crate::domain::{Plan, PlanDraft, PlanId, PlanSearch};

use super::diesel_basic_error_mapping::{map_basic_diesel_error, map_basic_pool_error};
use super::models::{NewPlanRow, PlanRow};
use super::pool::{DbPool, PoolError};
use super::schema::plans;

const LIKE_ESCAPE: char = '!';

diesel::define_sql_function!(fn lower(x: Text) -> Text);

/// Diesel-backed implementation of the plan repository port.
#[derive(Clone)]
pub struct DieselPlanRepository {
    pool: DbPool,
}

impl DieselPlanRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> PlanRepositoryError {
    map_basic_pool_error(error, PlanRepositoryError::connection)
}

fn map_diesel_error(error: diesel::result::Error) -> PlanRepositoryError {
    map_basic_diesel_error(
        error,
        PlanRepositoryError::query,
        PlanRepositoryError::connection,
    )
}

fn row_to_plan(row: PlanRow) -> Result<Plan, PlanRepositoryError> {
    let PlanRow {
        id,
        name,
        keyword,
        price,
    } = row;
    Plan::new(PlanDraft {
        id: PlanId::new(id),
        name,
        keyword,
        price,
    })
    .map_err(|err| PlanRepositoryError::query(format!("invalid plan row {id}: {err}")))
}

/// Build a `LIKE` pattern matching `needle` anywhere, with wildcards in the
/// needle escaped.
pub(crate) fn contains_pattern(needle: &str) -> String {
    let mut pattern = String::with_capacity(needle.len() + 2);
    pattern.push('%');
    for ch in needle.chars() {
        if matches!(ch, '%' | '_' | LIKE_ESCAPE) {
            pattern.push(LIKE_ESCAPE);
        }
        pattern.push(ch);
    }
    pattern.push('%');
    pattern
}

#[async_trait]
impl PlanRepository for DieselPlanRepository {
    async fn find_by_id(&self, id: PlanId) -> Result<Option<Plan>, PlanRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row = plans::table
            .find(id.get())
            .select(PlanRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;
        row.map(row_to_plan).transpose()
    }

    async fn search(&self, search: &PlanSearch) -> Result<Vec<Plan>, PlanRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let mut query = plans::table
            .select(PlanRow::as_select())
            .order(plans::id.asc())
            .into_boxed();

        if let PlanSearch::Containing(needle) = search {
            let pattern = contains_pattern(needle);
            query = query.filter(
                lower(plans::name)
                    .like(pattern.clone())
                    .escape(LIKE_ESCAPE)
                    .or(lower(plans::keyword).like(pattern).escape(LIKE_ESCAPE)),
            );
        }

        let rows = query.load(&mut conn).await.map_err(map_diesel_error)?;
        rows.into_iter().map(row_to_plan).collect()
    }

    async fn count(&self) -> Result<i64, PlanRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        plans::table
            .count()
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)
    }

    async fn insert_all(&self, catalogue: &[Plan]) -> Result<(), PlanRepositoryError> {
        if catalogue.is_empty() {
            return Ok(());
        }
        let rows: Vec<NewPlanRow<'_>> = catalogue
            .iter()
            .map(|plan| NewPlanRow {
                id: plan.id().get(),
                name: plan.name(),
                keyword: plan.keyword(),
                price: plan.price(),
            })
            .collect();

        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        diesel::insert_into(plans::table)
            .values(&rows)
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(map_diesel_error)
    }
}
