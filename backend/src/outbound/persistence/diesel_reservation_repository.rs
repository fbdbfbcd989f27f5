//! MySQL-backed `ReservationRepository` implementation using Diesel ORM.
//!
//! Ids come from the `AUTO_INCREMENT` column and are read back with
//! `LAST_INSERT_ID()` on the same connection.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel::sql_types::{BigInt, Unsigned};
use diesel_async::RunQueryDsl;

use crate::domain::ports::{ReservationRepository, ReservationRepositoryError};
use crate::domain::{
    NewReservation, PlanId, Reservation, ReservationId, StoredReservation, UserId,
};

use super::diesel_basic_error_mapping::{map_basic_diesel_error, map_basic_pool_error};
use super::models::{NewReservationRow, ReservationRow};
use super::pool::{DbPool, PoolError};
use super::schema::reservations;

diesel::define_sql_function!(fn last_insert_id() -> Unsigned<BigInt>);

/// Diesel-backed implementation of the reservation repository port.
#[derive(Clone)]
pub struct DieselReservationRepository {
    pool: DbPool,
}

impl DieselReservationRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> ReservationRepositoryError {
    map_basic_pool_error(error, ReservationRepositoryError::connection)
}

fn map_diesel_error(error: diesel::result::Error) -> ReservationRepositoryError {
    map_basic_diesel_error(
        error,
        ReservationRepositoryError::query,
        ReservationRepositoryError::connection,
    )
}

fn row_to_reservation(row: ReservationRow) -> Result<Reservation, ReservationRepositoryError> {
    let ReservationRow {
        id,
        user_id,
        plan_id,
        number,
        checkin,
        checkout,
        total,
    } = row;
    let invalid = |err: &dyn std::fmt::Display| {
        ReservationRepositoryError::query(format!("invalid reservation row {id}: {err}"))
    };
    let user_id = UserId::new(user_id).map_err(|err| invalid(&err))?;
    Reservation::from_stored(StoredReservation {
        id,
        user_id,
        plan_id: PlanId::new(plan_id),
        number,
        checkin,
        checkout,
        total,
    })
    .map_err(|err| invalid(&err))
}

#[async_trait]
impl ReservationRepository for DieselReservationRepository {
    async fn save(
        &self,
        reservation: &NewReservation,
    ) -> Result<Reservation, ReservationRepositoryError> {
        let stay = reservation.stay();
        let row = NewReservationRow {
            user_id: reservation.user_id().as_ref(),
            plan_id: reservation.plan_id().get(),
            number: reservation.guests().get(),
            checkin: stay.checkin(),
            checkout: stay.checkout(),
            total: reservation.total(),
        };

        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        diesel::insert_into(reservations::table)
            .values(&row)
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        let raw_id: u64 = diesel::select(last_insert_id())
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        let id = i64::try_from(raw_id)
            .ok()
            .and_then(|id| ReservationId::new(id).ok())
            .ok_or_else(|| {
                ReservationRepositoryError::query(format!("unusable reservation id {raw_id}"))
            })?;
        Ok(Reservation::from_new(id, reservation.clone()))
    }

    async fn find_by_id(
        &self,
        id: ReservationId,
    ) -> Result<Option<Reservation>, ReservationRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row = reservations::table
            .find(id.get())
            .select(ReservationRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;
        row.map(row_to_reservation).transpose()
    }

    async fn list(&self) -> Result<Vec<Reservation>, ReservationRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let rows = reservations::table
            .select(ReservationRow::as_select())
            .order(reservations::id.asc())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        rows.into_iter().map(row_to_reservation).collect()
    }
}
