//! Internal Diesel row structs for database operations.
//!
//! These types are implementation details of the persistence layer and never
//! reach the domain.

use chrono::{NaiveDate, NaiveDateTime};
use diesel::prelude::*;

use super::schema::{plans, reservations, users};

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = plans)]
#[diesel(check_for_backend(diesel::mysql::Mysql))]
pub(crate) struct PlanRow {
    pub id: i64,
    pub name: String,
    pub keyword: String,
    pub price: i64,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = plans)]
pub(crate) struct NewPlanRow<'a> {
    pub id: i64,
    pub name: &'a str,
    pub keyword: &'a str,
    pub price: i64,
}

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::mysql::Mysql))]
pub(crate) struct UserRow {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone_number: String,
    pub address: String,
    pub date_of_birth: Option<NaiveDate>,
    pub registered_at: NaiveDateTime,
    pub status: String,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = users)]
pub(crate) struct NewUserRow<'a> {
    pub id: &'a str,
    pub name: &'a str,
    pub email: &'a str,
    pub phone_number: &'a str,
    pub address: &'a str,
    pub date_of_birth: Option<NaiveDate>,
    pub registered_at: NaiveDateTime,
    pub status: &'a str,
}

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = reservations)]
#[diesel(check_for_backend(diesel::mysql::Mysql))]
pub(crate) struct ReservationRow {
    pub id: i64,
    pub user_id: String,
    pub plan_id: i64,
    pub number: i64,
    pub checkin: NaiveDate,
    pub checkout: NaiveDate,
    pub total: i64,
}

/// Insertable reservation; `id` comes from `AUTO_INCREMENT`.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = reservations)]
pub(crate) struct NewReservationRow<'a> {
    pub user_id: &'a str,
    pub plan_id: i64,
    pub number: i64,
    pub checkin: NaiveDate,
    pub checkout: NaiveDate,
    pub total: i64,
}
