//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use actix_web::web;
use chrono::{NaiveDate, TimeZone, Utc};

use crate::domain::ports::{
    MockReservationCommand, MockReservationQuery, MockUserCommand, MockUserQuery,
};
use crate::domain::{
    ContactDetails, GuestCount, NewReservation, NewUser, Plan, PlanDraft, PlanId, Reservation,
    ReservationId, StayDates, User, UserId, UserStatus,
};
use crate::inbound::http::state::HttpState;

pub const USER_ID: &str = "3fa85f64-5717-4562-b3fc-2c963f66afa6";

/// Mocked driving ports; set expectations before calling [`Self::into_state`].
#[derive(Default)]
pub struct MockPorts {
    pub reservations: MockReservationCommand,
    pub reservations_query: MockReservationQuery,
    pub users: MockUserCommand,
    pub users_query: MockUserQuery,
}

impl MockPorts {
    pub fn into_state(self) -> web::Data<HttpState> {
        web::Data::new(HttpState::new(
            Arc::new(self.reservations),
            Arc::new(self.reservations_query),
            Arc::new(self.users),
            Arc::new(self.users_query),
        ))
    }
}

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid calendar date")
}

pub fn plan(id: i64, name: &str, keyword: &str, price: i64) -> Plan {
    Plan::new(PlanDraft {
        id: PlanId::new(id),
        name: name.to_owned(),
        keyword: keyword.to_owned(),
        price,
    })
    .expect("valid plan")
}

/// Two guests on plan 100 (12000) for two nights.
pub fn reservation(id: i64) -> Reservation {
    let draft = NewReservation::priced(
        UserId::new(USER_ID).expect("valid user id"),
        &plan(100, "富士プレミアム", "富士 絶景", 12_000),
        GuestCount::new(2).expect("guests"),
        StayDates::new(date(2025, 10, 12), date(2025, 10, 14)).expect("ordered dates"),
    )
    .expect("total in range");
    Reservation::from_new(ReservationId::new(id).expect("positive id"), draft)
}

pub fn user(date_of_birth: Option<NaiveDate>) -> User {
    let contact = ContactDetails::new("Hanako", "hanako@example.com", "090-0000-0000", "Tokyo")
        .expect("valid contact");
    User::from_new(
        UserId::new(USER_ID).expect("valid user id"),
        NewUser {
            id: None,
            contact,
            date_of_birth,
            registered_at: Utc
                .with_ymd_and_hms(2025, 10, 1, 9, 30, 0)
                .single()
                .expect("unambiguous timestamp"),
            status: UserStatus::active(),
        },
    )
}
