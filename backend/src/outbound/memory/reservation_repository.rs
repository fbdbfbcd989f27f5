//! In-memory reservation store with id allocation under the write lock.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::ports::{ReservationRepository, ReservationRepositoryError};
use crate::domain::{NewReservation, Reservation, ReservationId};

#[derive(Debug, Default)]
struct State {
    last_id: i64,
    rows: BTreeMap<ReservationId, Reservation>,
}

/// Reservations keyed by id. Ids start at 1 and are never reused.
#[derive(Debug, Default)]
pub struct MemoryReservationRepository {
    state: RwLock<State>,
}

#[async_trait]
impl ReservationRepository for MemoryReservationRepository {
    async fn save(
        &self,
        reservation: &NewReservation,
    ) -> Result<Reservation, ReservationRepositoryError> {
        let mut state = self.state.write().await;
        let next = state
            .last_id
            .checked_add(1)
            .ok_or_else(|| ReservationRepositoryError::query("reservation ids exhausted"))?;
        let id = ReservationId::new(next)
            .map_err(|err| ReservationRepositoryError::query(err.to_string()))?;
        let saved = Reservation::from_new(id, reservation.clone());
        state.last_id = next;
        state.rows.insert(id, saved.clone());
        Ok(saved)
    }

    async fn find_by_id(
        &self,
        id: ReservationId,
    ) -> Result<Option<Reservation>, ReservationRepositoryError> {
        Ok(self.state.read().await.rows.get(&id).cloned())
    }

    async fn list(&self) -> Result<Vec<Reservation>, ReservationRepositoryError> {
        Ok(self.state.read().await.rows.values().cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;
    use std::sync::Arc;

    use chrono::NaiveDate;

    use super::*;
    use crate::domain::{GuestCount, Plan, PlanDraft, PlanId, StayDates, UserId};

    fn draft() -> NewReservation {
        let plan = Plan::new(PlanDraft {
            id: PlanId::new(100),
            name: "富士プレミアム".to_owned(),
            keyword: String::new(),
            price: 12_000,
        })
        .expect("valid plan");
        let stay = StayDates::new(
            NaiveDate::from_ymd_opt(2025, 10, 12).expect("date"),
            NaiveDate::from_ymd_opt(2025, 10, 13).expect("date"),
        )
        .expect("ordered dates");
        NewReservation::priced(
            UserId::random(),
            &plan,
            GuestCount::new(1).expect("guests"),
            stay,
        )
        .expect("in range")
    }

    #[tokio::test]
    async fn save_assigns_sequential_ids() {
        let repo = MemoryReservationRepository::default();

        let first = repo.save(&draft()).await.expect("save");
        let second = repo.save(&draft()).await.expect("save");

        assert_eq!(first.id().get(), 1);
        assert_eq!(second.id().get(), 2);
        let found = repo.find_by_id(second.id()).await.expect("lookup");
        assert_eq!(found, Some(second));
    }

    #[tokio::test]
    async fn list_is_ascending_by_id() {
        let repo = MemoryReservationRepository::default();
        for _ in 0..3 {
            repo.save(&draft()).await.expect("save");
        }

        let listed = repo.list().await.expect("list");

        let ids: Vec<i64> = listed.iter().map(|r| r.id().get()).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_saves_never_share_an_id() {
        let repo = Arc::new(MemoryReservationRepository::default());
        let handles: Vec<_> = (0..32)
            .map(|_| {
                let repo = Arc::clone(&repo);
                tokio::spawn(async move { repo.save(&draft()).await })
            })
            .collect();

        let mut ids = BTreeSet::new();
        for handle in handles {
            let saved = handle.await.expect("task joined").expect("save");
            ids.insert(saved.id().get());
        }

        assert_eq!(ids.len(), 32);
        assert_eq!(ids.first(), Some(&1));
        assert_eq!(ids.last(), Some(&32));
    }
}
