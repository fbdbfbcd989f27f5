//! Startup seeding of the plan catalogue.

use thiserror::Error;
use tracing::info;

use crate::domain::PlanValidationError;
use crate::domain::ports::{PlanRepository, PlanRepositoryError};
use crate::settings::AppSettings;

use super::default_catalogue;

/// Errors returned while seeding plans.
#[derive(Debug, Error)]
pub enum CatalogueSeedError {
    #[error("built-in catalogue is invalid: {0}")]
    Catalogue(#[from] PlanValidationError),
    #[error("plan seeding failed: {0}")]
    Repository(#[from] PlanRepositoryError),
}

/// What the startup seed did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedOutcome {
    Disabled,
    AlreadyPopulated { existing: i64 },
    Applied { inserted: usize },
}

/// Insert the built-in catalogue when enabled and the plans table is empty.
pub async fn seed_plans_on_startup<P>(
    settings: &AppSettings,
    plans: &P,
) -> Result<SeedOutcome, CatalogueSeedError>
where
    P: PlanRepository + ?Sized,
{
    if !settings.seed_plans {
        info!(reason = "disabled", "plan seeding skipped");
        return Ok(SeedOutcome::Disabled);
    }

    let existing = plans.count().await?;
    if existing > 0 {
        info!(existing, "plan catalogue already populated; skipping seed");
        return Ok(SeedOutcome::AlreadyPopulated { existing });
    }

    let catalogue = default_catalogue()?;
    plans.insert_all(&catalogue).await?;
    info!(inserted = catalogue.len(), "plan catalogue seeded");
    Ok(SeedOutcome::Applied {
        inserted: catalogue.len(),
    })
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::domain::PlanSearch;
    use crate::domain::ports::MockPlanRepository;
    use crate::outbound::memory::MemoryPlanRepository;

    fn settings(seed_plans: bool) -> AppSettings {
        AppSettings {
            in_memory: true,
            seed_plans,
        }
    }

    #[rstest]
    #[tokio::test]
    async fn empty_catalogue_is_seeded_in_id_order() {
        let repo = MemoryPlanRepository::default();

        let outcome = seed_plans_on_startup(&settings(true), &repo)
            .await
            .expect("seed succeeds");

        assert_eq!(outcome, SeedOutcome::Applied { inserted: 3 });
        let plans = repo.search(&PlanSearch::All).await.expect("search");
        let ids: Vec<i64> = plans.iter().map(|plan| plan.id().get()).collect();
        assert_eq!(ids, vec![100, 175, 200]);
    }

    #[rstest]
    #[tokio::test]
    async fn populated_catalogue_is_left_alone() {
        let mut repo = MockPlanRepository::new();
        repo.expect_count().times(1).returning(|| Ok(1));
        repo.expect_insert_all().times(0);

        let outcome = seed_plans_on_startup(&settings(true), &repo)
            .await
            .expect("seed succeeds");

        assert_eq!(outcome, SeedOutcome::AlreadyPopulated { existing: 1 });
    }

    #[rstest]
    #[tokio::test]
    async fn disabled_seed_does_not_touch_storage() {
        let mut repo = MockPlanRepository::new();
        repo.expect_count().times(0);

        let outcome = seed_plans_on_startup(&settings(false), &repo)
            .await
            .expect("seed succeeds");

        assert_eq!(outcome, SeedOutcome::Disabled);
    }

    #[rstest]
    #[tokio::test]
    async fn repository_failures_propagate() {
        let mut repo = MockPlanRepository::new();
        repo.expect_count()
            .returning(|| Err(PlanRepositoryError::connection("refused")));

        let err = seed_plans_on_startup(&settings(true), &repo)
            .await
            .expect_err("seed fails");

        assert!(matches!(err, CatalogueSeedError::Repository(_)));
    }
}
