//! Built-in plan catalogue and the startup routine that loads it.

mod startup;

pub use startup::{CatalogueSeedError, SeedOutcome, seed_plans_on_startup};

use crate::domain::{Plan, PlanDraft, PlanId, PlanValidationError};

const CATALOGUE: [(i64, &str, &str, i64); 3] = [
    (100, "富士プレミアム", "富士 山 静岡", 12_000),
    (175, "サウスベーシック", "サウス 南", 8_000),
    (200, "北の宿", "北海道 北", 10_000),
];

/// The plans every fresh installation starts with.
///
/// # Examples
/// ```
/// let plans = booking::catalogue_seed::default_catalogue().expect("valid catalogue");
/// assert_eq!(plans.len(), 3);
/// ```
pub fn default_catalogue() -> Result<Vec<Plan>, PlanValidationError> {
    CATALOGUE
        .iter()
        .map(|&(id, name, keyword, price)| {
            Plan::new(PlanDraft {
                id: PlanId::new(id),
                name: name.to_owned(),
                keyword: keyword.to_owned(),
                price,
            })
        })
        .collect()
}
