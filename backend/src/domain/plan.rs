//! Bookable plan catalogue entries.
//!
//! Plans are read-only from the core's point of view: they are loaded by the
//! catalogue seed and looked up when pricing reservations.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Longest name or keyword a plan may carry, in characters.
pub const PLAN_TEXT_MAX: usize = 255;

/// Validation errors raised by [`Plan::new`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlanValidationError {
    #[error("plan name must not be empty")]
    EmptyName,
    #[error("plan {field} must be at most {max} characters")]
    TooLong { field: &'static str, max: usize },
    #[error("plan price must not be negative (got {price})")]
    NegativePrice { price: i64 },
}

/// Integer identifier of a catalogue plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlanId(i64);

impl PlanId {
    /// Wrap a raw identifier.
    #[must_use]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Raw integer value.
    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for PlanId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Input payload for [`Plan::new`].
#[derive(Debug, Clone)]
pub struct PlanDraft {
    pub id: PlanId,
    pub name: String,
    pub keyword: String,
    pub price: i64,
}

/// A bookable plan with a per-guest, per-night price.
///
/// ## Invariants
/// - `name` is non-empty and at most [`PLAN_TEXT_MAX`] characters.
/// - `keyword` is at most [`PLAN_TEXT_MAX`] characters and may be empty.
/// - `price` is non-negative.
///
/// # Examples
/// ```
/// use booking::domain::{Plan, PlanDraft, PlanId};
///
/// let plan = Plan::new(PlanDraft {
///     id: PlanId::new(175),
///     name: "サウスベーシック".to_owned(),
///     keyword: "サウス 南".to_owned(),
///     price: 8000,
/// })
/// .expect("valid plan");
/// assert_eq!(plan.price(), 8000);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plan {
    id: PlanId,
    name: String,
    keyword: String,
    price: i64,
}

impl Plan {
    /// Validate a draft into a plan.
    pub fn new(draft: PlanDraft) -> Result<Self, PlanValidationError> {
        let PlanDraft {
            id,
            name,
            keyword,
            price,
        } = draft;

        if name.trim().is_empty() {
            return Err(PlanValidationError::EmptyName);
        }
        if name.chars().count() > PLAN_TEXT_MAX {
            return Err(PlanValidationError::TooLong {
                field: "name",
                max: PLAN_TEXT_MAX,
            });
        }
        if keyword.chars().count() > PLAN_TEXT_MAX {
            return Err(PlanValidationError::TooLong {
                field: "keyword",
                max: PLAN_TEXT_MAX,
            });
        }
        if price < 0 {
            return Err(PlanValidationError::NegativePrice { price });
        }

        Ok(Self {
            id,
            name,
            keyword,
            price,
        })
    }

    pub fn id(&self) -> PlanId {
        self.id
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Space separated search terms.
    pub fn keyword(&self) -> &str {
        self.keyword.as_str()
    }

    /// Price per guest per night.
    pub fn price(&self) -> i64 {
        self.price
    }
}

/// Normalised plan search request.
///
/// A blank keyword selects the whole catalogue; anything else is trimmed,
/// lowercased and matched as a substring of the plan name or keyword.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlanSearch {
    All,
    Containing(String),
}

impl PlanSearch {
    /// Build a search from raw user input.
    ///
    /// # Examples
    /// ```
    /// use booking::domain::PlanSearch;
    ///
    /// assert_eq!(PlanSearch::from_keyword("   "), PlanSearch::All);
    /// assert_eq!(
    ///     PlanSearch::from_keyword(" South "),
    ///     PlanSearch::Containing("south".to_owned())
    /// );
    /// ```
    pub fn from_keyword(keyword: &str) -> Self {
        let trimmed = keyword.trim();
        if trimmed.is_empty() {
            Self::All
        } else {
            Self::Containing(trimmed.to_lowercase())
        }
    }

    /// Whether `plan` belongs in the result set.
    pub fn matches(&self, plan: &Plan) -> bool {
        match self {
            Self::All => true,
            Self::Containing(needle) => {
                plan.name().to_lowercase().contains(needle.as_str())
                    || plan.keyword().to_lowercase().contains(needle.as_str())
            }
        }
    }
}
