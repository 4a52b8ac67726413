//! Strategy registry
//!
//! Strategies are plain functions registered under a name. The CLI looks
//! them up by name; nothing constructs them.

use super::rules;
use crate::core::Candidates;
use rand::RngCore;
use rustc_hash::FxHashMap;
use std::fmt;
use std::sync::LazyLock;
use thiserror::Error;

/// A decision rule: picks a member of the candidates, `None` if empty
pub type ChooseFn = fn(&Candidates, &mut dyn RngCore) -> Option<u8>;

/// A named decision rule
pub struct Strategy {
    pub name: &'static str,
    pub aliases: &'static [&'static str],
    pub description: &'static str,
    choose: ChooseFn,
}

impl Strategy {
    /// Pick the field to fold for this turn
    #[inline]
    pub fn choose(&self, candidates: &Candidates, rng: &mut dyn RngCore) -> Option<u8> {
        (self.choose)(candidates, rng)
    }
}

impl fmt::Debug for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Strategy").field("name", &self.name).finish()
    }
}

impl PartialEq for Strategy {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

/// Every registered strategy, in listing order
pub static STRATEGIES: [Strategy; 4] = [
    Strategy {
        name: "min_prob",
        aliases: &["min-probability", "minprobability"],
        description: "fold the number least likely to come up again",
        choose: rules::min_probability,
    },
    Strategy {
        name: "min_die",
        aliases: &["min-value"],
        description: "fold the smallest number",
        choose: rules::min_value,
    },
    Strategy {
        name: "max_die",
        aliases: &["max-value"],
        description: "fold the largest number",
        choose: rules::max_value,
    },
    Strategy {
        name: "rand_die",
        aliases: &["random"],
        description: "fold a random number",
        choose: rules::random_choice,
    },
];

/// Name used when none is given
pub const DEFAULT_STRATEGY: &str = "min_prob";

static BY_NAME: LazyLock<FxHashMap<&'static str, &'static Strategy>> = LazyLock::new(|| {
    let mut index = FxHashMap::default();
    for strategy in &STRATEGIES {
        index.insert(strategy.name, strategy);
        for &alias in strategy.aliases {
            index.insert(alias, strategy);
        }
    }
    index
});

/// Error for a strategy name that is not registered
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown strategy '{name}' (expected one of: {})", names().collect::<Vec<_>>().join(", "))]
pub struct UnknownStrategy {
    pub name: String,
}

/// Find a strategy by name or alias
///
/// # Errors
/// Returns `UnknownStrategy` if nothing is registered under `name`.
///
/// # Examples
/// ```
/// use mermaids_bar::strategy::lookup;
///
/// let strategy = lookup("max_die").unwrap();
/// assert_eq!(strategy.name, "max_die");
/// assert_eq!(lookup("random").unwrap().name, "rand_die");
/// assert!(lookup("always_seven").is_err());
/// ```
pub fn lookup(name: &str) -> Result<&'static Strategy, UnknownStrategy> {
    BY_NAME
        .get(name)
        .copied()
        .ok_or_else(|| UnknownStrategy {
            name: name.to_string(),
        })
}

/// Primary names of every strategy, in listing order
pub fn names() -> impl Iterator<Item = &'static str> {
    STRATEGIES.iter().map(|s| s.name)
}
