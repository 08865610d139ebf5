//! # Trigger Policy
//!
//! Decides whether a block break should start a vein search. Two conditions must hold:
//!
//! 1. The activation modifier is satisfied (held, unless the policy is set to `always`)
//! 2. The broken block is eligible: listed in the configured `vein_mineable` tag, or
//!    accepted by the name-based fallback predicate when that is enabled
//!
//! The fallback keeps vein mining usable when no tag has been configured.

use std::collections::HashSet;

use crate::config::{ActivationMode, VeinMinerConfig};

/// Registry path suffixes of block families that form veins.
const FALLBACK_SUFFIXES: [&str; 4] = ["_log", "_stem", "_hyphae", "_ore"];

/// Registry paths that form veins without following the suffix convention.
static FALLBACK_ALLOW_LIST: phf::Set<&'static str> = phf::phf_set! {
    "ancient_debris",
};

/// Result of evaluating a break against the policy.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TriggerDecision {
    /// Start a vein search.
    Activate,
    /// The actor was not holding the activation modifier.
    ModifierNotHeld,
    /// The broken block is not a vein-mineable kind.
    NotEligible,
}

impl TriggerDecision {
    /// Whether the decision starts a search.
    pub fn should_activate(&self) -> bool {
        matches!(self, TriggerDecision::Activate)
    }
}

/// Name-based fallback eligibility test.
///
/// Looks only at the path part of a namespaced name, so `minecraft:oak_log` and
/// `othermod:oak_log` are treated alike.
///
/// ```
/// use vein_miner::vein::is_fallback_mineable;
///
/// assert!(is_fallback_mineable("minecraft:deepslate_iron_ore"));
/// assert!(is_fallback_mineable("minecraft:ancient_debris"));
/// assert!(!is_fallback_mineable("minecraft:stone"));
/// ```
pub fn is_fallback_mineable(name: &str) -> bool {
    let path = match name.split_once(':') {
        Some((_, path)) => path,
        None => name,
    };
    if path.is_empty() {
        return false;
    }
    FALLBACK_SUFFIXES.iter().any(|suffix| path.ends_with(suffix))
        || FALLBACK_ALLOW_LIST.contains(path)
}

/// Activation and eligibility rules for vein mining.
#[derive(Clone, Debug, Default)]
pub struct TriggerPolicy {
    activation: ActivationMode,
    tagged: HashSet<String>,
    fallback: bool,
}

impl TriggerPolicy {
    /// Creates a policy from explicit parts.
    ///
    /// Tag entries must be fully qualified names (`namespace:path`).
    pub fn new<I, S>(activation: ActivationMode, tagged: I, fallback: bool) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        TriggerPolicy {
            activation,
            tagged: tagged.into_iter().map(Into::into).collect(),
            fallback,
        }
    }

    /// Builds the policy described by a configuration.
    pub fn from_config(config: &VeinMinerConfig) -> Self {
        TriggerPolicy::new(
            config.activation,
            config.vein_mineable.block_names(),
            config.fallback_heuristic,
        )
    }

    /// Whether `name` is in the configured tag.
    pub fn in_tag(&self, name: &str) -> bool {
        self.tagged.contains(name)
    }

    /// Whether a block with this registry name may start a vein search.
    pub fn is_eligible(&self, name: &str) -> bool {
        self.in_tag(name) || (self.fallback && is_fallback_mineable(name))
    }

    /// Evaluates a break of block `name` by an actor whose modifier state is `modifier_held`.
    pub fn evaluate(&self, modifier_held: bool, name: &str) -> TriggerDecision {
        if self.activation == ActivationMode::Sneak && !modifier_held {
            return TriggerDecision::ModifierNotHeld;
        }
        if !self.is_eligible(name) {
            return TriggerDecision::NotEligible;
        }
        TriggerDecision::Activate
    }
}
