//! The closed catalog of contract archetypes.
//!
//! Each archetype is a [`TemplateDescriptor`]: plain data naming its parameter
//! slots, the public operations the rendered contract guarantees, and the body
//! text. Lookup is by archetype id or alias; there is no per-archetype code
//! anywhere in the binder.

use serde::Serialize;

use crate::error::{DevkitError, Result};
use crate::templates::embedded;

/// Slot that every descriptor declares first; bound from the `name` argument.
pub const CONTRACT_NAME_SLOT: &str = "contract_name";

/// What a slot's value is substituted as, and therefore how it is checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SlotKind {
    /// Used in an identifier position (class name). Must be a Python identifier.
    Identifier,
    /// Used inside a string literal or f-string.
    Text,
    /// Used as a bare integer literal.
    Integer,
}

/// A named placeholder declared by a template.
#[derive(Debug, Clone, Serialize)]
pub struct ParamSlot {
    pub name: &'static str,
    pub kind: SlotKind,
    /// Value used when the caller supplies none. `None` makes the slot required.
    pub default: Option<&'static str>,
    pub description: &'static str,
}

/// An immutable archetype definition.
#[derive(Debug, Clone, Serialize)]
pub struct TemplateDescriptor {
    /// Canonical archetype id, e.g. `basic-storage`.
    pub id: &'static str,
    /// Alternative ids accepted on lookup.
    pub aliases: &'static [&'static str],
    pub version: &'static str,
    pub description: &'static str,
    /// Declared slots, in declaration order.
    pub slots: &'static [ParamSlot],
    /// Public methods every rendered contract exposes.
    pub operations: &'static [&'static str],
    #[serde(skip)]
    pub body: &'static str,
}

impl TemplateDescriptor {
    /// Whether `id` names this descriptor, either canonically or by alias.
    pub fn matches(&self, id: &str) -> bool {
        self.id == id || self.aliases.contains(&id)
    }

    /// Look up a declared slot by name.
    pub fn slot(&self, name: &str) -> Option<&ParamSlot> {
        self.slots.iter().find(|s| s.name == name)
    }
}

const CONTRACT_NAME: ParamSlot = ParamSlot {
    name: CONTRACT_NAME_SLOT,
    kind: SlotKind::Identifier,
    default: None,
    description: "Class name of the generated contract",
};

static CATALOG: &[TemplateDescriptor] = &[
    TemplateDescriptor {
        id: "oracle",
        aliases: &[],
        version: "1.0",
        description: "Price oracle resolved through validator consensus",
        slots: &[
            CONTRACT_NAME,
            ParamSlot {
                name: "quote_currency",
                kind: SlotKind::Text,
                default: Some("USD"),
                description: "Currency prices are quoted in",
            },
        ],
        operations: &["fetch_price", "get_cached_price"],
        body: embedded::ORACLE_CONTRACT,
    },
    TemplateDescriptor {
        id: "insurance",
        aliases: &[],
        version: "1.0",
        description: "Parametric insurance paying out on a real-world event",
        slots: &[
            CONTRACT_NAME,
            ParamSlot {
                name: "policy_prefix",
                kind: SlotKind::Text,
                default: Some("POL"),
                description: "Prefix of generated policy ids",
            },
            ParamSlot {
                name: "trigger_event",
                kind: SlotKind::Text,
                default: Some("heavy rainfall"),
                description: "Event whose occurrence triggers a payout",
            },
        ],
        operations: &["create_policy", "check_condition", "get_policy"],
        body: embedded::INSURANCE_CONTRACT,
    },
    TemplateDescriptor {
        id: "lending",
        aliases: &["defi"],
        version: "1.0",
        description: "Deposit/withdraw lending pool with per-account balances",
        slots: &[
            CONTRACT_NAME,
            ParamSlot {
                name: "min_deposit",
                kind: SlotKind::Integer,
                default: Some("1"),
                description: "Smallest accepted deposit",
            },
        ],
        operations: &["deposit", "withdraw", "get_balance"],
        body: embedded::LENDING_CONTRACT,
    },
    TemplateDescriptor {
        id: "basic-storage",
        aliases: &["basic"],
        version: "1.0",
        description: "Key/value storage contract",
        slots: &[
            CONTRACT_NAME,
            ParamSlot {
                name: "missing_value",
                kind: SlotKind::Text,
                default: Some("Not found"),
                description: "Value returned for unknown keys",
            },
        ],
        operations: &["store", "retrieve"],
        body: embedded::BASIC_STORAGE_CONTRACT,
    },
];

/// All shipped archetypes, in display order.
pub fn all() -> &'static [TemplateDescriptor] {
    CATALOG
}

/// Resolve an archetype id or alias.
pub fn find(id: &str) -> Result<&'static TemplateDescriptor> {
    CATALOG
        .iter()
        .find(|d| d.matches(id))
        .ok_or_else(|| DevkitError::TemplateNotFound {
            id: id.to_string(),
            available: ids().join(", "),
        })
}

/// Canonical ids of every shipped archetype.
pub fn ids() -> Vec<&'static str> {
    CATALOG.iter().map(|d| d.id).collect()
}
