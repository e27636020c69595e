//! Pure option projections.
//!
//! Every function here is a side-effect-free re-shape of current store
//! state into the ordered, labeled option sequences the selection UIs
//! consume. No membership lookup happens here: the grouped projection
//! works from Characters that already carry their annotation (see
//! [`menhir_store::join`]).

use menhir_model::{Character, Village};

/// Label of the leading synthetic group for unassigned Characters.
pub const NO_VILLAGE_LABEL: &str = "no village";

/// A single selectable option: an id or value plus its display label.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectOption {
    /// Option value (an entity id, or the literal value for flat options).
    pub value: String,
    /// Display label.
    pub label: String,
}

impl SelectOption {
    /// Creates an option.
    #[must_use]
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// A labeled group of options for grouped multi-selects.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptionGroup {
    /// Group heading.
    pub label: String,
    /// Member options, in Character input order.
    pub options: Vec<SelectOption>,
}

/// Projects Villages into single-select options, input order preserved.
///
/// Feeds the "assign Character to Village" select.
#[must_use = "projections have no side effects"]
pub fn village_options<'a, I>(villages: I) -> Vec<SelectOption>
where
    I: IntoIterator<Item = &'a Village>,
{
    villages
        .into_iter()
        .map(|village| SelectOption::new(village.id.as_str(), village.name.clone()))
        .collect()
}

/// Projects annotated Characters into grouped multi-select options.
///
/// The leading group is always the synthetic "no village" group, present
/// even when empty, holding the Characters without an annotation. It is
/// followed by one group per distinct annotated village id, in
/// first-seen order, labeled from the first Character carrying that
/// village name. Feeds the "choose inhabitants" multi-select.
#[must_use = "projections have no side effects"]
pub fn character_groups<'a, I>(characters: I) -> Vec<OptionGroup>
where
    I: IntoIterator<Item = &'a Character>,
{
    let characters: Vec<&Character> = characters.into_iter().collect();

    let mut villages_seen: Vec<(&str, &str)> = Vec::new();
    for character in &characters {
        if let Some(village) = &character.village {
            if !villages_seen.iter().any(|(id, _)| *id == village.id.as_str()) {
                villages_seen.push((village.id.as_str(), village.name.as_str()));
            }
        }
    }

    let mut groups = Vec::with_capacity(villages_seen.len() + 1);
    groups.push(OptionGroup {
        label: NO_VILLAGE_LABEL.to_string(),
        options: characters
            .iter()
            .filter(|c| c.village.is_none())
            .map(|c| SelectOption::new(c.id.as_str(), c.name.clone()))
            .collect(),
    });

    for (village_id, village_name) in villages_seen {
        groups.push(OptionGroup {
            label: village_name.to_string(),
            options: characters
                .iter()
                .filter(|c| {
                    c.village
                        .as_ref()
                        .is_some_and(|v| v.id.as_str() == village_id)
                })
                .map(|c| SelectOption::new(c.id.as_str(), c.name.clone()))
                .collect(),
        });
    }

    groups
}

/// Projects Characters into distinct, sorted profession options.
///
/// Professions are deduplicated by value and sorted lexicographically;
/// Characters without demographic data contribute nothing. Feeds the
/// creatable profession select.
#[must_use = "projections have no side effects"]
pub fn profession_options<'a, I>(characters: I) -> Vec<SelectOption>
where
    I: IntoIterator<Item = &'a Character>,
{
    let professions: std::collections::BTreeSet<&str> = characters
        .into_iter()
        .filter_map(Character::profession)
        .collect();
    professions
        .into_iter()
        .map(|p| SelectOption::new(p, p))
        .collect()
}
