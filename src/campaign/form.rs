//! Campaign form model
//!
//! [`CampaignFormData`] is the wizard's single source of truth. It is only
//! mutated through [`CampaignFormData::merge`], which applies a [`FormPatch`]
//! by replacing each present top-level field wholesale. Nested values such as
//! [`Location`] and [`Budget`] are never deep-merged: a caller changing one
//! leaf must clone the current nested value and send the whole thing back.

use crate::campaign::catalog::{AgeBand, Currency, Gender, InfluencerTier, is_known_category};
use crate::error::Error;
use serde::{Deserialize, Deserializer, Serialize, de};
use std::fmt;

/// Maximum number of campaign keywords
pub const MAX_KEYWORDS: usize = 10;

/// Maximum number of selected categories
pub const MAX_CATEGORIES: usize = 5;

/// Geographic targeting
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Location {
    #[serde(default)]
    pub cities: Vec<String>,
    #[serde(default)]
    pub states: Vec<String>,
    #[serde(default)]
    pub country: String,
}

impl Location {
    /// Human readable summary, e.g. `Mumbai, Pune / Maharashtra / India`
    pub fn summary(&self) -> String {
        [
            self.cities.join(", "),
            self.states.join(", "),
            self.country.clone(),
        ]
        .into_iter()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" / ")
    }

    pub fn is_empty(&self) -> bool {
        self.cities.is_empty() && self.states.is_empty() && self.country.is_empty()
    }
}

/// Campaign budget
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Budget {
    pub amount: f64,
    pub currency: Currency,
}

/// Ordered, unique, capacity-bounded keyword list
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct Keywords(Vec<String>);

impl Keywords {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a keyword.
    ///
    /// The text is trimmed first. Empty text, an exact (case-sensitive)
    /// duplicate, or a full list leaves the list untouched. Returns whether
    /// the keyword was appended.
    pub fn add(&mut self, text: &str) -> bool {
        let keyword = text.trim();
        if !self.can_add(keyword) {
            return false;
        }
        self.0.push(keyword.to_string());
        true
    }

    /// Whether [`Keywords::add`] would accept `text`
    pub fn can_add(&self, text: &str) -> bool {
        let keyword = text.trim();
        !keyword.is_empty() && !self.is_full() && !self.contains(keyword)
    }

    /// Remove the exact match of `text`. No-op if absent.
    pub fn remove(&mut self, text: &str) -> bool {
        match self.0.iter().position(|k| k == text) {
            Some(idx) => {
                self.0.remove(idx);
                true
            }
            None => false,
        }
    }

    pub fn contains(&self, text: &str) -> bool {
        self.0.iter().any(|k| k == text)
    }

    pub fn is_full(&self) -> bool {
        self.0.len() >= MAX_KEYWORDS
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}

impl TryFrom<Vec<String>> for Keywords {
    type Error = Error;

    fn try_from(values: Vec<String>) -> Result<Self, Self::Error> {
        let mut keywords = Keywords::new();
        for value in &values {
            if !keywords.add(value) {
                return Err(Error::InvalidForm(format!(
                    "keyword '{}' is empty, duplicated or exceeds the limit of {}",
                    value, MAX_KEYWORDS
                )));
            }
        }
        Ok(keywords)
    }
}

impl From<Keywords> for Vec<String> {
    fn from(keywords: Keywords) -> Self {
        keywords.0
    }
}

/// Ordered, unique, capacity-bounded set of catalog category ids
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<u32>", into = "Vec<u32>")]
pub struct CategorySelection(Vec<u32>);

impl CategorySelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Select or deselect a category.
    ///
    /// Selecting appends `id` only while fewer than [`MAX_CATEGORIES`] are
    /// selected, the id is not already selected, and it exists in the
    /// catalog. Deselecting removes it. Returns whether the selection
    /// changed.
    pub fn toggle(&mut self, id: u32, selected: bool) -> bool {
        if selected {
            if !self.can_select(id) {
                return false;
            }
            self.0.push(id);
            true
        } else {
            match self.0.iter().position(|&c| c == id) {
                Some(idx) => {
                    self.0.remove(idx);
                    true
                }
                None => false,
            }
        }
    }

    /// Whether selecting `id` would be accepted
    pub fn can_select(&self, id: u32) -> bool {
        !self.is_full() && !self.contains(id) && is_known_category(id)
    }

    pub fn contains(&self, id: u32) -> bool {
        self.0.contains(&id)
    }

    pub fn is_full(&self) -> bool {
        self.0.len() >= MAX_CATEGORIES
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn ids(&self) -> &[u32] {
        &self.0
    }
}

impl TryFrom<Vec<u32>> for CategorySelection {
    type Error = Error;

    fn try_from(ids: Vec<u32>) -> Result<Self, Self::Error> {
        let mut selection = CategorySelection::new();
        for id in ids {
            if !selection.toggle(id, true) {
                return Err(Error::InvalidForm(format!(
                    "category {} is unknown, duplicated or exceeds the limit of {}",
                    id, MAX_CATEGORIES
                )));
            }
        }
        Ok(selection)
    }
}

impl From<CategorySelection> for Vec<u32> {
    fn from(selection: CategorySelection) -> Self {
        selection.0
    }
}

/// Aggregate campaign form state
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CampaignFormData {
    // Basics
    pub objective: String,
    pub audience_location: Location,
    pub audience_gender: Gender,
    pub audience_gender_percentage: f64,
    #[serde(deserialize_with = "unique_list")]
    pub audience_age: Vec<AgeBand>,
    pub campaign_budget: Budget,
    pub influencer_gender: Gender,
    pub influencer_location: Location,
    #[serde(deserialize_with = "unique_list")]
    pub influencer_type: Vec<InfluencerTier>,
    pub engagement_rate: f64,
    pub language: Option<String>,

    // Keywords and categories
    pub keywords: Keywords,
    pub categories: CategorySelection,
}

impl CampaignFormData {
    /// Empty form with the given budget currency
    pub fn with_currency(currency: Currency) -> Self {
        Self {
            campaign_budget: Budget {
                amount: 0.0,
                currency,
            },
            ..Default::default()
        }
    }

    /// Apply a patch. Every field present in the patch replaces the current
    /// value wholesale; absent fields are left untouched.
    pub fn merge(&mut self, patch: FormPatch) {
        let FormPatch {
            objective,
            audience_location,
            audience_gender,
            audience_gender_percentage,
            audience_age,
            campaign_budget,
            influencer_gender,
            influencer_location,
            influencer_type,
            engagement_rate,
            language,
            keywords,
            categories,
        } = patch;

        if let Some(v) = objective {
            self.objective = v;
        }
        if let Some(v) = audience_location {
            self.audience_location = v;
        }
        if let Some(v) = audience_gender {
            self.audience_gender = v;
        }
        if let Some(v) = audience_gender_percentage {
            self.audience_gender_percentage = v;
        }
        if let Some(v) = audience_age {
            self.audience_age = v;
        }
        if let Some(v) = campaign_budget {
            self.campaign_budget = v;
        }
        if let Some(v) = influencer_gender {
            self.influencer_gender = v;
        }
        if let Some(v) = influencer_location {
            self.influencer_location = v;
        }
        if let Some(v) = influencer_type {
            self.influencer_type = v;
        }
        if let Some(v) = engagement_rate {
            self.engagement_rate = v;
        }
        if let Some(v) = language {
            self.language = v;
        }
        if let Some(v) = keywords {
            self.keywords = v;
        }
        if let Some(v) = categories {
            self.categories = v;
        }
    }
}

/// Toggle lists are insertion-ordered sets; a repeated entry is an error
fn unique_list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + PartialEq + fmt::Display,
{
    let values = Vec::<T>::deserialize(deserializer)?;
    for (i, value) in values.iter().enumerate() {
        if values[..i].contains(value) {
            return Err(de::Error::custom(format!("duplicate entry \"{}\"", value)));
        }
    }
    Ok(values)
}

/// Partial form update
///
/// `language` is doubly optional: `Some(None)` clears the language.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormPatch {
    pub objective: Option<String>,
    pub audience_location: Option<Location>,
    pub audience_gender: Option<Gender>,
    pub audience_gender_percentage: Option<f64>,
    pub audience_age: Option<Vec<AgeBand>>,
    pub campaign_budget: Option<Budget>,
    pub influencer_gender: Option<Gender>,
    pub influencer_location: Option<Location>,
    pub influencer_type: Option<Vec<InfluencerTier>>,
    pub engagement_rate: Option<f64>,
    pub language: Option<Option<String>>,
    pub keywords: Option<Keywords>,
    pub categories: Option<CategorySelection>,
}

impl FormPatch {
    pub fn is_empty(&self) -> bool {
        *self == FormPatch::default()
    }
}

/// Toggle `item` into or out of an insertion-ordered list.
///
/// Checking appends when absent; unchecking removes every occurrence.
pub fn toggle_in_list<T: PartialEq + Copy>(list: &[T], item: T, checked: bool) -> Vec<T> {
    if !checked {
        return list.iter().copied().filter(|v| *v != item).collect();
    }
    let mut out = list.to_vec();
    if !out.contains(&item) {
        out.push(item);
    }
    out
}

/// Coerce numeric text, falling back to zero when it does not parse.
pub fn parse_number(text: &str) -> f64 {
    match text.trim().parse::<f64>() {
        Ok(v) if v.is_finite() => v,
        _ => 0.0,
    }
}

/// Budget amounts are non-negative
pub fn parse_amount(text: &str) -> f64 {
    parse_number(text).max(0.0)
}

/// Percentages are clamped to `0..=100`
pub fn parse_percentage(text: &str) -> f64 {
    parse_number(text).clamp(0.0, 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_form_is_empty() {
        let form = CampaignFormData::default();
        assert!(form.objective.is_empty());
        assert_eq!(form.campaign_budget.amount, 0.0);
        assert_eq!(form.campaign_budget.currency, Currency::Inr);
        assert_eq!(form.audience_gender, Gender::All);
        assert!(form.keywords.is_empty());
        assert!(form.categories.is_empty());
    }

    #[test]
    fn test_add_keyword_trims_and_rejects_duplicates() {
        let mut keywords = Keywords::new();
        assert!(keywords.add("  glow "));
        assert!(!keywords.add("glow"));
        assert!(!keywords.add("   "));
        assert_eq!(keywords.as_slice(), ["glow"]);

        // Case-sensitive match
        assert!(keywords.add("Glow"));
        assert_eq!(keywords.len(), 2);
    }

    #[test]
    fn test_keywords_capacity() {
        let mut keywords = Keywords::new();
        for i in 0..25 {
            keywords.add(&format!("kw{}", i));
        }
        assert_eq!(keywords.len(), MAX_KEYWORDS);
        assert!(keywords.is_full());
        assert!(!keywords.contains("kw10"));
    }

    #[test]
    fn test_remove_missing_keyword_is_noop() {
        let mut keywords = Keywords::new();
        keywords.add("skincare");
        let before = keywords.clone();
        assert!(!keywords.remove("makeup"));
        assert_eq!(keywords, before);
        assert!(keywords.remove("skincare"));
        assert!(keywords.is_empty());
    }

    #[test]
    fn test_sixth_category_rejected() {
        let mut selection = CategorySelection::new();
        for id in 1..=5 {
            assert!(selection.toggle(id, true));
        }
        assert!(!selection.toggle(6, true));
        assert_eq!(selection.ids(), [1, 2, 3, 4, 5]);

        assert!(selection.toggle(3, false));
        assert!(selection.toggle(6, true));
        assert_eq!(selection.ids(), [1, 2, 4, 5, 6]);
    }

    #[test]
    fn test_unknown_or_duplicate_category_rejected() {
        let mut selection = CategorySelection::new();
        assert!(!selection.toggle(0, true));
        assert!(!selection.toggle(999, true));
        assert!(selection.toggle(7, true));
        assert!(!selection.toggle(7, true));
        assert!(!selection.toggle(8, false));
        assert_eq!(selection.ids(), [7]);
    }

    #[test]
    fn test_category_sequences_respect_invariants() {
        let mut selection = CategorySelection::new();
        let ops = [
            (3, true), (90, true), (3, true), (4, true), (82, true), (1, true),
            (2, true), (9, true), (4, false), (9, true), (10, true), (0, true),
        ];
        for (id, selected) in ops {
            selection.toggle(id, selected);
            assert!(selection.len() <= MAX_CATEGORIES);
            assert!(selection.ids().iter().all(|&id| is_known_category(id)));
        }
        assert_eq!(selection.ids(), [3, 82, 1, 2, 9]);
    }

    #[test]
    fn test_merge_replaces_nested_values_wholesale() {
        let mut form = CampaignFormData::default();
        form.merge(FormPatch {
            audience_location: Some(Location {
                cities: vec!["Mumbai".into()],
                states: vec!["Maharashtra".into()],
                country: "India".into(),
            }),
            ..Default::default()
        });

        // A patch that omits cities drops them
        form.merge(FormPatch {
            audience_location: Some(Location {
                country: "India".into(),
                ..Default::default()
            }),
            ..Default::default()
        });
        assert!(form.audience_location.cities.is_empty());
        assert!(form.audience_location.states.is_empty());
        assert_eq!(form.audience_location.country, "India");
    }

    #[test]
    fn test_merge_leaves_absent_fields() {
        let mut form = CampaignFormData::default();
        form.merge(FormPatch {
            objective: Some("Grow awareness".into()),
            ..Default::default()
        });
        form.merge(FormPatch {
            campaign_budget: Some(Budget {
                amount: 50000.0,
                currency: Currency::Usd,
            }),
            ..Default::default()
        });
        assert_eq!(form.objective, "Grow awareness");
        assert_eq!(form.campaign_budget.amount, 50000.0);

        form.merge(FormPatch {
            language: Some(Some("hi".into())),
            ..Default::default()
        });
        assert_eq!(form.language.as_deref(), Some("hi"));
        form.merge(FormPatch {
            language: Some(None),
            ..Default::default()
        });
        assert!(form.language.is_none());
        assert!(FormPatch::default().is_empty());
    }

    #[test]
    fn test_toggle_in_list() {
        let ages = toggle_in_list(&[], AgeBand::Adult, true);
        let ages = toggle_in_list(&ages, AgeBand::Teen, true);
        assert_eq!(ages, vec![AgeBand::Adult, AgeBand::Teen]);
        assert_eq!(toggle_in_list(&ages, AgeBand::Adult, true), ages);
        assert_eq!(toggle_in_list(&ages, AgeBand::Adult, false), vec![AgeBand::Teen]);
        assert_eq!(toggle_in_list(&ages, AgeBand::Elder, false), ages);
    }

    #[test]
    fn test_number_coercion() {
        assert_eq!(parse_number("42.5"), 42.5);
        assert_eq!(parse_number(""), 0.0);
        assert_eq!(parse_number("abc"), 0.0);
        assert_eq!(parse_number("NaN"), 0.0);
        assert_eq!(parse_amount("-100"), 0.0);
        assert_eq!(parse_percentage("250"), 100.0);
        assert_eq!(parse_percentage(" 35 "), 35.0);
    }

    #[test]
    fn test_json_uses_camel_case_and_labels() {
        let mut form = CampaignFormData::default();
        form.objective = "Launch".into();
        form.audience_age = vec![AgeBand::YoungAdult];
        form.influencer_type = vec![InfluencerTier::Micro];
        form.keywords.add("glow");
        form.categories.toggle(3, true);

        let json = serde_json::to_value(&form).unwrap();
        assert_eq!(json["audienceAge"][0], "18 - 24");
        assert_eq!(json["influencerType"][0], "Micro (10K - 50K)");
        assert_eq!(json["campaignBudget"]["currency"], "INR");
        assert_eq!(json["keywords"][0], "glow");
        assert_eq!(json["categories"][0], 3);

        let back: CampaignFormData = serde_json::from_value(json).unwrap();
        assert_eq!(back, form);
    }

    #[test]
    fn test_json_rejects_invariant_violations() {
        let too_many: Vec<String> = (0..11).map(|i| format!("k{}", i)).collect();
        let json = serde_json::json!({ "keywords": too_many });
        assert!(serde_json::from_value::<CampaignFormData>(json).is_err());

        let json = serde_json::json!({ "categories": [1, 1] });
        assert!(serde_json::from_value::<CampaignFormData>(json).is_err());

        let json = serde_json::json!({ "categories": [500] });
        assert!(serde_json::from_value::<CampaignFormData>(json).is_err());
    }

    #[test]
    fn test_json_rejects_repeated_toggle_entries() {
        let json = serde_json::json!({ "audienceAge": ["18 - 24", "18 - 24"] });
        assert!(serde_json::from_value::<CampaignFormData>(json).is_err());

        let json = serde_json::json!({ "influencerType": ["Mega (1M+)", "Mega (1M+)"] });
        assert!(serde_json::from_value::<CampaignFormData>(json).is_err());

        let json = serde_json::json!({
            "audienceAge": ["18 - 24", "25 - 34"],
            "influencerType": ["Nano (1K - 10K)", "Mega (1M+)"]
        });
        let form: CampaignFormData = serde_json::from_value(json).unwrap();
        assert_eq!(form.audience_age, vec![AgeBand::YoungAdult, AgeBand::Adult]);
        assert_eq!(form.influencer_type.len(), 2);
    }

    #[test]
    fn test_partial_budget_defaults_missing_fields() {
        let json = serde_json::json!({ "campaignBudget": { "amount": 5 } });
        let form: CampaignFormData = serde_json::from_value(json).unwrap();
        assert_eq!(form.campaign_budget.amount, 5.0);
        assert_eq!(form.campaign_budget.currency, Currency::default());
    }
}
