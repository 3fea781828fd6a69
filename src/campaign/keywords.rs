//! Keyword and category step operations
//!
//! Each operation reads the current form and returns the patch to merge, or
//! `None` when the input is rejected and the form must stay unchanged.

use crate::campaign::catalog::{self, InfluencerCategory};
use crate::campaign::form::{CampaignFormData, FormPatch};

/// Append a trimmed keyword unless it is empty, a duplicate, or the list is full
pub fn add_keyword(form: &CampaignFormData, text: &str) -> Option<FormPatch> {
    let mut keywords = form.keywords.clone();
    keywords.add(text).then(|| FormPatch {
        keywords: Some(keywords),
        ..Default::default()
    })
}

/// Remove an exact keyword match
pub fn remove_keyword(form: &CampaignFormData, text: &str) -> Option<FormPatch> {
    let mut keywords = form.keywords.clone();
    keywords.remove(text).then(|| FormPatch {
        keywords: Some(keywords),
        ..Default::default()
    })
}

/// Select or deselect a category; a sixth selection is silently rejected
pub fn toggle_category(form: &CampaignFormData, id: u32, selected: bool) -> Option<FormPatch> {
    let mut categories = form.categories.clone();
    categories.toggle(id, selected).then(|| FormPatch {
        categories: Some(categories),
        ..Default::default()
    })
}

/// Catalog entries matching `query`, see [`catalog::filter_categories`]
pub fn filter_categories(query: &str) -> Vec<&'static InfluencerCategory> {
    catalog::filter_categories(query)
}

/// Selected categories in catalog order
pub fn selected_categories(form: &CampaignFormData) -> Vec<&'static InfluencerCategory> {
    catalog::CATEGORIES
        .iter()
        .filter(|c| form.categories.contains(c.id))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::campaign::form::MAX_KEYWORDS;

    fn apply(form: &mut CampaignFormData, patch: Option<FormPatch>) {
        if let Some(patch) = patch {
            form.merge(patch);
        }
    }

    #[test]
    fn test_duplicate_keyword_scenario() {
        let mut form = CampaignFormData::default();
        let patch = add_keyword(&form, "glow");
        apply(&mut form, patch);
        assert!(add_keyword(&form, "glow").is_none());
        assert_eq!(form.keywords.as_slice(), ["glow"]);
    }

    #[test]
    fn test_keyword_sequences_never_exceed_limit() {
        let mut form = CampaignFormData::default();
        let inputs = ["a", "b", "a", " c ", "", "d", "e", "f", "g", "h", "i", "j", "k", "l"];
        for text in inputs {
            let patch = add_keyword(&form, text);
            apply(&mut form, patch);
            assert!(form.keywords.len() <= MAX_KEYWORDS);
        }
        let mut seen = std::collections::HashSet::new();
        assert!(form.keywords.iter().all(|k| seen.insert(k.clone())));
        assert_eq!(form.keywords.len(), MAX_KEYWORDS);
        assert_eq!(form.keywords.as_slice()[2], "c");
    }

    #[test]
    fn test_remove_unknown_keyword_is_noop() {
        let mut form = CampaignFormData::default();
        let patch = add_keyword(&form, "skincare");
        apply(&mut form, patch);
        assert!(remove_keyword(&form, "makeup").is_none());

        let patch = remove_keyword(&form, "skincare");
        apply(&mut form, patch);
        assert!(form.keywords.is_empty());
    }

    #[test]
    fn test_sixth_category_scenario() {
        let mut form = CampaignFormData::default();
        for id in 1..=5 {
            let patch = toggle_category(&form, id, true);
            apply(&mut form, patch);
        }
        assert!(toggle_category(&form, 6, true).is_none());
        assert_eq!(form.categories.ids(), [1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_selected_categories_in_catalog_order() {
        let mut form = CampaignFormData::default();
        for id in [30, 2] {
            let patch = toggle_category(&form, id, true);
            apply(&mut form, patch);
        }
        let titles: Vec<_> = selected_categories(&form).iter().map(|c| c.title).collect();
        assert_eq!(titles, vec!["Makeup", "Yoga"]);
    }
}
