//! Display data for the results step

use crate::campaign::catalog::{EnumOption, category};
use crate::campaign::form::CampaignFormData;

/// Compact follower/view counts: `1.5M`, `125.0K`, `342`
pub fn format_compact(num: u64) -> String {
    if num >= 1_000_000 {
        format!("{:.1}M", num as f64 / 1_000_000.0)
    } else if num >= 1_000 {
        format!("{:.1}K", num as f64 / 1_000.0)
    } else {
        num.to_string()
    }
}

/// Amount with thousands separators and at most two decimals
pub fn format_amount(amount: f64) -> String {
    let fixed = format!("{:.2}", amount.abs());
    let (whole, frac) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let frac = frac.trim_end_matches('0');

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let is_zero = whole == "0" && frac.is_empty();
    let sign = if amount < 0.0 && !is_zero { "-" } else { "" };
    if frac.is_empty() {
        format!("{}{}", sign, grouped)
    } else {
        format!("{}{}.{}", sign, grouped, frac)
    }
}

/// Category titles of the selection, in selection order
pub fn selected_category_titles(form: &CampaignFormData) -> Vec<&'static str> {
    form.categories
        .ids()
        .iter()
        .filter_map(|&id| category(id).map(|c| c.title))
        .collect()
}

/// Summary block of the results step
#[derive(Debug, Clone, PartialEq)]
pub struct CampaignSummary {
    pub objective: String,
    pub budget: String,
    pub audience_gender: &'static str,
    pub audience_location: String,
    pub influencer_location: String,
    pub age_groups: Vec<&'static str>,
    pub influencer_types: Vec<&'static str>,
    pub keywords: Vec<String>,
    pub categories: Vec<&'static str>,
}

impl CampaignSummary {
    pub fn from_form(form: &CampaignFormData) -> Self {
        let budget = &form.campaign_budget;
        Self {
            objective: form.objective.clone(),
            budget: format!("{} {}", budget.currency.symbol(), format_amount(budget.amount)),
            audience_gender: form.audience_gender.label(),
            audience_location: form.audience_location.summary(),
            influencer_location: form.influencer_location.summary(),
            age_groups: form.audience_age.iter().map(|a| a.label()).collect(),
            influencer_types: form.influencer_type.iter().map(|t| t.label()).collect(),
            keywords: form.keywords.iter().map(|k| format!("#{}", k)).collect(),
            categories: selected_category_titles(form),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::campaign::catalog::{AgeBand, Currency};

    #[test]
    fn test_format_compact() {
        assert_eq!(format_compact(125_000), "125.0K");
        assert_eq!(format_compact(6_500), "6.5K");
        assert_eq!(format_compact(2_500_000), "2.5M");
        assert_eq!(format_compact(342), "342");
        assert_eq!(format_compact(1_000), "1.0K");
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(50_000.0), "50,000");
        assert_eq!(format_amount(1_234_567.5), "1,234,567.5");
        assert_eq!(format_amount(999.0), "999");
        assert_eq!(format_amount(0.0), "0");
        assert_eq!(format_amount(12.346), "12.35");
        assert_eq!(format_amount(-1_500.0), "-1,500");
        assert_eq!(format_amount(-0.001), "0");
    }

    #[test]
    fn test_format_amount_huge_values_keep_their_digits() {
        let text = format_amount(1e40);
        assert!(text.starts_with("10,000,000,000,000,000"));
        assert_eq!(text.split(',').count(), 14);
        assert!(!text.contains('.'));
    }

    #[test]
    fn test_summary_resolves_categories() {
        let mut form = CampaignFormData::default();
        form.objective = "Launch".into();
        form.campaign_budget.amount = 50_000.0;
        form.campaign_budget.currency = Currency::Usd;
        form.audience_age = vec![AgeBand::Adult];
        form.keywords.add("glow");
        form.categories.toggle(3, true);
        form.categories.toggle(1, true);

        let summary = CampaignSummary::from_form(&form);
        assert_eq!(summary.budget, "$ 50,000");
        assert_eq!(summary.categories, vec!["Skincare", "Beauty"]);
        assert_eq!(summary.keywords, vec!["#glow"]);
        assert_eq!(summary.age_groups, vec!["25 - 34"]);
        assert_eq!(summary.audience_gender, "All");
    }
}
