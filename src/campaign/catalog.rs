//! Static reference tables
//!
//! The category catalog and the option enumerations are consumed verbatim:
//! category ids are stored by numeric identity in form state, so ids and
//! ordering must never change.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Influencer content category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InfluencerCategory {
    pub id: u32,
    pub title: &'static str,
}

impl InfluencerCategory {
    const fn new(id: u32, title: &'static str) -> Self {
        Self { id, title }
    }
}

/// Full category catalog, ordered by id
pub static CATEGORIES: [InfluencerCategory; 82] = [
    InfluencerCategory::new(1, "Beauty"),
    InfluencerCategory::new(2, "Makeup"),
    InfluencerCategory::new(3, "Skincare"),
    InfluencerCategory::new(4, "Haircare"),
    InfluencerCategory::new(5, "Nail Care"),
    InfluencerCategory::new(6, "Modeling"),
    InfluencerCategory::new(7, "Cosplay"),
    InfluencerCategory::new(8, "Traveling"),
    InfluencerCategory::new(9, "Hiking & Trekking"),
    InfluencerCategory::new(10, "Outdoor Camping"),
    InfluencerCategory::new(11, "Gastronomy"),
    InfluencerCategory::new(12, "Beers"),
    InfluencerCategory::new(13, "Dining & Nightlife"),
    InfluencerCategory::new(14, "Cooking"),
    InfluencerCategory::new(15, "Nutritious Foods"),
    InfluencerCategory::new(16, "Coffee Culture"),
    InfluencerCategory::new(17, "Tea"),
    InfluencerCategory::new(18, "Wine"),
    InfluencerCategory::new(19, "Grilling & BBQ"),
    InfluencerCategory::new(20, "Football & Soccer"),
    InfluencerCategory::new(21, "Basketball"),
    InfluencerCategory::new(22, "Baseball"),
    InfluencerCategory::new(23, "Volleyball"),
    InfluencerCategory::new(24, "American Football"),
    InfluencerCategory::new(25, "Ice Hockey"),
    InfluencerCategory::new(26, "Tennis"),
    InfluencerCategory::new(27, "Boxing"),
    InfluencerCategory::new(28, "Wrestling"),
    InfluencerCategory::new(29, "Fitness & Bodybuilding"),
    InfluencerCategory::new(30, "Yoga"),
    InfluencerCategory::new(31, "Running & Athletics"),
    InfluencerCategory::new(32, "Surfing"),
    InfluencerCategory::new(33, "Skateboarding"),
    InfluencerCategory::new(34, "Snowboarding"),
    InfluencerCategory::new(35, "Ecology"),
    InfluencerCategory::new(36, "Space & Astronomy"),
    InfluencerCategory::new(37, "Pet Care"),
    InfluencerCategory::new(38, "Automobiles"),
    InfluencerCategory::new(39, "Motorcycles"),
    InfluencerCategory::new(40, "Aviation"),
    InfluencerCategory::new(41, "DIY Projects"),
    InfluencerCategory::new(42, "Handicrafts"),
    InfluencerCategory::new(43, "Gardening"),
    InfluencerCategory::new(44, "Children's Games & Toys"),
    InfluencerCategory::new(45, "Parenting & Relationships"),
    InfluencerCategory::new(46, "Entertainment"),
    InfluencerCategory::new(47, "Anime, Manga & Comics"),
    InfluencerCategory::new(48, "Literature"),
    InfluencerCategory::new(49, "Film & Television"),
    InfluencerCategory::new(50, "Video Gaming"),
    InfluencerCategory::new(51, "Dance"),
    InfluencerCategory::new(52, "Theater"),
    InfluencerCategory::new(53, "Unboxings"),
    InfluencerCategory::new(54, "Stand-up Comedy"),
    InfluencerCategory::new(55, "Educational"),
    InfluencerCategory::new(56, "Politics"),
    InfluencerCategory::new(57, "Social Issues"),
    InfluencerCategory::new(58, "Science"),
    InfluencerCategory::new(59, "Space Exploration"),
    InfluencerCategory::new(60, "Biology"),
    InfluencerCategory::new(61, "Physics"),
    InfluencerCategory::new(62, "Chemistry"),
    InfluencerCategory::new(63, "AI & Machine Learning"),
    InfluencerCategory::new(64, "Technology & Gadgets"),
    InfluencerCategory::new(65, "Meditative Practices"),
    InfluencerCategory::new(66, "Astrology"),
    InfluencerCategory::new(67, "History"),
    InfluencerCategory::new(68, "Health & Medicine"),
    InfluencerCategory::new(69, "Property & Real Estate"),
    InfluencerCategory::new(70, "Architecture & Design"),
    InfluencerCategory::new(71, "Business and Careers"),
    InfluencerCategory::new(72, "Philanthropy & Charity"),
    InfluencerCategory::new(73, "Finance & Accounting"),
    InfluencerCategory::new(74, "Sustainability"),
    InfluencerCategory::new(75, "Fashion"),
    InfluencerCategory::new(76, "Interior Design"),
    InfluencerCategory::new(77, "Religion"),
    InfluencerCategory::new(78, "Luxury"),
    InfluencerCategory::new(79, "Music"),
    InfluencerCategory::new(80, "Photography"),
    InfluencerCategory::new(81, "Motorsports"),
    InfluencerCategory::new(82, "Yachting & Sailing"),
];

/// ISO 639-1 language codes offered for influencer language
pub static LANGUAGES: [&str; 185] = [
    "aa", "ab", "ae", "af", "ak", "am", "an", "ar", "as", "av", "ay", "az",
    "ba", "be", "bg", "bh", "bi", "bm", "bn", "bo", "br", "bs", "ca", "ce",
    "ch", "co", "cr", "cs", "cu", "cv", "cy", "da", "de", "dv", "dz", "ee",
    "el", "en", "eo", "es", "et", "eu", "fa", "ff", "fi", "fj", "fl", "fo",
    "fr", "fy", "ga", "gd", "gl", "gn", "gu", "gv", "ha", "he", "hi", "ho",
    "hr", "ht", "hu", "hy", "hz", "ia", "id", "ie", "ig", "ii", "ik", "io",
    "is", "it", "iu", "ja", "jv", "ka", "kg", "ki", "kj", "kk", "kl", "km",
    "kn", "ko", "kr", "ks", "ku", "kv", "kw", "ky", "la", "lb", "lg", "li",
    "ln", "lo", "lt", "lu", "lv", "mg", "mh", "mi", "mk", "ml", "mn", "mr",
    "ms", "mt", "my", "na", "nb", "nd", "ne", "ng", "nl", "nn", "no", "nr",
    "nv", "ny", "oc", "oj", "om", "or", "os", "pa", "pi", "pl", "ps", "pt",
    "qu", "rm", "rn", "ro", "ru", "rw", "sa", "sc", "sd", "se", "sg", "si",
    "sk", "sl", "sm", "sn", "so", "sq", "sr", "ss", "st", "su", "sv", "sw",
    "ta", "te", "tg", "th", "ti", "tk", "tl", "tn", "to", "tr", "ts", "tt",
    "tw", "ty", "ug", "uk", "ur", "uz", "ve", "vi", "vo", "wa", "wo", "xh",
    "yi", "yo", "za", "zh", "zu",
];

/// Look up a category by id
pub fn category(id: u32) -> Option<&'static InfluencerCategory> {
    CATEGORIES.iter().find(|c| c.id == id)
}

/// Whether `id` exists in the catalog
pub fn is_known_category(id: u32) -> bool {
    category(id).is_some()
}

/// Categories whose title contains `query`, case-insensitively.
///
/// An empty query yields the whole catalog. Catalog order is preserved.
pub fn filter_categories(query: &str) -> Vec<&'static InfluencerCategory> {
    let needle = query.to_lowercase();
    CATEGORIES
        .iter()
        .filter(|c| c.title.to_lowercase().contains(&needle))
        .collect()
}

/// Whether `code` is one of the offered language codes
pub fn is_language_code(code: &str) -> bool {
    LANGUAGES.contains(&code)
}

/// Fixed-set option shared by the choice widgets
pub trait EnumOption: Copy + Eq + Default + 'static {
    /// All variants in display order
    fn variants() -> &'static [Self];

    /// Display label (stable, not localized)
    fn label(&self) -> &'static str;

    /// Position in [`EnumOption::variants`]
    fn to_index(&self) -> usize {
        Self::variants()
            .iter()
            .position(|v| v == self)
            .unwrap_or(0)
    }

    /// Variant at `index`, wrapping around
    fn from_index(index: usize) -> Self {
        let variants = Self::variants();
        variants[index % variants.len()]
    }

    /// Next variant, wrapping
    fn next(&self) -> Self {
        Self::from_index(self.to_index() + 1)
    }

    /// Previous variant, wrapping
    fn prev(&self) -> Self {
        let len = Self::variants().len();
        Self::from_index(self.to_index() + len - 1)
    }
}

/// Gender targeting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Gender {
    Male,
    Female,
    #[default]
    All,
}

impl EnumOption for Gender {
    fn variants() -> &'static [Self] {
        &[Gender::All, Gender::Male, Gender::Female]
    }

    fn label(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::All => "All",
        }
    }
}

/// Audience age band
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AgeBand {
    #[serde(rename = "13 - 17")]
    Teen,
    #[serde(rename = "18 - 24")]
    YoungAdult,
    #[serde(rename = "25 - 34")]
    Adult,
    #[serde(rename = "35 - 44")]
    MiddleAge,
    #[serde(rename = "45 - 54")]
    Mature,
    #[serde(rename = "55 - 64")]
    Senior,
    #[serde(rename = "65+")]
    Elder,
}

impl AgeBand {
    pub const ALL: [AgeBand; 7] = [
        AgeBand::Teen,
        AgeBand::YoungAdult,
        AgeBand::Adult,
        AgeBand::MiddleAge,
        AgeBand::Mature,
        AgeBand::Senior,
        AgeBand::Elder,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            AgeBand::Teen => "13 - 17",
            AgeBand::YoungAdult => "18 - 24",
            AgeBand::Adult => "25 - 34",
            AgeBand::MiddleAge => "35 - 44",
            AgeBand::Mature => "45 - 54",
            AgeBand::Senior => "55 - 64",
            AgeBand::Elder => "65+",
        }
    }
}

impl fmt::Display for AgeBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Influencer size tier by follower count
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InfluencerTier {
    #[serde(rename = "Nano (1K - 10K)")]
    Nano,
    #[serde(rename = "Micro (10K - 50K)")]
    Micro,
    #[serde(rename = "Mid (50K - 100K)")]
    Mid,
    #[serde(rename = "Macro (100K - 1M)")]
    Macro,
    #[serde(rename = "Mega (1M+)")]
    Mega,
}

impl InfluencerTier {
    pub const ALL: [InfluencerTier; 5] = [
        InfluencerTier::Nano,
        InfluencerTier::Micro,
        InfluencerTier::Mid,
        InfluencerTier::Macro,
        InfluencerTier::Mega,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            InfluencerTier::Nano => "Nano (1K - 10K)",
            InfluencerTier::Micro => "Micro (10K - 50K)",
            InfluencerTier::Mid => "Mid (50K - 100K)",
            InfluencerTier::Macro => "Macro (100K - 1M)",
            InfluencerTier::Mega => "Mega (1M+)",
        }
    }
}

impl fmt::Display for InfluencerTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Budget currency
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, clap::ValueEnum)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    #[default]
    #[value(name = "INR")]
    Inr,
    #[value(name = "USD")]
    Usd,
    #[value(name = "EUR")]
    Eur,
    #[value(name = "GBP")]
    Gbp,
}

impl Currency {
    pub fn code(&self) -> &'static str {
        match self {
            Currency::Inr => "INR",
            Currency::Usd => "USD",
            Currency::Eur => "EUR",
            Currency::Gbp => "GBP",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::Inr => "₹",
            Currency::Usd => "$",
            Currency::Eur => "€",
            Currency::Gbp => "£",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Currency::Inr => "Indian Rupee",
            Currency::Usd => "US Dollar",
            Currency::Eur => "Euro",
            Currency::Gbp => "British Pound",
        }
    }
}

impl EnumOption for Currency {
    fn variants() -> &'static [Self] {
        &[Currency::Inr, Currency::Usd, Currency::Eur, Currency::Gbp]
    }

    fn label(&self) -> &'static str {
        self.code()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_ids_are_sequential() {
        for (i, c) in CATEGORIES.iter().enumerate() {
            assert_eq!(c.id as usize, i + 1);
        }
        assert_eq!(category(1).map(|c| c.title), Some("Beauty"));
        assert_eq!(category(82).map(|c| c.title), Some("Yachting & Sailing"));
        assert!(category(0).is_none());
        assert!(category(83).is_none());
    }

    #[test]
    fn test_filter_categories_case_insensitive() {
        let hits = filter_categories("beauty");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, 1);

        let space: Vec<u32> = filter_categories("SPACE").iter().map(|c| c.id).collect();
        assert_eq!(space, vec![36, 59]);
    }

    #[test]
    fn test_filter_categories_empty_query_returns_catalog() {
        let all = filter_categories("");
        assert_eq!(all.len(), CATEGORIES.len());
        assert!(all.iter().zip(CATEGORIES.iter()).all(|(a, b)| a.id == b.id));
    }

    #[test]
    fn test_filter_categories_no_match() {
        assert!(filter_categories("zzz").is_empty());
    }

    #[test]
    fn test_enum_option_cycles() {
        assert_eq!(Gender::All.next(), Gender::Male);
        assert_eq!(Gender::All.prev(), Gender::Female);
        assert_eq!(Currency::Gbp.next(), Currency::Inr);
        assert_eq!(Currency::from_index(1), Currency::Usd);
    }

    #[test]
    fn test_languages() {
        assert!(is_language_code("en"));
        assert!(is_language_code("zu"));
        assert!(!is_language_code("xx"));
    }
}
