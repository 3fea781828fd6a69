//! Campaign domain model
//!
//! Everything in here is UI-agnostic: the form, the reference tables, the
//! wizard controller and the sample recommendation data.

pub mod catalog;
pub mod form;
pub mod keywords;
pub mod mock;
pub mod results;
pub mod submit;
pub mod wizard;

pub use catalog::{
    AgeBand, CATEGORIES, Currency, EnumOption, Gender, InfluencerCategory, InfluencerTier,
    LANGUAGES, filter_categories,
};
pub use form::{
    Budget, CampaignFormData, CategorySelection, FormPatch, Keywords, Location, MAX_CATEGORIES,
    MAX_KEYWORDS,
};
pub use mock::{InfluencerData, mock_influencers};
pub use results::CampaignSummary;
pub use submit::{JsonFileSink, LogSink, SubmissionSink, load_campaign_file};
pub use wizard::{WizardController, WizardStep, can_advance};
