//! Sample recommendation data
//!
//! The results step shows these literal records regardless of the form
//! contents. Nothing here is derived from targeting inputs.

/// Pricing by content format, in the campaign's local currency (₹)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Prices {
    pub post: u64,
    pub stories: u64,
    pub video: u64,
    pub cpm: f64,
    pub cpe: f64,
}

/// Short-form video statistics
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReelStats {
    pub count: u32,
    pub avg_views: u64,
}

/// Suggested content idea
#[derive(Debug, Clone, PartialEq)]
pub struct ContentIdea {
    pub title: &'static str,
    pub description: &'static str,
    pub hashtags: &'static [&'static str],
    pub cta: &'static [&'static str],
}

/// Candidate influencer record
#[derive(Debug, Clone, PartialEq)]
pub struct InfluencerData {
    pub rank: u32,
    pub name: &'static str,
    pub id: &'static str,
    pub followers: u64,
    pub engagement_rate: f64,
    pub category: &'static str,
    pub location: &'static str,
    pub photo_url: &'static str,
    pub post_count: u32,
    pub avg_likes: u64,
    pub avg_comments: u64,
    pub prices: Prices,
    pub audience_authenticity: u8,
    pub audience_geo: &'static str,
    pub final_score: f64,
    pub content_affinity: f64,
    pub audience_match: f64,
    pub past_performance: f64,
    pub engagement_score: f64,
    pub instagram_reels: ReelStats,
    pub content_ideas: Vec<ContentIdea>,
}

/// Campaign-level projection shown next to the summary
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectedResults {
    pub est_reach: &'static str,
    pub est_engagement: &'static str,
    /// Percent
    pub audience_match: u8,
    /// Percent
    pub content_relevance: u8,
    /// Out of 10
    pub success_score: f64,
}

pub const PROJECTED_RESULTS: ProjectedResults = ProjectedResults {
    est_reach: "2.5M",
    est_engagement: "125K",
    audience_match: 92,
    content_relevance: 88,
    success_score: 8.6,
};

/// The sample candidates, in rank order
pub fn mock_influencers() -> Vec<InfluencerData> {
    vec![
        InfluencerData {
            rank: 1,
            name: "Sarah Beauty",
            id: "sarah_beauty_official",
            followers: 125_000,
            engagement_rate: 4.8,
            category: "Beauty",
            location: "Mumbai, India",
            photo_url: "https://images.unsplash.com/photo-1494790108755-2616b636b263?w=150&h=150&fit=crop&crop=face",
            post_count: 342,
            avg_likes: 6_500,
            avg_comments: 125,
            prices: Prices {
                post: 25_000,
                stories: 8_000,
                video: 45_000,
                cpm: 15.0,
                cpe: 5.2,
            },
            audience_authenticity: 92,
            audience_geo: "India 75%, US 15%, Others 10%",
            final_score: 8.7,
            content_affinity: 9.2,
            audience_match: 8.5,
            past_performance: 8.9,
            engagement_score: 9.1,
            instagram_reels: ReelStats {
                count: 45,
                avg_views: 15_000,
            },
            content_ideas: vec![ContentIdea {
                title: "Morning Skincare Routine",
                description: "A step-by-step morning skincare routine featuring your products",
                hashtags: &["#morningroutine", "#skincare", "#beauty", "#glowup", "#selfcare"],
                cta: &["Shop now", "Link in bio", "Save for later"],
            }],
        },
        InfluencerData {
            rank: 2,
            name: "Alex Fitness",
            id: "alexfitness_pro",
            followers: 98_000,
            engagement_rate: 5.2,
            category: "Fitness & Bodybuilding",
            location: "Delhi, India",
            photo_url: "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=150&h=150&fit=crop&crop=face",
            post_count: 289,
            avg_likes: 5_200,
            avg_comments: 98,
            prices: Prices {
                post: 20_000,
                stories: 6_000,
                video: 35_000,
                cpm: 12.0,
                cpe: 4.8,
            },
            audience_authenticity: 88,
            audience_geo: "India 80%, US 12%, Others 8%",
            final_score: 8.4,
            content_affinity: 8.8,
            audience_match: 8.2,
            past_performance: 8.6,
            engagement_score: 8.9,
            instagram_reels: ReelStats {
                count: 38,
                avg_views: 12_500,
            },
            content_ideas: vec![ContentIdea {
                title: "30-Day Fitness Challenge",
                description: "Create a fitness challenge using your products/services",
                hashtags: &["#fitness", "#challenge", "#workout", "#health", "#motivation"],
                cta: &["Join now", "Get started", "Transform today"],
            }],
        },
    ]
}
