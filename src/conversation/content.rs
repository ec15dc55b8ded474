//! Canned assistant content: option lists, market insights, chart payloads,
//! draft bundles, hashtag sets and platform base metrics.
//!
//! Every lookup in here substitutes a default instead of failing - an
//! unrecognized focus produces the traditional bundle, an unrecognized
//! platform the instagram metrics. The guided flow never surfaces a
//! bad-selection error to the user.

use crate::types::{
    ChartData, ChartKind, ChartPoint, Draft, Insight, Metric, OptionKind, Recommendations,
    SelectOption, Source,
};

// ============= Domain Vocabulary =============

/// Marketing angle chosen at the insights step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Organic,
    Traditional,
    Premium,
    Festival,
}

impl Focus {
    /// Resolve a raw selection value. Anything unrecognized (including the
    /// absent focus of a brand-new session) maps to `Traditional`.
    pub fn from_value(value: &str) -> Self {
        match value {
            "organic_focus" => Focus::Organic,
            "traditional_focus" => Focus::Traditional,
            "premium_focus" => Focus::Premium,
            "festival_focus" => Focus::Festival,
            _ => Focus::Traditional,
        }
    }

    /// Reach/engagement/clicks multiplier applied at draft time.
    pub fn multiplier(self) -> f64 {
        match self {
            Focus::Festival => 1.3,
            _ => 1.1,
        }
    }
}

/// Content tone chosen before the draft is generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Casual,
    Professional,
    Emotional,
    Energetic,
}

impl Tone {
    /// Resolve a raw selection value, defaulting to `Casual`.
    pub fn from_value(value: &str) -> Self {
        match value {
            "casual" => Tone::Casual,
            "professional" => Tone::Professional,
            "emotional" => Tone::Emotional,
            "energetic" => Tone::Energetic,
            _ => Tone::Casual,
        }
    }

    /// Only the emotional tone boosts predicted performance.
    pub fn multiplier(self) -> f64 {
        match self {
            Tone::Emotional => 1.2,
            _ => 1.0,
        }
    }
}

/// Publishing platform. Unrecognized values fall back to Instagram.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Facebook,
    Instagram,
    Twitter,
    Linkedin,
    Tiktok,
}

impl Platform {
    pub fn from_value(value: &str) -> Self {
        match value {
            "facebook" => Platform::Facebook,
            "instagram" => Platform::Instagram,
            "twitter" => Platform::Twitter,
            "linkedin" => Platform::Linkedin,
            "tiktok" => Platform::Tiktok,
            _ => Platform::Instagram,
        }
    }

    /// Historical organic baseline for a single post on this platform.
    pub fn base_metrics(self) -> BaseMetrics {
        match self {
            Platform::Facebook => BaseMetrics {
                reach: 15_000,
                engagement: 800,
                clicks: 120,
            },
            Platform::Instagram => BaseMetrics {
                reach: 12_000,
                engagement: 1_200,
                clicks: 200,
            },
            Platform::Twitter => BaseMetrics {
                reach: 8_000,
                engagement: 400,
                clicks: 80,
            },
            Platform::Linkedin => BaseMetrics {
                reach: 5_000,
                engagement: 200,
                clicks: 50,
            },
            Platform::Tiktok => BaseMetrics {
                reach: 20_000,
                engagement: 2_000,
                clicks: 300,
            },
        }
    }
}

/// Baseline post performance used by the prediction step.
#[derive(Debug, Clone, Copy)]
pub struct BaseMetrics {
    pub reach: u32,
    pub engagement: u32,
    pub clicks: u32,
}

// ============= Option Lists =============

pub fn platform_options() -> Vec<SelectOption> {
    vec![
        SelectOption::new("📘 Facebook", "facebook", OptionKind::Platform),
        SelectOption::new("📸 Instagram", "instagram", OptionKind::Platform),
        SelectOption::new("🐦 Twitter", "twitter", OptionKind::Platform),
        SelectOption::new("💼 LinkedIn", "linkedin", OptionKind::Platform),
        SelectOption::new("🎵 TikTok", "tiktok", OptionKind::Platform),
    ]
}

pub fn focus_options() -> Vec<SelectOption> {
    vec![
        SelectOption::new(
            "✨ Focus on Organic/Eco-friendly",
            "organic_focus",
            OptionKind::TrendChoice,
        ),
        SelectOption::new(
            "🎨 Highlight Traditional Craftsmanship",
            "traditional_focus",
            OptionKind::TrendChoice,
        ),
        SelectOption::new(
            "💎 Emphasize Premium Quality",
            "premium_focus",
            OptionKind::TrendChoice,
        ),
        SelectOption::new(
            "🎉 Festival/Occasion Special",
            "festival_focus",
            OptionKind::TrendChoice,
        ),
    ]
}

pub fn tone_options() -> Vec<SelectOption> {
    vec![
        SelectOption::new("😊 Casual & Friendly", "casual", OptionKind::Tone),
        SelectOption::new("💼 Professional & Elegant", "professional", OptionKind::Tone),
        SelectOption::new("❤️ Emotional & Heartfelt", "emotional", OptionKind::Tone),
        SelectOption::new("🎉 Exciting & Energetic", "energetic", OptionKind::Tone),
    ]
}

pub fn draft_action_options() -> Vec<SelectOption> {
    vec![
        SelectOption::new("🚀 Publish Now", "publish_now", OptionKind::Action),
        SelectOption::new("✏️ Edit Caption", "edit_caption", OptionKind::Action),
        SelectOption::new("🖼️ Change Images", "change_images", OptionKind::Action),
        SelectOption::new("📅 Schedule Post", "schedule_post", OptionKind::Action),
        SelectOption::new("🔄 Generate New Version", "regenerate", OptionKind::Action),
    ]
}

pub fn post_publish_options() -> Vec<SelectOption> {
    vec![
        SelectOption::new("📊 View Analytics", "view_analytics", OptionKind::Action),
        SelectOption::new("📝 Create Another Post", "create_new_post", OptionKind::Action),
        SelectOption::new("📈 Show Trends", "show_trends", OptionKind::Action),
    ]
}

pub fn schedule_options() -> Vec<SelectOption> {
    vec![
        SelectOption::new("🌅 Tomorrow 7 AM", "schedule_7am", OptionKind::Schedule),
        SelectOption::new("🌆 Tomorrow 7 PM", "schedule_7pm", OptionKind::Schedule),
        SelectOption::new("📅 This Weekend", "schedule_weekend", OptionKind::Schedule),
        SelectOption::new("🗓️ Custom Time", "custom_schedule", OptionKind::Schedule),
    ]
}

pub fn edit_caption_options() -> Vec<SelectOption> {
    vec![
        SelectOption::new("📝 Change Tone", "change_tone", OptionKind::Edit),
        SelectOption::new("🔑 Add Keywords", "add_keywords", OptionKind::Edit),
        SelectOption::new("📏 Make it Shorter", "make_shorter", OptionKind::Edit),
        SelectOption::new("📏 Make it Longer", "make_longer", OptionKind::Edit),
    ]
}

pub fn regenerate_options() -> Vec<SelectOption> {
    vec![
        SelectOption::new(
            "🔄 Same Focus, Different Style",
            "same_focus",
            OptionKind::Regenerate,
        ),
        SelectOption::new("🎨 Try Different Focus", "different_focus", OptionKind::Regenerate),
        SelectOption::new("🎯 A/B Test Version", "ab_test", OptionKind::Regenerate),
    ]
}

pub fn next_step_options() -> Vec<SelectOption> {
    vec![
        SelectOption::new("📝 Create New Post", "create_post", OptionKind::Action),
        SelectOption::new("📊 View Analytics", "view_analytics", OptionKind::Action),
        SelectOption::new("📈 Market Trends", "show_trends", OptionKind::Action),
    ]
}

pub fn quick_start_options() -> Vec<SelectOption> {
    vec![
        SelectOption::new("📝 Create a Post", "create_post", OptionKind::Action),
        SelectOption::new("📊 Show Market Trends", "show_trends", OptionKind::Action),
        SelectOption::new("🎯 Generate Ad Campaign", "create_ad", OptionKind::Action),
    ]
}

// ============= Market Insights =============

pub fn market_insights() -> Vec<Insight> {
    vec![
        Insight::new(
            "Organic cotton sarees are gaining significant traction in the market",
            Metric::new("Growth Rate", 12, "%"),
        ),
        Insight::new(
            "Average market price for handloom sarees",
            Metric::new("Average Price", 2500, "INR"),
        ),
        Insight::new(
            "Peak engagement time for saree content",
            Metric::new("Best Time", 7, "PM"),
        ),
    ]
}

pub fn market_charts() -> Vec<ChartData> {
    vec![
        ChartData {
            title: "Saree Demand Trends (Last 6 Months)".to_string(),
            kind: ChartKind::Line,
            data: vec![
                ChartPoint::new("Apr", 1200),
                ChartPoint::new("May", 1350),
                ChartPoint::new("Jun", 1600),
                ChartPoint::new("Jul", 1450),
                ChartPoint::new("Aug", 1800),
                ChartPoint::new("Sep", 2100),
            ],
        },
        ChartData {
            title: "Popular Saree Categories".to_string(),
            kind: ChartKind::Bar,
            data: vec![
                ChartPoint::new("Silk", 45),
                ChartPoint::new("Cotton", 35),
                ChartPoint::new("Georgette", 25),
                ChartPoint::new("Chiffon", 20),
                ChartPoint::new("Handloom", 40),
            ],
        },
    ]
}

pub fn market_sources() -> Vec<Source> {
    vec![
        Source::new(
            "Google Trends - Saree Market Analysis",
            "https://trends.google.com/saree-trends",
        ),
        Source::new("Fashion Industry Report 2024", "https://fashionreport.com/2024"),
    ]
}

pub fn schedule_insights() -> Vec<Insight> {
    vec![
        Insight::new(
            "Your audience is most active during evening hours",
            Metric::new("Peak Hour", 7, "PM"),
        ),
        Insight::new(
            "Weekend posts get higher engagement for fashion content",
            Metric::new("Weekend Boost", 25, "%"),
        ),
    ]
}

// ============= Focus-Keyed Content =============

/// One-line acknowledgement for the chosen focus.
pub fn focus_message(value: &str) -> &'static str {
    match value {
        "organic_focus" => {
            "Focusing on eco-friendly and sustainable aspects will resonate well with environmentally conscious customers."
        }
        "traditional_focus" => {
            "Highlighting traditional craftsmanship will appeal to customers who value heritage and authenticity."
        }
        "premium_focus" => {
            "Emphasizing premium quality will attract customers looking for luxury and exclusivity."
        }
        "festival_focus" => {
            "Festival-themed content performs exceptionally well during celebration seasons."
        }
        _ => "Great choice!",
    }
}

pub fn draft_for(focus: Focus) -> Draft {
    let (caption, headline, body_text, call_to_action) = match focus {
        Focus::Organic => (
            "🌿 Embrace sustainable fashion with our eco-friendly handwoven sarees! Each piece tells a story of traditional craftsmanship while caring for our planet. ✨ #SustainableFashion #EcoFriendlySarees",
            "Eco-Friendly Handloom Sarees - Sustainable Style!",
            "Discover our collection of organic cotton sarees, handwoven by skilled artisans using sustainable practices. Perfect for the environmentally conscious fashionista.",
            "Shop Eco Collection",
        ),
        Focus::Traditional => (
            "✨ Celebrate timeless elegance with our authentic handloom sarees. Each thread woven with love, each design rooted in tradition. Experience the beauty of Indian heritage! 🇮🇳 #HandloomLove #TraditionalWear",
            "Authentic Handloom Sarees - Heritage Collection",
            "Immerse yourself in the rich tradition of Indian weaving. Our handloom sarees are crafted by master weavers, preserving centuries-old techniques.",
            "Explore Heritage",
        ),
        Focus::Premium => (
            "💎 Indulge in luxury with our premium saree collection. Exquisite craftsmanship meets contemporary elegance. Because you deserve nothing but the finest! ✨ #LuxurySarees #PremiumFashion",
            "Premium Luxury Sarees - Exclusive Collection",
            "Experience unparalleled luxury with our meticulously crafted premium sarees. Each piece is a masterwork of design and quality.",
            "Shop Luxury",
        ),
        Focus::Festival => (
            "🎉 Light up every celebration with our stunning festival saree collection! Perfect for Diwali, weddings, and special occasions. Shine bright like the star you are! ⭐ #FestivalWear #CelebrationStyle",
            "Festival Special Sarees - Limited Time Offer!",
            "Make every celebration memorable with our specially curated festival collection. Vibrant colors, rich fabrics, and intricate designs await you.",
            "Shop Festival Collection",
        ),
    };

    Draft {
        caption: Some(caption.to_string()),
        headline: Some(headline.to_string()),
        body_text: Some(body_text.to_string()),
        images: Some(vec![
            "https://cdn.ai/posts/saree001.jpg".to_string(),
            "https://cdn.ai/posts/saree002.jpg".to_string(),
        ]),
        call_to_action: Some(call_to_action.to_string()),
    }
}

pub fn recommendations_for(focus: Focus) -> Recommendations {
    let hashtags: &[&str] = match focus {
        Focus::Organic => &[
            "#EcoFriendlySarees",
            "#SustainableFashion",
            "#OrganicCotton",
            "#EthicalFashion",
            "#GreenFashion",
        ],
        Focus::Traditional => &[
            "#HandloomSarees",
            "#TraditionalWear",
            "#IndianHeritage",
            "#HandwovenLove",
            "#AuthenticCraft",
        ],
        Focus::Premium => &[
            "#LuxurySarees",
            "#PremiumFashion",
            "#ExclusiveCollection",
            "#HighEndFashion",
            "#LuxuryWear",
        ],
        Focus::Festival => &[
            "#FestivalWear",
            "#CelebrationStyle",
            "#FestivalFashion",
            "#SpecialOccasion",
            "#FestiveWear",
        ],
    };

    let trend_alignment = match focus {
        Focus::Organic => {
            "Aligns with the growing eco-conscious fashion trend, which has seen 15% growth this quarter."
        }
        Focus::Traditional => {
            "Capitalizes on the heritage fashion revival trend, popular during wedding season."
        }
        Focus::Premium => {
            "Targets the luxury market segment, which shows consistent high engagement rates."
        }
        Focus::Festival => {
            "Perfect timing with upcoming festival season, historically our highest sales period."
        }
    };

    Recommendations {
        hashtags: Some(hashtags.iter().map(|h| h.to_string()).collect()),
        trend_alignment: Some(trend_alignment.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_focus_defaults_to_traditional() {
        assert_eq!(Focus::from_value("mystery"), Focus::Traditional);
        assert_eq!(Focus::from_value(""), Focus::Traditional);
        assert_eq!(Focus::from_value("festival_focus"), Focus::Festival);
    }

    #[test]
    fn unknown_platform_defaults_to_instagram() {
        let metrics = Platform::from_value("myspace").base_metrics();
        assert_eq!(metrics.reach, 12_000);
        assert_eq!(metrics.engagement, 1_200);
        assert_eq!(metrics.clicks, 200);
    }

    #[test]
    fn focus_multiplier_boosts_festival_only() {
        assert_eq!(Focus::from_value("festival_focus").multiplier(), 1.3);
        assert_eq!(Focus::from_value("organic_focus").multiplier(), 1.1);
        assert_eq!(Focus::from_value("unknown").multiplier(), 1.1);
    }

    #[test]
    fn tone_multiplier_boosts_emotional_only() {
        assert_eq!(Tone::from_value("emotional").multiplier(), 1.2);
        assert_eq!(Tone::from_value("casual").multiplier(), 1.0);
        assert_eq!(Tone::from_value("").multiplier(), 1.0);
    }

    #[test]
    fn option_lists_have_fixed_sizes() {
        assert_eq!(platform_options().len(), 5);
        assert_eq!(focus_options().len(), 4);
        assert_eq!(tone_options().len(), 4);
        assert_eq!(draft_action_options().len(), 5);
        assert_eq!(schedule_options().len(), 4);
        assert_eq!(quick_start_options().len(), 3);
    }

    #[test]
    fn market_payload_sizes() {
        assert_eq!(market_insights().len(), 3);
        assert_eq!(market_charts().len(), 2);
        assert_eq!(market_sources().len(), 2);
        assert_eq!(schedule_insights().len(), 2);
    }

    #[test]
    fn unknown_focus_message_falls_back() {
        assert_eq!(focus_message("whatever"), "Great choice!");
        assert!(focus_message("festival_focus").contains("celebration seasons"));
    }

    #[test]
    fn every_focus_draft_is_complete() {
        for focus in [Focus::Organic, Focus::Traditional, Focus::Premium, Focus::Festival] {
            let draft = draft_for(focus);
            assert!(draft.caption.is_some());
            assert!(draft.headline.is_some());
            assert!(draft.body_text.is_some());
            assert!(draft.call_to_action.is_some());
            assert_eq!(draft.images.as_ref().map(Vec::len), Some(2));

            let recs = recommendations_for(focus);
            assert_eq!(recs.hashtags.as_ref().map(Vec::len), Some(5));
            assert!(recs.trend_alignment.is_some());
        }
    }
}
