//! The conversation engine: one exhaustive transition function.
//!
//! A turn maps `(session, input)` to a [`ChatBotResponse`] while mutating the
//! session in place. The flow is linear - platform, insights, focus, tone,
//! draft - and nothing the user sends is ever rejected: unrecognized
//! selections ride a default substitution at lookup time, and unknown
//! post-draft actions fall into a generic prompt without moving the step.

use tracing::debug;

use crate::conversation::content::{self, Focus, Platform, Tone};
use crate::session::{Session, Step};
use crate::types::{ChatBotResponse, ConversationState, Insight, Metric};

/// Drives the guided content-creation flow.
///
/// Stateless by itself; all per-user state lives in the [`Session`] handed
/// into [`ConversationEngine::turn`].
#[derive(Debug, Default)]
pub struct ConversationEngine;

impl ConversationEngine {
    /// Create an engine.
    pub fn new() -> Self {
        Self
    }

    /// Run one turn: decide the assistant reply for `input` given where the
    /// session sits, and advance the session.
    pub fn turn(&self, session: &mut Session, input: &str) -> ChatBotResponse {
        debug!(step = ?session.step, input, "processing conversation turn");

        match session.step {
            Step::Initial => self.begin_flow(session),
            Step::PlatformSelection => self.record_platform(session, input),
            Step::ShowInsights => self.record_focus(session, input),
            Step::ToneSelection => self.record_tone(session, input),
            Step::FinalDraft => self.dispatch_action(session, input),
            Step::Unknown => Self::general_help(),
        }
    }

    /// `initial`: any input starts the flow.
    fn begin_flow(&self, session: &mut Session) -> ChatBotResponse {
        session.step = Step::PlatformSelection;

        ChatBotResponse::message(
            "Great! I'd love to help you create content for your sarees. Which platforms would you like to post on?",
            ConversationState::CollectingInfo,
        )
        .with_options(content::platform_options())
    }

    /// `platform_selection`: remember the platform, show market insights and
    /// ask for a focus.
    fn record_platform(&self, session: &mut Session, input: &str) -> ChatBotResponse {
        session.selected_platforms.push(input.to_string());
        session.step = Step::ShowInsights;

        ChatBotResponse::message(
            format!(
                "Perfect! I'll create content for {input}. Let me show you some current market insights for sarees to help optimize your content."
            ),
            ConversationState::CollectingInfo,
        )
        .with_insights(content::market_insights())
        .with_charts(content::market_charts())
        .with_sources(content::market_sources())
        .with_options(content::focus_options())
    }

    /// `show_insights`: remember the focus (raw, even when unrecognized) and
    /// ask for a tone.
    fn record_focus(&self, session: &mut Session, input: &str) -> ChatBotResponse {
        session.focus = Some(input.to_string());
        session.step = Step::ToneSelection;

        ChatBotResponse::message(
            format!(
                "Excellent choice! {} Now, what tone would you like for your content?",
                content::focus_message(input)
            ),
            ConversationState::CollectingInfo,
        )
        .with_options(content::tone_options())
    }

    /// `tone_selection`: remember the tone and produce the draft bundle.
    fn record_tone(&self, session: &mut Session, input: &str) -> ChatBotResponse {
        session.tone = Some(input.to_string());
        session.step = Step::FinalDraft;

        let focus = Focus::from_value(session.focus.as_deref().unwrap_or(""));

        ChatBotResponse::message(
            "Perfect! Here's your personalized content draft based on your preferences and current market trends:",
            ConversationState::FinalDraft,
        )
        .with_draft(content::draft_for(focus))
        .with_recommendations(content::recommendations_for(focus))
        .with_performance(predict_performance(session))
        .with_options(content::draft_action_options())
    }

    /// `final_draft`: dispatch on the literal action value.
    fn dispatch_action(&self, session: &mut Session, input: &str) -> ChatBotResponse {
        match input {
            "publish_now" => {
                session.step = Step::Initial;

                ChatBotResponse::message(
                    "🎉 Your post has been published successfully! I'm monitoring its performance and will update you with analytics. Would you like to create another post or analyze current trends?",
                    ConversationState::CollectingInfo,
                )
                .with_options(content::post_publish_options())
            }
            "schedule_post" => ChatBotResponse::message(
                "📅 When would you like to schedule this post? Based on your audience insights, I recommend posting during peak engagement hours.",
                ConversationState::AwaitingConfirmation,
            )
            .with_options(content::schedule_options())
            .with_insights(content::schedule_insights()),
            "edit_caption" => {
                session.step = Step::ToneSelection;

                ChatBotResponse::message(
                    "Let's refine your caption! What aspect would you like to adjust?",
                    ConversationState::CollectingInfo,
                )
                .with_options(content::edit_caption_options())
            }
            "regenerate" => {
                session.step = Step::ToneSelection;

                ChatBotResponse::message(
                    "Let's create a fresh version! Should I keep the same focus or try a different approach?",
                    ConversationState::CollectingInfo,
                )
                .with_options(content::regenerate_options())
            }
            _ => ChatBotResponse::message(
                "I'm here to help! What would you like to do next?",
                ConversationState::CollectingInfo,
            )
            .with_options(content::next_step_options()),
        }
    }

    /// Reply for sessions whose persisted step this build does not know.
    fn general_help() -> ChatBotResponse {
        ChatBotResponse::message(
            "I'd love to help you create amazing content for your business! You can ask me to create posts, analyze trends, or generate ads for your products.",
            ConversationState::CollectingInfo,
        )
        .with_options(content::quick_start_options())
    }
}

/// Predict reach/engagement/clicks for the drafted post.
///
/// Base metrics come from the FIRST platform the user picked (instagram when
/// none is recognized), scaled by the focus and tone multipliers and rounded
/// to the nearest whole number.
fn predict_performance(session: &Session) -> Vec<Insight> {
    let platform = Platform::from_value(
        session
            .selected_platforms
            .first()
            .map(String::as_str)
            .unwrap_or(""),
    );
    let base = platform.base_metrics();

    let focus_multiplier = Focus::from_value(session.focus.as_deref().unwrap_or("")).multiplier();
    let tone_multiplier = Tone::from_value(session.tone.as_deref().unwrap_or("")).multiplier();
    let scale = |value: u32| (f64::from(value) * focus_multiplier * tone_multiplier).round() as i64;

    vec![
        Insight::new(
            "Estimated organic reach for this post based on your content strategy",
            Metric::new("Estimated Reach", scale(base.reach), "users"),
        ),
        Insight::new(
            "Predicted engagement rate based on similar content performance",
            Metric::new("Expected Engagement", scale(base.engagement), "interactions"),
        ),
        Insight::new(
            "Projected click-through rate to your store or website",
            Metric::new("Estimated Clicks", scale(base.clicks), "clicks"),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn drive(engine: &ConversationEngine, session: &mut Session, inputs: &[&str]) -> ChatBotResponse {
        let mut last = None;
        for input in inputs {
            last = Some(engine.turn(session, input));
        }
        last.expect("at least one input")
    }

    fn metric_values(response: &ChatBotResponse) -> Vec<i64> {
        response
            .performance_prediction
            .as_ref()
            .expect("performance prediction present")
            .iter()
            .map(|insight| insight.metric.value)
            .collect()
    }

    #[test]
    fn any_initial_input_asks_for_platforms() {
        let engine = ConversationEngine::new();

        for input in ["hi", "", "post something for me"] {
            let mut session = Session::new();
            let response = engine.turn(&mut session, input);

            assert_eq!(session.step, Step::PlatformSelection);
            assert_eq!(response.state, ConversationState::CollectingInfo);
            assert_eq!(response.options.as_ref().map(Vec::len), Some(5));
            assert!(response.show_options);
        }
    }

    #[test]
    fn platform_selection_appends_and_shows_insights() {
        let engine = ConversationEngine::new();
        let mut session = Session::new();

        let response = drive(&engine, &mut session, &["hi", "instagram"]);

        assert_eq!(session.step, Step::ShowInsights);
        assert_eq!(session.selected_platforms, vec!["instagram".to_string()]);
        assert_eq!(response.charts.as_ref().map(Vec::len), Some(2));
        assert_eq!(response.sources.as_ref().map(Vec::len), Some(2));
        assert_eq!(response.insights.as_ref().map(Vec::len), Some(3));
        assert_eq!(response.options.as_ref().map(Vec::len), Some(4));
        assert!(response.assistant_message.contains("instagram"));
    }

    #[test]
    fn platform_order_is_preserved_across_flows() {
        let engine = ConversationEngine::new();
        let mut session = Session::new();

        drive(
            &engine,
            &mut session,
            &["hi", "twitter", "organic_focus", "casual", "publish_now"],
        );
        drive(&engine, &mut session, &["again", "tiktok"]);

        assert_eq!(
            session.selected_platforms,
            vec!["twitter".to_string(), "tiktok".to_string()]
        );
    }

    #[test]
    fn unrecognized_focus_still_advances_then_defaults_to_traditional() {
        let engine = ConversationEngine::new();
        let mut session = Session::new();

        let response = drive(&engine, &mut session, &["hi", "instagram", "vaporwave_focus"]);
        assert_eq!(session.step, Step::ToneSelection);
        assert!(response.assistant_message.contains("Great choice!"));
        assert_eq!(response.options.as_ref().map(Vec::len), Some(4));

        let draft = engine.turn(&mut session, "casual");
        let headline = draft.draft.unwrap().headline.unwrap();
        assert_eq!(headline, "Authentic Handloom Sarees - Heritage Collection");
    }

    #[test]
    fn worked_example_festival_emotional_on_instagram() {
        let engine = ConversationEngine::new();
        let mut session = Session::new();

        let response = drive(
            &engine,
            &mut session,
            &["hi", "instagram", "festival_focus", "emotional"],
        );

        assert_eq!(session.step, Step::FinalDraft);
        assert_eq!(response.state, ConversationState::FinalDraft);
        assert!(response.show_draft && response.show_recommendations && response.show_performance);
        assert_eq!(response.options.as_ref().map(Vec::len), Some(5));

        // round(12000 * 1.3 * 1.2), round(1200 * 1.3 * 1.2), round(200 * 1.3 * 1.2)
        assert_eq!(metric_values(&response), vec![18720, 1872, 312]);
    }

    #[rstest]
    #[case("organic_focus", "casual", 13200, 1320, 220)]
    #[case("organic_focus", "emotional", 15840, 1584, 264)]
    #[case("festival_focus", "casual", 15600, 1560, 260)]
    #[case("festival_focus", "emotional", 18720, 1872, 312)]
    #[case("no_such_focus", "energetic", 13200, 1320, 220)]
    fn prediction_multipliers(
        #[case] focus: &str,
        #[case] tone: &str,
        #[case] reach: i64,
        #[case] engagement: i64,
        #[case] clicks: i64,
    ) {
        let engine = ConversationEngine::new();
        let mut session = Session::new();

        let response = drive(&engine, &mut session, &["hi", "instagram", focus, tone]);

        assert_eq!(metric_values(&response), vec![reach, engagement, clicks]);
    }

    #[test]
    fn first_platform_drives_the_prediction() {
        let engine = ConversationEngine::new();
        let mut session = Session::new();

        // tiktok base reach is 20000; the second flow's platform must not win.
        drive(
            &engine,
            &mut session,
            &["hi", "tiktok", "organic_focus", "casual", "publish_now"],
        );
        let response = drive(
            &engine,
            &mut session,
            &["again", "linkedin", "organic_focus", "casual"],
        );

        assert_eq!(metric_values(&response)[0], 22000); // round(20000 * 1.1)
    }

    #[test]
    fn unknown_platform_predicts_from_instagram_baseline() {
        let engine = ConversationEngine::new();
        let mut session = Session::new();

        let response = drive(
            &engine,
            &mut session,
            &["hi", "carrier-pigeon", "organic_focus", "casual"],
        );

        assert_eq!(metric_values(&response)[0], 13200); // round(12000 * 1.1)
    }

    #[test]
    fn publish_now_resets_to_initial() {
        let engine = ConversationEngine::new();
        let mut session = Session::new();

        let response = drive(
            &engine,
            &mut session,
            &["hi", "instagram", "festival_focus", "emotional", "publish_now"],
        );

        assert_eq!(session.step, Step::Initial);
        assert_eq!(response.state, ConversationState::CollectingInfo);
        assert!(response.assistant_message.contains("published successfully"));
        assert_eq!(response.options.as_ref().map(Vec::len), Some(3));
    }

    #[test]
    fn schedule_post_awaits_confirmation_without_moving_the_step() {
        let engine = ConversationEngine::new();
        let mut session = Session::new();

        let response = drive(
            &engine,
            &mut session,
            &["hi", "instagram", "festival_focus", "emotional", "schedule_post"],
        );

        assert_eq!(response.state, ConversationState::AwaitingConfirmation);
        assert_eq!(response.options.as_ref().map(Vec::len), Some(4));
        assert_eq!(response.insights.as_ref().map(Vec::len), Some(2));
        assert_eq!(session.step, Step::FinalDraft);

        // A slot selection is not a known action; the step stays put.
        let followup = engine.turn(&mut session, "schedule_7pm");
        assert!(followup.assistant_message.contains("I'm here to help"));
        assert_eq!(session.step, Step::FinalDraft);
    }

    #[rstest]
    #[case("edit_caption", 4)]
    #[case("regenerate", 3)]
    fn edit_and_regenerate_return_to_tone_selection(#[case] action: &str, #[case] options: usize) {
        let engine = ConversationEngine::new();
        let mut session = Session::new();

        let response = drive(
            &engine,
            &mut session,
            &["hi", "instagram", "premium_focus", "professional", action],
        );

        assert_eq!(session.step, Step::ToneSelection);
        assert_eq!(response.state, ConversationState::CollectingInfo);
        assert_eq!(response.options.as_ref().map(Vec::len), Some(options));

        // Choosing a tone again regenerates the draft from the same focus.
        let redraft = engine.turn(&mut session, "emotional");
        assert_eq!(session.step, Step::FinalDraft);
        assert!(redraft.draft.unwrap().headline.unwrap().contains("Premium"));
    }

    #[test]
    fn unknown_action_leaves_the_draft_in_place() {
        let engine = ConversationEngine::new();
        let mut session = Session::new();

        let response = drive(
            &engine,
            &mut session,
            &["hi", "instagram", "organic_focus", "casual", "change_images"],
        );

        assert_eq!(session.step, Step::FinalDraft);
        assert_eq!(response.state, ConversationState::CollectingInfo);
        assert_eq!(response.options.as_ref().map(Vec::len), Some(3));

        // The draft can still be published afterwards.
        let publish = engine.turn(&mut session, "publish_now");
        assert!(publish.assistant_message.contains("published successfully"));
        assert_eq!(session.step, Step::Initial);
    }

    #[test]
    fn unknown_step_gets_the_generic_prompt() {
        let engine = ConversationEngine::new();
        let mut session = Session {
            step: Step::Unknown,
            ..Session::default()
        };

        let response = engine.turn(&mut session, "hello?");

        assert_eq!(session.step, Step::Unknown);
        assert_eq!(response.state, ConversationState::CollectingInfo);
        assert!(response.assistant_message.contains("amazing content"));
        assert_eq!(response.options.as_ref().map(Vec::len), Some(3));
    }

    #[test]
    fn tone_and_focus_are_overwritten_on_regeneration() {
        let engine = ConversationEngine::new();
        let mut session = Session::new();

        drive(
            &engine,
            &mut session,
            &["hi", "instagram", "organic_focus", "casual", "regenerate", "emotional"],
        );

        assert_eq!(session.tone.as_deref(), Some("emotional"));
        assert_eq!(session.focus.as_deref(), Some("organic_focus"));
        assert_eq!(session.step, Step::FinalDraft);
    }
}
