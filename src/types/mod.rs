use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// ============= API Request/Response Types =============

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ChatBotRequest {
    pub user_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selection: Option<String>,
}

impl ChatBotRequest {
    /// The effective turn input. `message` and `selection` are interchangeable
    /// channels; `message` wins when both are present, and an absent input is
    /// treated as the empty string rather than rejected.
    pub fn input(&self) -> &str {
        self.message
            .as_deref()
            .or(self.selection.as_deref())
            .unwrap_or("")
    }
}

/// Conversation phase tag attached to every response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ConversationState {
    CollectingInfo,
    AwaitingConfirmation,
    FinalDraft,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ChatBotResponse {
    pub assistant_message: String,
    pub state: ConversationState,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<SelectOption>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub insights: Option<Vec<Insight>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub charts: Option<Vec<ChartData>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sources: Option<Vec<Source>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub draft: Option<Draft>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recommendations: Option<Recommendations>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub performance_prediction: Option<Vec<Insight>>,

    // Flags gating which sections the view renders. Raised only by the
    // with_* builders below so they always agree with the populated sections.
    #[serde(default)]
    pub show_options: bool,
    #[serde(default)]
    pub show_insights: bool,
    #[serde(default)]
    pub show_charts: bool,
    #[serde(default)]
    pub show_sources: bool,
    #[serde(default)]
    pub show_draft: bool,
    #[serde(default)]
    pub show_recommendations: bool,
    #[serde(default)]
    pub show_performance: bool,
    #[serde(default)]
    pub show_requirements: bool,
}

impl ChatBotResponse {
    /// A bare assistant message with no optional sections.
    pub fn message(text: impl Into<String>, state: ConversationState) -> Self {
        Self {
            assistant_message: text.into(),
            state,
            options: None,
            insights: None,
            charts: None,
            sources: None,
            draft: None,
            recommendations: None,
            performance_prediction: None,
            show_options: false,
            show_insights: false,
            show_charts: false,
            show_sources: false,
            show_draft: false,
            show_recommendations: false,
            show_performance: false,
            show_requirements: false,
        }
    }

    pub fn with_options(mut self, options: Vec<SelectOption>) -> Self {
        self.options = Some(options);
        self.show_options = true;
        self
    }

    pub fn with_insights(mut self, insights: Vec<Insight>) -> Self {
        self.insights = Some(insights);
        self.show_insights = true;
        self
    }

    pub fn with_charts(mut self, charts: Vec<ChartData>) -> Self {
        self.charts = Some(charts);
        self.show_charts = true;
        self
    }

    pub fn with_sources(mut self, sources: Vec<Source>) -> Self {
        self.sources = Some(sources);
        self.show_sources = true;
        self
    }

    pub fn with_draft(mut self, draft: Draft) -> Self {
        self.draft = Some(draft);
        self.show_draft = true;
        self
    }

    pub fn with_recommendations(mut self, recommendations: Recommendations) -> Self {
        self.recommendations = Some(recommendations);
        self.show_recommendations = true;
        self
    }

    pub fn with_performance(mut self, prediction: Vec<Insight>) -> Self {
        self.performance_prediction = Some(prediction);
        self.show_performance = true;
        self
    }

    /// Fixed fallback body returned with HTTP 500 when a request cannot be
    /// processed. Never touches session state.
    pub fn technical_difficulties() -> Self {
        Self::message(
            "I'm experiencing some technical difficulties. Please try again.",
            ConversationState::CollectingInfo,
        )
    }
}

// ============= Response Section Types =============

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SelectOption {
    pub label: String,
    pub value: String,
    #[serde(rename = "type")]
    pub kind: OptionKind,
}

impl SelectOption {
    pub fn new(label: impl Into<String>, value: impl Into<String>, kind: OptionKind) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
            kind,
        }
    }
}

/// What a selectable option represents, so the view can style it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum OptionKind {
    Platform,
    TrendChoice,
    Tone,
    Action,
    Schedule,
    Edit,
    Regenerate,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Insight {
    pub text: String,
    pub metric: Metric,
}

impl Insight {
    pub fn new(text: impl Into<String>, metric: Metric) -> Self {
        Self {
            text: text.into(),
            metric,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Metric {
    pub name: String,
    pub value: i64,
    pub unit: String,
}

impl Metric {
    pub fn new(name: impl Into<String>, value: i64, unit: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value,
            unit: unit.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ChartData {
    pub title: String,
    #[serde(rename = "type")]
    pub kind: ChartKind,
    pub data: Vec<ChartPoint>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Line,
    Bar,
    Pie,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ChartPoint {
    pub x: String,
    pub y: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub series: Option<String>,
}

impl ChartPoint {
    pub fn new(x: impl Into<String>, y: i64) -> Self {
        Self {
            x: x.into(),
            y,
            series: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Source {
    pub title: String,
    pub url: String,
}

impl Source {
    pub fn new(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Draft {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub headline: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub call_to_action: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Recommendations {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hashtags: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trend_alignment: Option<String>,
}

// ============= Error Types =============

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Session store error: {0}")]
    Session(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::Session(msg) => (axum::http::StatusCode::INTERNAL_SERVER_ERROR, msg),
            AppError::Config(msg) => (axum::http::StatusCode::INTERNAL_SERVER_ERROR, msg),
            AppError::Internal(msg) => (axum::http::StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        let body = serde_json::json!({
            "error": message
        });

        (status, axum::Json(body)).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
