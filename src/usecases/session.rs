//! Conversation dispatcher. Owns the transcript and the modal state.
//!
//! One session processes one action at a time: every dispatch method takes
//! `&mut self`, so overlapping pending operations are unrepresentable and
//! bot replies always land in dispatch order. (The reference behavior let
//! quick actions fire while a reply was pending; we serialize strictly
//! instead — see DESIGN.md.)

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use tracing::{debug, info};

use super::advisory::{self, TipCategory};
use super::intent::{self, Intent};
use crate::domain::{BotPayload, ChatMessage, DomainError, HealthStatus, Season, Sender};
use crate::ports::{CropVisionPort, MarketPort, WeatherPort};

/// Location used when a weather request carries none.
const DEFAULT_LOCATION: &str = "Your Area";

const WELCOME_TEXT: &str = "🌾 Welcome to FarmWise - Your Smart Farming Assistant! 🌱\n\n\
    I'm here to help you make informed agricultural decisions. I can assist you with:\n\n\
    • Crop recommendations based on your soil and climate\n\
    • Real-time weather forecasts\n\
    • Current market prices for crops\n\
    • Crop health analysis from images\n\
    • Expert farming tips and advice\n\n\
    How can I help you today?";

const HELP_TEXT: &str = "I can help you with:\n\n\
    • Crop recommendations - Tell me your soil type and location\n\
    • Weather forecasts - Ask \"What's the weather?\"\n\
    • Market prices - Ask \"Show market prices\"\n\
    • Image analysis - Upload a crop photo\n\
    • Farming tips - Ask for specific advice\n\n\
    You can also use the quick action buttons below for faster access!";

const ANALYZING_TEXT: &str = "Analyzing your crop image... This may take a moment.";

/// Simulated "thinking" pauses, in milliseconds. Zeroed in tests.
#[derive(Debug, Clone, Copy)]
pub struct Delays {
    /// Before classifying a free-text message.
    pub reply_ms: u64,
    /// Before answering a tips request.
    pub tips_ms: u64,
    /// Before answering a submitted crop form.
    pub form_ms: u64,
}

impl Default for Delays {
    fn default() -> Self {
        Self {
            reply_ms: 1000,
            tips_ms: 800,
            form_ms: 1500,
        }
    }
}

impl Delays {
    /// No artificial latency. For tests.
    pub fn none() -> Self {
        Self {
            reply_ms: 0,
            tips_ms: 0,
            form_ms: 0,
        }
    }
}

/// Predefined button identifiers. Trigger canned requests without
/// free-text parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuickAction {
    CropRecommendation,
    Weather,
    MarketPrices,
    ImageAnalysis,
    FarmingTips,
}

impl QuickAction {
    pub const ALL: [QuickAction; 5] = [
        Self::CropRecommendation,
        Self::Weather,
        Self::MarketPrices,
        Self::ImageAnalysis,
        Self::FarmingTips,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::CropRecommendation => "Crop Recommendations",
            Self::Weather => "Weather Forecast",
            Self::MarketPrices => "Market Prices",
            Self::ImageAnalysis => "Analyze Crop Image",
            Self::FarmingTips => "Farming Tips",
        }
    }
}

/// Modal state of the session. The crop form and the image upload are the
/// only flows that span two user interactions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionMode {
    #[default]
    Idle,
    AwaitingCropForm,
    AwaitingImageUpload,
}

/// What a dispatch call did, so the front-end knows how to follow up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    /// A bot reply was appended to the transcript.
    Replied,
    /// The crop form should be shown; no bot reply yet.
    FormOpened,
    /// An image should be requested; no bot reply yet.
    UploadRequested,
    /// Empty input or wrong modal state; transcript untouched.
    Ignored,
}

/// A single-user conversation. Owns the append-only transcript and routes
/// each user action to the matching advisory source.
pub struct ChatSession {
    weather: Arc<dyn WeatherPort>,
    market: Arc<dyn MarketPort>,
    vision: Arc<dyn CropVisionPort>,
    delays: Delays,
    messages: Vec<ChatMessage>,
    next_id: u64,
    mode: SessionMode,
}

impl ChatSession {
    /// Create a session with the welcome message already in the transcript.
    pub fn new(
        weather: Arc<dyn WeatherPort>,
        market: Arc<dyn MarketPort>,
        vision: Arc<dyn CropVisionPort>,
        delays: Delays,
    ) -> Self {
        let mut session = Self {
            weather,
            market,
            vision,
            delays,
            messages: Vec::new(),
            next_id: 1,
            mode: SessionMode::Idle,
        };
        session.push_bot(WELCOME_TEXT.to_string(), None);
        session
    }

    /// The transcript so far, in append order.
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn mode(&self) -> SessionMode {
        self.mode
    }

    /// Handle a free-text message. Ignored while a modal flow is open or
    /// when the text is blank; otherwise appends the user message,
    /// simulates thinking, classifies and dispatches.
    pub async fn send_text(&mut self, text: &str) -> Result<Dispatch, DomainError> {
        let text = text.trim();
        if text.is_empty() || self.mode != SessionMode::Idle {
            return Ok(Dispatch::Ignored);
        }

        self.push_user(text.to_string());
        self.think(self.delays.reply_ms).await;

        let intent = intent::classify(text);
        debug!(?intent, "classified free-text input");
        match intent {
            Intent::Weather => self.reply_weather(DEFAULT_LOCATION).await,
            Intent::MarketPrices => self.reply_market().await,
            Intent::CropRecommendation => {
                self.mode = SessionMode::AwaitingCropForm;
                Ok(Dispatch::FormOpened)
            }
            Intent::FarmingTips(category) => self.reply_tips(category).await,
            Intent::Unknown => {
                self.push_bot(HELP_TEXT.to_string(), None);
                Ok(Dispatch::Replied)
            }
        }
    }

    /// Handle a quick-action button. Serialized like everything else:
    /// ignored while a modal flow is already open.
    pub async fn invoke_quick_action(&mut self, action: QuickAction) -> Result<Dispatch, DomainError> {
        if self.mode != SessionMode::Idle {
            return Ok(Dispatch::Ignored);
        }
        match action {
            QuickAction::CropRecommendation => {
                self.mode = SessionMode::AwaitingCropForm;
                Ok(Dispatch::FormOpened)
            }
            QuickAction::Weather => {
                self.push_user("Show me the weather forecast".to_string());
                self.reply_weather(DEFAULT_LOCATION).await
            }
            QuickAction::MarketPrices => {
                self.push_user("What are the current market prices?".to_string());
                self.reply_market().await
            }
            QuickAction::ImageAnalysis => {
                self.mode = SessionMode::AwaitingImageUpload;
                Ok(Dispatch::UploadRequested)
            }
            QuickAction::FarmingTips => {
                self.push_user("Give me some farming tips".to_string());
                self.reply_tips(None).await
            }
        }
    }

    /// Submit the crop form. Only valid while the form is open and all
    /// fields are non-empty (the form UI enforces this; we re-check and
    /// ignore rather than error).
    pub async fn submit_crop_form(
        &mut self,
        soil_type: &str,
        location: &str,
        season: Season,
    ) -> Result<Dispatch, DomainError> {
        if self.mode != SessionMode::AwaitingCropForm
            || soil_type.trim().is_empty()
            || location.trim().is_empty()
        {
            return Ok(Dispatch::Ignored);
        }
        self.mode = SessionMode::Idle;

        self.push_user(format!(
            "I need crop recommendations for {soil_type} soil in {location} during {season} season"
        ));
        self.think(self.delays.form_ms).await;

        // Ambient temperature comes from the weather source for the location
        let weather = self.weather.current(location).await?;
        let recommendations =
            advisory::recommend(soil_type, location, season, weather.temperature);
        info!(
            soil = %soil_type,
            location = %location,
            season = %season,
            temperature = weather.temperature,
            top = %recommendations[0].crop_name,
            "crop recommendations ready"
        );

        self.push_bot(
            format!(
                "Based on your {soil_type} soil type in {location} during {season} season, \
                 here are the top 5 crop recommendations:\n\n\
                 These recommendations consider current weather conditions \
                 ({}°C, {}) and are optimized for maximum yield and profitability.",
                weather.temperature, weather.condition
            ),
            Some(BotPayload::Recommendations(recommendations)),
        );
        Ok(Dispatch::Replied)
    }

    /// Analyze an uploaded crop image. Appends a transient "analyzing"
    /// placeholder that is removed once the result arrives — the one
    /// permitted transcript mutation.
    ///
    /// Allowed from `Idle` too: the reference UI has a direct upload
    /// button that bypasses the dialog.
    pub async fn upload_image(&mut self, image: &[u8]) -> Result<Dispatch, DomainError> {
        if self.mode == SessionMode::AwaitingCropForm {
            return Ok(Dispatch::Ignored);
        }
        self.mode = SessionMode::Idle;

        self.push_user("I've uploaded a crop image for analysis".to_string());
        let placeholder_id = self.push_bot(ANALYZING_TEXT.to_string(), None);

        let result = self.vision.analyze(image).await;
        self.messages.retain(|m| m.id != placeholder_id);
        let result = result?;

        let status_line = match result.health_status {
            HealthStatus::Healthy => "Great news! Your crop appears to be in healthy condition.",
            HealthStatus::Moderate => {
                "Your crop shows some signs of stress. Early intervention recommended."
            }
            HealthStatus::Poor => "Attention needed! Your crop requires immediate care.",
        };
        let issues = if result.diseases.is_empty() {
            "No major issues detected.".to_string()
        } else {
            format!("Detected {} potential issue(s).", result.diseases.len())
        };

        self.push_bot(
            format!(
                "Image analysis complete! {status_line}\n\n\
                 I've identified this as {} with a health score of {}%. {issues} \
                 See detailed analysis below:",
                result.crop_type, result.health_score
            ),
            Some(BotPayload::Analysis(result)),
        );
        Ok(Dispatch::Replied)
    }

    /// Close an open modal flow without submitting.
    pub fn cancel_modal(&mut self) {
        self.mode = SessionMode::Idle;
    }

    async fn reply_weather(&mut self, location: &str) -> Result<Dispatch, DomainError> {
        let weather = self.weather.current(location).await?;
        self.push_bot(
            "Here's the current weather and 7-day forecast for your area. \
             This information helps you plan irrigation, spraying, and harvesting activities."
                .to_string(),
            Some(BotPayload::Weather(weather)),
        );
        Ok(Dispatch::Replied)
    }

    async fn reply_market(&mut self) -> Result<Dispatch, DomainError> {
        let prices = self.market.prices().await?;
        self.push_bot(
            "Here are the current market prices for major crops. Prices are updated \
             regularly and show market trends to help you make better selling decisions."
                .to_string(),
            Some(BotPayload::Prices(prices)),
        );
        Ok(Dispatch::Replied)
    }

    async fn reply_tips(&mut self, category: Option<TipCategory>) -> Result<Dispatch, DomainError> {
        self.think(self.delays.tips_ms).await;
        let label = category.map_or("general", TipCategory::label);
        let tips: Vec<String> = advisory::tips_for(category)
            .iter()
            .map(|t| t.to_string())
            .collect();
        self.push_bot(
            format!(
                "Here are some expert {label} farming tips to help improve \
                 your productivity and crop health:"
            ),
            Some(BotPayload::Tips {
                category: label.to_string(),
                tips,
            }),
        );
        Ok(Dispatch::Replied)
    }

    async fn think(&self, ms: u64) {
        if ms > 0 {
            tokio::time::sleep(Duration::from_millis(ms)).await;
        }
    }

    fn push_user(&mut self, text: String) -> u64 {
        self.push(text, Sender::User, None)
    }

    fn push_bot(&mut self, text: String, payload: Option<BotPayload>) -> u64 {
        self.push(text, Sender::Bot, payload)
    }

    fn push(&mut self, text: String, sender: Sender, payload: Option<BotPayload>) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.messages.push(ChatMessage {
            id,
            text,
            sender,
            timestamp: Utc::now(),
            payload,
        });
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::{MockMarketAdapter, MockVisionAdapter, MockWeatherAdapter};
    use crate::domain::{ForecastDay, WeatherData};
    use crate::ports::WeatherPort;

    /// Weather stub with a pinned temperature, for deterministic
    /// recommendation checks.
    struct FixedWeather {
        temperature: i32,
    }

    #[async_trait::async_trait]
    impl WeatherPort for FixedWeather {
        async fn current(&self, location: &str) -> Result<WeatherData, DomainError> {
            Ok(WeatherData {
                location: location.to_string(),
                temperature: self.temperature,
                condition: "Sunny".to_string(),
                humidity: 60,
                rainfall: 0.0,
                forecast: vec![ForecastDay {
                    day: "Today".to_string(),
                    temp: self.temperature,
                    condition: "Sunny".to_string(),
                    precipitation: 10,
                }],
            })
        }
    }

    fn session_with_seed(seed: u64) -> ChatSession {
        ChatSession::new(
            Arc::new(MockWeatherAdapter::seeded(seed, 0)),
            Arc::new(MockMarketAdapter::with_delay(0)),
            Arc::new(MockVisionAdapter::seeded(seed, 0)),
            Delays::none(),
        )
    }

    fn session_with_fixed_temp(temperature: i32) -> ChatSession {
        ChatSession::new(
            Arc::new(FixedWeather { temperature }),
            Arc::new(MockMarketAdapter::with_delay(0)),
            Arc::new(MockVisionAdapter::seeded(7, 0)),
            Delays::none(),
        )
    }

    #[test]
    fn starts_with_welcome_message() {
        let session = session_with_seed(1);
        let msgs = session.messages();
        assert_eq!(msgs.len(), 1);
        assert_eq!(msgs[0].sender, Sender::Bot);
        assert!(msgs[0].text.contains("Welcome to FarmWise"));
    }

    #[tokio::test]
    async fn free_text_price_question_routes_to_market() {
        let mut session = session_with_seed(1);
        let outcome = session.send_text("what's the market price today").await.unwrap();
        assert_eq!(outcome, Dispatch::Replied);

        let msgs = session.messages();
        // welcome + user + bot
        assert_eq!(msgs.len(), 3);
        assert_eq!(msgs[1].sender, Sender::User);
        assert!(matches!(msgs[2].payload, Some(BotPayload::Prices(_))));
    }

    #[tokio::test]
    async fn blank_input_is_ignored() {
        let mut session = session_with_seed(1);
        assert_eq!(session.send_text("   ").await.unwrap(), Dispatch::Ignored);
        assert_eq!(session.messages().len(), 1);
    }

    #[tokio::test]
    async fn unknown_text_gets_help_reply() {
        let mut session = session_with_seed(1);
        session.send_text("hello there").await.unwrap();
        let last = session.messages().last().unwrap();
        assert_eq!(last.sender, Sender::Bot);
        assert!(last.text.contains("quick action buttons"));
        assert!(last.payload.is_none());
    }

    #[tokio::test]
    async fn quick_action_appends_one_user_and_one_bot_message() {
        let mut session = session_with_seed(3);
        session.invoke_quick_action(QuickAction::Weather).await.unwrap();
        let msgs = session.messages();
        assert_eq!(msgs.len(), 3);
        assert_eq!(msgs[1].text, "Show me the weather forecast");
        assert!(matches!(msgs[2].payload, Some(BotPayload::Weather(_))));
    }

    #[tokio::test]
    async fn crop_form_end_to_end_tops_with_rice() {
        let mut session = session_with_fixed_temp(26);
        let opened = session
            .invoke_quick_action(QuickAction::CropRecommendation)
            .await
            .unwrap();
        assert_eq!(opened, Dispatch::FormOpened);
        assert_eq!(session.mode(), SessionMode::AwaitingCropForm);

        let outcome = session
            .submit_crop_form("clay", "Punjab", Season::Monsoon)
            .await
            .unwrap();
        assert_eq!(outcome, Dispatch::Replied);
        assert_eq!(session.mode(), SessionMode::Idle);

        let last = session.messages().last().unwrap();
        match &last.payload {
            Some(BotPayload::Recommendations(recs)) => {
                assert_eq!(recs.len(), 5);
                assert_eq!(recs[0].crop_name, "Rice");
                assert_eq!(recs[0].suitability, 95);
            }
            other => panic!("expected recommendations payload, got {other:?}"),
        }
        assert!(last.text.contains("clay soil type in Punjab"));
    }

    #[tokio::test]
    async fn form_submission_requires_open_form() {
        let mut session = session_with_fixed_temp(26);
        let outcome = session
            .submit_crop_form("clay", "Punjab", Season::Monsoon)
            .await
            .unwrap();
        assert_eq!(outcome, Dispatch::Ignored);
        assert_eq!(session.messages().len(), 1);
    }

    #[tokio::test]
    async fn text_input_ignored_while_form_is_open() {
        let mut session = session_with_seed(1);
        session.send_text("recommend a crop to grow").await.unwrap();
        assert_eq!(session.mode(), SessionMode::AwaitingCropForm);
        let before = session.messages().len();

        assert_eq!(
            session.send_text("what's the weather").await.unwrap(),
            Dispatch::Ignored
        );
        assert_eq!(session.messages().len(), before);

        session.cancel_modal();
        assert_eq!(session.mode(), SessionMode::Idle);
    }

    #[tokio::test]
    async fn image_analysis_replaces_placeholder() {
        let mut session = session_with_seed(11);
        session
            .invoke_quick_action(QuickAction::ImageAnalysis)
            .await
            .unwrap();
        assert_eq!(session.mode(), SessionMode::AwaitingImageUpload);

        session.upload_image(&[0u8; 16]).await.unwrap();
        let msgs = session.messages();
        // welcome + user + result; the "analyzing" placeholder is gone
        assert_eq!(msgs.len(), 3);
        assert!(msgs.iter().all(|m| !m.text.starts_with("Analyzing")));
        let last = msgs.last().unwrap();
        assert!(last.text.starts_with("Image analysis complete!"));
        assert!(matches!(last.payload, Some(BotPayload::Analysis(_))));
    }

    #[tokio::test]
    async fn tips_quick_action_carries_general_list() {
        let mut session = session_with_seed(2);
        session.invoke_quick_action(QuickAction::FarmingTips).await.unwrap();
        let last = session.messages().last().unwrap();
        match &last.payload {
            Some(BotPayload::Tips { category, tips }) => {
                assert_eq!(category, "general");
                assert_eq!(tips.len(), 5);
            }
            other => panic!("expected tips payload, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn message_ids_strictly_increase() {
        let mut session = session_with_seed(5);
        session.send_text("show market prices").await.unwrap();
        session.invoke_quick_action(QuickAction::Weather).await.unwrap();
        let ids: Vec<u64> = session.messages().iter().map(|m| m.id).collect();
        assert!(ids.windows(2).all(|w| w[0] < w[1]));
    }
}
