use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// What the current input text means. Derived from the text on every change.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputMode {
    #[default]
    Search,
    Url,
    Ai,
}

impl InputMode {
    pub fn label(&self) -> &'static str {
        match self {
            InputMode::Search => "search",
            InputMode::Url => "url",
            InputMode::Ai => "ai",
        }
    }

    /// True for the modes that submit a remote operation on Enter.
    pub fn is_runnable(&self) -> bool {
        matches!(self, InputMode::Url | InputMode::Ai)
    }

    pub fn hint(&self) -> Option<&'static str> {
        match self {
            InputMode::Search => None,
            InputMode::Url => Some("Enter to analyze URL"),
            InputMode::Ai => Some("Enter to generate ideas"),
        }
    }
}

/// Which result space the palette is showing.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum View {
    List,
    Streaming,
}

/// Command categories. Declaration order is display and selection order.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Actions,
    Navigation,
    Ai,
    Sites,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Actions,
        Category::Navigation,
        Category::Ai,
        Category::Sites,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Category::Actions => "Actions",
            Category::Navigation => "Navigation",
            Category::Ai => "AI",
            Category::Sites => "Sites",
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResultKind {
    Progress,
    Score,
    Issue,
    Content,
    Success,
    Error,
}

impl ResultKind {
    /// Only content and success results can be activated individually.
    pub fn is_activatable(&self) -> bool {
        matches!(self, ResultKind::Content | ResultKind::Success)
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, ResultKind::Success | ResultKind::Error)
    }

    pub fn icon(&self) -> &'static str {
        match self {
            ResultKind::Progress => "…",
            ResultKind::Score => "▲",
            ResultKind::Issue => "!",
            ResultKind::Content => "✎",
            ResultKind::Success => "✓",
            ResultKind::Error => "✗",
        }
    }
}

pub mod payload_keys {
    pub const SUBTITLE: &str = "subtitle";
    pub const KEYWORD: &str = "keyword";
    pub const TOPIC: &str = "topic";
    pub const RESOURCE_ID: &str = "resourceId";
    pub const DIMENSION: &str = "dimension";
    pub const SCORE: &str = "score";
    pub const CRITICAL: &str = "critical";
    pub const WARNINGS: &str = "warnings";
}

/// One entry of a run's append-only log.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StreamingResult {
    pub kind: ResultKind,
    pub message: String,
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub payload: Map<String, Value>,
    pub created_at: DateTime<Utc>,
}

impl StreamingResult {
    pub fn new(kind: ResultKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            payload: Map::new(),
            created_at: Utc::now(),
        }
    }

    pub fn progress(message: impl Into<String>) -> Self {
        Self::new(ResultKind::Progress, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(ResultKind::Error, message)
    }

    pub fn with(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.payload.insert(key.to_string(), value.into());
        self
    }

    /// String payload field; empty strings count as missing.
    pub fn payload_str(&self, key: &str) -> Option<&str> {
        self.payload
            .get(key)
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())
    }

    pub fn subtitle(&self) -> Option<&str> {
        self.payload_str(payload_keys::SUBTITLE)
    }
}

/// A user-owned resource ("site") from the external registry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resource {
    pub id: String,
    pub display_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// Navigation targets the surrounding shell understands.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Route {
    Dashboard,
    Sites,
    Site(String),
    Articles,
    NewArticle { keyword: Option<String> },
    Keywords,
    Issues { site_id: Option<String> },
    Settings,
}

impl Route {
    pub fn path(&self) -> String {
        match self {
            Route::Dashboard => "/dashboard".to_string(),
            Route::Sites => "/sites".to_string(),
            Route::Site(id) => format!("/sites/{}", urlencoding::encode(id)),
            Route::Articles => "/articles".to_string(),
            Route::NewArticle { keyword: None } => "/articles/new".to_string(),
            Route::NewArticle {
                keyword: Some(keyword),
            } => format!("/articles/new?keyword={}", urlencoding::encode(keyword)),
            Route::Keywords => "/keywords".to_string(),
            Route::Issues { site_id: None } => "/issues".to_string(),
            Route::Issues {
                site_id: Some(site_id),
            } => format!("/issues?site={}", urlencoding::encode(site_id)),
            Route::Settings => "/settings".to_string(),
        }
    }
}


/// A submitted operation, tagged with the generation that owns it.
#[derive(Clone, Debug, PartialEq)]
pub struct RunRequest {
    pub generation: u64,
    pub mode: InputMode,
    pub text: String,
}

#[derive(Clone, Debug, PartialEq)]
pub enum RunUpdate {
    Result(StreamingResult),
    ResourcesRefreshed {
        resources: Vec<Resource>,
        select: Option<String>,
    },
    Finished,
}

#[derive(Clone, Debug, PartialEq)]
pub struct RunEvent {
    pub generation: u64,
    pub update: RunUpdate,
}
