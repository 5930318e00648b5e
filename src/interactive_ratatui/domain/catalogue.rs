use crate::interactive_ratatui::domain::models::{Category, Resource, Route};
use std::collections::HashSet;

/// Prefix for catalogue ids derived from resources.
pub const SITE_ID_PREFIX: &str = "site:";

/// What activating a command does. Interpreted by the result router.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CommandAction {
    Navigate(Route),
    /// Fill the input with text and keep the palette open for further editing.
    PrefillInput(String),
    RefreshResources,
    SelectResource(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PaletteCommand {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub category: Category,
    pub keywords: Vec<String>,
    pub shortcut: Option<String>,
    pub action: CommandAction,
}

impl PaletteCommand {
    fn builtin(
        id: &str,
        title: &str,
        description: &str,
        category: Category,
        keywords: &[&str],
        action: CommandAction,
    ) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            description: Some(description.to_string()),
            category,
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
            shortcut: None,
            action,
        }
    }

    fn with_shortcut(mut self, shortcut: &str) -> Self {
        self.shortcut = Some(shortcut.to_string());
        self
    }

    pub fn is_site(&self) -> bool {
        self.category == Category::Sites
    }

    /// Case-insensitive substring match. `query_lower` must already be lower-cased.
    pub fn matches(&self, query_lower: &str) -> bool {
        if self.title.to_lowercase().contains(query_lower) {
            return true;
        }
        if self
            .description
            .as_ref()
            .is_some_and(|d| d.to_lowercase().contains(query_lower))
        {
            return true;
        }
        self.keywords
            .iter()
            .any(|k| k.to_lowercase().contains(query_lower))
    }
}

pub fn builtin_commands() -> Vec<PaletteCommand> {
    use Category::{Actions, Navigation};

    vec![
        PaletteCommand::builtin(
            "action-analyze-url",
            "Analyze a URL",
            "Run a full SEO audit on any website",
            Actions,
            &["audit", "seo", "crawl", "website", "check"],
            CommandAction::PrefillInput("https://".to_string()),
        )
        .with_shortcut("A"),
        PaletteCommand::builtin(
            "action-generate-ideas",
            "Generate content ideas",
            "Describe a topic and get article ideas",
            Actions,
            &["ai", "write", "topic", "brainstorm", "blog"],
            CommandAction::PrefillInput("Content ideas about ".to_string()),
        )
        .with_shortcut("G"),
        PaletteCommand::builtin(
            "action-new-article",
            "Write new article",
            "Start a draft in the editor",
            Actions,
            &["create", "draft", "post", "blog"],
            CommandAction::Navigate(Route::NewArticle { keyword: None }),
        )
        .with_shortcut("N"),
        PaletteCommand::builtin(
            "action-fix-issues",
            "Fix site issues",
            "Review critical issues and warnings",
            Actions,
            &["fix", "errors", "warnings", "problems"],
            CommandAction::Navigate(Route::Issues { site_id: None }),
        ),
        PaletteCommand::builtin(
            "action-refresh-sites",
            "Refresh sites",
            "Reload the list of your sites",
            Actions,
            &["reload", "sync", "update"],
            CommandAction::RefreshResources,
        ),
        PaletteCommand::builtin(
            "nav-dashboard",
            "Go to Dashboard",
            "Overview of all your sites",
            Navigation,
            &["home", "overview", "stats"],
            CommandAction::Navigate(Route::Dashboard),
        )
        .with_shortcut("G D"),
        PaletteCommand::builtin(
            "nav-sites",
            "Go to Sites",
            "Manage connected sites",
            Navigation,
            &["websites", "domains", "projects"],
            CommandAction::Navigate(Route::Sites),
        )
        .with_shortcut("G S"),
        PaletteCommand::builtin(
            "nav-articles",
            "Go to Articles",
            "Browse published and draft articles",
            Navigation,
            &["posts", "content", "drafts"],
            CommandAction::Navigate(Route::Articles),
        )
        .with_shortcut("G A"),
        PaletteCommand::builtin(
            "nav-keywords",
            "Go to Keywords",
            "Tracked keywords and rankings",
            Navigation,
            &["rankings", "serp", "research"],
            CommandAction::Navigate(Route::Keywords),
        )
        .with_shortcut("G K"),
        PaletteCommand::builtin(
            "nav-issues",
            "Go to Issues",
            "All findings from site audits",
            Navigation,
            &["errors", "warnings", "audit"],
            CommandAction::Navigate(Route::Issues { site_id: None }),
        ),
        PaletteCommand::builtin(
            "nav-settings",
            "Go to Settings",
            "Account and workspace preferences",
            Navigation,
            &["preferences", "account", "billing"],
            CommandAction::Navigate(Route::Settings),
        ),
    ]
}

pub fn site_command(resource: &Resource, selected: bool) -> PaletteCommand {
    let description = if selected {
        Some("Current site".to_string())
    } else {
        resource.url.clone()
    };

    PaletteCommand {
        id: format!("{SITE_ID_PREFIX}{}", resource.id),
        title: resource.display_name.clone(),
        description,
        category: Category::Sites,
        keywords: Vec::new(),
        shortcut: None,
        action: CommandAction::SelectResource(resource.id.clone()),
    }
}

/// Static commands plus one entry per resource.
///
/// The site entries are a projection of the resource list and the selection; they are
/// rebuilt only when that input changes.
#[derive(Clone, Debug)]
pub struct Catalogue {
    builtin: Vec<PaletteCommand>,
    sites: Vec<PaletteCommand>,
    fingerprint: Option<String>,
}

impl Default for Catalogue {
    fn default() -> Self {
        Self::new()
    }
}

impl Catalogue {
    pub fn new() -> Self {
        Self::with_builtin(builtin_commands())
    }

    pub fn with_builtin(builtin: Vec<PaletteCommand>) -> Self {
        Self {
            builtin,
            sites: Vec::new(),
            fingerprint: None,
        }
    }

    /// Regenerate site entries if the resources or selection changed.
    /// Returns true when the catalogue changed.
    pub fn sync_resources(&mut self, resources: &[Resource], selected: Option<&str>) -> bool {
        let fingerprint = resource_fingerprint(resources, selected);
        if self.fingerprint.as_deref() == Some(fingerprint.as_str()) {
            return false;
        }

        // Duplicate ids keep their first entry.
        let mut seen = HashSet::new();
        self.sites = resources
            .iter()
            .filter(|r| seen.insert(r.id.as_str()))
            .map(|r| site_command(r, selected == Some(r.id.as_str())))
            .collect();
        self.fingerprint = Some(fingerprint);
        tracing::debug!(sites = self.sites.len(), "Regenerated site commands");
        true
    }

    pub fn builtin(&self) -> &[PaletteCommand] {
        &self.builtin
    }

    pub fn sites(&self) -> &[PaletteCommand] {
        &self.sites
    }

    pub fn iter(&self) -> impl Iterator<Item = &PaletteCommand> {
        self.builtin.iter().chain(self.sites.iter())
    }

    pub fn get(&self, id: &str) -> Option<&PaletteCommand> {
        self.iter().find(|c| c.id == id)
    }

    pub fn len(&self) -> usize {
        self.builtin.len() + self.sites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

pub fn resource_fingerprint(resources: &[Resource], selected: Option<&str>) -> String {
    let mut fingerprint = String::new();
    for resource in resources {
        fingerprint.push_str(&resource.id);
        fingerprint.push('\u{1f}');
        fingerprint.push_str(&resource.display_name);
        fingerprint.push('\u{1f}');
        fingerprint.push_str(resource.url.as_deref().unwrap_or(""));
        fingerprint.push('\u{1e}');
    }
    fingerprint.push('|');
    fingerprint.push_str(selected.unwrap_or(""));
    fingerprint
}
