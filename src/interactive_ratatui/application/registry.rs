use crate::interactive_ratatui::domain::catalogue::resource_fingerprint;
use crate::interactive_ratatui::domain::models::Resource;
use std::collections::HashSet;

/// The user's resources and which one is selected.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ResourceRegistry {
    resources: Vec<Resource>,
    selected: Option<String>,
}

impl ResourceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn resources(&self) -> &[Resource] {
        &self.resources
    }

    pub fn selected_id(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn selected(&self) -> Option<&Resource> {
        let id = self.selected.as_deref()?;
        self.resources.iter().find(|r| r.id == id)
    }

    /// Replace the list. The selection survives if its id is still present.
    /// Duplicate ids keep their first entry.
    pub fn replace(&mut self, mut resources: Vec<Resource>) {
        let mut seen = HashSet::new();
        resources.retain(|r| seen.insert(r.id.clone()));
        self.resources = resources;
        if let Some(id) = &self.selected {
            if !self.resources.iter().any(|r| &r.id == id) {
                tracing::debug!(id, "Selected resource no longer exists");
                self.selected = None;
            }
        }
    }

    /// Select by id. Unknown ids are ignored; returns whether the selection changed.
    pub fn select(&mut self, id: &str) -> bool {
        if self.selected.as_deref() == Some(id) {
            return false;
        }
        if self.resources.iter().any(|r| r.id == id) {
            self.selected = Some(id.to_string());
            true
        } else {
            tracing::warn!(id, "Ignoring selection of unknown resource");
            false
        }
    }

    pub fn fingerprint(&self) -> String {
        resource_fingerprint(&self.resources, self.selected.as_deref())
    }
}
