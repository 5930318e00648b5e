use crate::interactive_ratatui::domain::catalogue::{Catalogue, PaletteCommand};
use crate::interactive_ratatui::domain::models::{Category, View};

/// Filtered commands grouped by category, in category order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GroupedResults {
    groups: Vec<(Category, Vec<PaletteCommand>)>,
}

impl GroupedResults {
    fn from_commands<'a>(commands: impl Iterator<Item = &'a PaletteCommand>) -> Self {
        let mut groups: Vec<(Category, Vec<PaletteCommand>)> =
            Category::ALL.iter().map(|c| (*c, Vec::new())).collect();

        for command in commands {
            if let Some((_, bucket)) = groups.iter_mut().find(|(c, _)| *c == command.category) {
                bucket.push(command.clone());
            }
        }

        groups.retain(|(_, bucket)| !bucket.is_empty());
        Self { groups }
    }

    /// Non-empty groups in display order.
    pub fn groups(&self) -> &[(Category, Vec<PaletteCommand>)] {
        &self.groups
    }

    pub fn group(&self, category: Category) -> Option<&[PaletteCommand]> {
        self.groups
            .iter()
            .find(|(c, _)| *c == category)
            .map(|(_, commands)| commands.as_slice())
    }

    pub fn categories(&self) -> Vec<Category> {
        self.groups.iter().map(|(c, _)| *c).collect()
    }

    /// Selection order across groups.
    pub fn flatten(&self) -> Vec<&PaletteCommand> {
        self.groups.iter().flat_map(|(_, cmds)| cmds.iter()).collect()
    }

    pub fn get(&self, index: usize) -> Option<&PaletteCommand> {
        self.groups
            .iter()
            .flat_map(|(_, cmds)| cmds.iter())
            .nth(index)
    }

    pub fn len(&self) -> usize {
        self.groups.iter().map(|(_, cmds)| cmds.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

pub struct CommandFilter;

impl CommandFilter {
    /// Filter and group the catalogue for the given query.
    ///
    /// An empty query returns everything. In streaming view the built-in commands are
    /// returned unfiltered and site entries are left out.
    pub fn filter(catalogue: &Catalogue, query: &str, view: View) -> GroupedResults {
        let query_lower = query.trim().to_lowercase();

        if view == View::Streaming {
            return GroupedResults::from_commands(catalogue.builtin().iter());
        }

        if query_lower.is_empty() {
            return GroupedResults::from_commands(catalogue.iter());
        }

        let builtin = catalogue
            .builtin()
            .iter()
            .filter(|c| c.matches(&query_lower));
        let sites = catalogue
            .sites()
            .iter()
            .filter(|c| c.title.to_lowercase().contains(&query_lower));

        GroupedResults::from_commands(builtin.chain(sites))
    }
}
