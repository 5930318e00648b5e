#[cfg(test)]
mod tests {
    use super::super::catalogue::*;
    use super::super::models::{Category, Resource};
    use std::collections::HashSet;

    fn resource(id: &str, name: &str) -> Resource {
        Resource {
            id: id.to_string(),
            display_name: name.to_string(),
            url: Some(format!("https://{id}.example")),
        }
    }

    #[test]
    fn test_builtin_ids_are_unique() {
        let commands = builtin_commands();
        let ids: HashSet<_> = commands.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids.len(), commands.len());
    }

    #[test]
    fn test_builtin_ai_category_is_empty() {
        assert!(
            builtin_commands()
                .iter()
                .all(|c| c.category != Category::Ai && c.category != Category::Sites)
        );
    }

    #[test]
    fn test_sync_resources_creates_site_entries() {
        let mut catalogue = Catalogue::new();
        let builtin_count = catalogue.len();

        let changed = catalogue.sync_resources(
            &[resource("s1", "Shop"), resource("s2", "Blog")],
            Some("s2"),
        );

        assert!(changed);
        assert_eq!(catalogue.len(), builtin_count + 2);
        let blog = catalogue.get("site:s2").unwrap();
        assert_eq!(blog.title, "Blog");
        assert_eq!(blog.description.as_deref(), Some("Current site"));
        assert_eq!(blog.action, CommandAction::SelectResource("s2".to_string()));
        let shop = catalogue.get("site:s1").unwrap();
        assert_eq!(shop.description.as_deref(), Some("https://s1.example"));
    }

    #[test]
    fn test_sync_resources_is_memoized() {
        let mut catalogue = Catalogue::new();
        let resources = vec![resource("s1", "Shop")];

        assert!(catalogue.sync_resources(&resources, None));
        assert!(!catalogue.sync_resources(&resources, None));
        // Selection change regenerates
        assert!(catalogue.sync_resources(&resources, Some("s1")));
        // Rename regenerates
        assert!(catalogue.sync_resources(&[resource("s1", "Shop v2")], Some("s1")));
    }

    #[test]
    fn test_url_change_regenerates_description() {
        let mut catalogue = Catalogue::new();
        catalogue.sync_resources(&[resource("s1", "Shop")], None);

        let mut moved = resource("s1", "Shop");
        moved.url = Some("https://shop.example/new".to_string());
        assert!(catalogue.sync_resources(&[moved], None));
        assert_eq!(
            catalogue.get("site:s1").unwrap().description.as_deref(),
            Some("https://shop.example/new")
        );
    }

    #[test]
    fn test_duplicate_resource_ids_yield_one_entry() {
        let mut catalogue = Catalogue::new();
        catalogue.sync_resources(
            &[resource("a", "Alpha"), resource("b", "Beta"), resource("a", "Alpha again")],
            Some("a"),
        );

        let ids: Vec<_> = catalogue.sites().iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["site:a", "site:b"]);
        assert_eq!(catalogue.get("site:a").unwrap().title, "Alpha");

        let all: HashSet<_> = catalogue.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(all.len(), catalogue.len());
    }

    #[test]
    fn test_site_ids_follow_identity_not_position() {
        let mut catalogue = Catalogue::new();
        catalogue.sync_resources(&[resource("a", "Alpha"), resource("b", "Beta")], None);
        catalogue.sync_resources(&[resource("b", "Beta"), resource("a", "Alpha")], None);

        assert_eq!(catalogue.get("site:a").unwrap().title, "Alpha");
        assert_eq!(catalogue.get("site:b").unwrap().title, "Beta");
        assert_eq!(catalogue.sites()[0].id, "site:b");
    }

    #[test]
    fn test_removed_resources_disappear() {
        let mut catalogue = Catalogue::new();
        catalogue.sync_resources(&[resource("a", "Alpha")], None);
        catalogue.sync_resources(&[], None);

        assert!(catalogue.get("site:a").is_none());
        assert!(catalogue.sites().is_empty());
    }

    #[test]
    fn test_command_matches_title_description_and_keywords() {
        let commands = builtin_commands();
        let analyze = commands
            .iter()
            .find(|c| c.id == "action-analyze-url")
            .unwrap();

        assert!(analyze.matches("analyze"));
        assert!(analyze.matches("seo audit"));
        assert!(analyze.matches("crawl"));
        assert!(!analyze.matches("billing"));
    }

    #[test]
    fn test_prefill_commands() {
        let commands = builtin_commands();
        let analyze = commands
            .iter()
            .find(|c| c.id == "action-analyze-url")
            .unwrap();
        assert_eq!(
            analyze.action,
            CommandAction::PrefillInput("https://".to_string())
        );
    }
}
