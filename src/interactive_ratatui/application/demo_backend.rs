use crate::interactive_ratatui::application::backend::{
    BackendError, BackendResult, Idea, IssueCounts, PaletteBackend, QuickWin, SiteAnalysis,
};
use crate::interactive_ratatui::domain::models::Resource;
use std::collections::BTreeMap;
use std::sync::Mutex;
use std::thread;
use std::time::Duration;

/// Offline backend with canned, deterministic answers.
///
/// Analyzed URLs are remembered and show up in `list_resources`, so the
/// refresh-and-select flow behaves like the real service.
pub struct DemoBackend {
    latency: Duration,
    sites: Mutex<Vec<Resource>>,
}

impl Default for DemoBackend {
    fn default() -> Self {
        Self::new(Duration::from_millis(600))
    }
}

impl DemoBackend {
    pub fn new(latency: Duration) -> Self {
        Self {
            latency,
            sites: Mutex::new(vec![
                Resource {
                    id: "demo-shop".to_string(),
                    display_name: "Demo Shop".to_string(),
                    url: Some("https://shop.example".to_string()),
                },
                Resource {
                    id: "demo-blog".to_string(),
                    display_name: "Demo Blog".to_string(),
                    url: Some("https://blog.example".to_string()),
                },
            ]),
        }
    }

    fn pause(&self) {
        if !self.latency.is_zero() {
            thread::sleep(self.latency);
        }
    }
}

fn host_of(identifier: &str) -> String {
    let without_scheme = identifier
        .trim()
        .trim_start_matches("https://")
        .trim_start_matches("http://");
    without_scheme
        .split(['/', '?', '#'])
        .next()
        .unwrap_or_default()
        .trim_start_matches("www.")
        .to_lowercase()
}

/// Stable pseudo-score in 40..=99 derived from the host and dimension.
fn score_for(host: &str, dimension: &str) -> f64 {
    let sum: u32 = host
        .bytes()
        .chain(dimension.bytes())
        .fold(17u32, |acc, b| acc.wrapping_mul(31).wrapping_add(b as u32));
    f64::from(40 + sum % 60)
}

impl PaletteBackend for DemoBackend {
    fn analyze_resource(&self, identifier: &str) -> BackendResult<SiteAnalysis> {
        self.pause();
        let host = host_of(identifier);
        if host.is_empty() || !host.contains('.') {
            return Err(BackendError::Rejected(format!(
                "Could not resolve host for {identifier}"
            )));
        }

        let mut scores = BTreeMap::new();
        for dimension in ["performance", "seo", "accessibility", "best practices"] {
            scores.insert(dimension.to_string(), score_for(&host, dimension));
        }

        let critical = (host.len() % 3) as u32;
        let warnings = (host.len() % 5) as u32;

        let resource_id = host.replace('.', "-");
        {
            let mut sites = self
                .sites
                .lock()
                .map_err(|_| BackendError::Transport("demo state poisoned".to_string()))?;
            if !sites.iter().any(|s| s.id == resource_id) {
                sites.push(Resource {
                    id: resource_id.clone(),
                    display_name: host.clone(),
                    url: Some(format!("https://{host}")),
                });
            }
        }

        Ok(SiteAnalysis {
            scores,
            issues: IssueCounts { critical, warnings },
            quick_wins: vec![
                QuickWin {
                    title: "Add meta descriptions to 4 pages".to_string(),
                    impact: Some("high".to_string()),
                },
                QuickWin {
                    title: "Compress hero images".to_string(),
                    impact: Some("medium".to_string()),
                },
                QuickWin {
                    title: "Fix 2 broken internal links".to_string(),
                    impact: Some("medium".to_string()),
                },
                QuickWin {
                    title: "Add alt text to product photos".to_string(),
                    impact: Some("low".to_string()),
                },
            ],
            resource_id,
        })
    }

    fn generate_ideas(&self, topic: &str, count: usize) -> BackendResult<Vec<Idea>> {
        self.pause();
        let topic = topic.trim();
        let templates = [
            ("The complete guide to {}", None),
            ("{}: 10 mistakes beginners make", None),
            ("How to choose the best {}", Some("best {}")),
            ("{} vs the alternatives", Some("{} alternatives")),
            ("Is {} worth it in 2025?", None),
            ("A checklist for {}", Some("{} checklist")),
        ];

        Ok(templates
            .iter()
            .take(count)
            .map(|(title, keyword)| Idea {
                title: title.replace("{}", topic),
                keyword: keyword.map(|k| k.replace("{}", topic)),
            })
            .collect())
    }

    fn list_resources(&self) -> BackendResult<Vec<Resource>> {
        let sites = self
            .sites
            .lock()
            .map_err(|_| BackendError::Transport("demo state poisoned".to_string()))?;
        Ok(sites.clone())
    }
}
