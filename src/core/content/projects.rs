use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default)]
    pub live_url: Option<String>,
    #[serde(default)]
    pub code_url: Option<String>,
}

impl Project {
    fn matches_search(&self, needle: &str) -> bool {
        needle.is_empty()
            || self.title.to_lowercase().contains(needle)
            || self.description.to_lowercase().contains(needle)
    }

    fn uses_any(&self, technologies: &BTreeSet<String>) -> bool {
        technologies.is_empty()
            || self
                .technologies
                .iter()
                .any(|technology| technologies.contains(technology))
    }
}

/// Gallery filter: free-text search AND any of the selected technologies.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ProjectFilter {
    search: String,
    technologies: BTreeSet<String>,
}

impl ProjectFilter {
    pub fn set_search(&mut self, query: impl Into<String>) {
        self.search = query.into();
    }

    #[must_use]
    pub fn search(&self) -> &str {
        &self.search
    }

    /// Selects a technology, or deselects it if it was already selected.
    pub fn toggle_technology(&mut self, technology: &str) {
        if !self.technologies.remove(technology) {
            self.technologies.insert(technology.to_string());
        }
    }

    #[must_use]
    pub fn is_selected(&self, technology: &str) -> bool {
        self.technologies.contains(technology)
    }

    pub fn clear(&mut self) {
        self.search.clear();
        self.technologies.clear();
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        !self.search.is_empty() || !self.technologies.is_empty()
    }

    #[must_use]
    pub fn matches(&self, project: &Project) -> bool {
        self.matches_with(&self.search.to_lowercase(), project)
    }

    pub fn apply<'a>(&'a self, projects: &'a [Project]) -> impl Iterator<Item = &'a Project> + 'a {
        let needle = self.search.to_lowercase();

        projects
            .iter()
            .filter(move |project| self.matches_with(&needle, project))
    }

    /// `needle` is the search text already lowercased.
    fn matches_with(&self, needle: &str, project: &Project) -> bool {
        project.matches_search(needle) && project.uses_any(&self.technologies)
    }
}

/// Every technology used by any project, sorted and without duplicates.
#[must_use]
pub fn all_technologies(projects: &[Project]) -> Vec<&str> {
    projects
        .iter()
        .flat_map(|project| project.technologies.iter().map(String::as_str))
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(id: &str, title: &str, description: &str, technologies: &[&str]) -> Project {
        Project {
            id: id.to_string(),
            title: title.to_string(),
            description: description.to_string(),
            technologies: technologies.iter().map(|t| (*t).to_string()).collect(),
            live_url: None,
            code_url: None,
        }
    }

    fn gallery() -> Vec<Project> {
        vec![
            project(
                "1",
                "E-Commerce Platform",
                "Shopping cart and payments",
                &["React", "Node.js", "Stripe"],
            ),
            project(
                "2",
                "Task Management App",
                "Drag-and-drop boards",
                &["Vue.js", "Firebase"],
            ),
            project(
                "3",
                "Weather Dashboard",
                "Forecasts and maps",
                &["Next.js", "TypeScript"],
            ),
            project(
                "4",
                "Chat Application",
                "Real-time chat with React",
                &["Socket.io", "React"],
            ),
        ]
    }

    fn ids<'a>(projects: impl Iterator<Item = &'a Project>) -> Vec<&'a str> {
        projects.map(|project| project.id.as_str()).collect()
    }

    #[test]
    fn empty_filter_matches_everything() {
        let projects = gallery();
        let filter = ProjectFilter::default();

        assert!(!filter.is_active());
        assert_eq!(ids(filter.apply(&projects)), ["1", "2", "3", "4"]);
    }

    #[test]
    fn search_is_case_insensitive_over_title_and_description() {
        let projects = gallery();
        let mut filter = ProjectFilter::default();

        filter.set_search("WEATHER");
        assert_eq!(ids(filter.apply(&projects)), ["3"]);

        filter.set_search("drag");
        assert_eq!(ids(filter.apply(&projects)), ["2"]);
    }

    #[test]
    fn technologies_match_any_selected() {
        let projects = gallery();
        let mut filter = ProjectFilter::default();

        filter.toggle_technology("Firebase");
        filter.toggle_technology("Stripe");

        assert_eq!(ids(filter.apply(&projects)), ["1", "2"]);
    }

    #[test]
    fn search_and_technologies_combine() {
        let projects = gallery();
        let mut filter = ProjectFilter::default();

        filter.toggle_technology("React");
        filter.set_search("chat");

        assert_eq!(ids(filter.apply(&projects)), ["4"]);
        assert!(filter.matches(&projects[3]));
        assert!(!filter.matches(&projects[0]));
    }

    #[test]
    fn matches_agrees_with_apply_for_mixed_case_search() {
        let projects = gallery();
        let mut filter = ProjectFilter::default();
        filter.set_search("Real-TIME");

        let matched: Vec<&str> = projects
            .iter()
            .filter(|project| filter.matches(project))
            .map(|project| project.id.as_str())
            .collect();

        assert_eq!(matched, ids(filter.apply(&projects)));
        assert_eq!(matched, ["4"]);
    }

    #[test]
    fn toggling_twice_deselects() {
        let mut filter = ProjectFilter::default();

        filter.toggle_technology("React");
        assert!(filter.is_selected("React"));

        filter.toggle_technology("React");
        assert!(!filter.is_selected("React"));
    }

    #[test]
    fn clear_resets_search_and_selection() {
        let mut filter = ProjectFilter::default();
        filter.set_search("x");
        filter.toggle_technology("React");

        filter.clear();

        assert!(!filter.is_active());
    }

    #[test]
    fn technologies_are_sorted_and_unique() {
        let projects = gallery();

        assert_eq!(
            all_technologies(&projects),
            [
                "Firebase",
                "Next.js",
                "Node.js",
                "React",
                "Socket.io",
                "Stripe",
                "TypeScript",
                "Vue.js"
            ]
        );
    }
}
