use std::fmt;
use std::sync::LazyLock;

use serde::Serialize;

/// The fixed set of categories a project can belong to. Filtering matches
/// these exactly; only the search predicate is case-insensitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Category {
    WebApp,
    Dashboard,
    MobileApp,
    Website,
    AiMl,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::WebApp,
        Category::Dashboard,
        Category::MobileApp,
        Category::Website,
        Category::AiMl,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::WebApp => "Web App",
            Category::Dashboard => "Dashboard",
            Category::MobileApp => "Mobile App",
            Category::Website => "Website",
            Category::AiMl => "AI/ML",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Project {
    pub id: u32,
    pub image: String,
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
    pub category: Category,
    pub github_link: String,
    pub live_link: String,
}

impl Project {
    /// Search predicate: `term` must already be trimmed and lowercased.
    fn matches_search(&self, term: &str) -> bool {
        self.title.to_lowercase().contains(term)
            || self.tags.join(" ").to_lowercase().contains(term)
            || self.category.as_str().to_lowercase().contains(term)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    pub fn matches(&self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(c) => *c == category,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CategoryFilter::All => "All",
            CategoryFilter::Only(c) => c.as_str(),
        }
    }
}

/// Filter state owned by the project-listing view. Resets on page load;
/// nothing here persists.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterState {
    pub search_term: String,
    pub active_category: CategoryFilter,
}

impl FilterState {
    pub fn set_term(&mut self, term: &str) {
        self.search_term = term.to_string();
    }

    pub fn set_category(&mut self, category: CategoryFilter) {
        self.active_category = category;
    }

    pub fn apply<'a>(&self, projects: &'a [Project]) -> Vec<&'a Project> {
        filter_projects(projects, &self.search_term, self.active_category)
    }
}

/// Pure projection of the project list: a project is kept when it matches
/// the category selector AND the search term (blank term matches all).
/// Original list order is preserved; the input is never mutated. Cheap
/// enough to run on every keystroke at this data size.
pub fn filter_projects<'a>(
    projects: &'a [Project],
    term: &str,
    category: CategoryFilter,
) -> Vec<&'a Project> {
    let term = term.trim().to_lowercase();
    projects
        .iter()
        .filter(|p| category.matches(p.category) && (term.is_empty() || p.matches_search(&term)))
        .collect()
}

fn project(
    id: u32,
    image: &str,
    title: &str,
    description: &str,
    tags: &[&str],
    category: Category,
) -> Project {
    Project {
        id,
        image: image.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        category,
        github_link: "#".to_string(),
        live_link: "#".to_string(),
    }
}

/// The whole portfolio, loaded once. The first three entries double as the
/// home-page featured set.
pub static ALL_PROJECTS: LazyLock<Vec<Project>> = LazyLock::new(|| {
    vec![
        project(
            1,
            "https://images.pexels.com/photos/38519/macbook-laptop-ipad-apple-38519.jpeg",
            "E-Commerce Platform",
            "Full-featured e-commerce platform with real-time inventory, payment processing, and admin dashboard.",
            &["React", "Node.js", "PostgreSQL", "Stripe"],
            Category::WebApp,
        ),
        project(
            2,
            "https://images.pexels.com/photos/1109541/pexels-photo-1109541.jpeg",
            "Task Management App",
            "Collaborative task management app with realtime updates and team features.",
            &["React", "Firebase", "Material-UI"],
            Category::WebApp,
        ),
        project(
            3,
            "https://images.pexels.com/photos/1029757/pexels-photo-1029757.jpeg",
            "Weather Dashboard",
            "Location-based forecasts and interactive charts.",
            &["Vue.js", "Chart.js", "OpenWeather API"],
            Category::Dashboard,
        ),
        project(
            4,
            "https://images.pexels.com/photos/546819/pexels-photo-546819.jpeg",
            "AI Chatbot",
            "Context-aware chatbot with retrieval and analytics.",
            &["Python", "FastAPI", "AI/ML"],
            Category::AiMl,
        ),
        project(
            5,
            "https://images.pexels.com/photos/270637/pexels-photo-270637.jpeg",
            "Company Website",
            "Fast, accessible marketing website with CMS.",
            &["HTML", "CSS", "Netlify CMS"],
            Category::Website,
        ),
        project(
            6,
            "https://images.pexels.com/photos/196644/pexels-photo-196644.jpeg",
            "Mobile Fitness App",
            "Workout tracking with offline support and charts.",
            &["React Native", "Expo"],
            Category::MobileApp,
        ),
    ]
});

pub fn featured() -> &'static [Project] {
    &ALL_PROJECTS[..3]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn titles(projects: &[&Project]) -> Vec<String> {
        projects.iter().map(|p| p.title.clone()).collect()
    }

    #[test]
    fn empty_term_and_all_returns_full_list_in_order() {
        let filtered = filter_projects(&ALL_PROJECTS, "", CategoryFilter::All);
        assert_eq!(filtered.len(), ALL_PROJECTS.len());
        let ids = filtered.iter().map(|p| p.id).collect::<Vec<_>>();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn whitespace_only_term_matches_everything() {
        let filtered = filter_projects(&ALL_PROJECTS, "   ", CategoryFilter::All);
        assert_eq!(filtered.len(), ALL_PROJECTS.len());
    }

    #[test]
    fn result_satisfies_both_predicates() {
        let filtered = filter_projects(
            &ALL_PROJECTS,
            "react",
            CategoryFilter::Only(Category::WebApp),
        );
        assert!(!filtered.is_empty());
        for p in &filtered {
            assert_eq!(p.category, Category::WebApp);
            assert!(p.matches_search("react"));
        }
    }

    #[test]
    fn filtering_is_case_insensitive() {
        let upper = filter_projects(&ALL_PROJECTS, "REACT", CategoryFilter::All);
        let lower = filter_projects(&ALL_PROJECTS, "react", CategoryFilter::All);
        assert_eq!(titles(&upper), titles(&lower));
    }

    #[test]
    fn filtering_is_idempotent() {
        let once = filter_projects(&ALL_PROJECTS, "app", CategoryFilter::All);
        let owned = once.iter().map(|&p| p.clone()).collect::<Vec<_>>();
        let twice = filter_projects(&owned, "app", CategoryFilter::All);
        assert_eq!(titles(&once), titles(&twice));
    }

    #[test]
    fn search_matches_tags_and_category() {
        // "fastapi" only appears in the AI Chatbot's tags
        let by_tag = filter_projects(&ALL_PROJECTS, "fastapi", CategoryFilter::All);
        assert_eq!(titles(&by_tag), vec!["AI Chatbot"]);

        // only the AI Chatbot carries the AI/ML label
        let by_category = filter_projects(&ALL_PROJECTS, "ai/ml", CategoryFilter::All);
        assert!(by_category.iter().any(|p| p.title == "AI Chatbot"));
    }

    #[test]
    fn tag_match_under_wrong_category_is_empty() {
        let filtered = filter_projects(
            &ALL_PROJECTS,
            "fastapi",
            CategoryFilter::Only(Category::WebApp),
        );
        assert!(filtered.is_empty());
    }

    #[test]
    fn nonsense_term_yields_valid_empty_result() {
        let filtered = filter_projects(&ALL_PROJECTS, "zzzz-no-such-project", CategoryFilter::All);
        assert!(filtered.is_empty());
    }

    #[test]
    fn filter_never_mutates_the_source_list() {
        let before = ALL_PROJECTS.clone();
        let _ = filter_projects(&ALL_PROJECTS, "react", CategoryFilter::Only(Category::AiMl));
        assert_eq!(*ALL_PROJECTS, before);
    }

    #[test]
    fn filter_state_updates_and_applies() {
        let mut state = FilterState::default();
        assert_eq!(state.active_category, CategoryFilter::All);
        state.set_term("weather");
        state.set_category(CategoryFilter::Only(Category::Dashboard));
        let filtered = state.apply(&ALL_PROJECTS);
        assert_eq!(titles(&filtered), vec!["Weather Dashboard"]);
    }

    #[test]
    fn featured_is_the_stable_prefix() {
        let featured = featured();
        assert_eq!(featured.len(), 3);
        assert_eq!(featured[0].id, 1);
        assert_eq!(featured[2].title, "Weather Dashboard");
    }
}
