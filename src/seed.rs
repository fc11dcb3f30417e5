use crate::domain::project::Project;

struct SeedProject {
    id: &'static str,
    title: &'static str,
    description: &'static str,
    date: &'static str,
    tags: &'static [&'static str],
}

const DEFAULT_PROJECTS: [SeedProject; 3] = [
    SeedProject {
        id: "p_default_portfolio",
        title: "Portfolio Website",
        description: "A personal portfolio showcasing projects, resume, and contact form.",
        date: "2025-07-01",
        tags: &["web", "ui", "html", "css"],
    },
    SeedProject {
        id: "p_default_task_manager",
        title: "Task Manager App",
        description: "Simple to-do list with priorities, deadlines, and local storage.",
        date: "2025-06-15",
        tags: &["javascript", "productivity"],
    },
    SeedProject {
        id: "p_default_blog",
        title: "Blog Template",
        description: "Responsive blog layout with dark mode and search.",
        date: "2025-05-02",
        tags: &["template", "blog", "responsive"],
    },
];

/// A fresh copy of the collection used when nothing usable is stored.
pub fn default_projects() -> Vec<Project> {
    DEFAULT_PROJECTS
        .iter()
        .map(|seed| Project {
            id: seed.id.to_string(),
            title: seed.title.to_string(),
            description: seed.description.to_string(),
            date: seed.date.to_string(),
            tags: seed.tags.iter().map(|tag| (*tag).to_string()).collect(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::default_projects;

    #[test]
    fn defaults_have_three_records_with_unique_ids() {
        let projects = default_projects();
        assert_eq!(projects.len(), 3);
        let ids: HashSet<&str> = projects.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids.len(), 3);
        assert_eq!(projects[0].title, "Portfolio Website");
        assert_eq!(projects[2].tags, vec!["template", "blog", "responsive"]);
    }

    #[test]
    fn each_call_returns_an_equal_fresh_copy() {
        let mut first = default_projects();
        first[0].title = "changed".to_string();
        assert_eq!(default_projects()[0].title, "Portfolio Website");
        assert_eq!(default_projects(), default_projects());
    }
}
