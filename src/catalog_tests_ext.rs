use super::{create, delete, find, update, CatalogState};
use crate::clock::FixedClock;
use crate::domain::project::{Project, ProjectInput, ValidationError};
use crate::domain::sort::SortKey;
use crate::project_id::SequentialIds;
use crate::query::ProjectQuery;

fn project(id: &str, title: &str, date: &str, tags: &[&str]) -> Project {
    Project {
        id: id.to_string(),
        title: title.to_string(),
        description: format!("{title} description"),
        date: date.to_string(),
        tags: tags.iter().map(|value| (*value).to_string()).collect(),
    }
}

fn seed() -> Vec<Project> {
    vec![
        project("p_1", "Blog Template", "2025-05-02", &["template"]),
        project("p_2", "Task Manager App", "2025-06-15", &["javascript"]),
    ]
}

#[test]
fn create_prepends_with_fresh_id() {
    let projects = seed();
    let mut ids = SequentialIds::default();
    let input = ProjectInput::from_raw("New One", "Fresh", Some("2025-08-01"), "rust, cli");

    let (next, record) =
        create(&projects, input, &mut ids, &FixedClock("2026-01-01")).expect("create should work");

    assert_eq!(record.id, "p_3");
    assert_eq!(next.len(), 3);
    assert_eq!(next[0], record);
    assert_eq!(&next[1..], projects.as_slice());
    assert_eq!(record.tags, vec!["rust".to_string(), "cli".to_string()]);
}

#[test]
fn create_defaults_blank_date_to_today() {
    let mut ids = SequentialIds::starting_at(10);
    let input = ProjectInput::from_raw("Dateless", "No date given", Some("  "), "");
    let (_, record) =
        create(&[], input, &mut ids, &FixedClock("2026-10-16")).expect("create should work");
    assert_eq!(record.date, "2026-10-16");
    assert_eq!(record.id, "p_11");
}

#[test]
fn create_with_empty_title_is_rejected() {
    let projects = seed();
    let before = projects.clone();
    let mut ids = SequentialIds::default();
    let input = ProjectInput::from_raw("", "desc", None, "");

    let err = create(&projects, input, &mut ids, &FixedClock("2026-01-01"))
        .expect_err("empty title should be rejected");

    assert_eq!(err, ValidationError::EmptyTitle);
    assert_eq!(projects, before);
}

#[test]
fn update_replaces_fields_and_keeps_id_and_position() {
    let projects = seed();
    let input = ProjectInput::from_raw("Blog v2", "Rewritten", Some(""), "Blog");

    let next = update(&projects, "p_1", input).expect("update should work");

    assert_eq!(next.len(), 2);
    assert_eq!(next[0].id, "p_1");
    assert_eq!(next[0].title, "Blog v2");
    assert_eq!(next[0].description, "Rewritten");
    assert_eq!(next[0].date, "");
    assert_eq!(next[0].tags, vec!["Blog".to_string()]);
    assert_eq!(next[1], projects[1]);
}

#[test]
fn update_validates_before_touching_anything() {
    let projects = seed();
    let input = ProjectInput::from_raw("Title", "   ", None, "");
    let err = update(&projects, "p_1", input).expect_err("blank description should fail");
    assert_eq!(err, ValidationError::EmptyDescription);
}

#[test]
fn update_of_unknown_id_is_a_no_op() {
    let projects = seed();
    let input = ProjectInput::from_raw("Title", "Desc", None, "");
    let next = update(&projects, "p_missing", input).expect("unknown id should not fail");
    assert_eq!(next, projects);
}

#[test]
fn delete_removes_matching_record() {
    let next = delete(&seed(), "p_2");
    assert_eq!(next.len(), 1);
    assert!(find(&next, "p_2").is_none());
}

#[test]
fn delete_of_absent_id_returns_equal_collection() {
    let projects = seed();
    assert_eq!(delete(&projects, "p_missing"), projects);
}

#[test]
fn state_view_reflects_selection() {
    let state = CatalogState::new(
        seed(),
        ProjectQuery::new(None, Some("JavaScript"), SortKey::TitleAsc),
    );
    let visible = state.visible();
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].title, "Task Manager App");

    let cleared = CatalogState::new(seed(), ProjectQuery::new(None, Some("all"), SortKey::TitleAsc));
    assert_eq!(cleared.view.tag, None);
    assert_eq!(cleared.visible().len(), 2);
    assert_eq!(cleared.tag_options(), vec!["all", "javascript", "template"]);
}
