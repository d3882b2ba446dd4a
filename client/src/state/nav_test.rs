use super::*;

// =============================================================
// is_active
// =============================================================

#[test]
fn root_is_only_active_on_itself() {
    assert!(is_active("/", "/"));
    assert!(!is_active("/", "/students"));
}

#[test]
fn nested_pages_keep_their_list_active() {
    assert!(is_active("/students", "/students"));
    assert!(is_active("/students", "/students/new"));
    assert!(is_active("/students", "/students/4/edit"));
    assert!(is_active("/students", "/students/"));
}

#[test]
fn shared_prefix_is_not_a_match() {
    assert!(!is_active("/exams", "/exam-results"));
    assert!(!is_active("/exam", "/exams"));
}

// =============================================================
// Derived menu state
// =============================================================

#[test]
fn active_item_follows_route() {
    assert_eq!(active_item("/exam-results/2/edit").map(|i| i.label), Some("Exam results"));
    assert_eq!(active_item("/").map(|i| i.label), Some("Dashboard"));
    assert_eq!(active_item("/login"), None);
}

#[test]
fn active_section_opens_for_deep_links() {
    assert_eq!(active_section("/branches/new").map(|s| s.title), Some("Organization"));
    assert_eq!(active_section("/attendance").map(|s| s.title), Some("Records"));
    assert_eq!(active_section("/nowhere"), None);
}

#[test]
fn menu_paths_are_unique() {
    let mut paths: Vec<&str> = MENU.iter().flat_map(|s| s.items).map(|i| i.path).collect();
    let total = paths.len();
    paths.sort_unstable();
    paths.dedup();
    assert_eq!(paths.len(), total);
}
