//! Sidebar navigation derived from the current route.
//!
//! DESIGN
//! ======
//! There is no stored "open section" or "active item" state: both are pure
//! functions of the pathname, so a deep link, a redirect and a click all
//! highlight the same entry.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

use records::{
    Attendance, Branch, Classroom, Course, Enrollment, Exam, ExamResult, Program, Record, Role, School, Student,
    Teacher, User,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub path: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavSection {
    pub title: &'static str,
    pub items: &'static [NavItem],
}

const fn item<R: Record>() -> NavItem {
    NavItem { label: R::ENDPOINT.title, path: R::ENDPOINT.page }
}

pub const MENU: &[NavSection] = &[
    NavSection { title: "Overview", items: &[NavItem { label: "Dashboard", path: "/" }] },
    NavSection {
        title: "Academics",
        items: &[item::<Student>(), item::<Teacher>(), item::<Classroom>(), item::<Course>(), item::<Program>()],
    },
    NavSection { title: "Assessment", items: &[item::<Exam>(), item::<ExamResult>()] },
    NavSection { title: "Records", items: &[item::<Enrollment>(), item::<Attendance>()] },
    NavSection { title: "Organization", items: &[item::<School>(), item::<Branch>()] },
    NavSection { title: "Access", items: &[item::<User>(), item::<Role>()] },
];

/// Whether `current` is `path` or a page beneath it.
pub fn is_active(path: &str, current: &str) -> bool {
    let current = current.trim_end_matches('/');
    let path = path.trim_end_matches('/');
    if path.is_empty() {
        return current.is_empty();
    }
    current == path || current.strip_prefix(path).is_some_and(|rest| rest.starts_with('/'))
}

pub fn active_item(current: &str) -> Option<&'static NavItem> {
    MENU.iter().flat_map(|section| section.items).find(|item| is_active(item.path, current))
}

/// The section holding the active item; this is the one the sidebar expands.
pub fn active_section(current: &str) -> Option<&'static NavSection> {
    MENU.iter().find(|section| section.items.iter().any(|item| is_active(item.path, current)))
}
