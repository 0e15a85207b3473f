//! Breadcrumb trail state for nested organisation/asset navigation.
//!
//! DESIGN
//! ======
//! The trail grows append-only as the user navigates deeper and is cut back
//! when a crumb is clicked. Pages own their crumb pushes; the bar component
//! only renders and truncates.

#[cfg(test)]
#[path = "breadcrumbs_test.rs"]
mod breadcrumbs_test;

/// One entry in the breadcrumb trail.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Crumb {
    pub label: String,
    pub link: String,
}

/// Ordered breadcrumb trail, root first.
#[derive(Clone, Debug, Default)]
pub struct BreadcrumbsState {
    pub crumbs: Vec<Crumb>,
}

impl BreadcrumbsState {
    /// Append a crumb. Re-pushing the link already at the tail refreshes its
    /// label instead of duplicating; mount effects may run more than once.
    pub fn push(&mut self, label: impl Into<String>, link: impl Into<String>) {
        let crumb = Crumb { label: label.into(), link: link.into() };
        if let Some(last) = self.crumbs.last_mut() {
            if last.link == crumb.link {
                *last = crumb;
                return;
            }
        }
        self.crumbs.push(crumb);
    }

    /// Cut the trail back so the crumb with `link` is the tail.
    /// Unknown links leave the trail untouched.
    pub fn truncate_to(&mut self, link: &str) {
        if let Some(index) = self.crumbs.iter().position(|c| c.link == link) {
            self.crumbs.truncate(index + 1);
        }
    }

    /// Reset to a single root crumb. Used by top-level pages on mount.
    pub fn reset_to(&mut self, label: impl Into<String>, link: impl Into<String>) {
        self.crumbs.clear();
        self.push(label, link);
    }
}
