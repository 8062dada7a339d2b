use std::collections::BTreeSet;

/// Row ids ticked in a list view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RowSelection {
    ids: BTreeSet<String>,
}

impl RowSelection {
    pub fn toggle(&mut self, id: &str) {
        if !self.ids.remove(id) {
            self.ids.insert(id.to_string());
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    /// Header checkbox: selects every visible row, or clears them when all are
    /// already selected.
    pub fn toggle_all<'a, I>(&mut self, visible: I)
    where
        I: IntoIterator<Item = &'a str>,
    {
        let visible: Vec<&str> = visible.into_iter().collect();
        if !visible.is_empty() && visible.iter().all(|id| self.ids.contains(*id)) {
            for id in visible {
                self.ids.remove(id);
            }
        } else {
            self.ids.extend(visible.into_iter().map(str::to_string));
        }
    }

    pub fn all_selected<'a, I>(&self, visible: I) -> bool
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut any = false;
        for id in visible {
            any = true;
            if !self.ids.contains(id) {
                return false;
            }
        }
        any
    }

    /// Drops ids that are no longer present after a reload.
    pub fn retain_present<'a, I>(&mut self, present: I)
    where
        I: IntoIterator<Item = &'a str>,
    {
        let present: BTreeSet<&str> = present.into_iter().collect();
        self.ids.retain(|id| present.contains(id.as_str()));
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    pub fn count(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn ids(&self) -> Vec<String> {
        self.ids.iter().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_adds_then_removes() {
        let mut selection = RowSelection::default();
        selection.toggle("r1");
        assert!(selection.contains("r1"));
        selection.toggle("r1");
        assert!(selection.is_empty());
    }

    #[test]
    fn toggle_all_selects_visible_then_clears_them() {
        let mut selection = RowSelection::default();
        selection.toggle("r1");
        selection.toggle_all(["r1", "r2", "r3"]);
        assert_eq!(selection.count(), 3);
        assert!(selection.all_selected(["r1", "r2", "r3"]));

        selection.toggle_all(["r1", "r2", "r3"]);
        assert_eq!(selection.count(), 0);
    }

    #[test]
    fn all_selected_is_false_for_empty_page() {
        let selection = RowSelection::default();
        assert!(!selection.all_selected(std::iter::empty()));
    }

    #[test]
    fn retain_present_prunes_missing_rows() {
        let mut selection = RowSelection::default();
        selection.toggle("r1");
        selection.toggle("r2");
        selection.retain_present(["r2", "r3"]);
        assert_eq!(selection.ids(), vec!["r2".to_string()]);
    }
}
