/// List with at most one highlighted item and at most one hovered item
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectableList<T> {
    items: Vec<T>,
    selected: Option<usize>,
    hovered: Option<usize>,
}

impl<T> Default for SelectableList<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            selected: None,
            hovered: None,
        }
    }
}

impl<T> SelectableList<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self {
            items,
            selected: None,
            hovered: None,
        }
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Swap in new items; highlight and hover refer to old positions and are dropped
    pub fn replace(&mut self, items: Vec<T>) {
        self.items = items;
        self.selected = None;
        self.hovered = None;
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn selected_item(&self) -> Option<&T> {
        self.selected.and_then(|i| self.items.get(i))
    }

    pub fn is_selected(&self, index: usize) -> bool {
        self.selected == Some(index)
    }

    /// Highlight `index`, clearing any sibling
    pub fn select(&mut self, index: usize) -> bool {
        if index < self.items.len() {
            self.selected = Some(index);
            true
        } else {
            false
        }
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// Clicking a highlighted item clears it, clicking another one moves the highlight.
    /// Returns whether `index` ends up highlighted.
    pub fn toggle(&mut self, index: usize) -> bool {
        if index >= self.items.len() {
            return false;
        }
        if self.selected == Some(index) {
            self.selected = None;
            false
        } else {
            self.selected = Some(index);
            true
        }
    }

    pub fn hovered(&self) -> Option<usize> {
        self.hovered
    }

    pub fn is_hovered(&self, index: usize) -> bool {
        self.hovered == Some(index)
    }

    pub fn set_hovered(&mut self, index: Option<usize>) {
        self.hovered = index.filter(|&i| i < self.items.len());
    }
}

impl<T: PartialEq> SelectableList<T> {
    pub fn position(&self, item: &T) -> Option<usize> {
        self.items.iter().position(|i| i == item)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn phenotypes() -> SelectableList<&'static str> {
        SelectableList::new(vec!["Diabetes", "Obesity", "Breast cancer"])
    }

    #[test]
    fn test_toggle_is_exclusive() {
        let mut list = phenotypes();
        assert!(list.toggle(0));
        assert!(list.toggle(2));
        assert!(!list.is_selected(0));
        assert_eq!(list.selected_item(), Some(&"Breast cancer"));
    }

    #[test]
    fn test_toggle_selected_clears() {
        let mut list = phenotypes();
        list.toggle(1);
        assert!(!list.toggle(1));
        assert_eq!(list.selected(), None);
    }

    #[test]
    fn test_out_of_range_ignored() {
        let mut list = phenotypes();
        list.toggle(0);
        assert!(!list.toggle(7));
        assert!(!list.select(7));
        list.set_hovered(Some(9));
        assert_eq!(list.selected(), Some(0));
        assert_eq!(list.hovered(), None);
    }

    #[test]
    fn test_replace_drops_markers() {
        let mut list = phenotypes();
        list.select(1);
        list.set_hovered(Some(2));
        list.replace(vec!["Obesity"]);
        assert_eq!(list.selected(), None);
        assert_eq!(list.hovered(), None);
    }
}
