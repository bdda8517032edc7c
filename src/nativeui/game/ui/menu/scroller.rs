use super::item::{MenuItem, Property};

/// State shared by every scroller: the item itself and the selected option.
#[derive(Debug)]
pub struct MenuItemScroller {
    item: MenuItem,
    selected_index: usize
}

impl MenuItemScroller {
    pub fn new<T, D>(text: T, description: D) -> MenuItemScroller where T: Into<String>, D: Into<String> {
        MenuItemScroller {
            item: MenuItem::new(text, description),
            selected_index: 0
        }
    }

    pub fn item(&self) -> &MenuItem {
        &self.item
    }

    pub fn item_mut(&mut self) -> &mut MenuItem {
        &mut self.item
    }

    pub fn selected_index(&self) -> usize {
        self.selected_index
    }

    /// Stores an already clamped index, returns whether it changed.
    pub(crate) fn select(&mut self, index: usize) -> bool {
        if index == self.selected_index {
            return false;
        }
        self.selected_index = index;
        self.item.notify(Property::SelectedIndex);
        true
    }
}

/// A menu item cycling through a set of options.
pub trait Scroller {
    fn scroller(&self) -> &MenuItemScroller;

    fn scroller_mut(&mut self) -> &mut MenuItemScroller;

    fn option_count(&self) -> usize;

    fn selected_option_text(&self) -> String;

    fn item(&self) -> &MenuItem {
        self.scroller().item()
    }

    fn item_mut(&mut self) -> &mut MenuItem {
        self.scroller_mut().item_mut()
    }

    fn selected_index(&self) -> usize {
        self.scroller().selected_index()
    }

    /// Selects `index`, clamped to the available options.
    fn set_selected_index(&mut self, index: usize) {
        let index = index.min(self.option_count().saturating_sub(1));
        self.scroller_mut().select(index);
    }

    fn scroll_to_previous(&mut self) {
        let count = self.option_count();
        if self.item().is_disabled() || count == 0 {
            return;
        }
        let index = self.selected_index();
        self.set_selected_index(if index == 0 { count - 1 } else { index - 1 });
    }

    fn scroll_to_next(&mut self) {
        let count = self.option_count();
        if self.item().is_disabled() || count == 0 {
            return;
        }
        let index = self.selected_index() + 1;
        self.set_selected_index(if index >= count { 0 } else { index });
    }
}
