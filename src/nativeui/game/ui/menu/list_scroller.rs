use super::item::Property;
use super::scroller::{MenuItemScroller, Scroller};

/// Scroller over a list of text options, wrapping around at both ends.
#[derive(Debug)]
pub struct MenuItemListScroller {
    base: MenuItemScroller,
    options: Vec<String>
}

impl MenuItemListScroller {
    pub fn new<T, D, I, S>(text: T, description: D, options: I) -> MenuItemListScroller
        where T: Into<String>, D: Into<String>, I: IntoIterator<Item=S>, S: Into<String>
    {
        MenuItemListScroller {
            base: MenuItemScroller::new(text, description),
            options: options.into_iter().map(Into::into).collect()
        }
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }

    pub fn set_options<I, S>(&mut self, options: I) where I: IntoIterator<Item=S>, S: Into<String> {
        self.options = options.into_iter().map(Into::into).collect();
        let item = self.base.item_mut();
        item.notify(Property::Options);
        item.notify(Property::OptionCount);
        let index = self.selected_index();
        self.set_selected_index(index);
    }

    pub fn selected_option(&self) -> Option<&str> {
        self.options.get(self.selected_index()).map(String::as_str)
    }
}

impl Scroller for MenuItemListScroller {
    fn scroller(&self) -> &MenuItemScroller {
        &self.base
    }

    fn scroller_mut(&mut self) -> &mut MenuItemScroller {
        &mut self.base
    }

    fn option_count(&self) -> usize {
        self.options.len()
    }

    fn selected_option_text(&self) -> String {
        self.selected_option().unwrap_or_default().to_string()
    }
}
