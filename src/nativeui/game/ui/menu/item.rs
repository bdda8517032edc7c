/// Observable properties of menu items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Property {
    Text,
    Description,
    IsDisabled,
    SelectedIndex,
    OptionCount,
    Options,
    Value,
    Minimum,
    Maximum,
    Increment,
    ThousandsSeparator,
    Hexadecimal,
    DecimalPlaces
}

pub type PropertyObserver = Box<dyn FnMut(Property) + Send>;

pub struct MenuItem {
    text: String,
    description: String,
    disabled: bool,
    observers: Vec<PropertyObserver>
}

impl MenuItem {
    pub fn new<T, D>(text: T, description: D) -> MenuItem where T: Into<String>, D: Into<String> {
        MenuItem {
            text: text.into(),
            description: description.into(),
            disabled: false,
            observers: Vec::new()
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text<T>(&mut self, text: T) where T: Into<String> {
        let text = text.into();
        if text != self.text {
            self.text = text;
            self.notify(Property::Text);
        }
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn set_description<D>(&mut self, description: D) where D: Into<String> {
        let description = description.into();
        if description != self.description {
            self.description = description;
            self.notify(Property::Description);
        }
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    pub fn set_disabled(&mut self, disabled: bool) {
        if disabled != self.disabled {
            self.disabled = disabled;
            self.notify(Property::IsDisabled);
        }
    }

    /// Registers `observer` to be called after every property change.
    pub fn subscribe<F>(&mut self, observer: F) where F: FnMut(Property) + Send + 'static {
        self.observers.push(Box::new(observer));
    }

    pub(crate) fn notify(&mut self, property: Property) {
        for observer in &mut self.observers {
            observer(property);
        }
    }
}

impl std::fmt::Debug for MenuItem {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.debug_struct("MenuItem")
            .field("text", &self.text)
            .field("description", &self.description)
            .field("disabled", &self.disabled)
            .field("observers", &self.observers.len())
            .finish()
    }
}
