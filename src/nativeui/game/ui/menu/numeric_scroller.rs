use crate::error::{Error, Result};

use super::item::Property;
use super::scroller::{MenuItemScroller, Scroller};

/// Absorbs binary rounding when dividing by the increment.
const EPSILON: f64 = 1e-9;

/// Scroller over the numbers `minimum, minimum + increment, ..., maximum`.
#[derive(Debug)]
pub struct MenuItemNumericScroller {
    base: MenuItemScroller,
    value: f64,
    minimum: f64,
    maximum: f64,
    increment: f64,
    thousands_separator: bool,
    hexadecimal: bool,
    decimal_places: usize
}

impl MenuItemNumericScroller {
    pub fn new<T, D>(text: T, description: D) -> MenuItemNumericScroller where T: Into<String>, D: Into<String> {
        let mut scroller = MenuItemNumericScroller {
            base: MenuItemScroller::new(text, description),
            value: 0.0,
            minimum: 0.0,
            maximum: 100.0,
            increment: 0.5,
            thousands_separator: false,
            hexadecimal: false,
            decimal_places: 2
        };
        let middle = scroller.option_count() / 2;
        scroller.set_selected_index(middle);
        scroller
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn set_value(&mut self, value: f64) -> Result<()> {
        if value == self.value {
            return Ok(());
        }
        if !(self.minimum..=self.maximum).contains(&value) {
            return Err(Error::out_of_range("value", value, self.minimum, self.maximum));
        }
        self.store_value(value);
        Ok(())
    }

    pub fn minimum(&self) -> f64 {
        self.minimum
    }

    /// Raises the maximum along when it would end up below the new minimum.
    pub fn set_minimum(&mut self, minimum: f64) -> Result<()> {
        check_finite("minimum", minimum)?;
        if minimum == self.minimum {
            return Ok(());
        }
        self.minimum = minimum;
        if self.minimum > self.maximum {
            self.maximum = self.minimum;
            self.notify(Property::Maximum);
        }
        self.notify(Property::Minimum);
        self.notify(Property::OptionCount);
        self.clamp_value();
        Ok(())
    }

    pub fn maximum(&self) -> f64 {
        self.maximum
    }

    /// Lowers the minimum along when it would end up above the new maximum.
    pub fn set_maximum(&mut self, maximum: f64) -> Result<()> {
        check_finite("maximum", maximum)?;
        if maximum == self.maximum {
            return Ok(());
        }
        self.maximum = maximum;
        if self.minimum > self.maximum {
            self.minimum = self.maximum;
            self.notify(Property::Minimum);
        }
        self.notify(Property::Maximum);
        self.notify(Property::OptionCount);
        self.clamp_value();
        Ok(())
    }

    pub fn increment(&self) -> f64 {
        self.increment
    }

    pub fn set_increment(&mut self, increment: f64) -> Result<()> {
        check_finite("increment", increment)?;
        if increment < 0.0 {
            return Err(Error::Negative("increment"));
        }
        if increment == 0.0 {
            return Err(Error::NotPositive("increment"));
        }
        if increment != self.increment {
            self.increment = increment;
            self.notify(Property::Increment);
            self.notify(Property::OptionCount);
            self.update_selected_index();
        }
        Ok(())
    }

    pub fn thousands_separator(&self) -> bool {
        self.thousands_separator
    }

    pub fn set_thousands_separator(&mut self, thousands_separator: bool) {
        if thousands_separator != self.thousands_separator {
            self.thousands_separator = thousands_separator;
            self.notify(Property::ThousandsSeparator);
        }
    }

    pub fn hexadecimal(&self) -> bool {
        self.hexadecimal
    }

    pub fn set_hexadecimal(&mut self, hexadecimal: bool) {
        if hexadecimal != self.hexadecimal {
            self.hexadecimal = hexadecimal;
            self.notify(Property::Hexadecimal);
        }
    }

    pub fn decimal_places(&self) -> usize {
        self.decimal_places
    }

    pub fn set_decimal_places(&mut self, decimal_places: usize) {
        if decimal_places != self.decimal_places {
            self.decimal_places = decimal_places;
            self.notify(Property::DecimalPlaces);
        }
    }

    fn notify(&mut self, property: Property) {
        self.base.item_mut().notify(property);
    }

    /// Sets an in-range value and moves the selection to the option it falls in.
    fn store_value(&mut self, value: f64) {
        self.value = value;
        if !self.update_selected_index() {
            self.notify(Property::Value);
        }
    }

    fn clamp_value(&mut self) {
        let value = self.value.max(self.minimum).min(self.maximum);
        if value != self.value {
            self.store_value(value);
        } else {
            self.update_selected_index();
        }
    }

    fn update_selected_index(&mut self) -> bool {
        let index = ((self.value - self.minimum) / self.increment + EPSILON).floor().max(0.0) as usize;
        self.select(index)
    }

    fn select(&mut self, index: usize) -> bool {
        let index = index.min(self.option_count().saturating_sub(1));
        if index == self.selected_index() {
            return false;
        }
        self.value = self.minimum + index as f64 * self.increment;
        self.base.select(index);
        self.notify(Property::Value);
        true
    }
}

impl Scroller for MenuItemNumericScroller {
    fn scroller(&self) -> &MenuItemScroller {
        &self.base
    }

    fn scroller_mut(&mut self) -> &mut MenuItemScroller {
        &mut self.base
    }

    /// Saturates at `usize::MAX` for ranges too wide to count.
    fn option_count(&self) -> usize {
        let steps = ((self.maximum - self.minimum) / self.increment + EPSILON).floor().max(0.0);
        (steps as usize).saturating_add(1)
    }

    fn selected_option_text(&self) -> String {
        if self.hexadecimal {
            format!("{:X}", self.value.trunc() as i64)
        } else {
            let text = format!("{:.*}", self.decimal_places, self.value);
            if self.thousands_separator {
                group_thousands(&text)
            } else {
                text
            }
        }
    }

    fn set_selected_index(&mut self, index: usize) {
        self.select(index);
    }

    fn scroll_to_previous(&mut self) {
        if self.item().is_disabled() {
            return;
        }
        let value = (self.value - self.increment).max(self.minimum);
        if value != self.value {
            self.store_value(value);
        }
    }

    fn scroll_to_next(&mut self) {
        if self.item().is_disabled() {
            return;
        }
        let value = (self.value + self.increment).min(self.maximum);
        if value != self.value {
            self.store_value(value);
        }
    }
}

fn check_finite(name: &'static str, value: f64) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(Error::out_of_range(name, value, f64::MIN, f64::MAX))
    }
}

/// Inserts `,` between groups of three integer digits of a formatted number.
fn group_thousands(text: &str) -> String {
    let (sign, digits) = match text.strip_prefix('-') {
        Some(digits) => ("-", digits),
        None => ("", text)
    };
    let (integer, fraction) = match digits.find('.') {
        Some(dot) => digits.split_at(dot),
        None => (digits, "")
    };
    let mut grouped = String::with_capacity(text.len() + integer.len() / 3);
    grouped.push_str(sign);
    for (i, c) in integer.chars().enumerate() {
        if i > 0 && (integer.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped.push_str(fraction);
    grouped
}
