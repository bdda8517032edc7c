pub mod item;
pub mod scroller;
pub mod list_scroller;
pub mod numeric_scroller;

pub use self::item::{MenuItem, Property};
pub use self::list_scroller::MenuItemListScroller;
pub use self::numeric_scroller::MenuItemNumericScroller;
pub use self::scroller::{MenuItemScroller, Scroller};
