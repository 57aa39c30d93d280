mod color;
mod edges;
mod enums;
mod style;
mod theme;

pub use color::{Color, ColorOp, Oklch, Rgb};
pub use edges::Edges;
pub use enums::{Align, Border, Direction, Justify, Size, TextAlign, TextStyle};
pub use style::Style;
pub use theme::{ColorContext, DefaultTheme, LightTheme, Theme};
