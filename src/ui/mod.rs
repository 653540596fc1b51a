pub mod icons;
pub mod output;
pub mod table;
pub mod theme;

pub use icons::Icons;
pub use output::{error, header, info, section, success};
pub use table::{render, stats_table, TableBuilder};
pub use theme::{theme, Theme};
