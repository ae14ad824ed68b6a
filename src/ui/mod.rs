pub mod icons;
pub mod output;
pub mod table;
pub mod theme;

pub use icons::Icons;
pub use output::{converted, header, skipped, summary_row, warn};
pub use table::{LanguageRow, language_json, language_table};
pub use theme::{Theme, theme};
