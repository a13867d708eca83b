//! Application-menu shortcuts for Windows executables.
//!
//! Creates freedesktop `.desktop` entries that launch an executable through
//! Wine, in the per-user applications directory.

mod desktop_entry;
mod manager;

pub use desktop_entry::{escape_value, quote_exec_arg, DesktopEntry, DesktopEntryBuilder};
pub use manager::{display_name, ShortcutManager};
