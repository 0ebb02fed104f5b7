mod loader;
mod settings;

pub use loader::{default_settings_toml, load_settings, write_settings_to};
pub use settings::ExplorerSettings;
