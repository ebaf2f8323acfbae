mod render;
mod settings;
mod share;
mod validate;

pub use render::cmd_render;
pub use settings::{SettingsCommand, cmd_settings};
pub use share::cmd_share;
pub use validate::cmd_validate;
