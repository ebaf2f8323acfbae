mod common;
mod render_tests;
mod settings_tests;
mod share_tests;
mod validate_tests;
