//! Compose manifest renderer.

use super::RenderInput;
use super::env::{EnvSyntax, env_lines};
use crate::consts::{CONTAINER_PORT, HOST_PORT, IMAGE, SERVICE_NAME};

pub fn render(input: &RenderInput<'_>) -> String {
  let mut lines = vec![
    "services:".to_string(),
    format!("  {SERVICE_NAME}:"),
    format!("    image: {IMAGE}"),
    "    ports:".to_string(),
    format!("      - \"{HOST_PORT}:{CONTAINER_PORT}\""),
    "    environment:".to_string(),
  ];
  lines.extend(env_lines(input, EnvSyntax::MappingEntry, "      "));

  let mut text = lines.join("\n");
  text.push('\n');
  text
}
