//! `docker run` command renderer.

use super::RenderInput;
use super::env::{EnvSyntax, env_lines};
use crate::consts::{CONTAINER_PORT, HOST_PORT, IMAGE};

pub fn render(input: &RenderInput<'_>) -> String {
  let mut lines = vec![format!("docker run -d -p {HOST_PORT}:{CONTAINER_PORT} \\")];
  lines.extend(env_lines(input, EnvSyntax::Flag, "  "));
  lines.push(format!("  {IMAGE}"));

  let mut text = lines.join("\n");
  text.push('\n');
  text
}
