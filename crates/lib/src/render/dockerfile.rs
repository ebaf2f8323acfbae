//! Image definition renderer.
//!
//! Host port mapping is left to `docker run`; the image only exposes the
//! container port.

use super::RenderInput;
use super::env::{EnvSyntax, env_lines};
use crate::consts::{CONTAINER_PORT, HOST_PORT, IMAGE, SERVICE_NAME};

pub fn render(input: &RenderInput<'_>) -> String {
  let mut lines = vec![format!("FROM {IMAGE}"), String::new()];
  lines.extend(env_lines(input, EnvSyntax::Declaration, ""));
  lines.push(String::new());
  lines.push(format!("EXPOSE {CONTAINER_PORT}"));
  lines.push(String::new());
  lines.push(format!("# Build: docker build -t {SERVICE_NAME} ."));
  lines.push(format!("# Run: docker run -d -p {HOST_PORT}:{CONTAINER_PORT} {SERVICE_NAME}"));

  let mut text = lines.join("\n");
  text.push('\n');
  text
}
