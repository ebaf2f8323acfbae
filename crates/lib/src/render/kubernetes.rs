//! Kubernetes manifest renderer: a Deployment followed by a NodePort Service.

use super::RenderInput;
use super::env::{EnvSyntax, env_lines};
use crate::consts::{CONTAINER_PORT, IMAGE, NODE_PORT, SERVICE_NAME};

/// Separator between documents in a multi-document YAML stream.
const DOCUMENT_SEPARATOR: &str = "---";

pub fn render(input: &RenderInput<'_>) -> String {
  let mut lines = deployment(input);
  lines.push(DOCUMENT_SEPARATOR.to_string());
  lines.extend(service());

  let mut text = lines.join("\n");
  text.push('\n');
  text
}

fn deployment(input: &RenderInput<'_>) -> Vec<String> {
  let mut lines = vec![
    "apiVersion: apps/v1".to_string(),
    "kind: Deployment".to_string(),
    "metadata:".to_string(),
    format!("  name: {SERVICE_NAME}"),
    "spec:".to_string(),
    "  replicas: 1".to_string(),
    "  selector:".to_string(),
    "    matchLabels:".to_string(),
    format!("      app: {SERVICE_NAME}"),
    "  template:".to_string(),
    "    metadata:".to_string(),
    "      labels:".to_string(),
    format!("        app: {SERVICE_NAME}"),
    "    spec:".to_string(),
    "      containers:".to_string(),
    format!("        - name: {SERVICE_NAME}"),
    format!("          image: {IMAGE}"),
    "          ports:".to_string(),
    format!("            - containerPort: {CONTAINER_PORT}"),
    "          env:".to_string(),
  ];
  lines.extend(env_lines(input, EnvSyntax::ManifestEntry, "            "));
  lines
}

fn service() -> Vec<String> {
  vec![
    "apiVersion: v1".to_string(),
    "kind: Service".to_string(),
    "metadata:".to_string(),
    format!("  name: {SERVICE_NAME}"),
    "spec:".to_string(),
    "  type: NodePort".to_string(),
    "  selector:".to_string(),
    format!("    app: {SERVICE_NAME}"),
    "  ports:".to_string(),
    format!("    - port: {CONTAINER_PORT}"),
    format!("      targetPort: {CONTAINER_PORT}"),
    format!("      nodePort: {NODE_PORT}"),
  ]
}
