//! Fixed names and numbers baked into every generated artifact.

pub const APP_NAME: &str = "blorp-deploy";

/// Base name (without extension) of the persisted settings file.
pub const STORAGE_KEY: &str = "deploy-settings";

/// Container image every artifact deploys.
pub const IMAGE: &str = "christianjuth/blorp:latest";

/// Service, container and label name used by the manifests.
pub const SERVICE_NAME: &str = "blorp";

pub const CONTAINER_PORT: u16 = 80;
pub const HOST_PORT: u16 = 8080;
pub const NODE_PORT: u16 = 30080;

pub const ENV_NAME: &str = "REACT_APP_NAME";
pub const ENV_DEFAULT_INSTANCE: &str = "REACT_APP_DEFAULT_INSTANCE";
pub const ENV_LOCK_TO_DEFAULT_INSTANCE: &str = "REACT_APP_LOCK_TO_DEFAULT_INSTANCE";
pub const ENV_INSTANCE_SELECTION_MODE: &str = "REACT_APP_INSTANCE_SELECTION_MODE";

pub const DEFAULT_DISPLAY_NAME: &str = "Blorp";
pub const DEFAULT_ENDPOINT: &str = "https://lemmy.world";
