//! Default setting values.

/// Listen on every interface.
pub const DEFAULT_HOST: &str = "0.0.0.0";

pub const DEFAULT_PORT: &str = "8080";

/// File looked up next to the executable.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Overrides the config file location.
pub const ENV_CONFIG_PATH: &str = "BARCODE_SERVICE_CONFIG";
pub const ENV_HOST: &str = "BARCODE_SERVICE_HOST";
pub const ENV_PORT: &str = "BARCODE_SERVICE_PORT";
