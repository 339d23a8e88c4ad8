// =============================================================================
// Application Identity
// =============================================================================

/// Application name (for paths, identifiers and log targets)
pub const APP_NAME: &str = "filterdoc";

/// Unix-style dotfile folder name
pub const APP_DOT_FOLDER: &str = ".filterdoc";

// =============================================================================
// Configuration Files
// =============================================================================

/// Config file name
pub const CONFIG_FILE_NAME: &str = "filterdoc.json";

/// Environment variable for config file path
pub const ENV_CONFIG: &str = "FILTERDOC_CONFIG";

/// Environment variable for log level/filter
pub const ENV_LOG: &str = "FILTERDOC_LOG";

// =============================================================================
// Environment Variables - Generation
// =============================================================================

/// Environment variable for the filter definitions file
pub const ENV_FILTERS: &str = "FILTERDOC_FILTERS";

/// Environment variable for the parameter name separator
pub const ENV_SEPARATOR: &str = "FILTERDOC_SEPARATOR";

/// Environment variable for the output format
pub const ENV_FORMAT: &str = "FILTERDOC_FORMAT";

// =============================================================================
// Generation Defaults
// =============================================================================

/// Default filter definitions file, relative to the working directory
pub const DEFAULT_FILTERS_FILE: &str = "filters.json";

/// Default title of generated OpenAPI documents
pub const DEFAULT_OPENAPI_TITLE: &str = "Filter API";

/// Default version of generated OpenAPI documents
pub const DEFAULT_OPENAPI_VERSION: &str = "1.0.0";
