//! Constants used throughout the Stamp application

/// Token matched against file names (substring) when discovering a
/// configuration descriptor in a template root
pub const CONFIG_BASENAME: &str = "stamp.config";

/// Directory name of the persistent package cache under the OS temp dir
pub const CACHE_DIR_NAME: &str = "stamp-cache";

/// Subdirectory of a resolved package that holds the template contents
pub const PACKAGE_TEMPLATE_DIR: &str = "template";

/// Registry metadata endpoint queried for `dist-tags.latest`
pub const REGISTRY_BASE_URL: &str = "https://registry.npmjs.org";

/// Environment variable overriding the built-in template root
pub const TEMPLATES_ENV_VAR: &str = "STAMP_TEMPLATES";

/// Name of the directory scanned for templates, both beside the executable
/// and under the operator's project root
pub const TEMPLATE_DIR_NAME: &str = "template";

/// Extensions eligible for placeholder substitution when the config does not
/// provide its own allow-list
pub const DEFAULT_PARSE_EXTS: &[&str] =
    &[".js", ".ts", ".mjs", ".cjs", ".json", ".jsx", ".tsx", ".txt"];

/// Exit codes
pub mod exit_codes {
    pub const FAILURE: i32 = 1;
}

/// Verbosity levels
pub mod verbosity {
    pub const OFF: u8 = 0;
    pub const INFO: u8 = 1;
    pub const DEBUG: u8 = 2;
    pub const TRACE: u8 = 3;
}
