pub mod project;
pub mod registry;
pub mod settings;

/// Plugins only install into projects of the same platform
pub fn is_platform_compatible(project_platform: &str, plugin_platform: &str) -> bool {
    project_platform == plugin_platform
}
