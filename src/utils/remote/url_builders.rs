use crate::config::settings::Settings;
use crate::project_identity::{MANIFEST_FILE, PLUGIN_FILES_DIR};

fn repo_base(settings: &Settings, github: &str) -> String {
    format!(
        "{}/{}/{}",
        settings.raw_base_url.trim_end_matches('/'),
        github.trim_matches('/'),
        settings.branch
    )
}

pub fn manifest_url(settings: &Settings, github: &str) -> String {
    format!("{}/{}", repo_base(settings, github), MANIFEST_FILE)
}

pub fn file_url(settings: &Settings, github: &str, name: &str) -> String {
    let encoded = name
        .split('/')
        .map(|segment| urlencoding::encode(segment).into_owned())
        .collect::<Vec<_>>()
        .join("/");
    format!("{}/{}/{}", repo_base(settings, github), PLUGIN_FILES_DIR, encoded)
}
