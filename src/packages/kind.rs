use std::fmt;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PackageManagerKind {
    Bun,
    Pnpm,
    Yarn,
    Npm,
}

impl PackageManagerKind {
    /// Lockfile markers in detection priority order
    const MARKERS: [(&'static str, PackageManagerKind); 3] = [
        ("bun.lockb", PackageManagerKind::Bun),
        ("pnpm-lock.yaml", PackageManagerKind::Pnpm),
        ("yarn.lock", PackageManagerKind::Yarn),
    ];

    /// Pick the manager for a project from its lockfile, defaulting to npm
    pub fn detect(project_root: &Path) -> Self {
        Self::MARKERS
            .iter()
            .find(|(marker, _)| project_root.join(marker).exists())
            .map(|(_, kind)| *kind)
            .unwrap_or(PackageManagerKind::Npm)
    }

    pub fn binary(&self) -> &'static str {
        match self {
            Self::Bun => "bun",
            Self::Pnpm => "pnpm",
            Self::Yarn => "yarn",
            Self::Npm => "npm",
        }
    }

    /// Subcommand arguments preceding the package list for an add
    pub fn add_args(&self, dev: bool) -> Vec<&'static str> {
        let verb = match self {
            Self::Npm => "install",
            Self::Bun | Self::Pnpm | Self::Yarn => "add",
        };

        if dev { vec![verb, "-D"] } else { vec![verb] }
    }

    /// Subcommand arguments preceding the package list for a removal
    pub fn remove_args(&self) -> Vec<&'static str> {
        match self {
            Self::Npm => vec!["uninstall"],
            Self::Bun | Self::Pnpm | Self::Yarn => vec!["remove"],
        }
    }
}

impl fmt::Display for PackageManagerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.binary())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn defaults_to_npm_without_lockfile() {
        let dir = tempdir().expect("tempdir");
        assert_eq!(PackageManagerKind::detect(dir.path()), PackageManagerKind::Npm);
    }

    #[test]
    fn detects_each_lockfile() {
        for (marker, expected) in [
            ("bun.lockb", PackageManagerKind::Bun),
            ("pnpm-lock.yaml", PackageManagerKind::Pnpm),
            ("yarn.lock", PackageManagerKind::Yarn),
        ] {
            let dir = tempdir().expect("tempdir");
            fs::write(dir.path().join(marker), "").expect("write lockfile");
            assert_eq!(PackageManagerKind::detect(dir.path()), expected);
        }
    }

    #[test]
    fn bun_wins_over_other_lockfiles() {
        let dir = tempdir().expect("tempdir");
        for marker in ["yarn.lock", "pnpm-lock.yaml", "bun.lockb"] {
            fs::write(dir.path().join(marker), "").expect("write lockfile");
        }
        assert_eq!(PackageManagerKind::detect(dir.path()), PackageManagerKind::Bun);
    }

    #[test]
    fn pnpm_wins_over_yarn() {
        let dir = tempdir().expect("tempdir");
        fs::write(dir.path().join("yarn.lock"), "").expect("write");
        fs::write(dir.path().join("pnpm-lock.yaml"), "").expect("write");
        assert_eq!(PackageManagerKind::detect(dir.path()), PackageManagerKind::Pnpm);
    }

    #[test]
    fn command_syntax_per_manager() {
        assert_eq!(PackageManagerKind::Npm.add_args(false), vec!["install"]);
        assert_eq!(PackageManagerKind::Npm.add_args(true), vec!["install", "-D"]);
        assert_eq!(PackageManagerKind::Npm.remove_args(), vec!["uninstall"]);
        assert_eq!(PackageManagerKind::Yarn.add_args(true), vec!["add", "-D"]);
        assert_eq!(PackageManagerKind::Pnpm.remove_args(), vec!["remove"]);
        assert_eq!(PackageManagerKind::Bun.add_args(false), vec!["add"]);
    }
}
