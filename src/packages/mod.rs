//! # Project package managers
//!
//! Plugins declare npm-ecosystem dependencies. Which client adds them is
//! decided by the lockfile found in the project root:
//!
//! | Lockfile          | Manager | add       | add (dev)    | remove      |
//! |-------------------|---------|-----------|--------------|-------------|
//! | `bun.lockb`       | bun     | `add`     | `add -D`     | `remove`    |
//! | `pnpm-lock.yaml`  | pnpm    | `add`     | `add -D`     | `remove`    |
//! | `yarn.lock`       | yarn    | `add`     | `add -D`     | `remove`    |
//! | (none)            | npm     | `install` | `install -D` | `uninstall` |
//!
//! The first match wins, in the order listed.

mod kind;
mod shell;

pub use kind::PackageManagerKind;
pub use shell::ShellPackageManager;
