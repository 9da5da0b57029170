// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Path classification tables and predicates.
//!
//! Every heuristic the classifier and risk assessor apply lives here as
//! immutable data. Control flow elsewhere only calls the predicates.

use lazy_static::lazy_static;
use serde::Serialize;
use std::collections::HashSet;
use std::fmt;

use super::change::extension_of;

lazy_static! {
    /// Directory names that mark a test tree.
    static ref TEST_DIRS: HashSet<&'static str> =
        ["test", "tests", "spec", "specs", "__tests__", "testing"]
            .into_iter()
            .collect();

    /// Documentation file extensions.
    static ref DOC_EXTENSIONS: HashSet<&'static str> =
        ["md", "markdown", "rst", "adoc", "asciidoc", "rdoc", "textile"]
            .into_iter()
            .collect();

    /// Package-manager manifests and lockfiles, matched on exact file name.
    static ref DEPENDENCY_FILES: HashSet<&'static str> = [
        // JavaScript
        "package.json",
        "package-lock.json",
        "npm-shrinkwrap.json",
        "yarn.lock",
        "pnpm-lock.yaml",
        "bun.lockb",
        // Python
        "requirements.txt",
        "requirements-dev.txt",
        "Pipfile",
        "Pipfile.lock",
        "poetry.lock",
        "pyproject.toml",
        "setup.py",
        "setup.cfg",
        // Rust
        "Cargo.toml",
        "Cargo.lock",
        // Go
        "go.mod",
        "go.sum",
        // Ruby
        "Gemfile",
        "Gemfile.lock",
        // PHP
        "composer.json",
        "composer.lock",
        // JVM
        "pom.xml",
        "build.gradle",
        "build.gradle.kts",
        "gradle.lockfile",
        // Elixir
        "mix.exs",
        "mix.lock",
        // Dart
        "pubspec.yaml",
        "pubspec.lock",
        // Swift / Cocoa
        "Package.swift",
        "Package.resolved",
        "Podfile",
        "Podfile.lock",
        // .NET / C++
        "packages.config",
        "vcpkg.json",
        "conanfile.txt",
    ]
    .into_iter()
    .collect();

    /// Configuration file extensions.
    static ref CONFIG_EXTENSIONS: HashSet<&'static str> = [
        "json",
        "yaml",
        "yml",
        "toml",
        "ini",
        "cfg",
        "conf",
        "env",
        "properties",
        "editorconfig",
        "plist",
    ]
    .into_iter()
    .collect();

    /// Programming-language source extensions.
    static ref CODE_EXTENSIONS: HashSet<&'static str> = [
        "py", "js", "jsx", "mjs", "cjs", "ts", "tsx", "rs", "go", "java", "kt", "kts",
        "scala", "rb", "php", "c", "h", "cc", "cpp", "cxx", "hpp", "hh", "cs", "swift",
        "m", "mm", "sh", "bash", "zsh", "ps1", "sql", "lua", "pl", "pm", "r", "dart",
        "ex", "exs", "erl", "hs", "clj", "vue", "svelte", "elm", "fs", "ml",
    ]
    .into_iter()
    .collect();
}

/// Substrings of a file name that mark it as a test.
const TEST_NAME_MARKERS: &[&str] = &["test_", "_test", ".test.", ".spec.", "_spec"];

/// Path substrings that mark a configuration file regardless of extension.
const CONFIG_PATH_MARKERS: &[&str] = &["config", "settings"];

/// Areas of a codebase where changes deserve extra scrutiny.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SensitiveArea {
    Auth,
    Payments,
    Database,
    Api,
    Config,
}

impl SensitiveArea {
    pub fn as_str(&self) -> &'static str {
        match self {
            SensitiveArea::Auth => "auth",
            SensitiveArea::Payments => "payments",
            SensitiveArea::Database => "database",
            SensitiveArea::Api => "api",
            SensitiveArea::Config => "config",
        }
    }

    /// All areas, in table order.
    pub fn all() -> &'static [SensitiveArea] {
        &[
            SensitiveArea::Auth,
            SensitiveArea::Payments,
            SensitiveArea::Database,
            SensitiveArea::Api,
            SensitiveArea::Config,
        ]
    }

    /// Lowercase keywords matched as path substrings.
    pub fn keywords(&self) -> &'static [&'static str] {
        match self {
            SensitiveArea::Auth => &[
                "auth",
                "login",
                "logout",
                "password",
                "session",
                "token",
                "oauth",
                "jwt",
                "permission",
                "credential",
                "signin",
                "signup",
            ],
            SensitiveArea::Payments => &[
                "payment",
                "billing",
                "invoice",
                "stripe",
                "paypal",
                "checkout",
                "subscription",
                "refund",
            ],
            SensitiveArea::Database => &[
                "db",
                "database",
                "models",
                "migrations",
                "repository",
                "queries",
                "dao",
                "prisma",
                "sequelize",
                "alembic",
                "typeorm",
                "knex",
                "sqlalchemy",
            ],
            SensitiveArea::Api => &[
                "api",
                "endpoint",
                "routes",
                "controller",
                "handler",
                "graphql",
                "grpc",
                "openapi",
                "swagger",
            ],
            SensitiveArea::Config => &["config", "settings", ".env", "secrets", "environment"],
        }
    }

    /// Whether `path` touches this area (case-insensitive).
    pub fn matches(&self, path: &str) -> bool {
        let lower = path.to_lowercase();
        self.keywords().iter().any(|k| lower.contains(k))
    }
}

impl fmt::Display for SensitiveArea {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Every sensitive area `path` matches, in table order.
pub fn sensitive_areas(path: &str) -> Vec<SensitiveArea> {
    SensitiveArea::all()
        .iter()
        .copied()
        .filter(|area| area.matches(path))
        .collect()
}

/// Content kind of a file. Assignment is priority-ordered; see [`classify`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentKind {
    Test,
    Doc,
    Dependency,
    Config,
    Code,
    Other,
}

/// Classify a path. First match wins: test, doc, dependency, config, code.
pub fn classify(path: &str) -> ContentKind {
    if is_test_file(path) {
        ContentKind::Test
    } else if is_doc_file(path) {
        ContentKind::Doc
    } else if is_dependency_file(path) {
        ContentKind::Dependency
    } else if is_config_file(path) {
        ContentKind::Config
    } else if is_code_file(path) {
        ContentKind::Code
    } else {
        ContentKind::Other
    }
}

fn file_name(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}

/// A segment equals a test directory name, or the file name carries a
/// test marker.
pub fn is_test_file(path: &str) -> bool {
    let lower = path.to_lowercase();
    if lower.split('/').any(|segment| TEST_DIRS.contains(segment)) {
        return true;
    }
    let name = file_name(&lower);
    TEST_NAME_MARKERS.iter().any(|m| name.contains(m))
}

pub fn is_doc_file(path: &str) -> bool {
    DOC_EXTENSIONS.contains(extension_of(path).as_str())
}

/// Exact, case-sensitive file-name match against known manifests.
pub fn is_dependency_file(path: &str) -> bool {
    DEPENDENCY_FILES.contains(file_name(path))
}

pub fn is_config_file(path: &str) -> bool {
    if CONFIG_EXTENSIONS.contains(extension_of(path).as_str()) {
        return true;
    }
    let lower = path.to_lowercase();
    CONFIG_PATH_MARKERS.iter().any(|m| lower.contains(m))
}

pub fn is_code_file(path: &str) -> bool {
    CODE_EXTENSIONS.contains(extension_of(path).as_str())
}
