//! Build metadata for the footer and `/healthz`.
//!
//! - `KEAZ_VERSION`: release version, `CARGO_PKG_VERSION` unless overridden
//! - `KEAZ_GIT_SHA`: short commit SHA from `KEAZ_GIT_SHA`, `GITHUB_SHA` or git

use std::process::Command;

const SHORT_SHA_LEN: usize = 7;

fn main() {
    let version = std::env::var("KEAZ_VERSION")
        .or_else(|_| std::env::var("CARGO_PKG_VERSION"))
        .unwrap_or_else(|_| "unknown".into());
    println!("cargo:rustc-env=KEAZ_VERSION={version}");

    let git_sha = ["KEAZ_GIT_SHA", "GITHUB_SHA"]
        .into_iter()
        .find_map(|key| std::env::var(key).ok())
        .or_else(git_head)
        .map(|sha| short_sha(&sha))
        .unwrap_or_else(|| "unknown".into());
    println!("cargo:rustc-env=KEAZ_GIT_SHA={git_sha}");

    println!("cargo:rerun-if-env-changed=KEAZ_VERSION");
    println!("cargo:rerun-if-env-changed=KEAZ_GIT_SHA");
    println!("cargo:rerun-if-env-changed=GITHUB_SHA");
    // Checkouts and commits move HEAD
    println!("cargo:rerun-if-changed=.git/HEAD");
}

fn git_head() -> Option<String> {
    let output = Command::new("git").args(["rev-parse", "HEAD"]).output().ok()?;
    if !output.status.success() {
        return None;
    }
    String::from_utf8(output.stdout).ok()
}

fn short_sha(sha: &str) -> String {
    sha.trim().chars().take(SHORT_SHA_LEN).collect()
}
