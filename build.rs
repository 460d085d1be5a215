//! Embeds the commit hash and build date for `sweep --version`.

use std::env;
use std::fs;
use std::path::Path;
use std::process::Command;

fn commit_hash() -> String {
    // CI sets BUILD_COMMIT; local builds ask git directly
    if let Ok(commit) = env::var("BUILD_COMMIT") {
        return commit;
    }
    Command::new("git")
        .args(["rev-parse", "--short=7", "HEAD"])
        .output()
        .ok()
        .filter(|output| output.status.success())
        .and_then(|output| String::from_utf8(output.stdout).ok())
        .map(|hash| hash.trim().to_string())
        .filter(|hash| !hash.is_empty())
        .unwrap_or_else(|| "unknown".to_string())
}

fn build_date() -> String {
    env::var("BUILD_DATE").unwrap_or_else(|_| chrono::Utc::now().format("%Y-%m-%d").to_string())
}

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();
    let dest = Path::new(&out_dir).join("build_info.rs");

    let contents = format!(
        "pub const BUILD_COMMIT: &str = \"{}\";\npub const BUILD_DATE: &str = \"{}\";\n",
        commit_hash(),
        build_date()
    );
    fs::write(&dest, contents).unwrap();

    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-env-changed=BUILD_COMMIT");
    println!("cargo:rerun-if-env-changed=BUILD_DATE");
}
