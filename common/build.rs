// Injects BUILD_VERSION (crate version + short git hash) for config::VERSION.

use std::process::Command;

fn short_commit_hash() -> String {
    if let Ok(hash) = std::env::var("LEDGER_COMMIT_HASH") {
        return hash.chars().take(7).collect();
    }

    // Falls back to "unknown" outside of a git checkout
    match Command::new("git")
        .args(["rev-parse", "--short", "HEAD"])
        .output()
    {
        Ok(output) if output.status.success() => {
            String::from_utf8_lossy(&output.stdout).trim().to_string()
        }
        _ => "unknown".to_string(),
    }
}

fn main() {
    let build_version = format!("{}-{}", env!("CARGO_PKG_VERSION"), short_commit_hash());
    println!("cargo:rerun-if-env-changed=LEDGER_COMMIT_HASH");
    println!("cargo:rustc-env=BUILD_VERSION={build_version}");
}
