use std::path::PathBuf;
use std::process::Command;

/// Embed the short git revision so `cardvision --version` identifies the build.
fn main() {
    let workspace = std::env::var("CARGO_MANIFEST_DIR")
        .map(|d| PathBuf::from(d).join(".."))
        .unwrap_or_else(|_| PathBuf::from(".."));

    println!(
        "cargo:rerun-if-changed={}",
        workspace.join(".git").join("HEAD").display()
    );

    let revision = Command::new("git")
        .arg("-C")
        .arg(&workspace)
        .args(["rev-parse", "--short", "HEAD"])
        .output()
        .ok()
        .filter(|o| o.status.success())
        .map(|o| String::from_utf8_lossy(&o.stdout).trim().to_string())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| "unknown".to_string());

    println!("cargo:rustc-env=CARDVISION_BUILD_SHA={revision}");
}
