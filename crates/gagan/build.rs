// Build scripts signal errors by panicking -- there is no caller to
// return Result to.  Cargo treats a non-zero exit as a build failure.
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

//! Build script for the gagan binary crate.
//!
//! Runs `npx @tailwindcss/cli` to compile `crates/gagan/tailwind.css`
//! into `$OUT_DIR/assets/tailwind.css`, exposed to `main.rs` as
//! `TAILWIND_CSS_PATH`.  Every `cargo` invocation (clippy, test, etc.)
//! can then compile without `dx build` having run first.
//!
//! Outside release builds, if `npx` is missing or the Tailwind run
//! fails, an empty stylesheet is written and a cargo warning is emitted
//! so the Rust crates still build and test.  Release builds require a
//! working `npx`.

use std::path::{Path, PathBuf};
use std::process::Command;
use std::{env, fs};

fn main() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    let manifest_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR").unwrap());

    // Workspace root is two levels up from crates/gagan/.
    let workspace_root = manifest_dir
        .parent()
        .and_then(Path::parent)
        .expect("could not find workspace root");

    build_tailwind_css(&manifest_dir, workspace_root, &out_dir);
    println!(
        "cargo:rerun-if-changed={}",
        manifest_dir.join("theme.css").display()
    );
}

/// Compile Tailwind CSS via `npx @tailwindcss/cli`.
///
/// Input:  `crates/gagan/tailwind.css`
/// Output: `$OUT_DIR/assets/tailwind.css`
fn build_tailwind_css(manifest_dir: &Path, workspace_root: &Path, out_dir: &Path) {
    let input = manifest_dir.join("tailwind.css");
    let assets_dir = out_dir.join("assets");
    let output = assets_dir.join("tailwind.css");

    fs::create_dir_all(&assets_dir)
        .unwrap_or_else(|e| panic!("failed to create {}: {e}", assets_dir.display()));

    println!("cargo:rerun-if-changed={}", input.display());

    // Tailwind scans the UI crates for utility class names via
    // `@source` in the input CSS.  `gagan-staging` has none.
    let crates_dir = workspace_root.join("crates");
    register_rs_sources(&crates_dir.join("gagan"));
    register_rs_sources(&crates_dir.join("gagan-io"));

    let input_lossy = input.to_string_lossy();
    let output_lossy = output.to_string_lossy();
    let mut args: Vec<&str> = vec!["@tailwindcss/cli", "-i", &input_lossy, "-o", &output_lossy];

    let profile = env::var("PROFILE").unwrap_or_default();
    if profile == "release" {
        args.push("--minify");
    }

    let failure = match Command::new("npx").args(&args).status() {
        Ok(status) if status.success() => None,
        Ok(status) => Some(format!("`npx @tailwindcss/cli` exited with {status}")),
        Err(e) => Some(format!("failed to run `npx @tailwindcss/cli`: {e}")),
    };

    if let Some(reason) = failure {
        fallback_or_panic(&reason, &profile, &output);
    }

    println!("cargo:rustc-env=TAILWIND_CSS_PATH={}", output.display());
}

/// Only release builds insist on real Tailwind output.
fn tailwind_fallback_allowed(profile: &str) -> bool {
    profile != "release"
}

/// Handle a Tailwind build that did not produce a stylesheet.
///
/// Dev and test profiles get an empty stylesheet plus a cargo warning,
/// whether `npx` is missing or installed but failing (e.g. offline npm).
/// Release builds panic.
fn fallback_or_panic(reason: &str, profile: &str, output: &Path) {
    assert!(
        tailwind_fallback_allowed(profile),
        "{reason}\n\
         \n\
         Tailwind CSS is compiled from build.rs and requires Node.js / npm.\n\
         Install Node.js (https://nodejs.org/) and ensure `npx` is on PATH."
    );
    println!("cargo:warning=skipping Tailwind CSS ({reason}); styles will be missing");
    fs::write(output, "")
        .unwrap_or_else(|e| panic!("failed to write {}: {e}", output.display()));
}

/// Recursively emit `cargo:rerun-if-changed` for every `.rs` file
/// under `dir`.
fn register_rs_sources(dir: &Path) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };

    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            register_rs_sources(&path);
        } else if path.extension().is_some_and(|ext| ext == "rs") {
            println!("cargo:rerun-if-changed={}", path.display());
        }
    }
}
