use std::path::Path;
use std::process::Command;

/// Runs `git` with `args` and returns trimmed stdout when it succeeds.
fn git(args: &[&str]) -> Option<String> {
    let output = Command::new("git").args(args).output().ok()?;
    if !output.status.success() {
        return None;
    }
    let text = String::from_utf8_lossy(&output.stdout).trim().to_string();
    (!text.is_empty()).then_some(text)
}

fn main() {
    let hash = git(&["rev-parse", "--short", "HEAD"]).unwrap_or_else(|| "unknown".into());
    println!("cargo:rustc-env=SKETCHBOARD_GIT_HASH={hash}");

    // Rebuild when the checked-out commit moves. Worktrees and GIT_DIR are
    // handled by asking git where its files live.
    let Some(git_dir) = git(&["rev-parse", "--git-dir"]) else {
        return;
    };
    for name in ["HEAD", "refs", "packed-refs"] {
        let path = Path::new(&git_dir).join(name);
        if path.exists() {
            println!("cargo:rerun-if-changed={}", path.display());
        }
    }
}
