use chrono::{DateTime, Local};
use std::{process::Command, time::SystemTime};

fn exe_cmd(cmd: &mut Command) -> anyhow::Result<String> {
    let output = cmd.output()?;

    Ok(if output.status.success() {
        String::from_utf8(output.stdout)?
    } else {
        String::default()
    })
}

fn main() {
    let git_commit_hash = exe_cmd(Command::new("git").args([
        "log",
        "-n",
        "1",
        "--pretty=format:%H",
    ]))
    .map(|s| s[..8.min(s.len())].trim().to_string())
    .unwrap_or_default();

    println!(
        "cargo:rustc-env=CIPHERLAB_VERSION_INFO={}-{}",
        env!("CARGO_PKG_VERSION"),
        DateTime::<Local>::from(SystemTime::now()).format("%Y/%m/%d-%H:%M:%S:%Z")
    );

    println!("cargo:rustc-env=CIPHERLAB_GIT_INFO={}", git_commit_hash);
}
