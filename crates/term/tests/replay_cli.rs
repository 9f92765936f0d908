//! Runs the `quill` binary end to end.

use std::process::Command;

use pretty_assertions::assert_eq;

fn quill() -> Command {
	let mut cmd = Command::new(env!("CARGO_BIN_EXE_quill"));
	cmd.env_remove("QUILL_LOG").env_remove("RUST_LOG");
	cmd
}

fn write_config(dir: &tempfile::TempDir, contents: &str) -> std::path::PathBuf {
	let path = dir.path().join("config.toml");
	std::fs::write(&path, contents).unwrap();
	path
}

#[test]
fn replays_keys_and_prints_document() {
	let dir = tempfile::tempdir().unwrap();
	let config = write_config(
		&dir,
		r#"
[[todos]]
id = "t1"
title = "Water plants"
list = "Home"
"#,
	);

	let output = quill()
		.arg("--config")
		.arg(&config)
		.args(["--text", "remember ", "--keys", "@ h o <ret> <ret>"])
		.output()
		.unwrap();
	assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));

	let stdout = String::from_utf8(output.stdout).unwrap();
	assert!(stdout.contains("submenu at"), "{stdout}");
	let document = stdout.rsplit("-- document\n").next().unwrap();
	assert_eq!(document.trim_end_matches('\n'), "remember [[Water plants|t1]] ");
}

#[test]
fn invalid_config_fails() {
	let dir = tempfile::tempdir().unwrap();
	let config = write_config(&dir, "[mention]\nmax-items = 0\n");

	let output = quill().arg("--config").arg(&config).output().unwrap();
	assert!(!output.status.success());
	let stderr = String::from_utf8_lossy(&output.stderr);
	assert!(stderr.contains("mention.max-items"), "{stderr}");
}

#[test]
fn invalid_key_script_fails() {
	let dir = tempfile::tempdir().unwrap();
	let config = write_config(&dir, "");

	let output = quill().arg("--config").arg(&config).args(["--keys", "<bogus>"]).output().unwrap();
	assert!(!output.status.success());
	assert!(String::from_utf8_lossy(&output.stderr).contains("invalid key script"));
}
