use assert_cmd::Command;

pub fn metainject_cmd() -> Command {
	let mut cmd = Command::new(env!("CARGO_BIN_EXE_metainject"));
	cmd.env("NO_COLOR", "1");
	cmd.env_remove("RUST_LOG");
	cmd
}
