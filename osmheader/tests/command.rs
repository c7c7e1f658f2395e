use assert_cmd::{Command, cargo};
use predicates::str::contains;

fn osmheader_cmd() -> Command {
	Command::new(cargo::cargo_bin!("osmheader"))
}

#[test]
fn help_lists_subcommands() {
	osmheader_cmd()
		.arg("--help")
		.assert()
		.success()
		.stdout(contains("describe"))
		.stdout(contains("join"));
}

#[test]
fn describe_prints_header() {
	osmheader_cmd()
		.args([
			"describe",
			"--bbox",
			"0,0,1,1",
			"--bbox",
			"2,2,3,3",
			"--option",
			"generator=toolX",
			"--multiple-versions",
		])
		.assert()
		.success()
		.stdout(
			"boxes: 2\n  box: (0,0,1,1)\n  box: (2,2,3,3)\njoined box: (0,0,3,3)\nmultiple object versions: yes\noptions:\n  generator=toolX\n",
		);
}

#[test]
fn describe_without_boxes() {
	osmheader_cmd()
		.args(["describe", "-o", "generator=toolX"])
		.assert()
		.success()
		.stdout(contains("boxes: 0"))
		.stdout(contains("joined box: (invalid)"))
		.stdout(contains("multiple object versions: no"));
}

#[test]
fn describe_rejects_malformed_bbox() {
	osmheader_cmd()
		.args(["describe", "--bbox", "1,2,3"])
		.assert()
		.failure()
		.stderr(contains("while reading --bbox"));
}

#[test]
fn join_prints_joined_box() {
	osmheader_cmd()
		.args(["join", "-10,-5,0,0", "0,0,10,5"])
		.assert()
		.success()
		.stdout("(-10,-5,10,5)\n");
}

#[test]
fn join_skips_invalid_boxes() {
	osmheader_cmd()
		.args(["join", "0,0,1,100", "5,5,6,6"])
		.assert()
		.success()
		.stdout("(5,5,6,6)\n");
}
