use std::process::{Command, Output};

fn demo(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_cmdarg-demo"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run cmdarg-demo")
}

#[test]
fn help_prints_banner_and_summaries() {
    for flag in ["-h", "--help"] {
        let output = demo(&[flag]);
        let stdout = String::from_utf8(output.stdout).unwrap();

        assert_eq!(output.status.code(), Some(1));
        assert!(output.stderr.is_empty());

        let mut lines = stdout.lines();
        assert_eq!(lines.next(), Some("cmdarg-demo 0.1.0 MPL-2.0 license"));
        assert_eq!(lines.next(), Some("Lays labels out along a diagonal."));
        assert_eq!(lines.next(), Some(""));
        assert_eq!(
            lines.next(),
            Some("[Optional] help (--help, -h): \tdisplays this help screen")
        );
        assert_eq!(
            lines.next(),
            Some("[Required] input (--input, -i): \tone or more labels to place on the grid")
        );
        assert!(stdout.contains("[Optional] no-color (--no-color, -C): \tdisable colored output\n"));
    }
}

#[test]
fn help_wins_over_missing_arguments() {
    let output = demo(&["-v", "-h", "-i", "a"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8(output.stdout).unwrap().contains("[Required] input"));
    assert!(output.stderr.is_empty());
}

#[test]
fn missing_input_is_reported() {
    let output = demo(&["-v"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert_eq!(
        String::from_utf8(output.stderr).unwrap(),
        "missing required arguments: --input (-i)\n"
    );
}

#[test]
fn labels_are_placed() {
    let output = demo(&["-i", "a", "b", "-o", "2", "3", "-s", "A", "-C", "-v"]);

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        "a at (2, 3)\nb at (12, 13)\n"
    );
}

#[test]
fn overflowing_layout_fails_cleanly() {
    let output = demo(&["-i", "a", "b", "c", "--step", "7FFFFFFFFFFFFFFF"]);
    let stderr = String::from_utf8(output.stderr).unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr.contains("label 2 lands outside of the grid"), "{stderr}");
}
