//! CLI parsing tests for export-each command.

#[cfg(test)]
mod tests {
    use crate::cli::Args;
    use crate::test_utils::create_temp_json_file;
    use clap::Parser;
    use rstest::rstest;
    use std::path::PathBuf;

    crate::cli_required_arg_test! {
        command: "export-each",
        test_name: test_requires_input,
        required_arg: "--input",
    }

    crate::cli_required_arg_test! {
        command: "export-each",
        test_name: test_requires_dir,
        required_arg: "--dir",
    }

    crate::cli_option_test_with_required! {
        command: "export-each",
        variant: ExportEach,
        required_args: ["--input", "Cargo.toml"],
        test_name: test_with_dir,
        args: ["--dir", "out/recordings"],
        field: dir,
        expected: PathBuf::from("out/recordings"),
    }

    #[rstest]
    fn test_export_each_short_flags() {
        let capture = create_temp_json_file("{}");
        let input = capture.path().to_str().unwrap();
        let args = Args::try_parse_from(["recording_json", "export-each", "-i", input, "-d", "split"])
            .unwrap();
        match args.command {
            crate::commands::Command::ExportEach(cmd) => {
                assert_eq!(cmd.input, PathBuf::from(input));
                assert_eq!(cmd.dir, PathBuf::from("split"));
            }
            _ => panic!("Expected ExportEach command"),
        }
    }
}
