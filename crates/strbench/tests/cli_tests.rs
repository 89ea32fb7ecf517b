#[cfg(test)]
pub mod tests {
    use std::process::Command;

    // Parses the `{:.2?}` Duration rendering, e.g. "1.23s", "456.78ms",
    // "12.34µs", "125.00ns".
    fn duration_secs(text: &str) -> f64 {
        let unit_start = text
            .find(|c: char| c.is_alphabetic())
            .unwrap_or_else(|| panic!("No duration unit in: {text}"));
        let (value, unit) = text.split_at(unit_start);
        let value: f64 = value
            .parse()
            .unwrap_or_else(|_| panic!("Invalid duration value in: {text}"));

        match unit {
            "ns" => value / 1e9,
            "µs" | "us" => value / 1e6,
            "ms" => value / 1e3,
            "s" => value,
            other => panic!("Unexpected duration unit: {other}"),
        }
    }

    #[test]
    fn test_benchmark_output() {
        let output = Command::new(env!("CARGO_BIN_EXE_strbench"))
            .env("NO_COLOR", "1")
            .output()
            .expect("Failed to execute command");

        assert!(
            output.status.success(),
            "Process did not exit successfully: {output:?}",
        );

        let stdout = String::from_utf8_lossy(&output.stdout);
        let lines: Vec<&str> = stdout.lines().collect();
        assert_eq!(
            lines.len(),
            2,
            "Expected exactly two output lines.\nGot:\n{stdout}",
        );

        let expected = [
            "Time taken for String Concat: ",
            "Time taken for String Builder: ",
        ];

        for (line, prefix) in lines.iter().zip(expected) {
            let rest = line.strip_prefix(prefix).unwrap_or_else(|| {
                panic!("Output did not match expected.\nExpected prefix:\n{prefix}\n\nGot:\n{line}")
            });
            assert!(
                duration_secs(rest) >= 0.0,
                "Expected a non-negative duration, got: {rest}",
            );
        }
    }
}
