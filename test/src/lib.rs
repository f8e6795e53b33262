//! This crate contains acceptance tests for edge_forest.
//!
//! The tests run the installed `edge_forest` binary on the inputs in the
//! `samples/` directory and are ignored by default. Run them with
//! `cargo test -p acceptance_tests_ci -- --ignored` after installing the
//! binary.

use colored::*;
use std::process::Command;

/// What a test case expects from a run of `edge_forest`.
#[derive(Debug, PartialEq, Eq, Hash, Clone)]
pub enum Expectation {
    /// The run succeeds and stdout is exactly the given text.
    Output(&'static str),
    /// The run succeeds and stdout contains a line with the given text.
    OutputLine(&'static str),
    /// The run fails and stderr contains the given text.
    Failure(&'static str),
}

/// A test case containing the necessary information to run an acceptance test.
#[derive(Debug, PartialEq, Eq, Hash, Clone)]
pub struct ForestTestCase {
    /// The name of the input file in the samples directory.
    sample: &'static str,
    /// Additional command line arguments.
    args: Vec<String>,
    /// The expected result.
    expectation: Expectation,
}

mod helpers {
    pub fn cwd() -> String {
        std::env::current_dir()
            .unwrap()
            .into_os_string()
            .into_string()
            .unwrap()
    }
}

impl ForestTestCase {
    pub fn new(sample: &'static str, expectation: Expectation) -> Self {
        ForestTestCase {
            sample,
            args: Vec::new(),
            expectation,
        }
    }

    /// Appends a command line argument.
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Appends a command line argument that names a file in the samples
    /// directory.
    pub fn sample_arg(self, name: &str) -> Self {
        self.arg(sample_path(name))
    }

    /// Get the full path of the input file.
    fn get_filepath(&self) -> String {
        sample_path(self.sample)
    }

    /// Run the test case and print to the shell, whether the test case succeeded or not.
    /// Returns stdout + stderr of the test execution on failure.
    pub fn run_test(&self) -> Result<(), String> {
        let filepath = self.get_filepath();
        let output = Command::new("edge_forest")
            .arg(&filepath)
            .args(&self.args)
            .output()
            .map_err(|err| format!("Execution failed for file {filepath}: {err}"))?;
        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        let stderr = String::from_utf8_lossy(&output.stderr).into_owned();

        let result = match (&self.expectation, output.status.success()) {
            (Expectation::Output(expected), true) if stdout == *expected => Ok(()),
            (Expectation::OutputLine(expected), true)
                if stdout.lines().any(|line| line.contains(expected)) =>
            {
                Ok(())
            }
            (Expectation::Failure(expected), false) if stderr.contains(expected) => Ok(()),
            (expectation, success) => Err(format!(
                "Expected {expectation:?}, run succeeded: {success}\n{stdout}{stderr}"
            )),
        };

        match result {
            Ok(()) => println!("{} {:?} \t {}", filepath, self.args, "[OK]".green()),
            Err(_) => println!("{} {:?} \t {}", filepath, self.args, "[FAILED]".red()),
        }

        result
    }
}

/// Get the full path of a file in the samples directory.
pub fn sample_path(name: &str) -> String {
    format!("{}/samples/{}", helpers::cwd(), name)
}

/// Run all test cases and return the error messages of the failed ones.
pub fn run_all(test_cases: &[ForestTestCase]) -> Vec<(String, String)> {
    test_cases
        .iter()
        .filter_map(|test| {
            test.run_test()
                .err()
                .map(|error| (test.get_filepath(), error))
        })
        .collect()
}

/// Print the error messages of failed test cases.
/// The `error_log` tuples are of the form `(sample_filename, error_message)`.
pub fn print_errors(error_log: Vec<(String, String)>) {
    for (filepath, error) in error_log {
        println!("{}", format!("+++ Error for {filepath} +++").red());
        println!("{error}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(test_cases: Vec<ForestTestCase>) {
        let num_test_cases = test_cases.len();
        let error_log = run_all(&test_cases);
        if !error_log.is_empty() {
            print_errors(error_log.clone());
            panic!("{} of {} test cases failed", error_log.len(), num_test_cases);
        }
    }

    #[test]
    #[ignore]
    fn json_input() {
        check(vec![ForestTestCase::new(
            "path.json",
            Expectation::Output("# component 0: 3 edges\n0 1\n1 2\n2 3\n"),
        )
        .arg("--quiet")]);
    }

    #[test]
    #[ignore]
    fn text_input() {
        check(vec![
            ForestTestCase::new(
                "two_components.txt",
                Expectation::Output(
                    "# component 0: 1 edges\n0 1\n# component 1: 2 edges\n2 3\n3 4\n",
                ),
            )
            .arg("--quiet"),
            ForestTestCase::new(
                "two_components.txt",
                Expectation::Failure("out of range"),
            )
            .arg("--num-vertices")
            .arg("4"),
        ]);
    }

    #[test]
    #[ignore]
    fn swc_input() {
        check(vec![ForestTestCase::new(
            "neuron.swc",
            Expectation::Output(
                "# component 0: 3 edges\n0 1\n1 2\n0 3\n# component 1: 1 edges\n4 5\n",
            ),
        )
        .arg("--quiet")]);
    }

    #[test]
    #[ignore]
    fn self_loops() {
        check(vec![
            ForestTestCase::new(
                "self_loop.json",
                Expectation::Output("# component 0: 0 edges\n# component 1: 1 edges\n1 2\n"),
            )
            .arg("--quiet"),
            ForestTestCase::new(
                "self_loop.json",
                Expectation::Output("# component 0: 1 edges\n1 2\n"),
            )
            .arg("--quiet")
            .arg("--config")
            .sample_arg("skip_empty_config.json"),
        ]);
    }

    #[test]
    #[ignore]
    fn statistics() {
        check(vec![ForestTestCase::new(
            "path.json",
            Expectation::OutputLine("\"num_isolated_vertices\": 0"),
        )
        .arg("--json")
        .arg("--statistics")]);
    }

    #[test]
    #[ignore]
    fn invalid_input() {
        check(vec![
            ForestTestCase::new(
                "out_of_range.json",
                Expectation::Failure("vertex 2 in row 1 is out of range for 2 vertices"),
            ),
            ForestTestCase::new("neuron.swc", Expectation::Failure("cannot be overridden"))
                .arg("--num-vertices")
                .arg("10"),
        ]);
    }
}
