//! Little helpers for developers that try to understand what the forest
//! computation is doing.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

#[derive(PartialEq, Eq, Copy, Clone, Debug, Default)]
/// Stages of the computation that can be debugged separately.
#[non_exhaustive]
pub enum Stage {
    #[default]
    No,
    All,
    /// The validated input table.
    Input,
    /// The adjacency index built from the input.
    Adjacency,
    /// The raw traversal occurrences of every output slot.
    Occurrences,
    /// The final forest.
    Forest,
}

#[derive(PartialEq, Eq, Copy, Clone, Debug, Default)]
/// Controls generation of log messages.
#[non_exhaustive]
pub enum Verbosity {
    Quiet,
    #[default]
    Normal,
    Verbose,
}

#[derive(PartialEq, Eq, Copy, Clone, Debug, Default)]
/// Selects whether the computation is aborted after reaching the point of
/// interest.
#[non_exhaustive]
pub enum TerminationPolicy {
    #[default]
    KeepRunning,
    EarlyExit,
}

#[derive(PartialEq, Eq, Clone, Default, Debug)]
/// Configuration of the debugging behavior.
pub struct Settings {
    stage: Stage,
    verbose: Verbosity,
    terminate: TerminationPolicy,
    dump_path: Option<PathBuf>,
}

#[derive(PartialEq, Eq, Clone, Default, Debug)]
pub struct SettingsBuilder {
    inner: Settings,
}

impl SettingsBuilder {
    pub fn build(self) -> Settings {
        self.inner
    }

    pub fn set_stage(mut self, stage: Stage) -> Self {
        self.inner.stage = stage;

        self
    }

    pub fn set_verbosity(mut self, verbosity: Verbosity) -> Self {
        self.inner.verbose = verbosity;

        self
    }

    pub fn set_termination_policy(mut self, policy: TerminationPolicy) -> Self {
        self.inner.terminate = policy;

        self
    }

    /// Append debug output to a file instead of printing it to stdout.
    pub fn set_dump_path(mut self, path: PathBuf) -> Self {
        self.inner.dump_path = Some(path);

        self
    }
}

impl Settings {
    /// Returns true iff the `stage` is being debugged.
    pub fn should_debug(&self, stage: Stage) -> bool {
        debug_assert_ne!(stage, Stage::No);

        stage == self.stage || matches!(self.stage, Stage::All)
    }

    /// Displays the `obj`ect if the stage is being debugged.
    ///
    /// This is a possible cancellation point depending on the termination
    /// policy.
    pub fn print_compact_json<T: ToJsonCompact>(&self, obj: &T, stage: Stage) {
        if self.should_debug(stage) {
            self.emit(&format!("{:#}", obj.to_json_compact()));
            self.maybe_terminate();
        }
    }

    fn emit(&self, text: &str) {
        let Some(path) = &self.dump_path else {
            println!("{text}");
            return;
        };
        let written = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .and_then(|mut file| writeln!(file, "{text}"));
        if let Err(err) = written {
            eprintln!("Unable to write debug output to {}: {err}", path.display());
        }
    }

    /// Terminates the process according to the termination policy.
    fn maybe_terminate(&self) {
        match self.terminate {
            TerminationPolicy::EarlyExit => std::process::exit(0),
            TerminationPolicy::KeepRunning => (),
        }
    }

    /// Returns true if the logging level is at least verbose.
    pub fn verbose(&self) -> bool {
        matches!(self.verbose, Verbosity::Verbose)
    }
}

/// Central utility for debug printing.
///
/// Implement this trait for a type to make it printable via
/// [`Settings::print_compact_json`].
pub trait ToJsonCompact {
    /// Returns a json representation of values of type `self` that is
    /// suitable for debugging purposes.
    fn to_json_compact(&self) -> serde_json::Value;
}
