//! This crate defines the command line interface for edge_forest.
//! General documentation about the forest computation is contained in the
//! [`edge_forest_lib`] crate.

extern crate edge_forest_lib; // Needed for the docstring-link to work

mod forest_stats;

use anyhow::Context;
use anyhow::Error;
use clap::{Parser, ValueEnum};

use edge_forest_lib::config::Config;
use edge_forest_lib::graph::{extract_forest, Forest};
use edge_forest_lib::io::{read_edge_table, InputFormat};
use edge_forest_lib::utils::debug;
use edge_forest_lib::utils::log::{print_all_messages, LogLevel, LogMessage};

use forest_stats::ForestProperties;

use std::convert::From;
use std::fmt::Write as _;
use std::path::{Path, PathBuf};

#[derive(ValueEnum, Clone, Debug, Copy)]
/// Selects which kind of debug output is displayed.
pub enum CliDebugMode {
    /// All stages.
    All,
    /// The validated input table.
    Input,
    /// The adjacency sets of all vertices.
    Adjacency,
    /// The raw traversal occurrences of every component.
    Occurrences,
    /// The final forest.
    Forest,
}

impl From<&CliDebugMode> for debug::Stage {
    fn from(mode: &CliDebugMode) -> Self {
        match mode {
            CliDebugMode::All => debug::Stage::All,
            CliDebugMode::Input => debug::Stage::Input,
            CliDebugMode::Adjacency => debug::Stage::Adjacency,
            CliDebugMode::Occurrences => debug::Stage::Occurrences,
            CliDebugMode::Forest => debug::Stage::Forest,
        }
    }
}

#[derive(ValueEnum, Clone, Debug, Copy)]
/// The format of the input file.
pub enum CliInputFormat {
    /// A JSON object with an `edges` array and an optional `num_vertices`.
    Json,
    /// One whitespace separated pair of vertex ids per line.
    Text,
    /// An SWC skeleton.
    Swc,
}

impl From<CliInputFormat> for InputFormat {
    fn from(format: CliInputFormat) -> Self {
        match format {
            CliInputFormat::Json => InputFormat::Json,
            CliInputFormat::Text => InputFormat::Text,
            CliInputFormat::Swc => InputFormat::Swc,
        }
    }
}

#[derive(Debug, Parser)]
#[command(version, about)]
/// Split an undirected graph into the deduplicated edge sets of its connected components
struct CmdlineArgs {
    /// The path to the edge list.
    #[arg(value_parser = check_file_existence)]
    input: String,

    /// The format of the input file. Inferred from the file extension if not given.
    #[arg(long)]
    format: Option<CliInputFormat>,

    /// The number of vertices. Overrides the vertex count of JSON and text inputs.
    #[arg(long)]
    num_vertices: Option<u64>,

    /// Path to a custom configuration file to use instead of the standard one.
    #[arg(long, short, value_parser = check_file_existence)]
    config: Option<String>,

    /// Write the components to a file instead of stdout.
    /// Log messages are still printed to stderr.
    #[arg(long, short)]
    out: Option<String>,

    /// Generate JSON output.
    #[arg(long, short)]
    json: bool,

    /// Do not print log messages.
    #[arg(long, short)]
    quiet: bool,

    /// Print additional debug log messages.
    #[arg(long, short, conflicts_with("quiet"))]
    verbose: bool,

    /// Include statistics about the components in the output.
    #[arg(long, conflicts_with("quiet"))]
    statistics: bool,

    /// Output for debugging purposes.
    /// The current behavior of this flag is unstable and subject to change.
    #[arg(long, hide(true))]
    debug: Option<CliDebugMode>,

    /// Write the debug output to this file instead of stdout.
    #[arg(long, hide(true), requires("debug"))]
    debug_dump: Option<String>,
}

impl From<&CmdlineArgs> for debug::Settings {
    fn from(args: &CmdlineArgs) -> Self {
        let stage = match &args.debug {
            None => debug::Stage::default(),
            Some(mode) => mode.into(),
        };
        let verbosity = if args.verbose {
            debug::Verbosity::Verbose
        } else if args.quiet {
            debug::Verbosity::Quiet
        } else {
            debug::Verbosity::default()
        };

        let mut builder = debug::SettingsBuilder::default()
            .set_stage(stage)
            .set_verbosity(verbosity);
        // A dump collects all selected stages, so only stdout output exits early.
        builder = match &args.debug_dump {
            Some(path) => builder.set_dump_path(PathBuf::from(path)),
            None => builder.set_termination_policy(debug::TerminationPolicy::EarlyExit),
        };

        builder.build()
    }
}

fn main() -> Result<(), Error> {
    let cmdline_args = CmdlineArgs::parse();

    run(&cmdline_args)
}

/// Return `Ok(file_path)` only if `file_path` points to an existing file.
fn check_file_existence(file_path: &str) -> Result<String, String> {
    if std::fs::metadata(file_path)
        .map_err(|err| format!("{err}"))?
        .is_file()
    {
        Ok(file_path.to_string())
    } else {
        Err(format!("{file_path} is not a file."))
    }
}

/// Compute the forest of the input file and print it.
fn run(args: &CmdlineArgs) -> Result<(), Error> {
    let debug_settings: debug::Settings = args.into();
    if let Some(dump) = &args.debug_dump {
        std::fs::File::create(dump).context(format!("Could not create debug dump: {dump}"))?;
    }
    let config = Config::load(args.config.as_deref().map(Path::new))?;

    let table = read_edge_table(
        Path::new(&args.input),
        args.format.map(InputFormat::from),
        args.num_vertices,
    )?;
    let mut forest = extract_forest(&table, &debug_settings)
        .context("Computing the components failed")?;

    if config.forest.skip_empty_components {
        let num_skipped = forest.retain_nonempty();
        if num_skipped > 0 {
            forest.add_log(LogMessage::new_info(format!(
                "Skipped {num_skipped} components without edges."
            )));
        }
    }
    let mut logs = Vec::new();
    let forest = forest.move_logs_to(&mut logs).into_object();

    let statistics = if args.statistics || config.output.with_statistics {
        Some(ForestProperties::new(&table, &forest)?)
    } else {
        None
    };

    let output = if args.json {
        render_json(&forest, config.output.relabel, statistics.as_ref())?
    } else {
        if let Some(statistics) = &statistics {
            logs.push(
                LogMessage::new_info(serde_json::to_string(statistics)?).source("Statistics"),
            );
        }
        render_text(&forest, config.output.relabel)
    };

    if let Some(out) = &args.out {
        std::fs::write(out, output).context(format!("Could not write output file: {out}"))?;
    } else {
        print!("{output}");
    }

    // Print the log messages.
    let all_logs: Vec<&LogMessage> = if args.quiet {
        Vec::new() // Suppress all log messages since the `--quiet` flag is set.
    } else {
        let mut all_logs: Vec<&LogMessage> = logs.iter().collect();
        if !args.verbose {
            all_logs.retain(|log_msg| log_msg.level != LogLevel::Debug);
        }

        all_logs
    };
    print_all_messages(all_logs, args.json);

    Ok(())
}

/// Render every slot as a header line followed by one `lower upper` line per
/// edge.
fn render_text(forest: &Forest, relabel: bool) -> String {
    let mut output = String::new();
    for (slot, component) in forest.iter().enumerate() {
        let _ = writeln!(output, "# component {slot}: {} edges", component.len());
        if relabel {
            let relabeled = component.relabel();
            let vertices: Vec<String> = relabeled.vertices.iter().map(|v| v.to_string()).collect();
            let _ = writeln!(output, "# vertices: {}", vertices.join(" "));
            for [a, b] in relabeled.edges {
                let _ = writeln!(output, "{a} {b}");
            }
        } else {
            for edge in component.edges() {
                let _ = writeln!(output, "{edge}");
            }
        }
    }

    output
}

fn render_json(
    forest: &Forest,
    relabel: bool,
    statistics: Option<&ForestProperties>,
) -> Result<String, Error> {
    let components = if relabel {
        serde_json::to_value(
            forest
                .iter()
                .map(|component| component.relabel())
                .collect::<Vec<_>>(),
        )?
    } else {
        serde_json::to_value(forest)?
    };
    let value = match statistics {
        Some(statistics) => serde_json::json!({
            "components": components,
            "statistics": statistics,
        }),
        None => components,
    };

    Ok(format!("{value:#}\n"))
}
