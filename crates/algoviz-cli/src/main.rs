//! Algorithm visualizer CLI.
//!
//! Provides the `algoviz` binary:
//!
//! - `list` prints the algorithm catalog.
//! - `trace` generates a trace and prints it as JSON.
//! - `play` generates a trace and animates it on the terminal through the
//!   tokio playback driver, one step line per position change.
//!
//! Uses the same `algoviz_core::generate()` dispatch as the HTTP server, so a
//! trace printed here has the same fingerprint the server would report.

use std::fs;
use std::process;

use clap::{Args, Parser, Subcommand};

use algoviz_core::input::{parse_array, random_array};
use algoviz_core::{generate, Algorithm, GeneratedTrace, Graph, TraceRequest, TraceStep, VertexId};
use algoviz_player::{driver, PlayerConfig, PlayerError, Player, TokioClock};

/// Step-by-step traces of classic algorithms.
#[derive(Parser)]
#[command(name = "algoviz", about = "Step-by-step traces of classic algorithms")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands.
#[derive(Subcommand)]
enum Commands {
    /// List the supported algorithms.
    List,

    /// Generate a trace and print it as JSON.
    Trace {
        #[command(flatten)]
        input: InputArgs,

        /// Pretty-print the JSON output.
        #[arg(long)]
        pretty: bool,
    },

    /// Generate a trace and play it back on the terminal.
    Play {
        #[command(flatten)]
        input: InputArgs,

        /// Playback speed multiplier (clamped to 0.1..=10).
        #[arg(short, long, default_value_t = 1.0)]
        speed: f64,
    },
}

/// Input shared by `trace` and `play`.
#[derive(Args)]
struct InputArgs {
    /// Algorithm name, e.g. bubble-sort, binary-search, dijkstra.
    algorithm: String,

    /// Comma- or space-separated integers, e.g. "5,3,8,1".
    #[arg(short, long, conflicts_with = "random")]
    input: Option<String>,

    /// Generate a random array of this length instead.
    #[arg(short, long)]
    random: Option<usize>,

    /// Seed for --random.
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Search target.
    #[arg(short, long)]
    target: Option<i64>,

    /// Graph as inline JSON adjacency, or a path to a JSON file.
    #[arg(short, long)]
    graph: Option<String>,

    /// Start vertex for graph algorithms.
    #[arg(long)]
    start: Option<String>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let exit_code = match cli.command {
        Commands::List => run_list(),
        Commands::Trace { input, pretty } => run_trace(&input, pretty),
        Commands::Play { input, speed } => run_play(&input, speed),
    };
    process::exit(exit_code);
}

/// Execute the list subcommand.
fn run_list() -> i32 {
    for algorithm in Algorithm::all() {
        println!("{:<16} {}", algorithm.name(), algorithm.family());
    }
    0
}

/// Execute the trace subcommand.
///
/// Returns exit code: 0 = success, 1 = invalid input, 3 = I/O error.
fn run_trace(input: &InputArgs, pretty: bool) -> i32 {
    let (algorithm, trace) = match build_trace(input) {
        Ok(built) => built,
        Err(code) => return code,
    };

    let output = serde_json::json!({
        "algorithm": algorithm,
        "family": algorithm.family(),
        "fingerprint": trace.fingerprint(algorithm),
        "len": trace.len(),
        "steps": trace,
    });
    let rendered = if pretty {
        serde_json::to_string_pretty(&output)
    } else {
        serde_json::to_string(&output)
    };
    match rendered {
        Ok(text) => {
            println!("{}", text);
            0
        }
        Err(e) => {
            eprintln!("Error: failed to encode trace: {}", e);
            3
        }
    }
}

/// Execute the play subcommand.
///
/// Returns exit code: 0 = success, 1 = invalid input or empty trace,
/// 3 = I/O error.
fn run_play(input: &InputArgs, speed: f64) -> i32 {
    let (algorithm, trace) = match build_trace(input) {
        Ok(built) => built,
        Err(code) => return code,
    };

    let runtime = match tokio::runtime::Runtime::new() {
        Ok(rt) => rt,
        Err(e) => {
            eprintln!("Error: failed to start runtime: {}", e);
            return 3;
        }
    };

    tracing::info!(%algorithm, steps = trace.len(), speed, "starting playback");
    let result = runtime.block_on(async {
        match trace {
            GeneratedTrace::Sort(t) => play(t.into_steps(), speed).await,
            GeneratedTrace::Search(t) => play(t.into_steps(), speed).await,
            GeneratedTrace::Graph(t) => play(t.into_steps(), speed).await,
        }
    });

    match result {
        Ok(()) => 0,
        Err(PlayerError::EmptyTrace) => {
            eprintln!("Error: {} produced no steps for this input", algorithm);
            1
        }
        Err(e) => {
            eprintln!("Error: playback failed: {}", e);
            1
        }
    }
}

/// Plays `steps` to the end, printing each step as the player reaches it.
async fn play<S>(steps: Vec<S>, speed: f64) -> Result<(), PlayerError>
where
    S: TraceStep + Send + 'static,
{
    let player = Player::with_clock(
        steps.clone(),
        speed,
        PlayerConfig::default(),
        TokioClock::new(),
    )?;
    let len = player.len();
    let handle = driver::spawn(player);
    let mut updates = handle.subscribe();

    print_step(0, len, &steps[0]);
    let mut shown = 0;
    handle.play()?;

    while updates.changed().await.is_ok() {
        let snapshot = *updates.borrow_and_update();
        if snapshot.position != shown {
            shown = snapshot.position;
            print_step(shown, len, &steps[shown]);
        }
        if !snapshot.is_playing && snapshot.at_end() {
            break;
        }
    }

    handle.shutdown().await;
    Ok(())
}

fn print_step<S: TraceStep>(position: usize, len: usize, step: &S) {
    println!("[{:>4}/{}] {}", position + 1, len, step);
}

/// Resolves the algorithm and its input, then generates the trace.
///
/// Errors are reported on stderr; the `Err` value is the exit code.
fn build_trace(input: &InputArgs) -> Result<(Algorithm, GeneratedTrace), i32> {
    let algorithm: Algorithm = input.algorithm.parse().map_err(|e| {
        eprintln!("Error: {}", e);
        1
    })?;

    let array = match (&input.input, input.random) {
        (Some(text), _) => parse_array(text).map_err(|e| {
            eprintln!("Error: {}", e);
            1
        })?,
        (None, Some(len)) => random_array(len, input.seed),
        (None, None) => Vec::new(),
    };

    let graph = match &input.graph {
        Some(source) => Some(load_graph(source)?),
        None => None,
    };

    let request = TraceRequest {
        array,
        target: input.target,
        graph,
        start: input.start.as_deref().map(VertexId::from),
    };

    let trace = generate(algorithm, &request).map_err(|e| {
        eprintln!("Error: {}", e);
        1
    })?;
    Ok((algorithm, trace))
}

/// Reads a graph from inline JSON, or from a file when `source` does not look
/// like a JSON object.
fn load_graph(source: &str) -> Result<Graph, i32> {
    let text = if source.trim_start().starts_with('{') {
        source.to_string()
    } else {
        fs::read_to_string(source).map_err(|e| {
            eprintln!("Error: failed to read graph file '{}': {}", source, e);
            3
        })?
    };

    let value: serde_json::Value = serde_json::from_str(&text).map_err(|e| {
        eprintln!("Error: graph is not valid JSON: {}", e);
        1
    })?;
    Graph::from_json(&value).map_err(|e| {
        eprintln!("Error: {}", e);
        1
    })
}
