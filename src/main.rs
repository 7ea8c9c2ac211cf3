mod config;

use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use weft_config::WorkflowGraph;
use weft_generator::{GeneratorClient, GeneratorConfig};
use weft_nodes::{ExecutorRegistry, Inputs, LogSink, extended_registry};
use weft_runtime::Runtime;

use crate::config::Config;

/// Weft - run node graphs from the visual editor
#[derive(Parser)]
#[command(name = "weft")]
#[command(version, about, long_about = None)]
struct Cli {
  /// Path to the config file (default: ~/.weft/config.toml)
  #[arg(long, global = true, env = "WEFT_CONFIG")]
  config: Option<PathBuf>,

  /// Also register the optional kinds (squareRootNode, wordCountNode)
  #[arg(long, global = true)]
  extended: bool,

  /// Do not print progress lines to stderr
  #[arg(long, short, global = true)]
  quiet: bool,

  #[command(subcommand)]
  command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
  /// Run every node of a graph file and print the run result as JSON
  Run {
    /// Path to the graph file (the editor's JSON)
    graph_file: PathBuf,
  },

  /// Run a single node with inputs given on the command line or stdin
  Node {
    /// Path to the graph file (the editor's JSON)
    graph_file: PathBuf,

    /// The node ID to execute
    #[arg(long)]
    node: String,

    /// Inputs as a JSON object of slot -> value, e.g. '{"inputA": 1}'
    #[arg(long)]
    inputs: Option<String>,
  },

  /// List the node kinds this build can execute
  Kinds,

  /// Ask the graph generator for a graph matching a description
  Generate {
    /// What the graph should do
    prompt: String,

    /// Generator endpoint URL
    #[arg(long, env = "WEFT_GENERATOR_ENDPOINT")]
    endpoint: Option<String>,

    /// Request timeout in seconds
    #[arg(long)]
    timeout_secs: Option<u64>,

    /// Write the accepted graph here instead of stdout
    #[arg(long, short)]
    output: Option<PathBuf>,

    /// Run the accepted graph immediately
    #[arg(long)]
    run: bool,
  },
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("weft=info,warn")),
    )
    .with_target(false)
    .with_writer(io::stderr)
    .init();

  let cli = Cli::parse();
  let registry = Arc::new(if cli.extended {
    extended_registry()
  } else {
    ExecutorRegistry::new()
  });
  let runtime = runtime_for(registry.clone(), cli.quiet);

  match cli.command {
    Some(Commands::Run { graph_file }) => run_graph(&runtime, &graph_file).await,
    Some(Commands::Node {
      graph_file,
      node,
      inputs,
    }) => run_node(&runtime, &graph_file, &node, inputs).await,
    Some(Commands::Kinds) => {
      for kind in registry.kinds() {
        println!("{}", kind);
      }
      Ok(ExitCode::SUCCESS)
    }
    Some(Commands::Generate {
      prompt,
      endpoint,
      timeout_secs,
      output,
      run,
    }) => {
      let config = Config::resolve(cli.config.as_deref())?;
      let endpoint = endpoint.unwrap_or(config.generator.endpoint);
      let timeout = Duration::from_secs(timeout_secs.unwrap_or(config.generator.timeout_secs));
      info!(endpoint = %endpoint, timeout_secs = timeout.as_secs(), "generator_configured");
      let graph = generate(&registry, &endpoint, timeout, &prompt).await?;

      let json = serde_json::to_string_pretty(&graph)?;
      match &output {
        Some(path) => {
          tokio::fs::write(path, &json)
            .await
            .with_context(|| format!("failed to write graph file: {}", path.display()))?;
          eprintln!("Wrote graph to {}", path.display());
        }
        None if !run => println!("{}", json),
        None => {}
      }

      if run {
        report(runtime.run(&graph).await.context("workflow run failed")?)
      } else {
        Ok(ExitCode::SUCCESS)
      }
    }
    None => {
      println!("weft - use --help to see available commands");
      Ok(ExitCode::SUCCESS)
    }
  }
}

fn runtime_for(registry: Arc<ExecutorRegistry>, quiet: bool) -> Runtime {
  let runtime = Runtime::new(registry);
  if quiet {
    return runtime;
  }
  let sink: Arc<dyn LogSink> = Arc::new(|line: &str| eprintln!("{}", line));
  runtime.with_sink(sink)
}

async fn read_graph(path: &Path) -> Result<WorkflowGraph> {
  let content = tokio::fs::read_to_string(path)
    .await
    .with_context(|| format!("failed to read graph file: {}", path.display()))?;
  WorkflowGraph::from_json(&content)
    .with_context(|| format!("failed to parse graph file: {}", path.display()))
}

async fn run_graph(runtime: &Runtime, graph_file: &Path) -> Result<ExitCode> {
  let graph = read_graph(graph_file).await?;
  let result = runtime.run(&graph).await.context("workflow run failed")?;
  report(result)
}

/// Print the run result and map partial failure to a non-zero exit code.
fn report(result: weft_runtime::RunResult) -> Result<ExitCode> {
  println!("{}", serde_json::to_string_pretty(&result)?);

  let failed = result.failed_nodes();
  if failed.is_empty() {
    Ok(ExitCode::SUCCESS)
  } else {
    eprintln!("{} node(s) failed: {}", failed.len(), failed.join(", "));
    Ok(ExitCode::from(2))
  }
}

async fn run_node(
  runtime: &Runtime,
  graph_file: &Path,
  node_id: &str,
  inputs: Option<String>,
) -> Result<ExitCode> {
  let graph = read_graph(graph_file).await?;
  let inputs = match inputs {
    Some(json) => parse_inputs(&json)?,
    None => read_inputs_from_stdin()?,
  };

  let result = runtime
    .run_node(&graph, node_id, inputs)
    .await
    .context("node execution failed")?;

  println!("{}", serde_json::to_string_pretty(&result)?);
  Ok(if result.is_success() {
    ExitCode::SUCCESS
  } else {
    ExitCode::from(2)
  })
}

fn parse_inputs(json: &str) -> Result<Inputs> {
  serde_json::from_str(json).context("inputs must be a JSON object of slot -> value")
}

fn read_inputs_from_stdin() -> Result<Inputs> {
  use std::io::IsTerminal;

  if io::stdin().is_terminal() {
    return Ok(Inputs::new());
  }

  let mut input = String::new();
  io::stdin()
    .read_to_string(&mut input)
    .context("failed to read inputs from stdin")?;

  if input.trim().is_empty() {
    Ok(Inputs::new())
  } else {
    parse_inputs(&input)
  }
}

async fn generate(
  registry: &ExecutorRegistry,
  endpoint: &str,
  timeout: Duration,
  prompt: &str,
) -> Result<WorkflowGraph> {
  if prompt.trim().is_empty() {
    bail!("prompt is required");
  }

  let config = GeneratorConfig::new(endpoint)?.with_timeout(timeout);
  let client = GeneratorClient::new(config).context("failed to create generator client")?;

  eprintln!("Requesting graph from {}", client.endpoint());
  let proposal = client
    .generate(prompt)
    .await
    .context("graph generation failed")?;
  eprintln!("Proposal: {}", proposal.metadata.description);

  proposal
    .into_graph(&registry.kinds())
    .context("generated graph was rejected")
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde_json::json;

  #[test]
  fn test_parse_inputs() {
    let inputs = parse_inputs(r#"{"inputA": 1, "inputB": "two"}"#).unwrap();
    assert_eq!(inputs["inputA"], json!(1));
    assert_eq!(inputs["inputB"], json!("two"));

    assert!(parse_inputs("[1, 2]").is_err());
  }

  #[test]
  fn test_cli_parses_generate_flags() {
    let cli = Cli::try_parse_from([
      "weft",
      "--extended",
      "generate",
      "add two numbers",
      "--endpoint",
      "http://localhost:9000/gen",
      "--run",
    ])
    .unwrap();

    assert!(cli.extended);
    match cli.command {
      Some(Commands::Generate {
        prompt,
        endpoint,
        run,
        output,
        ..
      }) => {
        assert_eq!(prompt, "add two numbers");
        assert_eq!(endpoint.as_deref(), Some("http://localhost:9000/gen"));
        assert!(run);
        assert!(output.is_none());
      }
      _ => panic!("expected generate command"),
    }
  }

  #[tokio::test]
  async fn test_run_graph_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("graph.json");
    let graph = json!({
      "nodes": [
        { "id": "a", "type": "inputNode", "data": { "value": "hello" }, "position": { "x": 0, "y": 0 } },
        { "id": "t", "type": "textNode", "data": { "operation": "uppercase" }, "position": { "x": 200, "y": 0 } }
      ],
      "edges": [{ "id": "e1", "source": "a", "target": "t" }]
    });
    std::fs::write(&path, graph.to_string()).unwrap();

    let runtime = runtime_for(Arc::new(ExecutorRegistry::new()), true);
    let loaded = read_graph(&path).await.unwrap();
    let result = runtime.run(&loaded).await.unwrap();
    assert_eq!(result.output("t"), Some(&json!("HELLO")));

    assert!(run_graph(&runtime, &path).await.is_ok());
  }

  #[tokio::test]
  async fn test_missing_graph_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = read_graph(&dir.path().join("absent.json")).await.unwrap_err();
    assert!(err.to_string().contains("failed to read graph file"));
  }
}
