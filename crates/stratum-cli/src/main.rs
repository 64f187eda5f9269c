use serde::{Deserialize, Serialize};
use std::io::Read;
use stratum::{Alignment, Edge, LayoutOptions, Node};

#[derive(Debug)]
enum CliError {
    Usage(&'static str),
    Arg(stratum::Error),
    Io(std::io::Error),
    Layout(stratum::Error),
    Json(serde_json::Error),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Usage(msg) => write!(f, "{msg}"),
            CliError::Arg(err) => write!(f, "{err}\n\n{}", usage()),
            CliError::Io(err) => write!(f, "I/O error: {err}"),
            CliError::Layout(err) => write!(f, "{err}"),
            CliError::Json(err) => write!(f, "JSON error: {err}"),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<stratum::Error> for CliError {
    fn from(value: stratum::Error) -> Self {
        Self::Layout(value)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

#[derive(Debug, Clone, Copy, Default)]
enum Command {
    #[default]
    Layout,
    Levels,
}

#[derive(Debug, Default)]
struct Args {
    command: Command,
    pretty: bool,
    align: Option<Alignment>,
    input: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GraphInput {
    #[serde(default)]
    nodes: Vec<Node<String>>,
    #[serde(default)]
    edges: Vec<Edge<String>>,
    #[serde(default)]
    options: LayoutOptions,
}

fn usage() -> &'static str {
    "stratum-cli\n\
\n\
USAGE:\n\
  stratum-cli [layout] [--pretty] [--align ul|ur|dl|dr] [<path>|-]\n\
  stratum-cli levels [--pretty] [<path>|-]\n\
\n\
INPUT:\n\
  {\"nodes\": [{\"id\", \"level\"?, \"width\"?, \"height\"?}], \"edges\": [{\"from\", \"to\", \"arrows\"?}], \"options\"?: {...}}\n\
\n\
NOTES:\n\
  - If <path> is omitted or '-', input is read from stdin.\n\
  - layout prints the positioned nodes and edge segments as JSON.\n\
  - levels prints an object mapping each node id to its level.\n\
  - --align picks a single alignment instead of balancing all four.\n\
"
}

fn parse_args(argv: &[String]) -> Result<Args, CliError> {
    let mut args = Args::default();

    let mut it = argv.iter().skip(1);
    while let Some(a) = it.next() {
        match a.as_str() {
            "--help" | "-h" => return Err(CliError::Usage(usage())),
            "layout" => args.command = Command::Layout,
            "levels" => args.command = Command::Levels,
            "--pretty" => args.pretty = true,
            "--align" => {
                let Some(align) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.align = Some(align.parse::<Alignment>().map_err(CliError::Arg)?);
            }
            "--" => {
                if let Some(rest) = it.next() {
                    if args.input.is_some() {
                        return Err(CliError::Usage(usage()));
                    }
                    args.input = Some(rest.clone());
                }
                if it.next().is_some() {
                    return Err(CliError::Usage(usage()));
                }
            }
            "-" => {
                if args.input.is_some() {
                    return Err(CliError::Usage(usage()));
                }
                args.input = Some("-".to_string());
            }
            other if other.starts_with('-') => return Err(CliError::Usage(usage())),
            path => {
                if args.input.is_some() {
                    return Err(CliError::Usage(usage()));
                }
                args.input = Some(path.to_string());
            }
        }
    }

    Ok(args)
}

fn read_input(input: Option<&str>) -> Result<String, CliError> {
    match input {
        None | Some("-") => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
        Some(path) => Ok(std::fs::read_to_string(path)?),
    }
}

fn write_json(value: &impl Serialize, pretty: bool) -> Result<(), CliError> {
    if pretty {
        serde_json::to_writer_pretty(std::io::stdout().lock(), value)?;
    } else {
        serde_json::to_writer(std::io::stdout().lock(), value)?;
    }
    println!();
    Ok(())
}

fn run(args: Args) -> Result<(), CliError> {
    let text = read_input(args.input.as_deref())?;
    let mut graph: GraphInput = serde_json::from_str(&text)?;
    if args.align.is_some() {
        graph.options.align = args.align;
    }

    match args.command {
        Command::Layout => {
            let result = stratum::layout(&graph.nodes, &graph.edges, &graph.options)?;
            write_json(&result, args.pretty)
        }
        Command::Levels => {
            let levels = stratum::assign_levels_with_overrides(
                graph.nodes.iter().map(|n| (n.id.clone(), n.level)),
                graph.edges.iter().map(|e| (e.from.clone(), e.to.clone())),
            );
            write_json(&levels, args.pretty)
        }
    }
}

fn main() {
    let args = match parse_args(&std::env::args().collect::<Vec<_>>()) {
        Ok(v) => v,
        Err(err @ (CliError::Usage(_) | CliError::Arg(_))) => {
            eprintln!("{err}");
            std::process::exit(2);
        }
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    };

    if let Err(err) = run(args) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}
