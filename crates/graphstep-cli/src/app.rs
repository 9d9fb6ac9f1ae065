use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// graphstep - step-by-step graph and knapsack algorithms for the classroom
#[derive(Debug, Parser)]
#[command(name = "graphstep", version, about, long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOptions,

    #[command(subcommand)]
    pub command: Command,
}

/// Options shared across all subcommands.
#[derive(Debug, Parser)]
pub struct GlobalOptions {
    /// Emit output as JSON instead of human-readable text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Enable verbose (debug-level) logging output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// How vertices are named on input and output.
    #[arg(long, global = true, value_enum, default_value_t = LabelScheme::Letters)]
    pub labels: LabelScheme,
}

/// Vertex naming scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LabelScheme {
    /// A, B, ..., Z, AA, AB, ...
    Letters,
    /// 1, 2, 3, ...
    Numbers,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Shortest path between two vertices (Dijkstra), with the pivot trace.
    Dijkstra {
        /// Adjacency matrix file (tab or comma separated; `-` for stdin).
        #[arg(value_name = "FILE")]
        matrix: PathBuf,

        /// Start vertex label.
        #[arg(short, long)]
        from: String,

        /// End vertex label.
        #[arg(short, long)]
        to: String,
    },

    /// All-pairs shortest paths (Floyd-Warshall), with per-pivot matrices.
    Floyd {
        /// Adjacency matrix file (tab or comma separated; `-` for stdin).
        #[arg(value_name = "FILE")]
        matrix: PathBuf,

        /// Also print the route between two vertices, e.g. `--route A,D`.
        #[arg(long, value_name = "FROM,TO", value_delimiter = ',')]
        route: Option<Vec<String>>,

        /// Print only the final matrices.
        #[arg(long)]
        final_only: bool,
    },

    /// Minimum spanning tree (Kruskal), with the accept/discard log.
    Kruskal {
        /// Adjacency matrix file (tab or comma separated; `-` for stdin).
        #[arg(value_name = "FILE")]
        matrix: PathBuf,
    },

    /// Order, size, degrees, components and complement of a graph.
    Analyze {
        /// Adjacency matrix file (tab or comma separated; `-` for stdin).
        #[arg(value_name = "FILE")]
        matrix: PathBuf,

        /// Append row and column sums to the matrix listing.
        #[arg(long)]
        totals: bool,
    },

    /// 0/1 knapsack: optimal filling plus ranked alternatives.
    Knapsack {
        /// Item list such as `A=(2,3), B=(3,4)`; `@FILE` reads it from a file.
        #[arg(value_name = "ITEMS")]
        items: String,

        /// Knapsack capacity.
        #[arg(short, long)]
        capacity: usize,

        /// Read each pair as (value,weight) instead of (weight,value).
        #[arg(long)]
        value_first: bool,

        /// Number of alternatives to list.
        #[arg(long, default_value = "3")]
        alternatives: usize,

        /// Only skip the exact optimal set when listing alternatives.
        #[arg(long)]
        exact: bool,

        /// Refuse inputs with more items than this.
        #[arg(long, default_value = "20")]
        max_items: usize,
    },

    /// Derive a new graph and print its matrix, order and size.
    Ops {
        /// Adjacency matrix file (tab or comma separated; `-` for stdin).
        #[arg(value_name = "FILE")]
        matrix: PathBuf,

        #[command(subcommand)]
        op: Operation,
    },
}

#[derive(Debug, Clone, Subcommand)]
pub enum Operation {
    /// Delete a vertex and its edges.
    RemoveVertex {
        /// Vertex label.
        vertex: String,
    },

    /// Merge the second vertex into the first.
    Contract {
        /// Vertex kept.
        keep: String,
        /// Vertex merged away.
        merge: String,
    },

    /// Disjoint union with the complete graph K_k.
    UnionComplete {
        /// Size of the complete graph.
        k: usize,
    },

    /// Cartesian product with the path graph P_t.
    ProductPath {
        /// Number of path vertices.
        t: usize,
    },
}
