use std::path::Path;

use graphstep::graph::{spanning_tree, SpanningTreeResult};
use serde::Serialize;

use crate::{
    app::GlobalOptions,
    input::load_matrix,
    labels::label,
    output::{print_output, weight, Align, TabWriter},
};

#[derive(Debug, Serialize)]
pub struct KruskalReport {
    pub trace: Vec<String>,
    pub is_spanning: bool,
    pub has_alternative_tree: bool,
    #[serde(flatten)]
    pub result: SpanningTreeResult,
}

pub fn run(path: &Path, opts: &GlobalOptions) -> anyhow::Result<()> {
    let matrix = load_matrix(path)?;
    let scheme = opts.labels;
    let result = spanning_tree(&matrix);

    let report = KruskalReport {
        trace: result.trace_lines(|v| label(scheme, v)),
        is_spanning: result.is_spanning(),
        has_alternative_tree: result.has_alternative_tree(),
        result,
    };

    print_output(&report, opts, |r| {
        println!("Edges by weight");
        let mut table = TabWriter::new(vec![("edge", Align::Left), ("weight", Align::Right)]);
        for edge in &r.result.sorted_edges {
            table.row(vec![
                format!("({},{})", label(scheme, edge.u), label(scheme, edge.v)),
                weight(edge.weight),
            ]);
        }
        table.print();
        println!();

        for line in &r.trace {
            println!("  {line}");
        }
        println!();

        println!("Total cost: {}", weight(r.result.total_cost));
        if !r.is_spanning {
            println!("The graph is disconnected: this is a spanning forest.");
        }
        if r.result.has_multiple_mst {
            println!("Some edges share a weight; another minimum tree may exist.");
        }
        if r.has_alternative_tree {
            println!("Another minimum tree exists.");
        }
    })
}
