use std::path::Path;

use graphstep::graph::{operations, AdjacencyMatrix};
use serde::Serialize;

use crate::{
    app::{GlobalOptions, Operation},
    input::load_matrix,
    labels::{label, parse_vertex},
    output::{print_output, weight, TabWriter},
};

#[derive(Debug, Serialize)]
pub struct OperationReport {
    pub operation: String,
    pub order: usize,
    pub size: f64,
    pub matrix: AdjacencyMatrix,
}

fn apply(
    matrix: &AdjacencyMatrix,
    op: &Operation,
    opts: &GlobalOptions,
) -> anyhow::Result<(String, AdjacencyMatrix)> {
    let scheme = opts.labels;
    let order = matrix.order();
    Ok(match op {
        Operation::RemoveVertex { vertex } => {
            let v = parse_vertex(scheme, vertex, order)?;
            (
                format!("G - {}", label(scheme, v)),
                operations::remove_vertex(matrix, v)?,
            )
        }
        Operation::Contract { keep, merge } => {
            let a = parse_vertex(scheme, keep, order)?;
            let b = parse_vertex(scheme, merge, order)?;
            (
                format!("G / ({},{})", label(scheme, a), label(scheme, b)),
                operations::contract_edge(matrix, a, b)?,
            )
        }
        Operation::UnionComplete { k } => (
            format!("G + K{k}"),
            operations::union_with_complete(matrix, *k),
        ),
        Operation::ProductPath { t } => (
            format!("G x P{t}"),
            operations::cartesian_product_with_path(matrix, *t),
        ),
    })
}

pub fn run(path: &Path, op: &Operation, opts: &GlobalOptions) -> anyhow::Result<()> {
    let matrix = load_matrix(path)?;
    let (name, derived) = apply(&matrix, op, opts)?;

    let report = OperationReport {
        operation: name,
        order: derived.order(),
        size: operations::graph_size(&derived),
        matrix: derived,
    };

    print_output(&report, opts, |r| {
        let scheme = opts.labels;
        println!("{}", r.operation);
        let mut table = TabWriter::matrix(scheme, r.order, &[]);
        for (i, row) in r.matrix.rows().iter().enumerate() {
            table.labelled_row(
                label(scheme, i),
                row.iter().map(|w| w.map_or_else(|| "-".to_string(), weight)),
            );
        }
        table.print();
        println!();
        println!("Order: {}", r.order);
        println!("Size:  {}", weight(r.size));
    })
}
