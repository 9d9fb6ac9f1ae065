use std::path::Path;

use graphstep::graph::{shortest_path, ShortestPathResult};
use serde::Serialize;

use crate::{
    app::GlobalOptions,
    input::load_matrix,
    labels::{label, parse_vertex, route},
    output::{print_output, weight, Align, TabWriter},
};

#[derive(Debug, Serialize)]
pub struct DijkstraReport {
    pub from: String,
    pub to: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub route: Option<String>,
    #[serde(flatten)]
    pub result: ShortestPathResult,
}

pub fn run(path: &Path, from: &str, to: &str, opts: &GlobalOptions) -> anyhow::Result<()> {
    let matrix = load_matrix(path)?;
    let scheme = opts.labels;
    let start = parse_vertex(scheme, from, matrix.order())?;
    let end = parse_vertex(scheme, to, matrix.order())?;

    let result = shortest_path(&matrix, start, end)?;
    let report = DijkstraReport {
        from: label(scheme, start),
        to: label(scheme, end),
        route: result.min_path.as_deref().map(|p| route(scheme, p)),
        result,
    };

    print_output(&report, opts, |r| {
        println!("Dijkstra from {} to {}", r.from, r.to);
        println!();

        let order = r.result.distances.len();
        let labels: Vec<String> = (0..order).map(|i| label(scheme, i)).collect();
        let mut columns = vec![("step", Align::Right), ("pivot", Align::Left)];
        columns.extend(labels.iter().map(|l| (l.as_str(), Align::Right)));
        let mut table = TabWriter::new(columns);
        for (i, step) in r.result.steps.iter().enumerate() {
            let mut cells = vec![(i + 1).to_string(), label(scheme, step.pivot)];
            cells.extend(step.distances.iter().map(|&d| weight(d)));
            table.row(cells);
        }
        table.print();
        println!();

        match &r.route {
            Some(route) => {
                println!("Minimum cost: {}", weight(r.result.min_cost));
                println!("Path:         {route}");
            }
            None => println!("{} is not reachable from {}", r.to, r.from),
        }
    })
}
