use std::path::Path;

use anyhow::bail;
use graphstep::graph::{all_pairs_path, AllPairsResult, PathMatrix};
use serde::Serialize;

use crate::{
    app::{GlobalOptions, LabelScheme},
    input::load_matrix,
    labels::{label, parse_vertex, route},
    output::{print_matrix, print_output, weight, TabWriter},
};

#[derive(Debug, Serialize)]
pub struct RouteReport {
    pub from: String,
    pub to: String,
    pub distance: f64,
    pub path: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct FloydReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub route: Option<RouteReport>,
    pub diameter: Option<f64>,
    #[serde(flatten)]
    pub result: AllPairsResult,
}

fn print_path_matrix(scheme: LabelScheme, paths: &PathMatrix) {
    let mut table = TabWriter::matrix(scheme, paths.len(), &[]);
    for (i, row) in paths.iter().enumerate() {
        table.labelled_row(
            label(scheme, i),
            row.iter()
                .map(|hop| hop.map_or_else(|| "-".to_string(), |v| label(scheme, v))),
        );
    }
    table.print();
}

pub fn run(
    path: &Path,
    route_arg: Option<&[String]>,
    final_only: bool,
    opts: &GlobalOptions,
) -> anyhow::Result<()> {
    let matrix = load_matrix(path)?;
    let scheme = opts.labels;
    let result = all_pairs_path(&matrix);

    let route_report = match route_arg {
        Some([from, to]) => {
            let u = parse_vertex(scheme, from, matrix.order())?;
            let v = parse_vertex(scheme, to, matrix.order())?;
            Some(RouteReport {
                from: label(scheme, u),
                to: label(scheme, v),
                distance: result.distance(u, v)?,
                path: result.path(u, v)?.map(|p| route(scheme, &p)),
            })
        }
        Some(other) => bail!("--route takes exactly two vertices, got {}", other.len()),
        None => None,
    };

    let report = FloydReport {
        route: route_report,
        diameter: result.diameter(),
        result,
    };

    print_output(&report, opts, |r| {
        if !final_only {
            println!("Initial distances");
            print_matrix(scheme, &r.result.initial_distances);
            println!();
            for step in &r.result.steps {
                println!("Pivot {}", label(scheme, step.pivot));
                print_matrix(scheme, &step.distances);
                println!();
                print_path_matrix(scheme, &step.path_matrix);
                println!();
            }
        }

        println!("Final distances");
        print_matrix(scheme, &r.result.final_distances);
        println!();
        println!("Final next hops");
        print_path_matrix(scheme, r.result.final_path_matrix());
        println!();

        if let Some(d) = r.diameter {
            println!("Largest finite distance: {}", weight(d));
        }
        if let Some(route) = &r.route {
            match &route.path {
                Some(p) => println!(
                    "Route {} to {}: {p} (cost {})",
                    route.from,
                    route.to,
                    weight(route.distance)
                ),
                None => println!("{} is not reachable from {}", route.to, route.from),
            }
        }
    })
}
