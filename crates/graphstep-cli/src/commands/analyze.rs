use std::path::Path;

use graphstep::graph::{ComponentSummary, GraphAnalysis};
use serde::Serialize;

use crate::{
    app::{GlobalOptions, LabelScheme},
    input::load_matrix,
    labels::label,
    output::{print_matrix, print_output, weight, TabWriter},
};

#[derive(Debug, Serialize)]
pub struct AnalysisReport {
    #[serde(flatten)]
    pub summary: ComponentSummary,
    pub component_colors: Vec<Vec<Option<usize>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub degree_totals: Option<Vec<Vec<f64>>>,
}

fn vertex_set(scheme: LabelScheme, vertices: &[usize]) -> String {
    let names: Vec<String> = vertices.iter().map(|&v| label(scheme, v)).collect();
    format!("{{{}}}", names.join(", "))
}

fn print_totals(scheme: LabelScheme, totals: &[Vec<f64>]) {
    let order = totals.len().saturating_sub(1);
    let mut table = TabWriter::matrix(scheme, order, &["sum"]);
    for (i, row) in totals.iter().enumerate() {
        let name = if i < order { label(scheme, i) } else { "sum".to_string() };
        table.labelled_row(name, row.iter().map(|&w| weight(w)));
    }
    table.print();
}

pub fn run(path: &Path, totals: bool, opts: &GlobalOptions) -> anyhow::Result<()> {
    let matrix = load_matrix(path)?;
    let scheme = opts.labels;
    let analysis = GraphAnalysis::new(&matrix);
    let summary = analysis.summary();

    let report = AnalysisReport {
        component_colors: analysis.component_colors(&summary.components),
        degree_totals: totals.then(|| analysis.degree_totals()),
        summary,
    };

    print_output(&report, opts, |r| {
        match &r.degree_totals {
            Some(table) => print_totals(scheme, table),
            None => print_matrix(scheme, analysis.matrix()),
        }
        println!();

        let s = &r.summary;
        println!("Order:            {}", s.order);
        println!("Size:             {}", weight(s.size));
        println!(
            "Degree sequence:  {}",
            s.degree_sequence
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(", ")
        );
        println!("Isolated:         {}", vertex_set(scheme, &s.isolated_vertices));
        println!("Components:       {}", s.components.len());
        for component in &s.components {
            println!("  {}", vertex_set(scheme, component));
        }
        println!();
        println!("Complement size:  {}", weight(s.complement_size));
        println!("Complement components: {}", s.complement_components.len());
        for component in &s.complement_components {
            println!("  {}", vertex_set(scheme, component));
        }
    })
}
