use graphstep::knapsack::{AlternativeExclusion, KnapsackResult, KnapsackSolver, Selection};
use log::info;

use crate::{
    app::GlobalOptions,
    input::{load_items, PairOrder},
    output::{print_output, Align, TabWriter},
};

pub struct KnapsackOptions {
    pub capacity: usize,
    pub value_first: bool,
    pub alternatives: usize,
    pub exact: bool,
    pub max_items: usize,
}

fn print_selection(title: &str, selection: &Selection) {
    println!(
        "{title}: {{{}}}  weight {}  value {}",
        selection.names(),
        selection.total_weight,
        selection.total_value
    );
}

pub fn run(items_arg: &str, options: &KnapsackOptions, opts: &GlobalOptions) -> anyhow::Result<()> {
    let order = if options.value_first {
        PairOrder::ValueWeight
    } else {
        PairOrder::WeightValue
    };
    let items = load_items(items_arg, order)?;
    info!("Loaded {} items", items.len());

    let exclusion = if options.exact {
        AlternativeExclusion::ExactSet
    } else {
        AlternativeExclusion::FirstItem
    };
    let solver = KnapsackSolver::new()
        .with_max_items(options.max_items)
        .with_max_alternatives(options.alternatives)
        .with_exclusion(exclusion);
    let result: KnapsackResult = solver.solve(options.capacity, &items)?;

    print_output(&result, opts, |r| {
        let mut table = TabWriter::new(vec![
            ("item", Align::Left),
            ("weight", Align::Right),
            ("value", Align::Right),
        ]);
        for item in &items {
            table.row(vec![
                item.name.clone(),
                item.weight.to_string(),
                item.value.to_string(),
            ]);
        }
        println!("Capacity {}", options.capacity);
        table.print();
        println!();

        print_selection("Optimal", &r.optimal);
        for (i, alt) in r.alternatives.iter().enumerate() {
            print_selection(&format!("Alternative {}", i + 1), alt);
        }
    })
}
