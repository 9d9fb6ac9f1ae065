//! Reading matrices and item lists from text.

use std::io::Read;
use std::path::Path;

use anyhow::{bail, Context};
use graphstep::graph::{AdjacencyMatrix, RawWeight};
use graphstep::knapsack::Item;

/// Read a whole file, or stdin when the path is `-`.
pub fn read_source(path: &Path) -> anyhow::Result<String> {
    if path.as_os_str() == "-" {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("failed to read stdin")?;
        return Ok(text);
    }
    std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}

/// Load and parse a matrix file.
pub fn load_matrix(path: &Path) -> anyhow::Result<AdjacencyMatrix> {
    let text = read_source(path)?;
    parse_matrix(&text).with_context(|| format!("invalid matrix in {}", path.display()))
}

fn parse_cell(cell: &str) -> Option<RawWeight> {
    match cell.trim() {
        "" | "-" | "inf" | "∞" => Some(None),
        text => text.parse::<f64>().ok().map(Some),
    }
}

/// Parse a matrix: rows on newlines, cells on tabs or commas.
///
/// Empty cells, `-`, `inf` and `∞` are "no edge". Trailing blank lines are
/// ignored.
pub fn parse_matrix(text: &str) -> anyhow::Result<AdjacencyMatrix> {
    let mut lines: Vec<&str> = text.lines().collect();
    while lines.last().is_some_and(|line| line.trim().is_empty()) {
        lines.pop();
    }

    let mut rows = Vec::with_capacity(lines.len());
    for (line_no, line) in lines.iter().enumerate() {
        let mut row = Vec::new();
        for (col_no, cell) in line.split(['\t', ',']).enumerate() {
            let Some(weight) = parse_cell(cell) else {
                bail!(
                    "line {}, column {}: '{}' is not a number",
                    line_no + 1,
                    col_no + 1,
                    cell.trim()
                );
            };
            row.push(weight);
        }
        rows.push(row);
    }

    Ok(AdjacencyMatrix::new(rows)?)
}

/// Field order inside each `NAME=(a,b)` pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PairOrder {
    WeightValue,
    ValueWeight,
}

/// Item list from the command line, or from a file when prefixed with `@`.
pub fn load_items(arg: &str, order: PairOrder) -> anyhow::Result<Vec<Item>> {
    match arg.strip_prefix('@') {
        Some(path) => {
            let text = read_source(Path::new(path))?;
            parse_items(&text, order).with_context(|| format!("invalid items in {path}"))
        }
        None => parse_items(arg, order),
    }
}

/// Parse `A=(2,3), B=(3,4), ...`.
pub fn parse_items(text: &str, order: PairOrder) -> anyhow::Result<Vec<Item>> {
    let mut items = Vec::new();
    let mut rest = text.trim_start_matches(|c: char| c.is_whitespace() || c == ',');

    while !rest.is_empty() {
        let Some((name, after_name)) = rest.split_once('=') else {
            bail!("expected NAME=(a,b) near '{}'", snippet(rest));
        };
        let name = name.trim();
        if name.is_empty() || name.contains([',', '(', ')']) {
            bail!("invalid item name near '{}'", snippet(rest));
        }

        let Some(body) = after_name.trim_start().strip_prefix('(') else {
            bail!("expected '(' after {name}=");
        };
        let Some((pair, after_pair)) = body.split_once(')') else {
            bail!("missing ')' for item {name}");
        };
        let Some((first, second)) = pair.split_once(',') else {
            bail!("item {name} needs two numbers");
        };
        let first: u64 = first
            .trim()
            .parse()
            .with_context(|| format!("item {name}: '{}' is not a whole number", first.trim()))?;
        let second: u64 = second
            .trim()
            .parse()
            .with_context(|| format!("item {name}: '{}' is not a whole number", second.trim()))?;

        let (weight, value) = match order {
            PairOrder::WeightValue => (first, second),
            PairOrder::ValueWeight => (second, first),
        };
        let weight = usize::try_from(weight)
            .with_context(|| format!("item {name}: weight too large"))?;
        items.push(Item::new(name, weight, value));

        rest = after_pair.trim_start_matches(|c: char| c.is_whitespace() || c == ',');
    }

    Ok(items)
}

fn snippet(text: &str) -> String {
    text.chars().take(16).collect()
}
