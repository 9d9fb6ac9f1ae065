//! Vertex labels: a display projection of the 0-based index.

use anyhow::bail;

use crate::app::LabelScheme;

/// Label for `index`: `A..Z, AA..` or `1..`.
pub fn label(scheme: LabelScheme, index: usize) -> String {
    match scheme {
        LabelScheme::Letters => letters(index),
        LabelScheme::Numbers => (index + 1).to_string(),
    }
}

fn letters(index: usize) -> String {
    let mut n = index + 1;
    let mut out = Vec::new();
    while n > 0 {
        let rem = (n - 1) % 26;
        out.push(b'A' + rem as u8);
        n = (n - 1) / 26;
    }
    out.reverse();
    String::from_utf8_lossy(&out).into_owned()
}

/// Parse a label back to its index and check it against `order`.
pub fn parse_vertex(scheme: LabelScheme, text: &str, order: usize) -> anyhow::Result<usize> {
    let text = text.trim();
    let index = match scheme {
        LabelScheme::Letters => parse_letters(text),
        LabelScheme::Numbers => text.parse::<usize>().ok().and_then(|n| n.checked_sub(1)),
    };
    match index {
        Some(i) if i < order => Ok(i),
        Some(_) => bail!("vertex '{text}' is outside a graph of order {order}"),
        None => bail!("'{text}' is not a valid vertex label"),
    }
}

fn parse_letters(text: &str) -> Option<usize> {
    if text.is_empty() {
        return None;
    }
    let mut n = 0usize;
    for c in text.chars() {
        if !c.is_ascii_alphabetic() {
            return None;
        }
        let digit = (c.to_ascii_uppercase() as u8 - b'A') as usize + 1;
        n = n.checked_mul(26)?.checked_add(digit)?;
    }
    Some(n - 1)
}

/// Join labels of a vertex sequence, e.g. `ABC` for letters or `1-2-3`.
pub fn route(scheme: LabelScheme, vertices: &[usize]) -> String {
    let separator = match scheme {
        LabelScheme::Letters => "",
        LabelScheme::Numbers => "-",
    };
    vertices
        .iter()
        .map(|&v| label(scheme, v))
        .collect::<Vec<_>>()
        .join(separator)
}
