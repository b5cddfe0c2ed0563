//! DIMACS graph text (`.col`/`.clq`): `c` comment lines, one `p` problem
//! line, and `e u v` edge lines with 1-based labels.

use anyhow::{bail, Context, Result};

/// Parse DIMACS text into a labeled edge list.
///
/// Labels are returned as written (1-based, possibly sparse); run
/// [`dsatur::normalize::normalize_edges`] before coloring. The `p` line's
/// declared vertex count is ignored: vertices outside any edge cannot be
/// represented downstream anyway.
pub fn parse(text: &str) -> Result<Vec<(u64, u64)>> {
    let mut edges = Vec::new();
    for (lineno, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('c') || line.starts_with('p') {
            continue;
        }
        edges.push(parse_fields(line, lineno)?);
    }
    Ok(edges)
}

fn parse_fields(line: &str, lineno: usize) -> Result<(u64, u64)> {
    let mut parts = line.split_whitespace();
    if parts.next() != Some("e") {
        bail!("line {}: unrecognized DIMACS line {:?}", lineno + 1, line);
    }
    let mut endpoint = || -> Result<u64> {
        parts
            .next()
            .with_context(|| format!("line {}: edge line is missing an endpoint", lineno + 1))?
            .parse()
            .with_context(|| format!("line {}: bad edge endpoint", lineno + 1))
    };
    Ok((endpoint()?, endpoint()?))
}

/// Render a 0-based edge list on `n` vertices as DIMACS text (1-based).
pub fn render(n: usize, edges: &[(usize, usize)]) -> String {
    let mut out = format!("p edge {} {}\n", n, edges.len());
    for &(u, v) in edges {
        out.push_str(&format!("e {} {}\n", u + 1, v + 1));
    }
    out
}
