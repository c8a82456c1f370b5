use terminal_size::{terminal_size, Width};

use crate::datatype::bind::ResolvedParam;

const COLUMNS: [&str; 5] = ["$n", "explicit", "canonical", "native", "oid"];

// Render resolved parameters as an ASCII table followed by the rewritten SQL.
pub fn print_param_table(params: &[ResolvedParam], positional_sql: &str) {
    let rows: Vec<Vec<String>> = params.iter().map(param_cells).collect();
    for line in render_table(&rows, get_terminal_width()) {
        println!("{}", line);
    }
    println!("params: {}", params.len());
    println!("sql: {}", positional_sql);
}

fn param_cells(p: &ResolvedParam) -> Vec<String> {
    vec![
        format!("${}", p.index),
        p.explicit.map(|t| t.to_string()).unwrap_or_else(|| "-".to_string()),
        p.canonical.to_string(),
        p.native.clone().unwrap_or_else(|| "-".to_string()),
        p.oid.to_string(),
    ]
}

pub(crate) fn render_table(rows: &[Vec<String>], termw: usize) -> Vec<String> {
    let cell_cap = termw / COLUMNS.len();
    let mut widths: Vec<usize> = COLUMNS.iter().map(|c| c.chars().count().min(cell_cap)).collect();
    for r in rows {
        for (i, cell) in r.iter().enumerate().take(COLUMNS.len()) {
            let w = cell.chars().count();
            if w > widths[i] { widths[i] = w.min(cell_cap); }
        }
    }
    crate::tprintln!("[cli.outputformatter] width={} column widths={:?}", termw, widths);

    let header: Vec<String> = COLUMNS.iter().map(|c| c.to_string()).collect();
    let sep = build_separator(&widths);
    let mut out = Vec::with_capacity(rows.len() + 4);
    out.push(sep.clone());
    out.push(build_row(&header, &widths));
    out.push(sep.clone());
    for r in rows {
        out.push(build_row(r, &widths));
    }
    out.push(sep);
    out
}

fn build_separator(widths: &[usize]) -> String {
    let mut s = String::new();
    s.push('+');
    for w in widths {
        s.push_str(&"-".repeat(*w + 2));
        s.push('+');
    }
    s
}

fn build_row(cells: &[String], widths: &[usize]) -> String {
    let mut s = String::new();
    s.push('|');
    for (i, w) in widths.iter().enumerate() {
        let cell = cells.get(i).cloned().unwrap_or_default();
        let text = truncate(&cell, *w);
        let pad = w.saturating_sub(text.chars().count());
        s.push(' ');
        if is_numeric_like(&cell) {
            s.push_str(&" ".repeat(pad));
            s.push_str(&text);
        } else {
            s.push_str(&text);
            s.push_str(&" ".repeat(pad));
        }
        s.push_str(" |");
    }
    s
}

fn truncate(s: &str, max: usize) -> String {
    let len = s.chars().count();
    if len <= max { return s.to_string(); }
    if max <= 1 { return "…".to_string(); }
    s.chars().take(max - 1).collect::<String>() + "…"
}

fn is_numeric_like(s: &str) -> bool {
    // crude detection for aligning numbers to right
    let st = s.trim();
    if st.is_empty() { return false; }
    let mut has_digit = false;
    for ch in st.chars() {
        if ch.is_ascii_digit() { has_digit = true; continue; }
        if ".-+eE,_".contains(ch) { continue; }
        return false;
    }
    has_digit
}

fn get_terminal_width() -> usize {
    match terminal_size() {
        Some((Width(w), _)) if w > 4 => (w - 4) as usize,
        _ => 80,
    }
}
