//! Minimal aligned text tables for summary output.

/// Render `rows` under `headers` as left-aligned columns with a two-space
/// gap. An empty row set renders the header plus a `(no rows)` marker.
pub fn render(headers: &[&str], rows: &[Vec<String>]) -> String {
  let mut widths: Vec<usize> = headers.iter().map(|h| h.len()).collect();
  for row in rows {
    for (i, cell) in row.iter().enumerate() {
      widths[i] = widths[i].max(cell.len());
    }
  }

  let mut out = String::new();
  render_line(&mut out, headers.iter().map(|h| *h), &widths);
  if rows.is_empty() {
    out.push_str("(no rows)\n");
    return out;
  }
  for row in rows {
    render_line(&mut out, row.iter().map(String::as_str), &widths);
  }
  out
}

fn render_line<'a>(out: &mut String, cells: impl Iterator<Item = &'a str>, widths: &[usize]) {
  let mut first = true;
  for (cell, width) in cells.zip(widths) {
    if !first {
      out.push_str("  ");
    }
    out.push_str(cell);
    for _ in cell.len()..*width {
      out.push(' ');
    }
    first = false;
  }
  // Trim trailing padding on the last column.
  while out.ends_with(' ') {
    out.pop();
  }
  out.push('\n');
}
