//! Table rendering: termimad markdown for terminals, aligned text otherwise

use termimad::MadSkin;

use crate::display::rows::{Column, RowSet};
use crate::display::terminal::{output_style, OutputStyle};

const COLUMN_FILL: char = '\u{2800}';

/// Print a titled table to stdout in the style the terminal supports
///
/// `min_width` is the minimum width of the first column.
pub fn print_table(title: &str, set: &RowSet<'_>, min_width: usize) {
    match output_style() {
        OutputStyle::Rich => print_rich(&render_markdown(title, set, min_width)),
        OutputStyle::Plain => print!("{}", render_plain(title, set, min_width)),
    }
}

fn print_rich(markdown: &str) {
    let mut skin = MadSkin::default();
    customize_skin(&mut skin);
    skin.print_text(markdown);
}

/// Bold magenta headers, cyan titles; italic text is dimmed for night rows
fn customize_skin(skin: &mut MadSkin) {
    use termimad::crossterm::style::{Attribute, Color::*};

    skin.headers[1].set_fg(Cyan);
    skin.headers[1].add_attr(Attribute::Bold);

    skin.bold.set_fg(Magenta);
    skin.bold.add_attr(Attribute::Bold);

    skin.italic.remove_attr(Attribute::Italic);
    skin.italic.add_attr(Attribute::Dim);

    skin.table.set_fg(White);
}

/// Markdown table with bold headers and italic (dimmed) night rows
pub fn render_markdown(title: &str, set: &RowSet<'_>, min_width: usize) -> String {
    let mut out = format!("## {}\n\n", title);

    out.push('|');
    for (i, column) in set.columns.iter().enumerate() {
        out.push_str(&format!("**{}**", column.header()));
        if i == 0 {
            out.push_str(&column_fill(column.header(), min_width));
        }
        out.push('|');
    }
    out.push('\n');

    out.push('|');
    for column in &set.columns {
        out.push_str(if column.is_numeric() { "-:" } else { ":-" });
        out.push('|');
    }
    out.push('\n');

    for row in &set.rows {
        out.push('|');
        for column in &set.columns {
            let cell = escape_markdown(&column.cell(row));
            let cell = if row.is_dimmed() && !cell.is_empty() {
                format!("*{}*", cell)
            } else {
                cell
            };
            out.push_str(&cell);
            out.push('|');
        }
        out.push('\n');
    }

    out
}

/// Space-aligned text table
pub fn render_plain(title: &str, set: &RowSet<'_>, min_width: usize) -> String {
    let cells: Vec<Vec<String>> = set
        .rows
        .iter()
        .map(|row| set.columns.iter().map(|c| c.cell(row)).collect())
        .collect();

    let widths: Vec<usize> = set
        .columns
        .iter()
        .enumerate()
        .map(|(i, column)| {
            let content = cells
                .iter()
                .map(|row| display_width(&row[i]))
                .chain(std::iter::once(display_width(column.header())))
                .max()
                .unwrap_or(0);
            if i == 0 {
                content.max(min_width)
            } else {
                content
            }
        })
        .collect();

    let mut out = format!("{}\n\n", title);

    let headers: Vec<String> = set.columns.iter().map(|c| c.header().to_string()).collect();
    out.push_str(&plain_line(&set.columns, &headers, &widths));

    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    out.push_str(&plain_line(&set.columns, &rule, &widths));

    for row in &cells {
        out.push_str(&plain_line(&set.columns, row, &widths));
    }

    out
}

fn plain_line(columns: &[Column], cells: &[String], widths: &[usize]) -> String {
    let padded: Vec<String> = columns
        .iter()
        .zip(cells)
        .zip(widths)
        .map(|((column, cell), width)| {
            let fill = " ".repeat(width.saturating_sub(display_width(cell)));
            if column.is_numeric() {
                format!("{}{}", fill, cell)
            } else {
                format!("{}{}", cell, fill)
            }
        })
        .collect();
    format!("{}\n", padded.join("  ").trim_end())
}

/// Blank padding that widens a markdown column to `min_width`
///
/// termimad trims whitespace from table cells, so this uses the braille
/// blank (U+2800), which is not whitespace and renders one column wide.
fn column_fill(text: &str, min_width: usize) -> String {
    COLUMN_FILL
        .to_string()
        .repeat(min_width.saturating_sub(display_width(text)))
}

fn display_width(text: &str) -> usize {
    text.chars().count()
}

fn escape_markdown(text: &str) -> String {
    text.replace('|', "\\|").replace('*', "\\*")
}
