//! Terminal output formatting with colors and box drawing.

use colored::Colorize;

use crate::result::{BlockRow, BlockTable};

/// Format a `BlockTable` for human-readable terminal output.
///
/// Uses ANSI colors and Unicode box drawing for clear presentation.
/// Rows with an undefined standard error (single block) print `undefined`
/// in yellow instead of a number.
pub fn format_table(table: &BlockTable) -> String {
    let mut output = String::new();

    let title = format!(
        "{} (N = {})",
        "Block-average standard error".bold(),
        table.sequence_len()
    );

    output.push_str(&format_box_top());
    output.push_str(&format_box_line(&title));
    output.push_str(&format_box_separator());

    // Pad before coloring so ANSI codes don't throw off column alignment
    let header = format!(
        "{:>10}  {:>8}  {:>14}  {:>14}",
        "Block size", "Blocks", "Mean", "Std. error"
    )
    .bold()
    .to_string();
    output.push_str(&format_box_line(&header));

    for row in table {
        output.push_str(&format_box_line(&format_row(row)));
    }

    if table.is_empty() {
        output.push_str(&format_box_line(&"(no candidate block sizes)".dimmed().to_string()));
    }

    output.push_str(&format_box_bottom());

    if table.iter().any(BlockRow::is_se_undefined) {
        output.push_str(&format!(
            "\n{}\n",
            "Note: the standard error of a single block is undefined."
                .dimmed()
                .italic()
        ));
    }

    output
}

/// Format one table row as an aligned line.
fn format_row(row: &BlockRow) -> String {
    // Pad before coloring so ANSI codes don't throw off column alignment
    let se = match row.se {
        Some(se) => format!("{se:>14.6}"),
        None => format!("{:>14}", "undefined").yellow().to_string(),
    };
    format!(
        "{:>10}  {:>8}  {:>14.6}  {}",
        row.block_size, row.num_blocks, row.mean, se
    )
}

// Box drawing helpers

const BOX_WIDTH: usize = 56;

fn format_box_top() -> String {
    format!("\u{250C}{}\u{2510}\n", "\u{2500}".repeat(BOX_WIDTH))
}

fn format_box_bottom() -> String {
    format!("\u{2514}{}\u{2518}\n", "\u{2500}".repeat(BOX_WIDTH))
}

fn format_box_separator() -> String {
    format!("\u{251C}{}\u{2524}\n", "\u{2500}".repeat(BOX_WIDTH))
}

fn format_box_line(content: &str) -> String {
    // Strip ANSI codes for length calculation
    let visible_len = strip_ansi_codes(content).chars().count();
    let padding = if visible_len < BOX_WIDTH - 2 {
        BOX_WIDTH - 2 - visible_len
    } else {
        0
    };
    format!("\u{2502} {}{} \u{2502}\n", content, " ".repeat(padding))
}

/// Strip ANSI escape codes for accurate length calculation.
fn strip_ansi_codes(s: &str) -> String {
    let mut result = String::new();
    let mut chars = s.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\x1b' {
            // Skip until 'm' (end of ANSI sequence)
            while let Some(&next) = chars.peek() {
                chars.next();
                if next == 'm' {
                    break;
                }
            }
        } else {
            result.push(c);
        }
    }
    result
}
