//! Shared CLI output helpers for consistent terminal and JSON output.
//!
//! Color scheme (respects NO_COLOR):
//! - Green: success, checkmarks
//! - Red: errors
//! - Yellow: warnings
//! - Cyan: paths, names, hints
//! - Bold: headers, important values
//! - Dimmed: secondary info
//!
//! In `--json` mode every command prints exactly one envelope
//! `{"success": bool, "message": str, "data": ...}` on stdout.

use colored::Colorize;
use serde::Serialize;
use std::fmt::Display;

use crate::error::Result;

const RULE_WIDTH: usize = 56;

/// Check if color output is disabled via NO_COLOR env var.
fn colors_enabled() -> bool {
    std::env::var("NO_COLOR").is_err()
}

/// Print a success message with checkmark (green).
///
/// Example: `✓ Password file created`
pub fn success(msg: &str) {
    if colors_enabled() {
        println!("{} {}", "✓".green(), msg);
    } else {
        println!("✓ {}", msg);
    }
}

/// Print an error message to stderr (red).
///
/// Example: `✗ no password matches 'bank'`
pub fn error(msg: &str) {
    if colors_enabled() {
        eprintln!("{} {}", "✗".red(), msg);
    } else {
        eprintln!("✗ {}", msg);
    }
}

/// Print a warning message (yellow).
///
/// Example: `⚠ git is not configured`
pub fn warn(msg: &str) {
    if colors_enabled() {
        println!("{} {}", "⚠".yellow(), msg.yellow().italic());
    } else {
        println!("⚠ {}", msg);
    }
}

/// Print a hint message to stderr (cyan).
///
/// Example: `→ run: pouch init`
pub fn hint(msg: &str) {
    if colors_enabled() {
        eprintln!("{} {}", "→".cyan(), msg.cyan());
    } else {
        eprintln!("→ {}", msg);
    }
}

/// Print a bold header.
pub fn header(title: &str) {
    if colors_enabled() {
        println!("{}", title.bold());
    } else {
        println!("{}", title);
    }
}

/// Print a key-value pair (label dimmed, value bold).
///
/// Example: `  username  alice`
pub fn kv(label: &str, value: impl Display) {
    let label = console::pad_str(label, 9, console::Alignment::Left, None);
    if colors_enabled() {
        println!("  {} {}", label.dimmed(), value.to_string().bold());
    } else {
        println!("  {} {}", label, value);
    }
}

/// Print a horizontal rule separator.
pub fn rule() {
    if colors_enabled() {
        println!("{}", "─".repeat(RULE_WIDTH).dimmed());
    } else {
        println!("{}", "─".repeat(RULE_WIDTH));
    }
}

/// Format a path string in cyan.
pub fn path(p: &str) -> String {
    if colors_enabled() {
        p.cyan().to_string()
    } else {
        p.to_string()
    }
}

/// Format a command string in green.
pub fn cmd(c: &str) -> String {
    if colors_enabled() {
        c.green().to_string()
    } else {
        c.to_string()
    }
}

/// Print a dimmed/secondary message.
///
/// Example: `no data available`
pub fn dimmed(msg: &str) {
    if colors_enabled() {
        println!("{}", msg.dimmed());
    } else {
        println!("{}", msg);
    }
}

/// Print rows as aligned columns under a bold header, numbered from 1.
///
/// Column widths are measured on display width, so names with wide or
/// combining characters stay aligned.
pub fn table(headers: &[&str], rows: &[Vec<String>]) {
    if rows.is_empty() {
        dimmed("no data available");
        return;
    }

    let index_width = rows.len().to_string().len().max(2);
    let mut widths: Vec<usize> = headers
        .iter()
        .map(|h| console::measure_text_width(h))
        .collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate().take(widths.len()) {
            widths[i] = widths[i].max(console::measure_text_width(cell));
        }
    }

    let render = |cells: Vec<String>| -> String {
        cells
            .iter()
            .zip(&widths)
            .map(|(cell, width)| {
                console::pad_str(cell, *width, console::Alignment::Left, None).into_owned()
            })
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    };

    let head = format!(
        "{:>w$}  {}",
        "N.",
        render(headers.iter().map(|h| h.to_string()).collect()),
        w = index_width
    );
    header(&head);
    for (i, row) in rows.iter().enumerate() {
        let line = render(row.clone());
        if colors_enabled() {
            println!(
                "{}  {}",
                format!("{:>w$}", i + 1, w = index_width).dimmed(),
                line
            );
        } else {
            println!("{:>w$}  {}", i + 1, line, w = index_width);
        }
    }
}

#[derive(Serialize)]
struct Envelope<'a, T: Serialize> {
    success: bool,
    message: &'a str,
    data: T,
}

/// Print a JSON success envelope.
pub fn json_success<T: Serialize>(message: &str, data: T) -> Result<()> {
    let envelope = Envelope {
        success: true,
        message,
        data,
    };
    println!("{}", serde_json::to_string_pretty(&envelope)?);
    Ok(())
}

/// Print a JSON failure envelope (`data` is null).
pub fn json_error(message: &str) {
    let envelope = serde_json::json!({
        "success": false,
        "message": message,
        "data": null,
    });
    println!("{:#}", envelope);
}
