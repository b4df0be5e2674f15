use colored::{ColoredString, Colorize};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};
use userdir::api::{CmdMessage, MessageLevel};
use userdir::model::{Stats, Status, UserRecord};

const HEADERS: [&str; 6] = ["ID", "Name", "Email", "Phone", "Role", "Status"];
const MAX_CELL_WIDTH: usize = 32;
const COLUMN_GAP: &str = "  ";
// Highlight for the newest row.
const HIGHLIGHT: (u8, u8, u8) = (99, 228, 138);

/// Colors are still subject to `NO_COLOR` / `CLICOLOR` via `colored`.
pub fn render_user_table(records: &[UserRecord]) -> String {
    render_user_table_internal(records, true)
}

pub(super) fn render_user_table_internal(records: &[UserRecord], use_color: bool) -> String {
    if records.is_empty() {
        return "No users found.\n".to_string();
    }

    let rows: Vec<[String; 6]> = records
        .iter()
        .map(|r| {
            [
                r.id.to_string(),
                truncate_to_width(&r.name, MAX_CELL_WIDTH),
                truncate_to_width(&r.email, MAX_CELL_WIDTH),
                r.phone.clone(),
                r.role.to_string(),
                r.status.to_string(),
            ]
        })
        .collect();

    let mut widths = HEADERS.map(|h| h.width());
    for row in &rows {
        for (w, cell) in widths.iter_mut().zip(row.iter()) {
            *w = (*w).max(cell.width());
        }
    }

    let mut out = String::new();
    let header = join_padded(&HEADERS.map(String::from), &widths);
    out.push_str(&paint(header.trim_end().to_string(), use_color, |s| s.bold()));
    out.push('\n');

    for (i, (row, record)) in rows.iter().zip(records).enumerate() {
        let line = join_padded(row, &widths).trim_end().to_string();
        let painted = if i == 0 {
            paint(line, use_color, |s| {
                s.truecolor(HIGHLIGHT.0, HIGHLIGHT.1, HIGHLIGHT.2)
            })
        } else {
            match record.status {
                Status::Active => line,
                Status::Inactive => paint(line, use_color, |s| s.dimmed()),
            }
        };
        out.push_str(&painted);
        out.push('\n');
    }
    out
}

pub fn render_stats(stats: &Stats) -> String {
    format!(
        "Total: {}  Active: {}  Inactive: {}\n",
        stats.total, stats.active, stats.inactive
    )
}

pub fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
        }
    }
}

fn paint(s: String, use_color: bool, style: impl Fn(&str) -> ColoredString) -> String {
    if use_color {
        style(s.as_str()).to_string()
    } else {
        s
    }
}

fn join_padded(cells: &[String; 6], widths: &[usize; 6]) -> String {
    cells
        .iter()
        .zip(widths.iter())
        .map(|(cell, &w)| format!("{}{}", cell, " ".repeat(w.saturating_sub(cell.width()))))
        .collect::<Vec<_>>()
        .join(COLUMN_GAP)
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    let limit = max_width.saturating_sub(1);

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > limit {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}
