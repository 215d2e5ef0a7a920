use chrono::{DateTime, Utc};
use colored::Colorize;
use tickz::component::ViewHost;
use tickz::model::RecordId;
use tickz::view::{CollectionView, Filter, ListView, Placeholder, PreviewView, Summary};
use timeago::Formatter;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const LINE_WIDTH: usize = 100;
const TIME_WIDTH: usize = 14;

/// Terminal host for the lists overview. The terminal "region" is one shot
/// of output per invocation, so mounting just keeps the latest view and the
/// caller prints it once at the end.
#[derive(Default)]
pub(crate) struct CollectionTerminal {
    last: Option<CollectionView>,
}

impl CollectionTerminal {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ViewHost for CollectionTerminal {
    type View = CollectionView;

    fn mount(&mut self, view: &CollectionView) {
        self.last = Some(view.clone());
    }

    // A one-shot CLI has no transition to play and no text entry to focus
    fn flip_row(&mut self, _id: RecordId) {}
    fn focus_input(&mut self) {}
}

#[derive(Default)]
pub(crate) struct ListTerminal {
    last: Option<ListView>,
}

impl ListTerminal {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ViewHost for ListTerminal {
    type View = ListView;

    fn mount(&mut self, view: &ListView) {
        self.last = Some(view.clone());
    }

    fn flip_row(&mut self, _id: RecordId) {}
    fn focus_input(&mut self) {}
}

pub(crate) fn print_collection(host: &CollectionTerminal) {
    let Some(view) = &host.last else { return };

    if let Some(Placeholder::Empty) = view.placeholder {
        println!("No lists yet. Create one with `tickz add <name>`.");
        return;
    }

    for row in &view.rows {
        let extra = if row.item_count == 1 {
            "1 item".to_string()
        } else {
            format!("{} items", row.item_count)
        };
        print_row(row.done, row.id, &row.name, &extra, newest(row));
    }
    print_status(view.summary, view.filter, view.clear_action_visible, "clear");
}

pub(crate) fn print_list(host: &ListTerminal) {
    let Some(view) = &host.last else { return };

    match view.placeholder {
        Some(Placeholder::UnknownList) => {
            println!("{}", "No such list.".red());
            return;
        }
        Some(Placeholder::Empty) => {
            println!(
                "{} is empty. Add an item with `tickz todo <id> <text>`.",
                view.name.as_deref().unwrap_or("List").bold()
            );
            return;
        }
        None => {}
    }

    if let Some(name) = &view.name {
        println!("{}", name.bold());
    }
    for row in &view.rows {
        let stamp = row.last_updated.unwrap_or(row.created);
        print_row(row.done, row.id, &row.text, "", stamp);
    }
    print_status(view.summary, view.filter, view.clear_action_visible, "sweep");
}

pub(crate) fn print_preview(view: &PreviewView) {
    let Some(name) = &view.name else {
        println!("{}", "No such list.".red());
        return;
    };

    println!("{} {}", name.bold(), format!("({})", view.summary).dimmed());
    for row in &view.rows {
        println!("  {} {}", checkbox(row.done), row.text);
    }
    if let Some(more) = view.truncated_count {
        println!("{}", format!("  … {} more", more).dimmed());
    }
}

pub(crate) fn print_clear_prompt(done_count: usize) {
    let noun = if done_count == 1 { "list" } else { "lists" };
    print!("Remove {} done {}? [y/N] ", done_count, noun);
}

fn print_row(done: Option<bool>, id: RecordId, label: &str, extra: &str, stamp: DateTime<Utc>) {
    let box_str = checkbox(done);
    let id_str = format!("{}. ", id);

    let extra = if extra.is_empty() {
        String::new()
    } else {
        format!(" {}", extra)
    };

    let fixed_width = 4 + id_str.width() + extra.width() + TIME_WIDTH;
    let available = LINE_WIDTH.saturating_sub(fixed_width);
    let label_display = truncate_to_width(label, available);
    let padding = available.saturating_sub(label_display.width());

    let label_colored = if done == Some(true) {
        label_display.strikethrough().dimmed()
    } else {
        label_display.normal()
    };

    println!(
        "{} {}{}{}{}{}",
        box_str,
        id_str.yellow(),
        label_colored,
        " ".repeat(padding),
        extra.dimmed(),
        format_time_ago(stamp).dimmed()
    );
}

fn print_status(summary: Summary, filter: Filter, clear_visible: bool, clear_cmd: &str) {
    let mut status = summary.to_string();
    if filter != Filter::All {
        status.push_str(&format!("  [{}]", filter));
    }
    if clear_visible {
        status.push_str(&format!("  `tickz {}` removes done entries", clear_cmd));
    }
    println!("{}", status.dimmed());
}

fn checkbox(done: Option<bool>) -> String {
    match done {
        Some(true) => "[x]".to_string(),
        Some(false) => "[ ]".to_string(),
        // Legacy record without the flag: shows under both filters
        None => "[?]".to_string(),
    }
}

fn newest(row: &tickz::view::ListRow) -> DateTime<Utc> {
    row.last_updated
        .into_iter()
        .chain(row.last_renamed)
        .chain(std::iter::once(row.created))
        .max()
        .unwrap_or(row.created)
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if max_width == 0 {
        return String::new();
    }

    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}

fn format_time_ago(timestamp: DateTime<Utc>) -> String {
    let now = Utc::now();
    let duration = now.signed_duration_since(timestamp);

    let formatter = Formatter::new();
    let time_str = formatter.convert(duration.to_std().unwrap_or_default());

    format!("{:>width$}", time_str, width = TIME_WIDTH)
}
