use colored::Colorize;
use prettytable::{Cell, Row, Table};
use zerion_rewards_sdk::{Accessory, ListItem, RewardsView};

/// Print a success message
pub fn print_success(message: &str) {
    println!("{} {}", "✓".green(), message);
}

/// Print a table with data
pub fn print_table(headers: Vec<&str>, rows: Vec<Vec<String>>) {
    let mut table = Table::new();

    // Add headers
    table.set_titles(Row::new(
        headers.iter().map(|h| Cell::new(h)).collect(),
    ));

    // Add data rows
    for row_data in rows {
        table.add_row(Row::new(row_data.iter().map(|c| Cell::new(c)).collect()));
    }

    table.printstd();
}

fn render_accessories(item: &ListItem) -> String {
    item.accessories
        .iter()
        .map(|accessory| match accessory {
            Accessory::Text(text) if text.starts_with('$') => text.green().to_string(),
            Accessory::Text(text) => text.clone(),
            Accessory::Tag(tag) => format!("[{}]", tag).purple().to_string(),
        })
        .collect::<Vec<_>>()
        .join("  ")
}

/// Print every section of a rewards view as its own table
pub fn print_view(view: &RewardsView) {
    for section in &view.sections {
        if let Some(title) = &section.title {
            println!();
            println!("{}", title.bold());
        }

        if section.items.is_empty() {
            println!("  {}", "Nothing to show".dimmed());
            continue;
        }

        let rows = section
            .items
            .iter()
            .map(|item| {
                vec![
                    item.title.clone(),
                    item.subtitle.clone().unwrap_or_default(),
                    render_accessories(item),
                ]
            })
            .collect();
        print_table(vec!["Item", "Value", "Details"], rows);
    }
}
