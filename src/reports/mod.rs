pub mod chart;

use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use normaudit::analysis::{Pattern, PatternStats, ScriptStats};
use strum::IntoEnumIterator;

pub fn print_summary(script_stats: &ScriptStats, pattern_stats: &PatternStats) {
    let rule = "=".repeat(70);
    println!("\n{}", rule);
    println!("                   TEXT NORMALIZATION ANALYSIS SUMMARY");
    println!("{}", rule);

    let overall = &script_stats.overall;
    println!("\nNon-Latin Character Preservation:");
    println!("  Overall preservation rate: {:.2}%", overall.rate);
    println!("  Rows with non-Latin characters: {}", overall.total);
    println!(
        "  Rows with preserved non-Latin characters: {}",
        overall.preserved
    );

    print_script_table(script_stats);
    print_pattern_table(pattern_stats);

    println!("\nKey Findings:");
    println!("  * The dataset shows selective character preservation across different scripts");
    println!("  * Business terms and publishing-related information are commonly removed");
    if pattern_stats.non_latin_rows_empty > 0 {
        println!(
            "  * {} rows with non-Latin characters were normalized to empty strings",
            pattern_stats.non_latin_rows_empty
        );
    }
}

fn print_script_table(script_stats: &ScriptStats) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new("Script").add_attribute(Attribute::Bold),
        Cell::new("Preserved"),
        Cell::new("Total"),
        Cell::new("Rate").fg(Color::Cyan),
    ]);

    for i in 1..=3 {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }

    for (script, entry) in script_stats.ranked() {
        if entry.total == 0 {
            continue;
        }
        let pct = entry.percentage();
        let rate_cell = if pct >= 50.0 {
            Cell::new(format!("{:.2}%", pct)).fg(Color::Green)
        } else {
            Cell::new(format!("{:.2}%", pct)).fg(Color::Red)
        };

        table.add_row(vec![
            Cell::new(script).add_attribute(Attribute::Bold),
            Cell::new(entry.preserved),
            Cell::new(entry.total),
            rate_cell,
        ]);
    }

    println!("\nPreservation rates by script:");
    println!("{}", table);
}

fn print_pattern_table(pattern_stats: &PatternStats) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new(format!("Pattern (n={})", pattern_stats.total_analyzed))
            .add_attribute(Attribute::Bold),
        Cell::new("Rows"),
        Cell::new("Share"),
    ]);

    for i in 1..=2 {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }

    for pattern in Pattern::iter() {
        table.add_row(vec![
            Cell::new(pattern.description()),
            Cell::new(pattern_stats.count(pattern)),
            Cell::new(format!("{:.2}%", pattern_stats.percentage(pattern))),
        ]);
    }

    println!("\nNormalization Patterns:");
    println!("{}", table);
}
