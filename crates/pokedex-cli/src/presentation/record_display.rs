//! Record tables and detail cards.

use pokedex_core::{DetailView, MISSING_VALUE, Record};

use super::tables::{format_optional, print_separator, truncate_string};

const TABLE_WIDTH: usize = 64;

/// One table row: id, name, height, weight, types.
pub fn format_record_row(record: &Record) -> String {
    let types = record.type_names();
    let types = if types.is_empty() {
        MISSING_VALUE.to_string()
    } else {
        types.join("/")
    };
    format!(
        "{:<14} {:<20} {:<7} {:<7} {}",
        record.id,
        truncate_string(&record.name, 19),
        format_optional(record.height.as_ref(), MISSING_VALUE),
        format_optional(record.weight.as_ref(), MISSING_VALUE),
        truncate_string(&types, 14),
    )
}

/// Print records as a table, in the order given.
pub fn print_record_table(records: &[Record]) {
    println!(
        "{:<14} {:<20} {:<7} {:<7} {}",
        "ID", "Name", "Height", "Weight", "Types"
    );
    print_separator(TABLE_WIDTH);
    for record in records {
        println!("{}", format_record_row(record));
    }
}

/// Print the detail card of one record.
pub fn display_record_details(view: &DetailView) {
    println!("#{} {}", view.id, view.name);
    print_separator(TABLE_WIDTH);
    println!("  Height:    {}", view.height);
    println!("  Weight:    {}", view.weight);
    println!("  Types:     {}", view.types);
    println!("  Abilities: {}", view.abilities);
    if let Some(sprite) = &view.sprite {
        println!("  Sprite:    {sprite}");
    }
}
