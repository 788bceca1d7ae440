use std::path::Path;

use colored::Colorize;
use comfy_table::{ContentArrangement, Table};
use dg_tables::{
    DirTableStore, ProbabilityTable, Scope, TableEntry, TableStore, resolve, validate_table_name,
};

pub fn list(data_dir: &Path) -> Result<(), String> {
    let store = super::open_store(data_dir);

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Name", "Scope", "Entries", "Description"]);

    let mut count = 0;
    for scope in Scope::ALL {
        let names = store
            .list_tables(scope)
            .map_err(|e| format!("cannot list {scope} tables: {e}"))?;
        for name in names {
            let (entries, desc) = match store.load_table(&name, scope) {
                Ok(t) => (t.entries.len().to_string(), t.info.description),
                Err(e) => ("?".to_string(), format!("unreadable: {e}")),
            };
            table.add_row(vec![name, scope.to_string(), entries, desc]);
            count += 1;
        }
    }

    if count == 0 {
        println!("  No tables found. Run `dgen init` to install the standard tables.");
        return Ok(());
    }

    println!("{table}");
    println!();
    println!("  {count} tables");

    Ok(())
}

pub fn show(data_dir: &Path, name: &str, scope: &str) -> Result<(), String> {
    let scope = super::parse_scope(scope)?;
    let store = super::open_store(data_dir);
    let table = store.load_table(name, scope).map_err(|e| e.to_string())?;

    println!("  {} [{}]", table.info.name.bold(), scope.to_string().dimmed());
    if !table.info.description.is_empty() {
        println!("  {}", table.info.description);
    }
    println!();

    if table.is_empty() {
        println!("  No entries.");
        return Ok(());
    }

    let mut rows = Table::new();
    rows.set_content_arrangement(ContentArrangement::Dynamic);
    rows.set_header(vec!["#", "Roll", "Outcome", "Roll again"]);
    for (i, entry) in table.entries.iter().enumerate() {
        rows.add_row(vec![
            (i + 1).to_string(),
            format!("{}-{}", entry.min, entry.max),
            entry.name.clone(),
            if entry.roll_again { "yes" } else { "" }.to_string(),
        ]);
    }
    println!("{rows}");

    if let Err(e) = table.validate() {
        println!("  {}", e.to_string().yellow());
    }
    let gaps = table.uncovered_rolls();
    if !gaps.is_empty() {
        println!(
            "  {} rolls not covered; they fall back to the last entry",
            gaps.len().to_string().yellow()
        );
    }

    Ok(())
}

pub fn create(data_dir: &Path, name: &str, description: &str) -> Result<(), String> {
    validate_table_name(name).map_err(|e| e.to_string())?;

    let mut store = super::open_store(data_dir);
    match store.load_table(name, Scope::Custom) {
        Ok(_) => return Err(format!("custom table '{name}' already exists")),
        Err(e) if e.is_not_found() => {}
        Err(e) => return Err(e.to_string()),
    }

    let table = ProbabilityTable::new(name, description);
    store
        .save_custom_table(name, &table)
        .map_err(|e| format!("cannot save table: {e}"))?;

    println!("  Created custom table '{name}'");
    Ok(())
}

pub fn add_entry(
    data_dir: &Path,
    table_name: &str,
    name: &str,
    min: u32,
    max: u32,
    roll_again: bool,
) -> Result<(), String> {
    let mut entry = TableEntry::new(name, min, max);
    if roll_again {
        entry = entry.with_roll_again();
    }

    let (mut store, mut table) = load_custom(data_dir, table_name)?;
    table.entries.push(entry);
    table.validate().map_err(|e| e.to_string())?;

    store
        .save_custom_table(table_name, &table)
        .map_err(|e| format!("cannot save table: {e}"))?;

    println!(
        "  Added '{name}' ({min}-{max}) to '{table_name}' as row {}",
        table.entries.len()
    );
    Ok(())
}

pub fn remove_entry(data_dir: &Path, table_name: &str, row: usize) -> Result<(), String> {
    let (mut store, mut table) = load_custom(data_dir, table_name)?;

    if row == 0 || row > table.entries.len() {
        return Err(format!(
            "row {row} out of range: '{table_name}' has {} entries",
            table.entries.len()
        ));
    }
    let removed = table.entries.remove(row - 1);

    store
        .save_custom_table(table_name, &table)
        .map_err(|e| format!("cannot save table: {e}"))?;

    println!("  Removed '{}' from '{table_name}'", removed.name);
    Ok(())
}

pub fn roll(data_dir: &Path, name: &str, scope: &str, seed: Option<u64>) -> Result<(), String> {
    let scope = super::parse_scope(scope)?;
    let store = super::open_store(data_dir);
    let table = store.load_table(name, scope).map_err(|e| e.to_string())?;

    let mut dice = super::dice(seed);
    tracing::debug!(table = name, %scope, seed = dice.seed(), "rolling on table");
    let entry = resolve(&table.entries, &mut dice)
        .ok_or_else(|| format!("table '{name}' has no entries"))?;

    println!("  {}", entry.name.bold());
    if entry.roll_again {
        println!("  {}", "(roll again)".dimmed());
    }
    Ok(())
}

/// Load a custom table for editing. Standard tables are read-only here.
fn load_custom(data_dir: &Path, name: &str) -> Result<(DirTableStore, ProbabilityTable), String> {
    let store = super::open_store(data_dir);
    match store.load_table(name, Scope::Custom) {
        Ok(table) => Ok((store, table)),
        Err(e) if e.is_not_found() => {
            if store.load_table(name, Scope::Standard).is_ok() {
                Err(format!(
                    "'{name}' is a standard table and cannot be edited; create a custom table instead"
                ))
            } else {
                Err(e.to_string())
            }
        }
        Err(e) => Err(e.to_string()),
    }
}
