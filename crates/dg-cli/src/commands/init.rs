use std::path::Path;

use dg_tables::Scope;

pub fn run(data_dir: &Path, force: bool) -> Result<(), String> {
    let mut store = super::open_store(data_dir);
    store
        .ensure_dirs()
        .map_err(|e| format!("cannot create data directory: {e}"))?;

    let written = store
        .install_builtin(force)
        .map_err(|e| format!("cannot install standard tables: {e}"))?;

    println!("Initialized data directory {}/", data_dir.display());
    println!(
        "  {}/  {written} standard table{} installed",
        store.dir(Scope::Standard).display(),
        if written == 1 { "" } else { "s" },
    );
    println!(
        "  {}/  your own tables",
        store.dir(Scope::Custom).display()
    );
    println!();
    println!("Get started:");
    println!("  dgen generate -n 5        # Generate a five-room dungeon");
    println!("  dgen tables list          # List available tables");
    println!("  dgen tables create <name> # Start a custom table");

    Ok(())
}
