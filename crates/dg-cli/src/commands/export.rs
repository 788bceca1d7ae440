use std::path::Path;

use dg_core::Dungeon;

pub fn run(file: &Path, format: &str, output: Option<&Path>) -> Result<(), String> {
    let dungeon = super::load_dungeon(file)?;

    let content = match format {
        "markdown" | "md" => export_markdown(&dungeon),
        "text" | "txt" => export_text(&dungeon),
        "json" => dungeon
            .to_json()
            .map_err(|e| format!("JSON serialization error: {e}"))?,
        _ => {
            return Err(format!(
                "unsupported format: \"{format}\". Use: markdown, text, json"
            ));
        }
    };

    if let Some(path) = output {
        std::fs::write(path, &content)
            .map_err(|e| format!("cannot write to {}: {e}", path.display()))?;
        println!("  Exported to {}", path.display());
    } else {
        print!("{content}");
    }

    Ok(())
}

fn export_markdown(dungeon: &Dungeon) -> String {
    let mut out = format!("# {}\n\n", dungeon.name);

    if !dungeon.notes.is_empty() {
        out.push_str(&format!("{}\n\n", dungeon.notes));
    }
    out.push_str(&format!("Created: {}\n", dungeon.created_at));
    out.push_str(&format!("Total Rooms: {}\n\n", dungeon.len()));

    for (i, room) in dungeon.rooms().iter().enumerate() {
        let id = room.id.unwrap_or(i as u32 + 1);
        out.push_str(&format!("## Room {id}\n\n{room}\n\n"));
    }

    out
}

fn export_text(dungeon: &Dungeon) -> String {
    let mut out = format!("{dungeon}\n");

    for (i, room) in dungeon.rooms().iter().enumerate() {
        let id = room.id.unwrap_or(i as u32 + 1);
        out.push_str(&format!("Room {id}\n{room}\n\n"));
    }

    out
}
