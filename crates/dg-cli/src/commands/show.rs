use std::path::Path;

pub fn run(file: &Path, room: Option<u32>) -> Result<(), String> {
    let dungeon = super::load_dungeon(file)?;

    if let Some(id) = room {
        let room = dungeon
            .get_room(id)
            .ok_or_else(|| format!("room {id} not found in \"{}\"", dungeon.name))?;
        super::print_room(room);
        return Ok(());
    }

    super::print_summary(&dungeon);
    if dungeon.is_empty() {
        println!("  No rooms.");
    }
    for room in dungeon.rooms() {
        super::print_room(room);
    }

    Ok(())
}
