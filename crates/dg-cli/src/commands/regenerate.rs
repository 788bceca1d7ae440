use std::path::Path;

use colored::Colorize;

pub fn run(
    data_dir: &Path,
    file: &Path,
    room_id: u32,
    seed: Option<u64>,
    custom: bool,
) -> Result<(), String> {
    let mut dungeon = super::load_dungeon(file)?;
    let mut generator = super::generator(data_dir, seed, custom);

    let room = generator
        .regenerate_room(&mut dungeon, room_id)
        .map_err(|e| format!("cannot regenerate room: {e}"))?;

    super::save_dungeon(&dungeon, file)?;

    println!("  {} room {room_id}", "Regenerated".bold());
    println!();
    super::print_room(&room);
    println!("  Saved to {}", file.display());

    Ok(())
}
