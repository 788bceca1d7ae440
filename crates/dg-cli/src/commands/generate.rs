use std::path::{Path, PathBuf};

pub struct Options {
    pub rooms: Option<u32>,
    pub name: Option<String>,
    pub theme: Option<String>,
    pub seed: Option<u64>,
    pub custom: bool,
    pub output: Option<PathBuf>,
}

pub fn run(data_dir: &Path, opts: &Options) -> Result<(), String> {
    let mut generator = super::generator(data_dir, opts.seed, opts.custom);
    let config = generator.config().clone();
    let rooms = opts.rooms.unwrap_or(config.default_room_count);

    let dungeon = match &opts.theme {
        Some(theme) => generator.generate_themed_dungeon(theme, rooms),
        None => {
            let name = opts.name.as_deref().unwrap_or(&config.default_name);
            generator.generate_dungeon(rooms, name)
        }
    }
    .map_err(|e| format!("generation failed: {e}"))?;

    super::print_summary(&dungeon);
    for room in dungeon.rooms() {
        super::print_room(room);
    }

    if let Some(path) = &opts.output {
        super::save_dungeon(&dungeon, path)?;
        println!("  Saved to {}", path.display());
    }

    Ok(())
}
