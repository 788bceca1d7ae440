use std::io::{self, BufRead, Write};
use std::path::Path;

use colored::Colorize;

pub fn run(data_dir: &Path, seed: Option<u64>, custom: bool) -> Result<(), String> {
    let mut generator = super::generator(data_dir, seed, custom);
    let config = generator.config().clone();

    println!("  {} Dungeon Generator", "Starting".bold());
    println!("  Press Enter for defaults, 'q' to quit.\n");

    let stdin = io::stdin();
    let mut reader = stdin.lock();

    loop {
        let Some(count) = prompt(
            &mut reader,
            &format!("Number of rooms [{}]: ", config.default_room_count),
        )?
        else {
            break;
        };
        if is_quit(&count) {
            break;
        }
        let rooms = if count.is_empty() {
            config.default_room_count
        } else {
            match count.parse::<u32>() {
                Ok(n) => n,
                Err(_) => {
                    println!("{}\n", format!("not a number: \"{count}\"").yellow());
                    continue;
                }
            }
        };

        let Some(name) = prompt(&mut reader, &format!("Dungeon name [{}]: ", config.default_name))?
        else {
            break;
        };
        if is_quit(&name) {
            break;
        }
        let name = if name.is_empty() {
            config.default_name.as_str()
        } else {
            name.as_str()
        };

        match generator.generate_dungeon(rooms, name) {
            Ok(dungeon) => {
                println!();
                super::print_summary(&dungeon);
                for room in dungeon.rooms() {
                    super::print_room(room);
                }
            }
            Err(e) => println!("{}\n", e.to_string().yellow()),
        }
    }

    Ok(())
}

/// Print `message` and read one trimmed line. `None` on end of input.
fn prompt(reader: &mut impl BufRead, message: &str) -> Result<Option<String>, String> {
    print!("{message}");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut line = String::new();
    match reader.read_line(&mut line) {
        Ok(0) => Ok(None),
        Ok(_) => Ok(Some(line.trim().to_string())),
        Err(e) => Err(e.to_string()),
    }
}

fn is_quit(input: &str) -> bool {
    input.eq_ignore_ascii_case("q") || input.eq_ignore_ascii_case("quit")
}
