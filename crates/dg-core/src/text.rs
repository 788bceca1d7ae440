/// Upper-case the first character and lower-case the rest.
///
/// Used for detail-key labels ("creature_type" becomes "Creature_type") and
/// themed dungeon names.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
