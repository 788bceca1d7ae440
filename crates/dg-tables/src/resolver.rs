//! Table resolution: one roll in, exactly one entry out.

use crate::dice::RandomSource;
use crate::table::TableEntry;

/// Roll percentile dice and select an entry.
///
/// Returns `None` only for an empty slice, in which case nothing is rolled.
/// Every table, including ones laid out for a smaller die, is rolled on a
/// d100; rolls beyond the last range fall back to the last entry.
pub fn resolve<'a, R: RandomSource + ?Sized>(
    entries: &'a [TableEntry],
    dice: &mut R,
) -> Option<&'a TableEntry> {
    if entries.is_empty() {
        return None;
    }
    let roll = dice.roll_d100();
    let entry = entry_for_roll(entries, roll);
    if let Some(entry) = entry {
        tracing::trace!(roll, entry = %entry.name, "resolved table entry");
    }
    entry
}

/// The first entry (in declared order) whose range contains `roll`.
///
/// When no range matches, the last entry is returned so that tables with
/// gaps still produce a result.
pub fn entry_for_roll(entries: &[TableEntry], roll: u32) -> Option<&TableEntry> {
    entries
        .iter()
        .find(|e| e.matches(roll))
        .or_else(|| entries.last())
}
