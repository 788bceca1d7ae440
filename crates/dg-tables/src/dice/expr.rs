//! Dice expressions such as `3d6+2` or `d100`.

use std::fmt;
use std::str::FromStr;

use super::RandomSource;

/// A parsed `NdS[+M|-M]` expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiceExpr {
    /// Number of dice to roll.
    pub count: i32,
    /// Faces on each die.
    pub sides: i32,
    /// Flat modifier added to the sum.
    pub modifier: i32,
}

impl DiceExpr {
    /// Most dice a single expression may roll.
    pub const MAX_DICE: i32 = 1000;
    /// Most faces a single die may have.
    pub const MAX_SIDES: i32 = 1000;

    /// Roll the expression.
    pub fn roll<R: RandomSource + ?Sized>(&self, dice: &mut R) -> i32 {
        dice.roll_dice_sum(self.count, self.sides, self.modifier)
    }
}

impl FromStr for DiceExpr {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text: String = s.chars().filter(|c| !c.is_whitespace()).collect();
        let lower = text.to_lowercase();

        let (dice_part, modifier) = match lower.find(['+', '-']) {
            Some(pos) => {
                let modifier = lower[pos..]
                    .parse::<i32>()
                    .map_err(|_| format!("invalid modifier in \"{s}\""))?;
                (&lower[..pos], modifier)
            }
            None => (lower.as_str(), 0),
        };

        let (count, sides) = dice_part
            .split_once('d')
            .ok_or_else(|| format!("expected NdS in \"{s}\""))?;

        let count = if count.is_empty() {
            1
        } else {
            count
                .parse::<i32>()
                .map_err(|_| format!("invalid dice count in \"{s}\""))?
        };
        let sides = sides
            .parse::<i32>()
            .map_err(|_| format!("invalid die size in \"{s}\""))?;
        if count > Self::MAX_DICE {
            return Err(format!(
                "too many dice in \"{s}\" (at most {})",
                Self::MAX_DICE
            ));
        }
        if sides > Self::MAX_SIDES {
            return Err(format!(
                "die too large in \"{s}\" (at most {} sides)",
                Self::MAX_SIDES
            ));
        }

        Ok(Self {
            count,
            sides,
            modifier,
        })
    }
}

impl fmt::Display for DiceExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}d{}", self.count, self.sides)?;
        match self.modifier {
            0 => Ok(()),
            m if m > 0 => write!(f, "+{m}"),
            m => write!(f, "{m}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dice::ScriptedDice;

    #[test]
    fn parse_full_expression() {
        let expr: DiceExpr = "3d6+2".parse().unwrap();
        assert_eq!(
            expr,
            DiceExpr {
                count: 3,
                sides: 6,
                modifier: 2
            }
        );
    }

    #[test]
    fn parse_implicit_count_and_negative_modifier() {
        let expr: DiceExpr = "D20 - 1".parse().unwrap();
        assert_eq!(expr.count, 1);
        assert_eq!(expr.sides, 20);
        assert_eq!(expr.modifier, -1);
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!("foo".parse::<DiceExpr>().is_err());
        assert!("2d".parse::<DiceExpr>().is_err());
        assert!("xd6".parse::<DiceExpr>().is_err());
        assert!("2d6+x".parse::<DiceExpr>().is_err());
    }

    #[test]
    fn parse_caps_count_and_sides() {
        assert!("1000d1000".parse::<DiceExpr>().is_ok());
        let err = "2000000000d6".parse::<DiceExpr>().unwrap_err();
        assert!(err.contains("too many dice"));
        let err = "1d1001".parse::<DiceExpr>().unwrap_err();
        assert!(err.contains("die too large"));
    }

    #[test]
    fn display() {
        assert_eq!("d100".parse::<DiceExpr>().unwrap().to_string(), "1d100");
        assert_eq!("2d10-3".parse::<DiceExpr>().unwrap().to_string(), "2d10-3");
        assert_eq!("4d4+1".parse::<DiceExpr>().unwrap().to_string(), "4d4+1");
    }

    #[test]
    fn roll_uses_dice_sum() {
        let expr: DiceExpr = "2d6+1".parse().unwrap();
        let mut dice = ScriptedDice::new(vec![2, 5]);
        assert_eq!(expr.roll(&mut dice), 8);
    }

    #[test]
    fn zero_dice_roll_to_modifier() {
        let expr: DiceExpr = "0d6+4".parse().unwrap();
        let mut dice = ScriptedDice::new(vec![6]);
        assert_eq!(expr.roll(&mut dice), 4);
    }
}
