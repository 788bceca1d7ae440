use colored::Colorize;
use dg_tables::DiceExpr;

pub fn run(expr: &str, seed: Option<u64>) -> Result<(), String> {
    let parsed: DiceExpr = expr.parse()?;
    if parsed.count <= 0 || parsed.sides <= 0 {
        return Err(format!(
            "\"{expr}\" needs at least one die with at least one side"
        ));
    }

    let mut dice = super::dice(seed);
    tracing::debug!(expr = %parsed, seed = dice.seed(), "rolling dice expression");
    let total = parsed.roll(&mut dice);
    println!("  {parsed} = {}", total.to_string().bold());

    Ok(())
}
