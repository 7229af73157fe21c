pub mod history;
pub mod kinds;
pub mod play;
pub mod roll;

use colored::Colorize;
use ora_core::RollResult;

/// Format the dice of a result as `[a, b, c]`.
fn dice_list(result: &RollResult) -> String {
    let values: Vec<String> = result.dice_values().iter().map(|v| v.to_string()).collect();
    format!("[{}]", values.join(", "))
}

/// Print a result and its embedded results, indented.
fn print_result(result: &RollResult, depth: usize) {
    let indent = "  ".repeat(depth + 1);
    println!(
        "{indent}{} {} = {}",
        result.label().bold(),
        dice_list(result).dimmed(),
        result.raw_total()
    );
    if let Some(text) = result.interpretation() {
        println!("{indent}  {}", text.green());
    }
    for child in result.embedded() {
        print_result(child, depth + 1);
    }
}
