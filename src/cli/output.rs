//! Terminal output formatting with colors
//!
//! Respects NO_COLOR, CLICOLOR, CLICOLOR_FORCE automatically.

use colored::{ColoredString, Colorize};
use itertools::Itertools;

use crate::domain::{Token, TokenKind, TokenLine};
use crate::view::{OutputView, VARIABLES_HEADING};

/// Print error (red bold "error:" prefix) to stderr
pub fn error(msg: &(impl std::fmt::Display + ?Sized)) {
    eprintln!("{}: {}", "error".red().bold(), msg);
}

/// Print completed action (green label)
pub fn action(label: &str, msg: &(impl std::fmt::Display + ?Sized)) {
    println!("{}: {}", label.green(), msg);
}

/// Print section header (cyan bold)
pub fn header(msg: &(impl std::fmt::Display + ?Sized)) {
    println!("{}", msg.to_string().cyan().bold());
}

/// Print indented detail (no color)
pub fn detail(msg: &(impl std::fmt::Display + ?Sized)) {
    println!("  {}", msg);
}

/// Print plain output (no color, for data)
pub fn info(msg: &(impl std::fmt::Display + ?Sized)) {
    println!("{}", msg);
}

fn colored_token(token: &Token) -> ColoredString {
    match token.kind {
        Some(TokenKind::Operator) => token.text.as_str().red(),
        Some(TokenKind::Equals) => token.text.as_str().magenta(),
        Some(TokenKind::Number) => token.text.as_str().blue(),
        Some(TokenKind::Identifier) => token.text.as_str().green(),
        None => token.text.as_str().normal(),
    }
}

/// One row per line: `Line n:` followed by kind-colored tokens.
pub fn tokens(lines: &[TokenLine]) {
    header("Tokens");
    for line in lines {
        println!(
            "  {} {}",
            line.label().bold(),
            line.tokens.iter().map(colored_token).join(" ")
        );
    }
}

/// Print the full view: tokens, trees, then steps and variables or the error.
pub fn view(view: &OutputView) {
    if !view.tokens.is_empty() {
        tokens(&view.tokens);
    }

    for figure in view.trees.figures() {
        println!();
        header(&figure.title);
        info(&figure.to_text_tree());
    }

    if let Some(error) = view.error_line() {
        println!();
        println!("{}", error.red().bold());
        return;
    }

    let steps = view.step_lines();
    if !steps.is_empty() {
        println!();
        header("Optimization Steps");
        for step in steps {
            detail(&step);
        }
    }

    let variables = view.variable_lines();
    if !variables.is_empty() {
        println!();
        header(VARIABLES_HEADING);
        for variable in variables {
            detail(&variable);
        }
    }
}
