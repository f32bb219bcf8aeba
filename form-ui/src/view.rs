use std::fmt::Write as _;

use form_core::{ColorTable, Field, FormController, GenderChoice, Phase, Reveal, validation};

const LABEL_WIDTH: usize = 8;

/// Renders the whole form as it would appear on screen: each field, the
/// advisory text for failing fields, status lines, and action availability.
pub fn render(controller: &FormController) -> String {
    let state = controller.state();
    let validation = controller.validation();
    let mut out = String::new();

    for field in Field::all() {
        let value = state.value(*field);
        let shown = if value.is_empty() {
            format!("<{}>", field.placeholder())
        } else {
            value.replace('\n', "\n          ")
        };
        let marker = if field.is_editable() { " " } else { "*" };
        let label = format!("{}:", field.label());
        let _ = writeln!(out, "{marker}{label:<w$} {shown}", w = LABEL_WIDTH);

        if validation.field(*field) == Some(false) {
            if let Some(advisory) = validation::advisory(*field) {
                let _ = writeln!(out, "  {:<w$} ! {advisory}", "", w = LABEL_WIDTH);
            }
        }
    }

    let _ = writeln!(out);
    if state.loading {
        let _ = writeln!(out, "Loading...");
    }
    if controller.phase() == Phase::Submitted {
        let _ = writeln!(out, "Form submitted successfully!");
    }
    let _ = writeln!(
        out,
        "[{}] [{}] [{}]",
        action("Submit", controller.can_submit()),
        action("Show Data", controller.can_show_data()),
        action("Reset", controller.can_reset()),
    );
    let _ = write!(out, "Click count: {}", state.click_count);
    out
}

fn action(
    name: &str,
    enabled: bool,
) -> String {
    if enabled {
        name.to_string()
    } else {
        format!("{name} (disabled)")
    }
}

pub fn render_colors(colors: &ColorTable) -> String {
    colors
        .entries()
        .iter()
        .map(|(name, code)| format!("  {name:<12} {code}"))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn render_genders() -> String {
    GenderChoice::all()
        .iter()
        .map(|c| format!("  {:<12} {}", c.label, c.value))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Frames `message` like a modal alert.
pub fn alert_box(message: &str) -> String {
    let width = message
        .lines()
        .map(|l| l.chars().count())
        .max()
        .unwrap_or(0);
    let border = format!("+{}+", "-".repeat(width + 2));

    let mut out = String::new();
    let _ = writeln!(out, "{border}");
    for line in message.lines() {
        let _ = writeln!(out, "| {line:<width$} |");
    }
    let _ = write!(out, "{border}");
    out
}

/// Prints revealed messages to stdout as framed alerts.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalAlert;

impl Reveal for TerminalAlert {
    fn reveal(
        &self,
        message: &str,
    ) {
        println!("{}", alert_box(message));
    }
}
