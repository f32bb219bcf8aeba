//! Drives the form screen with scripted input, the way a user would type it.

use form_core::{FormConfig, Phase, RevealLog, decode_snapshot};
use form_ui::{
    Screen, app,
    commands::Command,
    config::{AppConfig, Overrides},
};
use pretty_assertions::assert_eq;

const FILL: &str = "\
set name JOHN SMITH
set email a@b.com
set mobile 1234-567890
set dob 01-01-2000
set gender Male
set zip 62701
set color red
";

fn screen_with(config: AppConfig) -> (Screen, RevealLog) {
    let log = RevealLog::new();
    let controller = app::build_controller(&config, Box::new(log.clone())).unwrap();
    (Screen::new(controller), log)
}

fn screen() -> (Screen, RevealLog) {
    screen_with(AppConfig::default())
}

async fn run_script(
    screen: &mut Screen,
    script: &str,
) -> String {
    let mut out = Vec::new();
    app::run(screen, script.as_bytes(), &mut out).await.unwrap();
    String::from_utf8(out).unwrap()
}

#[tokio::test(start_paused = true)]
async fn test_scripted_submit_reveals_encoded_snapshot() {
    let (mut screen, log) = screen();

    let output = run_script(&mut screen, &format!("{FILL}submit\nwait\nshow\n")).await;

    let state = screen.controller().state();
    assert_eq!(screen.controller().phase(), Phase::Submitted);
    assert_eq!(state.gender, "male");
    assert_eq!(state.color, "Red");
    assert_eq!(state.city, "Springfield");
    assert_eq!(state.click_count, 1);

    let messages = log.messages();
    assert_eq!(messages.len(), 2);
    let snapshot = decode_snapshot(&messages[0]).unwrap();
    assert_eq!(snapshot.name, "JOHN SMITH");
    assert_eq!(snapshot.state, "IL");
    assert!(messages[1].starts_with("Name: JOHN SMITH\nEmail: a@b.com\n"));

    assert!(output.contains("Loading..."));
    assert!(output.contains("Form submitted successfully!"));
    assert!(output.contains("Click count: 1"));
}

#[tokio::test(start_paused = true)]
async fn test_end_of_input_waits_for_pending_submit() {
    let (mut screen, log) = screen();

    let output = run_script(&mut screen, &format!("{FILL}submit\n")).await;

    assert_eq!(screen.controller().phase(), Phase::Submitted);
    assert!(!screen.is_waiting());
    assert_eq!(log.len(), 1);
    assert!(output.ends_with("Form submitted successfully!\n[Submit (disabled)] [Show Data] [Reset]\nClick count: 0\n"));
}

#[tokio::test(start_paused = true)]
async fn test_form_redraws_only_when_it_changes() {
    let (mut screen, _) = screen();

    let output = run_script(&mut screen, "set notes a\nset notes a\nhelp\nview\n").await;

    // Initial draw, the first edit, and the explicit view.
    assert_eq!(output.matches("Click count: 0").count(), 3);
    assert!(!screen.take_changes());
}

#[tokio::test(start_paused = true)]
async fn test_zip_edit_redraws_derived_location() {
    let (mut screen, _) = screen();

    let output = run_script(&mut screen, "set zip 62701\n").await;

    assert_eq!(output.matches("Click count: 0").count(), 2);
    assert!(output.contains("*City:    Springfield"));
    assert!(output.contains("*State:   IL"));
}

#[tokio::test(start_paused = true)]
async fn test_quit_stops_reading() {
    let (mut screen, _) = screen();

    run_script(&mut screen, "set notes first\nquit\nset notes second\n").await;

    assert_eq!(screen.controller().state().notes, "first");
}

#[tokio::test(start_paused = true)]
async fn test_bad_input_is_reported_and_ignored() {
    let (mut screen, _) = screen();

    let output = run_script(
        &mut screen,
        "jump\nset city Nowhere\nset gender robot\nset color mauve\nsubmit\nshow\nreset\n",
    )
    .await;

    assert!(output.contains("unknown command 'jump'"));
    assert!(output.contains("City is filled in from the ZIP code."));
    assert!(output.contains("Unknown gender; see 'genders'."));
    assert!(output.contains("Unknown color; see 'colors'."));
    assert!(output.contains("Submit is not available."));
    assert!(output.contains("Show Data is available after submitting."));
    assert!(output.contains("Reset is available after submitting."));
    assert!(screen.controller().state().is_pristine());
}

#[tokio::test(start_paused = true)]
async fn test_locked_config_rejects_edits_during_delay() {
    let config = AppConfig::default().apply(Overrides {
        lock_while_loading: true,
        ..Overrides::default()
    });
    let (mut screen, _) = screen_with(config);

    let output = run_script(&mut screen, &format!("{FILL}submit\nset notes late\nwait\n")).await;

    assert!(output.contains("Notes cannot be edited right now."));
    assert_eq!(screen.controller().state().notes, "");
    assert_eq!(screen.controller().phase(), Phase::Submitted);
}

#[tokio::test(start_paused = true)]
async fn test_reset_after_submit_returns_to_a_blank_form() {
    let (mut screen, _) = screen();
    run_script(&mut screen, &format!("{FILL}submit\nwait\nshow\nshow\n")).await;
    assert_eq!(screen.controller().state().click_count, 2);

    assert!(!screen.take_changes());

    let outcome = screen.handle(Command::Reset);

    assert!(!outcome.redraw);
    assert!(screen.take_changes());
    assert!(screen.controller().state().is_pristine());
    assert_eq!(screen.controller().config(), &FormConfig::default());
}
