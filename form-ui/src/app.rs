//! Wiring between configuration, lookup data, the controller, and the
//! terminal input loop.

use std::{io::Write, sync::Arc};

use anyhow::{Context, Result};
use form_core::{
    ColorTable, Field, FormController, FormEvent, GenderChoice, PendingSubmit, Reveal, ZipTable,
    timer::Cancelled,
};
use form_data::{ColorLoader, ZipLoader, default_color_table, default_zip_table};
use tokio::{
    io::{AsyncBufRead, AsyncBufReadExt},
    sync::broadcast::{Receiver, error::TryRecvError},
};
use tracing::{debug, info, trace, warn};

use crate::{
    commands::{Command, HELP},
    config::AppConfig,
    logging, view,
};

/// Loads the configured lookup tables, falling back to the bundled ones.
pub fn load_tables(config: &AppConfig) -> Result<(ZipTable, ColorTable)> {
    let zips = match &config.zip_file {
        Some(path) => ZipLoader::load_file(path)
            .with_context(|| format!("Failed to load postal codes: {}", path.display()))?,
        None => default_zip_table().context("Failed to load bundled postal codes")?,
    };
    let colors = match &config.color_file {
        Some(path) => ColorLoader::load_file(path)
            .with_context(|| format!("Failed to load colors: {}", path.display()))?,
        None => default_color_table().context("Failed to load bundled colors")?,
    };

    info!(zips = zips.len(), colors = colors.len(), "lookup tables loaded");
    Ok((zips, colors))
}

pub fn build_controller(
    config: &AppConfig,
    reveal: Box<dyn Reveal>,
) -> Result<FormController> {
    let (zips, colors) = load_tables(config)?;
    Ok(FormController::new(
        Arc::new(zips),
        Arc::new(colors),
        reveal,
        config.form.clone(),
    ))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// What the loop should do after a command.
///
/// State changes redraw the form through the controller's [`FormEvent`]s;
/// `redraw` only forces a redraw when nothing changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub flow: Flow,
    pub message: Option<String>,
    pub redraw: bool,
}

impl Outcome {
    fn applied() -> Self {
        Self {
            flow: Flow::Continue,
            message: None,
            redraw: false,
        }
    }

    fn redraw() -> Self {
        Self {
            redraw: true,
            ..Self::applied()
        }
    }

    fn say(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            ..Self::applied()
        }
    }
}

/// The form screen: a controller, its change feed, and the submission it
/// may be waiting on.
pub struct Screen {
    controller: FormController,
    events: Receiver<FormEvent>,
    pending: Option<PendingSubmit>,
}

impl Screen {
    pub fn new(controller: FormController) -> Self {
        let events = controller.subscribe();
        Self {
            controller,
            events,
            pending: None,
        }
    }

    pub fn controller(&self) -> &FormController {
        &self.controller
    }

    pub fn is_waiting(&self) -> bool {
        self.pending.is_some()
    }

    pub fn render(&self) -> String {
        view::render(&self.controller)
    }

    /// Drains the change feed. Returns whether the form changed since the
    /// last call.
    pub fn take_changes(&mut self) -> bool {
        let mut changed = false;
        loop {
            match self.events.try_recv() {
                Ok(event) => {
                    trace!(?event, "form event");
                    changed = true;
                }
                Err(TryRecvError::Lagged(skipped)) => {
                    debug!(skipped, "form events lagged");
                    changed = true;
                }
                Err(TryRecvError::Empty | TryRecvError::Closed) => return changed,
            }
        }
    }

    /// Applies one command. `Wait` is handled by [`run`].
    pub fn handle(
        &mut self,
        command: Command,
    ) -> Outcome {
        match command {
            Command::Set { field, value } => self.set_field(field, value),
            Command::Clear(field) => self.set_field(field, String::new()),
            Command::Submit => match self.controller.begin_submit() {
                Some(pending) => {
                    self.pending = Some(pending);
                    Outcome::applied()
                }
                None => Outcome::say("Submit is not available."),
            },
            Command::Wait => Outcome::say("Nothing to wait for."),
            Command::Show => match self.controller.show_data() {
                Some(_) => Outcome::applied(),
                None => Outcome::say("Show Data is available after submitting."),
            },
            Command::Reset => {
                if self.controller.reset() {
                    Outcome::applied()
                } else {
                    Outcome::say("Reset is available after submitting.")
                }
            }
            Command::Colors => Outcome::say(view::render_colors(self.controller.colors())),
            Command::Genders => Outcome::say(view::render_genders()),
            Command::View => Outcome::redraw(),
            Command::LogLevel(level) => match logging::set_log_level(&level) {
                Ok(()) => Outcome::say(format!("Log level set to '{level}'.")),
                Err(e) => Outcome::say(e.to_string()),
            },
            Command::Help => Outcome::say(HELP),
            Command::Quit => Outcome {
                flow: Flow::Quit,
                message: None,
                redraw: false,
            },
        }
    }

    fn set_field(
        &mut self,
        field: Field,
        value: String,
    ) -> Outcome {
        if !field.is_editable() {
            return Outcome::say(format!("{field} is filled in from the ZIP code."));
        }

        // Gender and color come from selectors, so only listed choices are accepted.
        let value = match field {
            Field::Gender if !value.is_empty() => match GenderChoice::parse(&value) {
                Some(choice) => choice.value.to_string(),
                None => return Outcome::say("Unknown gender; see 'genders'."),
            },
            Field::Color if !value.is_empty() => {
                match self
                    .controller
                    .colors()
                    .names()
                    .find(|name| name.eq_ignore_ascii_case(value.trim()))
                {
                    Some(name) => name.to_string(),
                    None => return Outcome::say("Unknown color; see 'colors'."),
                }
            }
            _ => value,
        };

        if self.controller.set(field, value) {
            Outcome::applied()
        } else {
            Outcome::say(format!("{field} cannot be edited right now."))
        }
    }

    /// Resolves when the pending submit delay is over; never resolves when
    /// nothing is pending.
    async fn pending_elapsed(&mut self) -> Result<(), Cancelled> {
        match self.pending.as_mut() {
            Some(pending) => pending.elapsed().await,
            None => std::future::pending().await,
        }
    }

    /// Finishes the pending submit once its delay is over.
    pub async fn wait_for_submit(&mut self) -> Option<Outcome> {
        self.pending.as_ref()?;
        let elapsed = self.pending_elapsed().await;
        Some(self.complete_submit(elapsed))
    }

    fn complete_submit(
        &mut self,
        elapsed: Result<(), Cancelled>,
    ) -> Outcome {
        let Some(pending) = self.pending.take() else {
            return Outcome::say("Nothing to wait for.");
        };

        if elapsed.is_err() {
            self.controller.abandon_submit(pending);
            return Outcome::say("Submit was cancelled.");
        }

        match self.controller.finish_submit(pending) {
            Ok(_) => Outcome::applied(),
            Err(e) => {
                warn!(error = %e, "submit failed");
                Outcome::say(format!("Submit failed: {e}"))
            }
        }
    }
}

/// Prints the outcome's message, then redraws if the form changed.
fn emit<W: Write>(
    out: &mut W,
    screen: &mut Screen,
    outcome: &Outcome,
) -> Result<()> {
    if let Some(message) = &outcome.message {
        writeln!(out, "{message}")?;
    }
    if screen.take_changes() || outcome.redraw {
        writeln!(out, "{}", screen.render())?;
    }
    out.flush()?;
    Ok(())
}

/// Reads commands until `quit` or end of input, re-rendering after each.
///
/// A pending submit completes while the loop keeps reading, so edits made
/// during the delay go through the controller's lock policy. At end of input
/// any pending submit is awaited before returning.
pub async fn run<R, W>(
    screen: &mut Screen,
    input: R,
    out: &mut W,
) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut lines = input.lines();
    writeln!(out, "{}", screen.render())?;
    writeln!(out, "Type 'help' for commands.")?;
    out.flush()?;

    loop {
        tokio::select! {
            elapsed = screen.pending_elapsed() => {
                let outcome = screen.complete_submit(elapsed);
                emit(out, screen, &outcome)?;
            }
            line = lines.next_line() => {
                let Some(line) = line.context("Failed to read input")? else {
                    debug!("end of input");
                    break;
                };

                let command = match Command::parse(&line) {
                    Ok(command) => command,
                    Err(e) => {
                        writeln!(out, "{e}")?;
                        continue;
                    }
                };

                if command == Command::Wait {
                    if let Some(outcome) = screen.wait_for_submit().await {
                        emit(out, screen, &outcome)?;
                    } else {
                        writeln!(out, "Nothing to wait for.")?;
                    }
                    continue;
                }

                let outcome = screen.handle(command);
                emit(out, screen, &outcome)?;
                if outcome.flow == Flow::Quit {
                    return Ok(());
                }
            }
        }
    }

    if let Some(outcome) = screen.wait_for_submit().await {
        emit(out, screen, &outcome)?;
    }
    Ok(())
}
