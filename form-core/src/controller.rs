//! State machine behind the personal details form.
//!
//! ```text
//! Editing --begin_submit--> Submitting --finish_submit--> Submitted
//!    ^                          |                             |
//!    +------abandon_submit------+                             |
//!    +-------------------------- reset -----------------------+
//! ```
//!
//! Every applied change is published as a [`FormEvent`] so a view can
//! re-render without polling.

use std::sync::Arc;

use thiserror::Error;
use tokio::sync::broadcast;
use tracing::{debug, info, warn};

use crate::{
    codec::{CodecError, encode_snapshot},
    config::FormConfig,
    location::derive_location_with,
    models::{ColorTable, Field, FormState, ZipTable},
    reveal::Reveal,
    timer::{Cancelled, OneShot},
    validation::Validation,
};

const EVENT_CAPACITY: usize = 64;

/// Coarse lifecycle position of the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Editing,
    Submitting,
    Submitted,
}

/// Change notification published after every applied mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    FieldChanged { field: Field, value: String },
    LocationDerived { city: String, state: String },
    SubmitStarted,
    Submitted { encoded: String },
    SubmitAbandoned,
    DataShown { click_count: u32 },
    Reset,
}

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("submit delay was cancelled")]
    Cancelled(#[from] Cancelled),

    #[error("submit delay has not elapsed yet")]
    NotElapsed,

    #[error("submission ticket does not belong to the pending submit")]
    StaleTicket,

    #[error(transparent)]
    Codec(#[from] CodecError),
}

/// Ticket for an in-flight submission, returned by
/// [`FormController::begin_submit`].
#[derive(Debug)]
pub struct PendingSubmit {
    id: u64,
    timer: OneShot,
}

impl PendingSubmit {
    /// Resolves when the submit delay is over.
    pub async fn elapsed(&mut self) -> Result<(), Cancelled> {
        self.timer.wait().await
    }

    pub fn cancel(&self) {
        self.timer.cancel();
    }
}

pub struct FormController {
    state: FormState,
    zips: Arc<ZipTable>,
    colors: Arc<ColorTable>,
    reveal: Box<dyn Reveal>,
    config: FormConfig,
    events: broadcast::Sender<FormEvent>,
    submit_id: u64,
}

impl FormController {
    pub fn new(
        zips: Arc<ZipTable>,
        colors: Arc<ColorTable>,
        reveal: Box<dyn Reveal>,
        config: FormConfig,
    ) -> Self {
        let (events, _) = broadcast::channel(EVENT_CAPACITY);
        Self {
            state: FormState::new(),
            zips,
            colors,
            reveal,
            config,
            events,
            submit_id: 0,
        }
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn config(&self) -> &FormConfig {
        &self.config
    }

    pub fn colors(&self) -> &ColorTable {
        &self.colors
    }

    /// Receives every [`FormEvent`] published after this call.
    pub fn subscribe(&self) -> broadcast::Receiver<FormEvent> {
        self.events.subscribe()
    }

    pub fn phase(&self) -> Phase {
        if self.state.submitted {
            Phase::Submitted
        } else if self.state.loading {
            Phase::Submitting
        } else {
            Phase::Editing
        }
    }

    /// Runs every field predicate against the current values.
    pub fn validation(&self) -> Validation {
        Validation::of(&self.state)
    }

    pub fn form_is_valid(&self) -> bool {
        self.validation().is_valid()
    }

    pub fn can_edit(&self) -> bool {
        !self.state.submitted && !(self.config.lock_while_loading && self.state.loading)
    }

    pub fn can_submit(&self) -> bool {
        self.form_is_valid() && !self.state.submitted && !self.state.loading
    }

    pub fn can_show_data(&self) -> bool {
        self.state.submitted
    }

    pub fn can_reset(&self) -> bool {
        self.state.submitted
    }

    // ─── field mutation ──────────────────────────────────────────────────

    /// Replaces the value of an editable field verbatim.
    ///
    /// Returns `false` without touching state when the field is derived or
    /// the form is locked. Changing the ZIP re-derives city and state.
    pub fn set(
        &mut self,
        field: Field,
        value: impl Into<String>,
    ) -> bool {
        if !field.is_editable() {
            warn!(%field, "derived field cannot be set directly");
            return false;
        }
        if !self.can_edit() {
            debug!(%field, phase = ?self.phase(), "edit rejected, form is locked");
            return false;
        }

        let value = value.into();
        let slot = self.state.value_mut(field);
        if *slot != value {
            *slot = value.clone();
            debug!(%field, "field updated");
            self.publish(FormEvent::FieldChanged { field, value });
        }

        if field == Field::Zip {
            self.derive_location();
        }
        true
    }

    pub fn set_name(
        &mut self,
        value: impl Into<String>,
    ) -> bool {
        self.set(Field::Name, value)
    }

    pub fn set_email(
        &mut self,
        value: impl Into<String>,
    ) -> bool {
        self.set(Field::Email, value)
    }

    pub fn set_mobile(
        &mut self,
        value: impl Into<String>,
    ) -> bool {
        self.set(Field::Mobile, value)
    }

    pub fn set_dob(
        &mut self,
        value: impl Into<String>,
    ) -> bool {
        self.set(Field::Dob, value)
    }

    pub fn set_gender(
        &mut self,
        value: impl Into<String>,
    ) -> bool {
        self.set(Field::Gender, value)
    }

    pub fn set_zip(
        &mut self,
        value: impl Into<String>,
    ) -> bool {
        self.set(Field::Zip, value)
    }

    pub fn set_color(
        &mut self,
        value: impl Into<String>,
    ) -> bool {
        self.set(Field::Color, value)
    }

    pub fn set_notes(
        &mut self,
        value: impl Into<String>,
    ) -> bool {
        self.set(Field::Notes, value)
    }

    fn derive_location(&mut self) {
        let location =
            derive_location_with(&self.state.zip, &self.zips, self.config.zip_lookup_min_len);
        if location.city == self.state.city && location.state == self.state.state {
            return;
        }

        debug!(zip = %self.state.zip, city = %location.city, state = %location.state, "location derived");
        self.state.city = location.city;
        self.state.state = location.state;
        self.publish(FormEvent::LocationDerived {
            city: self.state.city.clone(),
            state: self.state.state.clone(),
        });
    }

    // ─── submit ──────────────────────────────────────────────────────────

    /// Starts the simulated submit delay.
    ///
    /// Returns `None` and leaves state untouched unless the form is valid,
    /// not yet submitted, and not already loading. Must run inside a tokio
    /// runtime.
    pub fn begin_submit(&mut self) -> Option<PendingSubmit> {
        if !self.can_submit() {
            debug!(phase = ?self.phase(), valid = self.form_is_valid(), "submit ignored");
            return None;
        }

        self.submit_id += 1;
        self.state.loading = true;
        let timer = OneShot::schedule(self.config.submit_delay());
        info!(delay = ?timer.duration(), "submit started");
        self.publish(FormEvent::SubmitStarted);

        Some(PendingSubmit {
            id: self.submit_id,
            timer,
        })
    }

    /// Completes a submission whose delay has elapsed: encodes the current
    /// values, reveals the encoded string, and locks the form.
    pub fn finish_submit(
        &mut self,
        pending: PendingSubmit,
    ) -> Result<String, SubmitError> {
        if pending.id != self.submit_id || !self.state.loading {
            return Err(SubmitError::StaleTicket);
        }
        if !pending.timer.has_fired() {
            return Err(SubmitError::NotElapsed);
        }

        let encoded = match encode_snapshot(&self.state.snapshot()) {
            Ok(encoded) => encoded,
            Err(e) => {
                self.state.loading = false;
                self.publish(FormEvent::SubmitAbandoned);
                return Err(e.into());
            }
        };

        self.reveal.reveal(&encoded);
        self.state.submitted = true;
        self.state.loading = false;
        info!("form submitted");
        self.publish(FormEvent::Submitted {
            encoded: encoded.clone(),
        });

        Ok(encoded)
    }

    /// Drops an in-flight submission and returns the form to editing.
    pub fn abandon_submit(
        &mut self,
        pending: PendingSubmit,
    ) {
        pending.cancel();
        if pending.id != self.submit_id || !self.state.loading {
            return;
        }

        self.state.loading = false;
        warn!("submit abandoned before the delay elapsed");
        self.publish(FormEvent::SubmitAbandoned);
    }

    /// Begins a submission, waits out the delay, and completes it.
    ///
    /// `Ok(None)` means the submit action was unavailable.
    pub async fn submit(&mut self) -> Result<Option<String>, SubmitError> {
        let Some(mut pending) = self.begin_submit() else {
            return Ok(None);
        };

        if let Err(e) = pending.elapsed().await {
            self.abandon_submit(pending);
            return Err(e.into());
        }

        self.finish_submit(pending).map(Some)
    }

    // ─── post-submit actions ─────────────────────────────────────────────

    /// Reveals every current value, one `Label: value` per line.
    ///
    /// Returns the new click count, or `None` if the form is not submitted.
    pub fn show_data(&mut self) -> Option<u32> {
        if !self.can_show_data() {
            debug!("show data ignored, form not submitted");
            return None;
        }

        self.state.click_count = self.state.click_count.saturating_add(1);
        self.reveal.reveal(&self.state.render_lines());
        let click_count = self.state.click_count;
        info!(click_count, "data shown");
        self.publish(FormEvent::DataShown { click_count });

        Some(click_count)
    }

    /// Clears every field and counter. Only available once submitted.
    pub fn reset(&mut self) -> bool {
        if !self.can_reset() {
            debug!("reset ignored, form not submitted");
            return false;
        }

        self.state.clear();
        info!("form reset");
        self.publish(FormEvent::Reset);
        true
    }

    fn publish(
        &self,
        event: FormEvent,
    ) {
        // No subscribers is fine.
        let _ = self.events.send(event);
    }
}
