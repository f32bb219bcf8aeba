//! Form state, validation, and submit lifecycle for the personal details form.

pub mod codec;
pub mod config;
pub mod controller;
pub mod location;
pub mod models;
pub mod reveal;
pub mod timer;
pub mod validation;

pub use codec::{CodecError, decode_snapshot, encode_snapshot};
pub use config::FormConfig;
pub use controller::{FormController, FormEvent, PendingSubmit, Phase, SubmitError};
pub use location::{Location, derive_location};
pub use models::*;
pub use reveal::{Reveal, RevealLog};
pub use validation::Validation;
