mod field;
mod form_state;
mod gender;
mod lookup;
mod snapshot;

pub use field::Field;
pub use form_state::FormState;
pub use gender::GenderChoice;
pub use lookup::{ColorTable, ZipRecord, ZipTable};
pub use snapshot::FormSnapshot;
