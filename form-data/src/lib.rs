//! Loaders for the read-only lookup tables behind the form: postal codes and
//! colors.

mod bundled;
mod loader;

pub use bundled::{default_color_table, default_zip_table};
pub use loader::{ColorLoader, DataFormat, DataLoadError, ZipLoader};
