//! Lookup datasets compiled into the binary, used when no data file is
//! configured.

use form_core::{ColorTable, ZipTable};

use crate::{ColorLoader, DataLoadError, ZipLoader};

const ZIPCODES_JSON: &str = include_str!("../data/zipcodes.json");
const COLORS_JSON: &str = include_str!("../data/colors.json");

pub fn default_zip_table() -> Result<ZipTable, DataLoadError> {
    ZipLoader::parse_json(ZIPCODES_JSON.as_bytes())
}

pub fn default_color_table() -> Result<ColorTable, DataLoadError> {
    ColorLoader::parse_json(COLORS_JSON.as_bytes())
}
