use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use form_data::{ColorLoader, ZipLoader};

/// Validate postal-code and color lookup files.
///
/// Postal-code files may be CSV (`zipcode,city,state`) or JSON
/// (`{"zipcode_data": [...]}`). Color files are a JSON object mapping color
/// name to color code.
#[derive(Parser, Debug)]
#[command(name = "form-data-check")]
#[command(version, about, long_about = None)]
struct Args {
    /// Postal-code table to check
    #[arg(short, long)]
    zips: Option<PathBuf>,

    /// Color table to check
    #[arg(short, long)]
    colors: Option<PathBuf>,

    /// Look up this postal code after loading the table
    #[arg(short, long)]
    lookup: Option<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.zips.is_none() && args.colors.is_none() {
        anyhow::bail!("nothing to check; pass --zips and/or --colors");
    }

    if let Some(path) = &args.zips {
        let table = ZipLoader::load_file(path)
            .with_context(|| format!("Failed to load postal codes: {}", path.display()))?;
        println!("{}: {} postal codes", path.display(), table.len());

        if let Some(zip) = &args.lookup {
            match table.find(zip) {
                Some(record) => println!("{zip} -> {}, {}", record.city, record.state),
                None => println!("{zip} -> no match"),
            }
        }
    }

    if let Some(path) = &args.colors {
        let table = ColorLoader::load_file(path)
            .with_context(|| format!("Failed to load colors: {}", path.display()))?;
        println!("{}: {} colors", path.display(), table.len());
    }

    Ok(())
}
