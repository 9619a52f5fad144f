use std::fs;
use std::path::PathBuf;

use clap::Args;

use promousetuner::api::TunerState;
use promousetuner::error::TnResult;

#[derive(Args, Debug, Clone)]
pub struct ExportArgs {
    /// Destination file; stdout when omitted
    #[arg(short, long)]
    pub out: Option<PathBuf>,
}

#[derive(Args, Debug, Clone)]
pub struct ImportArgs {
    /// Bundle file produced by `export`
    #[arg(short, long)]
    pub file: PathBuf,
}

pub fn export(args: ExportArgs, state: &TunerState) -> TnResult<()> {
    let json = state.store().export_json(state.user())?;
    match args.out {
        Some(path) => {
            fs::write(&path, json)?;
            println!("📦 Exported to {}", path.display());
        }
        None => println!("{json}"),
    }
    Ok(())
}

pub fn import(args: ImportArgs, state: &TunerState) -> TnResult<()> {
    let data = fs::read_to_string(&args.file)?;
    state.store().import_json(&data, state.user())?;
    println!("📥 Imported {}", args.file.display());
    println!("(restart to pick up the imported records)");
    Ok(())
}

pub fn clear(state: &TunerState) -> TnResult<()> {
    state.store().clear(state.user())?;
    println!("🧹 Stored records removed.");
    Ok(())
}
