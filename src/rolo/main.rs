use clap::Parser;
use rolo::api::RoloApi;
use rolo::error::Result;
use rolo::store::fs::FileStore;
use std::io::Write;

mod args;
use args::{Cli, Operation};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let request = cli.into_request()?;

    let store = FileStore::new(&request.file_name);
    let mut api = RoloApi::new(store);

    let result = match request.operation {
        Operation::Add { item } => api.add_item(&item)?,
        Operation::List => api.list()?,
        Operation::Remove { id } => api.remove(&id)?,
        Operation::FindById { id } => api.find_by_id(&id)?,
    };

    // Output is raw bytes: list emits file contents verbatim, findById a
    // JSON object, add/remove an informational message or nothing.
    let mut stdout = std::io::stdout();
    stdout.write_all(&result.output)?;
    stdout.flush()?;
    Ok(())
}
