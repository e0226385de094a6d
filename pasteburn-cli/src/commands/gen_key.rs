//! Gen-key command - print a fresh random access key

use anyhow::Result;
use pasteburn_client::AccessKey;

use crate::ui;

pub fn run(verbose: bool) -> Result<()> {
    let key = AccessKey::generate();

    if verbose {
        ui::info("Share this key with the reader over a separate channel.");
    }
    println!("{}", key.as_str());
    Ok(())
}
