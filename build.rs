use std::path::Path;
extern crate rustsourcebundler;
use rustsourcebundler::Bundler;

// Bundles the bot binary and the library into one file for submission.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut bundler: Bundler =
        Bundler::new(Path::new("src/bin/main.rs"), Path::new("src/bin/merged.rs"));
    bundler.crate_name("podracer");
    bundler.run();
    Ok(())
}
