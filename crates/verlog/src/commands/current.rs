use verlog_core::Target;

use crate::error::Result;

use super::CommandContext;

pub(super) fn run(ctx: &CommandContext) -> Result<()> {
    let record = ctx.load_required()?;

    match &ctx.target {
        Target::Application => println!("Application version: {}", record.short_version()),
        Target::Plugin(name) => {
            println!("Version of plugin '{name}': {}", record.short_version());
        }
    }
    println!("Full version: {}", record.long_version());
    println!("Status: {}", record.status);
    println!("Release date: {}", record.release_date);

    Ok(())
}
