use verlog_core::{DevStatus, VersionRecord};

use crate::error::{CliError, Result};
use crate::interaction::Prompter;

use super::{CommandContext, InitArgs, write_changelog};

pub(super) fn run(ctx: &CommandContext, args: &InitArgs) -> Result<()> {
    if ctx.store.exists(&ctx.target) && !args.force {
        if args.defaults {
            return Err(CliError::AlreadyInitialized(ctx.target.clone()));
        }
        let overwrite = ctx.prompter.confirm(
            &format!(
                "A version file already exists for {}. Reinitialize?",
                ctx.target
            ),
            false,
        )?;
        if !overwrite {
            println!("Aborted; existing version file kept.");
            return Ok(());
        }
    }

    println!("Initializing version system for {}", ctx.target);

    let default_product = ctx
        .target
        .plugin_name()
        .unwrap_or("My Application")
        .to_string();
    let record = if args.defaults {
        VersionRecord::new(default_product)
    } else {
        prompt_record(ctx.prompter.as_ref(), &default_product)?
    };

    ctx.store.save(&ctx.target, &record)?;
    write_changelog(ctx, &ctx.target, &record)?;

    println!(
        "Version system initialized for {}: {}",
        ctx.target,
        record.short_version()
    );

    Ok(())
}

fn prompt_record(prompter: &dyn Prompter, default_product: &str) -> Result<VersionRecord> {
    let mut record = VersionRecord::new(default_product);

    record.product = prompter.input("Product name", Some(default_product))?;
    record.major = prompter.input_number("Major version", 1)?;
    record.minor = prompter.input_number("Minor version", 0)?;
    record.patch = prompter.input_number("Patch version", 0)?;
    record.extra = prompter.input("Extra version (dev, beta, rc1, ...)", Some(""))?;

    let statuses: Vec<String> = DevStatus::ALL.iter().map(ToString::to_string).collect();
    let labels: Vec<&str> = statuses.iter().map(String::as_str).collect();
    let selected = prompter.select("Development status", &labels, 0)?;
    record.status = DevStatus::ALL.get(selected).copied().unwrap_or_default();

    record.codename = prompter.input("Codename", Some("Phoenix"))?;
    let default_copyright = record.copyright.clone();
    record.copyright = prompter.input("Copyright", Some(&default_copyright))?;

    Ok(record)
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use verlog_core::Target;
    use verlog_store::VersionStore;

    use crate::interaction::scripted::ScriptedPrompter;

    use super::*;

    fn context(dir: &TempDir, prompter: ScriptedPrompter) -> CommandContext {
        CommandContext {
            store: VersionStore::new(dir.path()),
            target: Target::Plugin("Blog".to_string()),
            prompter: Box::new(prompter),
        }
    }

    #[test]
    fn interactive_init_uses_prompted_values() {
        let dir = TempDir::new().expect("failed to create temp dir");
        let prompter = ScriptedPrompter::with_inputs(["BlogEngine", "rc1", "Nimbus"])
            .queue_numbers([2, 3, 4])
            .queue_selections([2]);
        let ctx = context(&dir, prompter);

        run(
            &ctx,
            &InitArgs {
                defaults: false,
                force: false,
            },
        )
        .expect("init failed");

        let record = ctx.store.load(&ctx.target).expect("record missing");
        assert_eq!(record.product, "BlogEngine");
        assert_eq!(record.short_version(), "2.3.4-rc1");
        assert_eq!(record.status, DevStatus::Beta);
        assert_eq!(record.codename, "Nimbus");
        assert!(dir.path().join("plugins/Blog/CHANGELOG.md").is_file());
    }

    #[test]
    fn declining_overwrite_keeps_existing_record() {
        let dir = TempDir::new().expect("failed to create temp dir");
        let ctx = context(&dir, ScriptedPrompter::default());
        let existing = VersionRecord::new("Original");
        ctx.store.save(&ctx.target, &existing).expect("seed failed");

        // Confirm queue is empty, so the prompt falls back to "no".
        run(
            &ctx,
            &InitArgs {
                defaults: false,
                force: false,
            },
        )
        .expect("init failed");

        let record = ctx.store.load(&ctx.target).expect("record missing");
        assert_eq!(record.product, "Original");
    }

    #[test]
    fn accepting_overwrite_reinitializes() {
        let dir = TempDir::new().expect("failed to create temp dir");
        let prompter = ScriptedPrompter::with_inputs(["Rewritten"]).queue_confirms([true]);
        let ctx = context(&dir, prompter);
        ctx.store
            .save(&ctx.target, &VersionRecord::new("Original"))
            .expect("seed failed");

        run(
            &ctx,
            &InitArgs {
                defaults: false,
                force: false,
            },
        )
        .expect("init failed");

        let record = ctx.store.load(&ctx.target).expect("record missing");
        assert_eq!(record.product, "Rewritten");
    }

    #[test]
    fn defaults_on_initialized_target_errors_without_force() {
        let dir = TempDir::new().expect("failed to create temp dir");
        let ctx = context(&dir, ScriptedPrompter::default());
        ctx.store
            .save(&ctx.target, &VersionRecord::new("Original"))
            .expect("seed failed");

        let result = run(
            &ctx,
            &InitArgs {
                defaults: true,
                force: false,
            },
        );

        assert!(matches!(result, Err(CliError::AlreadyInitialized(_))));
    }

    #[test]
    fn defaults_with_force_overwrites() {
        let dir = TempDir::new().expect("failed to create temp dir");
        let ctx = context(&dir, ScriptedPrompter::default());
        ctx.store
            .save(&ctx.target, &VersionRecord::new("Original"))
            .expect("seed failed");

        run(
            &ctx,
            &InitArgs {
                defaults: true,
                force: true,
            },
        )
        .expect("init failed");

        let record = ctx.store.load(&ctx.target).expect("record missing");
        assert_eq!(record.product, "Blog");
        assert_eq!(record.short_version(), "1.0.0");
    }
}
