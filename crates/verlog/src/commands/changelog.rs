use verlog_changelog::ChangelogError;
use verlog_core::ChangeCategory;

use crate::error::Result;
use crate::interaction::Prompter;
use crate::output;

use super::{ChangelogAction, ChangelogArgs, CommandContext};

pub(super) fn run(ctx: &CommandContext, args: ChangelogArgs) -> Result<()> {
    let mut record = ctx.load_required()?;

    let version = match args.version {
        Some(version) => version,
        None => ctx
            .prompter
            .input("Version", Some(&record.short_version()))?,
    };

    let action = match args.action {
        Some(action) => action,
        None => prompt_action(ctx.prompter.as_ref())?,
    };

    match action {
        ChangelogAction::Add { category, text } => {
            if !record.changelog.contains_key(&version) {
                return Err(ChangelogError::VersionNotFound { version }.into());
            }

            let category = match category {
                Some(category) => category,
                None => prompt_category(ctx.prompter.as_ref())?,
            };
            let text = match text {
                Some(text) => text,
                None => ctx.prompter.input("Change description", None)?,
            };

            verlog_changelog::append_change(&mut record, &version, category, &text)?;
            ctx.store.save(&ctx.target, &record)?;
            println!("Change added to the changelog of version {version}");
        }
        ChangelogAction::Describe { text } => {
            let current = record
                .changelog
                .get(&version)
                .ok_or_else(|| ChangelogError::VersionNotFound {
                    version: version.clone(),
                })?
                .description
                .clone();

            let text = match text {
                Some(text) => text,
                None => ctx
                    .prompter
                    .input(&format!("New description for {version}"), Some(&current))?,
            };

            verlog_changelog::set_description(&mut record, &version, &text)?;
            ctx.store.save(&ctx.target, &record)?;
            println!("Description updated for version {version}");
        }
        ChangelogAction::Date { date } => {
            verlog_changelog::set_release_date(&mut record, &version, &date)?;
            ctx.store.save(&ctx.target, &record)?;
            println!("Release date set for version {version}: {date}");
        }
        ChangelogAction::Show => {
            let entry = record.changelog.get(&version).ok_or_else(|| {
                ChangelogError::VersionNotFound {
                    version: version.clone(),
                }
            })?;
            output::print_entry(&version, entry);
        }
    }

    Ok(())
}

fn prompt_action(prompter: &dyn Prompter) -> Result<ChangelogAction> {
    let items = [
        "add a change line",
        "edit the description",
        "set the release date",
        "show the entry",
    ];
    let selected = prompter.select("Action", &items, 0)?;

    Ok(match selected {
        1 => ChangelogAction::Describe { text: None },
        2 => {
            let date = prompter.input("Release date (DD/MM/YYYY)", None)?;
            ChangelogAction::Date { date }
        }
        3 => ChangelogAction::Show,
        _ => ChangelogAction::Add {
            category: None,
            text: None,
        },
    })
}

fn prompt_category(prompter: &dyn Prompter) -> Result<ChangeCategory> {
    let categories: Vec<String> = ChangeCategory::ALL.iter().map(ToString::to_string).collect();
    let labels: Vec<&str> = categories.iter().map(String::as_str).collect();
    let selected = prompter.select("Change category", &labels, 0)?;

    Ok(ChangeCategory::ALL
        .get(selected)
        .copied()
        .unwrap_or_default())
}
