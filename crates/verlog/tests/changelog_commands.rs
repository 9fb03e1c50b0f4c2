use std::fs;

use predicates::str::contains;
use tempfile::TempDir;

fn create_project() -> TempDir {
    TempDir::new().expect("failed to create temp dir")
}

/// Initialize the application and open a changelog entry per version.
fn create_initialized_project(versions: &[&str]) -> TempDir {
    let dir = create_project();

    assert_cmd::cargo::cargo_bin_cmd!("verlog")
        .arg("init")
        .arg("--defaults")
        .current_dir(dir.path())
        .assert()
        .success();

    for version in versions {
        assert_cmd::cargo::cargo_bin_cmd!("verlog")
            .arg("set")
            .arg(version)
            .arg("-m")
            .arg(format!("Release {version}"))
            .current_dir(dir.path())
            .assert()
            .success();
    }

    dir
}

mod add {
    use super::*;

    #[test]
    fn add_change_to_an_existing_version() {
        let project = create_initialized_project(&["1.0.0"]);

        assert_cmd::cargo::cargo_bin_cmd!("verlog")
            .arg("changelog")
            .arg("1.0.0")
            .arg("add")
            .arg("-c")
            .arg("added")
            .arg("-t")
            .arg("New blog module")
            .current_dir(project.path())
            .assert()
            .success()
            .stdout(contains("Change added to the changelog of version 1.0.0"));

        assert_cmd::cargo::cargo_bin_cmd!("verlog")
            .arg("view")
            .arg("1.0.0")
            .current_dir(project.path())
            .assert()
            .success()
            .stdout(contains("Added:"))
            .stdout(contains("- New blog module"));
    }

    #[test]
    fn add_to_unknown_version_fails() {
        let project = create_initialized_project(&["1.0.0"]);

        assert_cmd::cargo::cargo_bin_cmd!("verlog")
            .arg("changelog")
            .arg("9.9.9")
            .arg("add")
            .arg("-c")
            .arg("fixed")
            .arg("-t")
            .arg("A fix")
            .current_dir(project.path())
            .assert()
            .failure()
            .stderr(contains("version '9.9.9' is not present in the changelog"));
    }

    #[test]
    fn add_requires_initialization() {
        let project = create_project();

        assert_cmd::cargo::cargo_bin_cmd!("verlog")
            .arg("changelog")
            .arg("1.0.0")
            .arg("add")
            .arg("-c")
            .arg("fixed")
            .arg("-t")
            .arg("A fix")
            .current_dir(project.path())
            .assert()
            .failure()
            .stderr(contains("not initialized"));
    }
}

mod describe_and_date {
    use super::*;

    #[test]
    fn describe_replaces_the_entry_description() {
        let project = create_initialized_project(&["1.0.0"]);

        assert_cmd::cargo::cargo_bin_cmd!("verlog")
            .arg("changelog")
            .arg("1.0.0")
            .arg("describe")
            .arg("Revised release notes")
            .current_dir(project.path())
            .assert()
            .success()
            .stdout(contains("Description updated for version 1.0.0"));

        assert_cmd::cargo::cargo_bin_cmd!("verlog")
            .arg("history")
            .current_dir(project.path())
            .assert()
            .success()
            .stdout(contains("Revised release notes"));
    }

    #[test]
    fn date_sets_the_entry_release_date() {
        let project = create_initialized_project(&["1.0.0"]);

        assert_cmd::cargo::cargo_bin_cmd!("verlog")
            .arg("changelog")
            .arg("1.0.0")
            .arg("date")
            .arg("25/12/2026")
            .current_dir(project.path())
            .assert()
            .success()
            .stdout(contains("Release date set for version 1.0.0: 25/12/2026"));

        assert_cmd::cargo::cargo_bin_cmd!("verlog")
            .arg("view")
            .arg("1.0.0")
            .current_dir(project.path())
            .assert()
            .success()
            .stdout(contains("Version 1.0.0 - 25/12/2026"));
    }

    #[test]
    fn date_rejects_iso_format() {
        let project = create_initialized_project(&["1.0.0"]);

        assert_cmd::cargo::cargo_bin_cmd!("verlog")
            .arg("changelog")
            .arg("1.0.0")
            .arg("date")
            .arg("2026-12-25")
            .current_dir(project.path())
            .assert()
            .failure()
            .stderr(contains("expected DD/MM/YYYY"));
    }

    #[test]
    fn date_rejects_unpadded_days() {
        let project = create_initialized_project(&["1.0.0"]);

        assert_cmd::cargo::cargo_bin_cmd!("verlog")
            .arg("changelog")
            .arg("1.0.0")
            .arg("date")
            .arg("1/1/2026")
            .current_dir(project.path())
            .assert()
            .failure()
            .stderr(contains("expected DD/MM/YYYY"));
    }

    #[test]
    fn date_rejects_impossible_calendar_dates() {
        let project = create_initialized_project(&["1.0.0"]);

        assert_cmd::cargo::cargo_bin_cmd!("verlog")
            .arg("changelog")
            .arg("1.0.0")
            .arg("date")
            .arg("31/02/2026")
            .current_dir(project.path())
            .assert()
            .failure()
            .stderr(contains("invalid date"));
    }
}

mod view_and_history {
    use super::*;

    #[test]
    fn view_without_entries_fails() {
        let project = create_initialized_project(&[]);

        assert_cmd::cargo::cargo_bin_cmd!("verlog")
            .arg("view")
            .current_dir(project.path())
            .assert()
            .failure()
            .stderr(contains("no changelog entries recorded"));
    }

    #[test]
    fn view_unknown_version_fails() {
        let project = create_initialized_project(&["1.0.0"]);

        assert_cmd::cargo::cargo_bin_cmd!("verlog")
            .arg("view")
            .arg("3.0.0")
            .current_dir(project.path())
            .assert()
            .failure()
            .stderr(contains("version '3.0.0' is not present in the changelog"));
    }

    #[test]
    fn view_lists_all_versions_newest_first() {
        let project = create_initialized_project(&["1.0.0", "1.1.0", "1.2.0"]);

        let assert = assert_cmd::cargo::cargo_bin_cmd!("verlog")
            .arg("view")
            .current_dir(project.path())
            .assert()
            .success();

        let stdout = String::from_utf8_lossy(&assert.get_output().stdout).to_string();
        let pos = |needle: &str| stdout.find(needle).expect("version section missing");
        assert!(pos("Version 1.2.0") < pos("Version 1.1.0"));
        assert!(pos("Version 1.1.0") < pos("Version 1.0.0"));
    }

    #[test]
    fn history_shows_change_counts_and_descriptions() {
        let project = create_initialized_project(&["1.0.0"]);

        assert_cmd::cargo::cargo_bin_cmd!("verlog")
            .arg("changelog")
            .arg("1.0.0")
            .arg("add")
            .arg("-c")
            .arg("fixed")
            .arg("-t")
            .arg("A fix")
            .current_dir(project.path())
            .assert()
            .success();

        assert_cmd::cargo::cargo_bin_cmd!("verlog")
            .arg("history")
            .current_dir(project.path())
            .assert()
            .success()
            .stdout(contains("Version history for the application"))
            .stdout(contains("1 change(s) - Release 1.0.0"));
    }

    #[test]
    fn changelog_show_prints_the_entry() {
        let project = create_initialized_project(&["1.0.0"]);

        assert_cmd::cargo::cargo_bin_cmd!("verlog")
            .arg("changelog")
            .arg("1.0.0")
            .arg("show")
            .current_dir(project.path())
            .assert()
            .success()
            .stdout(contains("Version 1.0.0"))
            .stdout(contains("Description: Release 1.0.0"));
    }
}

mod export {
    use super::*;

    #[test]
    fn export_without_entries_fails() {
        let project = create_initialized_project(&[]);

        assert_cmd::cargo::cargo_bin_cmd!("verlog")
            .arg("export")
            .current_dir(project.path())
            .assert()
            .failure()
            .stderr(contains("no changelog entries recorded"));
    }

    #[test]
    fn export_writes_markdown_sections_newest_first() {
        let project = create_initialized_project(&["1.0.0", "1.1.0"]);

        assert_cmd::cargo::cargo_bin_cmd!("verlog")
            .arg("changelog")
            .arg("1.1.0")
            .arg("add")
            .arg("-c")
            .arg("added")
            .arg("-t")
            .arg("Comment support")
            .current_dir(project.path())
            .assert()
            .success();

        assert_cmd::cargo::cargo_bin_cmd!("verlog")
            .arg("export")
            .current_dir(project.path())
            .assert()
            .success()
            .stdout(contains("Changelog exported:"));

        let markdown = fs::read_to_string(project.path().join("CHANGELOG.md"))
            .expect("changelog missing");
        assert!(markdown.starts_with("# Changelog - My Application"));
        assert!(markdown.contains("### Added"));
        assert!(markdown.contains("- Comment support"));

        let pos = |needle: &str| markdown.find(needle).expect("section missing");
        assert!(pos("## [1.1.0]") < pos("## [1.0.0]"));
    }

    #[test]
    fn export_for_a_plugin_writes_inside_the_plugin_dir() {
        let project = create_project();

        assert_cmd::cargo::cargo_bin_cmd!("verlog")
            .arg("init")
            .arg("--defaults")
            .arg("-p")
            .arg("Blog")
            .current_dir(project.path())
            .assert()
            .success();

        assert_cmd::cargo::cargo_bin_cmd!("verlog")
            .arg("bump")
            .arg("patch")
            .arg("-m")
            .arg("Fixes")
            .arg("-p")
            .arg("Blog")
            .current_dir(project.path())
            .assert()
            .success();

        assert_cmd::cargo::cargo_bin_cmd!("verlog")
            .arg("export")
            .arg("-p")
            .arg("Blog")
            .current_dir(project.path())
            .assert()
            .success();

        let markdown = fs::read_to_string(project.path().join("plugins/Blog/CHANGELOG.md"))
            .expect("plugin changelog missing");
        assert!(markdown.starts_with("# Changelog - Blog"));
        assert!(markdown.contains("## [1.0.1]"));
    }
}
