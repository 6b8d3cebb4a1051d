//! Error handling integration tests

mod common;

use common::{INTRO_ARTICLE, TestArticle, configure_cmd_for};
use predicates::prelude::*;

#[test]
fn test_nonexistent_path() {
    let article = TestArticle::new();
    let missing = article.path.join("does-not-exist");

    configure_cmd_for(&missing)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Invalid input"))
        .stderr(predicate::str::contains("does not exist"));

    assert!(!missing.exists());
}

#[test]
fn test_path_is_a_file() {
    let article = TestArticle::with_manifest(INTRO_ARTICLE);

    configure_cmd_for(&article.path.join("article.yml"))
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Invalid input"))
        .stderr(predicate::str::contains("not a directory"));

    assert!(!article.file_exists("myst.yml"));
}

#[test]
fn test_missing_article_manifest() {
    let article = TestArticle::new();

    configure_cmd_for(&article.path)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Article manifest not found"));

    assert!(!article.file_exists("myst.yml"));
}

#[test]
fn test_unreadable_article_manifest() {
    let article = TestArticle::new();
    // article.yml is a directory, so reading it fails with EISDIR
    std::fs::create_dir(article.path.join("article.yml"))
        .expect("Failed to create article.yml directory");

    configure_cmd_for(&article.path)
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Failed to read file"))
        .stderr(predicate::str::contains("article.yml"));

    assert!(!article.file_exists("myst.yml"));
}

#[test]
fn test_corrupted_article_yaml() {
    let article = TestArticle::with_manifest(
        r#"title: "Intro"
subtitle: [unclosed
"#,
    );

    configure_cmd_for(&article.path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse article manifest"));

    assert!(!article.file_exists("myst.yml"));
}

#[test]
fn test_article_is_not_a_mapping() {
    let article = TestArticle::with_manifest("- title\n- subtitle\n");

    configure_cmd_for(&article.path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("expected a mapping"));
}

#[test]
fn test_each_missing_field_fails_before_writing() {
    for field in ["banner", "title", "subtitle", "abstract", "date"] {
        let manifest: String = INTRO_ARTICLE
            .lines()
            .filter(|line| !line.starts_with(&format!("{field}:")))
            .map(|line| format!("{line}\n"))
            .collect();
        let article = TestArticle::with_manifest(&manifest);

        configure_cmd_for(&article.path)
            .assert()
            .failure()
            .code(1)
            .stderr(predicate::str::contains(format!(
                "Missing required field '{field}'"
            )));

        assert!(
            !article.file_exists("myst.yml"),
            "myst.yml written despite missing '{field}'"
        );
    }
}

#[test]
fn test_missing_field_keeps_existing_site_manifest() {
    let article = TestArticle::with_manifest("title: \"Intro\"\n");
    article.write_file("myst.yml", "version: 1\n");

    configure_cmd_for(&article.path).assert().failure();

    assert_eq!(article.read_file("myst.yml"), "version: 1\n");
}

#[test]
fn test_unwritable_site_manifest() {
    let article = TestArticle::with_manifest(INTRO_ARTICLE);
    // A non-empty directory in the way of myst.yml makes the final rename fail
    std::fs::create_dir_all(article.path.join("myst.yml").join("occupied"))
        .expect("Failed to create blocking directory");

    configure_cmd_for(&article.path)
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Failed to write file"));

    assert!(!article.file_exists(".myst.yml.tmp"));
}
