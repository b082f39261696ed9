mod common;

use common::TestContext;
use predicates::prelude::*;

#[test]
fn custom_profile_redefines_the_directive_vocabulary() {
    let ctx = TestContext::new();
    ctx.write_default_config();
    ctx.write_config(
        "dev-app.yml",
        concat!(
            "app_prompt:\n  base_dir: prompts\n",
            "app_schema:\n  base_dir: schema\n",
            "params:\n  two:\n    directive_type:\n      pattern: \"^(web|api)$\"\n",
        ),
    );
    ctx.write_file("prompts/web/issue/f_issue.md", "web prompt");

    // Valid under the dev profile.
    ctx.cli()
        .args(["web", "issue", "-c", "dev", "-o", "out.md"])
        .assert()
        .success()
        .stdout(predicate::str::contains("web prompt"));

    // Invalid under the default profile.
    ctx.cli()
        .args(["web", "issue", "-o", "out.md"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid directive 'web'"));
}

#[test]
fn user_file_overrides_app_file_base_dir() {
    let ctx = TestContext::new();
    ctx.write_config("default-app.yml", "app_prompt:\n  base_dir: prompts\n");
    ctx.write_config("default-user.yml", "app_prompt:\n  base_dir: my-prompts\n");
    ctx.write_file("my-prompts/to/issue/f_issue.md", "from the user dir");

    ctx.cli()
        .args(["to", "issue", "-o", "out.md"])
        .assert()
        .success()
        .stdout(predicate::str::contains("from the user dir"));
}

#[test]
fn missing_config_files_fall_back_to_defaults() {
    let ctx = TestContext::new();
    ctx.write_file(".taskdown/prompts/to/issue/f_issue.md", "default locations");

    ctx.cli()
        .args(["to", "issue", "-o", "out.md"])
        .assert()
        .success()
        .stdout(predicate::str::contains("default locations"));
}

#[test]
fn custom_layer_tokens_drive_inference() {
    let ctx = TestContext::new();
    ctx.write_config(
        "default-app.yml",
        concat!(
            "app_prompt:\n  base_dir: prompts\n",
            "app_schema:\n  base_dir: schema\n",
            "params:\n  two:\n",
            "    layer_type:\n",
            "      pattern: \"^(epic|story)$\"\n",
            "      tokens: [epic, story]\n",
        ),
    );
    ctx.write_file("prompts/to/epic/f_story.md", "story template");

    ctx.cli()
        .args(["to", "epic", "-f", "backlog/story_412.md", "-o", "out.md"])
        .assert()
        .success()
        .stdout(predicate::str::contains("story template"));
}

#[test]
fn disabled_pattern_surfaces_as_missing_pattern() {
    let ctx = TestContext::new();
    ctx.write_config(
        "default-app.yml",
        "params:\n  two:\n    layer_type:\n      pattern: \"\"\n",
    );

    ctx.cli()
        .args(["to", "issue"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No usable layer pattern"));
}
