//! Tests for task classification and host filtering

use relcheck::classify::{classify, Category, Glyph};
use relcheck::parser::parse_checklist;

const HOST: &str = "web1";

#[test]
fn untagged_undone_task_is_mandatory_and_blocking() {
    // Scenario A
    let lines = parse_checklist("- [ ] Run migrations");
    let result = classify(&lines, HOST);

    assert_eq!(result.tasks.len(), 1);
    assert_eq!(result.tasks[0].category, Category::Mandatory);
    assert!(!result.tasks[0].done);
    assert_eq!(result.blocking, vec!["Run migrations"]);
    assert!(result.pending_post_release.is_empty());
}

#[test]
fn post_release_task_without_host_tag_is_excluded() {
    // Scenario B: the tag list is non-empty, so host filtering applies even
    // though the only tag is the category marker.
    let lines = parse_checklist("- [x] Run migrations\n- [ ] Notify support [post-release]");
    let result = classify(&lines, HOST);

    assert_eq!(result.tasks.len(), 1);
    assert_eq!(result.tasks[0].description, "Run migrations");
    assert!(result.blocking.is_empty());
    assert!(result.pending_post_release.is_empty());
}

#[test]
fn post_release_task_with_host_tag_is_pending() {
    // Scenario C
    let lines = parse_checklist("- [ ] Flush cache [web1, post-release]");
    let result = classify(&lines, HOST);

    assert_eq!(result.tasks.len(), 1);
    assert_eq!(result.tasks[0].category, Category::PostRelease);
    assert!(result.blocking.is_empty());
    assert_eq!(result.pending_post_release.len(), 1);
    assert_eq!(result.pending_post_release[0].description, "Flush cache");
    assert_eq!(result.pending_post_release[0].glyph, Glyph::Deferred);
}

#[test]
fn task_tagged_for_other_host_is_excluded_everywhere() {
    // Scenario D
    let lines = parse_checklist("- [ ] Internal note [web2]");
    let result = classify(&lines, HOST);

    assert!(result.tasks.is_empty());
    assert!(result.blocking.is_empty());
    assert!(result.pending_post_release.is_empty());
}

#[test]
fn done_tasks_appear_as_rows_but_in_no_derived_set() {
    let lines = parse_checklist("- [x] Run migrations\n- [x] Flush cache [web1, post-release]");
    let result = classify(&lines, HOST);

    assert_eq!(result.tasks.len(), 2);
    assert!(result.tasks.iter().all(|t| t.done));
    assert!(result.blocking.is_empty());
    assert!(result.pending_post_release.is_empty());
}

#[test]
fn glyphs_follow_done_and_category() {
    let lines = parse_checklist(
        "- [x] Done task\n- [ ] Blocking task\n- [ ] Deferred task [web1, post-release]",
    );
    let result = classify(&lines, HOST);

    let glyphs: Vec<Glyph> = result.tasks.iter().map(relcheck::classify::Task::glyph).collect();
    assert_eq!(glyphs, vec![Glyph::Done, Glyph::Blocking, Glyph::Deferred]);
}

#[test]
fn tags_are_trimmed_before_matching() {
    let lines = parse_checklist("- [ ] Flush cache [ web1 ,  post-release ]");
    let result = classify(&lines, HOST);

    assert_eq!(result.tasks.len(), 1);
    assert_eq!(result.tasks[0].category, Category::PostRelease);
}

#[test]
fn post_release_marker_is_case_sensitive() {
    // Host tag keeps the line applicable; the miscased marker is just
    // another tag, so the task stays mandatory.
    let lines = parse_checklist("- [ ] Flush cache [web1, Post-Release]");
    let result = classify(&lines, HOST);

    assert_eq!(result.tasks[0].category, Category::Mandatory);
    assert_eq!(result.blocking, vec!["Flush cache"]);
}

#[test]
fn whitespace_only_tag_string_means_no_tags() {
    let lines = parse_checklist("- [ ] Run migrations [   ]");
    let result = classify(&lines, HOST);

    assert_eq!(result.tasks.len(), 1);
    assert_eq!(result.tasks[0].category, Category::Mandatory);
}

#[test]
fn blocking_preserves_parse_order() {
    let lines = parse_checklist("- [ ] First\n- [x] Middle\n- [ ] Last");
    let result = classify(&lines, HOST);

    assert_eq!(result.blocking, vec!["First", "Last"]);
}

#[test]
fn host_filtering_happens_before_category_routing() {
    // An undone mandatory task for another host must not block this one.
    let lines = parse_checklist("- [ ] Rotate keys [web2]\n- [ ] Run migrations [web1]");
    let result = classify(&lines, HOST);

    assert_eq!(result.blocking, vec!["Run migrations"]);
    assert_eq!(result.tasks.len(), 1);
}

#[test]
fn empty_input_classifies_to_empty_sets() {
    let result = classify(&[], HOST);
    assert!(result.tasks.is_empty());
    assert!(result.blocking.is_empty());
    assert!(result.pending_post_release.is_empty());
}
