use pathtree::output::{self, OutputFormat};
use pathtree::{pathtree, PathtreeBuilder, PathtreeOptions};
use std::fs;
use std::io::Cursor;
use tempfile::tempdir;
const INPUT: &str = "/usr/bin/env\n/usr/lib/libc.so\n/usr/bin/ls\n/etc/hosts\n";
#[test]
fn integration_full_flow() {
    let options = PathtreeOptions::default();
    let result = pathtree(Cursor::new(INPUT), &options).unwrap();
    assert_eq!(result.paths_read, 4);
    let out = output::format_result(&result, OutputFormat::Tree, &options, false).unwrap();
    assert_eq!(
        out,
        "/\n\
         ├─ usr\n\
         │   ├─ bin\n\
         │   │   ├─ env\n\
         │   │   └─ ls\n\
         │   └─ lib\n\
         │      └─ libc.so\n\
         └─ etc\n\
         \u{20}  └─ hosts\n"
    );
}
#[test]
fn integration_debug_line_comes_first() {
    let options = PathtreeBuilder::new().debug(true).offset_prefix("..").build();
    let result = pathtree(Cursor::new("/a/b\n"), &options).unwrap();
    let out = output::format_result(&result, OutputFormat::Tree, &options, false).unwrap();
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines, vec!["offsetPrefix set to: [..]", "/", "└─ a", "..└─ b"]);
}
#[test]
fn integration_crlf_and_blank_lines() {
    let options = PathtreeOptions::default();
    let result = pathtree(Cursor::new("/a/b\r\n\r\n/a/c\n\n/d"), &options).unwrap();
    assert_eq!(result.paths_read, 5);
    assert_eq!(result.tree.node_count(), 5);
    let out = output::format_result(&result, OutputFormat::Tree, &options, false).unwrap();
    assert!(!out.contains('\r'));
    assert!(out.ends_with("└─ d\n"));
}
#[test]
fn integration_invalid_utf8_is_accepted() {
    let options = PathtreeOptions::default();
    let input: &[u8] = b"/caf\xe9/menu\n";
    let result = pathtree(input, &options).unwrap();
    assert_eq!(result.tree.node_count(), 3);
    assert_eq!(result.tree.root().children()[0].name(), "caf\u{FFFD}");
}
#[test]
fn integration_custom_separator() {
    let options = PathtreeBuilder::new().separator(".").build();
    let result = pathtree(Cursor::new(".com.example.www\n.com.example.api\n"), &options).unwrap();
    let out = output::format_result(&result, OutputFormat::Tree, &options, false).unwrap();
    assert_eq!(
        out,
        "/\n└─ com\n   └─ example\n      ├─ www\n      └─ api\n"
    );
}
#[test]
fn integration_empty_separator_splits_characters() {
    let options = PathtreeBuilder::new().separator("").build();
    let result = pathtree(Cursor::new("/x/y\n"), &options).unwrap();
    let out = output::format_result(&result, OutputFormat::Tree, &options, false).unwrap();
    assert_eq!(out, "/\n└─ x\n   └─ /\n      └─ y\n");
}
#[test]
fn integration_empty_input() {
    let options = PathtreeOptions::default();
    let result = pathtree(Cursor::new(""), &options).unwrap();
    assert_eq!(result.paths_read, 0);
    let out = output::format_result(&result, OutputFormat::Tree, &options, false).unwrap();
    assert_eq!(out, "/\n");
}
#[test]
fn integration_dump_format() {
    let options = PathtreeOptions::default();
    let result = pathtree(Cursor::new("/a/b\n/c\n"), &options).unwrap();
    let out = output::format_result(&result, OutputFormat::Dump, &options, false).unwrap();
    assert_eq!(
        out,
        "depth: 0 > child name: /\n\
         depth: 1 > child name: a\n\
         depth: 2 > child name: b\n\
         depth: 1 > child name: c\n"
    );
}
#[test]
fn integration_json_format() {
    let options = PathtreeOptions::default();
    let result = pathtree(Cursor::new("/a/b\n/c\n"), &options).unwrap();
    let out = output::format_result(&result, OutputFormat::Json, &options, false).unwrap();
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(value["paths_read"], 2);
    assert_eq!(value["tree"]["name"], "/");
    assert_eq!(value["tree"]["children"][0]["children"][0]["name"], "b");
    assert!(value["tree"]["children"][1].get("children").is_none());
}
#[test]
fn integration_write_to_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join(format!("tree.{}", OutputFormat::Tree.extension()));
    let options = PathtreeOptions::default();
    let result = pathtree(Cursor::new(INPUT), &options).unwrap();
    output::write_result_to_file(&result, OutputFormat::Tree, &options, &path, false).unwrap();
    let written = fs::read_to_string(&path).unwrap();
    assert!(written.starts_with("/\n├─ usr\n"));
    assert_eq!(written.lines().count(), result.tree.node_count());
}
#[test]
fn integration_json_matches_serde() {
    let options = PathtreeOptions::default();
    let result = pathtree(Cursor::new(INPUT), &options).unwrap();
    let compact = output::format_result(&result, OutputFormat::Json, &options, false).unwrap();
    assert_eq!(compact, serde_json::to_string(&result).unwrap() + "\n");
    let pretty = output::format_result(&result, OutputFormat::Json, &options, true).unwrap();
    assert_eq!(pretty, serde_json::to_string_pretty(&result).unwrap() + "\n");
}
#[test]
fn integration_debug_line_skipped_for_json() {
    let options = PathtreeBuilder::new().debug(true).build();
    let result = pathtree(Cursor::new("/a/b\n"), &options).unwrap();
    let out = output::format_result(&result, OutputFormat::Json, &options, true).unwrap();
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(value["tree"]["children"][0]["name"], "a");
    let dump = output::format_result(&result, OutputFormat::Dump, &options, false).unwrap();
    assert!(dump.starts_with("offsetPrefix set to: [   ]\n"));
}
#[test]
fn integration_deep_path_every_format() {
    let depth = 200_000;
    let input = format!("{}\n", "/d".repeat(depth));
    let options = PathtreeBuilder::new().offset_prefix("").build();
    let result = pathtree(Cursor::new(input), &options).unwrap();
    assert_eq!(result.tree.node_count(), depth + 1);

    let dump = output::format_result(&result, OutputFormat::Dump, &options, false).unwrap();
    assert_eq!(dump.lines().count(), depth + 1);
    assert!(dump.ends_with(&format!("depth: {} > child name: d\n", depth)));

    let json = output::format_result(&result, OutputFormat::Json, &options, false).unwrap();
    assert!(json.starts_with("{\"tree\":{\"name\":\"/\",\"children\":[{\"name\":\"d\""));
    assert!(json.ends_with("]}]},\"paths_read\":1}\n"));
    drop(result);
}
