//! Hygiene — enforces coding standards at test time
//!
//! These tests scan the client crate source tree for antipatterns that would
//! crash the page or swallow storage failures. Each has a budget of zero.
//! Test files (`*_test.rs`) are exempt.
#![allow(clippy::absurd_extreme_comparisons)]

use std::fs;
use std::path::Path;

// Panics — these abort the WASM module.
const MAX_UNWRAP: usize = 0;
const MAX_EXPECT: usize = 0;
const MAX_PANIC: usize = 0;
const MAX_TODO: usize = 0;

// Silent loss — discards errors without inspecting.
const MAX_SILENT_DISCARD: usize = 0;
const MAX_DOT_OK: usize = 0;

// Credentials must never reach the console.
const MAX_LOGGED_PASSWORD: usize = 0;

struct SourceFile {
    path: String,
    content: String,
}

/// Collect production `.rs` files from `client/src/`, excluding test files.
fn source_files() -> Vec<SourceFile> {
    let mut files = Vec::new();
    collect_rs_files(Path::new("src"), &mut files);
    files
}

fn collect_rs_files(dir: &Path, out: &mut Vec<SourceFile>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect_rs_files(&path, out);
        } else if path.extension().is_some_and(|e| e == "rs") {
            let path_str = path.to_string_lossy().to_string();
            if path_str.ends_with("_test.rs") {
                continue;
            }
            if let Ok(content) = fs::read_to_string(&path) {
                out.push(SourceFile { path: path_str, content });
            }
        }
    }
}

fn count_in_source(files: &[SourceFile], matches: impl Fn(&str) -> bool) -> Vec<(String, usize)> {
    files
        .iter()
        .filter_map(|file| {
            let count = file.content.lines().filter(|line| matches(line)).count();
            (count > 0).then(|| (file.path.clone(), count))
        })
        .collect()
}

fn total(hits: &[(String, usize)]) -> usize {
    hits.iter().map(|(_, c)| c).sum()
}

fn format_hits(hits: &[(String, usize)]) -> String {
    hits.iter()
        .map(|(path, count)| format!("  {path}: {count}"))
        .collect::<Vec<_>>()
        .join("\n")
}

fn check(name: &str, max: usize, matches: impl Fn(&str) -> bool) {
    let files = source_files();
    assert!(!files.is_empty(), "no sources found; run from the client crate root");
    let hits = count_in_source(&files, matches);
    let count = total(&hits);
    assert!(count <= max, "{name} budget exceeded: found {count}, max {max}.\n{}", format_hits(&hits));
}

#[test]
fn unwrap_budget() {
    check(".unwrap()", MAX_UNWRAP, |line| line.contains(".unwrap()"));
}

#[test]
fn expect_budget() {
    check(".expect()", MAX_EXPECT, |line| line.contains(".expect("));
}

#[test]
fn panic_budget() {
    check("panic!()", MAX_PANIC, |line| line.contains("panic!(") || line.contains("unreachable!("));
}

#[test]
fn todo_budget() {
    check("todo!()", MAX_TODO, |line| line.contains("todo!(") || line.contains("unimplemented!("));
}

#[test]
fn silent_discard_budget() {
    check("let _ =", MAX_SILENT_DISCARD, |line| line.contains("let _ ="));
}

#[test]
fn dot_ok_budget() {
    check(".ok()", MAX_DOT_OK, |line| line.contains(".ok()"));
}

#[test]
fn logged_password_budget() {
    check("logged password", MAX_LOGGED_PASSWORD, |line| {
        line.contains("log::") && line.to_ascii_lowercase().contains("password")
    });
}
