use super::models::{Item, Labeled, Tickable};
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

pub fn load_items(file_path: impl AsRef<Path>) -> Result<Vec<Item>> {
    let file_path = file_path.as_ref();
    let content = fs::read_to_string(file_path)
        .with_context(|| format!("Failed to read item file: {}", file_path.display()))?;
    Ok(parse_items(&content))
}

pub fn parse_items(content: &str) -> Vec<Item> {
    let mut items = Vec::new();
    let mut in_yaml_frontmatter = false;

    for (line_number, line) in content.lines().enumerate() {
        // Front matter is only recognised at the top of the file
        if line.trim() == "---" && (line_number == 0 || in_yaml_frontmatter) {
            in_yaml_frontmatter = !in_yaml_frontmatter;
            continue;
        }
        if in_yaml_frontmatter {
            continue;
        }

        if let Some(item) = parse_line(line) {
            items.push(item);
        }
    }

    items
}

fn parse_line(line: &str) -> Option<Item> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.chars().all(|c| c == '-') {
        return None;
    }

    if let Some((ticked, name)) = extract_checkbox(trimmed) {
        if name.is_empty() {
            return None;
        }
        return Some(Item::new(name, ticked));
    }

    let name = trimmed
        .strip_prefix("- ")
        .or_else(|| trimmed.strip_prefix("* "))
        .unwrap_or(trimmed)
        .trim();
    if name.is_empty() {
        return None;
    }
    Some(Item::new(name, false))
}

// "- [ ] name", "- [x] name" or "- [X] name"
fn extract_checkbox(line: &str) -> Option<(bool, &str)> {
    let rest = line
        .strip_prefix("- [")
        .or_else(|| line.strip_prefix("* ["))?;
    let mut chars = rest.chars();
    let mark = chars.next()?;
    let rest = chars.as_str().strip_prefix(']')?;

    let ticked = match mark {
        ' ' => false,
        'x' | 'X' => true,
        _ => return None,
    };

    Some((ticked, rest.trim()))
}

/// Names of the ticked items, one per line.
pub fn format_selection<T: Tickable + Labeled>(items: &[T]) -> String {
    items
        .iter()
        .filter(|item| item.is_ticked())
        .map(|item| format!("{}\n", item.label()))
        .collect()
}
