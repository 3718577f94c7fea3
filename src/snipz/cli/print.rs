use colored::*;
use snipz::commands::{CmdMessage, MessageLevel};
use snipz::model::Snippet;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const TITLE_WIDTH: usize = 48;
const COLUMN_SEP: &str = " | ";

pub fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
        }
    }
}

pub fn print_snippet_table(snippets: &[Snippet]) {
    if snippets.is_empty() {
        return;
    }
    let table = render_snippet_table(snippets);
    let mut lines = table.lines();
    if let Some(header) = lines.next() {
        println!("{}", header.bold());
    }
    for line in lines {
        println!("{}", line);
    }
}

pub fn print_full_snippets(snippets: &[Snippet], body_only: bool) {
    for (i, snippet) in snippets.iter().enumerate() {
        if i > 0 && !body_only {
            println!();
        }
        if body_only {
            print!("{}", snippet.body);
        } else {
            print!("{}", render_full_snippet(snippet));
        }
    }
}

/// `UID | Title | Tags`, one row per snippet. Titles wider than
/// `TITLE_WIDTH` columns are cut with an ellipsis.
pub fn render_snippet_table(snippets: &[Snippet]) -> String {
    let uid_width = snippets
        .iter()
        .map(|s| s.uid.width())
        .chain(std::iter::once("UID".width()))
        .max()
        .unwrap_or(0);

    let titles: Vec<String> = snippets
        .iter()
        .map(|s| truncate_to_width(&single_line(s.title()), TITLE_WIDTH))
        .collect();
    let title_width = titles
        .iter()
        .map(|t| t.width())
        .chain(std::iter::once("Title".width()))
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    out.push_str(&row("UID", uid_width, "Title", title_width, "Tags"));
    for (snippet, title) in snippets.iter().zip(&titles) {
        out.push_str(&row(
            &snippet.uid,
            uid_width,
            title,
            title_width,
            &snippet.tags().join(", "),
        ));
    }
    out
}

fn row(uid: &str, uid_width: usize, title: &str, title_width: usize, tags: &str) -> String {
    let line = [
        pad_to_width(uid, uid_width),
        pad_to_width(title, title_width),
        tags.to_string(),
    ]
    .join(COLUMN_SEP);
    format!("{}\n", line.trim_end())
}

/// The snippet as it sits on disk, with the front matter highlighted.
pub fn render_full_snippet(snippet: &Snippet) -> String {
    let marker = "---".dimmed();
    let mut out = String::new();
    out.push_str(&format!("{}\n", marker));
    out.push_str(&format!("{} {}\n", "id:".cyan(), snippet.uid.yellow()));
    out.push_str(&format!("{} {}\n", "title:".cyan(), snippet.title().bold()));
    if !snippet.tags().is_empty() {
        out.push_str(&format!("{}\n", "tags:".cyan()));
        for tag in snippet.tags() {
            out.push_str(&format!("- {}\n", tag.green()));
        }
    }
    out.push_str(&format!("{}\n", marker));
    out.push_str(&snippet.body);
    if !snippet.body.is_empty() && !snippet.body.ends_with('\n') {
        out.push('\n');
    }
    out
}

fn single_line(s: &str) -> String {
    s.replace(['\n', '\r'], " ")
}

fn pad_to_width(s: &str, width: usize) -> String {
    format!("{}{}", s, " ".repeat(width.saturating_sub(s.width())))
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snippet(uid: &str, title: &str, tags: &[&str]) -> Snippet {
        Snippet::new(uid, title, tags.iter().map(|t| t.to_string()).collect())
    }

    #[test]
    fn truncate_keeps_exact_fit() {
        assert_eq!(truncate_to_width("abcd", 4), "abcd");
        assert_eq!(truncate_to_width("abcde", 4), "abc…");
        assert_eq!(truncate_to_width("", 4), "");
    }

    #[test]
    fn truncate_counts_wide_chars() {
        // each CJK char is two columns
        assert_eq!(truncate_to_width("日本語テキスト", 6), "日本…");
        assert!(truncate_to_width("日本語テキスト", 6).width() <= 6);
    }

    #[test]
    fn table_aligns_columns() {
        let table = render_snippet_table(&[
            snippet("aaaa", "Kernel version", &["linux", "kernel"]),
            snippet("b", "日本", &[]),
        ]);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "UID  | Title          | Tags");
        assert_eq!(lines[1], "aaaa | Kernel version | linux, kernel");
        assert_eq!(lines[2], "b    | 日本           |");
    }

    #[test]
    fn table_truncates_long_titles() {
        let long = "x".repeat(TITLE_WIDTH + 10);
        let table = render_snippet_table(&[snippet("id", &long, &[])]);
        let row = table.lines().nth(1).unwrap();
        assert!(row.contains('…'));
        assert!(!row.contains(&long));
    }

    #[test]
    fn table_flattens_multiline_titles() {
        let table = render_snippet_table(&[snippet("id", "two\nlines", &[])]);
        assert_eq!(table.lines().count(), 2);
    }

    #[test]
    fn full_snippet_shows_front_matter_and_body() {
        colored::control::set_override(false);
        let s = snippet("id-1", "Kernel version", &["linux", "kernel"]).with_body("uname -r");
        assert_eq!(
            render_full_snippet(&s),
            "---\nid: id-1\ntitle: Kernel version\ntags:\n- linux\n- kernel\n---\nuname -r\n"
        );
    }
}
