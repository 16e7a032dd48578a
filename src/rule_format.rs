//! Line-oriented rule table format
//!
//! Each line describes one rule:
//!
//! ```text
//! <count> <category> <direction> <tag> <tag> ...
//! ```
//!
//! `count` is the number of tags plus two, `direction` is `1` for a
//! left-to-right search and anything else for right-to-left. A category may
//! appear on several lines; its rules are tried in file order. Blank lines
//! and lines starting with `#` are ignored.
//!
//! Tables loaded from this format fall back to the rightmost child when a
//! category is missing.

use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

use crate::rules::{MatchMode, MissingRule, Rule, RuleTable, RuleTableError, TraversalMode};

/// Read a rule table from a file
pub fn load_rules(path: &Path, match_mode: MatchMode) -> Result<RuleTable, RuleTableError> {
    let file = File::open(path)?;
    read_rules(BufReader::new(file), match_mode)
}

/// Read a rule table from a string
pub fn parse_rules(text: &str, match_mode: MatchMode) -> Result<RuleTable, RuleTableError> {
    read_rules(text.as_bytes(), match_mode)
}

/// Read a rule table from any buffered reader
pub fn read_rules<R: BufRead>(reader: R, match_mode: MatchMode) -> Result<RuleTable, RuleTableError> {
    let mut table = RuleTable::new(match_mode)
        .with_missing_rule(MissingRule::Default(Rule::new(TraversalMode::Right, Vec::new())));

    for (idx, line) in reader.lines().enumerate() {
        let line_num = idx + 1;
        let line = line?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let (category, rule) = parse_line(line, line_num, &table)?;
        table.push_rule(category, rule);
    }

    Ok(table)
}

fn parse_line<'a>(
    line: &'a str,
    line_num: usize,
    table: &RuleTable,
) -> Result<(&'a str, Rule), RuleTableError> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() < 3 {
        return Err(RuleTableError::Format {
            line_num,
            message: format!("expected at least 3 fields, got {}", fields.len()),
        });
    }

    let count: usize = fields[0].parse().map_err(|_| RuleTableError::Format {
        line_num,
        message: format!("invalid rule count: {}", fields[0]),
    })?;
    let tags = &fields[3..];
    if count != tags.len() + 2 {
        return Err(RuleTableError::Format {
            line_num,
            message: format!("rule count {} does not match {} tags", count, tags.len()),
        });
    }

    let category = fields[1];
    let mode = if fields[2] == "1" {
        TraversalMode::Left
    } else {
        TraversalMode::Right
    };

    let rule = table.compile_rule(category, mode, tags)?;
    Ok((category, rule))
}

/// Write a table in the line format
///
/// Categories are written in sorted order. Only `left` and `right` rules can
/// be expressed; any other mode is an error.
pub fn write_rules<W: Write>(table: &RuleTable, mut writer: W) -> Result<(), RuleTableError> {
    for (category, rules) in table.entries() {
        for rule in rules {
            let direction = match rule.mode {
                TraversalMode::Left => "1",
                TraversalMode::Right => "0",
                mode => {
                    return Err(RuleTableError::Unserializable {
                        category: category.to_string(),
                        mode,
                    });
                }
            };
            write!(writer, "{} {} {}", rule.candidates.len() + 2, category, direction)?;
            for candidate in &rule.candidates {
                write!(writer, " {}", candidate.as_str())?;
            }
            writeln!(writer)?;
        }
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const RULES: &str = "\
# Spanish constituents
4 SN 0 NC NP
3 SN 1 SN

5 GRUP.VERB 1 V GRUP.VERB S
2 COORD 0
";

    #[test]
    fn test_parse_rules() {
        let table = parse_rules(RULES, MatchMode::Prefix).unwrap();

        assert_eq!(table.len(), 3);
        let sn = table.lookup("SN").unwrap();
        assert_eq!(sn.len(), 2);
        assert_eq!(sn[0].mode, TraversalMode::Right);
        assert_eq!(sn[1].mode, TraversalMode::Left);
        assert!(sn[0].matches_any("NCFS000"));
        assert!(table.lookup("COORD").unwrap()[0].candidates.is_empty());
        assert_eq!(
            *table.missing_rule(),
            MissingRule::Default(Rule::new(TraversalMode::Right, Vec::new()))
        );
    }

    #[test]
    fn test_bad_lines_report_line_numbers() {
        match parse_rules("3 SN 1 SN\n4 SN 1 NC\n", MatchMode::Exact) {
            Err(RuleTableError::Format { line_num, .. }) => assert_eq!(line_num, 2),
            other => panic!("Expected format error, got {:?}", other),
        }
        assert!(matches!(
            parse_rules("x SN 1 NC\n", MatchMode::Exact),
            Err(RuleTableError::Format { line_num: 1, .. })
        ));
        assert!(matches!(
            parse_rules("2 SN\n", MatchMode::Exact),
            Err(RuleTableError::Format { .. })
        ));
    }

    #[test]
    fn test_write_rules_round_trip() {
        let table = parse_rules(RULES, MatchMode::Exact).unwrap();
        let mut out = Vec::new();
        write_rules(&table, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert_eq!(
            text,
            "2 COORD 0\n5 GRUP.VERB 1 V GRUP.VERB S\n4 SN 0 NC NP\n3 SN 1 SN\n"
        );
        let reloaded = parse_rules(&text, MatchMode::Exact).unwrap();
        assert_eq!(reloaded.lookup("SN"), table.lookup("SN"));
    }

    #[test]
    fn test_write_rejects_other_modes() {
        let table = crate::rules::english::collins().unwrap();
        assert!(matches!(
            write_rules(&table, Vec::new()),
            Err(RuleTableError::Unserializable { .. })
        ));
    }

    #[test]
    fn test_load_rules_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("heads.txt");
        std::fs::write(&path, RULES).unwrap();

        let table = load_rules(&path, MatchMode::Exact).unwrap();
        assert_eq!(table.len(), 3);
        assert!(matches!(
            load_rules(&dir.path().join("missing.txt"), MatchMode::Exact),
            Err(RuleTableError::Io(_))
        ));
    }
}
