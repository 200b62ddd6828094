// Dweve MM - Container Markup Compiler
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Attribute grammar for bracketed groups.
//!
//! A group is one `[...]` run. Two shapes exist:
//!
//! ```text
//! [Name]            single attribute, no value (header only)
//! [Name:value]      single attribute
//! [Name=value]      single attribute, `=` and `:` are interchangeable
//! [Name:A=1,B=2]    multi attribute: name, then comma separated pairs
//! [Name=def,A=1]    multi attribute whose first segment is a default value
//! ```
//!
//! A group with two or more separators in total is a multi-attribute group.
//! Header groups (the line before `{`) may omit the value of the first
//! attribute; body groups may not.

use crate::error::{MmError, MmResult};

/// A single `name`/`value` pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    pub name: String,
    pub value: String,
}

impl Attribute {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

#[inline]
fn is_separator(c: char) -> bool {
    c == ':' || c == '='
}

#[inline]
fn is_quote(c: char) -> bool {
    c == '"' || c == '\''
}

/// Parse one bracketed group into its attribute pairs.
///
/// The first pair always carries the group's name. The result is never
/// empty.
pub fn parse_group(group: &str, header: bool) -> MmResult<Vec<Attribute>> {
    parse_group_inner(group, header)
        .map_err(|e| e.wrap(format!("Unexpected error in attribute: '{}'.", group)).with_context(group))
}

fn parse_group_inner(group: &str, header: bool) -> MmResult<Vec<Attribute>> {
    if group.trim().is_empty() {
        return Err(MmError::syntax("Syntax error: expected a attribute."));
    }
    if !group.starts_with('[') {
        return Err(MmError::syntax("Syntax error: expected a attribute opener."));
    }

    if group.chars().filter(|&c| is_separator(c)).nth(1).is_some() {
        parse_multi(group)
    } else {
        Ok(vec![scan_pair(&group[1..], header)?])
    }
}

/// Multi-attribute group: `[name<sep>seg,seg,...]`.
fn parse_multi(group: &str) -> MmResult<Vec<Attribute>> {
    let sep = group
        .find(is_separator)
        .ok_or_else(|| MmError::syntax("Syntax error: expected a separator."))?;

    let name = &group[1..sep];
    if name.trim().is_empty() {
        return Err(MmError::syntax("Null error: name missing."));
    }
    if name.contains(is_quote) {
        return Err(MmError::syntax("Syntax error: expected a separator."));
    }

    let rest = &group[sep + 1..];
    let body = rest.find(']').map_or(rest, |end| &rest[..end]);

    let mut result = vec![Attribute::new(name, "")];
    for (index, segment) in body.split(',').enumerate() {
        if segment.contains(is_separator) {
            result.push(scan_pair(segment, false)?);
        } else if index == 0 {
            result[0].value = strip_quotes(segment);
        } else {
            return Err(MmError::syntax("Syntax error: expected a separator."));
        }
    }

    Ok(result)
}

/// Scan `name<sep>value` from the start of `text`.
///
/// The name stops at a separator or bracket; the value stops at `,` or `]`.
fn scan_pair(text: &str, header: bool) -> MmResult<Attribute> {
    let name_end = text
        .find(|c: char| is_separator(c) || c == '[' || c == ']')
        .unwrap_or(text.len());
    let name = &text[..name_end];

    if name.contains(is_quote) {
        return Err(MmError::syntax("Syntax error: expected a separator."));
    }
    if name.trim().is_empty() {
        return Err(MmError::syntax("Null error: name missing."));
    }

    // Skip whichever character ended the name.
    let value_start = text[name_end..]
        .chars()
        .next()
        .map_or(name_end, |c| name_end + c.len_utf8());
    let value_text = &text[value_start..];
    let value_end = value_text.find([',', ']']).unwrap_or(value_text.len());
    let value = strip_quotes(&value_text[..value_end]);

    if !header && value.trim().is_empty() {
        return Err(MmError::syntax("Null error: value missing."));
    }

    Ok(Attribute::new(name, value))
}

fn strip_quotes(text: &str) -> String {
    text.chars().filter(|&c| !is_quote(c)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MmErrorKind;

    fn pairs(group: &str, header: bool) -> Vec<(String, String)> {
        parse_group(group, header)
            .unwrap()
            .into_iter()
            .map(|a| (a.name, a.value))
            .collect()
    }

    fn p(name: &str, value: &str) -> (String, String) {
        (name.to_string(), value.to_string())
    }

    fn root_message(group: &str, header: bool) -> String {
        parse_group(group, header).unwrap_err().root_cause().message.clone()
    }

    // ==================== Single attribute tests ====================

    #[test]
    fn test_single_colon() {
        assert_eq!(pairs("[Foo:bar]", true), vec![p("Foo", "bar")]);
    }

    #[test]
    fn test_single_equals() {
        assert_eq!(pairs("[Key=1]", false), vec![p("Key", "1")]);
    }

    #[test]
    fn test_header_without_value() {
        assert_eq!(pairs("[Root]", true), vec![p("Root", "")]);
    }

    #[test]
    fn test_body_without_value_fails() {
        assert_eq!(root_message("[Root]", false), "Null error: value missing.");
        assert_eq!(root_message("[Key=]", false), "Null error: value missing.");
    }

    #[test]
    fn test_value_quotes_dropped() {
        assert_eq!(pairs("[Path='a/b']", false), vec![p("Path", "a/b")]);
    }

    #[test]
    fn test_value_stops_at_comma() {
        assert_eq!(pairs("[Key=1,rest]", false), vec![p("Key", "1")]);
    }

    #[test]
    fn test_value_without_closing_bracket() {
        assert_eq!(pairs("[Key=1", false), vec![p("Key", "1")]);
    }

    // ==================== Multi attribute tests ====================

    #[test]
    fn test_multi_with_default() {
        assert_eq!(
            pairs("[Tag=1,Other=2]", false),
            vec![p("Tag", "1"), p("Other", "2")]
        );
    }

    #[test]
    fn test_multi_without_default() {
        assert_eq!(
            pairs("[Name:A=1,B=2]", true),
            vec![p("Name", ""), p("A", "1"), p("B", "2")]
        );
    }

    #[test]
    fn test_multi_mixed_separators() {
        assert_eq!(
            pairs("[Item:A:1,B=2]", false),
            vec![p("Item", ""), p("A", "1"), p("B", "2")]
        );
    }

    #[test]
    fn test_multi_earliest_separator_wins() {
        // `=` comes before `:`, so the name is `N`.
        assert_eq!(
            pairs("[N=x,K:v]", false),
            vec![p("N", "x"), p("K", "v")]
        );
    }

    #[test]
    fn test_multi_two_separators_in_one_value() {
        assert_eq!(pairs("[Time=12:30]", false), vec![p("Time", ""), p("12", "30")]);
    }

    #[test]
    fn test_multi_segment_without_separator_fails() {
        assert_eq!(
            root_message("[Tag=1,Other=2,loose]", false),
            "Syntax error: expected a separator."
        );
    }

    #[test]
    fn test_multi_missing_value_fails() {
        assert_eq!(root_message("[Tag:A=1,B=]", true), "Null error: value missing.");
    }

    #[test]
    fn test_multi_missing_name_fails() {
        assert_eq!(root_message("[:A=1,B=2]", false), "Null error: name missing.");
    }

    // ==================== Syntax error tests ====================

    #[test]
    fn test_blank_input() {
        assert_eq!(root_message("", true), "Syntax error: expected a attribute.");
        assert_eq!(root_message("   ", true), "Syntax error: expected a attribute.");
    }

    #[test]
    fn test_missing_opener() {
        assert_eq!(
            root_message("Key=1]", false),
            "Syntax error: expected a attribute opener."
        );
    }

    #[test]
    fn test_quote_in_name() {
        assert_eq!(
            root_message("[K'ey=1]", false),
            "Syntax error: expected a separator."
        );
    }

    #[test]
    fn test_missing_name() {
        assert_eq!(root_message("[=1]", false), "Null error: name missing.");
        assert_eq!(root_message("[]", true), "Null error: name missing.");
    }

    #[test]
    fn test_error_carries_group_text() {
        let err = parse_group("[=1]", false).unwrap_err();
        assert_eq!(err.kind, MmErrorKind::Syntax);
        assert_eq!(err.context.as_deref(), Some("[=1]"));
        assert!(err.to_string().contains("Unexpected error in attribute: '[=1]'."));
    }
}
