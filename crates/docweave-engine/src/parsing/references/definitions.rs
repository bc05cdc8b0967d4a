use std::sync::OnceLock;

use regex::Regex;

use crate::parsing::inline::kinds::Link;

/// `[^id]: text`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FootnoteDefinition<'a> {
    pub id: &'a str,
    pub text: &'a str,
}

/// `[label]: url "title"`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinkDefinitionLine<'a> {
    pub label: &'a str,
    pub url: &'a str,
    pub title: Option<&'a str>,
}

impl<'a> FootnoteDefinition<'a> {
    pub fn parse(line: &'a str) -> Option<Self> {
        static FOOTNOTE_DEF: OnceLock<Regex> = OnceLock::new();
        let re = FOOTNOTE_DEF.get_or_init(|| {
            Regex::new(r"^ {0,3}\[\^([^\]\s]+)\]:[ \t]*(.*)$").expect("Invalid footnote regex")
        });

        let caps = re.captures(line)?;
        Some(Self {
            id: caps.get(1)?.as_str(),
            text: caps.get(2)?.as_str().trim_end(),
        })
    }
}

impl<'a> LinkDefinitionLine<'a> {
    pub fn parse(line: &'a str) -> Option<Self> {
        static LINK_DEF: OnceLock<Regex> = OnceLock::new();
        let re = LINK_DEF.get_or_init(|| {
            Regex::new(r"^ {0,3}\[([^\]\^][^\]]*)\]:[ \t]*(\S.*)$")
                .expect("Invalid link definition regex")
        });

        let caps = re.captures(line)?;
        let label = caps.get(1)?.as_str();
        if label.trim().is_empty() {
            return None;
        }
        let (url, title) = Link::split_destination(caps.get(2)?.as_str())?;
        if url.is_empty() {
            return None;
        }
        Some(Self { label, url, title })
    }
}
