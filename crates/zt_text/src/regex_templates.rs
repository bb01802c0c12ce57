//! Regex template library.
//!
//! Each template carries the JavaScript literal users copy into their code
//! and an equivalent matcher for trying inputs here.

use std::collections::HashMap;
use std::sync::OnceLock;

use regex::Regex;
use serde::Serialize;

use crate::error::{TextError, TextResult};

/// A named, ready-to-copy regular expression.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct RegexTemplate {
    pub key: &'static str,
    pub label: &'static str,
    /// JavaScript literal form, flags included.
    pub pattern: &'static str,
}

/// Rust patterns backing each template. Every pattern in a list must match.
/// Digit classes and word boundaries are ASCII, as in the JavaScript form.
const MATCHERS: &[(&str, &[&str])] = &[
    ("username", &[r"^[a-z0-9_-]{3,15}$"]),
    ("email", &[r"^[A-Za-z0-9_.-]+@([A-Za-z0-9_-]+\.)+[A-Za-z0-9_-]{2,4}$"]),
    (
        "ipv4",
        &[r"^((?-u:\b)25[0-5]|(?-u:\b)2[0-4][0-9]|(?-u:\b)[01]?[0-9][0-9]?)(\.(25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?)){3}$"],
    ),
    (
        "ipv6",
        &[r"^(([0-9a-fA-F]{1,4}:){7}[0-9a-fA-F]{1,4}|([0-9a-fA-F]{1,4}:){1,7}:|([0-9a-fA-F]{1,4}:){1,6}:[0-9a-fA-F]{1,4}|([0-9a-fA-F]{1,4}:){1,5}(:[0-9a-fA-F]{1,4}){1,2}|([0-9a-fA-F]{1,4}:){1,4}(:[0-9a-fA-F]{1,4}){1,3}|([0-9a-fA-F]{1,4}:){1,3}(:[0-9a-fA-F]{1,4}){1,4}|([0-9a-fA-F]{1,4}:){1,2}(:[0-9a-fA-F]{1,4}){1,5}|[0-9a-fA-F]{1,4}:((:[0-9a-fA-F]{1,4}){1,6})|:((:[0-9a-fA-F]{1,4}){1,7}|:)|fe80:(:[0-9a-fA-F]{0,4}){0,4}%[0-9a-zA-Z]+|::(ffff(:0{1,4})?:)?((25[0-5]|(2[0-4]|1?[0-9])?[0-9])\.){3}(25[0-5]|(2[0-4]|1?[0-9])?[0-9])|([0-9a-fA-F]{1,4}:){1,4}:((25[0-5]|(2[0-4]|1?[0-9])?[0-9])\.){3}(25[0-5]|(2[0-4]|1?[0-9])?[0-9]))$"],
    ),
    (
        "port",
        &[r"^((6553[0-5])|(655[0-2][0-9])|(65[0-4][0-9]{2})|(6[0-4][0-9]{3})|([1-5][0-9]{4})|([0-5]{0,5})|([0-9]{1,4}))$"],
    ),
    ("mac", &[r"^[a-fA-F0-9]{2}(:[a-fA-F0-9]{2}){5}$"]),
    (
        "url",
        &[r"^https?://(www\.)?[-a-zA-Z0-9@:%._+~#=]{1,256}\.[a-zA-Z0-9()]{1,6}(?-u:\b)([-a-zA-Z0-9()!@:%_+.~#?&/=]*)$"],
    ),
    ("phone", &[r"^[+]?[(]?[0-9]{3}[)]?[-\s.]?[0-9]{3}[-\s.]?[0-9]{4,6}$"]),
    (
        "emoji",
        &[r"^(\x{00a9}|\x{00ae}|[\x{2000}-\x{3300}]|[\x{1F000}-\x{1FBFF}])$"],
    ),
    (
        "password",
        &[r"[A-Z]", r"[a-z]", r"[0-9]", r"[#?!@$ %^&*-]", r"^.{8,}$"],
    ),
    (
        "credit-card",
        &[r"(^4[0-9]{12}(?:[0-9]{3})?$)|(^(?:5[1-5][0-9]{2}|222[1-9]|22[3-9][0-9]|2[3-6][0-9]{2}|27[01][0-9]|2720)[0-9]{12}$)|(3[47][0-9]{13})|(^3(?:0[0-5]|[68][0-9])[0-9]{11}$)|(^6(?:011|5[0-9]{2})[0-9]{12}$)|(^(?:2131|1800|35[0-9]{3})[0-9]{11}$)"],
    ),
    ("gps", &[r"^((-?|\+?)?[0-9]+(\.[0-9]+)?),\s*((-?|\+?)?[0-9]+(\.[0-9]+)?)$"]),
];

static TEMPLATES: [RegexTemplate; 12] = [
    RegexTemplate {
        key: "username",
        label: "Username",
        pattern: r"/^[a-z0-9_-]{3,15}$/g",
    },
    RegexTemplate {
        key: "email",
        label: "Email",
        pattern: r"/^[\w-.]+@([\w-]+\.)+[\w-]{2,4}$/g",
    },
    RegexTemplate {
        key: "ipv4",
        label: "IP Address v4",
        pattern: r"/^(\b25[0-5]|\b2[0-4][0-9]|\b[01]?[0-9][0-9]?)(\.(25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?)){3}$/g",
    },
    RegexTemplate {
        key: "ipv6",
        label: "IP Address v6",
        pattern: r"/^(([0-9a-fA-F]{1,4}:){7}[0-9a-fA-F]{1,4}|([0-9a-fA-F]{1,4}:){1,7}:|([0-9a-fA-F]{1,4}:){1,6}:[0-9a-fA-F]{1,4}|([0-9a-fA-F]{1,4}:){1,5}(:[0-9a-fA-F]{1,4}){1,2}|([0-9a-fA-F]{1,4}:){1,4}(:[0-9a-fA-F]{1,4}){1,3}|([0-9a-fA-F]{1,4}:){1,3}(:[0-9a-fA-F]{1,4}){1,4}|([0-9a-fA-F]{1,4}:){1,2}(:[0-9a-fA-F]{1,4}){1,5}|[0-9a-fA-F]{1,4}:((:[0-9a-fA-F]{1,4}){1,6})|:((:[0-9a-fA-F]{1,4}){1,7}|:)|fe80:(:[0-9a-fA-F]{0,4}){0,4}%[0-9a-zA-Z]+|::(ffff(:0{1,4})?:)?((25[0-5]|(2[0-4]|1?[0-9])?[0-9])\.){3}(25[0-5]|(2[0-4]|1?[0-9])?[0-9])|([0-9a-fA-F]{1,4}:){1,4}:((25[0-5]|(2[0-4]|1?[0-9])?[0-9])\.){3}(25[0-5]|(2[0-4]|1?[0-9])?[0-9]))$/g",
    },
    RegexTemplate {
        key: "port",
        label: "Port Number",
        pattern: r"/^((6553[0-5])|(655[0-2][0-9])|(65[0-4][0-9]{2})|(6[0-4][0-9]{3})|([1-5][0-9]{4})|([0-5]{0,5})|([0-9]{1,4}))$/g",
    },
    RegexTemplate {
        key: "mac",
        label: "MAC Address",
        pattern: r"/^[a-fA-F0-9]{2}(:[a-fA-F0-9]{2}){5}$/g",
    },
    RegexTemplate {
        key: "url",
        label: "URL",
        pattern: r"/^https?:\/\/(www\.)?[-a-zA-Z0-9@:%._+~#=]{1,256}\.[a-zA-Z0-9()]{1,6}\b([-a-zA-Z0-9()!@:%_+.~#?&/=]*)$/g",
    },
    RegexTemplate {
        key: "phone",
        label: "Phone Number",
        pattern: r"/^[+]?[(]?[0-9]{3}[)]?[-\s.]?[0-9]{3}[-\s.]?[0-9]{4,6}$/g",
    },
    RegexTemplate {
        key: "emoji",
        label: "Emoji",
        pattern: r"/^(\u00a9|\u00ae|[\u2000-\u3300]|\ud83c[\ud000-\udfff]|\ud83d[\ud000-\udfff]|\ud83e[\ud000-\udfff])$/g",
    },
    RegexTemplate {
        key: "password",
        label: "Strong Password",
        pattern: r"/^(?=.*?[A-Z])(?=.*?[a-z])(?=.*?[0-9])(?=.*?[#?!@$ %^&*-]).{8,}$/g",
    },
    RegexTemplate {
        key: "credit-card",
        label: "Credit Card",
        pattern: r"/(^4[0-9]{12}(?:[0-9]{3})?$)|(^(?:5[1-5][0-9]{2}|222[1-9]|22[3-9][0-9]|2[3-6][0-9]{2}|27[01][0-9]|2720)[0-9]{12}$)|(3[47][0-9]{13})|(^3(?:0[0-5]|[68][0-9])[0-9]{11}$)|(^6(?:011|5[0-9]{2})[0-9]{12}$)|(^(?:2131|1800|35\d{3})\d{11}$)/g",
    },
    RegexTemplate {
        key: "gps",
        label: "GPS Long Lat",
        pattern: r"/^((-?|\+?)?\d+(\.\d+)?),\s*((-?|\+?)?\d+(\.\d+)?)$/g",
    },
];

fn matchers() -> &'static HashMap<&'static str, Vec<Regex>> {
    static COMPILED: OnceLock<HashMap<&'static str, Vec<Regex>>> = OnceLock::new();
    COMPILED.get_or_init(|| {
        MATCHERS
            .iter()
            .map(|(key, patterns)| {
                let compiled = patterns
                    .iter()
                    .map(|p| Regex::new(p).expect("valid template regex"))
                    .collect();
                (*key, compiled)
            })
            .collect()
    })
}

impl RegexTemplate {
    /// Whether `input` satisfies the template.
    pub fn is_match(&self, input: &str) -> bool {
        matchers()
            .get(self.key)
            .map_or(false, |all| all.iter().all(|re| re.is_match(input)))
    }
}

/// All templates in display order.
pub fn templates() -> &'static [RegexTemplate] {
    &TEMPLATES
}

pub fn template_keys() -> Vec<&'static str> {
    TEMPLATES.iter().map(|t| t.key).collect()
}

/// Look up a template by key.
pub fn find_template(key: &str) -> TextResult<&'static RegexTemplate> {
    TEMPLATES
        .iter()
        .find(|t| t.key == key)
        .ok_or_else(|| TextError::UnknownTemplate(key.to_string()))
}

/// Test `input` against a user-supplied Rust regular expression.
pub fn test_pattern(pattern: &str, input: &str) -> TextResult<bool> {
    Ok(Regex::new(pattern)?.is_match(input))
}
