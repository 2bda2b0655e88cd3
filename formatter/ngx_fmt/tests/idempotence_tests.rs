#![allow(clippy::unwrap_used, clippy::expect_used)]
//! Idempotence verification: `format(format(x)) == format(x)` across fixture
//! files and hand-picked edge-case documents.

use ngx_fmt::{format, FormatOptions};
use pretty_assertions::assert_eq;

const DOCUMENTS: &[&str] = &[
    include_str!("fixtures/messy.conf"),
    include_str!("fixtures/proxy.conf"),
    // Dense one-liners.
    "server{listen 80;location /{root /var/www;}}",
    "events{worker_connections 1024;}http{server{listen 80;}}",
    // Comments, quotes, and structural characters interacting.
    "# top { comment\nserver {\nlog_format x \"a { b } # c\";\n}\n",
    "add_header X \"spaced   out\"; # trailing note",
    // Malformed but processable.
    "}}}",
    "server {\nlisten 80;",
    "broken \"quote here\nlisten 80;",
    "{",
    "",
    "\r\n\r\n\r\n",
    // Whitespace-significant directive.
    "sub_filter \"a   b\"   \"c   d\";",
    // Brace-literal argument tokens.
    "default '{' one;\nmap $a $b { '}' two; }\n",
];

#[test]
fn formatting_is_idempotent() {
    let options = FormatOptions::default();
    for document in DOCUMENTS {
        let once = format(document, &options).unwrap();
        let twice = format(&once, &options).unwrap();
        assert_eq!(once, twice, "not idempotent for {document:?}");
    }
}

#[test]
fn idempotent_without_brace_joining() {
    let options = FormatOptions::without_brace_joining();
    for document in DOCUMENTS {
        let once = format(document, &options).unwrap();
        let twice = format(&once, &options).unwrap();
        assert_eq!(once, twice, "not idempotent for {document:?}");
    }
}

#[test]
fn idempotent_with_tab_indentation() {
    let options = FormatOptions::with_indent_unit("\t");
    for document in DOCUMENTS {
        let once = format(document, &options).unwrap();
        let twice = format(&once, &options).unwrap();
        assert_eq!(once, twice, "not idempotent for {document:?}");
    }
}
