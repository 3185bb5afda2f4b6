// Copyright 2026 the Trackify Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Single-page HTML report wrapping one inline SVG per dashboard card.

use std::fmt::Write as _;

use crate::svg::escape_xml;

/// One report section.
#[derive(Debug)]
pub(crate) struct HtmlSection {
    pub(crate) title: &'static str,
    pub(crate) description: &'static str,
    pub(crate) svg: String,
}

pub(crate) fn render_report(title: &str, sections: &[HtmlSection]) -> String {
    let mut out = String::new();
    let title = escape_xml(title);
    let _ = writeln!(out, "<!doctype html>");
    let _ = writeln!(out, r#"<html lang="en"><head><meta charset="utf-8">"#);
    let _ = writeln!(out, "<title>{title}</title>");
    out.push_str(
        "<style>\
         body{font-family:sans-serif;background:#f9fafb;margin:24px;color:#111827}\
         section{margin-bottom:32px}\
         p{color:#4b5563;max-width:40em}\
         </style>\n",
    );
    let _ = writeln!(out, "</head><body>");
    let _ = writeln!(out, "<h1>{title}</h1>");
    for section in sections {
        let _ = writeln!(out, "<section>");
        let _ = writeln!(out, "<h2>{}</h2>", escape_xml(section.title));
        let _ = writeln!(out, "<p>{}</p>", escape_xml(section.description));
        out.push_str(&section.svg);
        let _ = writeln!(out, "</section>");
    }
    let _ = writeln!(out, "</body></html>");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_contains_every_section() {
        let sections = [
            HtmlSection {
                title: "One",
                description: "first & only",
                svg: "<svg/>".to_string(),
            },
            HtmlSection {
                title: "Two",
                description: "second",
                svg: "<svg id=\"two\"/>".to_string(),
            },
        ];
        let html = render_report("Report", &sections);
        assert!(html.contains("<h2>One</h2>"));
        assert!(html.contains("first &amp; only"));
        assert!(html.contains("<svg id=\"two\"/>"));
        assert_eq!(html.matches("<section>").count(), 2);
    }
}
