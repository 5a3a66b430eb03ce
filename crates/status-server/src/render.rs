// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Status page rendering.
//!
//! ```text
//! OK /some/path
//!
//! uptime:  8m20s
//! load:    0.10 0.20 0.30 1/200 1234
//! mem:     1109 MiB / 3871 MiB (28%)
//! ```
//!
//! A failed metric shows its error message in place of the value; the
//! other lines are unaffected.

use host_metrics::HostReport;
use std::fmt;

/// Prefix that makes browsers show the body as preformatted text.
const HTML_PREFIX: &str = "<!DOCTYPE html><pre>";

/// The status page for one request, rendered through [`fmt::Display`].
pub struct StatusPage<'a> {
    pub request_path: &'a str,
    pub report: &'a HostReport,
}

impl fmt::Display for StatusPage<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "OK {}", self.request_path)?;
        writeln!(f)?;
        writeln!(f, "uptime:  {}", HostReport::display(&self.report.uptime))?;
        writeln!(f, "load:    {}", HostReport::display(&self.report.load))?;
        writeln!(f, "mem:     {}", HostReport::display(&self.report.memory))
    }
}

/// Renders the page as plain text.
pub fn render_text(request_path: &str, report: &HostReport) -> String {
    StatusPage {
        request_path,
        report,
    }
    .to_string()
}

/// Renders the page as an HTML document wrapping the plain text in `<pre>`.
///
/// Everything after the prefix is escaped: the request path is
/// client-controlled.
pub fn render_html(request_path: &str, report: &HostReport) -> String {
    let text = render_text(request_path, report);
    let mut page = String::with_capacity(HTML_PREFIX.len() + text.len());
    page.push_str(HTML_PREFIX);
    push_escaped(&mut page, &text);
    page
}

/// Body sent with a redirect to `target` on `GET`.
pub fn redirect_body(target: &str) -> String {
    let mut body = String::from("<a href=\"");
    push_escaped(&mut body, target);
    body.push_str("\">Found</a>.\n\n");
    body
}

fn push_escaped(out: &mut String, text: &str) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
}
