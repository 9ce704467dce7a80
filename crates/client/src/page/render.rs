//! Renderers for `PageState`.
//!
//! Both are pure functions of the page: the same state always renders the
//! same output.

use vinlookup_domain::RecallRecord;

use super::state::{PageState, RecallSection, NO_RECALLS_MESSAGE, RECALL_UNAVAILABLE_MESSAGE};

/// Labeled recall fields, in display order.
fn recall_fields(recall: &RecallRecord) -> [(&'static str, &str); 3] {
    [
        ("NHTSA Campaign Number", recall.campaign_number.as_str()),
        ("Report Received Date", recall.report_received_date.as_str()),
        ("Summary", recall.summary.as_str()),
    ]
}

// =============================================================================
// Plain text
// =============================================================================

/// Render the visible parts of the page as terminal text.
pub fn render_text(page: &PageState) -> String {
    let mut out = String::new();

    if page.spinner_visible() {
        out.push_str("Loading...\n");
    }

    if let Some(message) = page.error_message() {
        out.push_str(&format!("Error: {}\n", message));
    }

    if page.results_visible() {
        out.push_str("Vehicle Details\n");
        for row in page.vehicle_details() {
            out.push_str(&format!("  {}: {}\n", row.label, row.value));
        }

        out.push_str("Safety Recalls\n");
        match page.recall_section() {
            RecallSection::Pending => {}
            RecallSection::Empty => out.push_str(&format!("  {}\n", NO_RECALLS_MESSAGE)),
            RecallSection::Unavailable => {
                out.push_str(&format!("  {}\n", RECALL_UNAVAILABLE_MESSAGE))
            }
            RecallSection::Recalls(recalls) => {
                for recall in recalls {
                    out.push_str(&format!("  == {}\n", recall.component));
                    for (label, value) in recall_fields(recall) {
                        out.push_str(&format!("     {}: {}\n", label, value));
                    }
                }
            }
        }
    }

    out
}

// =============================================================================
// HTML
// =============================================================================

/// Render the page's dynamic containers as an HTML fragment.
///
/// Element ids and the `hidden` class match the lookup form's markup, so the
/// fragment can replace the containers of the static page directly.
pub fn render_html(page: &PageState) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "<div id=\"loading-spinner\"{}></div>\n",
        hidden_attr(!page.spinner_visible())
    ));

    out.push_str(&format!(
        "<div id=\"error-container\"{}><p id=\"error-message\">{}</p></div>\n",
        hidden_attr(page.error_message().is_none()),
        escape_html(page.error_message().unwrap_or_default())
    ));

    out.push_str(&format!(
        "<div id=\"results-container\"{}>\n",
        hidden_attr(!page.results_visible())
    ));

    out.push_str("<div id=\"vehicle-details\">\n");
    for row in page.vehicle_details() {
        out.push_str(&format!(
            "<p><strong>{}:</strong> {}</p>\n",
            row.label,
            escape_html(&row.value)
        ));
    }
    out.push_str("</div>\n");

    out.push_str("<div id=\"recall-details\">\n");
    match page.recall_section() {
        RecallSection::Pending => {}
        RecallSection::Empty => out.push_str(&format!("<p>{}</p>\n", NO_RECALLS_MESSAGE)),
        RecallSection::Unavailable => {
            out.push_str(&format!("<p>{}</p>\n", RECALL_UNAVAILABLE_MESSAGE))
        }
        RecallSection::Recalls(recalls) => {
            for recall in recalls {
                out.push_str("<div class=\"recall-item\">\n");
                out.push_str(&format!("<h4>{}</h4>\n", escape_html(&recall.component)));
                for (label, value) in recall_fields(recall) {
                    out.push_str(&format!(
                        "<p><strong>{}:</strong> {}</p>\n",
                        label,
                        escape_html(value)
                    ));
                }
                out.push_str("</div>\n");
            }
        }
    }
    out.push_str("</div>\n");

    out.push_str("</div>\n");
    out
}

fn hidden_attr(hidden: bool) -> &'static str {
    if hidden {
        " class=\"hidden\""
    } else {
        ""
    }
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
