//! Server-rendered HTML pages.
//!
//! The UI is three small pages (input form, result, history) rendered from
//! string templates. All user-controlled values go through `escape` before
//! they reach markup.

use crate::analyzer::AnalysisResult;
use crate::store::StoredRecord;

const STYLE: &str = r#"
    body { font-family: system-ui, sans-serif; max-width: 760px; margin: 2rem auto; padding: 0 1rem; color: #222; }
    nav a { margin-right: 1rem; }
    textarea { width: 100%; min-height: 180px; font-family: inherit; }
    .error { background: #fde8e8; border: 1px solid #f5b5b5; padding: 0.6rem 1rem; border-radius: 4px; }
    .sentiment { font-weight: bold; }
    .card { border: 1px solid #ddd; border-radius: 6px; padding: 1rem; margin: 1rem 0; }
    table { border-collapse: collapse; width: 100%; }
    th, td { border: 1px solid #ddd; padding: 0.5rem; text-align: left; vertical-align: top; }
"#;

/// Escape text for safe embedding in HTML.
pub fn escape(text: &str) -> String {
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

fn page(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{title} - Samtale</title>
<style>{STYLE}</style>
</head>
<body>
<nav><a href="/">Analyze</a><a href="/history">History</a><a href="/download-csv">Download CSV</a></nav>
<h1>{title}</h1>
{body}
</body>
</html>"#
    )
}

/// Input form, with an optional flashed error message.
pub fn index_page(flash: Option<&str>) -> String {
    let flash_html = match flash {
        Some(msg) => format!(r#"<p class="error">{}</p>"#, escape(msg)),
        None => String::new(),
    };

    let body = format!(
        r#"{flash_html}
<form action="/analyze" method="post" enctype="multipart/form-data">
  <p><label for="transcript">Paste a call transcript:</label></p>
  <p><textarea id="transcript" name="transcript" placeholder="Customer: Hi, I still haven't received my order..."></textarea></p>
  <p><label for="json_file">Or upload a JSON file:</label>
     <input type="file" id="json_file" name="json_file" accept=".json"></p>
  <p><button type="submit">Analyze</button></p>
</form>"#
    );

    page("Call Transcript Analysis", &body)
}

/// Result page for one analysis.
pub fn result_page(result: &AnalysisResult) -> String {
    let body = format!(
        r#"<div class="card"><h2>Summary</h2><p>{summary}</p></div>
<div class="card"><h2>Customer Sentiment</h2><p class="sentiment">{sentiment}</p></div>
<div class="card"><h2>Transcript</h2><p>{transcript}</p></div>
<p><a href="/">Analyze another transcript</a></p>"#,
        summary = escape(&result.summary),
        sentiment = escape(&result.sentiment),
        transcript = escape(&result.transcript),
    );

    page("Analysis Result", &body)
}

/// History page listing the stored records (0 or 1).
pub fn history_page(records: &[StoredRecord]) -> String {
    let body = if records.is_empty() {
        r#"<p>No analysis stored yet. <a href="/">Analyze a transcript</a> to get started.</p>"#
            .to_string()
    } else {
        let rows: String = records
            .iter()
            .map(|r| {
                format!(
                    "<tr><td>{}</td><td>{}</td><td class=\"sentiment\">{}</td></tr>",
                    escape(&r.transcript),
                    escape(&r.summary),
                    escape(&r.sentiment),
                )
            })
            .collect();
        format!(
            r#"<table>
<tr><th>Transcript</th><th>Summary</th><th>Sentiment</th></tr>
{rows}
</table>"#
        )
    };

    page("Analysis History", &body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape() {
        assert_eq!(
            escape(r#"<b>"cut" & 'paste'</b>"#),
            "&lt;b&gt;&quot;cut&quot; &amp; &#39;paste&#39;&lt;/b&gt;"
        );
        assert_eq!(escape("plain text"), "plain text");
    }

    #[test]
    fn test_index_page_renders_flash() {
        let html = index_page(Some("Please enter a transcript"));
        assert!(html.contains("Please enter a transcript"));
        assert!(html.contains("json_file"));

        let html = index_page(None);
        assert!(!html.contains("class=\"error\""));
    }

    #[test]
    fn test_result_page_escapes_model_output() {
        let result = AnalysisResult {
            transcript: "Customer: <script>alert(1)</script>".to_string(),
            summary: "A & B".to_string(),
            sentiment: "Mixed and Neutral".to_string(),
        };
        let html = result_page(&result);
        assert!(!html.contains("<script>alert"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains("A &amp; B"));
        assert!(html.contains("Mixed and Neutral"));
    }

    #[test]
    fn test_history_page_with_and_without_records() {
        assert!(history_page(&[]).contains("No analysis stored yet"));

        let records = vec![StoredRecord {
            transcript: "t".to_string(),
            summary: "s".to_string(),
            sentiment: "Satisfied and Positive".to_string(),
        }];
        let html = history_page(&records);
        assert!(html.contains("Satisfied and Positive"));
        assert!(html.contains("<table>"));
    }
}
