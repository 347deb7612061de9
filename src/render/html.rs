//! render::html
//!
//! HTML pages following the `go-import` / `go-source` meta tag convention.

use std::fmt::Write;

use super::{IndexContext, Renderer};
use crate::core::types::PackageRecord;

const INDEX_STYLE: &str = "        body {
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, Oxygen, Ubuntu, Cantarell, 'Open Sans', 'Helvetica Neue', sans-serif;
            max-width: 800px;
            margin: 0 auto;
            padding: 2rem;
            line-height: 1.6;
        }
        .package-list {
            margin-top: 2rem;
        }
        .package-item {
            margin-bottom: 1.5rem;
            padding: 1rem;
            border: 1px solid #eee;
            border-radius: 4px;
        }
        .package-item h3 {
            margin: 0 0 0.5rem 0;
        }
        .package-item p {
            margin: 0.5rem 0;
            color: #666;
        }
        code {
            background: #f5f5f5;
            padding: 0.2rem 0.4rem;
            border-radius: 3px;
            font-size: 0.9em;
        }
";

/// [`Renderer`] producing HTML documents.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlRenderer;

impl Renderer for HtmlRenderer {
    fn render_import_page(&self, record: &PackageRecord) -> Vec<u8> {
        render_import_page(record)
    }

    fn render_index_page(&self, ctx: &IndexContext, records: &[PackageRecord]) -> Vec<u8> {
        render_index_page(ctx, records)
    }
}

/// Escape text for use in HTML element content and quoted attributes.
///
/// # Example
///
/// ```
/// use govanity::render::escape_html;
///
/// assert_eq!(escape_html("a<b & \"c\""), "a&lt;b &amp; &#34;c&#34;");
/// ```
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&#34;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

/// Render the redirect page for one import path.
///
/// The page carries three meta tags: `go-import` (VCS root), `go-source`
/// (browsable source links) and a zero-delay refresh to the repository.
pub fn render_import_page(record: &PackageRecord) -> Vec<u8> {
    let path = escape_html(&record.import_path);
    let url = escape_html(&record.repo_url);
    let branch = escape_html(&record.branch);

    let mut page = String::new();
    // Writing to a String cannot fail.
    let _ = write!(
        page,
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <meta name="go-import" content="{path} git {url}">
    <meta name="go-source" content="{path} {url} {url}/tree/{branch}{{/dir}} {url}/blob/{branch}{{/dir}}/{{file}}#L{{line}}">
    <meta http-equiv="refresh" content="0; url={url}">
</head>
<body>
    Redirecting to <a href="{url}">{url}</a>...
</body>
</html>
"#
    );
    page.into_bytes()
}

/// Render the index page listing every record.
///
/// Records appear in the order given. The description paragraph is left
/// out entirely when the description is empty.
pub fn render_index_page(ctx: &IndexContext, records: &[PackageRecord]) -> Vec<u8> {
    let domain = escape_html(&ctx.base_domain);
    let org = escape_html(&ctx.org);

    let mut page = String::new();
    let _ = write!(
        page,
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <title>{domain}</title>
    <style>
{INDEX_STYLE}    </style>
</head>
<body>
    <h1>{domain}</h1>
    <p>This is the package index for {org} Go packages.</p>
    <p>To use these packages in your Go project, simply import them using the <code>{domain}/...</code>
        import path.</p>

    <div class="package-list">
        <h2>Available Packages</h2>
"#
    );

    for record in records {
        let path = escape_html(&record.import_path);
        let url = escape_html(&record.repo_url);
        let _ = writeln!(page, r#"        <div class="package-item">"#);
        let _ = writeln!(page, r#"            <h3><a href="{url}">{path}</a></h3>"#);
        if !record.description.is_empty() {
            let _ = writeln!(
                page,
                "            <p>{}</p>",
                escape_html(&record.description)
            );
        }
        let _ = writeln!(page, "            <p><code>go get {path}</code></p>");
        let _ = writeln!(page, "        </div>");
    }

    page.push_str("    </div>\n</body>\n</html>\n");
    page.into_bytes()
}
