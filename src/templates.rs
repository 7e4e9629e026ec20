use crate::types::{Notice, NoticeLevel};
use crate::utils::{encode_path_segment, escape_attr, escape_html};

/// Inline stylesheet served with every page; there is no static asset tree.
const STYLE: &str = "\
body{max-width:52rem;margin:0 auto;padding:0 1rem;font-family:system-ui,sans-serif;line-height:1.6;color:#222}\
header{display:flex;align-items:center;gap:1rem;padding:.75rem 0;border-bottom:1px solid #ddd;margin-bottom:1rem}\
header a{color:#355f8a;text-decoration:none;margin-right:.5rem}\
header form{margin-left:auto}\
input.search{padding:.3rem .5rem}\
.notice{padding:.5rem .75rem;border-radius:4px;margin:.5rem 0}\
.notice.success{background:#e6f4e6;border:1px solid #9c9}\
.notice.error{background:#fae3e3;border:1px solid #d99}\
.meta{color:#777;font-size:.85rem}\
textarea{width:100%;min-height:16rem;font-family:monospace}\
input[type=text]{width:100%}\
label{display:block;margin-top:.75rem;font-weight:600}\
button{margin-top:.75rem;padding:.4rem 1rem}";

/// Wrap page content in the common HTML shell with header navigation,
/// search box, and notice banners
fn page_shell(title: &str, body: &str, notices: &[Notice]) -> String {
    let mut banners = String::new();
    for notice in notices {
        let class = match notice.level {
            NoticeLevel::Success => "success",
            NoticeLevel::Error => "error",
        };
        banners.push_str(&format!(
            "<div class=\"notice {}\">{}</div>",
            class,
            escape_html(&notice.message)
        ));
    }

    format!(
        "<!doctype html><html lang=\"en\"><head><meta charset=\"utf-8\">\
<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\
<title>{}</title><style>{}</style></head><body>\
<header><a href=\"/\">Folio</a><a href=\"/create\">New page</a><a href=\"/random\">Random</a>\
<form action=\"/search\" method=\"post\">\
<input class=\"search\" type=\"text\" name=\"title\" placeholder=\"Search wiki\"></form>\
</header>{}<main>{}</main></body></html>",
        escape_html(title),
        STYLE,
        banners,
        body
    )
}

fn entry_href(title: &str) -> String {
    format!("/wiki/{}", encode_path_segment(title))
}

fn titles_list(titles: &[String]) -> String {
    let mut html = String::from("<ul class=\"listing\">\n");
    for title in titles {
        html.push_str(&format!(
            "  <li><a href=\"{}\">{}</a></li>\n",
            escape_attr(&entry_href(title)),
            escape_html(title)
        ));
    }
    html.push_str("</ul>\n");
    html
}

/// Index page: every entry title plus the search control in the shell
pub fn render_index(titles: &[String], notices: &[Notice]) -> String {
    let mut body = String::from("<h1>All pages</h1>");
    if titles.is_empty() {
        body.push_str("<p>No pages yet. <a href=\"/create\">Create the first one.</a></p>");
    } else {
        body.push_str(&titles_list(titles));
    }
    page_shell("All pages", &body, notices)
}

/// A single rendered entry with its edit link and last-modified line
pub fn render_entry(
    title: &str,
    content_html: &str,
    modified: Option<&str>,
    notices: &[Notice],
) -> String {
    let mut body = format!("<h1>{}</h1>", escape_html(title));
    if let Some(stamp) = modified {
        body.push_str(&format!(
            "<p class=\"meta\">Last modified: {}</p>",
            escape_html(stamp)
        ));
    }
    body.push_str(content_html);
    body.push_str(&format!(
        "<p><a href=\"/edit/{}\">Edit this page</a></p>",
        escape_attr(&encode_path_segment(title))
    ));
    page_shell(title, &body, notices)
}

/// Not-found page offering related titles as suggestions
pub fn render_not_found(title: &str, related: &[String]) -> String {
    let mut body = format!(
        "<h1>Page not found</h1><p>No entry named \"{}\" exists.</p>",
        escape_html(title)
    );
    if related.is_empty() {
        body.push_str("<p>No similar pages were found either.</p>");
    } else {
        body.push_str("<p>Did you mean one of these?</p>");
        body.push_str(&titles_list(related));
    }
    body.push_str(&format!(
        "<p><a href=\"/create\">Create \"{}\"</a></p>",
        escape_html(title)
    ));
    page_shell("Page not found", &body, &[])
}

/// Search results page for a query with no exact entry
pub fn render_search_results(query: &str, related: &[String]) -> String {
    let mut body = format!(
        "<h1>Search results for \"{}\"</h1>",
        escape_html(query)
    );
    body.push_str(&format!(
        "<p class=\"meta\">Found {} result{}</p>",
        related.len(),
        if related.len() == 1 { "" } else { "s" }
    ));
    if related.is_empty() {
        body.push_str("<p>No page titles match your search.</p>");
    } else {
        body.push_str(&titles_list(related));
    }
    page_shell("Search", &body, &[])
}

/// Create-page form, pre-filled with any previously submitted values
pub fn render_create_form(title_value: &str, text_value: &str, notices: &[Notice]) -> String {
    let body = format!(
        "<h1>New page</h1><form action=\"/create\" method=\"post\">\
<label for=\"title\">Page title</label>\
<input type=\"text\" id=\"title\" name=\"title\" value=\"{}\" placeholder=\"Page title\">\
<label for=\"text\">Content</label>\
<textarea id=\"text\" name=\"text\" placeholder=\"Enter page using Markdown\">{}</textarea>\
<button type=\"submit\">Create page</button></form>",
        escape_attr(title_value),
        escape_html(text_value)
    );
    page_shell("New page", &body, notices)
}

/// Edit form pre-populated with the entry's current content
pub fn render_edit_form(title: &str, text_value: &str, notices: &[Notice]) -> String {
    let body = format!(
        "<h1>Editing \"{}\"</h1><form action=\"/edit/{}\" method=\"post\">\
<label for=\"text\">Content</label>\
<textarea id=\"text\" name=\"text\" placeholder=\"Enter page using Markdown\">{}</textarea>\
<button type=\"submit\">Save changes</button></form>",
        escape_html(title),
        escape_attr(&encode_path_segment(title)),
        escape_html(text_value)
    );
    page_shell(&format!("Editing {}", title), &body, notices)
}
