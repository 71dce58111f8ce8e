use regex::RegexBuilder;

use crate::models::{Post, Project};

/// Words of content shown on a card when a post has no explicit excerpt.
const EXCERPT_WORDS: usize = 40;

pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Format a record date for display ("March 5, 2024"). Unparseable dates
/// fall back to the raw string rather than erroring.
pub fn format_date(raw: &str) -> String {
    match crate::engine::parse_date(raw) {
        Some(date) => date.format("%B %-d, %Y").to_string(),
        None => raw.to_string(),
    }
}

pub fn truncate_words(text: &str, max_words: usize) -> String {
    let words: Vec<&str> = text.split_whitespace().collect();
    if words.len() <= max_words {
        text.to_string()
    } else {
        let mut result = words[..max_words].join(" ");
        result.push('…');
        result
    }
}

/// HTML-escape `text` and wrap every case-insensitive occurrence of the
/// query in `<mark>`. Matching runs on the raw text — never the escaped
/// form, so a query like "amp" cannot split an `&amp;` entity — and each
/// segment is escaped on output. The query is regex-escaped, so literal
/// input like `C++` or `a.b` never produces a malformed pattern.
pub fn highlight(text: &str, query: &str) -> String {
    let q = query.trim();
    if q.is_empty() {
        return html_escape(text);
    }
    let re = match RegexBuilder::new(&regex::escape(q))
        .case_insensitive(true)
        .build()
    {
        Ok(re) => re,
        Err(_) => return html_escape(text),
    };
    let mut out = String::with_capacity(text.len());
    let mut last = 0;
    for m in re.find_iter(text) {
        out.push_str(&html_escape(&text[last..m.start()]));
        out.push_str("<mark>");
        out.push_str(&html_escape(m.as_str()));
        out.push_str("</mark>");
        last = m.end();
    }
    out.push_str(&html_escape(&text[last..]));
    out
}

/// Render the blog results list. `suggest` gates the suggestions affordance
/// on the empty state: the caller passes whether the pre-filter source set
/// is non-empty and the page carries a suggestions element at all.
pub fn render_posts(posts: &[&Post], query: &str, suggest: bool) -> String {
    if posts.is_empty() {
        return empty_state(query, suggest);
    }

    let mut html = String::from("<div class=\"blog-results\">\n");
    for post in posts {
        let date = format_date(&post.date);
        let excerpt = post.display_excerpt(EXCERPT_WORDS);

        let thumb_html = match &post.image {
            Some(img) if !img.is_empty() => format!(
                "<div class=\"blog-thumb\"><img src=\"{}\" alt=\"{}\" loading=\"lazy\"></div>",
                html_escape(img),
                html_escape(&post.title)
            ),
            _ => String::new(),
        };

        // Meta line: author, date, category — only the parts that exist
        let mut meta_parts: Vec<String> = Vec::new();
        if !post.author.is_empty() {
            meta_parts.push(format!(
                "<span class=\"blog-author\">{}</span>",
                html_escape(&post.author)
            ));
        }
        if !date.is_empty() {
            meta_parts.push(format!("<time>{}</time>", html_escape(&date)));
        }
        if !post.category.is_empty() {
            meta_parts.push(format!(
                "<span class=\"blog-category\">{}</span>",
                html_escape(&post.category)
            ));
        }
        let meta_html = if meta_parts.is_empty() {
            String::new()
        } else {
            format!("<div class=\"blog-meta\">{}</div>", meta_parts.join(" · "))
        };

        html.push_str(&format!(
            "<article class=\"blog-card\">\
             {thumb_html}\
             <div class=\"blog-body\">\
             <h2><a href=\"{url}\">{title}</a></h2>\
             {meta_html}\
             <div class=\"blog-excerpt\">{excerpt}</div>\
             </div>\
             </article>\n",
            thumb_html = thumb_html,
            url = html_escape(&post.url),
            title = highlight(&post.title, query),
            meta_html = meta_html,
            excerpt = highlight(&excerpt, query),
        ));
    }
    html.push_str("</div>");
    html
}

/// Render the project results grid.
pub fn render_projects(projects: &[&Project], query: &str, suggest: bool) -> String {
    if projects.is_empty() {
        return empty_state(query, suggest);
    }

    let mut html = String::from("<div class=\"project-grid\">\n");
    for project in projects {
        let cats_data = project
            .categories
            .iter()
            .map(|c| c.to_lowercase())
            .collect::<Vec<_>>()
            .join(" ");

        let thumb_html = match &project.image {
            Some(img) if !img.is_empty() => format!(
                "<div class=\"project-thumb\"><img src=\"{}\" alt=\"{}\" loading=\"lazy\"></div>",
                html_escape(img),
                html_escape(&project.title)
            ),
            _ => String::new(),
        };

        let tech_html = if project.technologies.is_empty() {
            String::new()
        } else {
            let chips: Vec<String> = project
                .technologies
                .iter()
                .map(|t| format!("<span class=\"tech-tag\">{}</span>", html_escape(t)))
                .collect();
            format!("<div class=\"project-tech\">{}</div>", chips.join(" "))
        };

        html.push_str(&format!(
            "<article class=\"project-card\" data-category=\"{cats}\">\
             {thumb_html}\
             <div class=\"project-body\">\
             <h3><a href=\"{url}\">{title}</a></h3>\
             <div class=\"project-description\">{description}</div>\
             {tech_html}\
             </div>\
             </article>\n",
            cats = html_escape(&cats_data),
            thumb_html = thumb_html,
            url = html_escape(&project.url),
            title = highlight(&project.title, query),
            description = highlight(&project.description, query),
            tech_html = tech_html,
        ));
    }
    html.push_str("</div>");
    html
}

/// The empty-results fragment. A suggestions affordance appears only when
/// the query is empty and the source set has entries to browse (the list
/// went empty through the category filter alone).
fn empty_state(query: &str, suggest: bool) -> String {
    let q = query.trim();
    let mut html = if q.is_empty() {
        String::from("<div class=\"no-results\"><p>Nothing to show here.</p></div>")
    } else {
        format!(
            "<div class=\"no-results\"><p>No results found for \u{201c}{}\u{201d}.</p></div>",
            html_escape(q)
        )
    };
    if q.is_empty() && suggest {
        html.push_str(
            "<div class=\"search-suggestions\">\
             <p>Try another category, or <a href=\"#\" class=\"show-all\">browse everything</a>.</p>\
             </div>",
        );
    }
    html
}
