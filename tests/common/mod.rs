// Markup builders shaped like the hosting site's pages.
#![allow(dead_code)]

pub fn listing_page(topics: &[(&str, &str)]) -> String {
    let mut html = String::from("<html><body><ul>");
    for (title, slug) in topics {
        html.push_str(&format!(
            r#"<li><a class="no-underline flex-1 d-flex flex-column" href="/topics/{slug}">
                 <p class="f3 lh-condensed mb-0 mt-1 Link--primary">{title}</p>
                 <p class="f5 color-fg-muted mb-0 mt-1">
                   All about {title}.
                 </p>
               </a></li>"#,
            title = title,
            slug = slug
        ));
    }
    html.push_str("</ul></body></html>");
    html
}

pub fn topic_page(repos: &[(&str, &str, &str)]) -> String {
    let mut html = String::from("<html><body>");
    for (owner, name, stars) in repos {
        html.push_str(&format!(
            r#"<article class="border rounded color-shadow-small color-bg-subtle my-4">
                 <div class="d-flex flex-justify-between">
                   <h3 class="f3 color-fg-muted text-normal lh-condensed">
                     <a href="/{owner}">{owner}</a> /
                     <a href="/{owner}/{name}" class="text-bold wb-break-word">{name}</a>
                   </h3>
                   <a class="btn-sm btn">
                     <span id="repo-stars-counter-star" class="Counter">{stars}</span>
                   </a>
                 </div>
               </article>"#,
            owner = owner,
            name = name,
            stars = stars
        ));
    }
    html.push_str("</body></html>");
    html
}
