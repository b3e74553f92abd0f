//! HTML presentation: turns search responses into the markup fragment the
//! search page swaps in, plus the page itself.

use crate::core::SearchResponse;

/// Escape text for interpolation into HTML element content or attributes.
pub fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Render the fragment returned by the search endpoint: the echoed query,
/// the converted form when it differs, and the ranked entries.
pub fn results_fragment(response: &SearchResponse) -> String {
    let mut html = String::new();

    html.push_str(&format!(
        "<p class=\"echo\">You searched: {}</p>\n",
        escape(&response.query)
    ));
    if response.matched_query != response.query {
        html.push_str(&format!(
            "<p class=\"echo\">Matching: {}</p>\n",
            escape(&response.matched_query)
        ));
    }

    if response.hits.is_empty() {
        html.push_str("<p class=\"no-results\">No results</p>\n");
        return html;
    }

    html.push_str("<ul class=\"results\">\n");
    for hit in &response.hits {
        let entry = &hit.entry;
        html.push_str(&format!(
            "<li>\n<p class=\"word\">{}</p>\n",
            escape(&entry.word)
        ));
        for definition in &entry.definitions {
            html.push_str("<div class=\"definition\">\n");
            if !definition.grammar.is_empty() {
                html.push_str(&format!(
                    "<span class=\"grammar\">{}</span>\n",
                    escape(&definition.grammar)
                ));
            }
            if !definition.etymology.is_empty() {
                html.push_str(&format!(
                    "<span class=\"etymology\">{}</span>\n",
                    escape(&definition.etymology)
                ));
            }
            if !definition.senses.is_empty() {
                html.push_str("<ol class=\"senses\">\n");
                for sense in &definition.senses {
                    html.push_str(&format!("<li>{}</li>\n", escape(sense)));
                }
                html.push_str("</ol>\n");
            }
            html.push_str("</div>\n");
        }
        html.push_str("</li>\n");
    }
    html.push_str("</ul>\n");

    html
}

/// The search page: one input box that fetches `/search` fragments as the
/// user types, debounced so half-typed romanised words do not flood the
/// server.
pub const HOME_PAGE: &str = r##"<!DOCTYPE html>
<html lang="ne">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>शब्दकोश</title>
    <link href="https://fonts.googleapis.com/css2?family=Mukta:wght@400;700&display=swap" rel="stylesheet">
    <style>
        body { font-family: 'Mukta', sans-serif; max-width: 700px; margin: 0 auto; padding: 20px; }
        .searchInput { width: 100%; font-size: 1.3em; padding: 8px; box-sizing: border-box; }
        .word { font-size: 1.2em; font-weight: 700; margin-bottom: 0; }
        .grammar, .etymology { color: #666; margin-right: 8px; }
        .results { list-style: none; padding-left: 0; }
        .results > li { border-bottom: 1px solid #ddd; padding: 8px 0; }
    </style>
</head>
<body>
    <form onsubmit="return false">
        <input class="searchInput" type="text" name="searchquery"
               placeholder="Type a word, romanised or in Devanagari" autofocus>
    </form>
    <section id="search-results"></section>
    <script>
        const searchInput = document.querySelector(".searchInput");
        const searchResults = document.querySelector("#search-results");

        const debounce = (cb, delay = 500) => {
            let timeout;
            return (...args) => {
                clearTimeout(timeout);
                timeout = setTimeout(() => { cb(...args); }, delay);
            };
        };

        const fetchResults = debounce(query => {
            fetch("/search?" + new URLSearchParams({ searchquery: query }))
                .then(res => res.text())
                .then(text => { searchResults.innerHTML = text; });
        });

        searchInput.addEventListener("keyup", event => {
            fetchResults(event.target.value);
        });
    </script>
</body>
</html>
"##;
