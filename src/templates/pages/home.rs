// templates/pages/home.rs

use crate::templates::{button, card, desktop_layout};
use maud::{html, Markup, PreEscaped};

pub fn home_page(listings: &str, error: Option<&str>) -> Markup {
    desktop_layout(
        "Rightmove Listing Scoring Tool",
        html! {
            h1 { "Rightmove Listing Scoring Tool" }
            p { "Paste listing text, upload text files, and export results as CSV." }

            @if let Some(msg) = error {
                p class="error" id="upload-error" { (msg) }
            }

            (card("Upload", html! {
                label for="listing-file" { "Upload a text file with listings (optional)" }
                input type="file" id="listing-file" accept=".txt,text/plain";
            }))

            (analyse_form(listings))

            script { (PreEscaped(UPLOAD_SCRIPT)) }
        },
    )
}

pub fn analyse_form(listings: &str) -> Markup {
    html! {
        form method="post" action="/analyse" class="card" {
            label for="listings" {
                "Or paste listings text here (one after another, separated by a blank line):"
            }
            textarea id="listings" name="listings" rows="16" { (listings) }
            (button("Analyse Listings"))
        }
    }
}

// Sends the raw file bytes; the server decodes them and answers with this page.
const UPLOAD_SCRIPT: &str = r#"
document.getElementById('listing-file').addEventListener('change', function (e) {
  var file = e.target.files[0];
  if (!file) { return; }
  fetch('/upload', { method: 'POST', headers: { 'Content-Type': 'text/plain' }, body: file })
    .then(function (r) { return r.text(); })
    .then(function (html) { document.open(); document.write(html); document.close(); });
});
"#;
