use crate::domain::listing::{ResultTable, COLUMNS};
use crate::templates::{button, desktop_layout};
use maud::{html, Markup};

pub fn results_page(table: &ResultTable, listings: &str) -> Markup {
    desktop_layout(
        "Results",
        html! {
            h1 { "Results" }
            p class="text-gray-700" {
                "Scored " strong { (table.len()) } " listings."
            }

            (results_table(table))

            div class="downloads" {
                (download_form("/export.csv", "Download CSV", listings))
                (download_form("/export.xlsx", "Download XLSX", listings))
            }

            p { a href="/" { "← Analyse more listings" } }
        },
    )
}

pub fn results_table(table: &ResultTable) -> Markup {
    html! {
        table id="results" {
            thead {
                tr {
                    @for col in COLUMNS {
                        th scope="col" { (col) }
                    }
                }
            }
            tbody {
                @for row in table {
                    tr {
                        td {
                            @if let Some(price) = row.price {
                                "£" (price)
                            }
                        }
                        td { (row.price_band) }
                        td { (row.beauty_score) }
                        td { (row.virality) }
                        td { (row.cluster) }
                        td { (row.location) }
                        td { (row.location_growth) }
                        td { (row.film_score) }
                        td { (row.hook) }
                    }
                }
            }
        }
    }
}

// The listings travel with the form so the download is scored afresh.
fn download_form(action: &str, label: &str, listings: &str) -> Markup {
    html! {
        form method="post" action=(action) {
            textarea name="listings" hidden { (listings) }
            (button(label))
        }
    }
}
