use maud::{html, Markup};
use url::form_urlencoded;

use crate::search::LocationSuggestion;

/// The dropdown under the location field. Selecting an entry runs the
/// search for that label immediately, swapping the listing region.
pub fn suggestion_panel(suggestions: &[LocationSuggestion]) -> Markup {
    if suggestions.is_empty() {
        return html! {};
    }

    html! {
        div class="suggestion-list" {
            @for suggestion in suggestions {
                a class="suggestion"
                    href=(search_href(&suggestion.label))
                    hx-get=(search_href(&suggestion.label))
                    hx-target="#properties"
                    hx-swap="innerHTML show:#properties:top"
                {
                    div class="suggestion-label" { (suggestion.label) }
                    div class="suggestion-count" {
                        (suggestion.count) " imóvel(is) disponível(is)"
                    }
                }
            }
        }
    }
}

fn search_href(label: &str) -> String {
    let query: String = form_urlencoded::Serializer::new(String::new())
        .append_pair("location", label)
        .finish();
    format!("/search?{query}")
}
