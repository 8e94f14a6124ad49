use maud::{html, Markup};

use crate::domain::PropertyRecord;
use crate::templates::components::property_card::property_card;

/// Why the region is being rendered. The search variants add the §7-style
/// messages on top of the listing grid.
pub enum ListingContext<'a> {
    /// Independently-loaded default set (initial page load).
    Default,
    /// A completed search with results.
    SearchResults,
    /// A completed search that matched nothing.
    SearchEmpty { location: &'a str },
    /// The search query itself failed; the region is cleared.
    SearchFailed,
}

/// The listing region swapped into `#properties`. Every search response
/// fully replaces the previous content: there is no merge.
pub fn listing_region(
    listings: &[PropertyRecord],
    context: ListingContext,
    image_base: &str,
) -> Markup {
    html! {
        div class="region-heading" {
            @if listings.is_empty() {
                h2 { "Nenhum imóvel encontrado" }
                p { "Tente ajustar os filtros de busca para encontrar mais opções" }
            } @else {
                h2 { "Imóveis em Destaque" }
                p { "Conheça nossa seleção de propriedades exclusivas" }
            }

            @match context {
                ListingContext::SearchEmpty { location } => {
                    div class="notice notice-warning" {
                        @if location.trim().is_empty() {
                            "Nenhum imóvel encontrado com os critérios especificados."
                        } @else {
                            "Nenhum imóvel encontrado em \"" (location) "\" com os critérios especificados."
                        }
                    }
                }
                ListingContext::SearchFailed => {
                    div class="notice notice-error" {
                        "Ocorreu um erro ao buscar imóveis. Por favor, tente novamente."
                    }
                }
                _ => {}
            }
        }

        @if !listings.is_empty() {
            div class="card-track" {
                @for property in listings {
                    (property_card(property, image_base))
                }
            }
        }
    }
}

/// The launches region: launch-status inventory only, omitted entirely
/// when there is none.
pub fn launches_region(launches: &[PropertyRecord], image_base: &str) -> Markup {
    if launches.is_empty() {
        return html! {};
    }

    html! {
        section id="launches" class="section section-alt" {
            div class="region-heading" {
                h2 { "Lançamentos" }
                p { "Conheça os novos empreendimentos e garanta sua unidade na planta" }
            }
            div class="card-track" {
                @for property in launches {
                    (property_card(property, image_base))
                }
            }
        }
    }
}
