use maud::{html, Markup};

use crate::domain::PropertyRecord;
use crate::media;

/// Listing card shared by the featured region, the launches region and
/// the search results.
pub fn property_card(property: &PropertyRecord, image_base: &str) -> Markup {
    html! {
        article class="property-card" {
            div class="property-card-media" {
                img src=(media::cover_image_url(image_base, &property.images)) alt=(property.title);
                span class="badge badge-price" { "R$ " (format_price(property.price)) }
                span class="badge badge-status" { (property.status_label()) }
            }
            div class="property-card-body" {
                h3 { (property.title) }
                p class="property-location" { (property.location_line()) }

                ul class="property-facts" {
                    @if let Some(bedrooms) = property.bedrooms {
                        li {
                            (bedrooms) " Dormitórios"
                            @if let Some(suites) = property.suites {
                                " (" (suites) " suítes)"
                            }
                        }
                    }
                    @if let Some(bathrooms) = property.bathrooms {
                        li { (bathrooms) " Banheiros" }
                    }
                    @if let Some(parking) = property.parking_spots {
                        li { (parking) " Vagas" }
                    }
                    @if let Some(area) = property.area {
                        li { (area) "m²" }
                    }
                }

                @if !property.amenities.is_empty() {
                    div class="property-amenities" {
                        h4 { "Diferenciais:" }
                        @for amenity in &property.amenities {
                            span class="chip" { (amenity) }
                        }
                    }
                }

                div class="property-actions" {
                    a class="button button-primary" href=(format!("/properties/{}", property.id)) {
                        "Mais Detalhes"
                    }
                    a class="button button-outline" href="/#contact" { "Agendar Visita" }
                }
            }
        }
    }
}

/// "1200000" -> "1.200.000", the pt-BR thousands grouping.
pub fn format_price(price: i64) -> String {
    let digits = price.abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }
    if price < 0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}
