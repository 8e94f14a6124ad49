use maud::{html, Markup};

use crate::domain::PropertyRecord;
use crate::media;
use crate::templates::components::property_card::format_price;
use crate::templates::layouts::desktop_layout;

pub fn property_details_page(property: &PropertyRecord, image_base: &str) -> Markup {
    desktop_layout(
        &property.title,
        html! {
            section class="section" {
                a href="/#properties" class="back-link" { "← Voltar aos imóveis" }

                div class="details-header" {
                    h1 { (property.title) }
                    p class="property-location" { (property.location_line()) }
                    p class="details-price" { "R$ " (format_price(property.price)) }
                    span class="badge badge-status" { (property.status_label()) }
                }

                div class="details-gallery" {
                    @if property.images.is_empty() {
                        img src=(media::FALLBACK_IMAGE) alt=(property.title);
                    } @else {
                        @for image in &property.images {
                            img src=(media::resolve_image_url(image_base, image)) alt=(property.title);
                        }
                    }
                }

                ul class="property-facts" {
                    @if let Some(bedrooms) = property.bedrooms {
                        li { (bedrooms) " Dormitórios" }
                    }
                    @if let Some(suites) = property.suites {
                        li { (suites) " Suítes" }
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

                @if let Some(description) = property.description.as_deref().filter(|d| !d.is_empty()) {
                    div class="details-description" {
                        h3 { "Sobre o imóvel" }
                        @for paragraph in description.split("\n\n").filter(|p| !p.trim().is_empty()) {
                            p { (paragraph) }
                        }
                    }
                }

                @if !property.amenities.is_empty() {
                    div class="property-amenities" {
                        h3 { "Diferenciais" }
                        @for amenity in &property.amenities {
                            span class="chip" { (amenity) }
                        }
                    }
                }

                @if !property.video_links.is_empty() {
                    div class="details-videos" {
                        h3 { "Vídeos" }
                        ul {
                            @for link in &property.video_links {
                                li { a href=(link) target="_blank" rel="noopener" { (link) } }
                            }
                        }
                    }
                }

                a class="button button-primary" href="/#contact" { "Agendar Visita" }
            }
        },
    )
}
