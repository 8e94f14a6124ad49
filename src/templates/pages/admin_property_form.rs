use std::collections::HashMap;

use maud::{html, Markup};

use crate::domain::{PropertyRecord, PropertyStatus, PropertyType};
use crate::templates::layouts::admin_layout;

/// Raw form state for the create/edit screen. Everything is kept as the
/// text the admin typed so an invalid submission re-renders unchanged.
#[derive(Debug, Clone, Default)]
pub struct PropertyFormValues {
    pub title: String,
    pub description: String,
    pub price: String,
    pub location: String,
    pub city: String,
    pub region: String,
    pub kind: String,
    pub status: String,
    pub display_status: String,
    pub bedrooms: String,
    pub suites: String,
    pub bathrooms: String,
    pub parking_spots: String,
    pub area: String,
    pub amenities_text: String,
    pub images_text: String,
    pub video_links_text: String,
}

impl PropertyFormValues {
    pub fn from_record(record: &PropertyRecord) -> Self {
        Self {
            title: record.title.clone(),
            description: record.description.clone().unwrap_or_default(),
            price: record.price.to_string(),
            location: record.location.clone(),
            city: record.city.clone().unwrap_or_default(),
            region: record.region.clone().unwrap_or_default(),
            kind: record.kind.as_str().to_string(),
            status: record.status.as_str().to_string(),
            display_status: record.display_status.clone().unwrap_or_default(),
            bedrooms: optional_number(record.bedrooms),
            suites: optional_number(record.suites),
            bathrooms: optional_number(record.bathrooms),
            parking_spots: optional_number(record.parking_spots),
            area: record.area.map(|a| a.to_string()).unwrap_or_default(),
            amenities_text: record.amenities.join("\n"),
            images_text: record.images.join("\n"),
            video_links_text: record.video_links.join("\n"),
        }
    }

    pub fn from_params(params: &HashMap<String, String>) -> Self {
        let get = |key: &str| params.get(key).cloned().unwrap_or_default();
        Self {
            title: get("title"),
            description: get("description"),
            price: get("price"),
            location: get("location"),
            city: get("city"),
            region: get("region"),
            kind: get("type"),
            status: get("status"),
            display_status: get("display_status"),
            bedrooms: get("bedrooms"),
            suites: get("suites"),
            bathrooms: get("bathrooms"),
            parking_spots: get("parking_spots"),
            area: get("area"),
            amenities_text: get("amenities"),
            images_text: get("images"),
            video_links_text: get("video_links"),
        }
    }
}

fn optional_number(value: Option<i64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

pub struct PropertyFormVm {
    pub heading: String,
    /// Where the form posts: /admin/properties or /admin/properties/{id}.
    pub action: String,
    pub values: PropertyFormValues,
    pub error: Option<String>,
}

pub fn admin_property_form_page(vm: &PropertyFormVm) -> Markup {
    let v = &vm.values;

    admin_layout(
        &vm.heading,
        html! {
            h1 { (vm.heading) }

            @if let Some(msg) = &vm.error {
                div class="notice notice-error" { (msg) }
            }

            form class="admin-form" action=(vm.action) method="post" {
                div class="field" {
                    label for="title" { "Título *" }
                    input type="text" id="title" name="title" value=(v.title) required;
                }
                div class="field" {
                    label for="description" { "Descrição" }
                    textarea id="description" name="description" rows="5" { (v.description) }
                }

                div class="search-row" {
                    div class="field" {
                        label for="price" { "Preço (R$) *" }
                        input type="number" id="price" name="price" value=(v.price) required min="0";
                    }
                    div class="field" {
                        label for="type" { "Tipo" }
                        select id="type" name="type" {
                            @for kind in PropertyType::ALL {
                                option value=(kind.as_str()) selected[v.kind == kind.as_str()] {
                                    (kind.label_pt())
                                }
                            }
                        }
                    }
                    div class="field" {
                        label for="status" { "Status" }
                        select id="status" name="status" {
                            @for status in PropertyStatus::ALL {
                                option value=(status.as_str()) selected[v.status == status.as_str()] {
                                    (status.label_pt())
                                }
                            }
                        }
                    }
                    div class="field" {
                        label for="display_status" { "Status de exibição" }
                        input type="text" id="display_status" name="display_status"
                            value=(v.display_status) placeholder="Ex.: Últimas unidades";
                    }
                }

                div class="search-row" {
                    div class="field" {
                        label for="location" { "Bairro *" }
                        input type="text" id="location" name="location" value=(v.location) required;
                    }
                    div class="field" {
                        label for="city" { "Cidade" }
                        input type="text" id="city" name="city" value=(v.city);
                    }
                    div class="field" {
                        label for="region" { "Estado" }
                        input type="text" id="region" name="region" value=(v.region);
                    }
                }

                div class="search-row" {
                    (number_field("bedrooms", "Dormitórios", &v.bedrooms))
                    (number_field("suites", "Suítes", &v.suites))
                    (number_field("bathrooms", "Banheiros", &v.bathrooms))
                    (number_field("parking_spots", "Vagas", &v.parking_spots))
                    div class="field" {
                        label for="area" { "Área (m²)" }
                        input type="number" id="area" name="area" value=(v.area) min="0" step="0.1";
                    }
                }

                div class="field" {
                    label for="amenities" { "Diferenciais (um por linha)" }
                    textarea id="amenities" name="amenities" rows="4" { (v.amenities_text) }
                }
                div class="field" {
                    label for="images" { "Imagens (caminho ou URL, um por linha, máx. 10)" }
                    textarea id="images" name="images" rows="4" { (v.images_text) }
                }
                div class="field" {
                    label for="video_links" { "Vídeos (URL completa, um por linha)" }
                    textarea id="video_links" name="video_links" rows="3" { (v.video_links_text) }
                }

                div class="search-actions" {
                    a class="button button-outline" href="/admin/properties" { "Cancelar" }
                    button type="submit" class="button button-primary" { "Salvar" }
                }
            }
        },
    )
}

fn number_field(name: &str, label: &str, value: &str) -> Markup {
    html! {
        div class="field" {
            label for=(name) { (label) }
            input type="number" id=(name) name=(name) value=(value) min="0";
        }
    }
}
