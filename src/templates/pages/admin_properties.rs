use maud::{html, Markup};

use crate::domain::PropertyRecord;
use crate::media;
use crate::templates::components::property_card::format_price;
use crate::templates::layouts::admin_layout;

pub struct AdminPropertiesVm {
    pub properties: Vec<PropertyRecord>,
    pub image_base: String,
}

pub fn admin_properties_page(vm: &AdminPropertiesVm) -> Markup {
    admin_layout(
        "Imóveis",
        html! {
            div class="admin-toolbar" {
                h1 { "Imóveis" }
                a class="button button-primary" href="/admin/properties/new" { "Novo Imóvel" }
            }

            @if vm.properties.is_empty() {
                p { "Nenhum imóvel cadastrado ainda." }
            } @else {
                table class="admin-table" {
                    thead {
                        tr {
                            th { "Imóvel" }
                            th { "Localização" }
                            th { "Preço" }
                            th { "Status" }
                            th { "Ações" }
                        }
                    }
                    tbody {
                        @for property in &vm.properties {
                            tr {
                                td {
                                    @if !property.images.is_empty() {
                                        img class="thumb"
                                            src=(media::cover_image_url(&vm.image_base, &property.images))
                                            alt=(property.title);
                                    }
                                    (property.title)
                                }
                                td { (property.location_line()) }
                                td { "R$ " (format_price(property.price)) }
                                td {
                                    span class="badge badge-status" { (property.status_label()) }
                                }
                                td {
                                    a href=(format!("/admin/properties/{}", property.id)) { "Editar" }
                                    " "
                                    form class="inline-form"
                                        action=(format!("/admin/properties/{}/delete", property.id))
                                        method="post"
                                    {
                                        button type="submit" class="button-danger" { "Excluir" }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        },
    )
}
