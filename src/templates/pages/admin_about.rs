use maud::{html, Markup};

use crate::db::site_content::AboutContent;
use crate::templates::layouts::admin_layout;

pub struct AboutFormVm {
    pub about: AboutContent,
    pub saved: bool,
}

pub fn admin_about_page(vm: &AboutFormVm) -> Markup {
    admin_layout(
        "Sobre mim",
        html! {
            h1 { "Sobre mim" }

            @if vm.saved {
                div class="notice notice-success" { "Conteúdo atualizado." }
            }

            form class="admin-form" action="/admin/about" method="post" {
                div class="field" {
                    label for="profile_image" { "Foto de perfil (URL)" }
                    input type="text" id="profile_image" name="profile_image"
                        value=(vm.about.profile_image);
                }
                div class="field" {
                    label for="my_story" { "Minha história (parágrafos separados por linha em branco)" }
                    textarea id="my_story" name="my_story" rows="10" { (vm.about.my_story) }
                }
                button type="submit" class="button button-primary" { "Salvar" }
            }
        },
    )
}
