use maud::{html, Markup};

use crate::db::site_content::AboutContent;
use crate::domain::{PropertyRecord, PropertyStatus, PropertyType};
use crate::templates::components::{launches_region, listing_region, ListingContext};
use crate::templates::layouts::desktop_layout;

/// Hero background used until the admin configures one.
const DEFAULT_HERO_IMAGE: &str =
    "https://images.unsplash.com/photo-1600596542815-ffad4c1539a9?auto=format&fit=crop&w=2075&q=80";

/// Outcome strip shown above the contact form after a submission.
pub enum ContactNotice {
    Sent,
    Invalid(String),
}

pub struct HomeVm {
    pub hero_image: Option<String>,
    pub about: AboutContent,
    pub launches: Vec<PropertyRecord>,
    pub featured: Vec<PropertyRecord>,
    pub image_base: String,
    pub contact_notice: Option<ContactNotice>,
}

pub fn home_page(vm: &HomeVm) -> Markup {
    desktop_layout(
        "Encontre o Imóvel dos Seus Sonhos",
        html! {
            (hero_section(vm))
            (about_section(&vm.about))
            (categories_section())
            (launches_region(&vm.launches, &vm.image_base))

            section class="section" {
                div id="properties" {
                    (listing_region(&vm.featured, ListingContext::Default, &vm.image_base))
                }
            }

            (contact_section(vm.contact_notice.as_ref()))
        },
    )
}

fn hero_section(vm: &HomeVm) -> Markup {
    let hero = vm.hero_image.as_deref().unwrap_or(DEFAULT_HERO_IMAGE);

    html! {
        section id="home" class="hero" style=(format!("background-image: url('{hero}')")) {
            div class="hero-inner" {
                h1 { "Encontre o Imóvel dos Seus Sonhos" }
                p { "Especialista em imóveis, lançamentos e empreendimentos exclusivos." }

                (search_form())
            }
        }
    }
}

/// The hero search form. Submission swaps the listing region in place and
/// scrolls it into view; the location field feeds the suggestion panel as
/// the user types.
fn search_form() -> Markup {
    html! {
        form class="search-form"
            hx-get="/search"
            hx-target="#properties"
            hx-swap="innerHTML show:#properties:top"
            hx-disabled-elt="find button[type='submit']"
        {
            div class="search-row" {
                div class="field field-location" {
                    label for="location" { "Localização" }
                    input type="text" id="location" name="location"
                        placeholder="Bairro, cidade ou região"
                        autocomplete="off"
                        hx-get="/search/suggest"
                        hx-trigger="keyup changed delay:300ms"
                        hx-target="#location-suggestions";
                    div id="location-suggestions" {}
                }
                div class="field" {
                    label for="property_type" { "Tipo de Imóvel" }
                    select id="property_type" name="property_type" {
                        option value="" { "Todos os tipos" }
                        @for kind in PropertyType::ALL {
                            option value=(kind.as_str()) { (kind.label_pt()) }
                        }
                    }
                }
                div class="field" {
                    label for="status" { "Status" }
                    select id="status" name="status" {
                        option value="" { "Todos" }
                        @for status in PropertyStatus::ALL {
                            option value=(status.as_str()) { (status.label_pt()) }
                        }
                    }
                }
            }

            div class="search-row" {
                div class="field" {
                    label for="price_range" { "Faixa de Preço" }
                    select id="price_range" name="price_range" {
                        option value="" { "Qualquer valor" }
                        option value="0-500000" { "Até R$ 500.000" }
                        option value="500000-1000000" { "R$ 500.000 - R$ 1.000.000" }
                        option value="1000000-2000000" { "R$ 1.000.000 - R$ 2.000.000" }
                        option value="2000000-5000000" { "R$ 2.000.000 - R$ 5.000.000" }
                        option value="5000000-" { "Acima de R$ 5.000.000" }
                    }
                }
                (min_select("bedrooms", "Dormitórios", 5))
                (min_select("suites", "Suítes", 4))
                (min_select("parking_spots", "Vagas", 4))
            }

            div class="search-actions" {
                a class="button button-outline" href="/" { "Limpar" }
                button type="submit" class="button button-primary" { "Buscar Imóveis" }
            }
        }
    }
}

fn min_select(name: &str, label: &str, max: u32) -> Markup {
    html! {
        div class="field" {
            label for=(name) { (label) }
            select id=(name) name=(name) {
                option value="" { "Qualquer" }
                @for n in 1..=max {
                    option value=(n) { (n) "+" }
                }
            }
        }
    }
}

fn about_section(about: &AboutContent) -> Markup {
    html! {
        section id="about" class="section" {
            div class="region-heading" {
                h2 { "Sobre" }
                p { "Especialista em imóveis, com mais de 5 anos de experiência no mercado imobiliário" }
            }
            div class="about-grid" {
                @if !about.profile_image.is_empty() {
                    img class="about-photo" src=(about.profile_image) alt="Foto de perfil";
                }
                div class="about-story" {
                    h3 { "Minha História" }
                    @for paragraph in about.story_paragraphs() {
                        p { (paragraph) }
                    }

                    div class="about-highlights" {
                        (highlight("Premiada", "Reconhecida entre os melhores corretores de São Paulo"))
                        (highlight("Especialista", "Foco em lançamentos de empreendimento"))
                        (highlight("Rede", "Ampla rede de contatos e parcerias com construtoras"))
                        (highlight("Dedicação", "Atendimento personalizado e acompanhamento completo"))
                    }
                }
            }
        }
    }
}

fn highlight(title: &str, text: &str) -> Markup {
    html! {
        div class="highlight-card" {
            h4 { (title) }
            p { (text) }
        }
    }
}

fn categories_section() -> Markup {
    let categories = [
        ("Lançamentos", "Novos empreendimentos e pré-lançamentos exclusivos"),
        ("Residencial", "Casas e apartamentos para todos os estilos de vida"),
        ("Alto Padrão", "Imóveis de luxo em localizações privilegiadas"),
        ("Comercial", "Salas comerciais e escritórios"),
    ];

    html! {
        section id="categories" class="section section-alt" {
            div class="region-heading" {
                h2 { "Especialidades" }
                p { "Encontre o imóvel ideal para você em nossa seleção exclusiva" }
            }
            div class="category-grid" {
                @for (title, description) in categories {
                    div class="category-card" {
                        h3 { (title) }
                        p { (description) }
                    }
                }
            }
        }
    }
}

fn contact_section(notice: Option<&ContactNotice>) -> Markup {
    let visit_times = ["09:00", "10:00", "11:00", "14:00", "15:00", "16:00", "17:00"];

    html! {
        section id="contact" class="section section-alt" {
            div class="region-heading" {
                h2 { "Entre em Contato" }
                p { "Estou aqui para ajudar você a encontrar o imóvel ideal" }
            }

            div class="contact-grid" {
                div class="contact-info" {
                    h3 { "Informações de Contato" }
                    ul {
                        li { "(11) 97858-4270" }
                        li { "contato@vitrine-imoveis.com.br" }
                        li { "São Paulo, SP" }
                    }
                }

                form class="contact-form" action="/contact" method="post" {
                    @match notice {
                        Some(ContactNotice::Sent) => {
                            div class="notice notice-success" {
                                "Mensagem enviada! Em breve entraremos em contato."
                            }
                        }
                        Some(ContactNotice::Invalid(msg)) => {
                            div class="notice notice-error" { (msg) }
                        }
                        None => {}
                    }

                    div class="field" {
                        label for="name" { "Nome" }
                        input type="text" id="name" name="name" required;
                    }
                    div class="field" {
                        label for="email" { "E-mail" }
                        input type="email" id="email" name="email" required;
                    }
                    div class="field" {
                        label for="phone" { "Telefone" }
                        input type="tel" id="phone" name="phone";
                    }
                    div class="field" {
                        label for="message" { "Mensagem" }
                        textarea id="message" name="message" rows="4" required {}
                    }
                    div class="search-row" {
                        div class="field" {
                            label for="visit_date" { "Data da visita (opcional)" }
                            input type="date" id="visit_date" name="visit_date";
                        }
                        div class="field" {
                            label for="visit_time" { "Horário" }
                            select id="visit_time" name="visit_time" {
                                option value="" { "Qualquer horário" }
                                @for time in visit_times {
                                    option value=(time) { (time) }
                                }
                            }
                        }
                    }
                    button type="submit" class="button button-primary" { "Enviar Mensagem" }
                }
            }
        }
    }
}
