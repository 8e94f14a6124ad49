use maud::{html, Markup, DOCTYPE};

pub fn desktop_layout(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="pt-BR" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " | Vitrine Imóveis" }
                link rel="stylesheet" href="/static/main.css";
                script src="https://unpkg.com/htmx.org@1.9.12" defer {}
            }
            body {
                header class="site-header" {
                    a href="/" class="brand" { "Vitrine Imóveis" }
                    nav {
                        ul {
                            li { a href="/#home" { "Início" } }
                            li { a href="/#about" { "Sobre" } }
                            li { a href="/#launches" { "Lançamentos" } }
                            li { a href="/#properties" { "Imóveis" } }
                            li { a href="/#contact" { "Contato" } }
                        }
                    }
                    a href="/admin" class="admin-link" { "Área restrita" }
                }

                (content)

                footer class="site-footer" {
                    p { "Vitrine Imóveis · especialista em imóveis, lançamentos e empreendimentos exclusivos." }
                    p {
                        a href="https://wa.me/5511978584270" { "WhatsApp" }
                        " · São Paulo, SP"
                    }
                }
            }
        }
    }
}

/// Admin pages share the shell but swap the public nav for back-office
/// navigation and a logout control.
pub fn admin_layout(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="pt-BR" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " | Vitrine Admin" }
                link rel="stylesheet" href="/static/main.css";
            }
            body {
                header class="site-header" {
                    a href="/admin/properties" class="brand" { "Vitrine Admin" }
                    nav {
                        ul {
                            li { a href="/admin/properties" { "Imóveis" } }
                            li { a href="/admin/about" { "Sobre mim" } }
                            li { a href="/" { "Ver site" } }
                        }
                    }
                    form action="/admin/logout" method="post" class="inline-form" {
                        button type="submit" { "Sair" }
                    }
                }

                main class="container" {
                    (content)
                }
            }
        }
    }
}
