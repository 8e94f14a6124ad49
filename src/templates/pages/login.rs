use maud::{html, Markup, DOCTYPE};

/// Standalone login screen: no public nav, no admin nav.
pub fn login_page(error: Option<&str>) -> Markup {
    html! {
        (DOCTYPE)
        html lang="pt-BR" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { "Entrar | Vitrine Admin" }
                link rel="stylesheet" href="/static/main.css";
            }
            body class="login-body" {
                main class="login-card" {
                    h1 { "Área restrita" }
                    p { "Acesso ao painel de administração de imóveis." }

                    @if let Some(msg) = error {
                        div class="notice notice-error" { (msg) }
                    }

                    form action="/admin/login" method="post" {
                        div class="field" {
                            label for="password" { "Senha" }
                            input type="password" id="password" name="password" required autofocus;
                        }
                        button type="submit" class="button button-primary" { "Entrar" }
                    }

                    a href="/" { "Voltar ao site" }
                }
            }
        }
    }
}
