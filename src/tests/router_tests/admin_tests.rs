use crate::router::handle;
use crate::tests::utils::{
    body_string, get, get_with_cookie, login, post_form_with_cookie, test_ctx,
};

const VALID_PROPERTY: &[(&str, &str)] = &[
    ("title", "Apartamento Vila Nova"),
    ("description", "Andar alto, face norte."),
    ("price", "980000"),
    ("location", "Vila Nova Conceição"),
    ("city", "São Paulo"),
    ("region", "SP"),
    ("type", "apartment"),
    ("status", "new"),
    ("bedrooms", "3"),
    ("suites", "1"),
    ("bathrooms", "2"),
    ("parking_spots", "2"),
    ("area", "120"),
    ("amenities", "Piscina\nAcademia"),
    ("images", "vila-nova-01.jpg\nhttps://cdn.example.com/vila-nova-02.jpg"),
    ("video_links", "https://youtu.be/abc123"),
];

#[test]
fn created_property_shows_up_on_the_site_and_in_search() {
    let ctx = test_ctx();
    let session = login(&ctx);

    let resp = handle(
        post_form_with_cookie("/admin/properties", &session, VALID_PROPERTY),
        &ctx,
    )
    .unwrap();
    assert_eq!(resp.status(), 303);

    let mut home = handle(get("/"), &ctx).unwrap();
    assert!(body_string(&mut home).contains("Apartamento Vila Nova"));

    let mut found = handle(get("/search?location=Vila%20Nova&bedrooms=3"), &ctx).unwrap();
    assert!(body_string(&mut found).contains("Apartamento Vila Nova"));
}

#[test]
fn missing_required_fields_re_render_the_form() {
    let ctx = test_ctx();
    let session = login(&ctx);

    let mut resp = handle(
        post_form_with_cookie(
            "/admin/properties",
            &session,
            &[("title", "Sem preço"), ("location", "Centro"), ("price", "")],
        ),
        &ctx,
    )
    .unwrap();

    assert_eq!(resp.status(), 400);
    let body = body_string(&mut resp);
    assert!(body.contains("Preencha todos os campos obrigatórios"));
    // The typed values survive the round trip.
    assert!(body.contains("Sem preço"));
}

#[test]
fn relative_video_links_are_rejected() {
    let ctx = test_ctx();
    let session = login(&ctx);

    let mut resp = handle(
        post_form_with_cookie(
            "/admin/properties",
            &session,
            &[
                ("title", "Com vídeo"),
                ("location", "Centro"),
                ("price", "500000"),
                ("video_links", "videos/tour.mp4"),
            ],
        ),
        &ctx,
    )
    .unwrap();

    assert_eq!(resp.status(), 400);
    assert!(body_string(&mut resp).contains("URL do vídeo inválida"));
}

#[test]
fn more_than_ten_images_are_rejected() {
    let ctx = test_ctx();
    let session = login(&ctx);

    let images = (0..11)
        .map(|i| format!("img-{i}.jpg"))
        .collect::<Vec<_>>()
        .join("\n");

    let mut resp = handle(
        post_form_with_cookie(
            "/admin/properties",
            &session,
            &[
                ("title", "Com fotos demais"),
                ("location", "Centro"),
                ("price", "500000"),
                ("images", &images),
            ],
        ),
        &ctx,
    )
    .unwrap();

    assert_eq!(resp.status(), 400);
    assert!(body_string(&mut resp).contains("Máximo de 10 imagens"));
}

#[test]
fn edit_form_is_prefilled_and_update_persists() {
    let ctx = test_ctx();
    let session = login(&ctx);

    handle(
        post_form_with_cookie("/admin/properties", &session, VALID_PROPERTY),
        &ctx,
    )
    .unwrap();
    let id: i64 = ctx
        .db
        .with_conn(|conn| {
            conn.query_row("select id from properties", [], |r| r.get(0))
                .map_err(|e| crate::errors::ServerError::DbError(e.to_string()))
        })
        .unwrap();

    let mut form = handle(
        get_with_cookie(&format!("/admin/properties/{id}"), &session),
        &ctx,
    )
    .unwrap();
    let body = body_string(&mut form);
    assert!(body.contains("Apartamento Vila Nova"));
    assert!(body.contains("980000"));

    let mut updated: Vec<(&str, &str)> = VALID_PROPERTY.to_vec();
    updated[0] = ("title", "Apartamento Vila Nova Reformado");
    let resp = handle(
        post_form_with_cookie(&format!("/admin/properties/{id}"), &session, &updated),
        &ctx,
    )
    .unwrap();
    assert_eq!(resp.status(), 303);

    let mut list = handle(get_with_cookie("/admin/properties", &session), &ctx).unwrap();
    assert!(body_string(&mut list).contains("Apartamento Vila Nova Reformado"));
}

#[test]
fn delete_removes_the_property_from_the_site() {
    let ctx = test_ctx();
    let session = login(&ctx);

    handle(
        post_form_with_cookie("/admin/properties", &session, VALID_PROPERTY),
        &ctx,
    )
    .unwrap();
    let id: i64 = ctx
        .db
        .with_conn(|conn| {
            conn.query_row("select id from properties", [], |r| r.get(0))
                .map_err(|e| crate::errors::ServerError::DbError(e.to_string()))
        })
        .unwrap();

    let resp = handle(
        post_form_with_cookie(&format!("/admin/properties/{id}/delete"), &session, &[]),
        &ctx,
    )
    .unwrap();
    assert_eq!(resp.status(), 303);

    let mut home = handle(get("/"), &ctx).unwrap();
    assert!(!body_string(&mut home).contains("Apartamento Vila Nova"));
}

#[test]
fn about_copy_is_editable_and_shows_on_the_home_page() {
    let ctx = test_ctx();
    let session = login(&ctx);

    let mut resp = handle(
        post_form_with_cookie(
            "/admin/about",
            &session,
            &[
                ("profile_image", "https://cdn.example.com/perfil.jpg"),
                ("my_story", "Corretora há dez anos.\n\nFoco em lançamentos."),
            ],
        ),
        &ctx,
    )
    .unwrap();
    assert_eq!(resp.status(), 200);
    assert!(body_string(&mut resp).contains("Conteúdo atualizado"));

    let mut home = handle(get("/"), &ctx).unwrap();
    let body = body_string(&mut home);
    assert!(body.contains("Corretora há dez anos."));
    assert!(body.contains("Foco em lançamentos."));
}
