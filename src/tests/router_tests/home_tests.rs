use crate::db::properties::test_support::draft;
use crate::db::properties::insert_property;
use crate::domain::PropertyStatus;
use crate::router::handle;
use crate::tests::utils::{body_string, get, post_form, test_ctx};

#[test]
fn home_renders_all_sections() {
    let ctx = test_ctx();

    let mut resp = handle(get("/"), &ctx).unwrap();
    assert_eq!(resp.status(), 200);

    let body = body_string(&mut resp);
    assert!(body.contains("Encontre o Imóvel dos Seus Sonhos"));
    assert!(body.contains("Especialidades"));
    assert!(body.contains("Minha História"));
    assert!(body.contains("Entre em Contato"));
    assert!(body.contains("id=\"properties\""));
}

#[test]
fn home_lists_recent_properties_when_nothing_is_curated() {
    let ctx = test_ctx();
    ctx.db
        .with_conn(|conn| {
            insert_property(conn, &draft("Apartamento Moema", "Moema"))?;
            insert_property(conn, &draft("Casa Pinheiros", "Pinheiros"))?;
            Ok(())
        })
        .unwrap();

    let mut resp = handle(get("/"), &ctx).unwrap();
    let body = body_string(&mut resp);
    assert!(body.contains("Apartamento Moema"));
    assert!(body.contains("Casa Pinheiros"));
}

#[test]
fn launches_region_appears_only_with_launch_inventory() {
    let ctx = test_ctx();

    let mut resp = handle(get("/"), &ctx).unwrap();
    assert!(!body_string(&mut resp).contains("id=\"launches\""));

    ctx.db
        .with_conn(|conn| {
            let mut launch = draft("Residencial Aurora", "Moema");
            launch.status = PropertyStatus::Launch;
            insert_property(conn, &launch)?;
            Ok(())
        })
        .unwrap();

    let mut resp = handle(get("/"), &ctx).unwrap();
    let body = body_string(&mut resp);
    assert!(body.contains("id=\"launches\""));
    assert!(body.contains("Residencial Aurora"));
}

#[test]
fn property_details_page_renders_and_unknown_id_is_404() {
    let ctx = test_ctx();
    let id = ctx
        .db
        .with_conn(|conn| {
            let mut d = draft("Cobertura Jardins", "Jardins");
            d.description = Some("Vista livre.\n\nVaranda gourmet.".to_string());
            insert_property(conn, &d)
        })
        .unwrap();

    let mut resp = handle(get(&format!("/properties/{id}")), &ctx).unwrap();
    assert_eq!(resp.status(), 200);
    let body = body_string(&mut resp);
    assert!(body.contains("Cobertura Jardins"));
    assert!(body.contains("Varanda gourmet"));

    let missing = handle(get("/properties/9999"), &ctx);
    assert!(matches!(missing, Err(crate::errors::ServerError::NotFound)));
}

#[test]
fn contact_submission_is_stored_pending() {
    let ctx = test_ctx();

    let mut resp = handle(
        post_form(
            "/contact",
            &[
                ("name", "Ana"),
                ("email", "ana@example.com"),
                ("phone", "(11) 99999-0000"),
                ("message", "Quero agendar uma visita."),
                ("visit_date", "2026-09-01"),
                ("visit_time", "10:00"),
            ],
        ),
        &ctx,
    )
    .unwrap();

    assert_eq!(resp.status(), 200);
    assert!(body_string(&mut resp).contains("Mensagem enviada"));

    let (count, status): (i64, String) = ctx
        .db
        .with_conn(|conn| {
            conn.query_row(
                "select count(*), max(status) from contact_forms",
                [],
                |r| Ok((r.get(0)?, r.get(1)?)),
            )
            .map_err(|e| crate::errors::ServerError::DbError(e.to_string()))
        })
        .unwrap();
    assert_eq!(count, 1);
    assert_eq!(status, "pending");
}

#[test]
fn contact_with_missing_fields_re_renders_with_error() {
    let ctx = test_ctx();

    let mut resp = handle(
        post_form("/contact", &[("name", ""), ("email", ""), ("message", "")]),
        &ctx,
    )
    .unwrap();

    assert_eq!(resp.status(), 200);
    assert!(body_string(&mut resp).contains("notice-error"));

    let count: i64 = ctx
        .db
        .with_conn(|conn| {
            conn.query_row("select count(*) from contact_forms", [], |r| r.get(0))
                .map_err(|e| crate::errors::ServerError::DbError(e.to_string()))
        })
        .unwrap();
    assert_eq!(count, 0);
}

#[test]
fn unknown_route_is_not_found() {
    let ctx = test_ctx();
    assert!(matches!(
        handle(get("/nao-existe"), &ctx),
        Err(crate::errors::ServerError::NotFound)
    ));
}
