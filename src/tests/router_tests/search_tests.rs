use crate::db::properties::test_support::draft;
use crate::db::properties::insert_property;
use crate::domain::PropertyType;
use crate::router::handle;
use crate::tests::utils::{body_string, get, test_ctx};

fn seed_jardins(ctx: &crate::router::AppContext) {
    ctx.db
        .with_conn(|conn| {
            let mut apartment = draft("Apartamento Jardins", "Jardins");
            apartment.bedrooms = Some(3);
            insert_property(conn, &apartment)?;

            let mut house = draft("Casa Jardins", "Jardins");
            house.kind = PropertyType::House;
            house.bedrooms = Some(2);
            insert_property(conn, &house)?;
            Ok(())
        })
        .unwrap();
}

#[test]
fn search_partial_applies_all_filters() {
    let ctx = test_ctx();
    seed_jardins(&ctx);

    let mut resp = handle(get("/search?location=Jardins&bedrooms=3"), &ctx).unwrap();
    assert_eq!(resp.status(), 200);

    let body = body_string(&mut resp);
    assert!(body.contains("Apartamento Jardins"));
    assert!(!body.contains("Casa Jardins"));
}

#[test]
fn search_without_criteria_returns_everything() {
    let ctx = test_ctx();
    seed_jardins(&ctx);

    let mut resp = handle(get("/search"), &ctx).unwrap();
    let body = body_string(&mut resp);
    assert!(body.contains("Apartamento Jardins"));
    assert!(body.contains("Casa Jardins"));
}

#[test]
fn zero_results_echo_the_location_text() {
    let ctx = test_ctx();
    seed_jardins(&ctx);

    let mut resp = handle(get("/search?location=Unknown%20Place"), &ctx).unwrap();
    assert_eq!(resp.status(), 200);

    let body = body_string(&mut resp);
    assert!(body.contains("Nenhum imóvel encontrado em"));
    assert!(body.contains("Unknown Place"));
    assert!(!body.contains("property-card"));
}

#[test]
fn search_records_history_only_for_non_empty_results() {
    let ctx = test_ctx();
    seed_jardins(&ctx);

    handle(get("/search?location=Unknown%20Place"), &ctx).unwrap();
    handle(get("/search?location=Jardins"), &ctx).unwrap();

    let (count, location): (i64, String) = ctx
        .db
        .with_conn(|conn| {
            conn.query_row(
                "select count(*), max(location) from property_search",
                [],
                |r| Ok((r.get(0)?, r.get(1)?)),
            )
            .map_err(|e| crate::errors::ServerError::DbError(e.to_string()))
        })
        .unwrap();
    assert_eq!(count, 1);
    assert_eq!(location, "Jardins");
}

#[test]
fn suggestion_panel_lists_aggregated_locations() {
    let ctx = test_ctx();
    seed_jardins(&ctx);
    ctx.db
        .with_conn(|conn| {
            insert_property(conn, &draft("Apartamento Jardim América", "Jardim América"))?;
            Ok(())
        })
        .unwrap();

    let mut resp = handle(get("/search/suggest?location=jar"), &ctx).unwrap();
    assert_eq!(resp.status(), 200);

    let body = body_string(&mut resp);
    // "Jardins" aggregates two properties and outranks "Jardim América".
    let jardins = body.find("Jardins - São Paulo, SP").expect("jardins suggested");
    let america = body
        .find("Jardim América - São Paulo, SP")
        .expect("jardim américa suggested");
    assert!(jardins < america);
    assert!(body.contains("2 imóvel(is) disponível(is)"));
}

#[test]
fn short_suggestion_input_renders_empty_panel() {
    let ctx = test_ctx();
    seed_jardins(&ctx);

    let mut resp = handle(get("/search/suggest?location=ja"), &ctx).unwrap();
    assert_eq!(resp.status(), 200);
    assert!(body_string(&mut resp).is_empty());
}

#[test]
fn selected_suggestion_round_trips_into_results() {
    let ctx = test_ctx();
    seed_jardins(&ctx);

    // The panel offers "Jardins - São Paulo, SP"; following its link must
    // find the Jardins properties again.
    let mut resp = handle(
        get("/search?location=Jardins+-+S%C3%A3o+Paulo%2C+SP"),
        &ctx,
    )
    .unwrap();

    let body = body_string(&mut resp);
    assert!(body.contains("Apartamento Jardins"));
    assert!(body.contains("Casa Jardins"));
}

#[test]
fn malformed_filter_values_are_rejected() {
    let ctx = test_ctx();
    assert!(matches!(
        handle(get("/search?bedrooms=tres"), &ctx),
        Err(crate::errors::ServerError::BadRequest(_))
    ));
    assert!(matches!(
        handle(get("/search?property_type=castelo"), &ctx),
        Err(crate::errors::ServerError::BadRequest(_))
    ));
}
