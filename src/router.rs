use std::cell::RefCell;
use std::collections::HashMap;
use std::io::Read;
use std::rc::Rc;
use std::time::{SystemTime, UNIX_EPOCH};

use astra::Request;
use url::form_urlencoded;
use url::Url;

use crate::auth;
use crate::config::Config;
use crate::db::properties::{self, PropertyDraft};
use crate::db::site_content::{self, AboutContent};
use crate::db::{contact, Database};
use crate::domain::{PropertyStatus, PropertyType, SearchCriteria};
use crate::errors::ServerError;
use crate::responses::{
    html_response, html_with_status, redirect, redirect_with_cookie, static_response, ResultResp,
};
use crate::search::{broadcast::SearchBroadcast, query, suggest, SearchBus};
use crate::templates::components::{listing_region, suggestion_panel, ListingContext};
use crate::templates::pages::{
    admin_about_page, admin_properties_page, admin_property_form_page, home_page, login_page,
    property_details_page, AboutFormVm, AdminPropertiesVm, ContactNotice, HomeVm,
    PropertyFormValues, PropertyFormVm,
};

#[derive(Clone)]
pub struct AppContext {
    pub db: Database,
    pub config: Config,
}

pub fn handle(mut req: Request, ctx: &AppContext) -> ResultResp {
    let method = req.method().as_str().to_string();
    let path = req.uri().path().to_string();
    let segments: Vec<&str> = path.trim_start_matches('/').split('/').collect();

    match (method.as_str(), segments.as_slice()) {
        ("GET", [""]) => home(ctx, None),
        ("GET", ["search"]) => search(&req, ctx),
        ("GET", ["search", "suggest"]) => suggest_locations(&req, ctx),
        ("GET", ["properties", id]) => property_details(ctx, parse_id(id)?),
        ("POST", ["contact"]) => contact_submit(&mut req, ctx),
        ("GET", ["static", rest @ ..]) => static_response(&rest.join("/")),

        ("GET", ["admin"]) => redirect("/admin/properties"),
        ("GET", ["admin", "login"]) => login_screen(&req, ctx),
        ("POST", ["admin", "login"]) => login_submit(&mut req, ctx),
        ("POST", ["admin", "logout"]) => logout(&req, ctx),

        ("GET", ["admin", "properties"]) => {
            admin(&req, ctx, |ctx| admin_properties(ctx))
        }
        ("GET", ["admin", "properties", "new"]) => {
            admin(&req, ctx, |_| admin_property_new())
        }
        ("POST", ["admin", "properties"]) => {
            let form = read_form(&mut req)?;
            admin(&req, ctx, move |ctx| admin_property_create(ctx, form))
        }
        ("GET", ["admin", "properties", id]) => {
            let id = parse_id(id)?;
            admin(&req, ctx, move |ctx| admin_property_edit(ctx, id))
        }
        ("POST", ["admin", "properties", id]) => {
            let id = parse_id(id)?;
            let form = read_form(&mut req)?;
            admin(&req, ctx, move |ctx| admin_property_update(ctx, id, form))
        }
        ("POST", ["admin", "properties", id, "delete"]) => {
            let id = parse_id(id)?;
            admin(&req, ctx, move |ctx| admin_property_delete(ctx, id))
        }
        ("GET", ["admin", "about"]) => {
            admin(&req, ctx, |ctx| admin_about(ctx, false))
        }
        ("POST", ["admin", "about"]) => {
            let form = read_form(&mut req)?;
            admin(&req, ctx, move |ctx| admin_about_save(ctx, form))
        }

        _ => Err(ServerError::NotFound),
    }
}

// ---------------------------------------------------------------------------
// Public pages
// ---------------------------------------------------------------------------

fn home(ctx: &AppContext, contact_notice: Option<ContactNotice>) -> ResultResp {
    let image_base = ctx.config.image_base_url.clone();
    let vm = ctx.db.with_conn(move |conn| {
        Ok(HomeVm {
            hero_image: site_content::get_hero_image(conn)?,
            about: site_content::get_about(conn)?,
            launches: properties::launches(conn)?,
            featured: properties::default_featured_set(conn)?,
            image_base,
            contact_notice,
        })
    })?;

    html_response(home_page(&vm))
}

fn property_details(ctx: &AppContext, id: i64) -> ResultResp {
    let record = ctx
        .db
        .with_conn(|conn| properties::get_property(conn, id))?
        .ok_or(ServerError::NotFound)?;

    html_response(property_details_page(&record, &ctx.config.image_base_url))
}

/// Run a search and re-render the listing region from whatever the
/// subscribed panel received. Store failures become local region state
/// (generic error, cleared results) instead of propagating.
fn search(req: &Request, ctx: &AppContext) -> ResultResp {
    let params = parse_query(req);
    let criteria = SearchCriteria::from_query(&params)?;
    let image_base = &ctx.config.image_base_url;

    // The listing panel subscribes before the search runs and keeps the
    // last broadcast it saw. Everything rendered below comes out of that
    // captured payload, not out of the composer's return value.
    let captured: Rc<RefCell<Option<SearchBroadcast>>> = Rc::new(RefCell::new(None));
    let mut bus = SearchBus::new();
    {
        let captured = Rc::clone(&captured);
        bus.subscribe(move |broadcast| {
            *captured.borrow_mut() = Some(broadcast.clone());
        });
    }

    let outcome = ctx
        .db
        .with_conn(|conn| query::execute(conn, &criteria, &mut bus));

    if let Err(e) = outcome {
        tracing::error!(error = %e, "property search failed");
        return html_response(listing_region(&[], ListingContext::SearchFailed, image_base));
    }

    let payload = captured.borrow_mut().take();
    match payload {
        Some(broadcast) if broadcast.results.is_empty() => html_response(listing_region(
            &[],
            ListingContext::SearchEmpty {
                location: &broadcast.criteria.location,
            },
            image_base,
        )),
        Some(broadcast) => html_response(listing_region(
            &broadcast.results,
            ListingContext::SearchResults,
            image_base,
        )),
        // A panel subscribed after the broadcast would see nothing and
        // keep its default set; the same rule applies if no broadcast
        // ever reached this one.
        None => {
            let image_base = image_base.clone();
            let featured = ctx.db.with_conn(|conn| properties::default_featured_set(conn))?;
            html_response(listing_region(&featured, ListingContext::Default, &image_base))
        }
    }
}

/// Suggestion panel partial. Resolver failures and short input both come
/// back as an empty panel; this endpoint never errors toward the user.
fn suggest_locations(req: &Request, ctx: &AppContext) -> ResultResp {
    let params = parse_query(req);
    let location = params.get("location").map(String::as_str).unwrap_or("");

    let suggestions = ctx
        .db
        .with_conn(|conn| Ok(suggest::resolve(conn, location)))
        .unwrap_or_default();

    html_response(suggestion_panel(&suggestions))
}

fn contact_submit(req: &mut Request, ctx: &AppContext) -> ResultResp {
    let form = read_form(req)?;
    let get = |key: &str| form.get(key).cloned().unwrap_or_default();
    let optional = |key: &str| Some(get(key)).filter(|v| !v.trim().is_empty());

    let message = contact::ContactMessage {
        name: get("name"),
        email: get("email"),
        phone: optional("phone"),
        message: get("message"),
        visit_date: optional("visit_date"),
        visit_time: optional("visit_time"),
    };

    match ctx.db.with_conn(|conn| contact::insert_contact(conn, &message)) {
        Ok(()) => home(ctx, Some(ContactNotice::Sent)),
        Err(ServerError::BadRequest(msg)) => home(ctx, Some(ContactNotice::Invalid(msg))),
        Err(e) => Err(e),
    }
}

// ---------------------------------------------------------------------------
// Admin: session gate and screens
// ---------------------------------------------------------------------------

fn admin<F>(req: &Request, ctx: &AppContext, screen: F) -> ResultResp
where
    F: FnOnce(&AppContext) -> ResultResp,
{
    if !session_is_live(req, ctx)? {
        return redirect("/admin/login");
    }
    screen(ctx)
}

fn session_is_live(req: &Request, ctx: &AppContext) -> Result<bool, ServerError> {
    let Some(token) = session_token(req) else {
        return Ok(false);
    };
    let now = now_unix();
    ctx.db
        .with_conn(move |conn| auth::session_is_live(conn, &token, now))
}

fn login_screen(req: &Request, ctx: &AppContext) -> ResultResp {
    if session_is_live(req, ctx)? {
        return redirect("/admin/properties");
    }
    html_response(login_page(None))
}

fn login_submit(req: &mut Request, ctx: &AppContext) -> ResultResp {
    let form = read_form(req)?;
    let password = form.get("password").map(String::as_str).unwrap_or("");
    if password.is_empty() {
        return html_with_status(401, login_page(Some("Informe a senha.")));
    }

    let password = password.to_string();
    let ttl = ctx.config.session_ttl_secs;
    let now = now_unix();

    let token = ctx.db.with_conn(move |conn| {
        if !auth::verify_admin_password(conn, &password)? {
            return Ok(None);
        }
        auth::create_session(conn, now, ttl).map(Some)
    })?;

    match token {
        Some(token) => {
            tracing::info!("admin session opened");
            redirect_with_cookie(
                "/admin/properties",
                &format!("session={token}; Path=/; HttpOnly; SameSite=Lax; Max-Age={ttl}"),
            )
        }
        None => html_with_status(401, login_page(Some("Senha incorreta."))),
    }
}

fn logout(req: &Request, ctx: &AppContext) -> ResultResp {
    if let Some(token) = session_token(req) {
        let now = now_unix();
        ctx.db
            .with_conn(move |conn| auth::revoke_session(conn, &token, now))?;
    }
    redirect_with_cookie("/", "session=; Path=/; HttpOnly; Max-Age=0")
}

fn admin_properties(ctx: &AppContext) -> ResultResp {
    let vm = AdminPropertiesVm {
        properties: ctx.db.with_conn(|conn| properties::list_all(conn))?,
        image_base: ctx.config.image_base_url.clone(),
    };
    html_response(admin_properties_page(&vm))
}

fn admin_property_new() -> ResultResp {
    html_response(admin_property_form_page(&PropertyFormVm {
        heading: "Novo Imóvel".to_string(),
        action: "/admin/properties".to_string(),
        values: PropertyFormValues::default(),
        error: None,
    }))
}

fn admin_property_create(ctx: &AppContext, form: HashMap<String, String>) -> ResultResp {
    match parse_property_draft(&form) {
        Ok(draft) => {
            let id = ctx.db.with_conn(move |conn| properties::insert_property(conn, &draft))?;
            tracing::info!(property = id, "property created");
            redirect("/admin/properties")
        }
        Err(ServerError::BadRequest(msg)) => html_with_status(
            400,
            admin_property_form_page(&PropertyFormVm {
                heading: "Novo Imóvel".to_string(),
                action: "/admin/properties".to_string(),
                values: PropertyFormValues::from_params(&form),
                error: Some(msg),
            }),
        ),
        Err(e) => Err(e),
    }
}

fn admin_property_edit(ctx: &AppContext, id: i64) -> ResultResp {
    let record = ctx
        .db
        .with_conn(|conn| properties::get_property(conn, id))?
        .ok_or(ServerError::NotFound)?;

    html_response(admin_property_form_page(&PropertyFormVm {
        heading: "Editar Imóvel".to_string(),
        action: format!("/admin/properties/{id}"),
        values: PropertyFormValues::from_record(&record),
        error: None,
    }))
}

fn admin_property_update(ctx: &AppContext, id: i64, form: HashMap<String, String>) -> ResultResp {
    match parse_property_draft(&form) {
        Ok(draft) => {
            ctx.db.with_conn(move |conn| properties::update_property(conn, id, &draft))?;
            tracing::info!(property = id, "property updated");
            redirect("/admin/properties")
        }
        Err(ServerError::BadRequest(msg)) => html_with_status(
            400,
            admin_property_form_page(&PropertyFormVm {
                heading: "Editar Imóvel".to_string(),
                action: format!("/admin/properties/{id}"),
                values: PropertyFormValues::from_params(&form),
                error: Some(msg),
            }),
        ),
        Err(e) => Err(e),
    }
}

fn admin_property_delete(ctx: &AppContext, id: i64) -> ResultResp {
    ctx.db.with_conn(move |conn| properties::delete_property(conn, id))?;
    tracing::info!(property = id, "property deleted");
    redirect("/admin/properties")
}

fn admin_about(ctx: &AppContext, saved: bool) -> ResultResp {
    let about = ctx.db.with_conn(|conn| site_content::get_about(conn))?;
    html_response(admin_about_page(&AboutFormVm { about, saved }))
}

fn admin_about_save(ctx: &AppContext, form: HashMap<String, String>) -> ResultResp {
    let content = AboutContent {
        profile_image: form.get("profile_image").cloned().unwrap_or_default(),
        my_story: form.get("my_story").cloned().unwrap_or_default(),
    };
    ctx.db
        .with_conn(move |conn| site_content::save_about(conn, &content))?;
    admin_about(ctx, true)
}

// ---------------------------------------------------------------------------
// Form parsing
// ---------------------------------------------------------------------------

/// Decode the admin property form into a draft. Title, location and
/// price are mandatory; numeric fields must parse; video links must be
/// absolute URLs; at most 10 image references.
fn parse_property_draft(form: &HashMap<String, String>) -> Result<PropertyDraft, ServerError> {
    let get = |key: &str| form.get(key).map(String::as_str).unwrap_or("").trim();
    let optional = |key: &str| Some(get(key).to_string()).filter(|v| !v.is_empty());

    let title = get("title");
    let location = get("location");
    let price_raw = get("price");
    if title.is_empty() || location.is_empty() || price_raw.is_empty() {
        return Err(ServerError::BadRequest(
            "Preencha todos os campos obrigatórios".to_string(),
        ));
    }

    let price: i64 = price_raw
        .parse()
        .ok()
        .filter(|p| *p >= 0)
        .ok_or_else(|| ServerError::BadRequest("Preço inválido".to_string()))?;

    let kind = match get("type") {
        "" => PropertyType::Apartment,
        s => PropertyType::parse(s)?,
    };
    let status = match get("status") {
        "" => PropertyStatus::New,
        s => PropertyStatus::parse(s)?,
    };

    let images = non_empty_lines(get("images"));
    if images.len() > 10 {
        return Err(ServerError::BadRequest(
            "Máximo de 10 imagens permitido".to_string(),
        ));
    }

    let video_links = non_empty_lines(get("video_links"));
    for link in &video_links {
        if Url::parse(link).is_err() {
            return Err(ServerError::BadRequest(
                "URL do vídeo inválida. Insira uma URL completa (começando com http:// ou https://)"
                    .to_string(),
            ));
        }
    }

    Ok(PropertyDraft {
        title: title.to_string(),
        description: optional("description"),
        price,
        location: location.to_string(),
        city: optional("city"),
        region: optional("region"),
        kind,
        status,
        display_status: optional("display_status"),
        bedrooms: parse_optional_count(get("bedrooms"), "Dormitórios")?,
        suites: parse_optional_count(get("suites"), "Suítes")?,
        bathrooms: parse_optional_count(get("bathrooms"), "Banheiros")?,
        parking_spots: parse_optional_count(get("parking_spots"), "Vagas")?,
        area: parse_optional_area(get("area"))?,
        amenities: non_empty_lines(get("amenities")),
        images,
        video_links,
    })
}

fn non_empty_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(str::to_string)
        .collect()
}

fn parse_optional_count(raw: &str, field: &str) -> Result<Option<i64>, ServerError> {
    if raw.is_empty() {
        return Ok(None);
    }
    raw.parse()
        .ok()
        .filter(|n| *n >= 0)
        .map(Some)
        .ok_or_else(|| ServerError::BadRequest(format!("Valor inválido para {field}")))
}

fn parse_optional_area(raw: &str) -> Result<Option<f64>, ServerError> {
    if raw.is_empty() {
        return Ok(None);
    }
    raw.parse()
        .ok()
        .filter(|a: &f64| *a >= 0.0)
        .map(Some)
        .ok_or_else(|| ServerError::BadRequest("Área inválida".to_string()))
}

// ---------------------------------------------------------------------------
// Request plumbing
// ---------------------------------------------------------------------------

fn parse_id(segment: &str) -> Result<i64, ServerError> {
    segment.parse().map_err(|_| ServerError::NotFound)
}

fn parse_query(req: &Request) -> HashMap<String, String> {
    match req.uri().query() {
        Some(q) => form_urlencoded::parse(q.as_bytes()).into_owned().collect(),
        None => HashMap::new(),
    }
}

fn read_form(req: &mut Request) -> Result<HashMap<String, String>, ServerError> {
    let mut buf = Vec::new();
    req.body_mut()
        .reader()
        .read_to_end(&mut buf)
        .map_err(|e| ServerError::BadRequest(format!("unreadable body: {e}")))?;
    Ok(form_urlencoded::parse(&buf).into_owned().collect())
}

fn session_token(req: &Request) -> Option<String> {
    let header = req.headers().get("Cookie")?.to_str().ok()?;
    header
        .split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == "session")
        .map(|(_, value)| value.to_string())
}

fn now_unix() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system clock before unix epoch")
        .as_secs() as i64
}
