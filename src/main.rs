#[cfg(feature = "ssr")]
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    use actix_files::Files;
    use actix_web::*;
    use carnum::app::*;
    use carnum::config::ServerConfig;
    use carnum::db::Database;
    use leptos::logging::log;
    use leptos_actix::{generate_route_list, LeptosRoutes};
    use std::io::{Error, ErrorKind};

    // Load configuration
    let config = ServerConfig::load()
        .await
        .map_err(|e| Error::new(ErrorKind::Other, e))?;
    let leptos_options = config.leptos_options.clone();
    let addr = leptos_options.site_addr;

    // Initialize the database
    let db = Database::new(&config.database_path).map_err(|e| Error::new(ErrorKind::Other, e))?;
    db.create_schema()
        .await
        .map_err(|e| Error::new(ErrorKind::Other, e))?;
    log!("Schema created successfully!");

    // Generate the list of routes in your Leptos App
    let routes = generate_route_list(App);
    log!("listening on http://{}", &addr);

    HttpServer::new(move || {
        let site_root = &leptos_options.site_root;

        App::new()
            .app_data(web::Data::new(db.clone()))
            // Register the REST API BEFORE the Leptos routes
            .service(web::scope("/api").configure(carnum::api::configure))
            // Serve JS/WASM/CSS from `pkg`
            .service(Files::new("/pkg", format!("{site_root}/pkg")))
            // Serve other assets from the `assets` directory
            .service(Files::new("/assets", site_root))
            .service(favicon)
            .leptos_routes(leptos_options.to_owned(), routes.to_owned(), App)
            .app_data(web::Data::new(leptos_options.to_owned()))
    })
    .bind(&addr)?
    .run()
    .await
}

#[cfg(feature = "ssr")]
#[actix_web::get("favicon.ico")]
async fn favicon(
    leptos_options: actix_web::web::Data<leptos::LeptosOptions>,
) -> actix_web::Result<actix_files::NamedFile> {
    let leptos_options = leptos_options.into_inner();
    let site_root = &leptos_options.site_root;
    Ok(actix_files::NamedFile::open(format!(
        "{site_root}/favicon.ico"
    ))?)
}

#[cfg(not(any(feature = "ssr", feature = "csr")))]
pub fn main() {
    // no client-side main function
    // see lib.rs for hydration function instead
}

#[cfg(all(not(feature = "ssr"), feature = "csr"))]
pub fn main() {
    // a client-side main function is required for using `trunk serve`
    // to run: `trunk serve --open --features csr`
    use carnum::app::*;

    console_error_panic_hook::set_once();

    leptos::mount_to_body(App);
}
