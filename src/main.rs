//
// Copyright (c) 2026 Nathan Fiedler
//

//! The application binary that renders the page on the server and serves
//! the compiled WebAssembly and stylesheet to the browser.

#[cfg(feature = "ssr")]
#[actix_rt::main]
async fn main() -> anyhow::Result<()> {
    use actix_files::Files;
    use actix_web::{middleware, web, App, HttpServer};
    use glassmorphism::config;
    use glassmorphism::preso::leptos::{shell, App as PageApp};
    use leptos::config::get_configuration;
    use leptos_actix::{generate_route_list, LeptosRoutes};
    use log::info;

    dotenvy::dotenv().ok();
    env_logger::init();
    let conf = get_configuration(None)?;
    let addr = config::server_address(conf.leptos_options.site_addr)?;
    info!("listening on http://{}/...", addr);
    HttpServer::new(move || {
        let routes = generate_route_list(PageApp);
        let leptos_options = &conf.leptos_options;
        let site_root = leptos_options.site_root.to_string();
        App::new()
            .wrap(middleware::Logger::default())
            .service(Files::new("/pkg", format!("{site_root}/pkg")))
            .service(Files::new("/assets", &site_root))
            .leptos_routes(routes, {
                let leptos_options = leptos_options.clone();
                move || shell(leptos_options.clone())
            })
            .app_data(web::Data::new(leptos_options.to_owned()))
    })
    .bind(addr)?
    .run()
    .await?;
    Ok(())
}

#[cfg(not(feature = "ssr"))]
pub fn main() {
    // the browser entry point is `hydrate()` in the library
}
