use crate::service::ServiceContext;
use log::info;
use rocket::figment::Figment;
use rocket::fs::FileServer;
use rocket::{catchers, routes, Build, Config, Rocket};
use rocket_dyn_templates::Template;

pub mod data;
mod handlers;

pub fn rocket_main(context: ServiceContext) -> Rocket<Build> {
    let conf = context.config.clone();
    let config = Figment::from(Config::default())
        .merge(("port", conf.http_port))
        .merge(("address", conf.http_address.to_owned()));

    let rocket = rocket::custom(config)
        .attach(Template::fairing())
        .manage(context)
        .register("/", catchers![handlers::not_found])
        .mount("/", routes![handlers::home, handlers::about])
        .mount(
            "/contact",
            routes![
                handlers::contacts::list,
                handlers::contacts::add_form,
                handlers::contacts::create,
                handlers::contacts::edit_form,
                handlers::contacts::update,
                handlers::contacts::remove,
                handlers::contacts::detail,
            ],
        )
        .mount("/", FileServer::from(&conf.static_files_folder).rank(5));

    info!("Contact Book | Listening on {}", conf.http_listen_url());

    rocket
}
