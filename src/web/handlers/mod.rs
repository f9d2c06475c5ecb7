use crate::service::Error;
use log::error;
use rocket::http::Status;
use rocket::response::Responder;
use rocket::{catch, get, Request};
use rocket_dyn_templates::{context, Template};

pub mod contacts;

pub type Result<T> = std::result::Result<T, Error>;

#[get("/")]
pub async fn home() -> Template {
    Template::render("index", context! { title: "Home" })
}

#[get("/about")]
pub async fn about() -> Template {
    Template::render("about", context! { title: "About" })
}

#[catch(404)]
pub fn not_found(req: &Request) -> Template {
    Template::render(
        "not-found",
        context! { title: "Not Found", path: req.uri().to_string() },
    )
}

impl<'r, 'o: 'r> Responder<'r, 'o> for Error {
    fn respond_to(self, req: &rocket::Request) -> rocket::response::Result<'o> {
        match self {
            Error::NotFound => Status::NotFound.respond_to(req),
            // for now handle all persistence errors as InternalServerError
            Error::Persistence(e) => {
                error!("{e}");
                Status::InternalServerError.respond_to(req)
            }
        }
    }
}
