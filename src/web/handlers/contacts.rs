use super::Result;
use crate::constants::{FLASH_CONTACT_ADDED, FLASH_CONTACT_DELETED, FLASH_CONTACT_UPDATED};
use crate::data::contact::ContactInput;
use crate::service::ServiceContext;
use crate::web::data::{
    DeleteContactForm, EditContactForm, EditContactView, FormResponse, NewContactForm,
};
use rocket::form::Form;
use rocket::request::FlashMessage;
use rocket::response::{Flash, Redirect};
use rocket::{delete, get, post, put, uri, State};
use rocket_dyn_templates::{context, Template};

#[get("/")]
pub async fn list(
    flash: Option<FlashMessage<'_>>,
    state: &State<ServiceContext>,
) -> Result<Template> {
    let contacts = state.contact_service.get_contacts().await?;
    let msg = flash.map(|f| f.message().to_owned());
    Ok(Template::render(
        "contact",
        context! { title: "Contacts", contacts, msg },
    ))
}

#[get("/add")]
pub async fn add_form() -> Template {
    Template::render("add-contact", context! { title: "Add Contact" })
}

#[post("/", data = "<form>")]
pub async fn create(
    form: Form<NewContactForm>,
    state: &State<ServiceContext>,
) -> Result<FormResponse> {
    let input = ContactInput::from(form.into_inner());

    let errors = state.contact_service.validate_contact(&input, None).await?;
    if !errors.is_empty() {
        return Ok(FormResponse::Invalid(Template::render(
            "add-contact",
            context! { title: "Add Contact", errors, contact: &input },
        )));
    }

    state.contact_service.add_contact(input).await?;
    Ok(FormResponse::Redirect(Flash::success(
        Redirect::to(uri!("/contact", list)),
        FLASH_CONTACT_ADDED,
    )))
}

#[get("/edit/<name>")]
pub async fn edit_form(name: &str, state: &State<ServiceContext>) -> Result<Template> {
    let contact = state
        .contact_service
        .get_contact_by_name(name)
        .await?
        .map(EditContactView::from);
    Ok(Template::render(
        "edit-contact",
        context! { title: "Edit Contact", contact },
    ))
}

#[put("/", data = "<form>")]
pub async fn update(
    form: Form<EditContactForm>,
    state: &State<ServiceContext>,
) -> Result<FormResponse> {
    let form = form.into_inner();
    let input = ContactInput::from(&form);

    let errors = state
        .contact_service
        .validate_contact(&input, Some(&form.old_name))
        .await?;
    if !errors.is_empty() {
        let contact = EditContactView::from(&form);
        return Ok(FormResponse::Invalid(Template::render(
            "edit-contact",
            context! { title: "Edit Contact", errors, contact },
        )));
    }

    state.contact_service.update_contact(&form.id, input).await?;
    Ok(FormResponse::Redirect(Flash::success(
        Redirect::to(uri!("/contact", list)),
        FLASH_CONTACT_UPDATED,
    )))
}

#[delete("/", data = "<form>")]
pub async fn remove(
    form: Form<DeleteContactForm>,
    state: &State<ServiceContext>,
) -> Result<Flash<Redirect>> {
    state
        .contact_service
        .delete_contact_by_name(&form.name)
        .await?;
    Ok(Flash::success(
        Redirect::to(uri!("/contact", list)),
        FLASH_CONTACT_DELETED,
    ))
}

#[get("/<name>")]
pub async fn detail(name: &str, state: &State<ServiceContext>) -> Result<Template> {
    let contact = state.contact_service.get_contact_by_name(name).await?;
    Ok(Template::render(
        "detail",
        context! { title: "Contact Detail", contact },
    ))
}
