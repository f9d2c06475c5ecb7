// Flash messages
pub const FLASH_CONTACT_ADDED: &str = "Contact added successfully!";
pub const FLASH_CONTACT_UPDATED: &str = "Contact updated successfully!";
pub const FLASH_CONTACT_DELETED: &str = "Contact deleted successfully!";

// Validation
pub const VALIDATION_NAME_REQUIRED: &str = "contact name must not be empty";
pub const VALIDATION_NAME_TAKEN: &str = "contact name is already taken";
pub const VALIDATION_EMAIL_INVALID: &str = "email is not valid";
pub const VALIDATION_MOBILE_PHONE_INVALID: &str = "mobile phone number is not valid";
