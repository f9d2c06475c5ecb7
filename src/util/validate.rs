use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // one @, no whitespace, dotted domain
    static ref EMAIL_REGEX: Regex =
        Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex compiles");

    // Indonesian mobile numbers: optional +62/62/0 country prefix, an 8xx
    // operator prefix, then 6 to 9 further digits
    static ref MOBILE_PHONE_REGEX: Regex =
        Regex::new(r"^(\+?62|0)8(1[1-9]|2[1238]|3[1238]|5[1-35-9]|7[78]|8[1-9]|9[5-9])\d{6,9}$")
            .expect("mobile phone regex compiles");
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

pub fn is_valid_mobile_phone(mobile_phone: &str) -> bool {
    MOBILE_PHONE_REGEX.is_match(mobile_phone)
}
