pub const LOGO_URL: &str =
    "https://res.cloudinary.com/duaec3vl4/image/upload/v1767508906/Picsart_26-01-04_09-40-07-527_ina23d.png";
pub const CONTACT_EMAIL: &str = "picorajab@gmail.com";
pub const WHATSAPP_URL: &str = "https://wa.me/966503870362";
pub const COPYRIGHT_YEAR: u16 = 2025;
/// How long the language toast stays up.
pub const TOAST_DURATION_MS: u32 = 2_000;

pub fn mailto() -> String {
    format!("mailto:{}", CONTACT_EMAIL)
}
