use crate::i18n::{TranslationParams, Translator};

/// Build a `wa.me` click-to-chat link with a prefilled message.
pub fn deep_link(phone: &str, message: &str) -> String {
    format!("https://wa.me/{}?text={}", phone, urlencoding::encode(message))
}

/// Link opened by the contact form: the localized template filled with the
/// visitor's name and email.
pub fn contact_form_link(translator: &Translator, phone: &str, full_name: &str, email: &str) -> String {
    let params = TranslationParams::new()
        .with("fullName", full_name)
        .with("email", email)
        .with("message", "");
    let message = translator.resolve_scalar("contact.form.whatsappTemplate", Some(&params));
    deep_link(phone, &message)
}

/// Link behind the floating WhatsApp button.
pub fn floating_button_link(translator: &Translator, phone: &str) -> String {
    let message = translator.resolve_scalar("floatingWhatsapp.defaultMessage", None);
    deep_link(phone, &message)
}
