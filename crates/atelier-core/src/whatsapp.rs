//! WhatsApp deep links with pre-filled messages.

use tracing::debug;

use crate::artwork::Artwork;
use crate::error::{CoreError, ValidationError};
use crate::platform::LinkOpener;

const GENERAL_MESSAGE: &str =
    "Hello! I'm interested in your artwork. Could we discuss your available pieces?";

/// Why the visitor is getting in touch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ContactIntent {
    #[default]
    General,
    Inquiry,
    Purchase,
}

impl ContactIntent {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContactIntent::General => "general",
            ContactIntent::Inquiry => "inquiry",
            ContactIntent::Purchase => "purchase",
        }
    }
}

impl std::str::FromStr for ContactIntent {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "general" => Ok(ContactIntent::General),
            "inquiry" => Ok(ContactIntent::Inquiry),
            "purchase" => Ok(ContactIntent::Purchase),
            other => Err(ValidationError::UnknownIntent(other.to_string())),
        }
    }
}

/// Format a price for display: `$` and thousands separators, cents only when fractional.
pub fn format_price(price: f64) -> String {
    let cents = (price.abs() * 100.0).round() as u64;
    let whole = cents / 100;
    let frac = cents % 100;

    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    let sign = if price < 0.0 && cents > 0 { "-" } else { "" };
    if frac == 0 {
        format!("{}${}", sign, grouped)
    } else {
        format!("{}${}.{:02}", sign, grouped, frac)
    }
}

fn priced_clause(artwork: &Artwork) -> String {
    match artwork.price {
        Some(price) => format!(" priced at {}", format_price(price)),
        None => String::new(),
    }
}

/// Build the pre-filled message for an intent.
///
/// Inquiry and purchase messages name the artwork, so they need one.
pub fn compose_message(
    intent: ContactIntent,
    artwork: Option<&Artwork>,
) -> Result<String, ValidationError> {
    match (intent, artwork) {
        (ContactIntent::General, _) => Ok(GENERAL_MESSAGE.to_string()),
        (ContactIntent::Inquiry, Some(artwork)) => Ok(format!(
            "Hi! I'm interested in the artwork \"{}\"{}. Could you please provide more details?",
            artwork.title,
            priced_clause(artwork)
        )),
        (ContactIntent::Purchase, Some(artwork)) if !artwork.availability.is_purchasable() => {
            Err(ValidationError::NotForSale(artwork.availability.as_str()))
        }
        (ContactIntent::Purchase, Some(artwork)) => Ok(format!(
            "Hello! I would like to purchase the artwork \"{}\"{}. Please let me know the next steps.",
            artwork.title,
            priced_clause(artwork)
        )),
        (intent, None) => Err(ValidationError::MissingArtwork(intent.as_str())),
    }
}

/// Build `https://wa.me/<digits>?text=<encoded message>`.
pub fn whatsapp_url(phone: &str, message: &str) -> Result<String, ValidationError> {
    let digits: String = phone.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return Err(ValidationError::MissingPhone);
    }
    Ok(format!(
        "https://wa.me/{}?text={}",
        digits,
        urlencoding::encode(message)
    ))
}

/// Build the deep link and hand it to the opener.
pub fn open_whatsapp(
    opener: &dyn LinkOpener,
    phone: &str,
    message: &str,
) -> Result<String, CoreError> {
    let url = whatsapp_url(phone, message)?;
    debug!(url = %url, "Opening WhatsApp");
    opener.open(&url)?;
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::artwork::Availability;
    use crate::platform::memory::RecordingLinkOpener;

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(0.0), "$0");
        assert_eq!(format_price(950.0), "$950");
        assert_eq!(format_price(2500.0), "$2,500");
        assert_eq!(format_price(1234567.0), "$1,234,567");
        assert_eq!(format_price(1500.5), "$1,500.50");
        assert_eq!(format_price(19.99), "$19.99");
    }

    #[test]
    fn test_general_message() {
        let msg = compose_message(ContactIntent::General, None).unwrap();
        assert_eq!(
            msg,
            "Hello! I'm interested in your artwork. Could we discuss your available pieces?"
        );
    }

    #[test]
    fn test_inquiry_message() {
        let artwork = Artwork::new("a1", "Golden Hour").with_price(2500.0);
        let msg = compose_message(ContactIntent::Inquiry, Some(&artwork)).unwrap();
        assert_eq!(
            msg,
            "Hi! I'm interested in the artwork \"Golden Hour\" priced at $2,500. Could you please provide more details?"
        );
    }

    #[test]
    fn test_purchase_message_without_price() {
        let artwork = Artwork::new("a1", "Golden Hour");
        let msg = compose_message(ContactIntent::Purchase, Some(&artwork)).unwrap();
        assert_eq!(
            msg,
            "Hello! I would like to purchase the artwork \"Golden Hour\". Please let me know the next steps."
        );
    }

    #[test]
    fn test_purchase_rejected_when_not_for_sale() {
        for availability in [Availability::Sold, Availability::Reserved, Availability::Portfolio] {
            let artwork = Artwork::new("a1", "Golden Hour").with_availability(availability);
            assert_eq!(
                compose_message(ContactIntent::Purchase, Some(&artwork)),
                Err(ValidationError::NotForSale(availability.as_str()))
            );
            assert!(compose_message(ContactIntent::Inquiry, Some(&artwork)).is_ok());
        }
    }

    #[test]
    fn test_intent_requires_artwork() {
        assert_eq!(
            compose_message(ContactIntent::Purchase, None),
            Err(ValidationError::MissingArtwork("purchase"))
        );
    }

    #[test]
    fn test_whatsapp_url() {
        let url = whatsapp_url("+1 (555) 010-2030", "Hi! Is it \"sold\"?").unwrap();
        assert_eq!(
            url,
            "https://wa.me/15550102030?text=Hi%21%20Is%20it%20%22sold%22%3F"
        );
    }

    #[test]
    fn test_whatsapp_url_without_digits() {
        assert_eq!(whatsapp_url("", "hi"), Err(ValidationError::MissingPhone));
        assert_eq!(whatsapp_url("n/a", "hi"), Err(ValidationError::MissingPhone));
    }

    #[test]
    fn test_open_whatsapp() {
        let opener = RecordingLinkOpener::new();
        let url = open_whatsapp(&opener, "351912345678", "Hello").unwrap();
        assert_eq!(url, "https://wa.me/351912345678?text=Hello");
        assert_eq!(opener.opened(), vec![url]);

        assert!(open_whatsapp(&opener, "", "Hello").is_err());
        assert_eq!(opener.opened().len(), 1);
    }

    #[test]
    fn test_intent_parse() {
        assert_eq!("inquiry".parse::<ContactIntent>().unwrap(), ContactIntent::Inquiry);
        assert!("buy".parse::<ContactIntent>().is_err());
    }
}
