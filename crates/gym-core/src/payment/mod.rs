//! Payment input formatting and completeness rules.
//!
//! Card numbers are displayed in groups of four and stored as bare digits.
//! Only fixed-length 16 digit cards are accepted.

use crate::onboarding::CreditCardData;

pub const CARD_NUMBER_LENGTH: usize = 16;
pub const CARD_NUMBER_DISPLAY_LENGTH: usize = 19;
pub const CVV_LENGTH: usize = 3;
pub const EXPIRY_DATE_LENGTH: usize = 4;
pub const EXPIRY_DATE_DISPLAY_LENGTH: usize = 5;

fn digits(input: &str, limit: usize) -> String {
    input.chars().filter(char::is_ascii_digit).take(limit).collect()
}

/// `"1234567890123456"` -> `"1234 5678 9012 3456"`.
pub fn format_card_number(input: &str) -> String {
    let digits = digits(input, CARD_NUMBER_LENGTH);
    let mut formatted = String::with_capacity(CARD_NUMBER_DISPLAY_LENGTH);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && i % 4 == 0 {
            formatted.push(' ');
        }
        formatted.push(c);
    }
    formatted
}

/// `"1225"` -> `"12/25"`; the slash appears once two digits are typed.
pub fn format_expiry_date(input: &str) -> String {
    let digits = digits(input, EXPIRY_DATE_LENGTH);
    if digits.len() >= 2 {
        format!("{}/{}", &digits[..2], &digits[2..])
    } else {
        digits
    }
}

pub fn format_cvv(input: &str) -> String {
    digits(input, CVV_LENGTH)
}

pub fn strip_whitespace(input: &str) -> String {
    input.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Payment form in display form, as the user sees it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CardForm {
    pub cardholder_name: String,
    pub card_number: String,
    pub expiry_date: String,
    pub cvv: String,
}

impl CardForm {
    pub fn set_cardholder_name(&mut self, value: &str) {
        self.cardholder_name = value.to_string();
    }

    pub fn set_card_number(&mut self, value: &str) {
        self.card_number = format_card_number(value);
    }

    pub fn set_expiry_date(&mut self, value: &str) {
        self.expiry_date = format_expiry_date(value);
    }

    pub fn set_cvv(&mut self, value: &str) {
        self.cvv = format_cvv(value);
    }

    pub fn is_complete(&self) -> bool {
        let card_digits = digits(&self.card_number, usize::MAX);
        let expiry_digits = digits(&self.expiry_date, usize::MAX);

        !self.cardholder_name.trim().is_empty()
            && card_digits.len() == CARD_NUMBER_LENGTH
            && expiry_digits.len() == EXPIRY_DATE_LENGTH
            && self.expiry_date.len() == EXPIRY_DATE_DISPLAY_LENGTH
            && self.cvv.len() == CVV_LENGTH
    }

    /// Data to store: identical to the form except the card number loses its spaces.
    pub fn to_card_data(&self) -> CreditCardData {
        CreditCardData {
            card_number: strip_whitespace(&self.card_number),
            expiry_date: self.expiry_date.clone(),
            cvv: self.cvv.clone(),
            cardholder_name: self.cardholder_name.clone(),
        }
    }
}
