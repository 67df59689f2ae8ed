//! Plain-text screens for each view.

use std::fmt::Write;

use gym_app::views::header::{APP_TITLE, LOGOUT_LABEL};
use gym_app::views::{
    ConditionGroupView, HeaderView, LoginView, PaymentView, StepStatus, SummaryView, TierCard,
    ViewKind,
};

pub fn header(header: Option<&HeaderView>, verifying: bool) -> String {
    let mut out = format!("== {APP_TITLE} ==\n");
    if verifying {
        out.push_str("Verifying your session...\n");
    }
    if let Some(header) = header {
        let _ = writeln!(out, "{}   ({})", header.greeting, LOGOUT_LABEL.to_lowercase());
        let steps: Vec<String> = header
            .steps
            .iter()
            .map(|step| {
                let marker = match step.status {
                    StepStatus::Completed => "x",
                    StepStatus::Active => ">",
                    StepStatus::Upcoming => " ",
                };
                format!("[{marker}] {} {}", step.number, step.name)
            })
            .collect();
        let _ = writeln!(out, "{}", steps.join("  "));
    }
    out
}

pub fn login(view: &LoginView) -> String {
    let mut out = String::from("Create your account\n");
    let _ = writeln!(out, "  Email:    {}", view.email());
    if let Some(err) = view.email_error() {
        let _ = writeln!(out, "            ! {err}");
    }
    out.push_str("  Password: ********\n");
    if let Some(err) = view.error() {
        let _ = writeln!(out, "  [error] {err}");
    }
    let state = if view.can_submit() { "ready" } else { "disabled" };
    let _ = write!(out, "  <{}> ({state})", view.submit_label());
    out
}

pub fn membership(cards: &[TierCard]) -> String {
    let mut out = String::from("Select your membership tier\n");
    for card in cards {
        let marker = if card.selected { "*" } else { "-" };
        let _ = write!(out, "  {marker} {} [{}] {}", card.tier.name, card.tier.id, card.price_label);
        if let Some(badge) = card.badge {
            let _ = write!(out, "  ({badge})");
        }
        let _ = writeln!(out, "\n      Access: {}", card.tier.access_hours);
        for feature in &card.tier.features {
            let _ = writeln!(out, "      + {feature}");
        }
    }
    out.push_str("  select <tier-id> to continue");
    out
}

pub fn payment(view: &PaymentView) -> String {
    let form = view.form();
    let mut out = String::from("Payment details\n");
    let _ = writeln!(out, "  Cardholder: {}", form.cardholder_name);
    let _ = writeln!(out, "  Card:       {}", form.card_number);
    let _ = writeln!(out, "  Expiry:     {}", form.expiry_date);
    let _ = writeln!(out, "  CVV:        {}", "*".repeat(form.cvv.len()));
    let state = if view.can_submit() { "ready" } else { "disabled" };
    let _ = write!(out, "  <Continue> ({state})");
    out
}

pub fn health(groups: &[ConditionGroupView], can_submit: bool) -> String {
    let mut out = String::from("Health information\n");
    for group in groups {
        let _ = writeln!(out, "  {}", group.title);
        for item in &group.items {
            let check = if item.checked { "x" } else { " " };
            let _ = write!(out, "    [{check}] {} ({})", item.name, item.id);
            if item.disabled {
                out.push_str(" - disabled");
            }
            if let Some(badge) = item.badge {
                let _ = write!(out, "  <{badge}>");
            }
            out.push('\n');
        }
    }
    let state = if can_submit { "ready" } else { "disabled" };
    let _ = write!(out, "  <Continue> ({state})");
    out
}

pub fn summary(view: &SummaryView) -> String {
    let mut out = String::from("Welcome! Your Membership is Ready\n\n");
    out.push_str(&view.access_code.render_text());
    let _ = writeln!(out, "\n  Access code: {}\n", view.access_code.short_code());
    let _ = writeln!(out, "  Name:         {}", view.name);
    let _ = writeln!(out, "  Email:        {}", view.email);
    let _ = writeln!(out, "  Member Since: {}", view.member_since);
    let _ = writeln!(out, "  Tier:         {}", view.tier_name);
    let _ = writeln!(out, "  Price:        {}", view.price_label);
    let _ = write!(out, "  Access Hours: {}", view.access_hours);
    if !view.conditions.is_empty() {
        out.push_str("\n  Health Conditions:");
        for name in &view.conditions {
            let _ = write!(out, "\n    - {name}");
        }
    }
    out
}

pub fn help(kind: ViewKind, logged_in: bool) -> String {
    let specific = match kind {
        ViewKind::Login => "email <address>, password <password>, submit",
        ViewKind::Membership => "select <tier-id>",
        ViewKind::Payment => "name <cardholder>, card <number>, expiry <MMYY>, cvv <digits>, submit",
        ViewKind::HealthInfo => "toggle <condition-id>, submit",
        ViewKind::Summary => "(nothing left to do)",
    };
    let mut out = format!("Commands: {specific}\nAlways: show, help, quit");
    if logged_in {
        out.push_str(", logout");
    }
    out
}
