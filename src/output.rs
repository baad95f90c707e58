//! Pretty-printing of decoded tokens.
//!
//! Three titled sections with per-section colors (header magenta, payload
//! blue, signature green), JSON indented with two spaces, and a dim summary
//! line for the registered time claims when the payload carries any.

use serde_json::Value;

use crate::jwt::{expiry, format_timestamp, time_claim, DecodedToken, Expiry};
use crate::log::{self, colorize, colors};

pub fn print_pretty(decoded: &DecodedToken) {
    print_section("Header", colors::MAGENTA, &pretty_json(&decoded.header));
    print_section("Payload (Claims)", colors::BLUE, &pretty_json(&decoded.payload));
    print_section("Signature", colors::GREEN, &decoded.signature);

    if let Some(summary) = time_summary(&decoded.payload) {
        println!();
        log::dim(&summary);
    }
}

fn print_section(title: &str, color: &str, body: &str) {
    println!("{}", colorize(title, colors::BOLD));
    for line in body.lines() {
        println!("  {}", colorize(line, color));
    }
    println!();
}

fn pretty_json(value: &Value) -> String {
    // Pretty-printing a Value cannot fail
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}

/// One-line summary of `exp` / `iat` / `nbf`, or `None` if the payload has
/// no numeric time claims.
pub fn time_summary(payload: &Value) -> Option<String> {
    let mut parts = Vec::new();

    match expiry(payload) {
        Expiry::NoExpiry => {}
        Expiry::Expired(exp) => {
            parts.push(format!("exp: {} (expired)", format_timestamp(exp)));
        }
        Expiry::ValidUntil(exp) => {
            parts.push(format!("exp: {} (valid)", format_timestamp(exp)));
        }
    }
    if let Some(iat) = time_claim(payload, "iat") {
        parts.push(format!("iat: {}", format_timestamp(iat)));
    }
    if let Some(nbf) = time_claim(payload, "nbf") {
        parts.push(format!("nbf: {}", format_timestamp(nbf)));
    }

    if parts.is_empty() {
        None
    } else {
        Some(parts.join("  "))
    }
}
