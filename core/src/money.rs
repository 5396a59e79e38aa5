// core/src/money.rs

//! Peso display formatting. Amounts are carried everywhere as integral
//! centavos; this is the single place they become strings.

/// Renders centavos as a peso amount, e.g. `8500` -> `"₱85.00"`.
pub fn format_cents(cents: i64) -> String {
  let sign = if cents < 0 { "-" } else { "" };
  let abs = cents.unsigned_abs();
  format!("{}₱{}.{:02}", sign, abs / 100, abs % 100)
}
