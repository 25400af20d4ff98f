#[cfg(debug_assertions)]
pub fn get_payment_base_url() -> &'static str {
    "https://www.sandbox.paypal.com/ncp/payment"  // Sandbox checkout when running locally
}

#[cfg(not(debug_assertions))]
pub fn get_payment_base_url() -> &'static str {
    "https://www.paypal.com/ncp/payment"
}
