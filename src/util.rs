// Small helpers shared across components.

use wasm_bindgen::JsValue;

/// Literal rupee formatting, e.g. `₹150`. No locale handling.
pub fn format_rupees(amount: u64) -> String {
    format!("₹{}", amount)
}

pub fn clog(msg: &str) {
    web_sys::console::log_1(&JsValue::from_str(msg));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rupee_formatting_is_literal() {
        assert_eq!(format_rupees(0), "₹0");
        assert_eq!(format_rupees(150), "₹150");
        assert_eq!(format_rupees(1234), "₹1234");
    }
}
