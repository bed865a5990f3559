//! Number and text formatting for the page

/// `1234567` → `"1,234,567"`
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// `5000` → `"₹5,000"`
pub fn rupees(value: u64) -> String {
    format!("₹{}", group_thousands(value))
}

/// Two-decimal rendering used for ratios
pub fn fixed2(value: f64) -> String {
    format!("{:.2}", value)
}

/// Share in [0, 1] as a percentage with `decimals` places: `0.8235` → `"82.35%"`
pub fn percent(share: f64, decimals: usize) -> String {
    format!("{:.*}%", decimals, share * 100.0)
}

/// Escape text for HTML element content and attribute values
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1000), "1,000");
        assert_eq!(group_thousands(100_000), "100,000");
        assert_eq!(group_thousands(1_234_567), "1,234,567");
    }

    #[test]
    fn test_rupees() {
        assert_eq!(rupees(5000), "₹5,000");
    }

    #[test]
    fn test_percent_and_fixed() {
        assert_eq!(percent(0.8235, 2), "82.35%");
        assert_eq!(percent(1.0, 0), "100%");
        assert_eq!(percent(0.75, 0), "75%");
        assert_eq!(fixed2(20.0), "20.00");
        assert_eq!(fixed2(0.125_01), "0.13");
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<b>"Tom" & 'Jerry'</b>"#),
            "&lt;b&gt;&quot;Tom&quot; &amp; &#39;Jerry&#39;&lt;/b&gt;"
        );
    }
}
