use crate::api::{ApiClient, ApiError, Payslip};

pub async fn fetch_payslip(api: &ApiClient) -> Result<Payslip, ApiError> {
    api.get_my_payroll().await
}

/// Display formatting only; the amounts arrive fully computed.
pub fn format_amount(value: f64) -> String {
    let negative = value < 0.0;
    let cents = (value.abs() * 100.0).round() as u64;
    let whole = cents / 100;
    let fraction = cents % 100;

    let digits = whole.to_string();
    let mut grouped = String::new();
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if negative { "-" } else { "" };
    format!("{sign}${grouped}.{fraction:02}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn amounts_group_thousands_and_keep_two_decimals() {
        assert_eq!(format_amount(4250.0), "$4,250.00");
        assert_eq!(format_amount(1234567.5), "$1,234,567.50");
        assert_eq!(format_amount(0.0), "$0.00");
        assert_eq!(format_amount(999.999), "$1,000.00");
    }

    #[test]
    fn deductions_can_render_negative() {
        assert_eq!(format_amount(-125.25), "-$125.25");
    }
}
