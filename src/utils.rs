use crate::types::{MetricValue, SourceCount};

/// Group digits in threes with `,` separators (en-US style)
/// Example: 2099003 -> "2,099,003"
pub fn format_number(value: u64) -> String {
    let digits = value.to_string();
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }

    out
}

/// Group the integer part of any JSON number, keeping sign and fraction
/// Example: -1234.5 -> "-1,234.5"
pub fn format_json_number(value: &serde_json::Number) -> String {
    if let Some(n) = value.as_u64() {
        return format_number(n);
    }

    let text = value.to_string();
    // exponent notation is left alone
    if text.contains(['e', 'E']) {
        return text;
    }

    let (sign, unsigned) = match text.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", text.as_str()),
    };
    let (integer, fraction) = match unsigned.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (unsigned, None),
    };

    let grouped = match integer.parse::<u64>() {
        Ok(n) => format_number(n),
        Err(_) => integer.to_string(),
    };
    match fraction {
        Some(fraction) => format!("{sign}{grouped}.{fraction}"),
        None => format!("{sign}{grouped}"),
    }
}

/// Text shown on a metric card
pub fn format_metric(value: &MetricValue) -> String {
    match value {
        MetricValue::Number(n) => format_json_number(n),
        MetricValue::Text(s) => s.clone(),
    }
}

/// `numerator / denominator` rounded to one decimal place
pub fn ratio_one_decimal(numerator: u64, denominator: u64) -> String {
    if denominator == 0 {
        return "0.0".to_string();
    }
    format!("{:.1}", numerator as f64 / denominator as f64)
}

/// Display order for the chart: count descending, ties keep input order
pub fn sort_sources_desc(sources: &[SourceCount]) -> Vec<SourceCount> {
    let mut sorted = sources.to_vec();
    // sort_by is stable
    sorted.sort_by(|a, b| b.count.cmp(&a.count));
    sorted
}
