//! Number formatting for file sizes

/// Formats a number with a space as thousands separator and the given number of decimals
///
/// # Examples
///
/// ```
/// # use frontend::shared::number_format::format_number_with_decimals;
/// let formatted = format_number_with_decimals(1234.567, 2);
/// assert_eq!(formatted, "1 234.57");
/// ```
pub fn format_number_with_decimals(value: f64, decimals: u8) -> String {
    let formatted = format!("{:.*}", decimals as usize, value);

    let (integer_part, decimal_part) = match formatted.split_once('.') {
        Some((i, d)) => (i, Some(d)),
        None => (formatted.as_str(), None),
    };

    // space every 3 digits from the end of the integer part
    let mut result = String::new();
    let chars: Vec<char> = integer_part.chars().rev().collect();

    for (i, c) in chars.iter().enumerate() {
        if i > 0 && i % 3 == 0 && *c != '-' {
            result.push(' ');
        }
        result.push(*c);
    }

    let formatted_integer = result.chars().rev().collect::<String>();

    match decimal_part {
        Some(d) => format!("{}.{}", formatted_integer, d),
        None => formatted_integer,
    }
}

/// Human-readable file size: bytes below 1 KB, otherwise one decimal
///
/// # Examples
///
/// ```
/// # use frontend::shared::number_format::format_file_size;
/// assert_eq!(format_file_size(12_636.0), "12.3 KB");
/// ```
pub fn format_file_size(bytes: f64) -> String {
    const UNITS: [&str; 3] = ["KB", "MB", "GB"];

    if bytes.round() < 1024.0 {
        return format!("{} B", format_number_with_decimals(bytes.max(0.0), 0));
    }

    let mut value = bytes / 1024.0;
    let mut unit = UNITS[0];
    for next in &UNITS[1..] {
        // compare what will be shown, so 1023.95 KB reads as 1.0 MB
        if (value * 10.0).round() / 10.0 < 1024.0 {
            break;
        }
        value /= 1024.0;
        unit = *next;
    }
    format!("{} {}", format_number_with_decimals(value, 1), unit)
}
