//! Проверки полей форм, общие для всех DTO.
//!
//! Длина считается в символах, а не в байтах: в названиях банков
//! встречаются «ñ» и ударные гласные.

pub fn check_length(value: &str, min: usize, max: usize, message: &str) -> Result<(), String> {
    let len = value.trim().chars().count();
    if len < min || len > max {
        return Err(message.to_string());
    }
    Ok(())
}

pub fn check_max_length(value: &str, max: usize, message: &str) -> Result<(), String> {
    if value.chars().count() > max {
        return Err(message.to_string());
    }
    Ok(())
}

pub fn check_digits(value: &str, len: usize, message: &str) -> Result<(), String> {
    let value = value.trim();
    if value.chars().count() != len || !value.chars().all(|c| c.is_ascii_digit()) {
        return Err(message.to_string());
    }
    Ok(())
}

pub fn check_non_negative(value: f64, message: &str) -> Result<(), String> {
    if !value.is_finite() || value < 0.0 {
        return Err(message.to_string());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_counts_chars() {
        assert!(check_length("Peña", 4, 4, "err").is_ok());
        assert!(check_length("  ab ", 3, 10, "err").is_err());
    }

    #[test]
    fn test_digits() {
        assert!(check_digits("1790010937001", 13, "err").is_ok());
        assert!(check_digits("17900109370A1", 13, "err").is_err());
        assert!(check_digits("179001", 13, "err").is_err());
    }

    #[test]
    fn test_non_negative_rejects_nan() {
        assert!(check_non_negative(f64::NAN, "err").is_err());
        assert!(check_non_negative(0.0, "err").is_ok());
    }
}
