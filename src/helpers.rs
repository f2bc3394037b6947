pub fn format_number(num: f64) -> String {
    if num.fract() == 0.0 {
        // If it's a whole number, format with no decimals
        format!("{:.0}", num)
    } else {
        // If it has decimals, format with up to 2 decimal places
        format!("{:.2}", num)
            .trim_end_matches('0')
            .trim_end_matches('.')
            .to_string()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn trims_trailing_zeros() {
        assert_eq!(format_number(100.0), "100");
        assert_eq!(format_number(1.5), "1.5");
        assert_eq!(format_number(f64::from(0.7f32)), "0.7");
        assert_eq!(format_number(1.25), "1.25");
    }
}
