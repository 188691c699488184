//! # Form State Module
//!
//! Text buffers behind the two numeric entry fields.
//!
//! egui text edits need a `String` to write into, while the session stores parsed,
//! clamped values. After each edit the buffer is brought back in line with what the
//! session actually stored, so typing `-5` into the minutes field shows `0` and
//! typing letters clears it. Buffers that already parse to the stored value (such
//! as `2.` while typing `2.5`) are left alone.

use shared::NumericField;
use std::fmt;
use std::str::FromStr;

/// Raw text for the numeric fields
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FormState {
    pub time_input: String,
    pub people_input: String,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.time_input.clear();
        self.people_input.clear();
    }

    pub fn sync_time_input(&mut self, stored: NumericField<f64>) {
        sync_buffer(&mut self.time_input, stored.value());
    }

    pub fn sync_people_input(&mut self, stored: NumericField<u32>) {
        sync_buffer(&mut self.people_input, stored.value());
    }
}

fn sync_buffer<T>(buffer: &mut String, stored: Option<T>)
where
    T: Copy + PartialEq + fmt::Display + FromStr,
{
    match stored {
        None => buffer.clear(),
        Some(value) => {
            if buffer.trim().parse::<T>().ok() != Some(value) {
                *buffer = value.to_string();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamped_minutes_rewrite_buffer() {
        let mut form = FormState::new();
        form.time_input = "-5".to_string();
        form.sync_time_input(NumericField::<f64>::parse_minutes(&form.time_input));
        assert_eq!(form.time_input, "0");
    }

    #[test]
    fn test_partial_decimal_is_kept() {
        let mut form = FormState::new();
        form.time_input = "2.".to_string();
        form.sync_time_input(NumericField::<f64>::parse_minutes(&form.time_input));
        assert_eq!(form.time_input, "2.");

        form.time_input = " 30 ".to_string();
        form.sync_time_input(NumericField::<f64>::parse_minutes(&form.time_input));
        assert_eq!(form.time_input, " 30 ");
    }

    #[test]
    fn test_non_numeric_text_clears_buffer() {
        let mut form = FormState::new();
        form.time_input = "abc".to_string();
        form.sync_time_input(NumericField::<f64>::parse_minutes(&form.time_input));
        assert!(form.time_input.is_empty());

        form.people_input = "many".to_string();
        form.sync_people_input(NumericField::<u32>::parse_people(&form.people_input));
        assert!(form.people_input.is_empty());
    }

    #[test]
    fn test_people_buffer_shows_clamped_count() {
        let mut form = FormState::new();

        form.people_input = "0".to_string();
        form.sync_people_input(NumericField::<u32>::parse_people(&form.people_input));
        assert_eq!(form.people_input, "1");

        form.people_input = "3.9".to_string();
        form.sync_people_input(NumericField::<u32>::parse_people(&form.people_input));
        assert_eq!(form.people_input, "3");

        form.people_input = "4".to_string();
        form.sync_people_input(NumericField::<u32>::parse_people(&form.people_input));
        assert_eq!(form.people_input, "4");
    }

    #[test]
    fn test_clear() {
        let mut form = FormState {
            time_input: "30".to_string(),
            people_input: "2".to_string(),
        };
        form.clear();
        assert_eq!(form, FormState::default());
    }
}
