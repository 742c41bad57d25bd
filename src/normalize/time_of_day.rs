use crate::domain::TimeOfDay;

/// Bucket a start hour (0-23, as written in the movetext)
pub fn bucket_hour(hour: u32) -> TimeOfDay {
    match hour {
        5..=11 => TimeOfDay::Morning,
        12..=17 => TimeOfDay::Afternoon,
        _ => TimeOfDay::Evening,
    }
}
