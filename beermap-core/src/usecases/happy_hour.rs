use beermap_entities::time_of_day::TimeOfDay;

/// Whether a happy hour window that ends at `end` is still active at `now`.
///
/// The comparison is inclusive of the exact boundary instant and always
/// refers to `now`'s calendar date: an end time earlier than `now` means
/// the window has already lapsed today. Windows crossing midnight are not
/// modeled.
pub fn is_happy_hour_active(end: TimeOfDay, now: TimeOfDay) -> bool {
    now <= end
}
