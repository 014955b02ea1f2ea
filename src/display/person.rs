//! Person profile formatting

use chrono::NaiveDate;

use crate::models::Person;

/// Format the person profile, with age as of `today`
pub fn format_person_details(person: &Person, today: NaiveDate, date_format: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!("Person: {}\n", person.full_name()));
    output.push_str(&format!("  ID:         {}\n", person.id));
    output.push_str(&format!(
        "  Birth date: {} (age {})\n",
        person.birth_date.format(date_format),
        age_on(person.birth_date, today)
    ));
    match &person.photo {
        Some(photo) => output.push_str(&format!("  Photo:      {}\n", photo)),
        None => output.push_str("  Photo:      (none)\n"),
    }

    output
}

/// Completed years between `birth_date` and `today`
pub fn age_on(birth_date: NaiveDate, today: NaiveDate) -> u32 {
    today.years_since(birth_date).unwrap_or(0)
}
